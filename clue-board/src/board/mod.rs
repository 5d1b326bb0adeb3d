//! The CLUE board facade.
//!
//! [`Board`] gathers every peripheral behind one object. It is built
//! explicitly from a [`BoardParts`] value holding already-initialized
//! drivers; nothing is constructed behind the caller's back.
//!
//! ```ignore
//! let mut clue = Board::<Clue>::new(parts, BoardConfig::default());
//! clue.set_sea_level_pressure(1015.0);
//! loop {
//!     if clue.button_a()? {
//!         clue.start_tone(523)?;
//!     } else {
//!         clue.stop_tone()?;
//!     }
//!     let Vector3 { x, y, .. } = clue.acceleration()?;
//! }
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, PinState, StatefulOutputPin};
use smart_leds_trait::{SmartLedsWrite, RGB8};

use crate::audio::{LoudnessMeter, ToneConfig, ToneGenerator};
use crate::buttons::{ButtonSet, Buttons};
use crate::constants::TOUCH_PAD_COUNT;
use crate::device::{PeriodicOutput, SampleSource};
use crate::error::Error;
use crate::sensors::{
    Color, Gesture, HumiditySensor, LightSensor, Magnetometer, MotionSensor, PressureSensor,
    Vector3,
};
use crate::touch::{TouchInput, TouchPad, TouchPin};


/// Concrete driver types for one board build.
pub trait BoardTypes {
    type Button: InputPin;
    type Led: StatefulOutputPin;
    type Pixel: SmartLedsWrite<Color = RGB8>;
    type Motion: MotionSensor;
    type Magnetometer: Magnetometer;
    type Light: LightSensor;
    type Humidity: HumiditySensor;
    type Pressure: PressureSensor;
    type Touch: TouchPin;
    type Speaker: PeriodicOutput;
    type Mic: SampleSource;
}

/// Initialized peripherals handed to [`Board::new`].
pub struct BoardParts<T: BoardTypes> {
    pub button_a: T::Button,
    pub button_b: T::Button,
    pub white_leds: T::Led,
    pub red_led: T::Led,
    pub pixel: T::Pixel,
    pub motion: T::Motion,
    pub magnetometer: T::Magnetometer,
    pub light: T::Light,
    pub humidity: T::Humidity,
    pub pressure: T::Pressure,
    /// Pins for pads D0, D1, D2.
    pub touch_pads: [T::Touch; TOUCH_PAD_COUNT],
    pub speaker: T::Speaker,
    pub mic: T::Mic,
}

/// Board-level settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Added to each touch pad's calibrated threshold when it is activated.
    pub touch_threshold_adjustment: i32,
    /// Sea level pressure (hPa) to program into the barometer, if any.
    pub sea_level_pressure: Option<f32>,
    pub tone: ToneConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            touch_threshold_adjustment: 0,
            sea_level_pressure: None,
            tone: ToneConfig::default(),
        }
    }
}

/// Capacitive touch pad on the edge connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pad {
    D0 = 0,
    D1 = 1,
    D2 = 2,
}

type PinError<P> = <P as ErrorType>::Error;
type TouchError<P> = <<P as TouchPin>::Input as TouchInput>::Error;
type ToneError<T> = Error<<<T as BoardTypes>::Speaker as PeriodicOutput>::Error>;
type MicError<T> = Error<<<T as BoardTypes>::Mic as SampleSource>::Error>;

/// Every CLUE peripheral behind one object.
pub struct Board<T: BoardTypes> {
    buttons: Buttons<T::Button>,
    touch_pads: [TouchPad<T::Touch>; TOUCH_PAD_COUNT],
    white_leds: T::Led,
    red_led: T::Led,
    pixel: T::Pixel,
    motion: T::Motion,
    magnetometer: T::Magnetometer,
    light: T::Light,
    humidity: T::Humidity,
    pressure: T::Pressure,
    tone: ToneGenerator<T::Speaker>,
    meter: LoudnessMeter<T::Mic>,
}

impl<T: BoardTypes> Board<T> {
    pub fn new(parts: BoardParts<T>, config: BoardConfig) -> Self {
        let adjustment = config.touch_threshold_adjustment;
        let mut pressure = parts.pressure;
        if let Some(hpa) = config.sea_level_pressure {
            pressure.set_sea_level_pressure(hpa);
        }

        Self {
            buttons: Buttons::new(parts.button_a, parts.button_b),
            touch_pads: parts.touch_pads.map(|pin| TouchPad::new(pin, adjustment)),
            white_leds: parts.white_leds,
            red_led: parts.red_led,
            pixel: parts.pixel,
            motion: parts.motion,
            magnetometer: parts.magnetometer,
            light: parts.light,
            humidity: parts.humidity,
            pressure,
            tone: ToneGenerator::new_with_config(parts.speaker, config.tone),
            meter: LoudnessMeter::new(parts.mic),
        }
    }

    // ── Buttons ────────────────────────────────────────────────────────

    /// `true` while button A is pressed.
    pub fn button_a(&mut self) -> Result<bool, PinError<T::Button>> {
        self.buttons.a()
    }

    /// `true` while button B is pressed.
    pub fn button_b(&mut self) -> Result<bool, PinError<T::Button>> {
        self.buttons.b()
    }

    /// Buttons pressed since the last call.
    pub fn were_pressed(&mut self) -> Result<ButtonSet, PinError<T::Button>> {
        self.buttons.were_pressed()
    }

    /// Latch currently pressed buttons for the next [`were_pressed()`](Self::were_pressed).
    pub fn scan_buttons(&mut self) -> Result<ButtonSet, PinError<T::Button>> {
        self.buttons.scan()
    }

    // ── Touch ──────────────────────────────────────────────────────────

    /// Whether `pad` is touched. The pad is activated on its first read.
    pub fn touch(&mut self, pad: Pad) -> Result<bool, TouchError<T::Touch>> {
        self.touch_pads[pad as usize].is_touched()
    }

    pub fn touch_0(&mut self) -> Result<bool, TouchError<T::Touch>> {
        self.touch(Pad::D0)
    }

    pub fn touch_1(&mut self) -> Result<bool, TouchError<T::Touch>> {
        self.touch(Pad::D1)
    }

    pub fn touch_2(&mut self) -> Result<bool, TouchError<T::Touch>> {
        self.touch(Pad::D2)
    }

    pub fn touch_pad(&self, pad: Pad) -> &TouchPad<T::Touch> {
        &self.touch_pads[pad as usize]
    }

    // ── Motion and magnetic field ──────────────────────────────────────

    /// Acceleration on x, y, z in m/s².
    pub fn acceleration(&mut self) -> Result<Vector3, <T::Motion as MotionSensor>::Error> {
        self.motion.acceleration()
    }

    /// Angular velocity on x, y, z in degrees/second.
    pub fn gyro(&mut self) -> Result<Vector3, <T::Motion as MotionSensor>::Error> {
        self.motion.gyro()
    }

    /// Magnetic field on x, y, z in microteslas.
    pub fn magnetic(&mut self) -> Result<Vector3, <T::Magnetometer as Magnetometer>::Error> {
        self.magnetometer.magnetic()
    }

    // ── Light sensor ───────────────────────────────────────────────────

    /// Relative proximity, 0 to 255.
    pub fn proximity(&mut self) -> Result<u8, <T::Light as LightSensor>::Error> {
        self.light.proximity()
    }

    pub fn color(&mut self) -> Result<Color, <T::Light as LightSensor>::Error> {
        self.light.color()
    }

    pub fn gesture(&mut self) -> Result<Gesture, <T::Light as LightSensor>::Error> {
        self.light.gesture()
    }

    // ── Environment ────────────────────────────────────────────────────

    /// Relative humidity in percent.
    pub fn humidity(&mut self) -> Result<f32, <T::Humidity as HumiditySensor>::Error> {
        self.humidity.relative_humidity()
    }

    /// Barometric pressure in hPa.
    pub fn pressure(&mut self) -> Result<f32, <T::Pressure as PressureSensor>::Error> {
        self.pressure.pressure()
    }

    /// Temperature in °C (from the barometer).
    pub fn temperature(&mut self) -> Result<f32, <T::Pressure as PressureSensor>::Error> {
        self.pressure.temperature()
    }

    /// Altitude in meters. Set [`sea_level_pressure`](Self::set_sea_level_pressure)
    /// for the current location first.
    pub fn altitude(&mut self) -> Result<f32, <T::Pressure as PressureSensor>::Error> {
        self.pressure.altitude()
    }

    pub fn sea_level_pressure(&self) -> f32 {
        self.pressure.sea_level_pressure()
    }

    pub fn set_sea_level_pressure(&mut self, hpa: f32) {
        self.pressure.set_sea_level_pressure(hpa);
    }

    // ── LEDs ───────────────────────────────────────────────────────────

    pub fn white_leds(&mut self) -> Result<bool, PinError<T::Led>> {
        self.white_leds.is_set_high()
    }

    pub fn set_white_leds(&mut self, on: bool) -> Result<(), PinError<T::Led>> {
        self.white_leds.set_state(PinState::from(on))
    }

    /// The red LED next to the USB connector.
    pub fn red_led(&mut self) -> Result<bool, PinError<T::Led>> {
        self.red_led.is_set_high()
    }

    pub fn set_red_led(&mut self, on: bool) -> Result<(), PinError<T::Led>> {
        self.red_led.set_state(PinState::from(on))
    }

    /// The NeoPixel driver.
    pub fn pixel(&mut self) -> &mut T::Pixel {
        &mut self.pixel
    }

    /// Set the NeoPixel to `color`.
    pub fn set_pixel(&mut self, color: RGB8) -> Result<(), <T::Pixel as SmartLedsWrite>::Error> {
        self.pixel.write(core::iter::once(color))
    }

    // ── Audio ──────────────────────────────────────────────────────────

    /// See [`ToneGenerator::start_tone`].
    pub fn start_tone(&mut self, frequency: u32) -> Result<(), ToneError<T>> {
        self.tone.start_tone(frequency)
    }

    /// See [`ToneGenerator::stop_tone`].
    pub fn stop_tone(&mut self) -> Result<(), ToneError<T>> {
        self.tone.stop_tone()
    }

    /// See [`ToneGenerator::play_tone`].
    pub fn play_tone<D: DelayNs>(
        &mut self,
        frequency: u32,
        duration_ms: u32,
        delay: &mut D,
    ) -> Result<(), ToneError<T>> {
        self.tone.play_tone(frequency, duration_ms, delay)
    }

    /// See [`LoudnessMeter::sound_level`].
    pub fn sound_level(&mut self) -> Result<f32, MicError<T>> {
        self.meter.sound_level()
    }

    /// `true` when the sound level exceeds `threshold` (200 is a good start).
    pub fn loud_sound(&mut self, threshold: f32) -> Result<bool, MicError<T>> {
        self.meter.is_loud(threshold)
    }

    pub fn tone(&mut self) -> &mut ToneGenerator<T::Speaker> {
        &mut self.tone
    }

    pub fn meter(&mut self) -> &mut LoudnessMeter<T::Mic> {
        &mut self.meter
    }
}
