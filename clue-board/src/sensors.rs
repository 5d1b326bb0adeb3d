//! Sensor capability traits and reading types.
//!
//! Each I2C sensor on the CLUE is reached through one of these traits. The
//! board only forwards calls; bus access, mode switching and unit conversion
//! are the driver's job.
//!
//! | Trait | Part | Readings |
//! |-------|------|----------|
//! | [`MotionSensor`] | LSM6DS33 | acceleration (m/s²), angular rate (°/s) |
//! | [`Magnetometer`] | LIS3MDL | magnetic field (µT) |
//! | [`LightSensor`] | APDS9960 | proximity, color, gesture |
//! | [`HumiditySensor`] | SHT31-D | relative humidity (%) |
//! | [`PressureSensor`] | BMP280 | pressure (hPa), temperature (°C), altitude (m) |

/// Three-axis reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3> for (f32, f32, f32) {
    fn from(v: Vector3) -> Self {
        (v.x, v.y, v.z)
    }
}

/// Raw red, green, blue and clear channel counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub c: u16,
}

/// Gesture reported by the APDS9960.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Gesture {
    #[default]
    None = 0,
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
}

impl Gesture {
    /// Decode a driver gesture code; unknown codes read as [`Gesture::None`].
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Gesture::Up,
            2 => Gesture::Down,
            3 => Gesture::Left,
            4 => Gesture::Right,
            _ => Gesture::None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Accelerometer and gyroscope.
pub trait MotionSensor {
    type Error;

    /// Acceleration on x, y, z in m/s².
    fn acceleration(&mut self) -> Result<Vector3, Self::Error>;

    /// Angular velocity on x, y, z in degrees/second.
    fn gyro(&mut self) -> Result<Vector3, Self::Error>;
}

/// Three-axis magnetometer.
pub trait Magnetometer {
    type Error;

    /// Magnetic field on x, y, z in microteslas.
    fn magnetic(&mut self) -> Result<Vector3, Self::Error>;
}

/// Gesture, proximity and color sensor.
///
/// Implementations enable the relevant engine on first use of each reading.
pub trait LightSensor {
    type Error;

    /// Relative proximity, 0 (far) to 255 (near).
    fn proximity(&mut self) -> Result<u8, Self::Error>;

    fn color(&mut self) -> Result<Color, Self::Error>;

    /// Last detected gesture, [`Gesture::None`] if there was none.
    fn gesture(&mut self) -> Result<Gesture, Self::Error>;
}

/// Relative humidity sensor.
pub trait HumiditySensor {
    type Error;

    /// Relative humidity in percent.
    fn relative_humidity(&mut self) -> Result<f32, Self::Error>;
}

/// Barometric pressure and temperature sensor.
pub trait PressureSensor {
    type Error;

    /// Pressure in hPa.
    fn pressure(&mut self) -> Result<f32, Self::Error>;

    /// Temperature in °C.
    fn temperature(&mut self) -> Result<f32, Self::Error>;

    /// Reference pressure at sea level in hPa, used for altitude.
    fn sea_level_pressure(&self) -> f32;

    fn set_sea_level_pressure(&mut self, hpa: f32);

    /// Altitude in meters relative to [`sea_level_pressure()`](Self::sea_level_pressure).
    fn altitude(&mut self) -> Result<f32, Self::Error> {
        let pressure = self.pressure()?;
        Ok(altitude_from_pressure(pressure, self.sea_level_pressure()))
    }
}

/// International barometric formula: `44330 * (1 - (p / p0)^0.1903)`.
pub fn altitude_from_pressure(pressure_hpa: f32, sea_level_hpa: f32) -> f32 {
    44330.0 * (1.0 - libm::powf(pressure_hpa / sea_level_hpa, 0.1903))
}
