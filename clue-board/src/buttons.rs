//! Buttons A and B.
//!
//! Both buttons are wired to ground with internal pull-ups, so a pressed
//! button reads low.

use bitflags::bitflags;
use embedded_hal::digital::InputPin;

bitflags! {
    /// Set of buttons.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ButtonSet: u8 {
        const A = 0x01;
        const B = 0x02;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ButtonSet {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ButtonSet({=u8:#x})", self.bits())
    }
}

/// The two user buttons, with press latching.
///
/// Presses seen by [`scan()`](Self::scan) are remembered until the next
/// [`were_pressed()`](Self::were_pressed), so a short press between two
/// polls is not lost as long as something scans in between.
pub struct Buttons<B> {
    a: B,
    b: B,
    latched: ButtonSet,
}

impl<B> Buttons<B>
where
    B: InputPin,
{
    pub fn new(a: B, b: B) -> Self {
        Self {
            a,
            b,
            latched: ButtonSet::empty(),
        }
    }

    /// `true` while button A is held down.
    pub fn a(&mut self) -> Result<bool, B::Error> {
        self.a.is_low()
    }

    /// `true` while button B is held down.
    pub fn b(&mut self) -> Result<bool, B::Error> {
        self.b.is_low()
    }

    /// Buttons held down right now.
    pub fn pressed(&mut self) -> Result<ButtonSet, B::Error> {
        let mut set = ButtonSet::empty();
        set.set(ButtonSet::A, self.a()?);
        set.set(ButtonSet::B, self.b()?);
        Ok(set)
    }

    /// Sample both buttons and latch any that are down.
    pub fn scan(&mut self) -> Result<ButtonSet, B::Error> {
        let now = self.pressed()?;
        self.latched |= now;
        Ok(now)
    }

    /// Buttons pressed since the previous call (including those held now).
    pub fn were_pressed(&mut self) -> Result<ButtonSet, B::Error> {
        self.scan()?;
        Ok(core::mem::take(&mut self.latched))
    }

    pub fn release(self) -> (B, B) {
        (self.a, self.b)
    }
}
