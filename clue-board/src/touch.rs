//! Capacitive touch pads with lazy activation.
//!
//! A pad starts out holding only its pin. The first read turns the pin into a
//! touch input (which calibrates its threshold against the untouched pad) and
//! applies the board's threshold adjustment. Pads that are never read never
//! claim their pin.

/// An active capacitive touch input.
pub trait TouchInput {
    type Error;

    /// Whether the pad is currently touched.
    fn is_touched(&mut self) -> Result<bool, Self::Error>;

    /// Raw charge-time threshold above which the pad reads as touched.
    fn threshold(&self) -> u16;

    fn set_threshold(&mut self, threshold: u16);
}

/// A pin that can be turned into a [`TouchInput`].
pub trait TouchPin {
    type Input: TouchInput;

    fn into_touch_input(self) -> Self::Input;
}

/// Configuration stage of a touch pad.
pub enum TouchState<P: TouchPin> {
    /// Not read yet; holds the pin.
    Unconfigured(P),
    /// Activated on first read.
    Active(P::Input),
}

/// One touch pad, activated on first read.
pub struct TouchPad<P: TouchPin> {
    // Only `None` for the duration of `activate()`.
    state: Option<TouchState<P>>,
    threshold_adjustment: i32,
}

impl<P: TouchPin> TouchPad<P> {
    /// Wrap `pin`. `threshold_adjustment` is added to the calibrated
    /// threshold on activation; positive values make the pad less sensitive.
    pub fn new(pin: P, threshold_adjustment: i32) -> Self {
        Self {
            state: Some(TouchState::Unconfigured(pin)),
            threshold_adjustment,
        }
    }

    /// Whether the pad has been read at least once.
    pub fn is_active(&self) -> bool {
        matches!(self.state, Some(TouchState::Active(_)))
    }

    /// The active input, if the pad has been read.
    pub fn input(&self) -> Option<&P::Input> {
        match &self.state {
            Some(TouchState::Active(input)) => Some(input),
            _ => None,
        }
    }

    /// Current stage.
    pub fn state(&self) -> &TouchState<P> {
        match &self.state {
            Some(state) => state,
            None => unreachable!("touch pad state taken outside activate()"),
        }
    }

    /// Read the pad, activating it first if needed.
    pub fn is_touched(&mut self) -> Result<bool, <P::Input as TouchInput>::Error> {
        self.activate();
        match &mut self.state {
            Some(TouchState::Active(input)) => input.is_touched(),
            _ => unreachable!("touch pad not active after activate()"),
        }
    }

    fn activate(&mut self) {
        let adjustment = self.threshold_adjustment;
        self.state = self.state.take().map(|state| match state {
            TouchState::Unconfigured(pin) => {
                let mut input = pin.into_touch_input();
                input.set_threshold(adjust_threshold(input.threshold(), adjustment));

                #[cfg(feature = "defmt")]
                defmt::debug!("touch: activated, threshold {}", input.threshold());
                TouchState::Active(input)
            }
            active => active,
        });
    }
}

/// `threshold + adjustment`, saturated to the `u16` range.
fn adjust_threshold(threshold: u16, adjustment: i32) -> u16 {
    (threshold as i32)
        .saturating_add(adjustment)
        .clamp(0, u16::MAX as i32) as u16
}
