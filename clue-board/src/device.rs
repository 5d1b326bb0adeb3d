//! Device traits consumed by the audio subsystem.
//!
//! The board layer implements these for its speaker and microphone
//! peripherals; tests implement them with mocks.

/// An output that loops a table of unsigned 16-bit samples at a given rate
/// (PWM audio out on the CLUE speaker).
pub trait PeriodicOutput {
    /// Error type for device operations.
    type Error;

    /// Begin playing `waveform` at `sample_rate` Hz, repeating it forever
    /// when `looping` is set.
    fn play(&mut self, waveform: &[u16], sample_rate: u32, looping: bool) -> Result<(), Self::Error>;

    /// Whether the device is currently producing output.
    fn is_playing(&self) -> bool;

    /// Change the sample rate of the waveform being played.
    ///
    /// Must take effect at a table wrap so a running loop does not glitch.
    fn set_sample_rate(&mut self, sample_rate: u32) -> Result<(), Self::Error>;

    /// Halt playback.
    fn stop(&mut self) -> Result<(), Self::Error>;

    /// Power the output down. A later [`play()`](Self::play) re-acquires it.
    fn release(&mut self) -> Result<(), Self::Error>;
}

/// A synchronous source of unsigned 16-bit samples (PDM microphone, expected
/// to run at [`MIC_SAMPLE_RATE`](crate::constants::MIC_SAMPLE_RATE)).
pub trait SampleSource {
    /// Error type for capture operations.
    type Error;

    /// Fill `buffer` with consecutive samples, blocking until done.
    ///
    /// Returns the number of samples written.
    fn record(&mut self, buffer: &mut [u16]) -> Result<usize, Self::Error>;
}
