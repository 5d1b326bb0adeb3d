//! Microphone sound level meter.
//!
//! Each reading captures one fixed-size block from the microphone and reduces
//! it to the RMS deviation of the samples from their mean.

use crate::constants::{DEFAULT_LOUD_THRESHOLD, MIC_SAMPLE_RATE, SOUND_BLOCK_SAMPLES};
use crate::device::SampleSource;
use crate::dsp::normalized_rms;
use crate::error::Error;

/// Sound level meter over a block of `N` samples (160 by default).
///
/// The sample block is allocated once and overwritten by every capture.
///
/// # Example
/// ```ignore
/// let mut meter = LoudnessMeter::new(mic);
/// if meter.loud_sound()? {
///     pixel.write(once(RGB8::new(0, 50, 0)))?;
/// }
/// ```
pub struct LoudnessMeter<S, const N: usize = SOUND_BLOCK_SAMPLES> {
    source: S,
    samples: [u16; N],
}

impl<S> LoudnessMeter<S> {
    /// Create a meter capturing [`SOUND_BLOCK_SAMPLES`] samples per reading.
    pub fn new(source: S) -> Self {
        Self::new_with_block(source)
    }
}

impl<S, const N: usize> LoudnessMeter<S, N> {
    const NON_EMPTY: () = assert!(N > 0, "sample block must hold at least one sample");

    /// Create a meter capturing `N` samples per reading.
    pub fn new_with_block(source: S) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self {
            source,
            samples: [0; N],
        }
    }

    /// Samples captured per reading.
    pub const fn block_len(&self) -> usize {
        N
    }

    /// Time one capture takes at [`MIC_SAMPLE_RATE`], in microseconds.
    pub const fn block_duration_us(&self) -> u32 {
        (N as u64 * 1_000_000 / MIC_SAMPLE_RATE as u64) as u32
    }

    /// Borrow the sample source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consume the meter and return the sample source.
    pub fn release(self) -> S {
        self.source
    }
}

impl<S, const N: usize> LoudnessMeter<S, N>
where
    S: SampleSource,
{
    /// Capture one block and return its RMS level.
    ///
    /// A quiet room reads in the tens; a clap reads in the hundreds or more.
    /// Device failures and short captures are returned as errors, never as a
    /// level computed from a partial block.
    pub fn sound_level(&mut self) -> Result<f32, Error<S::Error>> {
        let recorded = self
            .source
            .record(&mut self.samples)
            .map_err(Error::Device)?;
        if recorded < N {
            return Err(Error::IncompleteCapture {
                expected: N,
                recorded,
            });
        }
        let level = normalized_rms(&self.samples);

        #[cfg(feature = "defmt")]
        defmt::trace!("mic: sound level {}", level);
        Ok(level)
    }

    /// `true` when a fresh [`sound_level()`](Self::sound_level) exceeds `threshold`.
    pub fn is_loud(&mut self, threshold: f32) -> Result<bool, Error<S::Error>> {
        Ok(self.sound_level()? > threshold)
    }

    /// [`is_loud()`](Self::is_loud) with the default threshold of 200.
    pub fn loud_sound(&mut self) -> Result<bool, Error<S::Error>> {
        self.is_loud(DEFAULT_LOUD_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::mock::{MockError, MockMic};

    #[test]
    fn default_block_len() {
        let meter = LoudnessMeter::new(MockMic::constant(0));
        assert_eq!(meter.block_len(), 160);
        // 10 ms of audio per reading
        assert_eq!(meter.block_duration_us(), 10_000);
    }

    #[test]
    fn constant_signal_is_silent() {
        let mut meter = LoudnessMeter::new(MockMic::constant(1000));
        assert_eq!(meter.sound_level().unwrap(), 0.0);
        assert_eq!(meter.source().record_calls, 1);
    }

    #[test]
    fn alternating_signal_level() {
        let mut meter = LoudnessMeter::new(MockMic::alternating(0, 2000));
        let level = meter.sound_level().unwrap();
        assert!((level - 1000.0).abs() < 0.001, "expected ~1000, got {}", level);
    }

    #[test]
    fn each_reading_captures_fresh_block() {
        let mut meter = LoudnessMeter::new(MockMic::alternating(0, 2000));
        assert!(meter.sound_level().unwrap() > 999.0);

        meter.source.set_pattern(&[500]);
        assert_eq!(meter.sound_level().unwrap(), 0.0);
        assert_eq!(meter.source().record_calls, 2);
    }

    #[test]
    fn is_loud_compares_against_threshold() {
        // Level is exactly 300
        let mut meter = LoudnessMeter::new(MockMic::alternating(1000, 1600));
        assert!(meter.is_loud(200.0).unwrap());
        assert!(meter.is_loud(299.0).unwrap());
        assert!(!meter.is_loud(300.0).unwrap());
        assert!(!meter.is_loud(400.0).unwrap());
    }

    #[test]
    fn loud_sound_uses_default_threshold() {
        let mut loud = LoudnessMeter::new(MockMic::alternating(0, 402));
        assert!(loud.loud_sound().unwrap());

        let mut quiet = LoudnessMeter::new(MockMic::alternating(0, 400));
        assert!(!quiet.loud_sound().unwrap());
    }

    #[test]
    fn device_error_propagates() {
        let mut mic = MockMic::constant(0);
        mic.fail = true;
        let mut meter = LoudnessMeter::new(mic);

        assert_eq!(meter.sound_level(), Err(Error::Device(MockError)));
        assert_eq!(meter.is_loud(0.0), Err(Error::Device(MockError)));
        // No retries
        assert_eq!(meter.source().record_calls, 2);
    }

    #[test]
    fn short_capture_is_an_error() {
        let mut mic = MockMic::alternating(0, 2000);
        mic.short_by = 10;
        let mut meter = LoudnessMeter::new(mic);

        assert_eq!(
            meter.sound_level(),
            Err(Error::IncompleteCapture {
                expected: 160,
                recorded: 150,
            })
        );
    }

    #[test]
    fn custom_block_len() {
        let mut meter = LoudnessMeter::<_, 16>::new_with_block(MockMic::pattern(&[0, 0, 0, 4]));
        assert_eq!(meter.block_len(), 16);
        assert_eq!(meter.block_duration_us(), 1_000);
        // mean 1; deviations 1,1,1,3 -> mean square 3
        let level = meter.sound_level().unwrap();
        let expected = libm::sqrt(3.0) as f32;
        assert!((level - expected).abs() < 1e-5, "expected {}, got {}", expected, level);
    }
}
