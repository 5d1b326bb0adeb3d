//! Sine tone output through a looping sample device.
//!
//! A single period of a sine wave is generated into a [`WaveformTable`] and
//! looped by the speaker at `table_len * frequency` Hz. The table is at most
//! 100 samples long but shrinks for high frequencies so the sample rate stays
//! under the device ceiling.

use embedded_hal::delay::DelayNs;

use crate::constants::{MAX_SAMPLE_RATE, MAX_TONE_TABLE_LEN};
use crate::device::PeriodicOutput;
use crate::dsp::WaveformTable;
use crate::error::{Error, InvalidArgument};

/// Tone generator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneConfig {
    /// Highest sample rate the output accepts, in Hz.
    pub max_sample_rate: u32,
    /// Preferred table length; clamped to `1..=MAX_TONE_TABLE_LEN`.
    pub table_len: usize,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            max_sample_rate: MAX_SAMPLE_RATE,
            table_len: MAX_TONE_TABLE_LEN,
        }
    }
}

/// A sounding tone: the table being looped and its current rate.
struct PlaybackSession {
    table: WaveformTable,
    sample_rate: u32,
}

/// Speaker tone generator.
///
/// Owns the output device and, while a tone is sounding, the waveform table.
///
/// # Example
/// ```ignore
/// let mut tone = ToneGenerator::new(speaker);
/// loop {
///     if button_a { tone.start_tone(523)?; }
///     else if button_b { tone.start_tone(587)?; }
///     else { tone.stop_tone()?; }
/// }
/// ```
pub struct ToneGenerator<O> {
    output: O,
    config: ToneConfig,
    session: Option<PlaybackSession>,
}

impl<O> ToneGenerator<O>
where
    O: PeriodicOutput,
{
    /// Create a generator with the default 100-sample table and 350 kHz ceiling.
    pub fn new(output: O) -> Self {
        Self::new_with_config(output, ToneConfig::default())
    }

    /// Create a generator with custom limits.
    pub fn new_with_config(output: O, config: ToneConfig) -> Self {
        let config = ToneConfig {
            table_len: config.table_len.clamp(1, MAX_TONE_TABLE_LEN),
            ..config
        };
        Self {
            output,
            config,
            session: None,
        }
    }

    /// Table length used for a new session at `frequency` Hz:
    /// `min(table_len, max_sample_rate / frequency)`.
    ///
    /// Zero when `frequency` is above the ceiling (or zero).
    pub fn table_len_for(&self, frequency: u32) -> usize {
        if frequency == 0 {
            return 0;
        }
        let fit = (self.config.max_sample_rate / frequency) as usize;
        fit.min(self.config.table_len)
    }

    /// Start a continuous tone, or retune the one already sounding.
    ///
    /// On the first call a table is generated and looped. While a tone is
    /// sounding only the sample rate changes: the table is kept as is.
    ///
    /// Fails with [`InvalidArgument`] for 0 Hz or for a frequency whose
    /// sample rate would exceed the ceiling; a tone already sounding is left
    /// untouched in that case.
    pub fn start_tone(&mut self, frequency: u32) -> Result<(), Error<O::Error>> {
        if frequency == 0 {
            return Err(InvalidArgument::ZeroFrequency.into());
        }
        let max_rate = self.config.max_sample_rate;

        if let Some(session) = self.session.as_mut() {
            let rate = (session.table.len() as u32)
                .checked_mul(frequency)
                .filter(|&r| r <= max_rate)
                .ok_or(InvalidArgument::FrequencyOutOfRange(frequency))?;

            if self.output.is_playing() {
                self.output.set_sample_rate(rate).map_err(Error::Device)?;
            } else {
                self.output
                    .play(session.table.as_slice(), rate, true)
                    .map_err(Error::Device)?;
            }
            session.sample_rate = rate;

            #[cfg(feature = "defmt")]
            defmt::trace!("tone: retune to {} Hz ({} Hz sample rate)", frequency, rate);
            return Ok(());
        }

        let len = self.table_len_for(frequency);
        if len == 0 {
            return Err(InvalidArgument::FrequencyOutOfRange(frequency).into());
        }
        let table = WaveformTable::sine(len);
        let rate = len as u32 * frequency;

        // No session is recorded unless playback actually starts.
        self.output
            .play(table.as_slice(), rate, true)
            .map_err(Error::Device)?;
        self.session = Some(PlaybackSession {
            table,
            sample_rate: rate,
        });

        #[cfg(feature = "defmt")]
        defmt::debug!("tone: start {} Hz, {} samples at {} Hz", frequency, len, rate);
        Ok(())
    }

    /// Stop the tone and release the speaker.
    ///
    /// Does nothing when no tone is sounding, so it can be called on every
    /// pass of a polling loop. If the device fails, the session is kept and
    /// the call may be repeated.
    pub fn stop_tone(&mut self) -> Result<(), Error<O::Error>> {
        if self.session.is_none() {
            return Ok(());
        }
        if self.output.is_playing() {
            self.output.stop().map_err(Error::Device)?;
        }
        self.output.release().map_err(Error::Device)?;
        self.session = None;

        #[cfg(feature = "defmt")]
        defmt::debug!("tone: stop");
        Ok(())
    }

    /// Play a tone for `duration_ms` milliseconds, blocking on `delay`.
    pub fn play_tone<D: DelayNs>(
        &mut self,
        frequency: u32,
        duration_ms: u32,
        delay: &mut D,
    ) -> Result<(), Error<O::Error>> {
        self.start_tone(frequency)?;
        delay.delay_ms(duration_ms);
        self.stop_tone()
    }

    /// Whether a tone is currently sounding.
    pub fn is_playing(&self) -> bool {
        self.session.is_some()
    }

    /// Sample rate of the sounding tone, in Hz.
    pub fn sample_rate(&self) -> Option<u32> {
        self.session.as_ref().map(|s| s.sample_rate)
    }

    /// The table being looped, if a tone is sounding.
    pub fn waveform(&self) -> Option<&[u16]> {
        self.session.as_ref().map(|s| s.table.as_slice())
    }

    /// Active configuration (after clamping).
    pub fn config(&self) -> &ToneConfig {
        &self.config
    }

    /// Borrow the output device.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Consume the generator and return the output device.
    ///
    /// Any sounding tone is left to the device; call
    /// [`stop_tone()`](Self::stop_tone) first to silence it.
    pub fn release(self) -> O {
        self.output
    }
}
