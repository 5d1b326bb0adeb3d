//! Mock speaker, microphone and delay shared by the audio and board tests.

use embedded_hal::delay::DelayNs;

use crate::constants::MAX_TONE_TABLE_LEN;
use crate::device::{PeriodicOutput, SampleSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl core::fmt::Display for MockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "mock device failure")
    }
}

// ── Speaker ─────────────────────────────────────────────────────────

/// Records every call made by a tone generator.
pub struct MockSpeaker {
    pub playing: bool,
    pub looping: bool,
    pub sample_rate: u32,
    /// Copy of the waveform passed to the last `play()`.
    pub waveform: [u16; MAX_TONE_TABLE_LEN],
    pub waveform_len: usize,
    pub play_calls: usize,
    pub set_rate_calls: usize,
    pub stop_calls: usize,
    pub release_calls: usize,
    pub fail_play: bool,
    pub fail_set_rate: bool,
    pub fail_stop: bool,
    pub fail_release: bool,
}

impl MockSpeaker {
    pub fn new() -> Self {
        Self {
            playing: false,
            looping: false,
            sample_rate: 0,
            waveform: [0; MAX_TONE_TABLE_LEN],
            waveform_len: 0,
            play_calls: 0,
            set_rate_calls: 0,
            stop_calls: 0,
            release_calls: 0,
            fail_play: false,
            fail_set_rate: false,
            fail_stop: false,
            fail_release: false,
        }
    }

    pub fn waveform(&self) -> &[u16] {
        &self.waveform[..self.waveform_len]
    }
}

impl PeriodicOutput for MockSpeaker {
    type Error = MockError;

    fn play(&mut self, waveform: &[u16], sample_rate: u32, looping: bool) -> Result<(), MockError> {
        self.play_calls += 1;
        if self.fail_play {
            return Err(MockError);
        }
        self.waveform[..waveform.len()].copy_from_slice(waveform);
        self.waveform_len = waveform.len();
        self.sample_rate = sample_rate;
        self.looping = looping;
        self.playing = true;
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn set_sample_rate(&mut self, sample_rate: u32) -> Result<(), MockError> {
        self.set_rate_calls += 1;
        if self.fail_set_rate {
            return Err(MockError);
        }
        self.sample_rate = sample_rate;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), MockError> {
        self.stop_calls += 1;
        if self.fail_stop {
            return Err(MockError);
        }
        self.playing = false;
        Ok(())
    }

    fn release(&mut self) -> Result<(), MockError> {
        self.release_calls += 1;
        if self.fail_release {
            return Err(MockError);
        }
        self.playing = false;
        Ok(())
    }
}

// ── Microphone ──────────────────────────────────────────────────────

/// Replays a fixed pattern of samples, repeating it to fill the buffer.
pub struct MockMic {
    pattern: [u16; 8],
    pattern_len: usize,
    pub record_calls: usize,
    /// Number of samples to leave unwritten at the end of each capture.
    pub short_by: usize,
    pub fail: bool,
}

impl MockMic {
    pub fn constant(value: u16) -> Self {
        Self::pattern(&[value])
    }

    pub fn alternating(low: u16, high: u16) -> Self {
        Self::pattern(&[low, high])
    }

    pub fn pattern(values: &[u16]) -> Self {
        let mut pattern = [0u16; 8];
        pattern[..values.len()].copy_from_slice(values);
        Self {
            pattern,
            pattern_len: values.len(),
            record_calls: 0,
            short_by: 0,
            fail: false,
        }
    }

    pub fn set_pattern(&mut self, values: &[u16]) {
        self.pattern[..values.len()].copy_from_slice(values);
        self.pattern_len = values.len();
    }
}

impl SampleSource for MockMic {
    type Error = MockError;

    fn record(&mut self, buffer: &mut [u16]) -> Result<usize, MockError> {
        self.record_calls += 1;
        if self.fail {
            return Err(MockError);
        }
        let count = buffer.len().saturating_sub(self.short_by);
        for (i, sample) in buffer[..count].iter_mut().enumerate() {
            *sample = self.pattern[i % self.pattern_len];
        }
        Ok(count)
    }
}

// ── Delay ───────────────────────────────────────────────────────────

/// Accumulates requested delay instead of sleeping.
pub struct MockDelay {
    pub total_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self { total_ns: 0 }
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
