/// Longest sine table generated for a tone, in samples.
pub const MAX_TONE_TABLE_LEN: usize = 100;

/// Highest sample rate the speaker output can be driven at, in Hz.
pub const MAX_SAMPLE_RATE: u32 = 350_000;

/// Peak deviation of the tone waveform from its midpoint (2^15 - 1).
pub const TONE_VOLUME: u16 = (1 << 15) - 1;

/// Midpoint of the unsigned tone waveform (2^15).
pub const TONE_BIAS: u16 = 1 << 15;

/// Number of microphone samples captured per sound level reading.
pub const SOUND_BLOCK_SAMPLES: usize = 160;

/// PDM microphone sample rate in Hz.
pub const MIC_SAMPLE_RATE: u32 = 16_000;

/// Sound level above which [`loud_sound()`](crate::audio::LoudnessMeter::loud_sound) reports `true`.
pub const DEFAULT_LOUD_THRESHOLD: f32 = 200.0;

/// Standard sea level pressure in hPa.
pub const STANDARD_SEA_LEVEL_PRESSURE: f32 = 1013.25;

/// Number of capacitive touch pads (D0, D1, D2).
pub const TOUCH_PAD_COUNT: usize = 3;
