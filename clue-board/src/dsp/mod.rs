//! Waveform synthesis and sample statistics.

pub mod helpers;
pub mod wavetable;

pub use helpers::{normalized_rms, truncated_mean};
pub use wavetable::WaveformTable;
