//! Speaker tone output and microphone sound level.
//!
//! | Component | Device trait | Operations |
//! |-----------|--------------|------------|
//! | [`ToneGenerator`] | [`PeriodicOutput`](crate::device::PeriodicOutput) | `start_tone`, `stop_tone`, `play_tone` |
//! | [`LoudnessMeter`] | [`SampleSource`](crate::device::SampleSource) | `sound_level`, `is_loud`, `loud_sound` |
//!
//! The two components are independent; the [`Board`](crate::board::Board)
//! holds one of each.

mod loudness;
mod tone;

#[cfg(test)]
pub(crate) mod mock;

pub use loudness::LoudnessMeter;
pub use tone::{ToneConfig, ToneGenerator};
