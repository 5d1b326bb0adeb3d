//! # clue-board
//!
//! A `no_std`, allocation-free board support crate for the
//! [Adafruit CLUE](https://www.adafruit.com/product/4500) (nRF52840). Every
//! sensor, LED, button, touch pad, the speaker and the microphone are reached
//! through one [`Board`](board::Board) object, built explicitly from
//! already-initialized drivers.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Traits | [`device`] / [`sensors`] / [`touch`] | Narrow interfaces the drivers implement |
//! | Audio | [`audio`] | Tone generator and sound level meter |
//! | DSP | [`dsp`] | Sine table synthesis, RMS |
//! | Inputs | [`buttons`] / [`touch`] | Active-low buttons with latching, lazy touch pads |
//! | Facade | [`board`] | [`Board`](board::Board), [`BoardParts`](board::BoardParts), [`BoardConfig`](board::BoardConfig) |
//!
//! Digital pins and delays come from `embedded-hal` 1.0; the NeoPixel is any
//! `smart-leds-trait` writer.
//!
//! ## Quick start
//!
//! ```ignore
//! use clue_board::board::{Board, BoardConfig};
//!
//! let mut clue = Board::<Clue>::new(parts, BoardConfig::default());
//!
//! loop {
//!     if clue.button_a()? {
//!         clue.start_tone(523)?;
//!     } else if clue.button_b()? {
//!         clue.start_tone(587)?;
//!     } else {
//!         clue.stop_tone()?;
//!     }
//!
//!     if clue.loud_sound(200.0)? {
//!         clue.set_pixel(RGB8::new(0, 50, 0))?;
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `defmt` | no | `defmt::Format` on public types, trace logging in audio and touch |
//!
//! ## Audio parameters
//!
//! - **Tone table:** up to 100 samples ([`constants::MAX_TONE_TABLE_LEN`])
//! - **Output ceiling:** 350 000 Hz ([`constants::MAX_SAMPLE_RATE`])
//! - **Microphone block:** 160 samples ([`constants::SOUND_BLOCK_SAMPLES`])
//! - **Sample format:** `u16` (unsigned 16-bit)

#![no_std]

pub mod constants;
pub mod error;
pub mod device;
pub mod dsp;
pub mod audio;
pub mod sensors;
pub mod touch;
pub mod buttons;
pub mod board;

pub use audio::{LoudnessMeter, ToneConfig, ToneGenerator};
pub use board::{Board, BoardConfig, BoardParts, BoardTypes, Pad};
pub use error::{Error, InvalidArgument};
