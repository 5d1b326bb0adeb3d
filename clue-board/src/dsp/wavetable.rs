//! Single-cycle sine table used for tone output.

use core::f64::consts::PI;

use crate::constants::{MAX_TONE_TABLE_LEN, TONE_BIAS, TONE_VOLUME};

/// One period of a sine wave biased into the unsigned 16-bit range.
///
/// Sample `i` of an `N`-entry table is
/// `TONE_VOLUME * sin(2π * i / N) + TONE_BIAS`, truncated toward zero.
/// Storage is inline; the table never allocates.
#[derive(Clone, PartialEq, Eq)]
pub struct WaveformTable {
    samples: [u16; MAX_TONE_TABLE_LEN],
    len: usize,
}

impl WaveformTable {
    /// Generate a table of `len` samples.
    ///
    /// `len` is clamped to `1..=MAX_TONE_TABLE_LEN`.
    pub fn sine(len: usize) -> Self {
        let len = len.clamp(1, MAX_TONE_TABLE_LEN);
        let mut samples = [0u16; MAX_TONE_TABLE_LEN];
        let volume = TONE_VOLUME as f64;
        let bias = TONE_BIAS as f64;
        for (i, sample) in samples[..len].iter_mut().enumerate() {
            let phase = 2.0 * PI * (i as f64 / len as f64);
            *sample = (volume * libm::sin(phase) + bias) as u16;
        }
        WaveformTable { samples, len }
    }

    /// Number of samples in one period.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a table holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The samples of one period.
    pub fn as_slice(&self) -> &[u16] {
        &self.samples[..self.len]
    }
}

impl core::ops::Deref for WaveformTable {
    type Target = [u16];

    fn deref(&self) -> &[u16] {
        self.as_slice()
    }
}

impl core::fmt::Debug for WaveformTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WaveformTable").field("len", &self.len).finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for WaveformTable {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "WaveformTable(len={})", self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_table_quadrants() {
        let table = WaveformTable::sine(100);
        assert_eq!(table.len(), 100);
        assert_eq!(table[0], 32768);
        assert_eq!(table[25], 65535);
        assert_eq!(table[75], 1);
        // sin(pi) is a hair above zero
        assert!((table[50] as i32 - 32768).abs() <= 1, "got {}", table[50]);
    }

    #[test]
    fn short_table() {
        let table = WaveformTable::sine(4);
        assert_eq!(table.as_slice(), &[32768, 65535, 32768, 1]);
    }

    #[test]
    fn length_is_clamped() {
        assert_eq!(WaveformTable::sine(0).len(), 1);
        assert_eq!(WaveformTable::sine(500).len(), MAX_TONE_TABLE_LEN);
        assert_eq!(WaveformTable::sine(0)[0], 32768);
    }

    #[test]
    fn samples_stay_in_range() {
        for len in [1, 3, 7, 70, 99, 100] {
            let table = WaveformTable::sine(len);
            for &s in table.iter() {
                assert!(s >= 1, "len {}: sample {} below range", len, s);
            }
        }
    }
}
