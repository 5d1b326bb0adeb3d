//! Error types for the audio subsystem.

/// Errors returned by [`ToneGenerator`](crate::audio::ToneGenerator) and
/// [`LoudnessMeter`](crate::audio::LoudnessMeter).
///
/// `E` is the error type of the underlying output or input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A caller-supplied argument was rejected before touching the device.
    InvalidArgument(InvalidArgument),
    /// The output or input device reported a failure.
    Device(E),
    /// The microphone returned fewer samples than requested.
    IncompleteCapture {
        /// Samples requested (the sample block length).
        expected: usize,
        /// Samples actually written by the device.
        recorded: usize,
    },
}

/// Reasons an argument is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidArgument {
    /// A tone frequency of 0 Hz was requested.
    ZeroFrequency,
    /// The frequency (Hz) cannot be produced without exceeding the maximum
    /// output sample rate.
    FrequencyOutOfRange(u32),
}

impl<E: core::fmt::Display> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidArgument(arg) => write!(f, "Invalid argument: {}", arg),
            Error::Device(err) => write!(f, "Audio device error: {}", err),
            Error::IncompleteCapture { expected, recorded } => {
                write!(f, "Incomplete capture: {} of {} samples", recorded, expected)
            }
        }
    }
}

impl core::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InvalidArgument::ZeroFrequency => write!(f, "frequency must be non-zero"),
            InvalidArgument::FrequencyOutOfRange(hz) => {
                write!(f, "frequency {} Hz exceeds the output sample rate", hz)
            }
        }
    }
}

impl<E> From<InvalidArgument> for Error<E> {
    fn from(e: InvalidArgument) -> Self {
        Error::InvalidArgument(e)
    }
}
