//! Core error types for hlclock
//!
//! This module defines the main error type used throughout the library.

use core::fmt;

/// Main error type for clock and codec operations
///
/// Clock operations are infallible in normal use; the variants here cover
/// input validation at the codec boundary and the guarded paths
/// (`try_now`, `try_update`, `update_checked`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    // Codec errors
    /// Input buffer does not have the fixed timestamp width
    InvalidLength {
        /// Required length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },
    /// Output buffer cannot hold an encoded timestamp
    BufferTooSmall {
        /// Required length in bytes
        required: usize,
        /// Length of the supplied buffer
        actual: usize,
    },
    /// Text form is not `physical:logical`
    InvalidFormat,

    // Clock errors
    /// The logical counter would pass its configured ceiling
    LogicalOverflow {
        /// Physical component the counter was pinned to
        physical: u64,
    },
    /// Remote timestamp is further ahead of the wall clock than allowed
    ClockSkew {
        /// Physical component of the rejected remote timestamp
        remote_physical: u64,
        /// Wall-clock reading at the time of the check
        wall_physical: u64,
        /// Configured forward drift bound in milliseconds
        max_drift: u64,
    },
}

impl ClockError {
    /// Returns true if the caller can retry or recover from this error
    ///
    /// Overflow of the logical counter breaks monotonicity and is never
    /// recoverable; everything else is a rejected input.
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::LogicalOverflow { .. } => false,

            Self::InvalidLength { .. }
            | Self::BufferTooSmall { .. }
            | Self::InvalidFormat
            | Self::ClockSkew { .. } => true,
        }
    }

    /// Returns true if this error was raised while encoding or decoding
    pub const fn is_codec_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength { .. } | Self::BufferTooSmall { .. } | Self::InvalidFormat
        )
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } | Self::BufferTooSmall { .. } | Self::InvalidFormat => {
                "Codec"
            }
            Self::LogicalOverflow { .. } | Self::ClockSkew { .. } => "Clock",
        }
    }
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid timestamp length: expected {expected} bytes, got {actual}")
            }
            Self::BufferTooSmall { required, actual } => {
                write!(f, "buffer too small: need {required} bytes, got {actual}")
            }
            Self::InvalidFormat => f.write_str("invalid timestamp format, expected `physical:logical`"),
            Self::LogicalOverflow { physical } => {
                write!(f, "logical counter overflow at physical time {physical}")
            }
            Self::ClockSkew {
                remote_physical,
                wall_physical,
                max_drift,
            } => write!(
                f,
                "remote physical time {remote_physical} is more than {max_drift}ms ahead of wall clock {wall_physical}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClockError {}

/// Result type for clock operations
pub type ClockResult<T> = Result<T, ClockError>;
