//! Clock configuration trait and implementations
//!
//! This module defines the ClockConfig trait that allows users to configure
//! clock limits at compile time.

/// Clock configuration trait for compile-time tuning
///
/// All limits are associated constants so a clock's behavior is fixed by its
/// type and costs nothing to look up on the hot path.
pub trait ClockConfig {
    /// Highest value the logical counter may reach before the clock reports
    /// [`ClockError::LogicalOverflow`](crate::error::ClockError::LogicalOverflow)
    const MAX_LOGICAL: u64;

    /// How far, in milliseconds, a remote physical time may run ahead of the
    /// local wall clock before `update_checked` rejects it.
    /// `u64::MAX` disables the guard.
    const MAX_FORWARD_DRIFT_MILLIS: u64;

    /// Validates that the configuration is consistent and within bounds
    fn validate() -> Result<(), &'static str> {
        if Self::MAX_LOGICAL == 0 {
            return Err("MAX_LOGICAL must allow at least one tie-break");
        }

        if Self::MAX_FORWARD_DRIFT_MILLIS == 0 {
            return Err("MAX_FORWARD_DRIFT_MILLIS of zero rejects every clock that is even 1ms ahead");
        }

        Ok(())
    }

    /// Returns true if remote timestamps are checked against the wall clock
    fn drift_guarded() -> bool {
        Self::MAX_FORWARD_DRIFT_MILLIS != u64::MAX
    }
}

/// Default configuration: full 64-bit logical range, no drift guard
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfig;

impl ClockConfig for DefaultConfig {
    const MAX_LOGICAL: u64 = u64::MAX;
    const MAX_FORWARD_DRIFT_MILLIS: u64 = u64::MAX;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validation() {
        assert!(DefaultConfig::validate().is_ok());
    }

    #[test]
    fn test_default_config_is_unguarded() {
        assert!(!DefaultConfig::drift_guarded());
        assert_eq!(DefaultConfig::MAX_LOGICAL, u64::MAX);
    }
}
