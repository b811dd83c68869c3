//! Physical time source trait definition
//!
//! This module defines the trait a hybrid clock uses to read wall-clock time.

/// Source of wall-clock readings for a hybrid clock
///
/// Readings are milliseconds since the UNIX epoch. They are not required to be
/// monotonic; the hybrid clock absorbs stalls and regressions in its logical
/// counter.
///
/// Implementations must be cheap and non-blocking, since they are read while
/// the clock's state is held.
pub trait PhysicalClock {
    /// Returns the current wall-clock reading in milliseconds
    fn now_millis(&self) -> u64;
}

impl<S: PhysicalClock + ?Sized> PhysicalClock for &S {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

#[cfg(feature = "std")]
impl<S: PhysicalClock + ?Sized> PhysicalClock for std::sync::Arc<S> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u64);

    impl PhysicalClock for Fixed {
        fn now_millis(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_reference_forwards() {
        let fixed = Fixed(1234);
        let by_ref = &fixed;
        assert_eq!(by_ref.now_millis(), 1234);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_arc_forwards() {
        let shared = std::sync::Arc::new(Fixed(99));
        assert_eq!(shared.now_millis(), 99);
    }
}
