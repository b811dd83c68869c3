//! Physical time sources
//!
//! [`SystemClock`] reads the operating system wall clock. [`ManualClock`] is a
//! settable source for tests and deterministic simulations.

use core::sync::atomic::{AtomicU64, Ordering};

use crate::traits::PhysicalClock;

/// Operating system wall clock, in milliseconds since the UNIX epoch
///
/// A system clock set before the epoch reads as `0`.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl PhysicalClock for SystemClock {
    fn now_millis(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

/// Settable wall clock
///
/// Reads return whatever was last stored. Sharing one `ManualClock` between
/// several hybrid clocks (by reference or `Arc`) simulates nodes reading the
/// same wall time; separate instances simulate skewed nodes.
///
/// # Example
/// ```rust
/// use hlclock::prelude::*;
///
/// let wall = ManualClock::new(1000);
/// let clock = HybridClock::new(&wall);
/// assert_eq!(clock.now(), Timestamp::new(1000, 0));
///
/// wall.set(999); // regression is absorbed
/// assert_eq!(clock.now(), Timestamp::new(1000, 1));
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicU64,
}

impl ManualClock {
    /// Creates a manual clock reading `millis`
    pub const fn new(millis: u64) -> Self {
        Self {
            millis: AtomicU64::new(millis),
        }
    }

    /// Sets the reading, forwards or backwards
    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    /// Moves the reading forward by `delta` milliseconds, saturating
    pub fn advance(&self, delta: u64) {
        let _ = self
            .millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(delta))
            });
    }

    /// Moves the reading backward by `delta` milliseconds, saturating at zero
    pub fn rewind(&self, delta: u64) {
        let _ = self
            .millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_sub(delta))
            });
    }

    /// Returns the current reading
    pub fn get(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}

impl PhysicalClock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.get()
    }
}
