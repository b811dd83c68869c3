//! Synchronized storage for the last issued timestamp
//!
//! This module provides both std and `no_std` implementations:
//! - std: `std::sync::Mutex` guarding the timestamp
//! - `no_std`: a spin lock built on `AtomicBool::compare_exchange_weak`
//!
//! Either way [`StateCell::advance`] runs the whole read-compute-commit step
//! as one critical section, and an `Err` from the step commits nothing.

use crate::error::ClockResult;
use crate::timestamp::Timestamp;

#[cfg(not(feature = "std"))]
use core::cell::UnsafeCell;
#[cfg(not(feature = "std"))]
use core::sync::atomic::{AtomicBool, Ordering};

/// Lock-protected last timestamp of a hybrid clock
#[derive(Debug)]
pub(crate) struct StateCell {
    #[cfg(feature = "std")]
    last: std::sync::Mutex<Timestamp>,

    #[cfg(not(feature = "std"))]
    locked: AtomicBool,
    #[cfg(not(feature = "std"))]
    last: UnsafeCell<Timestamp>,
}

// SAFETY: The no_std cell is safe to share between threads because:
// 1. `last` is only read or written while `locked` is held
// 2. `locked` is acquired with compare_exchange_weak (Acquire) and released
//    with a Release store, so writes inside the section are visible to the
//    next holder
#[cfg(not(feature = "std"))]
unsafe impl Sync for StateCell {}

impl StateCell {
    pub(crate) const fn new(initial: Timestamp) -> Self {
        #[cfg(feature = "std")]
        {
            Self {
                last: std::sync::Mutex::new(initial),
            }
        }

        #[cfg(not(feature = "std"))]
        {
            Self {
                locked: AtomicBool::new(false),
                last: UnsafeCell::new(initial),
            }
        }
    }

    /// Returns the stored timestamp without changing it
    pub(crate) fn load(&self) -> Timestamp {
        self.with_locked(|last| *last)
    }

    /// Runs `step` on the stored timestamp and commits its `Ok` value
    pub(crate) fn advance<F>(&self, step: F) -> ClockResult<Timestamp>
    where
        F: FnOnce(Timestamp) -> ClockResult<Timestamp>,
    {
        self.with_locked(|last| {
            let next = step(*last)?;
            *last = next;
            Ok(next)
        })
    }

    #[cfg(feature = "std")]
    fn with_locked<R>(&self, f: impl FnOnce(&mut Timestamp) -> R) -> R {
        // The guarded value is Copy and written in one store, so a panic in
        // another holder cannot leave it half-updated.
        let mut guard = self
            .last
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut guard)
    }

    #[cfg(not(feature = "std"))]
    fn with_locked<R>(&self, f: impl FnOnce(&mut Timestamp) -> R) -> R {
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            // Wait on a plain load until the holder releases
            while self.locked.load(Ordering::Relaxed) {
                core::hint::spin_loop();
            }
        }

        // SAFETY: We hold `locked`, so no other thread touches `last` until
        // the Release store below.
        let result = f(unsafe { &mut *self.last.get() });
        self.locked.store(false, Ordering::Release);
        result
    }
}
