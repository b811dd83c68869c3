//! Hybrid logical clock
//!
//! [`HybridClock`] issues timestamps that never repeat or decrease, stay pinned
//! to the wall clock whenever it moves forward, and dominate every remote
//! timestamp merged through [`HybridClock::update`].

use core::marker::PhantomData;

use tracing::{debug, error, trace, warn};

use crate::clock::state::StateCell;
use crate::config::{ClockConfig, DefaultConfig};
use crate::error::{ClockError, ClockResult};
use crate::timestamp::Timestamp;
use crate::traits::PhysicalClock;

#[cfg(feature = "std")]
use crate::clock::source::SystemClock;

/// Hybrid Logical Clock
///
/// Holds the last issued timestamp and the wall-clock source it reads from.
/// Every method takes `&self`; the clock synchronizes internally, so one
/// instance can be shared across threads (for example behind an `Arc`)
/// without external locking.
///
/// # Type Parameters
/// - `S`: The wall-clock source
/// - `C`: Compile-time configuration (logical ceiling, drift guard)
///
/// # Operations
///
/// | Method | Fallible | Notes |
/// |--------|----------|-------|
/// | `now()` | panics on overflow | Local event |
/// | `try_now()` | `LogicalOverflow` | Local event |
/// | `update()` | panics on overflow | Merge remote timestamp |
/// | `try_update()` | `LogicalOverflow` | Merge remote timestamp |
/// | `update_checked()` | `ClockSkew`, `LogicalOverflow` | Merge with drift guard |
/// | `last()` | no | Read without advancing |
///
/// # Example
/// ```rust
/// use hlclock::prelude::*;
///
/// let wall = ManualClock::new(1000);
/// let clock = HybridClock::new(&wall);
///
/// let local = clock.now();
/// assert_eq!(local, Timestamp::new(1000, 0));
///
/// // A message from a node whose clock runs ahead
/// let merged = clock.update(Timestamp::new(2000, 0));
/// assert_eq!(merged, Timestamp::new(2000, 1));
/// assert!(merged > local);
/// ```
#[derive(Debug)]
pub struct HybridClock<S: PhysicalClock, C: ClockConfig = DefaultConfig> {
    state: StateCell,
    source: S,
    _phantom: PhantomData<C>,
}

impl<S: PhysicalClock> HybridClock<S, DefaultConfig> {
    /// Creates a clock reading from `source` with the default configuration
    ///
    /// Construction does not read the wall clock; the clock starts at
    /// [`Timestamp::ZERO`].
    pub const fn new(source: S) -> Self {
        Self::with_config_and_last(source, Timestamp::ZERO)
    }

    /// Creates a clock that resumes after `last`
    ///
    /// Use this to restore a persisted timestamp so timestamps issued after a
    /// restart still exceed everything issued before it.
    ///
    /// # Example
    /// ```rust
    /// use hlclock::prelude::*;
    ///
    /// let wall = ManualClock::new(500);
    /// let clock = HybridClock::with_last(&wall, Timestamp::new(1000, 7));
    /// assert_eq!(clock.now(), Timestamp::new(1000, 8));
    /// ```
    pub const fn with_last(source: S, last: Timestamp) -> Self {
        Self::with_config_and_last(source, last)
    }
}

impl<S: PhysicalClock, C: ClockConfig> HybridClock<S, C> {
    /// Creates a clock with an explicit configuration type
    ///
    /// # Example
    /// ```rust
    /// use hlclock::prelude::*;
    ///
    /// let wall = ManualClock::new(1000);
    /// let clock = HybridClock::<_, LanConfig>::with_config(&wall);
    /// assert!(clock.update_checked(Timestamp::new(60_000, 0)).is_err());
    /// ```
    pub const fn with_config(source: S) -> Self {
        Self::with_config_and_last(source, Timestamp::ZERO)
    }

    /// Creates a clock with an explicit configuration type that resumes after `last`
    pub const fn with_config_and_last(source: S, last: Timestamp) -> Self {
        Self {
            state: StateCell::new(last),
            source,
            _phantom: PhantomData,
        }
    }

    /// Issues a timestamp for a local event
    ///
    /// The result is strictly greater than every timestamp this clock has
    /// issued. If the wall clock has moved past the last physical time, the
    /// result is `(wall, 0)`; otherwise the physical time is held and the
    /// logical counter advances, which absorbs stalls and regressions.
    ///
    /// # Panics
    /// Panics if the logical counter would pass `C::MAX_LOGICAL`. With the
    /// default configuration that takes 2^64 events inside one millisecond
    /// and cannot happen in practice. Use [`try_now`](Self::try_now) to
    /// observe it as an error instead.
    pub fn now(&self) -> Timestamp {
        match self.try_now() {
            Ok(ts) => ts,
            Err(err) => panic!("hybrid clock invariant violated: {err}"),
        }
    }

    /// Issues a timestamp for a local event, reporting counter overflow
    ///
    /// On error the clock state is unchanged.
    pub fn try_now(&self) -> ClockResult<Timestamp> {
        let mut wall = 0;
        let mut prior = Timestamp::ZERO;
        let result = self.state.advance(|last| {
            wall = self.source.now_millis();
            prior = last;
            if wall > last.physical {
                return Ok(Timestamp::new(wall, 0));
            }
            Ok(Timestamp::new(last.physical, Self::next_logical(last.physical, last.logical)?))
        });

        // Events are emitted after the lock is released
        match result {
            Ok(_) if wall < prior.physical => debug!(
                wall,
                last_physical = prior.physical,
                "wall clock behind last issued timestamp, advancing logical counter"
            ),
            Err(err) => Self::log_failure(&err),
            Ok(_) => {}
        }
        result
    }

    /// Merges a remote timestamp and issues a timestamp after both histories
    ///
    /// The result is strictly greater than `remote` and than every timestamp
    /// this clock issued before. Any bit pattern is accepted for `remote`.
    ///
    /// # Panics
    /// Panics if the logical counter would pass `C::MAX_LOGICAL`, exactly as
    /// [`now`](Self::now). A remote timestamp carrying `logical == u64::MAX`
    /// at the winning physical time triggers this; use
    /// [`try_update`](Self::try_update) when merging untrusted input.
    pub fn update(&self, remote: Timestamp) -> Timestamp {
        match self.try_update(remote) {
            Ok(ts) => ts,
            Err(err) => panic!("hybrid clock invariant violated: {err}"),
        }
    }

    /// Merges a remote timestamp, reporting counter overflow
    ///
    /// On error the clock state is unchanged.
    pub fn try_update(&self, remote: Timestamp) -> ClockResult<Timestamp> {
        let mut prior = Timestamp::ZERO;
        let result = self.state.advance(|last| {
            prior = last;
            Self::merge(self.source.now_millis(), last, remote)
        });
        Self::log_merge(prior, remote, &result);
        result
    }

    /// Merges a remote timestamp after checking it against the wall clock
    ///
    /// A remote timestamp whose physical time is more than
    /// `C::MAX_FORWARD_DRIFT_MILLIS` ahead of the local wall clock is rejected
    /// with [`ClockError::ClockSkew`] and leaves the clock untouched. This
    /// keeps a single node with a runaway clock from dragging every other
    /// node's physical time into the future.
    ///
    /// # Example
    /// ```rust
    /// use hlclock::prelude::*;
    ///
    /// let wall = ManualClock::new(10_000);
    /// let clock = HybridClock::<_, LanConfig>::with_config(&wall);
    ///
    /// // 100ms ahead: accepted
    /// assert_eq!(clock.update_checked(Timestamp::new(10_100, 0))?, Timestamp::new(10_100, 1));
    ///
    /// // 10s ahead: rejected
    /// assert!(matches!(
    ///     clock.update_checked(Timestamp::new(20_000, 0)),
    ///     Err(ClockError::ClockSkew { .. })
    /// ));
    /// # Ok::<(), ClockError>(())
    /// ```
    pub fn update_checked(&self, remote: Timestamp) -> ClockResult<Timestamp> {
        let mut prior = Timestamp::ZERO;
        let result = self.state.advance(|last| {
            prior = last;
            let wall = self.source.now_millis();
            if remote.physical > wall.saturating_add(C::MAX_FORWARD_DRIFT_MILLIS) {
                return Err(ClockError::ClockSkew {
                    remote_physical: remote.physical,
                    wall_physical: wall,
                    max_drift: C::MAX_FORWARD_DRIFT_MILLIS,
                });
            }
            Self::merge(wall, last, remote)
        });
        Self::log_merge(prior, remote, &result);
        result
    }

    /// Returns the last issued or merged timestamp without advancing the clock
    pub fn last(&self) -> Timestamp {
        self.state.load()
    }

    /// Returns the wall-clock source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the clock, returning its source and last timestamp
    ///
    /// Pass both to [`HybridClock::with_last`] (or
    /// [`with_config_and_last`](Self::with_config_and_last)) to resume.
    pub fn into_parts(self) -> (S, Timestamp) {
        let last = self.state.load();
        (self.source, last)
    }

    /// Standard HLC receive rule
    fn merge(wall: u64, last: Timestamp, remote: Timestamp) -> ClockResult<Timestamp> {
        let max_physical = wall.max(last.physical).max(remote.physical);

        let logical = if max_physical == last.physical && max_physical == remote.physical {
            Self::next_logical(max_physical, last.logical.max(remote.logical))?
        } else if max_physical == last.physical {
            Self::next_logical(max_physical, last.logical)?
        } else if max_physical == remote.physical {
            Self::next_logical(max_physical, remote.logical)?
        } else {
            0
        };

        Ok(Timestamp::new(max_physical, logical))
    }

    fn next_logical(physical: u64, logical: u64) -> ClockResult<u64> {
        match logical.checked_add(1) {
            Some(next) if next <= C::MAX_LOGICAL => Ok(next),
            _ => Err(ClockError::LogicalOverflow { physical }),
        }
    }

    fn log_merge(prior: Timestamp, remote: Timestamp, result: &ClockResult<Timestamp>) {
        match result {
            Ok(next) => trace!(remote = %remote, last = %prior, next = %next, "merged remote timestamp"),
            Err(err) => Self::log_failure(err),
        }
    }

    fn log_failure(err: &ClockError) {
        match *err {
            ClockError::LogicalOverflow { physical } => {
                error!(physical, max = C::MAX_LOGICAL, "logical counter overflow");
            }
            ClockError::ClockSkew {
                remote_physical,
                wall_physical,
                max_drift,
            } => warn!(
                remote_physical,
                wall = wall_physical,
                max_drift,
                "rejecting remote timestamp beyond forward drift bound"
            ),
            _ => {}
        }
    }
}

#[cfg(feature = "std")]
impl HybridClock<SystemClock, DefaultConfig> {
    /// Creates a clock reading the operating system wall clock
    pub const fn system() -> Self {
        Self::new(SystemClock)
    }
}

#[cfg(feature = "std")]
impl Default for HybridClock<SystemClock, DefaultConfig> {
    fn default() -> Self {
        Self::system()
    }
}
