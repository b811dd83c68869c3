//! Hybrid timestamp value type
//!
//! A [`Timestamp`] pairs a wall-clock reading with a logical counter. The pair
//! is ordered physical-first, then logical, and only the pair carries meaning.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::ClockError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hybrid logical clock timestamp
///
/// `physical` is milliseconds since the UNIX epoch as reported by the clock's
/// [`PhysicalClock`](crate::traits::PhysicalClock); `logical` breaks ties when
/// physical time does not advance between events.
///
/// The derived ordering compares `physical` first and `logical` second, which
/// is exactly [`compare`].
///
/// # Example
/// ```rust
/// use hlclock::prelude::*;
///
/// let a = Timestamp::new(1000, 2);
/// let b = Timestamp::new(1000, 3);
/// assert!(a < b);
/// assert_eq!(a.to_string(), "1000:2");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamp {
    /// Wall-clock component in milliseconds since the UNIX epoch
    pub physical: u64,
    /// Tie-breaking counter
    pub logical: u64,
}

impl Timestamp {
    /// The timestamp a fresh clock starts from
    pub const ZERO: Timestamp = Timestamp::new(0, 0);

    /// The greatest representable timestamp
    pub const MAX: Timestamp = Timestamp::new(u64::MAX, u64::MAX);

    /// Creates a new timestamp
    pub const fn new(physical: u64, logical: u64) -> Self {
        Self { physical, logical }
    }

    /// Creates a zero timestamp
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the physical component
    pub const fn physical(&self) -> u64 {
        self.physical
    }

    /// Returns the logical component
    pub const fn logical(&self) -> u64 {
        self.logical
    }

    /// Returns true if this is the zero timestamp
    pub const fn is_zero(&self) -> bool {
        self.physical == 0 && self.logical == 0
    }
}

/// Total order over timestamps: physical time first, then the logical counter
///
/// `compare(a, b) as i8` yields `-1`, `0` or `1`.
///
/// # Example
/// ```rust
/// use core::cmp::Ordering;
/// use hlclock::timestamp::{compare, Timestamp};
///
/// let earlier = Timestamp::new(999, 7);
/// let later = Timestamp::new(1000, 0);
/// assert_eq!(compare(&earlier, &later), Ordering::Less);
/// assert_eq!(compare(&later, &earlier) as i8, 1);
/// ```
pub fn compare(a: &Timestamp, b: &Timestamp) -> Ordering {
    match a.physical.cmp(&b.physical) {
        Ordering::Equal => a.logical.cmp(&b.logical),
        other => other,
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.physical, self.logical)
    }
}

impl FromStr for Timestamp {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (physical, logical) = s.split_once(':').ok_or(ClockError::InvalidFormat)?;
        let physical = physical.parse().map_err(|_| ClockError::InvalidFormat)?;
        let logical = logical.parse().map_err(|_| ClockError::InvalidFormat)?;
        Ok(Self::new(physical, logical))
    }
}

impl From<(u64, u64)> for Timestamp {
    fn from((physical, logical): (u64, u64)) -> Self {
        Self::new(physical, logical)
    }
}

impl From<Timestamp> for (u64, u64) {
    fn from(ts: Timestamp) -> Self {
        (ts.physical, ts.logical)
    }
}
