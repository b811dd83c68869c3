#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Hybrid Logical Clocks for Causally Ordered Timestamps**
//!
//! hlclock issues timestamps that stay close to wall-clock time while giving
//! every event in a distributed system a total order consistent with
//! causality, without requiring synchronized clocks.
//!
//! ## Features
//!
//! - **Strict Monotonicity** - No clock ever issues the same or a smaller timestamp twice
//! - **Causal Merge** - Merging a remote timestamp yields one that dominates both histories
//! - **Regression Tolerant** - Stalled or backward-stepping wall clocks are absorbed by the logical counter
//! - **Thread Safe** - One clock can be shared across threads without external locking
//! - **Sortable Wire Form** - 16-byte big-endian encoding whose byte order matches timestamp order
//! - **`no_std` Core** - Everything except the system wall clock works without std
//!
//! ## Feature Overview
//!
//! - `std` (default) - `SystemClock`, mutex-backed state, `std::error::Error`
//! - `serde` - Serde serialization support for [`Timestamp`]
//!
//! ## Timestamp Units
//!
//! `physical` is milliseconds since the UNIX epoch. The unit only affects
//! magnitude; the ordering guarantees hold for any source that implements
//! [`PhysicalClock`].
//!
//! ## Quick Start
//!
//! ```rust
//! use hlclock::prelude::*;
//!
//! // Two nodes whose wall clocks disagree
//! let wall_a = ManualClock::new(1_000);
//! let wall_b = ManualClock::new(900);
//! let node_a = HybridClock::new(&wall_a);
//! let node_b = HybridClock::new(&wall_b);
//!
//! // A sends, B receives
//! let sent = node_a.now();
//! let received = node_b.update(sent);
//! assert!(received > sent);
//!
//! // Timestamps travel as 16 bytes
//! let wire = encode(&received);
//! assert_eq!(decode(&wire)?, received);
//! # Ok::<(), ClockError>(())
//! ```
//!
//! ## Sharing a Clock
//!
//! ```rust
//! # #[cfg(feature = "std")] {
//! use std::sync::Arc;
//! use std::thread;
//! use hlclock::prelude::*;
//!
//! let clock = Arc::new(HybridClock::system());
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let clock = Arc::clone(&clock);
//!         thread::spawn(move || clock.now())
//!     })
//!     .collect();
//!
//! let mut stamps: Vec<Timestamp> = handles.into_iter().map(|h| h.join().unwrap()).collect();
//! stamps.sort();
//! stamps.dedup();
//! assert_eq!(stamps.len(), 4);
//! # }
//! ```
//!
//! [`Timestamp`]: crate::timestamp::Timestamp
//! [`PhysicalClock`]: crate::traits::PhysicalClock

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(clippy::all)]

// Core infrastructure modules
pub mod config;
pub mod configs;
pub mod error;
pub mod traits;

// Timestamp, codec and clock
pub mod clock;
pub mod codec;
pub mod timestamp;

/// Prelude module of hlclock
///
/// Convenient re-exports for common hlclock types and traits
pub mod prelude {

    // Re-export core traits
    pub use crate::traits::*;

    // Re-export configuration
    pub use crate::config::{ClockConfig, DefaultConfig, define_clock_config};

    // Re-export error types
    pub use crate::error::{ClockError, ClockResult};

    // Re-export configuration presets
    pub use crate::configs::*;

    // Re-export timestamp, codec and clock types
    pub use crate::clock::{HybridClock, ManualClock};
    #[cfg(feature = "std")]
    pub use crate::clock::SystemClock;
    pub use crate::codec::{TIMESTAMP_LEN, decode, encode, encode_into};
    pub use crate::timestamp::{Timestamp, compare};
}
