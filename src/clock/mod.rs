//! Clock management module
//!
//! This module provides the [`HybridClock`] and the wall-clock sources it reads.

pub mod hlc;
pub mod source;
mod state;

// Re-export main types
pub use hlc::HybridClock;
pub use source::ManualClock;
#[cfg(feature = "std")]
pub use source::SystemClock;
