//! Error handling module for hlclock
//!
//! This module provides the error type shared by the clock, codec and text parsing.

pub mod types;

// Re-export main types
pub use types::{ClockError, ClockResult};
