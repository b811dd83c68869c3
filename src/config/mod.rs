//! Clock configuration module for hlclock
//!
//! This module provides compile-time clock configuration: the logical counter
//! ceiling and the forward drift guard used by `update_checked`.

pub mod clock_config;
pub mod macros;

// Re-export main types
pub use clock_config::{ClockConfig, DefaultConfig};
pub use macros::define_clock_config;
