//! Core traits module
//!
//! This module defines the seam between the hybrid clock and the wall clock
//! it reads from.

pub mod physical;

// Re-export main traits
pub use physical::PhysicalClock;
