//! Common utilities and shared code for property-based testing of hybrid clocks
//!
//! This module provides:
//! - Proptest configuration for different test scenarios
//! - Generators for timestamps and clock operation sequences
//! - Helpers for checking ordering invariants

#![allow(dead_code)]
#![allow(special_module_name)]
#![allow(unused)]

use hlclock::prelude::*;
use proptest::prelude::*;
use proptest_derive::Arbitrary;

/// Standard proptest configuration for clock property tests
pub fn clock_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        max_shrink_iters: 200,
        timeout: 2000,
        ..ProptestConfig::default()
    }
}

/// Proptest configuration for threaded tests (fewer cases, longer timeout)
pub fn concurrent_config() -> ProptestConfig {
    ProptestConfig {
        cases: 16,
        max_shrink_iters: 50,
        timeout: 5000,
        ..ProptestConfig::default()
    }
}

/// Any timestamp, including the extremes
pub fn timestamp_strategy() -> impl Strategy<Value = Timestamp> {
    prop_oneof![
        (any::<u64>(), any::<u64>()).prop_map(|(p, l)| Timestamp::new(p, l)),
        (0u64..4, 0u64..4).prop_map(|(p, l)| Timestamp::new(p, l)),
        Just(Timestamp::ZERO),
        Just(Timestamp::MAX),
    ]
}

/// Timestamps clustered around a wall time so physical ties are common
pub fn nearby_timestamp_strategy() -> impl Strategy<Value = Timestamp> {
    (995u64..1010, 0u64..20).prop_map(|(p, l)| Timestamp::new(p, l))
}

/// One step applied to a clock and its manual wall clock
#[derive(Debug, Clone, Arbitrary)]
pub enum ClockOp {
    /// Issue a local timestamp
    Now,
    /// Merge a remote timestamp near the current wall time
    Update(#[proptest(strategy = "nearby_timestamp_strategy()")] Timestamp),
    /// Move the wall clock forward
    Advance(#[proptest(strategy = "0u64..50")] u64),
    /// Move the wall clock backward
    Rewind(#[proptest(strategy = "0u64..50")] u64),
}

/// Sequences of clock operations
pub fn op_sequence_strategy() -> impl Strategy<Value = Vec<ClockOp>> {
    prop::collection::vec(any::<ClockOp>(), 1..80)
}

/// Applies `ops` to `clock`, returning every timestamp it issued together with
/// the remote timestamp each one was merged from, if any
pub fn run_ops<C: ClockConfig>(
    clock: &HybridClock<&ManualClock, C>,
    wall: &ManualClock,
    ops: &[ClockOp],
) -> Vec<(Timestamp, Option<Timestamp>)> {
    let mut issued = Vec::new();
    for op in ops {
        match op {
            ClockOp::Now => issued.push((clock.now(), None)),
            ClockOp::Update(remote) => issued.push((clock.update(*remote), Some(*remote))),
            ClockOp::Advance(delta) => wall.advance(*delta),
            ClockOp::Rewind(delta) => wall.rewind(*delta),
        }
    }
    issued
}

/// True if every element is strictly greater than the one before it
pub fn is_strictly_increasing(stamps: &[Timestamp]) -> bool {
    stamps.windows(2).all(|pair| pair[0] < pair[1])
}

/// True if no timestamp appears twice
pub fn all_distinct(stamps: &[Timestamp]) -> bool {
    let mut sorted = stamps.to_vec();
    sorted.sort();
    sorted.windows(2).all(|pair| pair[0] != pair[1])
}
