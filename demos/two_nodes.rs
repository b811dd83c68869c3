//! Two nodes with skewed wall clocks exchanging timestamped messages
//!
//! Run with `RUST_LOG=hlclock=trace cargo run --example two_nodes` to see the
//! clock's merge and regression events.

use hlclock::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ClockError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Node B's clock runs 200ms behind node A's
    let wall_a = ManualClock::new(10_000);
    let wall_b = ManualClock::new(9_800);
    let node_a = HybridClock::<_, LanConfig>::with_config(&wall_a);
    let node_b = HybridClock::<_, LanConfig>::with_config(&wall_b);

    let mut inbox_b = Vec::new();
    for _ in 0..3 {
        let stamp = node_a.now();
        inbox_b.push(encode(&stamp));
        println!("A sent     {stamp}");
    }

    for wire in &inbox_b {
        let remote = decode(wire)?;
        let local = node_b.update_checked(remote)?;
        println!("B received {remote} -> {local}");
    }

    // B's own events stay ordered after everything it has seen
    wall_b.advance(10);
    println!("B local    {}", node_b.now());

    // A message from a node with a runaway clock is refused
    let bogus = Timestamp::new(wall_b.get() + 60_000, 0);
    match node_b.update_checked(bogus) {
        Err(err) => println!("B rejected {bogus}: {err}"),
        Ok(ts) => println!("B accepted {bogus} -> {ts}"),
    }

    println!("A last     {}", node_a.last());
    println!("B last     {}", node_b.last());
    Ok(())
}
