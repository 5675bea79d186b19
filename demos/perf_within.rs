//! Performance profiling example for `query_within`
//!
//! Runs many radius queries against 1 million random points. Designed to be
//! used with low-level profilers like `samply`:
//!
//! ```bash
//! cargo run --release --example perf_within
//! samply record cargo run --release --example perf_within
//! ```

use kdbush::prelude::*;
use std::time::Instant;

const NUM_POINTS: usize = 1_000_000;
const NUM_QUERIES: usize = 10_000;

/// 64-bit LCG step, returns a value in [0, 1)
fn next_unit(state: &mut u64) -> f64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (*state >> 32) as f64 / (f64::from(u32::MAX) + 1.0)
}

fn main() {
    println!("Building spatial index with {} random points...", NUM_POINTS);

    let mut rng = 12345u64;
    let mut builder = KDBushBuilder::with_capacity(NUM_POINTS);
    for _ in 0..NUM_POINTS {
        let x = next_unit(&mut rng) * 1000.0;
        let y = next_unit(&mut rng) * 1000.0;
        let _id = builder.add_point(x, y);
    }

    let build_start = Instant::now();
    let index = builder.build();
    let build_duration = build_start.elapsed();

    let mut results = Vec::new();
    let mut hits = 0;
    let query_start = Instant::now();

    for _ in 0..NUM_QUERIES {
        let center_x = next_unit(&mut rng) * 1000.0;
        let center_y = next_unit(&mut rng) * 1000.0;
        index.query_within(center_x, center_y, 5.0, &mut results);
        hits += results.len();
    }

    let query_duration = query_start.elapsed();

    println!("Index built in {:.2}ms", build_duration.as_secs_f64() * 1000.0);
    println!(
        "Completed {} queries in {:.2}ms ({:.2}us per query, {} hits)",
        NUM_QUERIES,
        query_duration.as_secs_f64() * 1000.0,
        query_duration.as_secs_f64() * 1_000_000.0 / NUM_QUERIES as f64,
        hits
    );
}
