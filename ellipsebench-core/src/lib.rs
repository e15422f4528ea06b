#![warn(missing_docs)]
//! EllipseBench Core - Timing Harness
//!
//! This crate provides the measurement loop used for every benchmark cell:
//! - `Bencher` struct recording one sample per measured call
//! - Fixed-count warmup and measurement phases
//! - Microsecond timing on the platform's monotonic high-resolution clock

mod bencher;
mod measure;

pub use bencher::{
    Bencher, BenchmarkResult, DEFAULT_ITERATIONS, DEFAULT_WARMUP_ITERATIONS, HarnessConfig,
    measure, run_benchmark_loop,
};
pub use measure::{Timer, duration_to_micros};
