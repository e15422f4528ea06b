#![warn(missing_docs)]
//! # EllipseBench
//!
//! Benchmark harness for rotated ellipse vertex generation.
//!
//! EllipseBench times five interchangeable generators over a doubling sweep
//! of segment counts:
//! - **method1**: precomputed cos/sin tables, then one vertex pass
//! - **method2**: a single pass computing sin/cos inline
//! - **method1_omp** / **method2_omp**: the same two, split across a worker pool
//! - **method2_bis**: method2 written as an indexed loop
//!
//! Each (segment count, variant) cell gets 100 untimed warmup calls and 1000
//! timed calls; the mean, min, max and population stddev (µs) are reported,
//! along with the fastest variant per segment count.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ellipsebench::prelude::*;
//!
//! let pool = WorkerPool::new(4)?;
//! let ellipse = Ellipse::new(Point::new(0.0, 0.0), 10.0, 5.0, std::f64::consts::FRAC_PI_4);
//! let mut out = PointBuffers::new();
//!
//! let samples = measure(
//!     || ellipse.points(Method::Method2Omp, 4096, &mut out, &pool),
//!     HarnessConfig::default(),
//! );
//! println!("{:?}", aggregate(&samples));
//! ```

// Re-export geometry
pub use ellipsebench_geom::{
    Ellipse, MIN_SEGMENTS, Method, ParseMethodError, Point, PointBuffers, PoolError, WorkerPool,
    available_parallelism,
};

// Re-export the measurement loop
pub use ellipsebench_core::{
    Bencher, BenchmarkResult, DEFAULT_ITERATIONS, DEFAULT_WARMUP_ITERATIONS, HarnessConfig, Timer,
    measure, run_benchmark_loop,
};

// Re-export stats
pub use ellipsebench_stats::{StatsError, TimingStats, aggregate, try_aggregate};

// Re-export reporting
pub use ellipsebench_report::{
    CsvWriter, FastestRow, MethodRow, OutputFormat, Report, RowSink, SegmentResult,
    select_fastest,
};

// Re-export the sweep
pub use ellipsebench_cli::{
    Cli, EllipseBenchConfig, ExecutionConfig, Executor, VerificationError, reference_ellipse,
    sweep_segments, verify_variants,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Ellipse, HarnessConfig, Method, Point, PointBuffers, WorkerPool, aggregate, measure,
    };
}

/// Run the EllipseBench CLI harness.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     ellipsebench::run()
/// }
/// ```
pub use ellipsebench_cli::run;
