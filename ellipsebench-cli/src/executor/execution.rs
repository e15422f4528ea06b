//! Benchmark Execution
//!
//! Core execution logic for the segment sweep.
//!
//! ## Data Flow
//!
//! ```text
//!   ExecutionConfig
//!        │
//!        ▼
//! ┌──────────────────┐
//! │     Executor     │  for each segment count, for each variant:
//! │                  │  Warmup → Measurement → TimingStats
//! └────────┬─────────┘
//!          │
//!          ▼
//!  MethodRow / FastestRow ──► RowSink (streamed)
//!          │
//!          ▼
//!   Vec<SegmentResult>
//! ```
//!
//! One set of point buffers is shared by every cell of the sweep, so
//! allocation only happens when a larger segment count first grows it.

use super::verification::verify_variants;
use crate::planner::sweep_segments;
use ellipsebench_core::{HarnessConfig, measure};
use ellipsebench_geom::{Ellipse, Method, Point, PointBuffers, WorkerPool};
use ellipsebench_report::{MethodRow, RowSink, SegmentResult};
use ellipsebench_stats::aggregate;
use indicatif::{ProgressBar, ProgressStyle};
use std::f64::consts::FRAC_PI_4;
use tracing::{debug, info};

/// Configuration for a sweep
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// Warmup and timed call counts per cell
    pub harness: HarnessConfig,
    /// First segment count
    pub min_segments: u32,
    /// Largest segment count (inclusive)
    pub max_segments: u32,
    /// Variants to run, in fixed order
    pub methods: Vec<Method>,
    /// Cross-check variant outputs before timing each segment count
    pub verify: bool,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            harness: HarnessConfig::default(),
            min_segments: 4,
            max_segments: 524_288,
            methods: Method::ALL.to_vec(),
            verify: false,
            show_progress: false,
        }
    }
}

impl ExecutionConfig {
    /// Segment counts this configuration sweeps
    pub fn segment_counts(&self) -> Vec<u32> {
        sweep_segments(self.min_segments, self.max_segments)
    }
}

/// The benchmarked ellipse: center at the origin, axes 10 and 5, azimuth π/4
pub fn reference_ellipse() -> Ellipse {
    Ellipse::new(Point::new(0.0, 0.0), 10.0, 5.0, FRAC_PI_4)
}

/// Execute the sweep and produce results
pub struct Executor<'a> {
    config: ExecutionConfig,
    pool: &'a WorkerPool,
    ellipse: Ellipse,
}

impl<'a> Executor<'a> {
    /// Executor for the reference ellipse
    pub fn new(config: ExecutionConfig, pool: &'a WorkerPool) -> Self {
        Self {
            config,
            pool,
            ellipse: reference_ellipse(),
        }
    }

    /// Benchmark a different ellipse
    pub fn with_ellipse(mut self, ellipse: Ellipse) -> Self {
        self.ellipse = ellipse;
        self
    }

    /// The sweep configuration
    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Run every (segment count, variant) cell in order.
    ///
    /// Each cell's row goes to `sink` as soon as it is measured, followed by
    /// the fastest row once all variants of a segment count are done.
    pub fn execute(&self, sink: &mut dyn RowSink) -> anyhow::Result<Vec<SegmentResult>> {
        let counts = self.config.segment_counts();
        let total_cells = (counts.len() * self.config.methods.len()) as u64;
        info!(
            "Sweeping {} segment counts × {} variants ({} timed calls per cell)",
            counts.len(),
            self.config.methods.len(),
            self.config.harness.iterations.max(1)
        );

        let pb = if self.config.show_progress {
            let pb = ProgressBar::new(total_cells);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut buffers = PointBuffers::new();
        let mut results = Vec::with_capacity(counts.len());

        for segments in counts {
            if self.config.verify {
                verify_variants(&self.ellipse, segments, &self.config.methods, self.pool)?;
                debug!(segments, "variants agree");
            }

            let mut rows = Vec::with_capacity(self.config.methods.len());
            for &method in &self.config.methods {
                pb.set_message(format!("{} @ {}", method, segments));

                let row = self.run_cell(method, segments, &mut buffers);
                debug!(
                    segments,
                    method = %method,
                    mean_us = row.stats.mean,
                    stddev_us = row.stats.stddev,
                    "cell measured"
                );

                sink.method_row(&row)?;
                rows.push(row);
                pb.inc(1);
            }

            let result = SegmentResult::new(segments, rows);
            if let Some(fastest) = &result.fastest {
                sink.fastest_row(fastest)?;
            }
            results.push(result);
        }

        pb.finish_and_clear();
        Ok(results)
    }

    /// Measure one variant at one segment count
    pub fn run_cell(&self, method: Method, segments: u32, buffers: &mut PointBuffers) -> MethodRow {
        let samples = measure(
            || self.ellipse.points(method, segments, buffers, self.pool),
            self.config.harness,
        );

        MethodRow {
            segments,
            method,
            stats: aggregate(&samples),
        }
    }
}
