//! Wall-Clock Timing
//!
//! Per-call timing on `std::time::Instant`, the highest-resolution monotonic
//! clock the platform offers. Durations are reported as fractional
//! microseconds.

use std::time::{Duration, Instant};

/// Convert a duration to fractional microseconds
#[inline(always)]
pub fn duration_to_micros(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000.0
}

/// Timer for a single measured call
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since `start`, in microseconds
    #[inline(always)]
    pub fn stop(&self) -> f64 {
        duration_to_micros(self.start.elapsed())
    }
}
