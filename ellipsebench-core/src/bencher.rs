//! Bencher - The Measurement Loop
//!
//! Runs an operation through two phases:
//! - Warmup: a fixed number of untimed calls to settle caches, branch
//!   predictors and clock frequency
//! - Measurement: a fixed number of calls, each timed individually
//!
//! Every measured call becomes one sample (microseconds), kept in call order.

use crate::measure::Timer;

/// Untimed calls before measurement starts
pub const DEFAULT_WARMUP_ITERATIONS: u64 = 100;

/// Timed calls per measurement
pub const DEFAULT_ITERATIONS: u64 = 1000;

/// Iteration counts for one measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Untimed calls before measurement (may be 0)
    pub warmup_iterations: u64,
    /// Timed calls; clamped to at least 1
    pub iterations: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl HarnessConfig {
    /// Config with the default warmup and `iterations` timed calls
    pub fn with_iterations(iterations: u64) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }
}

/// Result of a single measurement
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Per-call elapsed time in microseconds, in call order
    pub samples: Vec<f64>,
    /// Total calls performed, warmup included
    pub iterations: u64,
    /// Sum of all samples (microseconds)
    pub total_time_us: f64,
}

/// The Bencher records one sample per measured call.
pub struct Bencher {
    samples: Vec<f64>,
    target_samples: usize,
    total_iterations: u64,
    is_warmup: bool,
}

impl Bencher {
    /// Create a Bencher collecting `iterations` samples
    pub fn new(iterations: u64) -> Self {
        let target_samples = iterations.max(1) as usize;
        Self {
            samples: Vec::with_capacity(target_samples),
            target_samples,
            total_iterations: 0,
            is_warmup: true,
        }
    }

    /// Run the operation once.
    ///
    /// During warmup the call is not timed. During measurement its elapsed
    /// time is appended as a sample.
    #[inline]
    pub fn iter<T, F>(&mut self, mut f: F)
    where
        F: FnMut() -> T,
    {
        self.total_iterations += 1;

        if self.is_warmup {
            let _ = std::hint::black_box(f());
            return;
        }

        let timer = Timer::start();
        let _ = std::hint::black_box(f());
        let micros = timer.stop();

        if self.samples.len() < self.target_samples {
            self.samples.push(micros);
        }
    }

    /// Transition from warmup to measurement phase
    pub fn start_measurement(&mut self) {
        self.is_warmup = false;
        self.samples.clear();
    }

    /// Whether the Bencher is still in warmup
    pub fn is_warmup(&self) -> bool {
        self.is_warmup
    }

    /// Check if we've collected enough samples
    pub fn has_enough_samples(&self) -> bool {
        self.samples.len() >= self.target_samples
    }

    /// Get collected samples
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Get total iteration count (warmup included)
    pub fn iteration_count(&self) -> u64 {
        self.total_iterations
    }

    /// Get target sample count
    pub fn target_samples(&self) -> usize {
        self.target_samples
    }

    /// Finalize and return results
    pub fn finish(self) -> BenchmarkResult {
        let total_time_us = self.samples.iter().sum();

        BenchmarkResult {
            samples: self.samples,
            iterations: self.total_iterations,
            total_time_us,
        }
    }
}

/// Run the full benchmark loop: warmup → measurement → finish
///
/// `runner_fn` is called `warmup_iterations` times in warmup and then
/// `iterations` times in measurement; it is expected to call
/// [`Bencher::iter`] once per invocation.
pub fn run_benchmark_loop<F>(config: HarnessConfig, mut runner_fn: F) -> BenchmarkResult
where
    F: FnMut(&mut Bencher),
{
    let mut bencher = Bencher::new(config.iterations);

    for _ in 0..config.warmup_iterations {
        runner_fn(&mut bencher);
    }

    bencher.start_measurement();

    for _ in 0..bencher.target_samples() {
        runner_fn(&mut bencher);
    }

    bencher.finish()
}

/// Time `operation`: warmup calls first, then one sample per timed call.
///
/// Returns the samples in call order (microseconds).
pub fn measure<T, F>(mut operation: F, config: HarnessConfig) -> Vec<f64>
where
    F: FnMut() -> T,
{
    run_benchmark_loop(config, |b| b.iter(&mut operation)).samples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn busy_work() -> u64 {
        let mut sum = 0u64;
        for i in 0..1000 {
            sum += std::hint::black_box(i);
        }
        sum
    }

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::default();
        assert_eq!(config.warmup_iterations, 100);
        assert_eq!(config.iterations, 1000);
    }

    #[test]
    fn test_warmup_not_recorded() {
        let mut bencher = Bencher::new(10);

        for _ in 0..5 {
            bencher.iter(busy_work);
        }

        // During warmup, samples aren't recorded
        assert!(bencher.is_warmup());
        assert_eq!(bencher.samples().len(), 0);
        assert_eq!(bencher.iteration_count(), 5);
    }

    #[test]
    fn test_measurement_records_each_call() {
        let mut bencher = Bencher::new(10);
        bencher.start_measurement();

        for _ in 0..10 {
            bencher.iter(busy_work);
        }

        assert!(bencher.has_enough_samples());
        let result = bencher.finish();
        assert_eq!(result.samples.len(), 10);
        assert_eq!(result.iterations, 10);
        assert!(result.samples.iter().all(|s| *s >= 0.0));
        assert!((result.total_time_us - result.samples.iter().sum::<f64>()).abs() < 1e-9);
    }

    #[test]
    fn test_extra_calls_ignored() {
        let mut bencher = Bencher::new(3);
        bencher.start_measurement();
        for _ in 0..7 {
            bencher.iter(|| 42);
        }
        assert_eq!(bencher.samples().len(), 3);
    }

    #[test]
    fn test_run_loop_call_counts() {
        let mut calls = 0u64;
        let result = run_benchmark_loop(
            HarnessConfig {
                warmup_iterations: 100,
                iterations: 1000,
            },
            |b| {
                b.iter(|| calls += 1);
            },
        );

        assert_eq!(calls, 1100);
        assert_eq!(result.iterations, 1100);
        assert_eq!(result.samples.len(), 1000);
    }

    #[test]
    fn test_measure_without_warmup() {
        let mut calls = 0u32;
        let samples = measure(
            || calls += 1,
            HarnessConfig {
                warmup_iterations: 0,
                iterations: 5,
            },
        );
        assert_eq!(calls, 5);
        assert_eq!(samples.len(), 5);
    }

    #[test]
    fn test_zero_iterations_clamped() {
        let samples = measure(|| 1, HarnessConfig::with_iterations(0));
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn test_samples_track_sleep() {
        let samples = measure(
            || std::thread::sleep(std::time::Duration::from_millis(2)),
            HarnessConfig {
                warmup_iterations: 1,
                iterations: 3,
            },
        );
        assert!(samples.iter().all(|s| *s >= 1_000.0));
    }
}
