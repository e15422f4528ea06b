//! Summary Statistics
//!
//! Reduces a timing sample set to mean, extrema and population standard
//! deviation. The deviation uses the sum-of-squares identity
//! `sqrt(Σs²/n − mean²)` in a single pass, so published numbers stay
//! comparable with earlier runs of this harness.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from sample aggregation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// No samples were given
    #[error("Cannot aggregate an empty sample set")]
    Empty,
}

/// Timing statistics for one benchmark cell (microseconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Fastest sample
    pub min: f64,
    /// Slowest sample
    pub max: f64,
    /// Population standard deviation (denominator `n`)
    pub stddev: f64,
}

impl TimingStats {
    /// Coefficient of variation (relative stddev, percent)
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            (self.stddev / self.mean) * 100.0
        }
    }
}

/// Aggregate samples, failing on an empty set
pub fn try_aggregate(samples: &[f64]) -> Result<TimingStats, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::Empty);
    }

    let n = samples.len() as f64;

    let sum: f64 = samples.iter().sum();
    let mean = sum / n;

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let sq_sum: f64 = samples.iter().map(|s| s * s).sum();
    // Rounding can push the identity slightly below zero for constant samples
    let variance = (sq_sum / n - mean * mean).max(0.0);

    Ok(TimingStats {
        mean,
        min,
        max,
        stddev: variance.sqrt(),
    })
}

/// Aggregate samples; an empty set yields all-zero statistics
pub fn aggregate(samples: &[f64]) -> TimingStats {
    try_aggregate(samples).unwrap_or(TimingStats {
        mean: 0.0,
        min: 0.0,
        max: 0.0,
        stddev: 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = aggregate(&samples);

        assert!((stats.mean - 3.0).abs() < 1e-12);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        // Population variance of 1..=5 is 2
        assert!((stats.stddev - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_population_not_sample_stddev() {
        let stats = aggregate(&[2.0, 4.0]);
        assert!((stats.stddev - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample() {
        let stats = aggregate(&[7.25]);
        assert_eq!(stats.mean, 7.25);
        assert_eq!(stats.min, 7.25);
        assert_eq!(stats.max, 7.25);
        assert_eq!(stats.stddev, 0.0);
    }

    #[test]
    fn test_constant_samples_never_nan() {
        let samples = vec![0.1; 1000];
        let stats = aggregate(&samples);
        assert!(!stats.stddev.is_nan());
        assert!(stats.stddev >= 0.0);
        assert!(stats.stddev < 1e-6);
    }

    #[test]
    fn test_order_bounds() {
        let samples = vec![13.2, 0.4, 7.7, 2.9, 101.5, 0.41, 12.0];
        let stats = aggregate(&samples);
        assert!(stats.min <= stats.mean);
        assert!(stats.mean <= stats.max);
        assert!(stats.stddev >= 0.0);
    }

    #[test]
    fn test_empty_samples() {
        assert_eq!(try_aggregate(&[]), Err(StatsError::Empty));

        let stats = aggregate(&[]);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.stddev, 0.0);
    }

    #[test]
    fn test_coefficient_of_variation() {
        let stats = aggregate(&[100.0, 100.0, 100.0]);
        assert!(stats.coefficient_of_variation().abs() < f64::EPSILON);

        let stats = aggregate(&[0.0, 0.0]);
        assert_eq!(stats.coefficient_of_variation(), 0.0);
    }
}
