#![warn(missing_docs)]
//! EllipseBench Statistical Engine
//!
//! Reduces per-call timing samples to the summary reported for each
//! benchmark cell: mean, min, max and population standard deviation.

mod summary;

pub use summary::{StatsError, TimingStats, aggregate, try_aggregate};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        let stats: TimingStats = aggregate(&[1.0, 3.0]);
        assert_eq!(stats.mean, 2.0);
        assert!(try_aggregate(&[]).is_err());
    }
}
