//! Report Data Structures

use chrono::{DateTime, Utc};
use ellipsebench_geom::Method;
use ellipsebench_stats::TimingStats;
use serde::{Deserialize, Serialize};

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata
    pub meta: ReportMeta,
    /// One entry per segment count, ascending
    pub results: Vec<SegmentResult>,
}

/// Timing of one variant at one segment count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodRow {
    /// Segment count
    pub segments: u32,
    /// Variant measured
    pub method: Method,
    /// Timing in microseconds
    #[serde(flatten)]
    pub stats: TimingStats,
}

/// Winner at one segment count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FastestRow {
    /// Segment count
    pub segments: u32,
    /// Variant with the lowest mean
    pub method: Method,
    /// Its mean time (µs)
    pub mean: f64,
}

/// All rows for one segment count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentResult {
    /// Segment count
    pub segments: u32,
    /// Rows in variant order
    pub rows: Vec<MethodRow>,
    /// `None` only when `rows` is empty
    pub fastest: Option<FastestRow>,
}

impl SegmentResult {
    /// Group rows and pick the fastest among them
    pub fn new(segments: u32, rows: Vec<MethodRow>) -> Self {
        let fastest = select_fastest(&rows);
        Self {
            segments,
            rows,
            fastest,
        }
    }
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Harness version
    pub version: String,
    /// Time the report was built
    pub timestamp: DateTime<Utc>,
    /// Host description
    pub system: SystemInfo,
    /// Effective run settings
    pub config: ReportConfig,
}

/// Execution configuration captured in report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Worker pool size
    pub threads: usize,
    /// Untimed calls per cell
    pub warmup_iterations: u64,
    /// Timed calls per cell
    pub iterations: u64,
    /// First segment count
    pub min_segments: u32,
    /// Sweep upper bound (inclusive)
    pub max_segments: u32,
    /// Variants run, in order
    pub methods: Vec<Method>,
    /// Whether outputs were cross-checked
    pub verify: bool,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// CPU model name
    pub cpu: String,
    /// Logical cores
    pub cpu_cores: u32,
}

/// Pick the row with the lowest mean.
///
/// Rows are scanned in order and only a strictly lower mean replaces the
/// current best, so exact ties go to the earliest row.
pub fn select_fastest(rows: &[MethodRow]) -> Option<FastestRow> {
    let mut best: Option<&MethodRow> = None;
    for row in rows {
        match best {
            Some(b) if row.stats.mean >= b.stats.mean => {}
            _ => best = Some(row),
        }
    }

    best.map(|row| FastestRow {
        segments: row.segments,
        method: row.method,
        mean: row.stats.mean,
    })
}

/// Consumer of rows as the sweep produces them
pub trait RowSink {
    /// Called once per variant per segment count
    fn method_row(&mut self, row: &MethodRow) -> std::io::Result<()>;

    /// Called after all variants of a segment count
    fn fastest_row(&mut self, row: &FastestRow) -> std::io::Result<()>;
}

/// Sink that drops every row (used when output is rendered from the final report)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RowSink for NullSink {
    fn method_row(&mut self, _row: &MethodRow) -> std::io::Result<()> {
        Ok(())
    }

    fn fastest_row(&mut self, _row: &FastestRow) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(method: Method, mean: f64) -> MethodRow {
        MethodRow {
            segments: 64,
            method,
            stats: TimingStats {
                mean,
                min: mean,
                max: mean,
                stddev: 0.0,
            },
        }
    }

    #[test]
    fn test_select_minimum() {
        let rows = [
            row(Method::Method1, 5.0),
            row(Method::Method2, 3.0),
            row(Method::Method1Omp, 9.0),
            row(Method::Method2Omp, 2.5),
            row(Method::Method2Bis, 4.0),
        ];
        let fastest = select_fastest(&rows).unwrap();
        assert_eq!(fastest.method, Method::Method2Omp);
        assert_eq!(fastest.mean, 2.5);
        assert_eq!(fastest.segments, 64);
    }

    #[test]
    fn test_tie_goes_to_first() {
        let rows = [
            row(Method::Method1, 4.0),
            row(Method::Method2, 2.0),
            row(Method::Method1Omp, 2.0),
            row(Method::Method2Omp, 3.0),
            row(Method::Method2Bis, 2.0),
        ];
        assert_eq!(select_fastest(&rows).unwrap().method, Method::Method2);

        let all_equal: Vec<_> = Method::ALL.into_iter().map(|m| row(m, 1.0)).collect();
        assert_eq!(select_fastest(&all_equal).unwrap().method, Method::Method1);
    }

    #[test]
    fn test_select_empty() {
        assert!(select_fastest(&[]).is_none());
    }

    #[test]
    fn test_segment_result_selects() {
        let result = SegmentResult::new(64, vec![row(Method::Method2Bis, 1.0)]);
        assert_eq!(result.fastest.unwrap().method, Method::Method2Bis);
    }
}
