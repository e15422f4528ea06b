//! Report Building
//!
//! Wraps the sweep results with run metadata.

use super::execution::ExecutionConfig;
use super::metadata::build_report_meta;
use ellipsebench_report::{Report, SegmentResult};

/// Build a complete Report from sweep results
///
/// # Arguments
/// * `results` - One entry per segment count, in sweep order
/// * `config` - Execution configuration recorded in the metadata
/// * `threads` - Worker count of the pool the parallel variants ran on
pub fn build_report(results: Vec<SegmentResult>, config: &ExecutionConfig, threads: usize) -> Report {
    Report {
        meta: build_report_meta(config, threads),
        results,
    }
}
