//! Output Formatting
//!
//! Human-readable output formatting for sweep reports.
//!
//! Generates terminal-friendly output with:
//! - One table per segment count (mean, min, max, stddev in µs, cv in %)
//! - The fastest variant marked with `*`
//! - A summary counting wins per variant

use ellipsebench_geom::Method;
use ellipsebench_report::Report;

const RULE_WIDTH: usize = 84;

/// Format a report for human-readable terminal display
///
/// # Arguments
/// * `report` - Complete sweep report
///
/// # Returns
/// Formatted string suitable for terminal output
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("EllipseBench Results\n");
    output.push_str(&"=".repeat(RULE_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "  threads: {}  warmup: {}  iterations: {}  cpu: {}\n\n",
        report.meta.config.threads,
        report.meta.config.warmup_iterations,
        report.meta.config.iterations,
        report.meta.system.cpu
    ));

    let name_width = Method::ALL
        .iter()
        .map(|m| m.label().len())
        .max()
        .unwrap_or(12);

    for result in &report.results {
        output.push_str(&format!("Segments: {}\n", result.segments));
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "    {:<width$}  {:>12}  {:>12}  {:>12}  {:>12}  {:>8}\n",
            "method",
            "mean (µs)",
            "min (µs)",
            "max (µs)",
            "stddev (µs)",
            "cv (%)",
            width = name_width
        ));

        let fastest = result.fastest.map(|f| f.method);
        for row in &result.rows {
            let marker = if Some(row.method) == fastest { "*" } else { " " };
            output.push_str(&format!(
                "  {} {:<width$}  {:>12.3}  {:>12.3}  {:>12.3}  {:>12.3}  {:>8.1}\n",
                marker,
                row.method,
                row.stats.mean,
                row.stats.min,
                row.stats.max,
                row.stats.stddev,
                row.stats.coefficient_of_variation(),
                width = name_width
            ));
        }
        output.push('\n');
    }

    // Summary
    output.push_str("Summary\n");
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');

    let mut wins = [0usize; Method::ALL.len()];
    for fastest in report.results.iter().filter_map(|r| r.fastest) {
        if let Some(idx) = Method::ALL.iter().position(|m| *m == fastest.method) {
            wins[idx] += 1;
        }
    }
    for (method, count) in Method::ALL.iter().zip(wins) {
        if report.meta.config.methods.contains(method) {
            output.push_str(&format!(
                "  {:<width$}  fastest at {} of {} segment counts\n",
                method,
                count,
                report.results.len(),
                width = name_width
            ));
        }
    }

    output
}
