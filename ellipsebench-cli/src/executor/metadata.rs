//! System Metadata Collection
//!
//! Collects system information for report metadata.
//!
//! ## Collected Data
//!
//! - **OS**: Operating system name and architecture
//! - **CPU**: Model name and core count
//! - **Config**: Thread count, iteration counts, sweep bounds, variants
//! - **Timestamp**: UTC time of report generation
//!
//! The CPU model is read from `/proc/cpuinfo` and degrades to "Unknown" on
//! other platforms.

use super::execution::ExecutionConfig;
use chrono::Utc;
use ellipsebench_report::{ReportConfig, ReportMeta, SystemInfo};

/// Build report metadata for a sweep run with `threads` workers
pub fn build_report_meta(config: &ExecutionConfig, threads: usize) -> ReportMeta {
    let system = SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu: get_cpu_model().unwrap_or_else(|| "Unknown".to_string()),
        cpu_cores: num_cpus(),
    };

    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        system,
        config: ReportConfig {
            threads,
            warmup_iterations: config.harness.warmup_iterations,
            iterations: config.harness.iterations,
            min_segments: config.min_segments,
            max_segments: config.max_segments,
            methods: config.methods.clone(),
            verify: config.verify,
        },
    }
}

/// Get CPU model name from /proc/cpuinfo (Linux only)
fn get_cpu_model() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("model name"))
                    .and_then(|l| l.split(':').nth(1))
                    .map(|s| s.trim().to_string())
            })
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Get number of available CPU cores
fn num_cpus() -> u32 {
    ellipsebench_geom::available_parallelism() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_captures_config() {
        let config = ExecutionConfig::default();
        let meta = build_report_meta(&config, 6);

        assert_eq!(meta.config.threads, 6);
        assert_eq!(meta.config.iterations, 1000);
        assert_eq!(meta.config.warmup_iterations, 100);
        assert_eq!(meta.config.methods.len(), 5);
        assert_eq!(meta.system.os, std::env::consts::OS);
        assert!(meta.system.cpu_cores >= 1);
        assert!(!meta.system.cpu.is_empty());
    }
}
