//! Configuration loading from ellipsebench.toml
//!
//! EllipseBench configuration can be specified in an `ellipsebench.toml` file.
//! The configuration is automatically discovered by walking up from the current
//! directory; command-line flags override anything set here.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the discovered configuration file
pub const CONFIG_FILE_NAME: &str = "ellipsebench.toml";

/// EllipseBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EllipseBenchConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration for the sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Worker threads for the data-parallel variants (default: available parallelism)
    #[serde(default)]
    pub threads: Option<usize>,
    /// Untimed calls before each measurement
    #[serde(default = "default_warmup_iterations")]
    pub warmup_iterations: u64,
    /// Timed calls per measurement
    #[serde(default = "default_iterations")]
    pub iterations: u64,
    /// First segment count of the doubling sweep
    #[serde(default = "default_min_segments")]
    pub min_segments: u32,
    /// Largest segment count of the sweep (inclusive)
    #[serde(default = "default_max_segments")]
    pub max_segments: u32,
    /// Cross-check variant outputs before timing each segment count
    #[serde(default)]
    pub verify: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            threads: None,
            warmup_iterations: default_warmup_iterations(),
            iterations: default_iterations(),
            min_segments: default_min_segments(),
            max_segments: default_max_segments(),
            verify: false,
        }
    }
}

fn default_warmup_iterations() -> u64 {
    ellipsebench_core::DEFAULT_WARMUP_ITERATIONS
}
fn default_iterations() -> u64 {
    ellipsebench_core::DEFAULT_ITERATIONS
}
fn default_min_segments() -> u32 {
    4
}
fn default_max_segments() -> u32 {
    524_288
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "csv", "human", "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Show a progress bar on stderr
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            progress: default_progress(),
        }
    }
}

fn default_format() -> String {
    "csv".to_string()
}
fn default_progress() -> bool {
    true
}

impl EllipseBenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Discover and load configuration by walking up from the current directory.
    ///
    /// Returns `Ok(None)` when no file is found; a file that exists but fails
    /// to load is an error.
    pub fn discover() -> anyhow::Result<Option<Self>> {
        let dir = std::env::current_dir()?;
        Self::discover_from(&dir)
    }

    /// Discover and load configuration by walking up from `start`
    pub fn discover_from(start: &Path) -> anyhow::Result<Option<Self>> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let config = Self::load(&config_path)
                    .with_context(|| format!("Failed to load config {}", config_path.display()))?;
                return Ok(Some(config));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# EllipseBench Configuration

[runner]
# Worker threads for the parallel variants (uncomment to override the host default)
# threads = 8
# Untimed calls before each measurement
warmup_iterations = 100
# Timed calls per measurement
iterations = 1000
# Segment counts double from min_segments up to max_segments
min_segments = 4
max_segments = 524288
# Cross-check all variants before timing
verify = false

[output]
# Output format: csv, human, json
format = "csv"
# Progress bar on stderr
progress = true
"#
        .to_string()
    }
}
