#![warn(missing_docs)]
//! EllipseBench CLI Library
//!
//! This module provides the CLI for the ellipse generation sweep. Use
//! `ellipsebench::run()` (or `ellipsebench_cli::run()`) in a main function to
//! get the full command line: thread count, iteration counts, sweep bounds,
//! variant filter and output format.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     ellipsebench_cli::run()
//! }
//! ```
//!
//! ```text
//! $ ellipsebench 8 --max-segments 4096 > results.csv
//! ```

mod config;
mod executor;
mod planner;

pub use config::*;
pub use executor::{
    ExecutionConfig, Executor, VERIFY_TOLERANCE, VerificationError, build_report,
    build_report_meta, format_human_output, reference_ellipse, verify_variants,
};
pub use planner::{ExecutionPlan, build_plan, select_methods, sweep_segments};

use anyhow::Context;
use clap::{Parser, Subcommand};
use ellipsebench_core::HarnessConfig;
use ellipsebench_geom::{WorkerPool, available_parallelism};
use ellipsebench_report::{CsvWriter, NullSink, OutputFormat, generate_json_report};
use regex::Regex;
use std::io::{BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// EllipseBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "ellipsebench")]
#[command(author, version, about = "EllipseBench - rotated ellipse generator benchmark")]
pub struct Cli {
    /// Optional subcommand (List, Run, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Worker threads for the data-parallel variants (default: available parallelism)
    #[arg(value_name = "THREADS")]
    pub threads: Option<NonZeroUsize>,

    /// Output format: csv, human, json
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (default: discover ellipsebench.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run only variants whose label matches this regex
    #[arg(long, short = 'f')]
    pub filter: Option<String>,

    /// Untimed calls before each measurement
    #[arg(long)]
    pub warmup: Option<u64>,

    /// Timed calls per measurement
    #[arg(long, short = 'n')]
    pub iterations: Option<u64>,

    /// First segment count of the sweep
    #[arg(long)]
    pub min_segments: Option<u32>,

    /// Largest segment count of the sweep (inclusive)
    #[arg(long)]
    pub max_segments: Option<u32>,

    /// Cross-check all variants against method1 before timing
    #[arg(long)]
    pub verify: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the variants and segment counts that would run
    List,
    /// Run the sweep (default)
    Run,
    /// Write a default ellipsebench.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the EllipseBench CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the EllipseBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.verbose);

    // Explicit --config must load; otherwise discover ellipsebench.toml (CLI flags override)
    let config = match &cli.config {
        Some(path) => EllipseBenchConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EllipseBenchConfig::discover()?.unwrap_or_default(),
    };

    match cli.command {
        Some(Commands::List) => list_methods(&cli, &config),
        Some(Commands::Init { force }) => write_default_config(force),
        Some(Commands::Run) | None => run_benchmarks(&cli, &config),
    }
}

/// Log to stderr so stdout carries only benchmark output
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "ellipsebench=debug"
    } else {
        "ellipsebench=info"
    };
    // A subscriber may already be installed when embedded or under test
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn list_methods(cli: &Cli, config: &EllipseBenchConfig) -> anyhow::Result<()> {
    let plan = resolve_plan(cli, config)?;
    print!("{}", format_plan(&plan));
    Ok(())
}

/// Render the plan as the `list` tree
fn format_plan(plan: &ExecutionPlan) -> String {
    let mut output = String::from("EllipseBench Plan:\n");
    for method in &plan.methods {
        let kind = if method.is_parallel() {
            " (parallel)"
        } else {
            ""
        };
        output.push_str(&format!("├── {}{}\n", method, kind));
    }
    output.push_str(&format!(
        "{} variants × {} segment counts ({}..={})\n",
        plan.methods.len(),
        plan.segments.len(),
        plan.segments.first().copied().unwrap_or(0),
        plan.segments.last().copied().unwrap_or(0)
    ));
    output
}

fn write_default_config(force: bool) -> anyhow::Result<()> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    std::fs::write(&path, EllipseBenchConfig::default_toml())?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Worker count: CLI positional, then `runner.threads`, then the host's parallelism.
fn resolve_threads(cli: &Cli, config: &EllipseBenchConfig) -> anyhow::Result<usize> {
    match (cli.threads, config.runner.threads) {
        (Some(n), _) => Ok(n.get()),
        (None, Some(0)) => anyhow::bail!("runner.threads must be at least 1"),
        (None, Some(n)) => Ok(n),
        (None, None) => Ok(available_parallelism()),
    }
}

/// Resolve sweep bounds and the variant filter into a plan; CLI flags win over ellipsebench.toml.
fn resolve_plan(cli: &Cli, config: &EllipseBenchConfig) -> anyhow::Result<ExecutionPlan> {
    let min_segments = cli.min_segments.unwrap_or(config.runner.min_segments);
    let max_segments = cli.max_segments.unwrap_or(config.runner.max_segments);
    if min_segments > max_segments {
        anyhow::bail!(
            "min_segments ({}) exceeds max_segments ({})",
            min_segments,
            max_segments
        );
    }

    let filter = cli
        .filter
        .as_deref()
        .map(Regex::new)
        .transpose()
        .context("Invalid --filter pattern")?;
    let plan = build_plan(filter.as_ref(), min_segments, max_segments);
    if plan.methods.is_empty() {
        anyhow::bail!("No variants match the filter");
    }
    Ok(plan)
}

/// Build an ExecutionConfig by layering: ellipsebench.toml defaults → CLI overrides.
fn build_execution_config(cli: &Cli, config: &EllipseBenchConfig) -> anyhow::Result<ExecutionConfig> {
    let runner = &config.runner;
    let plan = resolve_plan(cli, config)?;

    Ok(ExecutionConfig {
        harness: HarnessConfig {
            warmup_iterations: cli.warmup.unwrap_or(runner.warmup_iterations),
            iterations: cli.iterations.unwrap_or(runner.iterations),
        },
        min_segments: cli.min_segments.unwrap_or(runner.min_segments),
        max_segments: cli.max_segments.unwrap_or(runner.max_segments),
        methods: plan.methods,
        verify: cli.verify || runner.verify,
        show_progress: !cli.quiet && config.output.progress,
    })
}

fn run_benchmarks(cli: &Cli, config: &EllipseBenchConfig) -> anyhow::Result<()> {
    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(anyhow::Error::msg)?;

    let threads = resolve_threads(cli, config)?;
    let exec_config = build_execution_config(cli, config)?;
    let pool = WorkerPool::new(threads)?;

    info!("Threads : {}", pool.threads());

    let start_time = Instant::now();
    let executor = Executor::new(exec_config.clone(), &pool);

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    // CSV rows stream as they are measured; the other formats render the final report
    let results = match format {
        OutputFormat::Csv => {
            let mut writer = CsvWriter::new(&mut out);
            writer.write_header()?;
            let results = executor.execute(&mut writer)?;
            writer.into_inner()?;
            results
        }
        OutputFormat::Json | OutputFormat::Human => executor.execute(&mut NullSink)?,
    };

    let report = build_report(results, &exec_config, pool.threads());
    match format {
        OutputFormat::Json => writeln!(out, "{}", generate_json_report(&report)?)?,
        OutputFormat::Human => write!(out, "{}", format_human_output(&report))?,
        OutputFormat::Csv => {}
    }
    out.flush()?;

    if let Some(path) = &cli.output {
        info!("Report written to: {}", path.display());
    }
    info!(
        "Sweep complete: {} segment counts in {:.2} s",
        report.results.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ellipsebench_geom::Method;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ellipsebench").chain(args.iter().copied())).unwrap()
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ellipsebench-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_positional_threads() {
        let cli = parse(&["8"]);
        assert_eq!(cli.threads.map(NonZeroUsize::get), Some(8));
        assert!(cli.command.is_none());

        let cli = parse(&[]);
        assert!(cli.threads.is_none());
    }

    #[test]
    fn test_invalid_threads_rejected() {
        assert!(Cli::try_parse_from(["ellipsebench", "0"]).is_err());
        assert!(Cli::try_parse_from(["ellipsebench", "many"]).is_err());
        assert!(Cli::try_parse_from(["ellipsebench", "-3"]).is_err());
    }

    #[test]
    fn test_subcommands() {
        assert!(matches!(parse(&["list"]).command, Some(Commands::List)));
        assert!(matches!(
            parse(&["init", "--force"]).command,
            Some(Commands::Init { force: true })
        ));
    }

    #[test]
    fn test_resolve_threads() {
        let config = EllipseBenchConfig::default();
        assert_eq!(resolve_threads(&parse(&["3"]), &config).unwrap(), 3);
        assert_eq!(
            resolve_threads(&parse(&[]), &config).unwrap(),
            available_parallelism()
        );

        let mut config = EllipseBenchConfig::default();
        config.runner.threads = Some(5);
        assert_eq!(resolve_threads(&parse(&[]), &config).unwrap(), 5);
        assert_eq!(resolve_threads(&parse(&["2"]), &config).unwrap(), 2);

        config.runner.threads = Some(0);
        assert!(resolve_threads(&parse(&[]), &config).is_err());
    }

    #[test]
    fn test_execution_config_defaults() {
        let exec = build_execution_config(&parse(&[]), &EllipseBenchConfig::default()).unwrap();
        assert_eq!(exec.harness, HarnessConfig::default());
        assert_eq!(exec.min_segments, 4);
        assert_eq!(exec.max_segments, 524_288);
        assert_eq!(exec.methods, Method::ALL);
        assert!(!exec.verify);
        assert!(exec.show_progress);
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = EllipseBenchConfig::default();
        config.runner.iterations = 50;
        config.runner.max_segments = 1024;

        let cli = parse(&["-n", "7", "--warmup", "0", "--filter", "omp", "--verify", "-q"]);
        let exec = build_execution_config(&cli, &config).unwrap();

        assert_eq!(exec.harness.iterations, 7);
        assert_eq!(exec.harness.warmup_iterations, 0);
        assert_eq!(exec.max_segments, 1024);
        assert_eq!(exec.methods, [Method::Method1Omp, Method::Method2Omp]);
        assert!(exec.verify);
        assert!(!exec.show_progress);
    }

    #[test]
    fn test_execution_config_errors() {
        let config = EllipseBenchConfig::default();
        assert!(build_execution_config(&parse(&["--filter", "("]), &config).is_err());
        assert!(build_execution_config(&parse(&["--filter", "^nothing$"]), &config).is_err());
        assert!(
            build_execution_config(&parse(&["--min-segments", "64", "--max-segments", "8"]), &config)
                .is_err()
        );
    }

    #[test]
    fn test_list_renders_plan() {
        let cli = parse(&["--filter", "omp", "--min-segments", "8", "--max-segments", "64"]);
        let plan = resolve_plan(&cli, &EllipseBenchConfig::default()).unwrap();
        assert_eq!(plan.segments, [8, 16, 32, 64]);

        let listing = format_plan(&plan);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(
            lines,
            [
                "EllipseBench Plan:",
                "├── method1_omp (parallel)",
                "├── method2_omp (parallel)",
                "2 variants × 4 segment counts (8..=64)",
            ]
        );
    }

    #[test]
    fn test_run_writes_csv() {
        let path = temp_path("run.csv");
        let cli = parse(&[
            "2",
            "-q",
            "-n",
            "3",
            "--warmup",
            "1",
            "--max-segments",
            "16",
            "--format",
            "csv",
            "-o",
            path.to_str().unwrap(),
        ]);
        run_with_cli(cli).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "segments,method,mean,min,max,stddev");
        // 3 segment counts × (5 rows + fastest)
        assert_eq!(lines.len(), 1 + 3 * 6);
        assert!(lines[1].starts_with("4,method1,"));
        assert!(lines[6].starts_with("* 4,"));
        assert!(lines[18].starts_with("* 16,"));
    }

    #[test]
    fn test_run_writes_json() {
        let path = temp_path("run.json");
        let cli = parse(&[
            "1",
            "-q",
            "-n",
            "2",
            "--warmup",
            "0",
            "--max-segments",
            "8",
            "--filter",
            "bis",
            "--format",
            "json",
            "-o",
            path.to_str().unwrap(),
        ]);
        run_with_cli(cli).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["meta"]["config"]["threads"], 1);
        assert_eq!(value["results"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["results"][0]["fastest"]["method"], "method2_bis");
    }

    #[test]
    fn test_bad_format_fails() {
        let cli = parse(&["1", "-q", "--format", "xml", "--max-segments", "4"]);
        assert!(run_with_cli(cli).is_err());
    }
}
