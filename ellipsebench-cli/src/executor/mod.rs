//! Benchmark Executor
//!
//! Runs the segment sweep and collects results.
//!
//! ## Pipeline Overview
//!
//! ```text
//! ExecutionPlan (methods × segment counts)
//!       │
//!       ▼
//! ┌──────────────┐
//! │ verification │  Optional cross-check of all variants
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │  execution   │  Warmup, timed calls, per-cell statistics
//! └──────┬───────┘     (rows streamed to a RowSink)
//!        │
//!        ▼
//! ┌──────────────┐
//! │    report    │  Report with run metadata
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │  formatting  │  Human-readable output
//! └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - The sweep loop
//! - [`verification`] - Cross-variant output check
//! - [`report`] - Report building
//! - [`formatting`] - Human-readable output formatting
//! - [`metadata`] - System metadata collection

mod execution;
mod formatting;
mod metadata;
mod report;
mod verification;

// Re-export public API
pub use execution::{ExecutionConfig, Executor, reference_ellipse};
pub use formatting::format_human_output;
pub use metadata::build_report_meta;
pub use report::build_report;
pub use verification::{VERIFY_TOLERANCE, VerificationError, verify_variants};
