#![warn(missing_docs)]
//! EllipseBench Report - Rows and Output Formats
//!
//! Generates the output formats:
//! - CSV (the line-oriented row stream, default)
//! - JSON (machine-readable, with run metadata)
//!
//! Human-readable tables are rendered by the CLI.

mod csv;
mod json;
mod report;

pub use csv::{CSV_HEADER, CsvWriter, format_fastest_row, format_method_row};
pub use json::generate_json_report;
pub use report::{
    FastestRow, MethodRow, NullSink, Report, ReportConfig, ReportMeta, RowSink, SegmentResult,
    SystemInfo, select_fastest,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Streaming CSV rows
    Csv,
    /// JSON with full metadata
    Json,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert!("html".parse::<OutputFormat>().is_err());
    }
}
