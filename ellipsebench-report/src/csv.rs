//! CSV Output
//!
//! Line-oriented rows, one header line then per segment count one line per
//! variant and a `* `-prefixed winner line. Timings use 9 fractional digits.

use crate::report::{FastestRow, MethodRow, RowSink};
use std::io::Write;

/// Header line (without newline)
pub const CSV_HEADER: &str = "segments,method,mean,min,max,stddev";

/// `segments,method,mean,min,max,stddev`
pub fn format_method_row(row: &MethodRow) -> String {
    format!(
        "{},{},{:.9},{:.9},{:.9},{:.9}",
        row.segments, row.method, row.stats.mean, row.stats.min, row.stats.max, row.stats.stddev
    )
}

/// `* segments,method,mean`
pub fn format_fastest_row(row: &FastestRow) -> String {
    format!("* {},{},{:.9}", row.segments, row.method, row.mean)
}

/// Streams CSV rows to a writer as they arrive
pub struct CsvWriter<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> CsvWriter<W> {
    /// Wrap `out`; the header goes out with the first row
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    /// Write the header now (it is otherwise written before the first row)
    pub fn write_header(&mut self) -> std::io::Result<()> {
        if !self.header_written {
            writeln!(self.out, "{CSV_HEADER}")?;
            self.header_written = true;
        }
        Ok(())
    }

    /// Flush and return the inner writer
    pub fn into_inner(mut self) -> std::io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> RowSink for CsvWriter<W> {
    fn method_row(&mut self, row: &MethodRow) -> std::io::Result<()> {
        self.write_header()?;
        writeln!(self.out, "{}", format_method_row(row))
    }

    fn fastest_row(&mut self, row: &FastestRow) -> std::io::Result<()> {
        self.write_header()?;
        writeln!(self.out, "{}", format_fastest_row(row))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ellipsebench_geom::Method;
    use ellipsebench_stats::TimingStats;

    fn sample_row() -> MethodRow {
        MethodRow {
            segments: 4,
            method: Method::Method1Omp,
            stats: TimingStats {
                mean: 1.5,
                min: 0.25,
                max: 12.0,
                stddev: 0.1234567891,
            },
        }
    }

    #[test]
    fn test_method_row_format() {
        assert_eq!(
            format_method_row(&sample_row()),
            "4,method1_omp,1.500000000,0.250000000,12.000000000,0.123456789"
        );
    }

    #[test]
    fn test_fastest_row_format() {
        let row = FastestRow {
            segments: 524288,
            method: Method::Method2Bis,
            mean: 1234.5,
        };
        assert_eq!(format_fastest_row(&row), "* 524288,method2_bis,1234.500000000");
    }

    #[test]
    fn test_streaming_writer() {
        let mut writer = CsvWriter::new(Vec::new());
        writer.method_row(&sample_row()).unwrap();
        writer
            .fastest_row(&FastestRow {
                segments: 4,
                method: Method::Method1Omp,
                mean: 1.5,
            })
            .unwrap();

        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("4,method1_omp,"));
        assert_eq!(lines[2], "* 4,method1_omp,1.500000000");
    }

    #[test]
    fn test_header_written_once() {
        let mut writer = CsvWriter::new(Vec::new());
        writer.write_header().unwrap();
        writer.method_row(&sample_row()).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(text.matches(CSV_HEADER).count(), 1);
    }
}
