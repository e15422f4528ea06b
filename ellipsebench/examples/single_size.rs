//! Time every variant at one segment count
//!
//! Run with:
//!   cargo run --release --example single_size           # 8192 segments
//!   cargo run --release --example single_size -- 65536  # custom size

use ellipsebench::prelude::*;
use ellipsebench::{CsvWriter, MethodRow, RowSink, SegmentResult};

fn main() -> anyhow::Result<()> {
    let segments: u32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 8192,
    };

    let pool = WorkerPool::with_available_parallelism()?;
    let ellipse = ellipsebench::reference_ellipse();
    let mut out = PointBuffers::with_capacity(segments as usize);

    let rows: Vec<MethodRow> = Method::ALL
        .into_iter()
        .map(|method| {
            let samples = measure(
                || ellipse.points(method, segments, &mut out, &pool),
                HarnessConfig::default(),
            );
            MethodRow {
                segments,
                method,
                stats: aggregate(&samples),
            }
        })
        .collect();

    let result = SegmentResult::new(segments, rows);
    let mut writer = CsvWriter::new(std::io::stdout().lock());
    for row in &result.rows {
        writer.method_row(row)?;
    }
    if let Some(fastest) = &result.fastest {
        writer.fastest_row(fastest)?;
    }

    eprintln!("{} threads", pool.threads());
    Ok(())
}
