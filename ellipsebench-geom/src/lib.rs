#![warn(missing_docs)]
//! EllipseBench Geometry
//!
//! The workload under measurement: vertex generation for a rotated ellipse.
//! - `Point` with optional z/m and azimuth projection
//! - `Ellipse` with five interchangeable point generators
//! - `WorkerPool` sizing the data-parallel generators
//!
//! All generators write into caller-owned `PointBuffers` so repeated calls
//! reuse the same allocations.

mod ellipse;
mod method;
mod parallel;
mod point;
mod variants;

pub use ellipse::{Ellipse, PointBuffers};
pub use method::{Method, ParseMethodError};
pub use parallel::{PoolError, WorkerPool, available_parallelism};
pub use point::Point;

/// Fewest vertices a generator will emit; smaller requests are a no-op.
pub const MIN_SEGMENTS: u32 = 3;
