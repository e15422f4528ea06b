//! Cross-Variant Verification
//!
//! Before a segment count is timed, every selected variant is run once into
//! its own buffers and compared coordinate-by-coordinate with `method1`.
//! The first disagreement beyond [`VERIFY_TOLERANCE`] aborts the sweep.
//!
//! ```text
//! method1 ─► reference buffers
//!                │
//!   method2 ─────┤ compare x, y (and z/m when the center carries them)
//!   method1_omp ─┤
//!   ...          ▼
//!           Ok(()) / VerificationError
//! ```

use ellipsebench_geom::{Ellipse, MIN_SEGMENTS, Method, PointBuffers, WorkerPool};
use thiserror::Error;

/// Largest absolute coordinate difference accepted between variants
pub const VERIFY_TOLERANCE: f64 = 1e-9;

/// A variant produced output that does not match the reference
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VerificationError {
    /// Output length differs from the segment count
    #[error("{method} produced {actual} vertices for {segments} segments")]
    Length {
        /// Segment count requested
        segments: u32,
        /// Variant checked
        method: Method,
        /// Vertices it produced
        actual: usize,
    },

    /// A coordinate differs from the reference beyond tolerance
    #[error(
        "{method} disagrees with {reference} at {segments} segments: \
         {coordinate}[{index}] = {value} (expected {expected})"
    )]
    Mismatch {
        /// Segment count requested
        segments: u32,
        /// Variant checked
        method: Method,
        /// Variant compared against
        reference: Method,
        /// Axis name: `x`, `y`, `z` or `m`
        coordinate: char,
        /// Vertex index
        index: usize,
        /// Value produced by `method`
        value: f64,
        /// Value produced by `reference`
        expected: f64,
    },
}

/// Check that every variant in `methods` reproduces `method1`'s vertices.
///
/// Segment counts below the generator minimum produce no output and are
/// accepted as-is.
pub fn verify_variants(
    ellipse: &Ellipse,
    segments: u32,
    methods: &[Method],
    pool: &WorkerPool,
) -> Result<(), VerificationError> {
    if segments < MIN_SEGMENTS {
        return Ok(());
    }

    let reference_method = Method::Method1;
    let mut reference = PointBuffers::new();
    ellipse.points(reference_method, segments, &mut reference, pool);

    let center = ellipse.center();
    let mut candidate = PointBuffers::new();

    for &method in methods.iter().filter(|m| **m != reference_method) {
        candidate.x.clear();
        candidate.y.clear();
        candidate.z.clear();
        candidate.m.clear();
        ellipse.points(method, segments, &mut candidate, pool);

        if candidate.len() != segments as usize {
            return Err(VerificationError::Length {
                segments,
                method,
                actual: candidate.len(),
            });
        }

        let mismatch = |coordinate, index, value, expected| VerificationError::Mismatch {
            segments,
            method,
            reference: reference_method,
            coordinate,
            index,
            value,
            expected,
        };

        compare(&candidate.x, &reference.x).map_err(|(i, v, e)| mismatch('x', i, v, e))?;
        compare(&candidate.y, &reference.y).map_err(|(i, v, e)| mismatch('y', i, v, e))?;
        if center.is_3d() {
            compare(&candidate.z, &reference.z).map_err(|(i, v, e)| mismatch('z', i, v, e))?;
        }
        if center.is_measure() {
            compare(&candidate.m, &reference.m).map_err(|(i, v, e)| mismatch('m', i, v, e))?;
        }
    }

    Ok(())
}

/// First index where the coordinates differ by more than the tolerance
fn compare(actual: &[f64], expected: &[f64]) -> Result<(), (usize, f64, f64)> {
    for (i, (&value, &reference)) in actual.iter().zip(expected).enumerate() {
        let diff = (value - reference).abs();
        if diff.is_nan() || diff > VERIFY_TOLERANCE {
            return Err((i, value, reference));
        }
    }
    if actual.len() != expected.len() {
        let i = actual.len().min(expected.len());
        return Err((i, f64::NAN, f64::NAN));
    }
    Ok(())
}
