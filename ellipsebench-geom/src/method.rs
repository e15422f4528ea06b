//! Generator Variants
//!
//! The five competing strategies, in the fixed order used everywhere a
//! "first wins" decision is made.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ellipse point generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Sequential; cos/sin tables first, then the rotation pass
    Method1,
    /// Sequential; angle, cos/sin and rotation in a single pass
    Method2,
    /// Data-parallel `Method1`
    Method1Omp,
    /// Data-parallel angle fill, then data-parallel rotation reading the angles
    Method2Omp,
    /// Sequential rendition of `Method2Omp`'s two indexed passes
    Method2Bis,
}

impl Method {
    /// All variants, in reporting and tie-break order
    pub const ALL: [Method; 5] = [
        Method::Method1,
        Method::Method2,
        Method::Method1Omp,
        Method::Method2Omp,
        Method::Method2Bis,
    ];

    /// Label used in output rows
    pub fn label(self) -> &'static str {
        match self {
            Method::Method1 => "method1",
            Method::Method2 => "method2",
            Method::Method1Omp => "method1_omp",
            Method::Method2Omp => "method2_omp",
            Method::Method2Bis => "method2_bis",
        }
    }

    /// Whether this variant runs on the worker pool
    pub fn is_parallel(self) -> bool {
        matches!(self, Method::Method1Omp | Method::Method2Omp)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Unknown method label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown method: {0}")]
pub struct ParseMethodError(pub String);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.label() == s)
            .ok_or_else(|| ParseMethodError(s.to_string()))
    }
}
