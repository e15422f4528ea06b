//! Point Value
//!
//! Immutable 2D/3D position with an optional measure. The `has_z`/`has_m`
//! flags decide whether z and m carry meaning; the values themselves are
//! always stored.

/// A position with optional elevation (z) and measure (m)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
    m: f64,
    has_z: bool,
    has_m: bool,
}

impl Point {
    /// Create a 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Create a 3D point
    pub fn new_z(x: f64, y: f64, z: f64) -> Self {
        Self {
            z,
            has_z: true,
            ..Self::new(x, y)
        }
    }

    /// Create a 2D point carrying a measure
    pub fn new_m(x: f64, y: f64, m: f64) -> Self {
        Self {
            m,
            has_m: true,
            ..Self::new(x, y)
        }
    }

    /// Create a 3D point carrying a measure
    pub fn new_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            z,
            m,
            has_z: true,
            has_m: true,
            ..Self::new(x, y)
        }
    }

    /// X coordinate
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z coordinate (0 unless `is_3d`)
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Measure (0 unless `is_measure`)
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Whether z is meaningful
    pub fn is_3d(&self) -> bool {
        self.has_z
    }

    /// Whether m is meaningful
    pub fn is_measure(&self) -> bool {
        self.has_m
    }

    /// Offset this point by `distance` along `azimuth` (radians, counter-clockwise
    /// from the positive x-axis). z, m and both flags are carried over unchanged.
    pub fn project(&self, distance: f64, azimuth: f64) -> Self {
        let dx = distance * azimuth.cos();
        let dy = distance * azimuth.sin();
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
