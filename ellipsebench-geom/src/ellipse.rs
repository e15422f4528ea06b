//! Ellipse and Output Buffers
//!
//! `Ellipse` holds the fixed parameters; the generators themselves live in
//! `variants`. Every generator emits the same vertices:
//!
//! ```text
//! t_i = 2π − (2π / segments) · i                     i ∈ [0, segments)
//! x_i = cx + a·cos(t_i)·cos θ − b·sin(t_i)·sin θ
//! y_i = cy + a·cos(t_i)·sin θ + b·sin(t_i)·cos θ
//! ```
//!
//! θ is not the stored azimuth directly: it is recovered by projecting the
//! center along the azimuth by `a` and taking `atan2` of the offset. Output
//! stays bit-compatible with the established reference numbers this way.

use crate::MIN_SEGMENTS;
use crate::method::Method;
use crate::parallel::WorkerPool;
use crate::point::Point;
use crate::variants;

/// Rotated ellipse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point,
    semi_major_axis: f64,
    semi_minor_axis: f64,
    azimuth: f64,
}

/// Caller-owned coordinate buffers, reused across generator calls.
///
/// Generators resize `x`/`y` to the segment count. `z` and `m` are resized
/// only when the ellipse center has z or m; otherwise they keep whatever they
/// held before the call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointBuffers {
    /// Vertex x coordinates
    pub x: Vec<f64>,
    /// Vertex y coordinates
    pub y: Vec<f64>,
    /// Elevation, written only for 3D centers
    pub z: Vec<f64>,
    /// Measure, written only for measured centers
    pub m: Vec<f64>,
}

impl PointBuffers {
    /// Empty buffers
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers with room for `segments` vertices in every coordinate
    pub fn with_capacity(segments: usize) -> Self {
        Self {
            x: Vec::with_capacity(segments),
            y: Vec::with_capacity(segments),
            z: Vec::with_capacity(segments),
            m: Vec::with_capacity(segments),
        }
    }

    /// Number of generated vertices
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether no vertices are stored
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub(crate) fn resize(&mut self, segments: usize, has_z: bool, has_m: bool) {
        self.x.resize(segments, 0.0);
        self.y.resize(segments, 0.0);
        if has_z {
            self.z.resize(segments, 0.0);
        }
        if has_m {
            self.m.resize(segments, 0.0);
        }
    }

    /// Cut the buffers into contiguous blocks of at most `block_len` vertices.
    /// z/m blocks are present only when flagged.
    pub(crate) fn blocks(&mut self, block_len: usize, has_z: bool, has_m: bool) -> Vec<Block<'_>> {
        let block_len = block_len.max(1);
        let mut x = self.x.as_mut_slice();
        let mut y = self.y.as_mut_slice();
        let mut z = has_z.then_some(self.z.as_mut_slice());
        let mut m = has_m.then_some(self.m.as_mut_slice());

        let mut blocks = Vec::with_capacity(x.len().div_ceil(block_len));
        let mut start = 0;
        while !x.is_empty() {
            let n = block_len.min(x.len());
            blocks.push(Block {
                start,
                x: take_front(&mut x, n),
                y: take_front(&mut y, n),
                z: z.as_mut().map(|s| take_front(s, n)),
                m: m.as_mut().map(|s| take_front(s, n)),
            });
            start += n;
        }
        blocks
    }
}

/// Disjoint slice of the output owned by one worker
pub(crate) struct Block<'a> {
    pub start: usize,
    pub x: &'a mut [f64],
    pub y: &'a mut [f64],
    pub z: Option<&'a mut [f64]>,
    pub m: Option<&'a mut [f64]>,
}

fn take_front<'a>(slice: &mut &'a mut [f64], n: usize) -> &'a mut [f64] {
    let (head, tail) = std::mem::take(slice).split_at_mut(n);
    *slice = tail;
    head
}

/// Per-call constants shared by every variant
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub cx: f64,
    pub cy: f64,
    pub cz: f64,
    pub cm: f64,
    pub has_z: bool,
    pub has_m: bool,
    pub a: f64,
    pub b: f64,
    pub cos_azimuth: f64,
    pub sin_azimuth: f64,
}

impl Frame {
    /// Rotate and scale one unit-circle sample
    #[inline(always)]
    pub fn vertex(&self, cos_t: f64, sin_t: f64) -> (f64, f64) {
        let x = self.cx + self.a * cos_t * self.cos_azimuth - self.b * sin_t * self.sin_azimuth;
        let y = self.cy + self.a * cos_t * self.sin_azimuth + self.b * sin_t * self.cos_azimuth;
        (x, y)
    }

    /// Write z/m for a block of vertices
    #[inline]
    pub fn fill_zm(&self, z: Option<&mut [f64]>, m: Option<&mut [f64]>) {
        if let Some(z) = z {
            z.fill(self.cz);
        }
        if let Some(m) = m {
            m.fill(self.cm);
        }
    }
}

/// Parametric angle of vertex `i`, clockwise from 0
#[inline(always)]
pub(crate) fn vertex_angle(step: f64, i: usize) -> f64 {
    std::f64::consts::TAU - step * i as f64
}

impl Ellipse {
    /// Create an ellipse. Axes and azimuth are not validated; any sign or
    /// ordering of the axes is accepted.
    pub fn new(center: Point, semi_major_axis: f64, semi_minor_axis: f64, azimuth: f64) -> Self {
        Self {
            center,
            semi_major_axis,
            semi_minor_axis,
            azimuth,
        }
    }

    /// Center point; its z/m flags decide whether z/m are generated
    pub fn center(&self) -> Point {
        self.center
    }

    /// Semi-axis along the azimuth direction
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Semi-axis perpendicular to the azimuth
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    /// Rotation as given, in radians
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Rotation angle actually applied by the generators (the azimuth after a
    /// projection/atan2 round-trip)
    pub fn effective_azimuth(&self) -> f64 {
        let p1 = self.center.project(self.semi_major_axis, self.azimuth);
        (p1.y() - self.center.y()).atan2(p1.x() - self.center.x())
    }

    pub(crate) fn frame(&self) -> Frame {
        let azimuth = self.effective_azimuth();
        Frame {
            cx: self.center.x(),
            cy: self.center.y(),
            cz: self.center.z(),
            cm: self.center.m(),
            has_z: self.center.is_3d(),
            has_m: self.center.is_measure(),
            a: self.semi_major_axis,
            b: self.semi_minor_axis,
            cos_azimuth: azimuth.cos(),
            sin_azimuth: azimuth.sin(),
        }
    }

    /// `Method1`: sequential, cos/sin tables then rotation pass
    pub fn points_method1(&self, segments: u32, out: &mut PointBuffers) {
        if segments < MIN_SEGMENTS {
            return;
        }
        variants::method1(&self.frame(), segments as usize, out);
    }

    /// `Method2`: sequential, one inline pass
    pub fn points_method2(&self, segments: u32, out: &mut PointBuffers) {
        if segments < MIN_SEGMENTS {
            return;
        }
        variants::method2(&self.frame(), segments as usize, out);
    }

    /// `Method1Omp`: `Method1` with both passes on the worker pool
    pub fn points_method1_par(&self, segments: u32, out: &mut PointBuffers, pool: &WorkerPool) {
        if segments < MIN_SEGMENTS {
            return;
        }
        variants::method1_par(&self.frame(), segments as usize, out, pool);
    }

    /// `Method2Omp`: parallel angle fill, then parallel rotation reading the angles
    pub fn points_method2_par(&self, segments: u32, out: &mut PointBuffers, pool: &WorkerPool) {
        if segments < MIN_SEGMENTS {
            return;
        }
        variants::method2_par(&self.frame(), segments as usize, out, pool);
    }

    /// `Method2Bis`: `Method2Omp`'s two indexed passes, run sequentially
    pub fn points_method2_bis(&self, segments: u32, out: &mut PointBuffers) {
        if segments < MIN_SEGMENTS {
            return;
        }
        variants::method2_bis(&self.frame(), segments as usize, out);
    }

    /// Generate with the given strategy. Sequential variants ignore `pool`.
    pub fn points(&self, method: Method, segments: u32, out: &mut PointBuffers, pool: &WorkerPool) {
        match method {
            Method::Method1 => self.points_method1(segments, out),
            Method::Method2 => self.points_method2(segments, out),
            Method::Method1Omp => self.points_method1_par(segments, out, pool),
            Method::Method2Omp => self.points_method2_par(segments, out, pool),
            Method::Method2Bis => self.points_method2_bis(segments, out),
        }
    }
}
