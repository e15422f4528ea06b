//! Generator Variants
//!
//! Five execution strategies for the same vertex formula. They differ only
//! in how the work is laid out:
//!
//! | Variant       | Angle pass            | Rotation pass                 |
//! |---------------|-----------------------|-------------------------------|
//! | `method1`     | cos/sin tables        | reads tables                  |
//! | `method2`     | fused                 | cos/sin inline                |
//! | `method1_par` | cos/sin tables (par)  | reads tables (par)            |
//! | `method2_par` | angle array (par)     | cos/sin of angle array (par)  |
//! | `method2_bis` | angle array           | cos/sin of angle array        |
//!
//! Callers have already rejected `segments < 3`.

use crate::ellipse::{Block, Frame, PointBuffers, vertex_angle};
use crate::parallel::WorkerPool;
use rayon::prelude::*;
use std::f64::consts::TAU;

fn angle_step(segments: usize) -> f64 {
    TAU / segments as f64
}

/// z/m for the sequential variants, written once x/y are done
fn fill_zm(frame: &Frame, out: &mut PointBuffers) {
    let z = frame.has_z.then_some(out.z.as_mut_slice());
    let m = frame.has_m.then_some(out.m.as_mut_slice());
    frame.fill_zm(z, m);
}

pub(crate) fn method1(frame: &Frame, segments: usize, out: &mut PointBuffers) {
    let step = angle_step(segments);

    let mut cos_t = vec![0.0; segments];
    let mut sin_t = vec![0.0; segments];
    for (i, (c, s)) in cos_t.iter_mut().zip(sin_t.iter_mut()).enumerate() {
        let angle = vertex_angle(step, i);
        *c = angle.cos();
        *s = angle.sin();
    }

    out.resize(segments, frame.has_z, frame.has_m);

    for (((x, y), c), s) in out
        .x
        .iter_mut()
        .zip(out.y.iter_mut())
        .zip(&cos_t)
        .zip(&sin_t)
    {
        (*x, *y) = frame.vertex(*c, *s);
    }
    fill_zm(frame, out);
}

pub(crate) fn method2(frame: &Frame, segments: usize, out: &mut PointBuffers) {
    let step = angle_step(segments);

    out.resize(segments, frame.has_z, frame.has_m);

    for (i, (x, y)) in out.x.iter_mut().zip(out.y.iter_mut()).enumerate() {
        let t = vertex_angle(step, i);
        (*x, *y) = frame.vertex(t.cos(), t.sin());
    }
    fill_zm(frame, out);
}

pub(crate) fn method1_par(frame: &Frame, segments: usize, out: &mut PointBuffers, pool: &WorkerPool) {
    let step = angle_step(segments);
    let block_len = pool.block_len(segments);

    let mut cos_t = vec![0.0; segments];
    let mut sin_t = vec![0.0; segments];

    pool.install(|| {
        cos_t
            .par_chunks_mut(block_len)
            .zip(sin_t.par_chunks_mut(block_len))
            .enumerate()
            .for_each(|(block, (cos_block, sin_block))| {
                let start = block * block_len;
                for (j, (c, s)) in cos_block.iter_mut().zip(sin_block.iter_mut()).enumerate() {
                    let angle = vertex_angle(step, start + j);
                    *c = angle.cos();
                    *s = angle.sin();
                }
            });

        out.resize(segments, frame.has_z, frame.has_m);

        let (cos_t, sin_t) = (&cos_t, &sin_t);
        out.blocks(block_len, frame.has_z, frame.has_m)
            .into_par_iter()
            .for_each(|Block { start, x, y, z, m }| {
                let end = start + x.len();
                for (((x, y), c), s) in x
                    .iter_mut()
                    .zip(y.iter_mut())
                    .zip(&cos_t[start..end])
                    .zip(&sin_t[start..end])
                {
                    (*x, *y) = frame.vertex(*c, *s);
                }
                frame.fill_zm(z, m);
            });
    });
}

pub(crate) fn method2_par(frame: &Frame, segments: usize, out: &mut PointBuffers, pool: &WorkerPool) {
    let step = angle_step(segments);
    let block_len = pool.block_len(segments);

    let mut t = vec![0.0; segments];

    pool.install(|| {
        t.par_chunks_mut(block_len)
            .enumerate()
            .for_each(|(block, t_block)| {
                let start = block * block_len;
                for (j, t) in t_block.iter_mut().enumerate() {
                    *t = vertex_angle(step, start + j);
                }
            });

        out.resize(segments, frame.has_z, frame.has_m);

        let t = &t;
        out.blocks(block_len, frame.has_z, frame.has_m)
            .into_par_iter()
            .for_each(|Block { start, x, y, z, m }| {
                let end = start + x.len();
                for ((x, y), t) in x.iter_mut().zip(y.iter_mut()).zip(&t[start..end]) {
                    (*x, *y) = frame.vertex(t.cos(), t.sin());
                }
                frame.fill_zm(z, m);
            });
    });
}

// Indexed loops are what this variant measures against `method2_par`.
#[allow(clippy::needless_range_loop)]
pub(crate) fn method2_bis(frame: &Frame, segments: usize, out: &mut PointBuffers) {
    let step = angle_step(segments);

    let mut t = vec![0.0; segments];
    for i in 0..segments {
        t[i] = vertex_angle(step, i);
    }

    out.resize(segments, frame.has_z, frame.has_m);

    for i in 0..segments {
        let (x, y) = frame.vertex(t[i].cos(), t[i].sin());
        out.x[i] = x;
        out.y[i] = y;
        if frame.has_z {
            out.z[i] = frame.cz;
        }
        if frame.has_m {
            out.m[i] = frame.cm;
        }
    }
}
