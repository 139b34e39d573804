//! Fixed-point edge interpolation.
//!
//! For an edge from corner `v0` (density `d0`) to `v1` (density `d1`):
//!
//! ```text
//! t = (d1 << 8) / (d1 - d0)      weight of P0, truncated toward zero
//! u = 256 - t                    weight of P1
//! Q = (P0 * t + P1 * u) / 256
//! N = n0 * (t / 256) + n1 * (u / 256)
//! ```
//!
//! `t` lies in `0..=256` whenever the two densities straddle the surface.
//! A zero density at `v0` gives `t = 256`, so the vertex lands exactly on
//! `P0`. The blended normal is not renormalized.

use glam::Vec3;

use crate::constants::{FIXED_POINT_ONE, FIXED_POINT_SCALE};

/// Weight of the first endpoint in 1/256 units.
///
/// Callers only pass crossing edges, so `d0` and `d1` never compare equal.
#[inline(always)]
pub fn edge_weight(d0: i8, d1: i8) -> i32 {
  let d0 = d0 as i32;
  let d1 = d1 as i32;
  (d1 << 8) / (d1 - d0)
}

/// Position of the surface crossing between `p0` and `p1` for weight `t`.
#[inline(always)]
pub fn interpolate_position(t: i32, p0: Vec3, p1: Vec3) -> Vec3 {
  let u = FIXED_POINT_ONE - t;
  (p0 * t as f32 + p1 * u as f32) * FIXED_POINT_SCALE
}

/// Normal at the crossing, blended with the same weights as the position.
#[inline(always)]
pub fn blend_normals(t: i32, n0: Vec3, n1: Vec3) -> Vec3 {
  let u = FIXED_POINT_ONE - t;
  n0 * (t as f32 * FIXED_POINT_SCALE) + n1 * (u as f32 * FIXED_POINT_SCALE)
}

/// Vertex position and normal on a crossing edge.
///
/// Convenience for callers that hold the raw endpoint data.
#[inline]
pub fn interpolate_vertex(
  (p0, d0, n0): (Vec3, i8, Vec3),
  (p1, d1, n1): (Vec3, i8, Vec3),
) -> (Vec3, Vec3) {
  let t = edge_weight(d0, d1);
  (interpolate_position(t, p0, p1), blend_normals(t, n0, n1))
}

#[cfg(test)]
#[path = "interpolation_test.rs"]
mod interpolation_test;
