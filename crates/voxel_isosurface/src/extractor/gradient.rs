//! Corner normals from the density field gradient.
//!
//! Each corner's normal is the central difference of the field along the
//! three axes, always at one world unit regardless of LOD:
//!
//! ```text
//! g.x = (d(p + X) - d(p - X)) * 0.5
//! g.y = (d(p + Y) - d(p - Y)) * 0.5
//! g.z = (d(p + Z) - d(p - Z)) * 0.5
//! n   = normalize(g)
//! ```
//!
//! The normal points towards increasing density, i.e. out of the surface.
//! A flat neighbourhood has a zero gradient and yields a zero normal.

use glam::{IVec3, Vec3};

use crate::constants::{CORNER_COUNT, NORMAL_APRON};
use crate::volume::VolumeField;

/// Normalized gradient at `p`, or zero when the gradient vanishes.
#[inline]
pub fn corner_normal<V: VolumeField + ?Sized>(volume: &V, p: IVec3) -> Vec3 {
  let gradient = Vec3::new(
    central_difference(volume, p, IVec3::X),
    central_difference(volume, p, IVec3::Y),
    central_difference(volume, p, IVec3::Z),
  );
  gradient.normalize_or_zero()
}

/// Normals for all 8 corners of a cell.
#[inline]
pub fn corner_normals<V: VolumeField + ?Sized>(
  volume: &V,
  corners: &[IVec3; CORNER_COUNT],
) -> [Vec3; CORNER_COUNT] {
  std::array::from_fn(|i| corner_normal(volume, corners[i]))
}

#[inline(always)]
fn central_difference<V: VolumeField + ?Sized>(volume: &V, p: IVec3, axis: IVec3) -> f32 {
  let step = axis * NORMAL_APRON;
  let forward = volume.sample(p + step) as i32;
  let backward = volume.sample(p - step) as i32;
  (forward - backward) as f32 * 0.5
}

#[cfg(test)]
#[path = "gradient_test.rs"]
mod gradient_test;
