//! Density field contract and reference implementations.
//!
//! The extractor reads densities through [`VolumeField`] only. A field used
//! for a [`Region`] must answer every coordinate in
//! [`Region::sample_bounds`], which extends one unit past the corner samples
//! on each side for the central-difference normals. Reads outside that
//! footprint are never issued. Reads inside it that the field cannot serve
//! are a field bug; the extractor does not detect them.

use std::sync::Arc;

use glam::IVec3;

use crate::region::Region;
use crate::types::DensitySample;

/// Scalar density provider indexed by integer grid coordinate.
///
/// Implementations are read concurrently from rayon workers and must not
/// rely on interior mutation without their own synchronization.
pub trait VolumeField: Sync {
  /// Density at `coord`. Negative = inside.
  fn sample(&self, coord: IVec3) -> DensitySample;
}

impl<V: VolumeField + ?Sized> VolumeField for &V {
  #[inline(always)]
  fn sample(&self, coord: IVec3) -> DensitySample {
    (**self).sample(coord)
  }
}

impl<V: VolumeField + ?Sized> VolumeField for Box<V> {
  #[inline(always)]
  fn sample(&self, coord: IVec3) -> DensitySample {
    (**self).sample(coord)
  }
}

impl<V: VolumeField + ?Sized + Send> VolumeField for Arc<V> {
  #[inline(always)]
  fn sample(&self, coord: IVec3) -> DensitySample {
    (**self).sample(coord)
  }
}

/// Adapter turning a closure into a [`VolumeField`].
#[derive(Clone, Copy, Debug)]
pub struct FnField<F>(pub F);

impl<F> VolumeField for FnField<F>
where
  F: Fn(IVec3) -> DensitySample + Sync,
{
  #[inline(always)]
  fn sample(&self, coord: IVec3) -> DensitySample {
    (self.0)(coord)
  }
}

/// Dense, owned grid of density samples.
///
/// Layout: X is major axis, Z is minor (stride 1), matching the order the
/// extractor walks cells. Reads outside the grid return `fill`.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseVolume {
  origin: IVec3,
  dims: [usize; 3],
  samples: Vec<DensitySample>,
  fill: DensitySample,
}

impl DenseVolume {
  /// Fill every coordinate in the inclusive box `min..=max` from `f`.
  ///
  /// An inverted box yields an empty grid.
  pub fn from_fn<F>(min: IVec3, max: IVec3, mut f: F) -> Self
  where
    F: FnMut(IVec3) -> DensitySample,
  {
    let dims = (max - min + IVec3::ONE)
      .max(IVec3::ZERO)
      .to_array()
      .map(|d| d as usize);

    let mut samples = Vec::with_capacity(dims[0] * dims[1] * dims[2]);
    for x in 0..dims[0] as i32 {
      for y in 0..dims[1] as i32 {
        for z in 0..dims[2] as i32 {
          samples.push(f(min + IVec3::new(x, y, z)));
        }
      }
    }

    Self {
      origin: min,
      dims,
      samples,
      fill: DensitySample::MAX,
    }
  }

  /// Sample `f` over exactly the footprint a region extraction reads.
  pub fn for_region<F>(region: &Region, f: F) -> Self
  where
    F: FnMut(IVec3) -> DensitySample,
  {
    let (min, max) = region.sample_bounds();
    Self::from_fn(min, max, f)
  }

  /// Density returned for reads outside the grid (default: fully outside).
  pub fn with_fill(mut self, fill: DensitySample) -> Self {
    self.fill = fill;
    self
  }

  /// Minimum stored coordinate.
  pub fn min(&self) -> IVec3 {
    self.origin
  }

  /// Samples per axis.
  pub fn dims(&self) -> [usize; 3] {
    self.dims
  }

  /// Whether `coord` is stored in the grid.
  pub fn contains(&self, coord: IVec3) -> bool {
    self.index(coord).is_some()
  }

  /// Overwrite a stored sample. Returns false if `coord` is outside the grid.
  pub fn set(&mut self, coord: IVec3, value: DensitySample) -> bool {
    match self.index(coord) {
      Some(idx) => {
        self.samples[idx] = value;
        true
      }
      None => false,
    }
  }

  #[inline]
  fn index(&self, coord: IVec3) -> Option<usize> {
    let local = coord.as_i64vec3() - self.origin.as_i64vec3();
    if local.min_element() < 0 {
      return None;
    }
    let [x, y, z] = local.to_array().map(|v| v as usize);
    let [dx, dy, dz] = self.dims;
    if x >= dx || y >= dy || z >= dz {
      return None;
    }
    Some((x * dy + y) * dz + z)
  }
}

impl VolumeField for DenseVolume {
  #[inline]
  fn sample(&self, coord: IVec3) -> DensitySample {
    match self.index(coord) {
      Some(idx) => self.samples[idx],
      None => self.fill,
    }
  }
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;
