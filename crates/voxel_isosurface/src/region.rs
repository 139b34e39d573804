//! Validated extraction requests.

use glam::IVec3;

use crate::constants::{MAX_CELL_VERTICES, NORMAL_APRON};
use crate::error::{ExtractError, Result};

/// A cubic block of `size³` regular cells starting at `min`, sampled every
/// `lod` world units.
///
/// Construction checks that the whole sample footprint, including the
/// one-unit normal apron, fits in `i32` coordinates, so cell and corner
/// arithmetic inside the extractor cannot overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
  min: IVec3,
  size: u32,
  lod: u32,
}

impl Region {
  pub fn new(min: IVec3, size: u32, lod: u32) -> Result<Self> {
    if size == 0 {
      return Err(ExtractError::InvalidSize { size });
    }
    if lod == 0 {
      return Err(ExtractError::InvalidLod { lod });
    }

    let extent = size as i64 * lod as i64;
    let apron = NORMAL_APRON as i64;
    for axis in min.to_array() {
      let low = axis as i64 - apron;
      let high = axis as i64 + extent + apron;
      if low < i32::MIN as i64 || high > i32::MAX as i64 {
        return Err(ExtractError::RegionOutOfRange);
      }
    }

    Ok(Self { min, size, lod })
  }

  /// Minimum corner in world coordinates.
  pub fn min(&self) -> IVec3 {
    self.min
  }

  /// Cells per axis.
  pub fn size(&self) -> u32 {
    self.size
  }

  /// World units per cell step.
  pub fn lod(&self) -> u32 {
    self.lod
  }

  /// World units covered per axis (`size * lod`).
  pub fn extent(&self) -> i32 {
    (self.size as i64 * self.lod as i64) as i32
  }

  /// Total number of cells.
  pub fn cell_count(&self) -> u64 {
    let size = self.size as u64;
    size.saturating_mul(size).saturating_mul(size)
  }

  /// Upper bound on vertices this region can emit.
  pub fn max_vertex_count(&self) -> u64 {
    self.cell_count().saturating_mul(MAX_CELL_VERTICES as u64)
  }

  /// Minimum corner of the cell at region-local coordinate `cell`.
  #[inline(always)]
  pub fn cell_offset(&self, cell: IVec3) -> IVec3 {
    self.min + cell * self.lod as i32
  }

  /// Inclusive bounds of every coordinate the extractor may sample.
  pub fn sample_bounds(&self) -> (IVec3, IVec3) {
    let apron = IVec3::splat(NORMAL_APRON);
    (
      self.min - apron,
      self.min + IVec3::splat(self.extent()) + apron,
    )
  }

  /// Region-local cell coordinates in extraction order (x outer, z inner).
  pub fn cells(&self) -> impl Iterator<Item = IVec3> {
    let size = self.size as i32;
    (0..size).flat_map(move |x| {
      (0..size).flat_map(move |y| (0..size).map(move |z| IVec3::new(x, y, z)))
    })
  }
}

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;
