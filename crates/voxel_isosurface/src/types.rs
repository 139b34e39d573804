//! Core data types for isosurface extraction.

use glam::Vec3;

/// Signed density sample.
/// Negative = inside/solid, zero or positive = outside/air.
pub type DensitySample = i8;

/// SDF conversion utilities for quantized storage.
///
/// Maps float SDF to i8 [-127, +127] with ±10 world unit range.
/// Precision: ~0.079 world units per level (254 levels over 20 units).
pub mod sdf_conversion {
  /// SDF range in world units (values outside this clamp to ±127).
  pub const RANGE: f32 = 10.0;

  /// Scale factor: 127 / RANGE = 12.7
  pub const SCALE: f32 = 127.0 / RANGE;

  /// Inverse scale for converting back to float.
  pub const INV_SCALE: f32 = RANGE / 127.0;

  /// Convert float SDF to quantized i8 storage.
  #[inline(always)]
  pub fn to_storage(sdf: f32) -> i8 {
    (sdf * SCALE).clamp(-127.0, 127.0).round() as i8
  }

  /// Convert quantized i8 storage back to float SDF.
  #[inline(always)]
  pub fn to_float(value: i8) -> f32 {
    value as f32 * INV_SCALE
  }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: Vec3,
  pub max: Vec3,
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: Vec3::splat(f32::INFINITY),
      max: Vec3::splat(f32::NEG_INFINITY),
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: Vec3, max: Vec3) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: Vec3) {
    self.min = self.min.min(point);
    self.max = self.max.max(point);
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min.cmple(self.max).all()
  }

  /// Check if a point lies inside (inclusive).
  pub fn contains(&self, point: Vec3) -> bool {
    self.min.cmple(point).all() && point.cmple(self.max).all()
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// How a region extraction spreads its cells across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Parallelism {
  /// Single thread, x outer, y middle, z inner.
  Sequential,

  /// One rayon task per x-slab, each filling a private mesh fragment.
  /// Fragments are appended in x order, so output matches `Sequential`
  /// bit for bit.
  #[default]
  Slabs,
}

impl Parallelism {
  /// Short name for logs and bench labels.
  pub fn label(&self) -> &'static str {
    match self {
      Parallelism::Sequential => "sequential",
      Parallelism::Slabs => "slabs",
    }
  }
}

/// Configuration for region extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractorConfig {
  /// Thread distribution strategy.
  pub parallelism: Parallelism,

  /// Regions with fewer cells than this run sequentially even when
  /// `parallelism` is `Slabs`.
  pub min_parallel_cells: u64,
}

impl Default for ExtractorConfig {
  fn default() -> Self {
    Self {
      parallelism: Parallelism::default(),
      min_parallel_cells: 16 * 16 * 16,
    }
  }
}

impl ExtractorConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Sequential extraction, no rayon involvement.
  pub fn sequential() -> Self {
    Self::default().with_parallelism(Parallelism::Sequential)
  }

  pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
    self.parallelism = parallelism;
    self
  }

  pub fn with_min_parallel_cells(mut self, cells: u64) -> Self {
    self.min_parallel_cells = cells;
    self
  }

  /// Whether a region of `cell_count` cells should be split into slabs.
  pub fn runs_parallel(&self, cell_count: u64) -> bool {
    self.parallelism == Parallelism::Slabs && cell_count >= self.min_parallel_cells
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
