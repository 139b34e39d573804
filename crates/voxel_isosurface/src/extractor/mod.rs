//! Regular-cell isosurface extraction.
//!
//! Converts a signed 8-bit density field into a triangle mesh of its zero
//! crossing. Every cell is polygonized on its own from static topology
//! tables, so neighbouring cells duplicate shared vertices instead of
//! welding them.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  volume: impl VolumeField  - density at any integer coordinate  │
//! │  min, size, lod            - validated into a Region            │
//! │  mesh: &mut TerrainMesh    - appended to, never cleared         │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Cell Sampling                       │
//! │  For each cell (x outer, y middle, z inner):                    │
//! │    Corner positions: min + (cell + unit corner) * lod           │
//! │    Load 8 densities, build case code from sign bits             │
//! │    Early-out if uniform (case code 0 or 255)                    │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Vertex Generation                   │
//! │    Corner normals from central differences (±1 unit)            │
//! │    case code → class → vertex count, triangle list              │
//! │    case code → edge descriptor per local vertex                 │
//! │    Fixed-point interpolate position and normal on each edge     │
//! │    Append vertex, record local → global index                   │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 3: Triangulation                       │
//! │    Map the class's local triangle indices to global indices     │
//! │    Append to mesh.indices (counter-clockwise from outside)      │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  mesh.vertices / mesh.normals / mesh.indices (appended)         │
//! │  ExtractionStats: cells, vertices, triangles, timing            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With [`Parallelism::Slabs`](crate::Parallelism::Slabs) each x-slab of
//! cells is meshed into its own fragment on the rayon pool and the fragments
//! are appended in x order, so the result is identical to the sequential
//! walk.

pub mod case_code;
pub mod cell;
pub mod gradient;
pub mod interpolation;

pub use cell::{polygonize_cell, GridCell};

use glam::IVec3;
use rayon::prelude::*;
use web_time::Instant;

use crate::error::{ExtractError, Result};
use crate::mesh::TerrainMesh;
use crate::region::Region;
use crate::stats::ExtractionStats;
use crate::types::ExtractorConfig;
use crate::volume::VolumeField;

/// Surface extraction over a cubic region.
///
/// Implemented by [`RegularCellExtractor`]; other cell schemes (for example
/// transition cells between LODs) plug in behind the same call.
pub trait SurfaceExtractor {
  /// Append the surface of the `size³` cells starting at `min`, sampled
  /// every `lod` units, to `mesh`.
  ///
  /// Arguments are validated before any cell is touched; on error the mesh
  /// is left unchanged.
  fn generate_region(
    &self,
    mesh: &mut TerrainMesh,
    min: IVec3,
    size: u32,
    lod: u32,
  ) -> Result<ExtractionStats>;
}

/// Table-driven extractor for uniform-LOD regular cells.
#[derive(Clone, Debug)]
pub struct RegularCellExtractor<V> {
  volume: V,
  config: ExtractorConfig,
}

impl<V: VolumeField> RegularCellExtractor<V> {
  pub fn new(volume: V) -> Self {
    Self::with_config(volume, ExtractorConfig::default())
  }

  pub fn with_config(volume: V, config: ExtractorConfig) -> Self {
    Self { volume, config }
  }

  /// The field being polygonized.
  pub fn volume(&self) -> &V {
    &self.volume
  }

  pub fn config(&self) -> &ExtractorConfig {
    &self.config
  }

  /// Extract an already validated region into `mesh`.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "extractor::extract"))]
  pub fn extract(&self, mesh: &mut TerrainMesh, region: &Region) -> Result<ExtractionStats> {
    let required = (mesh.vertex_count() as u64).saturating_add(region.max_vertex_count());
    if required > u32::MAX as u64 {
      return Err(ExtractError::IndexOverflow { required });
    }

    let start = Instant::now();
    let vertices_before = mesh.vertex_count();
    let triangles_before = mesh.triangle_count();

    let cells_polygonized = if self.config.runs_parallel(region.cell_count()) {
      extract_slabs(&self.volume, region, mesh)
    } else {
      extract_sequential(&self.volume, region, mesh)
    };

    let stats = ExtractionStats {
      cells_visited: region.cell_count(),
      cells_polygonized,
      vertices: (mesh.vertex_count() - vertices_before) as u64,
      triangles: (mesh.triangle_count() - triangles_before) as u64,
      elapsed_us: start.elapsed().as_micros() as u64,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
      cells = stats.cells_visited,
      polygonized = stats.cells_polygonized,
      vertices = stats.vertices,
      triangles = stats.triangles,
      elapsed_us = stats.elapsed_us,
      "region extracted"
    );

    Ok(stats)
  }
}

impl<V: VolumeField> SurfaceExtractor for RegularCellExtractor<V> {
  fn generate_region(
    &self,
    mesh: &mut TerrainMesh,
    min: IVec3,
    size: u32,
    lod: u32,
  ) -> Result<ExtractionStats> {
    let region = Region::new(min, size, lod)?;
    self.extract(mesh, &region)
  }
}

/// Extract `region` from `volume` into a fresh mesh with the default
/// configuration.
pub fn extract_region<V: VolumeField>(volume: V, region: &Region) -> Result<TerrainMesh> {
  let mut mesh = TerrainMesh::new();
  RegularCellExtractor::new(volume).extract(&mut mesh, region)?;
  Ok(mesh)
}

/// Walk every cell on the calling thread. Returns the number of cells that
/// emitted geometry.
fn extract_sequential<V: VolumeField + ?Sized>(
  volume: &V,
  region: &Region,
  mesh: &mut TerrainMesh,
) -> u64 {
  let mut polygonized = 0;
  for x in 0..region.size() as i32 {
    polygonized += extract_slab(volume, region, x, mesh);
  }
  polygonized
}

/// One rayon task per x-slab, merged in x order.
fn extract_slabs<V: VolumeField + ?Sized>(
  volume: &V,
  region: &Region,
  mesh: &mut TerrainMesh,
) -> u64 {
  let fragments: Vec<(TerrainMesh, u64)> = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("mesh_slabs", slabs = region.size()).entered();

    (0..region.size() as i32)
      .into_par_iter()
      .map(|x| {
        let mut fragment = TerrainMesh::new();
        let polygonized = extract_slab(volume, region, x, &mut fragment);
        (fragment, polygonized)
      })
      .collect()
  };

  #[cfg(feature = "tracing")]
  let _span = tracing::info_span!("merge_slabs").entered();

  let mut polygonized = 0;
  for (fragment, count) in fragments {
    mesh.append(fragment);
    polygonized += count;
  }
  polygonized
}

/// All cells with region-local x coordinate `x`, y then z.
fn extract_slab<V: VolumeField + ?Sized>(
  volume: &V,
  region: &Region,
  x: i32,
  mesh: &mut TerrainMesh,
) -> u64 {
  let min = region.min();
  let lod = region.lod() as i32;
  let size = region.size() as i32;

  let mut polygonized = 0;
  for y in 0..size {
    for z in 0..size {
      if polygonize_cell(volume, min, IVec3::new(x, y, z), lod, mesh) {
        polygonized += 1;
      }
    }
  }
  polygonized
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
