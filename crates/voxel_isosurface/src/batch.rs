//! Batch extraction: one mesh per chunk region.
//!
//! Runs a sequential [`RegularCellExtractor`] per region on the rayon pool.
//! Each chunk gets its own mesh, so chunks can be uploaded or discarded
//! independently.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ Batch Extraction                                                        │
//! │                                                                         │
//! │  regions: [Region { min, size, lod }, ...]                              │
//! │           │                                                             │
//! │           ▼  (rayon, one task per region)                               │
//! │  ┌─────────────────────────────────────────────────────────┐            │
//! │  │ RegularCellExtractor::extract(&mut mesh, &region)       │            │
//! │  │ → TerrainMesh { vertices, normals, indices }            │            │
//! │  └─────────────────────────────────────────────────────────┘            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  [ChunkMesh { region, mesh, stats }, ...]   (input order)               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use glam::IVec3;
use rayon::prelude::*;

use crate::error::{ExtractError, Result};
use crate::extractor::RegularCellExtractor;
use crate::mesh::TerrainMesh;
use crate::region::Region;
use crate::stats::ExtractionStats;
use crate::types::ExtractorConfig;
use crate::volume::VolumeField;

/// Mesh of one chunk region.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkMesh {
  pub region: Region,
  pub mesh: TerrainMesh,
  pub stats: ExtractionStats,
}

/// Mesh a single region into a fresh mesh.
///
/// Cells are walked sequentially; parallelism comes from running many
/// chunks at once.
pub fn mesh_chunk<V: VolumeField + ?Sized>(volume: &V, region: Region) -> Result<ChunkMesh> {
  let extractor = RegularCellExtractor::with_config(volume, ExtractorConfig::sequential());
  let mut mesh = TerrainMesh::new();
  let stats = extractor.extract(&mut mesh, &region)?;

  Ok(ChunkMesh {
    region,
    mesh,
    stats,
  })
}

/// Mesh multiple regions in parallel using rayon.
///
/// Results maintain the same order as inputs for deterministic output. The
/// first failing region aborts the batch.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "batch::extract_batch"))]
pub fn extract_batch<V: VolumeField + ?Sized>(volume: &V, regions: &[Region]) -> Result<Vec<ChunkMesh>> {
  if regions.is_empty() {
    return Ok(Vec::new());
  }

  let chunks: Vec<ChunkMesh> = regions
    .par_iter()
    .map(|region| mesh_chunk(volume, *region))
    .collect::<Result<_>>()?;

  #[cfg(feature = "tracing")]
  tracing::debug!(
    chunks = chunks.len(),
    triangles = chunks.iter().map(|c| c.stats.triangles).sum::<u64>(),
    "batch extracted"
  );

  Ok(chunks)
}

/// Tile `chunks³` regions of `chunk_size` cells at step `lod`, starting at
/// `origin`, in x-major / z-minor order.
///
/// Adjacent tiles share their boundary corner samples, so the chunk meshes
/// line up without gaps.
pub fn chunk_regions(origin: IVec3, chunks: u32, chunk_size: u32, lod: u32) -> Result<Vec<Region>> {
  if chunks == 0 {
    return Ok(Vec::new());
  }

  // The whole tiled block must be addressable, not only each tile.
  let total = chunks as u64 * chunk_size as u64;
  if total > u32::MAX as u64 {
    return Err(ExtractError::RegionOutOfRange);
  }
  Region::new(origin, total as u32, lod)?;

  let step = (chunk_size as i64 * lod as i64) as i32;
  let mut regions = Vec::new();
  for x in 0..chunks as i32 {
    for y in 0..chunks as i32 {
      for z in 0..chunks as i32 {
        let min = origin + IVec3::new(x, y, z) * step;
        regions.push(Region::new(min, chunk_size, lod)?);
      }
    }
  }
  Ok(regions)
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;
