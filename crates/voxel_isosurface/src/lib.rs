//! voxel_isosurface - Framework/engine independent isosurface extraction
//!
//! This crate turns signed 8-bit density fields into triangle meshes of
//! their zero crossing. Cells are polygonized independently from static
//! regular-cell topology tables, with fixed-point edge interpolation and
//! per-corner gradient normals. Regions can be sampled at any integer level
//! of detail.
//!
//! # Features
//!
//! - **Regular-cell polygonization**: 256 case codes folded into 13
//!   topology classes, at most 5 triangles per cell
//! - **LOD stepping**: cells span `lod` world units; normals always use
//!   one-unit central differences
//! - **Slab parallelism**: rayon-parallel extraction with output identical
//!   to the sequential walk
//! - **Batch meshing**: many chunk regions at once, one mesh per chunk
//!
//! # Example
//!
//! ```ignore
//! use glam::{IVec3, Vec3};
//! use voxel_isosurface::{RegularCellExtractor, SphereSampler, SurfaceExtractor, TerrainMesh};
//!
//! let field = SphereSampler::new(10.0).with_center(Vec3::splat(16.0));
//! let extractor = RegularCellExtractor::new(field);
//!
//! let mut mesh = TerrainMesh::new();
//! let stats = extractor.generate_region(&mut mesh, IVec3::ZERO, 32, 1)?;
//!
//! println!("Generated {} vertices, {} triangles",
//!     mesh.vertex_count(), mesh.triangle_count());
//! ```

pub mod constants;
pub mod error;
pub mod mesh;
pub mod region;
pub mod stats;
pub mod tables;
pub mod types;
pub mod volume;

// Re-export commonly used items
pub use constants::{CORNER_UNIT_OFFSETS, EDGE_CORNERS, MAX_CELL_TRIANGLES, MAX_CELL_VERTICES};
pub use error::{ExtractError, Result};
pub use mesh::TerrainMesh;
pub use region::Region;
pub use stats::ExtractionStats;
pub use tables::{class_of, topology_of, vertex_edges_of, EdgeDescriptor, RegularCell};
pub use types::{sdf_conversion, DensitySample, ExtractorConfig, MinMaxAABB, Parallelism};
pub use volume::{DenseVolume, FnField, VolumeField};

// Regular-cell extraction
pub mod extractor;
pub use extractor::{extract_region, GridCell, RegularCellExtractor, SurfaceExtractor};

// Parallel per-chunk meshing
pub mod batch;
pub use batch::{chunk_regions, extract_batch, ChunkMesh};

// Analytic fields for tests, benches and demos
pub mod sdf_samplers;
pub use sdf_samplers::{SphereSampler, TiltedPlaneSampler};
