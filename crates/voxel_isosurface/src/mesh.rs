//! Terrain mesh accumulator.
//!
//! ```text
//! vertices: [Q0, Q1, Q2, ...]      positions, world units
//! normals:  [N0, N1, N2, ...]      parallel to vertices
//! indices:  [i0, i1, i2, ...]      3 per triangle, each < vertices.len()
//! ```
//!
//! Triangles are counter-clockwise when seen from the positive (outside)
//! side of the surface. Vertices are not shared between cells.

use glam::Vec3;

use crate::error::{ExtractError, Result};
use crate::types::MinMaxAABB;

/// Append-only triangle mesh produced by extraction and handed to the
/// caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerrainMesh {
  /// Vertex positions.
  pub vertices: Vec<Vec3>,

  /// Interpolated vertex normals (parallel to `vertices`, not renormalized).
  pub normals: Vec<Vec3>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,
}

impl TerrainMesh {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pre-size the buffers for an expected amount of geometry.
  pub fn with_capacity(vertices: usize, indices: usize) -> Self {
    Self {
      vertices: Vec::with_capacity(vertices),
      normals: Vec::with_capacity(vertices),
      indices: Vec::with_capacity(indices),
    }
  }

  /// Append a vertex and return its index.
  #[inline]
  pub fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
    let index = self.vertices.len() as u32;
    self.vertices.push(position);
    self.normals.push(normal);
    index
  }

  /// Index of the most recently appended vertex.
  pub fn last_vertex_index(&self) -> Option<u32> {
    self.vertices.len().checked_sub(1).map(|i| i as u32)
  }

  /// Append another mesh, offsetting its indices past the current vertices.
  pub fn append(&mut self, mut other: TerrainMesh) {
    let offset = self.vertices.len() as u32;
    self.vertices.append(&mut other.vertices);
    self.normals.append(&mut other.normals);
    self
      .indices
      .extend(other.indices.into_iter().map(|index| index + offset));
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.normals.clear();
    self.indices.clear();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of vertices in the mesh.
  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Bounding box of all vertex positions.
  pub fn bounds(&self) -> MinMaxAABB {
    let mut bounds = MinMaxAABB::empty();
    for &position in &self.vertices {
      bounds.encapsulate(position);
    }
    bounds
  }

  /// Check the structural invariants renderers rely on.
  pub fn validate(&self) -> Result<()> {
    if self.vertices.len() != self.normals.len() {
      return Err(ExtractError::MalformedMesh {
        reason: format!(
          "{} vertices but {} normals",
          self.vertices.len(),
          self.normals.len()
        ),
      });
    }
    if self.indices.len() % 3 != 0 {
      return Err(ExtractError::MalformedMesh {
        reason: format!("index count {} is not a multiple of 3", self.indices.len()),
      });
    }
    if let Some(&index) = self
      .indices
      .iter()
      .find(|&&index| index as usize >= self.vertices.len())
    {
      return Err(ExtractError::MalformedMesh {
        reason: format!(
          "index {} out of range for {} vertices",
          index,
          self.vertices.len()
        ),
      });
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;
