//! Regular cell sampling and polygonization.

use std::hash::{Hash, Hasher};

use glam::IVec3;
use smallvec::SmallVec;

use super::{case_code, gradient, interpolation};
use crate::constants::{corner_position, CORNER_COUNT, MAX_CELL_VERTICES};
use crate::mesh::TerrainMesh;
use crate::tables;
use crate::types::DensitySample;
use crate::volume::VolumeField;

/// One sampled cell: corner positions and densities.
///
/// Two cells are equal when they sit at the same region-local coordinate;
/// the sampled data is not compared.
#[derive(Clone, Copy, Debug)]
pub struct GridCell {
  /// Region-local cell coordinate.
  pub position: IVec3,

  /// World positions of the 8 corners.
  pub corners: [IVec3; CORNER_COUNT],

  /// Densities at the 8 corners.
  pub densities: [DensitySample; CORNER_COUNT],
}

impl GridCell {
  /// Sample the cell at region-local `cell` of a region starting at `min`.
  #[inline]
  pub fn sample<V: VolumeField + ?Sized>(volume: &V, min: IVec3, cell: IVec3, lod: i32) -> Self {
    let offset = min + cell * lod;
    let corners: [IVec3; CORNER_COUNT] = std::array::from_fn(|i| corner_position(offset, i, lod));
    let densities = corners.map(|p| volume.sample(p));
    Self {
      position: cell,
      corners,
      densities,
    }
  }

  /// Sign-bit case code of the corner densities.
  #[inline]
  pub fn case_code(&self) -> u8 {
    case_code::build(&self.densities)
  }
}

impl PartialEq for GridCell {
  fn eq(&self, other: &Self) -> bool {
    self.position == other.position
  }
}

impl Eq for GridCell {}

impl Hash for GridCell {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.position.hash(state);
  }
}

/// Polygonize one cell into `mesh`.
///
/// Returns false when every corner has the same sign and nothing was
/// emitted. Otherwise appends one vertex per crossing edge and the cell's
/// triangles, indexed into the mesh's global vertex list.
pub fn polygonize_cell<V: VolumeField + ?Sized>(
  volume: &V,
  min: IVec3,
  cell: IVec3,
  lod: i32,
  mesh: &mut TerrainMesh,
) -> bool {
  let grid_cell = GridCell::sample(volume, min, cell, lod);
  let case_code = grid_cell.case_code();
  if case_code::is_uniform(case_code, &grid_cell.densities) {
    return false;
  }

  emit_cell(volume, &grid_cell, case_code, mesh);
  true
}

fn emit_cell<V: VolumeField + ?Sized>(
  volume: &V,
  grid_cell: &GridCell,
  case_code: u8,
  mesh: &mut TerrainMesh,
) {
  let normals = gradient::corner_normals(volume, &grid_cell.corners);
  let topology = tables::topology_of(tables::class_of(case_code));
  let edges = tables::vertex_edges_of(case_code);

  // Local vertex slot -> global mesh index
  let mut mapped: SmallVec<[u32; MAX_CELL_VERTICES]> = SmallVec::new();
  for edge in edges {
    let v0 = edge.corner_a();
    let v1 = edge.corner_b();

    let t = interpolation::edge_weight(grid_cell.densities[v0], grid_cell.densities[v1]);
    let position = interpolation::interpolate_position(
      t,
      grid_cell.corners[v0].as_vec3(),
      grid_cell.corners[v1].as_vec3(),
    );
    let normal = interpolation::blend_normals(t, normals[v0], normals[v1]);

    mapped.push(mesh.push_vertex(position, normal));
  }

  mesh.indices.extend(
    topology
      .indices()
      .iter()
      .map(|&local| mapped[local as usize]),
  );
}

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;
