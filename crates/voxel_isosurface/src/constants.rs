//! Cube layout constants shared by the tables and the cell polygonizer.
//!
//! # Cube Topology
//!
//! ```text
//!       6──────7         Corners (binary ZYX):
//!      /│     /│           0=(0,0,0)  1=(1,0,0)  2=(0,1,0)  3=(1,1,0)
//!     4─┼────5 │           4=(0,0,1)  5=(1,0,1)  6=(0,1,1)  7=(1,1,1)
//!     │ 2────┼─3
//!     │/     │/          +Y
//!     0──────1            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! # Sample Footprint
//!
//! A region of `size` cells at step `lod` reads corner samples on
//! `[min, min + size * lod]` per axis. Corner normals read one unit further
//! on each side, so the field must answer `[min - 1, min + size * lod + 1]`.
//!
//! ```text
//!   apron   corner samples (step = lod)        apron
//!     │    │                             │       │
//!   min-1  min ── min+lod ── ... ── min+size·lod  min+size·lod+1
//! ```

use glam::IVec3;

/// Number of corners of a cell.
pub const CORNER_COUNT: usize = 8;

/// Number of edges of a cell.
pub const EDGE_COUNT: usize = 12;

/// Maximum number of vertices a single regular cell can emit (one per edge).
pub const MAX_CELL_VERTICES: usize = 12;

/// Maximum number of triangles a single regular cell can emit.
pub const MAX_CELL_TRIANGLES: usize = 5;

/// Extra samples needed on every side of a region for corner normals.
pub const NORMAL_APRON: i32 = 1;

/// Fixed-point one for edge interpolation weights (8 fractional bits).
pub const FIXED_POINT_ONE: i32 = 0x0100;

/// Inverse of [`FIXED_POINT_ONE`] used to bring weighted sums back to world
/// units.
pub const FIXED_POINT_SCALE: f32 = 1.0 / 256.0;

/// Unit offsets for the 8 cube corners.
///
/// Corner layout (binary: ZYX):
/// - 0 = (0,0,0)
/// - 1 = (1,0,0)
/// - 2 = (0,1,0)
/// - 3 = (1,1,0)
/// - 4 = (0,0,1)
/// - 5 = (1,0,1)
/// - 6 = (0,1,1)
/// - 7 = (1,1,1)
pub const CORNER_UNIT_OFFSETS: [IVec3; CORNER_COUNT] = [
  IVec3::new(0, 0, 0),
  IVec3::new(1, 0, 0),
  IVec3::new(0, 1, 0),
  IVec3::new(1, 1, 0),
  IVec3::new(0, 0, 1),
  IVec3::new(1, 0, 1),
  IVec3::new(0, 1, 1),
  IVec3::new(1, 1, 1),
];

/// Edge endpoint corner indices, lower corner first.
pub const EDGE_CORNERS: [[u8; 2]; EDGE_COUNT] = [
  [0, 1], // Edge 0:  X axis at Y=0, Z=0
  [0, 2], // Edge 1:  Y axis at X=0, Z=0
  [0, 4], // Edge 2:  Z axis at X=0, Y=0
  [1, 3], // Edge 3:  Y axis at X=1, Z=0
  [1, 5], // Edge 4:  Z axis at X=1, Y=0
  [2, 3], // Edge 5:  X axis at Y=1, Z=0
  [2, 6], // Edge 6:  Z axis at X=0, Y=1
  [3, 7], // Edge 7:  Z axis at X=1, Y=1
  [4, 5], // Edge 8:  X axis at Y=0, Z=1
  [4, 6], // Edge 9:  Y axis at X=0, Z=1
  [5, 7], // Edge 10: Y axis at X=1, Z=1
  [6, 7], // Edge 11: X axis at Y=1, Z=1
];

/// World position of `corner` for a cell whose minimum corner is `offset`.
#[inline(always)]
pub fn corner_position(offset: IVec3, corner: usize, lod: i32) -> IVec3 {
  offset + CORNER_UNIT_OFFSETS[corner] * lod
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
