//! Regular cell topology tables.
//!
//! Maps an 8-bit case code (one sign bit per corner) to an equivalence class,
//! and a class to the triangle connectivity of its local vertices. A second
//! table gives, per case code, the cube edge each local vertex lies on.
//!
//! ```text
//!   case code ──► REGULAR_CELL_CLASS[case] ──► REGULAR_CELL_DATA[class]
//!       │                                        geometry_counts (VVVV TTTT)
//!       │                                        vertex_index[..3·T]
//!       └───────► REGULAR_VERTEX_DATA[case][..V]
//!                   EdgeDescriptor (AAAA BBBB), A < B
//! ```
//!
//! # Generation
//!
//! All tables are generated at compile time:
//!
//! 1. Each cube face pairs its crossing edges into segments. A face with four
//!    crossings (diagonal corners share a sign) gets one segment around each
//!    inside corner, so inside corners never connect across a face diagonal.
//!    The pairing depends only on the four corner signs of the face, which
//!    neighbouring cells share, so the extracted surface has no holes.
//! 2. Every segment is oriented so the inside corner lies to its right when
//!    the face is viewed from outside the cube. Segments chain into closed
//!    loops and loop winding is counter-clockwise seen from the positive
//!    (outside) side of the surface.
//! 3. Loops are ordered longest first and fan-triangulated.
//! 4. Identical triangulations share a class. Classes are numbered in order of
//!    first appearance by case code, so class 0 is the empty cell.

use crate::constants::{EDGE_CORNERS, EDGE_COUNT, MAX_CELL_TRIANGLES, MAX_CELL_VERTICES};

/// Index slots reserved per cell class.
const MAX_CELL_INDICES: usize = MAX_CELL_TRIANGLES * 3;

/// Upper bound on distinct classes accepted by the generator.
const MAX_CELL_CLASSES: usize = 16;

/// Upper bound on independent surface loops in one cell.
const MAX_CELL_LOOPS: usize = MAX_CELL_VERTICES / 3;

/// Marker for "no outgoing segment" while chaining loops.
const NO_EDGE: u8 = 0xFF;

/// Packed cube edge: corner A in the high nibble, corner B in the low nibble.
///
/// Corner A is always the lower corner index. The polygonizer interpolates
/// from A towards B, so this order must not be swapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EdgeDescriptor(u8);

impl EdgeDescriptor {
  /// Pack two corner indices.
  pub const fn new(corner_a: u8, corner_b: u8) -> Self {
    Self(((corner_a & 0x0F) << 4) | (corner_b & 0x0F))
  }

  /// Wrap an already packed byte.
  pub const fn from_raw(raw: u8) -> Self {
    Self(raw)
  }

  /// Packed byte.
  pub const fn raw(self) -> u8 {
    self.0
  }

  /// First (lower) corner index.
  #[inline(always)]
  pub const fn corner_a(self) -> usize {
    ((self.0 >> 4) & 0x0F) as usize
  }

  /// Second (far) corner index.
  #[inline(always)]
  pub const fn corner_b(self) -> usize {
    (self.0 & 0x0F) as usize
  }
}

/// Triangulation shared by every case code of one class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegularCell {
  /// High nibble: vertex count. Low nibble: triangle count.
  geometry_counts: u8,
  /// Local vertex slots, three per triangle.
  vertex_index: [u8; MAX_CELL_INDICES],
}

impl RegularCell {
  const EMPTY: Self = Self {
    geometry_counts: 0,
    vertex_index: [0; MAX_CELL_INDICES],
  };

  /// Number of local vertices.
  #[inline(always)]
  pub const fn vertex_count(&self) -> usize {
    (self.geometry_counts >> 4) as usize
  }

  /// Number of triangles.
  #[inline(always)]
  pub const fn triangle_count(&self) -> usize {
    (self.geometry_counts & 0x0F) as usize
  }

  /// Triangle list over local vertex slots `0..vertex_count()`.
  #[inline]
  pub fn indices(&self) -> &[u8] {
    &self.vertex_index[..self.triangle_count() * 3]
  }
}

/// Case code → class.
pub static REGULAR_CELL_CLASS: [u8; 256] = TABLES.cell_class;

/// Number of distinct regular cell classes.
pub const REGULAR_CELL_CLASS_COUNT: usize = TABLES.class_count;

/// Class → triangulation.
pub static REGULAR_CELL_DATA: [RegularCell; REGULAR_CELL_CLASS_COUNT] = trimmed_cell_data();

/// Case code → edge of each local vertex. Only the first
/// `vertex_count()` entries of a row are meaningful.
pub static REGULAR_VERTEX_DATA: [[EdgeDescriptor; MAX_CELL_VERTICES]; 256] = TABLES.vertex_data;

/// Equivalence class of a case code.
#[inline(always)]
pub fn class_of(case_code: u8) -> u8 {
  REGULAR_CELL_CLASS[case_code as usize]
}

/// Triangulation of a class.
#[inline(always)]
pub fn topology_of(cell_class: u8) -> &'static RegularCell {
  &REGULAR_CELL_DATA[cell_class as usize]
}

/// Edge descriptors for the local vertices of a case code.
#[inline]
pub fn vertex_edges_of(case_code: u8) -> &'static [EdgeDescriptor] {
  let count = topology_of(class_of(case_code)).vertex_count();
  &REGULAR_VERTEX_DATA[case_code as usize][..count]
}

// =============================================================================
// Compile-time generation
// =============================================================================

#[derive(Clone, Copy)]
struct Tables {
  cell_class: [u8; 256],
  cell_data: [RegularCell; MAX_CELL_CLASSES],
  class_count: usize,
  vertex_data: [[EdgeDescriptor; MAX_CELL_VERTICES]; 256],
}

#[derive(Clone, Copy)]
struct CubeFace {
  /// Corners in cyclic order around the face.
  corners: [u8; 4],
  /// `edges[k]` joins `corners[k]` and `corners[(k + 1) % 4]`.
  edges: [u8; 4],
  /// Outward normal.
  normal: [i32; 3],
}

const CUBE_FACES: [CubeFace; 6] = [
  CubeFace {
    corners: [0, 2, 6, 4],
    edges: [1, 6, 9, 2],
    normal: [-1, 0, 0],
  },
  CubeFace {
    corners: [1, 3, 7, 5],
    edges: [3, 7, 10, 4],
    normal: [1, 0, 0],
  },
  CubeFace {
    corners: [0, 1, 5, 4],
    edges: [0, 4, 8, 2],
    normal: [0, -1, 0],
  },
  CubeFace {
    corners: [2, 3, 7, 6],
    edges: [5, 7, 11, 6],
    normal: [0, 1, 0],
  },
  CubeFace {
    corners: [0, 1, 3, 2],
    edges: [0, 3, 5, 1],
    normal: [0, 0, -1],
  },
  CubeFace {
    corners: [4, 5, 7, 6],
    edges: [8, 10, 11, 9],
    normal: [0, 0, 1],
  },
];

#[derive(Clone, Copy)]
struct CasePolygonization {
  cell: RegularCell,
  edges: [EdgeDescriptor; MAX_CELL_VERTICES],
}

#[allow(long_running_const_eval)]
const TABLES: Tables = generate_tables();

const fn generate_tables() -> Tables {
  let mut tables = Tables {
    cell_class: [0; 256],
    cell_data: [RegularCell::EMPTY; MAX_CELL_CLASSES],
    class_count: 1,
    vertex_data: [[EdgeDescriptor(0); MAX_CELL_VERTICES]; 256],
  };

  let mut case_code = 0usize;
  while case_code < 256 {
    let polygonization = polygonize_case(case_code as u8);

    let mut class = 0;
    while class < tables.class_count && !same_cell(&tables.cell_data[class], &polygonization.cell) {
      class += 1;
    }

    if class == tables.class_count {
      assert!(class < MAX_CELL_CLASSES, "too many regular cell classes");
      tables.cell_data[class] = polygonization.cell;
      tables.class_count += 1;
    }

    tables.cell_class[case_code] = class as u8;
    tables.vertex_data[case_code] = polygonization.edges;
    case_code += 1;
  }

  tables
}

const fn trimmed_cell_data() -> [RegularCell; REGULAR_CELL_CLASS_COUNT] {
  let mut data = [RegularCell::EMPTY; REGULAR_CELL_CLASS_COUNT];
  let mut class = 0;
  while class < REGULAR_CELL_CLASS_COUNT {
    data[class] = TABLES.cell_data[class];
    class += 1;
  }
  data
}

const fn same_cell(a: &RegularCell, b: &RegularCell) -> bool {
  if a.geometry_counts != b.geometry_counts {
    return false;
  }
  let mut i = 0;
  while i < MAX_CELL_INDICES {
    if a.vertex_index[i] != b.vertex_index[i] {
      return false;
    }
    i += 1;
  }
  true
}

/// Chain the oriented face segments of one case into loops and triangulate.
const fn polygonize_case(case_code: u8) -> CasePolygonization {
  let next = link_face_segments(case_code);

  let mut loops = [[0u8; MAX_CELL_VERTICES]; MAX_CELL_LOOPS];
  let mut loop_len = [0usize; MAX_CELL_LOOPS];
  let mut loop_count = 0;
  let mut visited = [false; EDGE_COUNT];

  let mut edge = 0;
  while edge < EDGE_COUNT {
    if next[edge] != NO_EDGE && !visited[edge] {
      assert!(loop_count < MAX_CELL_LOOPS, "too many loops in one cell");
      let mut current = edge;
      loop {
        loops[loop_count][loop_len[loop_count]] = current as u8;
        loop_len[loop_count] += 1;
        visited[current] = true;
        current = next[current] as usize;
        assert!(current < EDGE_COUNT, "open surface loop");
        if current == edge {
          break;
        }
      }
      loop_count += 1;
    }
    edge += 1;
  }

  // Stable insertion sort, longest loop first.
  let mut order = [0usize, 1, 2, 3];
  let mut i = 1;
  while i < loop_count {
    let mut j = i;
    while j > 0 && loop_len[order[j - 1]] < loop_len[order[j]] {
      let swap = order[j - 1];
      order[j - 1] = order[j];
      order[j] = swap;
      j -= 1;
    }
    i += 1;
  }

  let mut cell = RegularCell::EMPTY;
  let mut edges = [EdgeDescriptor(0); MAX_CELL_VERTICES];
  let mut vertex_count = 0;
  let mut index_count = 0;

  let mut l = 0;
  while l < loop_count {
    let lp = order[l];
    let base = vertex_count;

    let mut k = 0;
    while k < loop_len[lp] {
      let e = loops[lp][k] as usize;
      edges[vertex_count] = EdgeDescriptor::new(EDGE_CORNERS[e][0], EDGE_CORNERS[e][1]);
      vertex_count += 1;
      k += 1;
    }

    // Fan around the first vertex of the loop.
    let mut k = 1;
    while k + 1 < loop_len[lp] {
      assert!(index_count + 3 <= MAX_CELL_INDICES, "too many triangles in one cell");
      cell.vertex_index[index_count] = base as u8;
      cell.vertex_index[index_count + 1] = (base + k) as u8;
      cell.vertex_index[index_count + 2] = (base + k + 1) as u8;
      index_count += 3;
      k += 1;
    }
    l += 1;
  }

  cell.geometry_counts = ((vertex_count << 4) | (index_count / 3)) as u8;
  CasePolygonization { cell, edges }
}

/// Oriented surface segments on the cube faces, as a successor map over
/// crossing edges (`NO_EDGE` for edges without a crossing).
const fn link_face_segments(case_code: u8) -> [u8; EDGE_COUNT] {
  let mut next = [NO_EDGE; EDGE_COUNT];

  let mut f = 0;
  while f < CUBE_FACES.len() {
    let face = CUBE_FACES[f];

    let mut crossings = [0usize; 4];
    let mut count = 0;
    let mut k = 0;
    while k < 4 {
      if is_inside(case_code, face.corners[k]) != is_inside(case_code, face.corners[(k + 1) % 4]) {
        crossings[count] = k;
        count += 1;
      }
      k += 1;
    }

    if count == 2 {
      let mut inside = 0;
      while !is_inside(case_code, face.corners[inside]) {
        inside += 1;
      }
      next = link_segment(
        next,
        face_edge(&face, crossings[0]),
        face_edge(&face, crossings[1]),
        face.corners[inside],
        face.normal,
      );
    } else if count == 4 {
      let mut k = 0;
      while k < 4 {
        if is_inside(case_code, face.corners[k]) {
          next = link_segment(
            next,
            face_edge(&face, (k + 3) % 4),
            face_edge(&face, k),
            face.corners[k],
            face.normal,
          );
        }
        k += 1;
      }
    }
    f += 1;
  }

  next
}

/// Record segment `a`–`b`, directed so `inside_corner` lies on its inner side.
const fn link_segment(
  mut next: [u8; EDGE_COUNT],
  a: usize,
  b: usize,
  inside_corner: u8,
  normal: [i32; 3],
) -> [u8; EDGE_COUNT] {
  // Doubled coordinates keep edge midpoints integral.
  let pa = edge_midpoint_x2(a);
  let pb = edge_midpoint_x2(b);
  let pc = corner_x2(inside_corner);

  let ab = [pb[0] - pa[0], pb[1] - pa[1], pb[2] - pa[2]];
  let ac = [pc[0] - pa[0], pc[1] - pa[1], pc[2] - pa[2]];
  let cross = [
    ab[1] * ac[2] - ab[2] * ac[1],
    ab[2] * ac[0] - ab[0] * ac[2],
    ab[0] * ac[1] - ab[1] * ac[0],
  ];
  let side = cross[0] * normal[0] + cross[1] * normal[1] + cross[2] * normal[2];
  assert!(side != 0, "degenerate face segment");

  let (from, to) = if side < 0 { (a, b) } else { (b, a) };
  assert!(next[from] == NO_EDGE, "edge already has an outgoing segment");
  next[from] = to as u8;
  next
}

const fn face_edge(face: &CubeFace, k: usize) -> usize {
  face.edges[k] as usize
}

const fn is_inside(case_code: u8, corner: u8) -> bool {
  (case_code >> corner) & 1 == 1
}

const fn corner_x2(corner: u8) -> [i32; 3] {
  [
    ((corner & 1) as i32) * 2,
    (((corner >> 1) & 1) as i32) * 2,
    (((corner >> 2) & 1) as i32) * 2,
  ]
}

const fn edge_midpoint_x2(edge: usize) -> [i32; 3] {
  let a = corner_x2(EDGE_CORNERS[edge][0]);
  let b = corner_x2(EDGE_CORNERS[edge][1]);
  [(a[0] + b[0]) / 2, (a[1] + b[1]) / 2, (a[2] + b[2]) / 2]
}

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;
