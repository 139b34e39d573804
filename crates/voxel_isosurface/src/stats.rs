//! Per-call extraction counters.

/// What one extraction call did.
///
/// Everything except `elapsed_us` is a pure function of the inputs, so two
/// identical calls report identical counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractionStats {
  /// Cells visited (`size³`).
  pub cells_visited: u64,

  /// Cells that emitted geometry.
  pub cells_polygonized: u64,

  /// Vertices appended to the mesh.
  pub vertices: u64,

  /// Triangles appended to the mesh.
  pub triangles: u64,

  /// Wall-clock time of the call in microseconds.
  pub elapsed_us: u64,
}

impl ExtractionStats {
  /// Cells skipped by trivial rejection.
  #[inline]
  pub fn cells_rejected(&self) -> u64 {
    self.cells_visited - self.cells_polygonized
  }

  /// Same counters with the timing zeroed, for comparisons.
  pub fn without_timing(mut self) -> Self {
    self.elapsed_us = 0;
    self
  }

  /// Accumulate another call's counters.
  pub fn merge(&mut self, other: &ExtractionStats) {
    self.cells_visited += other.cells_visited;
    self.cells_polygonized += other.cells_polygonized;
    self.vertices += other.vertices;
    self.triangles += other.triangles;
    self.elapsed_us += other.elapsed_us;
  }
}
