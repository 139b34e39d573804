//! Error types for extraction requests and mesh validation.

use thiserror::Error;

/// Errors reported before any cell is processed, or by mesh validation.
///
/// Field contract violations (a [`VolumeField`](crate::VolumeField) that
/// cannot answer the apron reads) are not represented here; they are the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
  /// A region must contain at least one cell per axis.
  #[error("region size must be at least 1 cell, got {size}")]
  InvalidSize { size: u32 },

  /// The grid step must be at least one world unit.
  #[error("level of detail must be at least 1, got {lod}")]
  InvalidLod { lod: u32 },

  /// The sampled extent (including the normal apron) leaves `i32` space.
  #[error("region sample bounds do not fit in i32 coordinates")]
  RegionOutOfRange,

  /// The mesh could hold more vertices than `u32` indices can address.
  #[error("mesh would need up to {required} vertices, more than u32 indices can address")]
  IndexOverflow { required: u64 },

  /// A mesh broke one of its structural invariants.
  #[error("malformed mesh: {reason}")]
  MalformedMesh { reason: String },
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_display() {
    assert_eq!(
      ExtractError::InvalidSize { size: 0 }.to_string(),
      "region size must be at least 1 cell, got 0"
    );
    assert_eq!(
      ExtractError::InvalidLod { lod: 0 }.to_string(),
      "level of detail must be at least 1, got 0"
    );
    assert_eq!(
      ExtractError::MalformedMesh {
        reason: "index 9 out of range".into()
      }
      .to_string(),
      "malformed mesh: index 9 out of range"
    );
  }

  #[test]
  fn test_error_equality() {
    assert_eq!(
      ExtractError::IndexOverflow { required: 10 },
      ExtractError::IndexOverflow { required: 10 }
    );
    assert_ne!(ExtractError::RegionOutOfRange, ExtractError::InvalidLod { lod: 0 });
  }
}
