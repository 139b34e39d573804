use sdf_conversion::*;

use super::*;

// SDF conversion tests
#[test]
fn test_roundtrip_zero() {
  assert_eq!(to_float(to_storage(0.0)), 0.0);
}

#[test]
fn test_roundtrip_negative() {
  let sdf = -3.5;
  let stored = to_storage(sdf);
  let recovered = to_float(stored);
  assert!((sdf - recovered).abs() < INV_SCALE * 1.5);
}

#[test]
fn test_clamping() {
  // Values beyond ±10 should clamp to ±127
  assert_eq!(to_storage(100.0), 127);
  assert_eq!(to_storage(-100.0), -127);
}

#[test]
fn test_sign_is_preserved() {
  assert!(to_storage(-0.5) < 0);
  assert!(to_storage(0.5) > 0);
}

// General types tests
#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  assert!(!aabb.is_valid());

  aabb.encapsulate(Vec3::new(1.0, 2.0, 3.0));
  aabb.encapsulate(Vec3::new(-1.0, -2.0, -3.0));

  assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
  assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
  assert!(aabb.is_valid());
  assert!(aabb.contains(Vec3::ZERO));
  assert!(!aabb.contains(Vec3::new(0.0, 0.0, 3.5)));
}

#[test]
fn test_extractor_config_builder() {
  let config = ExtractorConfig::new()
    .with_parallelism(Parallelism::Sequential)
    .with_min_parallel_cells(8);

  assert_eq!(config.parallelism, Parallelism::Sequential);
  assert_eq!(config.min_parallel_cells, 8);
  assert!(!config.runs_parallel(1 << 20));
}

#[test]
fn test_parallel_threshold() {
  let config = ExtractorConfig::new().with_min_parallel_cells(64);
  assert_eq!(config.parallelism, Parallelism::Slabs);
  assert!(!config.runs_parallel(63));
  assert!(config.runs_parallel(64));
  assert_eq!(ExtractorConfig::sequential().parallelism, Parallelism::Sequential);
}

#[test]
fn test_parallelism_labels() {
  assert_eq!(Parallelism::Sequential.label(), "sequential");
  assert_eq!(Parallelism::Slabs.label(), "slabs");
}
