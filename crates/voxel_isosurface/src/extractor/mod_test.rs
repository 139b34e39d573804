use glam::Vec3;

use super::*;
use crate::sdf_samplers::SphereSampler;
use crate::types::Parallelism;
use crate::volume::{DenseVolume, FnField};

/// Integer sphere of radius 5 around the origin; never exactly zero.
fn quadratic_sphere(p: IVec3) -> i8 {
  (2 * (p.length_squared() - 25) + 1).clamp(-127, 127) as i8
}

fn sequential<V: VolumeField>(volume: V) -> RegularCellExtractor<V> {
  RegularCellExtractor::with_config(volume, ExtractorConfig::sequential())
}

fn slabs<V: VolumeField>(volume: V) -> RegularCellExtractor<V> {
  RegularCellExtractor::with_config(
    volume,
    ExtractorConfig::new()
      .with_parallelism(Parallelism::Slabs)
      .with_min_parallel_cells(0),
  )
}

#[test]
fn test_empty_volume_produces_no_mesh() {
  let extractor = sequential(FnField(|_: IVec3| 127));
  let mut mesh = TerrainMesh::new();

  let stats = extractor
    .generate_region(&mut mesh, IVec3::splat(-4), 8, 1)
    .unwrap();

  assert!(mesh.is_empty());
  assert_eq!(stats.cells_visited, 512);
  assert_eq!(stats.cells_rejected(), 512);
  assert_eq!(stats.triangles, 0);
}

#[test]
fn test_solid_volume_produces_no_mesh() {
  let extractor = sequential(FnField(|_: IVec3| -127));
  let mut mesh = TerrainMesh::new();

  extractor
    .generate_region(&mut mesh, IVec3::ZERO, 8, 2)
    .unwrap();

  assert!(mesh.is_empty());
  assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn test_sphere_counts() {
  let extractor = sequential(FnField(quadratic_sphere));
  let mut mesh = TerrainMesh::new();

  let stats = extractor
    .generate_region(&mut mesh, IVec3::splat(-8), 16, 1)
    .unwrap();

  assert_eq!(mesh.vertex_count(), 1656);
  assert_eq!(mesh.triangle_count(), 824);
  assert_eq!(stats.vertices, 1656);
  assert_eq!(stats.triangles, 824);
  assert_eq!(stats.cells_visited, 4096);
  assert!(stats.cells_polygonized > 0);
  assert!(mesh.validate().is_ok());
}

#[test]
fn test_sphere_vertices_stay_near_surface() {
  let radius = 8.0;
  let center = Vec3::new(16.0, 16.0, 16.0);
  let sphere = SphereSampler::new(radius).with_center(center);

  for lod in [1, 2] {
    let mut mesh = TerrainMesh::new();
    sequential(&sphere)
      .generate_region(&mut mesh, IVec3::ZERO, 32 / lod, lod)
      .unwrap();

    assert!(mesh.vertex_count() > 100, "lod {}", lod);
    for &v in &mesh.vertices {
      let offset = (v - center).abs();
      assert!(
        offset.max_element() <= radius * 1.1,
        "lod {} vertex {:?} outside sphere bounds",
        lod,
        v
      );
    }
  }
}

#[test]
fn test_extraction_is_deterministic() {
  let extractor = sequential(FnField(quadratic_sphere));

  let mut first = TerrainMesh::new();
  let mut second = TerrainMesh::new();
  let a = extractor.generate_region(&mut first, IVec3::splat(-8), 16, 1).unwrap();
  let b = extractor.generate_region(&mut second, IVec3::splat(-8), 16, 1).unwrap();

  assert_eq!(first, second);
  assert_eq!(a.without_timing(), b.without_timing());
}

#[test]
fn test_slabs_match_sequential() {
  let sphere = SphereSampler::new(7.5).with_center(Vec3::new(1.5, -2.0, 0.25));
  let min = IVec3::new(-12, -13, -11);

  for lod in [1, 3] {
    let mut expected = TerrainMesh::new();
    let mut actual = TerrainMesh::new();
    let a = sequential(&sphere).generate_region(&mut expected, min, 24 / lod, lod).unwrap();
    let b = slabs(&sphere).generate_region(&mut actual, min, 24 / lod, lod).unwrap();

    assert!(!expected.is_empty());
    assert_eq!(actual, expected, "lod {}", lod);
    assert_eq!(a.without_timing(), b.without_timing());
  }
}

#[test]
fn test_small_regions_stay_sequential() {
  let config = ExtractorConfig::new().with_min_parallel_cells(1_000);
  let extractor = RegularCellExtractor::with_config(FnField(quadratic_sphere), config);
  assert!(!extractor.config().runs_parallel(8 * 8 * 8));

  let mut mesh = TerrainMesh::new();
  extractor.generate_region(&mut mesh, IVec3::splat(-4), 8, 1).unwrap();
  assert!(mesh.validate().is_ok());
}

#[test]
fn test_chained_regions_append() {
  let extractor = sequential(FnField(quadratic_sphere));
  let left_min = IVec3::splat(-8);
  let right_min = IVec3::new(0, -8, -8);

  let mut left = TerrainMesh::new();
  let mut right = TerrainMesh::new();
  extractor.generate_region(&mut left, left_min, 8, 1).unwrap();
  extractor.generate_region(&mut right, right_min, 8, 1).unwrap();

  let mut chained = TerrainMesh::new();
  extractor.generate_region(&mut chained, left_min, 8, 1).unwrap();
  let stats = extractor.generate_region(&mut chained, right_min, 8, 1).unwrap();

  let mut expected = left.clone();
  expected.append(right.clone());

  assert_eq!(chained, expected);
  assert_eq!(stats.vertices as usize, right.vertex_count());
  let offset = left.vertex_count() as u32;
  assert!(chained.indices[left.indices.len()..].iter().all(|&i| i >= offset));
}

#[test]
fn test_lod_doubles_positions() {
  let fine = FnField(quadratic_sphere);
  let coarse = FnField(|p: IVec3| quadratic_sphere(p.div_euclid(IVec3::splat(2))));

  let mut a = TerrainMesh::new();
  let mut b = TerrainMesh::new();
  sequential(fine).generate_region(&mut a, IVec3::splat(-8), 16, 1).unwrap();
  sequential(coarse).generate_region(&mut b, IVec3::splat(-16), 16, 2).unwrap();

  assert_eq!(a.indices, b.indices);
  assert_eq!(a.vertex_count(), b.vertex_count());
  for (fine, coarse) in a.vertices.iter().zip(&b.vertices) {
    assert_eq!(*fine * 2.0, *coarse);
  }
}

#[test]
fn test_linear_field_crosses_at_same_place_for_each_lod() {
  // d = 16x - 40 vanishes at x = 2.5
  let field = FnField(|p: IVec3| (16 * p.x - 40) as i8);

  for lod in [1, 2] {
    let mut mesh = TerrainMesh::new();
    sequential(&field)
      .generate_region(&mut mesh, IVec3::ZERO, 4, lod)
      .unwrap();

    assert!(!mesh.is_empty());
    for v in &mesh.vertices {
      assert_eq!(v.x, 2.5, "lod {}", lod);
    }
    // Gradient is +X everywhere.
    for n in &mesh.normals {
      assert_eq!(*n, Vec3::X);
    }
  }
}

#[test]
fn test_dense_volume_matches_closure_field() {
  let region = Region::new(IVec3::splat(-6), 12, 1).unwrap();
  let dense = DenseVolume::for_region(&region, quadratic_sphere);

  let mut expected = TerrainMesh::new();
  let mut actual = TerrainMesh::new();
  sequential(FnField(quadratic_sphere)).extract(&mut expected, &region).unwrap();
  sequential(dense).extract(&mut actual, &region).unwrap();

  assert_eq!(actual, expected);
}

#[test]
fn test_invalid_arguments_leave_mesh_unchanged() {
  let extractor = sequential(FnField(quadratic_sphere));
  let mut mesh = TerrainMesh::new();
  extractor.generate_region(&mut mesh, IVec3::splat(-8), 8, 1).unwrap();
  let before = mesh.clone();

  assert_eq!(
    extractor.generate_region(&mut mesh, IVec3::ZERO, 0, 1),
    Err(ExtractError::InvalidSize { size: 0 })
  );
  assert_eq!(
    extractor.generate_region(&mut mesh, IVec3::ZERO, 4, 0),
    Err(ExtractError::InvalidLod { lod: 0 })
  );
  assert_eq!(
    extractor.generate_region(&mut mesh, IVec3::splat(i32::MAX - 4), 4, 1),
    Err(ExtractError::RegionOutOfRange)
  );
  assert!(matches!(
    extractor.generate_region(&mut mesh, IVec3::ZERO, 1024, 1),
    Err(ExtractError::IndexOverflow { .. })
  ));

  assert_eq!(mesh, before);
}

#[test]
fn test_extract_region_convenience() {
  let region = Region::new(IVec3::splat(-8), 16, 1).unwrap();
  let mesh = extract_region(FnField(quadratic_sphere), &region).unwrap();

  assert_eq!(mesh.vertex_count(), 1656);
  assert_eq!(mesh.triangle_count(), 824);
}

#[test]
fn test_trait_object_dispatch() {
  let extractor: Box<dyn SurfaceExtractor> = Box::new(sequential(FnField(quadratic_sphere)));
  let mut mesh = TerrainMesh::new();
  extractor
    .generate_region(&mut mesh, IVec3::splat(-8), 16, 1)
    .unwrap();
  assert_eq!(mesh.triangle_count(), 824);
}
