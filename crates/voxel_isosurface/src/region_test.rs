use super::*;

#[test]
fn test_rejects_zero_size() {
  assert_eq!(
    Region::new(IVec3::ZERO, 0, 1),
    Err(ExtractError::InvalidSize { size: 0 })
  );
}

#[test]
fn test_rejects_zero_lod() {
  assert_eq!(
    Region::new(IVec3::ZERO, 4, 0),
    Err(ExtractError::InvalidLod { lod: 0 })
  );
}

#[test]
fn test_rejects_apron_overflow() {
  assert_eq!(
    Region::new(IVec3::new(i32::MIN, 0, 0), 1, 1),
    Err(ExtractError::RegionOutOfRange)
  );
  assert_eq!(
    Region::new(IVec3::new(0, i32::MAX - 8, 0), 4, 2),
    Err(ExtractError::RegionOutOfRange)
  );
  assert!(Region::new(IVec3::new(0, i32::MAX - 9, 0), 4, 2).is_ok());
}

#[test]
fn test_derived_extents() {
  let region = Region::new(IVec3::new(-8, 0, 4), 4, 2).unwrap();
  assert_eq!(region.extent(), 8);
  assert_eq!(region.cell_count(), 64);
  assert_eq!(region.max_vertex_count(), 64 * 12);
  assert_eq!(region.cell_offset(IVec3::new(1, 2, 3)), IVec3::new(-6, 4, 10));
  assert_eq!(
    region.sample_bounds(),
    (IVec3::new(-9, -1, 3), IVec3::new(1, 9, 13))
  );
}

#[test]
fn test_cells_iterate_x_outer_z_inner() {
  let region = Region::new(IVec3::ZERO, 2, 1).unwrap();
  let cells: Vec<IVec3> = region.cells().collect();
  assert_eq!(
    cells,
    vec![
      IVec3::new(0, 0, 0),
      IVec3::new(0, 0, 1),
      IVec3::new(0, 1, 0),
      IVec3::new(0, 1, 1),
      IVec3::new(1, 0, 0),
      IVec3::new(1, 0, 1),
      IVec3::new(1, 1, 0),
      IVec3::new(1, 1, 1),
    ]
  );
}
