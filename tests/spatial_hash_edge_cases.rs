use neuroswarm_core::spatial_hash::SpatialHash;

#[test]
fn test_spatial_hash_overflow_protection() {
    let sh = SpatialHash::new(100.0, 100.0, 5.0, 4);

    let huge = i32::MAX as f32 * 10.0;
    assert!(
        sh.get_cell_idx(huge, huge).is_none(),
        "Should return None for overflow coordinates"
    );
    assert!(
        sh.get_cell_idx(-huge, -huge).is_none(),
        "Should return None for negative overflow coordinates"
    );
}

#[test]
fn test_spatial_hash_nan_and_infinity_safety() {
    let sh = SpatialHash::new(100.0, 100.0, 5.0, 4);

    assert!(sh.get_cell_idx(f32::NAN, 50.0).is_none());
    assert!(sh.get_cell_idx(50.0, f32::NAN).is_none());
    assert!(sh.get_cell_idx(f32::INFINITY, 50.0).is_none());
    assert!(sh.get_cell_idx(f32::NEG_INFINITY, f32::NEG_INFINITY).is_none());
}

#[test]
fn test_spatial_hash_boundary_conditions() {
    let sh = SpatialHash::new(100.0, 100.0, 5.0, 4);

    assert_eq!(sh.get_cell_idx(0.0, 0.0), Some(0));
    assert_eq!(sh.get_cell_idx(99.9, 99.9), Some(sh.cell_count() - 1));
    assert!(sh.get_cell_idx(100.0, 50.0).is_none());
    assert!(sh.get_cell_idx(-0.1, 50.0).is_none());
}

#[test]
fn test_out_of_grid_inserts_land_in_edge_cells() {
    let mut sh = SpatialHash::new(100.0, 100.0, 10.0, 4);
    sh.insert(0, -50.0, -50.0);
    sh.insert(1, 1.0e9, 1.0e9);
    sh.insert(2, f32::INFINITY, 5.0);

    assert_eq!(sh.bucket(0, 0).collect::<Vec<_>>(), vec![0]);
    assert_eq!(sh.bucket(9, 9).collect::<Vec<_>>(), vec![1]);
    assert_eq!(sh.bucket(9, 0).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn test_index_beyond_capacity_is_ignored() {
    let mut sh = SpatialHash::new(100.0, 100.0, 10.0, 2);
    sh.insert(5, 15.0, 15.0);

    let mut found = Vec::new();
    sh.query_into(15.0, 15.0, 1, &mut found);
    assert!(found.is_empty());
}

#[test]
fn test_query_window_at_corner_and_far_outside() {
    let mut sh = SpatialHash::new(100.0, 100.0, 10.0, 3);
    sh.insert(0, 1.0, 1.0);
    sh.insert(1, 12.0, 12.0);
    sh.insert(2, 50.0, 50.0);

    let mut found = Vec::new();
    sh.query_into(0.0, 0.0, 1, &mut found);
    found.sort_unstable();
    assert_eq!(found, vec![0, 1]);

    sh.query_into(f32::MAX, f32::MAX, 3, &mut found);
    assert!(found.is_empty());

    sh.query_into(50.0, 50.0, i32::MAX, &mut found);
    assert_eq!(found.len(), 3);
}

#[test]
fn test_rebuild_after_clear_forgets_old_entries() {
    let mut sh = SpatialHash::new(100.0, 100.0, 10.0, 2);
    sh.insert(0, 5.0, 5.0);
    sh.clear();
    sh.insert(1, 95.0, 95.0);

    let mut found = Vec::new();
    sh.query_into(5.0, 5.0, 0, &mut found);
    assert!(found.is_empty());
    sh.query_into(95.0, 95.0, 0, &mut found);
    assert_eq!(found, vec![1]);
}

#[test]
fn test_degenerate_extent_keeps_one_cell() {
    let mut sh = SpatialHash::new(0.0, 0.0, 10.0, 1);
    assert_eq!(sh.cell_count(), 1);
    sh.insert(0, 3.0, 3.0);
    let mut found = Vec::new();
    sh.query_into(0.0, 0.0, 0, &mut found);
    assert_eq!(found, vec![0]);
}
