//! Sanity tests for configuration constants.

use crate::constants::*;

#[test]
fn test_epsilons_ordering() {
    assert!(EPSILON < PLANARITY_EPSILON);
    assert!(PLANARITY_EPSILON < TORUS_CLOSED_EPSILON);
    assert!(EPSILON > 0.0);
}

#[test]
fn test_resolution_defaults_above_minimums() {
    assert!(DEFAULT_RESOLUTION >= MIN_RING_RESOLUTION);
    assert!(DEFAULT_LATITUDE_RESOLUTION >= MIN_LATITUDE_RESOLUTION);
    assert!(DEFAULT_LONGITUDE_RESOLUTION >= MIN_LONGITUDE_RESOLUTION);
}

#[test]
fn test_pole_texture_inset_in_unit_range() {
    assert!(POLE_TEXTURE_INSET > 0.0);
    assert!(POLE_TEXTURE_INSET < 0.5);
}

#[test]
fn test_limits_positive() {
    assert!(MAX_VERTICES > 0);
    assert!(MAX_TRIANGLES > 0);
}
