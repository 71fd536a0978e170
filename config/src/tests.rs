//! Sanity checks on the compiled-in constants and tolerance helpers.

use crate::constants::*;

// =============================================================================
// CONSTANTS
// =============================================================================

#[test]
fn test_tolerances_are_ordered() {
    assert!(EPSILON > 0.0 && EPSILON < 1e-6);
    assert!(PLANARITY_EPSILON >= EPSILON);
}

#[test]
fn test_default_resolutions_can_form_polygons() {
    assert_eq!(MIN_RESOLUTION, 3);
    assert!(DEFAULT_RESOLUTION >= MIN_RESOLUTION);
    assert!(DEFAULT_ROUND_RESOLUTION >= MIN_RESOLUTION);
}

#[test]
fn test_round_radius_ratio_is_a_fraction() {
    assert!(DEFAULT_ROUND_RADIUS_RATIO > 0.0 && DEFAULT_ROUND_RADIUS_RATIO < 1.0);
    assert_eq!(FULL_CIRCLE_DEGREES, 360.0);
}

// =============================================================================
// HELPERS
// =============================================================================

#[test]
fn test_approx_equal_tracks_epsilon() {
    assert!(approx_equal(-5.5, -5.5));
    assert!(approx_equal(1.0, 1.0 + EPSILON / 2.0));
    assert!(!approx_equal(1.0, 1.0 - EPSILON * 2.0));
}

#[test]
fn test_approx_zero_is_symmetric() {
    for value in [0.0, EPSILON / 2.0, -EPSILON / 2.0] {
        assert!(approx_zero(value), "{value} should count as zero");
    }
    assert!(!approx_zero(0.1));
    assert!(!approx_zero(-1.0));
}
