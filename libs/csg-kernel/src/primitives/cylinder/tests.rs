use super::*;
use crate::polygon::SharedTag;
use approx::assert_relative_eq;
use std::f64::consts::PI;

fn count_tag(solid: &Solid, tag: &str) -> usize {
    solid
        .polygons()
        .iter()
        .filter(|p| p.shared().map(SharedTag::as_str) == Some(tag))
        .count()
}

fn max_radial_error(solid: &Solid) -> f64 {
    // Side faces of the default cylinder are parallel to the Y axis.
    solid
        .polygons()
        .iter()
        .filter(|p| p.shared().map(SharedTag::as_str) == Some(SIDE_TAG))
        .map(|p| 1.0 - p.plane().w)
        .fold(0.0, f64::max)
}

#[test]
fn test_default_cylinder() {
    let c = cylinder(&CylinderParams::default()).unwrap();
    assert_eq!(count_tag(&c, SIDE_TAG), 12);
    assert_eq!(count_tag(&c, CAP_TAG), 24);
    let (min, max) = c.bounding_box().unwrap();
    assert_relative_eq!(min.y, -1.0);
    assert_relative_eq!(max.y, 1.0);
    assert_relative_eq!(max.x, 1.0, epsilon = 1e-12);
}

#[test]
fn test_cylinder_volume_is_positive_and_below_ideal() {
    let params = CylinderParams {
        resolution: Some(64),
        ..Default::default()
    };
    let v = cylinder(&params).unwrap().volume();
    let ideal = PI * 2.0;
    assert!(v > 0.0 && v < ideal);
    assert_relative_eq!(v, ideal, max_relative = 0.01);
}

#[test]
fn test_resolution_monotonicity() {
    let solids: Vec<Solid> = [8, 16, 32]
        .iter()
        .map(|&r| {
            cylinder(&CylinderParams {
                resolution: Some(r),
                ..Default::default()
            })
            .unwrap()
        })
        .collect();
    for pair in solids.windows(2) {
        assert!(pair[1].polygon_count() > pair[0].polygon_count());
        assert!(max_radial_error(&pair[1]) < max_radial_error(&pair[0]));
    }
}

#[test]
fn test_cone_has_no_apex_cap() {
    let params = CylinderParams {
        start: Vec3::ZERO,
        end: Vec3::new(0.0, 0.0, 10.0),
        radius_start: Some(10.0),
        radius_end: Some(0.0),
        ..Default::default()
    };
    let cone = cylinder(&params).unwrap();
    // One base fan plus one triangle per side; nothing at the apex.
    assert_eq!(count_tag(&cone, CAP_TAG), 12);
    assert_eq!(count_tag(&cone, SIDE_TAG), 12);
    assert!(cone.polygons().iter().all(|p| p.vertex_count() == 3));
    let (_, max) = cone.bounding_box().unwrap();
    assert_relative_eq!(max.z, 10.0);
}

#[test]
fn test_inverted_cone_closes() {
    let params = CylinderParams {
        radius_start: Some(0.0),
        radius_end: Some(2.0),
        ..Default::default()
    };
    let cone = cylinder(&params).unwrap();
    assert_eq!(cone.polygon_count(), 24);
    assert!(cone.volume() > 0.0);
}

#[test]
fn test_truncated_cone_side_quads_are_planar() {
    let params = CylinderParams {
        radius_start: Some(2.0),
        radius_end: Some(1.0),
        ..Default::default()
    };
    let c = cylinder(&params).unwrap();
    assert_eq!(count_tag(&c, SIDE_TAG), 12);
    assert!(c
        .polygons()
        .iter()
        .filter(|p| p.shared().map(SharedTag::as_str) == Some(SIDE_TAG))
        .all(|p| p.vertex_count() == 4));
}

#[test]
fn test_arbitrary_axis() {
    let params = CylinderParams {
        start: Vec3::new(1.0, 2.0, 3.0),
        end: Vec3::new(4.0, 6.0, 3.0),
        radius: 0.5,
        ..Default::default()
    };
    let c = cylinder(&params).unwrap();
    let length = 5.0;
    let ideal = PI * 0.25 * length;
    let v = c.volume();
    assert!(v > 0.0 && v < ideal);
    // Regular 12-gon area: 3 r^2.
    assert_relative_eq!(v, 3.0 * 0.25 * length, epsilon = 1e-9);
}

#[test]
fn test_sector_adds_wedge_faces() {
    let params = CylinderParams {
        sector_angle: 90.0,
        resolution: Some(6),
        ..Default::default()
    };
    let c = cylinder(&params).unwrap();
    assert_eq!(count_tag(&c, WEDGE_TAG), 2);
    assert_eq!(count_tag(&c, SIDE_TAG), 6);
    assert_eq!(count_tag(&c, CAP_TAG), 12);
    assert!(c.volume() > 0.0);
}

#[test]
fn test_half_cylinder_volume() {
    let params = CylinderParams {
        sector_angle: 180.0,
        resolution: Some(64),
        ..Default::default()
    };
    let v = cylinder(&params).unwrap().volume();
    assert_relative_eq!(v, PI, max_relative = 0.01);
}

#[test]
fn test_cylinder_rejects_bad_parameters() {
    let bad = [
        CylinderParams {
            radius: -1.0,
            ..Default::default()
        },
        CylinderParams {
            radius_start: Some(0.0),
            radius_end: Some(0.0),
            ..Default::default()
        },
        CylinderParams {
            end: Vec3::new(0.0, -1.0, 0.0),
            ..Default::default()
        },
        CylinderParams {
            sector_angle: 0.0,
            ..Default::default()
        },
        CylinderParams {
            sector_angle: 400.0,
            ..Default::default()
        },
        CylinderParams {
            resolution: Some(2),
            ..Default::default()
        },
    ];
    for params in bad {
        assert!(
            matches!(cylinder(&params), Err(KernelError::InvalidParameters { .. })),
            "{params:?} should be rejected"
        );
    }
}

#[test]
fn test_elliptic_cylinder_extents() {
    let params = EllipticCylinderParams {
        start: Vec3::ZERO,
        end: Vec3::new(0.0, 0.0, 1.0),
        radius: Vec2::new(2.0, 1.0),
        resolution: Some(16),
        ..Default::default()
    };
    let c = elliptic_cylinder(&params).unwrap();
    let (min, max) = c.bounding_box().unwrap();
    // The frame around +Z is the world frame.
    assert_relative_eq!(max.x - min.x, 4.0, epsilon = 1e-12);
    assert_relative_eq!(max.y - min.y, 2.0, epsilon = 1e-12);
}

#[test]
fn test_elliptic_cone_with_twisted_radii_splits_sides() {
    let params = EllipticCylinderParams {
        radius_start: Some(Vec2::new(2.0, 1.0)),
        radius_end: Some(Vec2::new(1.0, 2.0)),
        ..Default::default()
    };
    let c = elliptic_cylinder(&params).unwrap();
    assert!(count_tag(&c, SIDE_TAG) > 12);
    assert!(c.volume() > 0.0);
}

#[test]
fn test_elliptic_rejects_half_flat_radius() {
    let params = EllipticCylinderParams {
        radius: Vec2::new(1.0, 0.0),
        ..Default::default()
    };
    assert!(elliptic_cylinder(&params).is_err());
}

#[test]
fn test_elliptic_sector_needs_proportional_radii() {
    let params = EllipticCylinderParams {
        radius_start: Some(Vec2::new(2.0, 1.0)),
        radius_end: Some(Vec2::new(1.0, 2.0)),
        sector_angle: 180.0,
        ..Default::default()
    };
    assert!(elliptic_cylinder(&params).is_err());
    let scaled = EllipticCylinderParams {
        radius_start: Some(Vec2::new(2.0, 1.0)),
        radius_end: Some(Vec2::new(4.0, 2.0)),
        sector_angle: 180.0,
        ..Default::default()
    };
    assert!(elliptic_cylinder(&scaled).is_ok());
}

#[test]
fn test_cylinder_matches_circular_elliptic_cylinder() {
    let params = CylinderParams {
        radius: 3.0,
        ..Default::default()
    };
    let elliptic = EllipticCylinderParams {
        radius: Vec2::splat(3.0),
        ..Default::default()
    };
    assert_eq!(cylinder(&params).unwrap(), elliptic_cylinder(&elliptic).unwrap());
}

#[test]
fn test_cylinder_params_convert_to_equal_radius_pairs() {
    let params = CylinderParams {
        start: Vec3::new(1.0, 0.0, 0.0),
        end: Vec3::new(1.0, 0.0, 3.0),
        radius: 2.0,
        radius_start: Some(0.5),
        radius_end: None,
        resolution: Some(8),
        sector_angle: 270.0,
    };
    let elliptic = EllipticCylinderParams::from(&params);
    assert_eq!(elliptic.radius, Vec2::splat(2.0));
    assert_eq!(elliptic.radius_start, Some(Vec2::splat(0.5)));
    assert_eq!(elliptic.radius_end, None);
    assert_eq!(elliptic.sector_angle, 270.0);
    assert_eq!(cylinder(&params).unwrap(), elliptic_cylinder(&elliptic).unwrap());
}

#[test]
fn test_elliptic_radii_follow_the_axis_frame() {
    let params = EllipticCylinderParams {
        start: Vec3::ZERO,
        end: Vec3::new(0.0, 0.0, 2.0),
        radius: Vec2::new(3.0, 1.0),
        resolution: Some(16),
        ..Default::default()
    };
    let c = elliptic_cylinder(&params).unwrap();
    let (min, max) = c.bounding_box().unwrap();
    assert!(min.abs_diff_eq(Vec3::new(-3.0, -1.0, 0.0), 1e-12));
    assert!(max.abs_diff_eq(Vec3::new(3.0, 1.0, 2.0), 1e-12));
}

// =============================================================================
// ROUNDED CYLINDER
// =============================================================================

#[test]
fn test_rounded_cylinder_defaults() {
    let c = rounded_cylinder(&RoundedCylinderParams::default()).unwrap();
    // cap + 3 arc + side + 3 arc + cap profile segments, 12 around
    assert_eq!(c.polygon_count(), 9 * 12);
    let (min, max) = c.bounding_box().unwrap();
    assert_relative_eq!(min.y, -1.0);
    assert_relative_eq!(max.y, 1.0);
    assert_relative_eq!(max.x, 1.0, epsilon = 1e-12);
}

#[test]
fn test_rounded_cylinder_is_smaller_than_plain() {
    let plain = cylinder(&CylinderParams::default()).unwrap().volume();
    let rounded = rounded_cylinder(&RoundedCylinderParams::default())
        .unwrap()
        .volume();
    assert!(rounded > 0.0 && rounded < plain);
}

#[test]
fn test_full_round_radius_makes_capsule() {
    let params = RoundedCylinderParams {
        start: Vec3::ZERO,
        end: Vec3::new(0.0, 0.0, 4.0),
        radius: 1.0,
        round_radius: Some(1.0),
        resolution: Some(8),
        ..Default::default()
    };
    let capsule = rounded_cylinder(&params).unwrap();
    // 2 + 1 + 2 segments: both caps vanish into the arcs.
    assert_eq!(capsule.polygon_count(), 5 * 8);
    assert!(capsule.volume() > 0.0);
}

#[test]
fn test_round_radius_of_half_length_has_no_straight_side() {
    let params = RoundedCylinderParams {
        round_radius: Some(1.0),
        radius: 2.0,
        resolution: Some(8),
        ..Default::default()
    };
    let c = rounded_cylinder(&params).unwrap();
    assert_eq!(count_tag(&c, "rounded_cylinder.side"), 0);
    assert_eq!(c.polygon_count(), (1 + 2 + 2 + 1) * 8);
}

#[test]
fn test_rounded_cylinder_sector() {
    let params = RoundedCylinderParams {
        sector_angle: 270.0,
        ..Default::default()
    };
    let c = rounded_cylinder(&params).unwrap();
    assert_eq!(count_tag(&c, WEDGE_TAG), 2);
    assert!(c.volume() > 0.0);
}

#[test]
fn test_rounded_cylinder_rejects_bad_round_radius() {
    for round_radius in [0.0, -0.1, 1.5] {
        let params = RoundedCylinderParams {
            round_radius: Some(round_radius),
            ..Default::default()
        };
        assert!(matches!(
            rounded_cylinder(&params),
            Err(KernelError::InvalidParameters { .. })
        ));
    }
}
