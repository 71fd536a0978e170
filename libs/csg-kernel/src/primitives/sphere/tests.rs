use super::*;
use approx::assert_relative_eq;
use std::f64::consts::PI;

fn with_resolution(resolution: u32) -> SphereParams {
    SphereParams {
        resolution: Some(resolution),
        ..Default::default()
    }
}

/// Largest gap between the ideal radius and the faceted surface.
fn approximation_error(solid: &Solid, radius: f64) -> f64 {
    solid
        .polygons()
        .iter()
        .map(|p| radius - p.plane().w)
        .fold(0.0, f64::max)
}

#[test]
fn test_default_sphere_face_count() {
    let s = sphere(&SphereParams::default()).unwrap();
    assert_eq!(s.polygon_count(), 12 * 6);
}

#[test]
fn test_pole_bands_are_triangles() {
    let s = sphere(&with_resolution(8)).unwrap();
    let triangles = s.polygons().iter().filter(|p| p.vertex_count() == 3).count();
    let quads = s.polygons().iter().filter(|p| p.vertex_count() == 4).count();
    assert_eq!(triangles, 2 * 8);
    assert_eq!(quads, 8 * (4 - 2));
}

#[test]
fn test_sphere_volume_approaches_ideal() {
    let ideal = 4.0 / 3.0 * PI;
    let coarse = sphere(&with_resolution(8)).unwrap().volume();
    let fine = sphere(&with_resolution(64)).unwrap().volume();
    assert!(coarse > 0.0 && coarse < ideal);
    assert!(fine > coarse && fine < ideal);
    assert_relative_eq!(fine, ideal, max_relative = 0.01);
}

#[test]
fn test_resolution_monotonicity() {
    let solids: Vec<Solid> = [8, 16, 32]
        .iter()
        .map(|&r| sphere(&with_resolution(r)).unwrap())
        .collect();
    for pair in solids.windows(2) {
        assert!(pair[1].polygon_count() > pair[0].polygon_count());
        assert!(approximation_error(&pair[1], 1.0) < approximation_error(&pair[0], 1.0));
    }
}

#[test]
fn test_vertices_lie_on_sphere() {
    let params = SphereParams {
        center: Vec3::new(1.0, 2.0, 3.0),
        radius: 5.0,
        resolution: Some(10),
        axes: None,
    };
    let s = sphere(&params).unwrap();
    for p in s.polygons().iter().flat_map(|p| p.positions()) {
        assert_relative_eq!((p - params.center).length(), 5.0, epsilon = 1e-9);
    }
    let (min, max) = s.bounding_box().unwrap();
    assert_relative_eq!(min.z, -2.0, epsilon = 1e-12);
    assert_relative_eq!(max.z, 8.0, epsilon = 1e-12);
}

#[test]
fn test_axes_stretch_into_ellipsoid() {
    let params = SphereParams {
        axes: Some([Vec3::X * 2.0, Vec3::Y, Vec3::Z * 3.0]),
        ..Default::default()
    };
    let s = sphere(&params).unwrap();
    let (min, max) = s.bounding_box().unwrap();
    assert_relative_eq!(max.x, 2.0, epsilon = 1e-12);
    assert_relative_eq!(min.z, -3.0, epsilon = 1e-12);
    assert_relative_eq!(max.z, 3.0, epsilon = 1e-12);
}

#[test]
fn test_mirrored_axes_still_face_outward() {
    let params = SphereParams {
        axes: Some([Vec3::Y, Vec3::X, Vec3::Z]),
        ..Default::default()
    };
    assert!(sphere(&params).unwrap().volume() > 0.0);
}

#[test]
fn test_invalid_parameters() {
    let bad = [
        with_resolution(2),
        SphereParams {
            radius: 0.0,
            ..Default::default()
        },
        SphereParams {
            radius: -1.0,
            ..Default::default()
        },
        SphereParams {
            axes: Some([Vec3::X, Vec3::Y, Vec3::X + Vec3::Y]),
            ..Default::default()
        },
    ];
    for params in bad {
        assert!(matches!(
            sphere(&params),
            Err(KernelError::InvalidParameters { .. })
        ));
    }
}

#[test]
fn test_sphere_is_deterministic() {
    let params = with_resolution(16);
    assert_eq!(sphere(&params).unwrap(), sphere(&params).unwrap());
}

#[test]
fn test_explicit_config_default_resolution() {
    let config = KernelConfig::new(1e-7, 20, 8).unwrap();
    let s = sphere_with(&SphereParams::default(), &config).unwrap();
    assert_eq!(s.polygon_count(), 20 * 10);
}
