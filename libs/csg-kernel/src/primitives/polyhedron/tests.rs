use super::*;
use crate::validate::validate;

fn pyramid() -> PolyhedronParams {
    PolyhedronParams {
        points: vec![
            Vec3::new(10.0, 10.0, 0.0),
            Vec3::new(10.0, -10.0, 0.0),
            Vec3::new(-10.0, -10.0, 0.0),
            Vec3::new(-10.0, 10.0, 0.0),
            Vec3::new(0.0, 0.0, 10.0),
        ],
        faces: vec![
            vec![0, 1, 4],
            vec![1, 2, 4],
            vec![2, 3, 4],
            vec![3, 0, 4],
            vec![1, 0, 3],
            vec![2, 1, 3],
        ],
    }
}

#[test]
fn test_polyhedron_pyramid() {
    let solid = polyhedron(&pyramid()).expect("polyhedron succeeds");
    assert_eq!(solid.polygon_count(), 6);
    validate(&solid).expect("closed and consistently wound");
    // Faces wind clockwise from outside, and are kept that way.
    let ideal = 20.0 * 20.0 * 10.0 / 3.0;
    assert!((solid.volume() + ideal).abs() < 1e-9);
}

#[test]
fn test_polyhedron_keeps_quad_faces() {
    let mut params = pyramid();
    params.faces.truncate(4);
    params.faces.push(vec![3, 2, 1, 0]);
    let solid = polyhedron(&params).unwrap();
    assert_eq!(solid.polygon_count(), 5);
    assert_eq!(solid.polygons()[4].vertex_count(), 4);
    validate(&solid).unwrap();
}

#[test]
fn test_polyhedron_does_not_check_closure() {
    let mut params = pyramid();
    params.faces.pop();
    let solid = polyhedron(&params).unwrap();
    assert!(validate(&solid).is_err());
}

#[test]
fn test_polyhedron_index_out_of_range() {
    let mut params = pyramid();
    params.faces[2] = vec![2, 3, 5];
    assert_eq!(
        polyhedron(&params),
        Err(KernelError::IndexOutOfRange {
            face: 2,
            index: 5,
            len: 5,
        })
    );
}

#[test]
fn test_polyhedron_degenerate_faces() {
    for face in [vec![0, 1], vec![0, 0, 1], vec![0, 1, 0]] {
        let mut params = pyramid();
        params.faces[0] = face;
        assert!(matches!(
            polyhedron(&params),
            Err(KernelError::DegeneratePolygon { .. })
        ));
    }
}

#[test]
fn test_polyhedron_collinear_face() {
    let params = PolyhedronParams {
        points: vec![Vec3::ZERO, Vec3::X, Vec3::X * 2.0],
        faces: vec![vec![0, 1, 2]],
    };
    assert!(matches!(
        polyhedron(&params),
        Err(KernelError::DegeneratePolygon { .. })
    ));
}
