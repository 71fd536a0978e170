//! Geometry comparison helpers shared by the integration tests.

#![allow(dead_code)]

use approx::relative_eq;
use csg_kernel::{Polygon, Solid, Vec3};

const EPSILON: f64 = 1e-9;

fn close(a: Vec3, b: Vec3) -> bool {
    relative_eq!(a.x, b.x, epsilon = EPSILON, max_relative = EPSILON)
        && relative_eq!(a.y, b.y, epsilon = EPSILON, max_relative = EPSILON)
        && relative_eq!(a.z, b.z, epsilon = EPSILON, max_relative = EPSILON)
}

/// True when the two loops hold the same points in the same cyclic order,
/// whichever point they start from.
fn same_loop(a: &Polygon, b: &Polygon) -> bool {
    let a: Vec<Vec3> = a.positions().collect();
    let b: Vec<Vec3> = b.positions().collect();
    if a.len() != b.len() {
        return false;
    }
    let n = a.len();
    (0..n).any(|shift| (0..n).all(|i| close(a[i], b[(i + shift) % n])))
}

fn same_polygon(a: &Polygon, b: &Polygon) -> bool {
    close(a.plane().normal, b.plane().normal) && same_loop(a, b)
}

/// Asserts that two solids have the same faces up to float noise,
/// regardless of face order or where each face loop starts.
pub fn assert_same_geometry(observed: &Solid, expected: &Solid) {
    assert_eq!(
        observed.polygon_count(),
        expected.polygon_count(),
        "polygon counts differ"
    );
    let mut unmatched: Vec<&Polygon> = expected.polygons().iter().collect();
    for (i, polygon) in observed.polygons().iter().enumerate() {
        let found = unmatched
            .iter()
            .position(|candidate| same_polygon(polygon, candidate));
        match found {
            Some(j) => {
                unmatched.swap_remove(j);
            }
            None => panic!("observed polygon {i} has no match: {polygon:?}"),
        }
    }
}
