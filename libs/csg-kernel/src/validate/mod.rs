//! # Manifold Validator
//!
//! Checks the closure invariant of a solid: every undirected edge is used by
//! exactly two polygons, and those two polygons walk it in opposite
//! directions.
//!
//! Vertices are matched by exact position (with `-0.0` folded onto `0.0`).
//! Generators emit shared corners from the same computed values, so no
//! tolerance is involved. Edges are visited in sorted order, which makes the
//! reported failure deterministic.

use std::collections::BTreeMap;

use crate::core::vec3::Vec3;
use crate::error::ValidationError;
use crate::solid::Solid;

/// Exact bit pattern of a position.
type PointKey = [u64; 3];

fn point_key(p: Vec3) -> PointKey {
    // Adding 0.0 turns -0.0 into 0.0.
    [
        (p.x + 0.0).to_bits(),
        (p.y + 0.0).to_bits(),
        (p.z + 0.0).to_bits(),
    ]
}

/// Traversal counts of one undirected edge, oriented from the smaller key.
#[derive(Debug)]
struct EdgeUse {
    low: Vec3,
    high: Vec3,
    forward: usize,
    backward: usize,
}

/// Validates manifold closure of `solid`.
///
/// # Errors
/// - [`ValidationError::OpenEdge`] if an edge is not used exactly twice
/// - [`ValidationError::InconsistentWinding`] if both uses run the same way
///
/// # Examples
/// ```
/// use csg_kernel::primitives::cube::{cube, CubeParams};
/// use csg_kernel::validate::validate;
///
/// let solid = cube(&CubeParams::default()).unwrap();
/// assert!(validate(&solid).is_ok());
/// ```
pub fn validate(solid: &Solid) -> Result<(), ValidationError> {
    let mut edges: BTreeMap<(PointKey, PointKey), EdgeUse> = BTreeMap::new();

    for polygon in solid.polygons() {
        for (start, end) in polygon.edges() {
            let (a, b) = (point_key(start), point_key(end));
            if a == b {
                continue;
            }
            let forward = a < b;
            let (key, low, high) = if forward {
                ((a, b), start, end)
            } else {
                ((b, a), end, start)
            };
            let entry = edges.entry(key).or_insert(EdgeUse {
                low,
                high,
                forward: 0,
                backward: 0,
            });
            if forward {
                entry.forward += 1;
            } else {
                entry.backward += 1;
            }
        }
    }

    for edge in edges.values() {
        let count = edge.forward + edge.backward;
        if count != 2 {
            return Err(ValidationError::OpenEdge {
                start: edge.low,
                end: edge.high,
                count,
            });
        }
        if edge.forward != 1 {
            let (start, end) = if edge.forward == 2 {
                (edge.low, edge.high)
            } else {
                (edge.high, edge.low)
            };
            return Err(ValidationError::InconsistentWinding { start, end });
        }
    }

    Ok(())
}
