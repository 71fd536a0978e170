//! Polyhedron primitive.
//!
//! Faces are used exactly as given: no winding correction and no closure
//! check. A closed, consistently wound mesh is the caller's responsibility.

use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;
use crate::error::{KernelError, KernelResult};
use crate::polygon::{collapse, Polygon, SharedTag};
use crate::solid::Solid;

const TAG: &str = "polyhedron";

/// Parameters for [`polyhedron`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyhedronParams {
    /// Vertex positions.
    pub points: Vec<Vec3>,
    /// Faces as index loops into `points`. Each face may be a planar n-gon.
    pub faces: Vec<Vec<usize>>,
}

/// Creates a polyhedron from points and faces.
///
/// # Arguments
/// * `params` - Points and faces.
///
/// # Errors
/// * [`KernelError::IndexOutOfRange`] when a face references a missing point.
/// * [`KernelError::DegeneratePolygon`] when a face has fewer than three
///   distinct points or all of them are collinear.
///
/// # Examples
/// ```
/// use csg_kernel::primitives::polyhedron::{polyhedron, PolyhedronParams};
/// use csg_kernel::Vec3;
///
/// let tetra = polyhedron(&PolyhedronParams {
///     points: vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z],
///     faces: vec![vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]],
/// }).unwrap();
/// assert_eq!(tetra.polygon_count(), 4);
/// ```
pub fn polyhedron(params: &PolyhedronParams) -> KernelResult<Solid> {
    let len = params.points.len();
    let shared = Some(SharedTag::new(TAG));

    let mut polygons = Vec::with_capacity(params.faces.len());
    for (face_idx, face) in params.faces.iter().enumerate() {
        let points = face
            .iter()
            .map(|&index| {
                params
                    .points
                    .get(index)
                    .copied()
                    .ok_or(KernelError::IndexOutOfRange {
                        face: face_idx,
                        index,
                        len,
                    })
            })
            .collect::<KernelResult<Vec<_>>>()?;

        let points = collapse(&points);
        if points.len() < 3 {
            return Err(KernelError::degenerate_polygon(format!(
                "Face {face_idx} has fewer than 3 distinct points"
            )));
        }
        polygons.push(Polygon::from_points(&points, shared.clone())?);
    }

    tracing::debug!(
        points = len,
        faces = params.faces.len(),
        polygons = polygons.len(),
        "generated polyhedron"
    );
    Ok(Solid::from_polygons(polygons))
}

#[cfg(test)]
mod tests;
