//! # Polygon
//!
//! Oriented planar polygon with an optional provenance tag.
//!
//! Vertex order is counter-clockwise when viewed from the side the normal
//! points to. Every vertex carries the polygon's plane normal.

pub mod plane;
pub mod vertex;

use std::fmt;

use config::constants::{EPSILON, PLANARITY_EPSILON};
use glam::{DMat3, DMat4};
use serde::{Deserialize, Serialize};

use crate::core::vec3::{normalized, Vec3};
use crate::error::{KernelError, KernelResult};

pub use plane::Plane;
pub use vertex::Vertex;

// =============================================================================
// SHARED TAG
// =============================================================================

/// Opaque provenance label carried by a polygon.
///
/// Geometry code copies it through flips and transforms but never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SharedTag(String);

impl SharedTag {
    /// Create a tag from any string.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SharedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SharedTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

// =============================================================================
// POLYGON
// =============================================================================

/// A planar polygon with at least three vertices.
///
/// Deserializing rebuilds the plane from the vertex positions, so a record
/// with too few points, collinear points or off-plane points is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonRecord")]
pub struct Polygon {
    vertices: Vec<Vertex>,
    plane: Plane,
    shared: Option<SharedTag>,
}

/// Wire form of [`Polygon`]. The stored plane is ignored on load.
#[derive(Deserialize)]
struct PolygonRecord {
    vertices: Vec<Vertex>,
    #[serde(default)]
    shared: Option<SharedTag>,
}

impl TryFrom<PolygonRecord> for Polygon {
    type Error = KernelError;

    fn try_from(record: PolygonRecord) -> KernelResult<Self> {
        let points: Vec<Vec3> = record.vertices.iter().map(|v| v.pos).collect();
        if !points.iter().all(|p| p.is_finite()) {
            return Err(KernelError::degenerate_polygon(
                "polygon has non-finite coordinates",
            ));
        }
        let polygon = Self::from_points(&points, record.shared)?;
        let scale = points
            .iter()
            .map(|p| p.abs().max_element())
            .fold(1.0, f64::max);
        let limit = PLANARITY_EPSILON * scale;
        if let Some(off) = points
            .iter()
            .map(|&p| polygon.plane.signed_distance(p).abs())
            .find(|d| *d > limit)
        {
            return Err(KernelError::degenerate_polygon(format!(
                "vertex lies {off} off the polygon plane"
            )));
        }
        Ok(polygon)
    }
}

impl Polygon {
    /// Builds a polygon from an ordered point loop.
    ///
    /// The plane comes from the first non-collinear triple of points. Its
    /// direction is aligned with the loop's area vector, so concave loops
    /// whose first corner is reflex still face the way their winding says.
    ///
    /// # Errors
    /// [`KernelError::DegeneratePolygon`] for fewer than 3 points or when
    /// every point lies on one line.
    ///
    /// # Examples
    /// ```
    /// use csg_kernel::polygon::Polygon;
    /// use csg_kernel::Vec3;
    ///
    /// let tri = Polygon::from_points(
    ///     &[Vec3::ZERO, Vec3::X, Vec3::Y],
    ///     None,
    /// ).unwrap();
    /// assert_eq!(tri.plane().normal, Vec3::Z);
    /// ```
    pub fn from_points(points: &[Vec3], shared: Option<SharedTag>) -> KernelResult<Self> {
        if points.len() < 3 {
            return Err(KernelError::degenerate_polygon(format!(
                "a polygon needs at least 3 points, got {}",
                points.len()
            )));
        }

        let plane = first_plane(points).ok_or_else(|| {
            KernelError::degenerate_polygon(format!(
                "all {} points are collinear",
                points.len()
            ))
        })?;
        let plane = if plane.normal.dot(newell_normal(points)) < 0.0 {
            plane.flipped()
        } else {
            plane
        };

        let vertices = points
            .iter()
            .map(|&pos| Vertex::new(pos, plane.normal))
            .collect();

        Ok(Self {
            vertices,
            plane,
            shared,
        })
    }

    /// Get polygon vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Iterates vertex positions in winding order.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(|v| v.pos)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get polygon plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Provenance tag, if any.
    pub fn shared(&self) -> Option<&SharedTag> {
        self.shared.as_ref()
    }

    /// Reverse winding order and plane.
    pub fn flipped(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().map(Vertex::flipped).collect(),
            plane: self.plane.flipped(),
            shared: self.shared.clone(),
        }
    }

    /// Applies an affine transform.
    ///
    /// Positions go through `matrix`, normals through its inverse-transpose.
    /// Mirroring matrices reverse the vertex order so the winding still
    /// matches the normal.
    ///
    /// # Errors
    /// [`KernelError::InvalidParameters`] for a singular matrix.
    pub fn transformed(&self, matrix: &DMat4) -> KernelResult<Self> {
        let linear = DMat3::from_mat4(*matrix);
        let det = linear.determinant();
        if !det.is_finite() || det.abs() < EPSILON {
            return Err(KernelError::invalid_parameters(format!(
                "transform is singular (determinant {det})"
            )));
        }
        let normal_matrix = linear.inverse().transpose();
        let normal = normalized(normal_matrix * self.plane.normal)?;

        let mut positions: Vec<Vec3> = self
            .positions()
            .map(|p| matrix.transform_point3(p))
            .collect();
        if det < 0.0 {
            positions.reverse();
        }

        let w = normal.dot(positions[0]);
        Ok(Self {
            vertices: positions
                .into_iter()
                .map(|pos| Vertex::new(pos, normal))
                .collect(),
            plane: Plane::new(normal, w),
            shared: self.shared.clone(),
        })
    }

    /// Area of the polygon.
    pub fn area(&self) -> f64 {
        let points: Vec<Vec3> = self.positions().collect();
        newell_normal(&points).length() * 0.5
    }

    /// Mean of the vertex positions.
    pub fn centroid(&self) -> Vec3 {
        let sum: Vec3 = self.positions().sum();
        sum / self.vertices.len() as f64
    }

    /// Directed edges `(start, end)` in winding order, closing the loop.
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i].pos, self.vertices[(i + 1) % n].pos))
    }
}

/// Drops points equal to their predecessor, including across the loop seam.
pub(crate) fn collapse(points: &[Vec3]) -> Vec<Vec3> {
    let mut out: Vec<Vec3> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    while out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

/// Emits a face given as a point loop, usually a quad.
///
/// Repeated points are collapsed first and faces left with fewer than three
/// points are dropped. A quad that is not planar within `tolerance` becomes
/// the triangles `[p0, p1, p2]` and `[p0, p2, p3]`.
pub(crate) fn push_face(
    points: &[Vec3],
    tolerance: f64,
    shared: &Option<SharedTag>,
    out: &mut Vec<Polygon>,
) -> KernelResult<()> {
    let face = collapse(points);
    if face.len() < 3 {
        return Ok(());
    }
    let polygon = Polygon::from_points(&face, shared.clone())?;
    let plane = *polygon.plane();
    if face.len() == 4 && face.iter().any(|&p| plane.signed_distance(p).abs() > tolerance) {
        out.push(Polygon::from_points(&[face[0], face[1], face[2]], shared.clone())?);
        out.push(Polygon::from_points(&[face[0], face[2], face[3]], shared.clone())?);
    } else {
        out.push(polygon);
    }
    Ok(())
}

/// Plane through the first three points that are not collinear.
fn first_plane(points: &[Vec3]) -> Option<Plane> {
    let a = points[0];
    points.iter().enumerate().skip(1).find_map(|(i, &b)| {
        points[i + 1..]
            .iter()
            .find_map(|&c| Plane::from_points(a, b, c))
    })
}

/// Area vector of a point loop: twice the vector area, pointing along the
/// side from which the loop appears counter-clockwise.
pub(crate) fn newell_normal(points: &[Vec3]) -> Vec3 {
    let origin = points.first().copied().unwrap_or(Vec3::ZERO);
    let n = points.len();
    (0..n)
        .map(|i| (points[i] - origin).cross(points[(i + 1) % n] - origin))
        .sum()
}
