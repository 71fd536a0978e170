//! # Solid
//!
//! A closed boundary represented as a flat list of polygons.
//!
//! Solids own their polygons. Transforms return new solids.

use glam::DMat4;
use serde::{Deserialize, Serialize};

use crate::core::vec3::{normalized, Vec3};
use crate::error::KernelResult;
use crate::polygon::Polygon;
use crate::validate::validate;

/// Unordered collection of polygons bounding a volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    polygons: Vec<Polygon>,
}

impl Solid {
    /// Wraps polygons without checking closure. Use [`Solid::validated`]
    /// to enforce it.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// The boundary polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Number of boundary polygons.
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Consumes the solid, returning its polygons.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    /// Returns the solid if it passes the manifold closure check.
    ///
    /// Failures are logged at error level before being returned.
    pub fn validated(self) -> KernelResult<Self> {
        if let Err(err) = validate(&self) {
            tracing::error!(polygons = self.polygons.len(), %err, "solid failed manifold validation");
            return Err(err.into());
        }
        Ok(self)
    }

    /// Axis-aligned bounds `(min, max)`, or `None` for an empty solid.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self.polygons.iter().flat_map(Polygon::positions);
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    /// Signed enclosed volume. Positive when polygons wind outward.
    pub fn volume(&self) -> f64 {
        let sum: f64 = self
            .polygons
            .iter()
            .map(|polygon| {
                let points: Vec<Vec3> = polygon.positions().collect();
                (1..points.len().saturating_sub(1))
                    .map(|i| points[0].dot(points[i].cross(points[i + 1])))
                    .sum::<f64>()
            })
            .sum();
        sum / 6.0
    }

    /// Applies an affine transform to every polygon.
    ///
    /// # Errors
    /// [`crate::KernelError::InvalidParameters`] for a singular matrix.
    pub fn transformed(&self, matrix: &DMat4) -> KernelResult<Self> {
        let polygons = self
            .polygons
            .iter()
            .map(|p| p.transformed(matrix))
            .collect::<KernelResult<Vec<_>>>()?;
        Ok(Self { polygons })
    }

    /// Translates by `offset`.
    pub fn translated(&self, offset: Vec3) -> KernelResult<Self> {
        self.transformed(&DMat4::from_translation(offset))
    }

    /// Scales per axis about the origin.
    pub fn scaled(&self, factors: Vec3) -> KernelResult<Self> {
        self.transformed(&DMat4::from_scale(factors))
    }

    /// Rotates about `axis` through the origin by `degrees`.
    ///
    /// # Errors
    /// [`crate::KernelError::DegenerateVector`] for a zero axis.
    pub fn rotated(&self, axis: Vec3, degrees: f64) -> KernelResult<Self> {
        let axis = normalized(axis)?;
        self.transformed(&DMat4::from_axis_angle(axis, degrees.to_radians()))
    }

    /// Rotates about the Z axis by `degrees`.
    pub fn rotated_z(&self, degrees: f64) -> KernelResult<Self> {
        self.transformed(&DMat4::from_rotation_z(degrees.to_radians()))
    }
}
