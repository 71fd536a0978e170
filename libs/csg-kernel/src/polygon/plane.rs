//! # Plane
//!
//! Oriented plane `normal · p = w`.

use config::constants::EPSILON;
use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;

/// A plane in 3D space defined by unit normal and distance from origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Normal vector (unit length).
    pub normal: Vec3,
    /// Distance from origin along normal.
    pub w: f64,
}

impl Plane {
    /// Create plane from normal and distance.
    pub fn new(normal: Vec3, w: f64) -> Self {
        Self { normal, w }
    }

    /// Create plane from three points.
    ///
    /// Points in counter-clockwise order seen from the front give a normal
    /// pointing towards the viewer. Returns `None` for collinear points.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        let cross = (b - a).cross(c - a);
        if cross.length() < EPSILON {
            return None;
        }
        let normal = cross.try_normalize()?;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Flip the plane (reverse normal).
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Signed distance of a point, positive on the normal side.
    pub fn signed_distance(&self, point: Vec3) -> f64 {
        self.normal.dot(point) - self.w
    }
}
