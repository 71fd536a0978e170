//! Axis triples used to orient generated shapes.

use config::constants::EPSILON;
use serde::{Deserialize, Serialize};

use super::vec3::{normalized, Vec3};
use crate::error::{KernelError, KernelResult};

/// Three world-space axis vectors. Local point `(u, v, w)` maps to
/// `x * u + y * v + z * w`.
///
/// The axes need not be unit length or orthogonal; scaled axes give
/// ellipsoids and sheared shapes. They must not be coplanar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Local X axis.
    pub x: Vec3,
    /// Local Y axis.
    pub y: Vec3,
    /// Local Z axis.
    pub z: Vec3,
}

impl Frame {
    /// The world axes.
    pub const IDENTITY: Frame = Frame {
        x: Vec3::X,
        y: Vec3::Y,
        z: Vec3::Z,
    };

    /// Builds a frame from explicit axes.
    ///
    /// # Errors
    /// [`KernelError::InvalidParameters`] if the axes are coplanar.
    pub fn new(x: Vec3, y: Vec3, z: Vec3) -> KernelResult<Self> {
        let frame = Self { x, y, z };
        if !frame.determinant().is_finite() || frame.determinant().abs() < EPSILON {
            return Err(KernelError::invalid_parameters(format!(
                "axes {x:?}, {y:?}, {z:?} do not span space"
            )));
        }
        Ok(frame)
    }

    /// Builds a right-handed orthonormal frame whose `z` axis points along
    /// `direction`.
    ///
    /// The reference axis is the world axis least parallel to `direction`,
    /// preferring X, then Y, then Z on ties.
    ///
    /// # Examples
    /// ```
    /// use csg_kernel::core::{Frame, Vec3};
    /// let frame = Frame::from_axis(Vec3::new(0.0, 2.0, 0.0)).unwrap();
    /// assert_eq!(frame.z, Vec3::Y);
    /// assert_eq!(frame.x, Vec3::X);
    /// assert_eq!(frame.y, Vec3::new(0.0, 0.0, -1.0));
    /// ```
    pub fn from_axis(direction: Vec3) -> KernelResult<Self> {
        let z = normalized(direction)?;
        let abs = z.abs();
        let reference = if abs.x <= abs.y && abs.x <= abs.z {
            Vec3::X
        } else if abs.y <= abs.z {
            Vec3::Y
        } else {
            Vec3::Z
        };
        let y = normalized(z.cross(reference))?;
        let x = y.cross(z);
        Ok(Self { x, y, z })
    }

    /// Returns the frame with each axis multiplied by the matching component
    /// of `factors`.
    pub fn scaled(&self, factors: Vec3) -> Self {
        Self {
            x: self.x * factors.x,
            y: self.y * factors.y,
            z: self.z * factors.z,
        }
    }

    /// Triple product `x · (y × z)`. Negative for left-handed frames.
    pub fn determinant(&self) -> f64 {
        self.x.dot(self.y.cross(self.z))
    }

    /// True when the frame mirrors space.
    pub fn is_left_handed(&self) -> bool {
        self.determinant() < 0.0
    }

    /// Maps local coordinates to a world offset.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.x * local.x + self.y * local.y + self.z * local.z
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::IDENTITY
    }
}
