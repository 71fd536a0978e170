//! Thin wrapper around `glam::DVec2` used by 2D regions.

use config::constants::EPSILON;

use crate::error::{KernelError, KernelResult};

pub use glam::DVec2 as Vec2;

/// Returns `v` scaled to unit length.
///
/// # Errors
/// [`KernelError::DegenerateVector`] when `v` is (near) zero or not finite.
///
/// # Examples
/// ```
/// use csg_kernel::core::vec2::{normalized, Vec2};
/// assert_eq!(normalized(Vec2::new(0.0, 2.0)).unwrap(), Vec2::Y);
/// ```
pub fn normalized(v: Vec2) -> KernelResult<Vec2> {
    if v.length() < EPSILON {
        return Err(KernelError::degenerate_vector(format!(
            "cannot normalize {v:?}"
        )));
    }
    v.try_normalize()
        .ok_or_else(|| KernelError::degenerate_vector(format!("cannot normalize {v:?}")))
}

/// Z component of the 3D cross product of two planar vectors.
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests;
