//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! Addition, scaling, dot and cross products, length and `lerp` are the
//! plain `glam` operations. Only normalization gets a checked helper because
//! a zero-length input has no direction.

use config::constants::EPSILON;

use crate::error::{KernelError, KernelResult};

pub use glam::DVec3 as Vec3;

/// Returns `v` scaled to unit length.
///
/// # Errors
/// [`KernelError::DegenerateVector`] when `v` is (near) zero or not finite.
///
/// # Examples
/// ```
/// use csg_kernel::core::vec3::{normalized, Vec3};
/// let v = normalized(Vec3::new(0.0, 3.0, 4.0)).unwrap();
/// assert!((v.length() - 1.0).abs() < 1e-12);
/// assert!(normalized(Vec3::ZERO).is_err());
/// ```
pub fn normalized(v: Vec3) -> KernelResult<Vec3> {
    if v.length() < EPSILON {
        return Err(KernelError::degenerate_vector(format!(
            "cannot normalize {v:?}"
        )));
    }
    v.try_normalize()
        .ok_or_else(|| KernelError::degenerate_vector(format!("cannot normalize {v:?}")))
}

/// Returns true when every component of `a` and `b` differ by less than
/// `EPSILON`.
pub fn approx_eq(a: Vec3, b: Vec3) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

#[cfg(test)]
mod tests;
