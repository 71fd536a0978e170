//! Primitive geometry generators.
//!
//! Each generator takes a parameter record with documented defaults,
//! resolves it to one canonical description, tessellates it and validates
//! manifold closure before returning. The `*_with` variants take an explicit
//! [`config::constants::KernelConfig`] for defaults and tolerances.

pub mod cube;
pub mod cylinder;
pub mod polyhedron;
pub mod sphere;

mod revolve;

use config::constants::MIN_RESOLUTION;

use crate::error::{KernelError, KernelResult};

pub use cube::{cube, rounded_cube, BoxSpec, CubeParams};
pub use cylinder::{
    cylinder, elliptic_cylinder, rounded_cylinder, CylinderParams, EllipticCylinderParams,
    RoundedCylinderParams,
};
pub use polyhedron::{polyhedron, PolyhedronParams};
pub use sphere::{sphere, SphereParams};

/// Resolves an optional resolution, rejecting values below
/// [`MIN_RESOLUTION`].
pub(crate) fn resolve_resolution(requested: Option<u32>, default: u32) -> KernelResult<u32> {
    let resolution = requested.unwrap_or(default);
    if resolution < MIN_RESOLUTION {
        return Err(KernelError::invalid_parameters(format!(
            "resolution must be >= {MIN_RESOLUTION}, got {resolution}"
        )));
    }
    Ok(resolution)
}

/// Segments per quarter circle for a given full-circle resolution.
pub(crate) fn quarter_segments(resolution: u32) -> u32 {
    ((resolution + 2) / 4).max(1)
}

/// Unit direction at `step / steps` of a quarter turn, exact at both ends.
pub(crate) fn quarter_turn(step: u32, steps: u32) -> (f64, f64) {
    if step == 0 {
        (1.0, 0.0)
    } else if step == steps {
        (0.0, 1.0)
    } else {
        let angle = std::f64::consts::FRAC_PI_2 * f64::from(step) / f64::from(steps);
        (angle.cos(), angle.sin())
    }
}
