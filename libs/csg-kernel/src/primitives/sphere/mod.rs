//! Sphere primitive built as a latitude/longitude (UV) sphere.
//!
//! `resolution` longitude segments by `(resolution + 1) / 2` latitude bands.
//! Bands touching a pole are triangle fans, every other band is quads.

use config::constants::{KernelConfig, FULL_CIRCLE_DEGREES};
use serde::{Deserialize, Serialize};

use super::resolve_resolution;
use super::revolve::{Profile, ProfilePoint, Revolution};
use crate::core::frame::Frame;
use crate::core::vec2::Vec2;
use crate::core::vec3::Vec3;
use crate::error::{KernelError, KernelResult};
use crate::solid::Solid;

/// Minimum number of latitude bands.
const MIN_RINGS: u32 = 2;

const TAG: &str = "sphere";

/// Parameters for [`sphere`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereParams {
    /// Center point. Default origin.
    pub center: Vec3,
    /// Radius. Default 1.
    pub radius: f64,
    /// Longitude segments. Default from [`KernelConfig::default_resolution`].
    pub resolution: Option<u32>,
    /// Axis triple the unit sphere is mapped through before scaling by
    /// `radius`. Poles lie along the third axis. Default world axes.
    pub axes: Option<[Vec3; 3]>,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 1.0,
            resolution: None,
            axes: None,
        }
    }
}

/// Creates a sphere with the default configuration.
///
/// # Examples
/// ```
/// use csg_kernel::primitives::sphere::{sphere, SphereParams};
///
/// let s = sphere(&SphereParams::default()).unwrap();
/// assert_eq!(s.polygon_count(), 12 * 6);
/// ```
pub fn sphere(params: &SphereParams) -> KernelResult<Solid> {
    sphere_with(params, &KernelConfig::default())
}

/// Creates a sphere.
///
/// # Errors
/// [`KernelError::InvalidParameters`] for a non-positive radius, a
/// resolution below 3 or coplanar axes.
pub fn sphere_with(params: &SphereParams, config: &KernelConfig) -> KernelResult<Solid> {
    if !(params.radius > 0.0) || !params.radius.is_finite() {
        return Err(KernelError::invalid_parameters(format!(
            "sphere radius must be positive, got {}",
            params.radius
        )));
    }
    let resolution = resolve_resolution(params.resolution, config.default_resolution)?;
    let rings = ((resolution + 1) / 2).max(MIN_RINGS);

    let [x, y, z] = params.axes.unwrap_or([Vec3::X, Vec3::Y, Vec3::Z]);
    let frame = Frame::new(x, y, z)?.scaled(Vec3::splat(params.radius));

    let mut profile = Profile::from_axis(-1.0);
    for ring in 1..rings {
        let elevation = -90.0 + 180.0 * f64::from(ring) / f64::from(rings);
        let (sin, cos) = elevation.to_radians().sin_cos();
        profile.line_to(ProfilePoint::new(Vec2::splat(cos), sin), TAG);
    }
    let profile = profile.close_to_axis(1.0, TAG);

    let polygons = Revolution {
        origin: params.center,
        frame,
        resolution,
        sector_degrees: FULL_CIRCLE_DEGREES,
        tolerance: config.tolerance,
    }
    .revolve(&profile, TAG)?;

    let solid = Solid::from_polygons(polygons).validated()?;
    tracing::debug!(
        center = ?params.center,
        radius = params.radius,
        resolution,
        rings,
        polygons = solid.polygon_count(),
        "generated sphere"
    );
    Ok(solid)
}

#[cfg(test)]
mod tests;
