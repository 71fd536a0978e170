//! Cylinder whose end rims are rounded by a quarter torus.
//!
//! The profile runs from the bottom axis point along the flat cap, around a
//! quarter arc of radius `round_radius`, up the straight side, around a
//! second quarter arc and back along the top cap. With `round_radius` equal
//! to the cylinder radius the caps vanish and the ends become hemispheres.

use config::constants::{KernelConfig, DEFAULT_ROUND_RADIUS_RATIO, FULL_CIRCLE_DEGREES};
use serde::{Deserialize, Serialize};

use super::{axis_frame, check_sector, WEDGE_TAG};
use crate::core::vec2::Vec2;
use crate::core::vec3::Vec3;
use crate::error::{KernelError, KernelResult};
use crate::primitives::revolve::{Profile, ProfilePoint, Revolution};
use crate::primitives::{quarter_segments, quarter_turn, resolve_resolution};
use crate::solid::Solid;

const CAP_TAG: &str = "rounded_cylinder.cap";
const ROUND_TAG: &str = "rounded_cylinder.round";
const SIDE_TAG: &str = "rounded_cylinder.side";

/// Parameters for [`rounded_cylinder`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedCylinderParams {
    /// Center of the start cap. Default `[0, -1, 0]`.
    pub start: Vec3,
    /// Center of the end cap. Default `[0, 1, 0]`.
    pub end: Vec3,
    /// Cylinder radius. Default 1.
    pub radius: f64,
    /// Rim rounding radius in `(0, min(radius, length / 2)]`. Default
    /// `0.2 * radius`.
    pub round_radius: Option<f64>,
    /// Segments around the axis. Each quarter arc gets `resolution / 4`
    /// (rounded, at least 1).
    pub resolution: Option<u32>,
    /// Swept angle in degrees, in `(0, 360]`. Default 360.
    pub sector_angle: f64,
}

impl Default for RoundedCylinderParams {
    fn default() -> Self {
        Self {
            start: Vec3::new(0.0, -1.0, 0.0),
            end: Vec3::new(0.0, 1.0, 0.0),
            radius: 1.0,
            round_radius: None,
            resolution: None,
            sector_angle: FULL_CIRCLE_DEGREES,
        }
    }
}

/// Creates a rounded cylinder with the default configuration.
///
/// # Examples
/// ```
/// use csg_kernel::primitives::cylinder::{rounded_cylinder, RoundedCylinderParams};
///
/// let c = rounded_cylinder(&RoundedCylinderParams::default()).unwrap();
/// assert!(c.volume() > 0.0);
/// ```
pub fn rounded_cylinder(params: &RoundedCylinderParams) -> KernelResult<Solid> {
    rounded_cylinder_with(params, &KernelConfig::default())
}

/// Creates a rounded cylinder.
///
/// # Errors
/// [`KernelError::InvalidParameters`] for a non-positive radius, a round
/// radius outside `(0, min(radius, length / 2)]`, `start == end`, a sector
/// outside `(0, 360]` or a resolution below 3.
pub fn rounded_cylinder_with(
    params: &RoundedCylinderParams,
    config: &KernelConfig,
) -> KernelResult<Solid> {
    let radius = params.radius;
    if !(radius > 0.0) || !radius.is_finite() {
        return Err(KernelError::invalid_parameters(format!(
            "cylinder radius must be positive, got {radius}"
        )));
    }
    check_sector(params.sector_angle)?;
    let resolution = resolve_resolution(params.resolution, config.default_resolution)?;
    let (frame, length) = axis_frame(params.start, params.end)?;

    let round_radius = params
        .round_radius
        .unwrap_or(radius * DEFAULT_ROUND_RADIUS_RATIO);
    let limit = radius.min(length / 2.0);
    if !(round_radius > 0.0 && round_radius <= limit) {
        return Err(KernelError::invalid_parameters(format!(
            "round radius must be in (0, {limit}], got {round_radius}"
        )));
    }

    let steps = quarter_segments(resolution);
    let inner = radius - round_radius;
    let ring = |rho: f64, height: f64| ProfilePoint::new(Vec2::splat(rho), height);

    let mut profile = Profile::from_axis(0.0);
    profile.line_to(ring(inner, 0.0), CAP_TAG);
    for step in 1..=steps {
        // Bottom arc, from straight down to straight out.
        let (cos, sin) = quarter_turn(step, steps);
        profile.line_to(
            ring(inner + round_radius * sin, round_radius - round_radius * cos),
            ROUND_TAG,
        );
    }
    profile.line_to(ring(inner + round_radius, length - round_radius), SIDE_TAG);
    for step in 1..=steps {
        // Top arc, from straight out to straight up.
        let (cos, sin) = quarter_turn(step, steps);
        profile.line_to(
            ring(
                inner + round_radius * cos,
                length - round_radius + round_radius * sin,
            ),
            ROUND_TAG,
        );
    }
    let profile = profile.close_to_axis(length, CAP_TAG);

    let polygons = Revolution {
        origin: params.start,
        frame,
        resolution,
        sector_degrees: params.sector_angle,
        tolerance: config.tolerance,
    }
    .revolve(&profile, WEDGE_TAG)?;

    let solid = Solid::from_polygons(polygons).validated()?;
    tracing::debug!(
        start = ?params.start,
        end = ?params.end,
        radius,
        round_radius,
        resolution,
        sector_angle = params.sector_angle,
        profile_segments = profile.segment_count(),
        polygons = solid.polygon_count(),
        "generated rounded cylinder"
    );
    Ok(solid)
}
