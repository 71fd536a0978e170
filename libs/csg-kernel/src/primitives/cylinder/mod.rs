//! Cylinder primitives: straight, conic, elliptic and rounded.
//!
//! All variants revolve a profile about the `start -> end` axis. The frame
//! around the axis comes from [`Frame::from_axis`], so the first segment
//! starts along its X axis.

mod rounded;

use config::constants::{approx_zero, KernelConfig, FULL_CIRCLE_DEGREES};
use serde::{Deserialize, Serialize};

use super::resolve_resolution;
use super::revolve::{Profile, ProfilePoint, Revolution};
use crate::core::frame::Frame;
use crate::core::vec2::{cross, Vec2};
use crate::core::vec3::Vec3;
use crate::error::{KernelError, KernelResult};
use crate::solid::Solid;

pub use rounded::{rounded_cylinder, rounded_cylinder_with, RoundedCylinderParams};

const SIDE_TAG: &str = "cylinder.side";
const CAP_TAG: &str = "cylinder.cap";
const WEDGE_TAG: &str = "cylinder.wedge";

// =============================================================================
// PARAMETERS
// =============================================================================

/// Parameters for [`cylinder`].
///
/// Every radius here is circular. A cross-section with a separate radius
/// per frame axis is built with [`elliptic_cylinder`] and
/// [`EllipticCylinderParams`], which take `[x, y]` radius pairs in the
/// axis frame; these parameters convert to that form with equal pairs.
///
/// ```
/// use csg_kernel::primitives::cylinder::{elliptic_cylinder, EllipticCylinderParams};
/// use csg_kernel::{Vec2, Vec3};
///
/// let oval = elliptic_cylinder(&EllipticCylinderParams {
///     start: Vec3::ZERO,
///     end: Vec3::Z,
///     radius: Vec2::new(2.0, 1.0),
///     ..Default::default()
/// }).unwrap();
/// let (min, max) = oval.bounding_box().unwrap();
/// assert!((max.x - min.x - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderParams {
    /// Center of the start cap. Default `[0, -1, 0]`.
    pub start: Vec3,
    /// Center of the end cap. Default `[0, 1, 0]`.
    pub end: Vec3,
    /// Radius used for any end without its own radius. Default 1.
    pub radius: f64,
    /// Radius at `start`. Zero makes a cone apex there.
    pub radius_start: Option<f64>,
    /// Radius at `end`. Zero makes a cone apex there.
    pub radius_end: Option<f64>,
    /// Segments around the axis. Default from the kernel configuration.
    pub resolution: Option<u32>,
    /// Swept angle in degrees, in `(0, 360]`. Default 360.
    pub sector_angle: f64,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            start: Vec3::new(0.0, -1.0, 0.0),
            end: Vec3::new(0.0, 1.0, 0.0),
            radius: 1.0,
            radius_start: None,
            radius_end: None,
            resolution: None,
            sector_angle: FULL_CIRCLE_DEGREES,
        }
    }
}

/// Parameters for [`elliptic_cylinder`]. Radii are `(along frame X, along
/// frame Y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipticCylinderParams {
    /// Center of the start cap. Default `[0, -1, 0]`.
    pub start: Vec3,
    /// Center of the end cap. Default `[0, 1, 0]`.
    pub end: Vec3,
    /// Radii used for any end without its own radii. Default `[1, 1]`.
    pub radius: Vec2,
    /// Radii at `start`. `[0, 0]` makes an apex there.
    pub radius_start: Option<Vec2>,
    /// Radii at `end`. `[0, 0]` makes an apex there.
    pub radius_end: Option<Vec2>,
    /// Segments around the axis. Default from the kernel configuration.
    pub resolution: Option<u32>,
    /// Swept angle in degrees, in `(0, 360]`. Default 360.
    pub sector_angle: f64,
}

impl Default for EllipticCylinderParams {
    fn default() -> Self {
        Self {
            start: Vec3::new(0.0, -1.0, 0.0),
            end: Vec3::new(0.0, 1.0, 0.0),
            radius: Vec2::ONE,
            radius_start: None,
            radius_end: None,
            resolution: None,
            sector_angle: FULL_CIRCLE_DEGREES,
        }
    }
}

impl From<&CylinderParams> for EllipticCylinderParams {
    fn from(params: &CylinderParams) -> Self {
        Self {
            start: params.start,
            end: params.end,
            radius: Vec2::splat(params.radius),
            radius_start: params.radius_start.map(Vec2::splat),
            radius_end: params.radius_end.map(Vec2::splat),
            resolution: params.resolution,
            sector_angle: params.sector_angle,
        }
    }
}

// =============================================================================
// GENERATORS
// =============================================================================

/// Creates a cylinder or cone with the default configuration.
///
/// # Examples
/// ```
/// use csg_kernel::primitives::cylinder::{cylinder, CylinderParams};
///
/// let c = cylinder(&CylinderParams::default()).unwrap();
/// // 12 side quads plus two 12-triangle cap fans
/// assert_eq!(c.polygon_count(), 36);
/// ```
pub fn cylinder(params: &CylinderParams) -> KernelResult<Solid> {
    cylinder_with(params, &KernelConfig::default())
}

/// Creates a cylinder or cone.
///
/// # Errors
/// [`KernelError::InvalidParameters`] for negative radii, both end radii
/// zero, `start == end`, a sector outside `(0, 360]` or a resolution
/// below 3.
pub fn cylinder_with(params: &CylinderParams, config: &KernelConfig) -> KernelResult<Solid> {
    elliptic_cylinder_with(&EllipticCylinderParams::from(params), config)
}

/// Creates an elliptic cylinder or cone with the default configuration.
pub fn elliptic_cylinder(params: &EllipticCylinderParams) -> KernelResult<Solid> {
    elliptic_cylinder_with(params, &KernelConfig::default())
}

/// Creates an elliptic cylinder or cone.
///
/// Each end's radii must be both positive, or both zero for an apex. A
/// partial sector additionally needs the two ends' radii to be
/// proportional, so that the wedge faces stay flat.
///
/// # Errors
/// As [`cylinder_with`], plus [`KernelError::InvalidParameters`] for
/// half-flat radii or non-proportional radii on a partial sector.
pub fn elliptic_cylinder_with(
    params: &EllipticCylinderParams,
    config: &KernelConfig,
) -> KernelResult<Solid> {
    let radius_start = check_radii(params.radius_start.unwrap_or(params.radius), "start")?;
    let radius_end = check_radii(params.radius_end.unwrap_or(params.radius), "end")?;
    if radius_start == Vec2::ZERO && radius_end == Vec2::ZERO {
        return Err(KernelError::invalid_parameters(
            "cylinder needs a non-zero radius at one end at least",
        ));
    }
    check_sector(params.sector_angle)?;
    if params.sector_angle < FULL_CIRCLE_DEGREES && !approx_zero(cross(radius_start, radius_end))
    {
        return Err(KernelError::invalid_parameters(format!(
            "partial sectors need proportional end radii, got {radius_start:?} and {radius_end:?}"
        )));
    }
    let resolution = resolve_resolution(params.resolution, config.default_resolution)?;
    let (frame, length) = axis_frame(params.start, params.end)?;

    let mut profile = Profile::from_axis(0.0);
    if radius_start != Vec2::ZERO {
        profile.line_to(ProfilePoint::new(radius_start, 0.0), CAP_TAG);
    }
    if radius_end != Vec2::ZERO {
        profile.line_to(ProfilePoint::new(radius_end, length), SIDE_TAG);
        profile = profile.close_to_axis(length, CAP_TAG);
    } else {
        profile = profile.close_to_axis(length, SIDE_TAG);
    }

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
        radius_start = ?radius_start,
        radius_end = ?radius_end,
        resolution,
        sector_angle = params.sector_angle,
        profile_segments = profile.segment_count(),
        polygons = solid.polygon_count(),
        "generated cylinder"
    );
    Ok(solid)
}

// =============================================================================
// VALIDATION HELPERS
// =============================================================================

fn check_radii(radii: Vec2, end: &str) -> KernelResult<Vec2> {
    let flat = radii == Vec2::ZERO;
    let round = radii.x > 0.0 && radii.y > 0.0 && radii.is_finite();
    if flat || round {
        Ok(radii)
    } else {
        Err(KernelError::invalid_parameters(format!(
            "{end} radius must be positive or zero, got {radii:?}"
        )))
    }
}

pub(crate) fn check_sector(sector_angle: f64) -> KernelResult<()> {
    if sector_angle > 0.0 && sector_angle <= FULL_CIRCLE_DEGREES {
        Ok(())
    } else {
        Err(KernelError::invalid_parameters(format!(
            "sector angle must be in (0, 360], got {sector_angle}"
        )))
    }
}

/// Frame around `start -> end` and the axis length.
pub(crate) fn axis_frame(start: Vec3, end: Vec3) -> KernelResult<(Frame, f64)> {
    let axis = end - start;
    let frame = Frame::from_axis(axis).map_err(|_| {
        KernelError::invalid_parameters(format!(
            "cylinder start and end coincide at {start:?}"
        ))
    })?;
    Ok((frame, axis.length()))
}

#[cfg(test)]
mod tests;
