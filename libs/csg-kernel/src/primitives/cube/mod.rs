//! Axis-aligned box primitive, optionally with rounded edges.
//!
//! A box is given either by `center` and `radius` (half extents) or by two
//! opposite corners. Both forms resolve to a [`BoxSpec`] and are then
//! normalized to center and radius, so equivalent inputs produce identical
//! output.

mod rounded;

use config::constants::{KernelConfig, DEFAULT_ROUND_RADIUS_RATIO};
use serde::{Deserialize, Serialize};

use super::resolve_resolution;
use crate::core::vec3::Vec3;
use crate::error::{KernelError, KernelResult};
use crate::polygon::{Polygon, SharedTag};
use crate::solid::Solid;

const TAG: &str = "cube";

/// Corner indices of each face. Corner `i` sits at `center + radius * s`
/// where `s` takes the sign of bit 0, 1 and 2 of `i` for x, y and z.
const FACES: [([usize; 4], &str); 6] = [
    ([0, 4, 6, 2], "min_x"),
    ([1, 3, 7, 5], "max_x"),
    ([0, 1, 5, 4], "min_y"),
    ([2, 6, 7, 3], "max_y"),
    ([0, 2, 3, 1], "min_z"),
    ([4, 5, 7, 6], "max_z"),
];

// =============================================================================
// PARAMETERS
// =============================================================================

/// Parameters for [`cube`] and [`rounded_cube`].
///
/// Set either `center`/`radius` or both corners, never both forms. A scalar
/// radius is written `Vec3::splat(r)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CubeParams {
    /// Center. Default origin.
    pub center: Option<Vec3>,
    /// Half extents. Default `[1, 1, 1]`.
    pub radius: Option<Vec3>,
    /// One corner of the box.
    pub corner1: Option<Vec3>,
    /// The opposite corner.
    pub corner2: Option<Vec3>,
    /// Edge rounding radius. Zero or absent gives a sharp box from [`cube`].
    pub round_radius: Option<f64>,
    /// Rounding resolution. Default from
    /// [`KernelConfig::round_resolution`].
    pub resolution: Option<u32>,
}

/// The two ways of describing a box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BoxSpec {
    /// Center and half extents.
    Centered {
        /// Center point
        center: Vec3,
        /// Half extents
        radius: Vec3,
    },
    /// Two opposite corners, in any order.
    Corners {
        /// One corner
        corner1: Vec3,
        /// The opposite corner
        corner2: Vec3,
    },
}

impl BoxSpec {
    /// Resolves the parameter record.
    ///
    /// # Errors
    /// [`KernelError::InvalidParameters`] when both forms are mixed or only
    /// one corner is given.
    pub fn from_params(params: &CubeParams) -> KernelResult<Self> {
        match (params.corner1, params.corner2) {
            (None, None) => Ok(Self::Centered {
                center: params.center.unwrap_or(Vec3::ZERO),
                radius: params.radius.unwrap_or(Vec3::ONE),
            }),
            (Some(corner1), Some(corner2)) => {
                if params.center.is_some() || params.radius.is_some() {
                    return Err(KernelError::invalid_parameters(
                        "corner1/corner2 cannot be combined with center/radius",
                    ));
                }
                Ok(Self::Corners { corner1, corner2 })
            }
            _ => Err(KernelError::invalid_parameters(
                "corner1 and corner2 must be given together",
            )),
        }
    }

    /// Canonical `(center, radius)` with every radius component positive.
    ///
    /// # Errors
    /// [`KernelError::InvalidParameters`] for a flat or inverted box.
    pub fn normalized(&self) -> KernelResult<(Vec3, Vec3)> {
        let (center, radius) = match *self {
            Self::Centered { center, radius } => (center, radius),
            Self::Corners { corner1, corner2 } => {
                ((corner1 + corner2) / 2.0, (corner2 - corner1).abs() / 2.0)
            }
        };
        if !(radius.cmpgt(Vec3::ZERO).all() && radius.is_finite() && center.is_finite()) {
            return Err(KernelError::invalid_parameters(format!(
                "box radius must be positive in every axis, got {radius:?}"
            )));
        }
        Ok((center, radius))
    }
}

// =============================================================================
// GENERATORS
// =============================================================================

/// Creates a box with the default configuration.
///
/// # Examples
/// ```
/// use csg_kernel::primitives::cube::{cube, CubeParams};
/// use csg_kernel::Vec3;
///
/// let c = cube(&CubeParams {
///     corner1: Some(Vec3::ZERO),
///     corner2: Some(Vec3::new(2.0, 3.0, 4.0)),
///     ..Default::default()
/// }).unwrap();
/// assert_eq!(c.polygon_count(), 6);
/// assert!((c.volume() - 24.0).abs() < 1e-12);
/// ```
pub fn cube(params: &CubeParams) -> KernelResult<Solid> {
    cube_with(params, &KernelConfig::default())
}

/// Creates a box. A positive `round_radius` produces a rounded box as in
/// [`rounded_cube_with`].
///
/// # Errors
/// [`KernelError::InvalidParameters`] for mixed box forms, a non-positive
/// radius, a negative round radius, or a rounding resolution below 3 when
/// `round_radius` is positive. `resolution` is ignored for a sharp box.
pub fn cube_with(params: &CubeParams, config: &KernelConfig) -> KernelResult<Solid> {
    let (center, radius) = BoxSpec::from_params(params)?.normalized()?;
    match params.round_radius {
        Some(r) if r < 0.0 || r.is_nan() => Err(KernelError::invalid_parameters(format!(
            "round radius must not be negative, got {r}"
        ))),
        Some(r) if r > 0.0 => {
            let resolution = resolve_resolution(params.resolution, config.round_resolution)?;
            rounded::build(center, radius, r, resolution, config)
        }
        _ => sharp_box(center, radius),
    }
}

/// Creates a rounded box with the default configuration.
pub fn rounded_cube(params: &CubeParams) -> KernelResult<Solid> {
    rounded_cube_with(params, &KernelConfig::default())
}

/// Creates a box whose edges are quarter cylinders and corners sphere
/// octants of radius `round_radius`.
///
/// `round_radius` defaults to `0.2 * min(radius)` and must lie in
/// `(0, min(radius))`.
///
/// # Errors
/// As [`cube_with`], plus [`KernelError::InvalidParameters`] for a zero
/// or too large round radius.
pub fn rounded_cube_with(params: &CubeParams, config: &KernelConfig) -> KernelResult<Solid> {
    let (center, radius) = BoxSpec::from_params(params)?.normalized()?;
    let resolution = resolve_resolution(params.resolution, config.round_resolution)?;
    let round_radius = params
        .round_radius
        .unwrap_or(radius.min_element() * DEFAULT_ROUND_RADIUS_RATIO);
    rounded::build(center, radius, round_radius, resolution, config)
}

fn sharp_box(center: Vec3, radius: Vec3) -> KernelResult<Solid> {
    let corner = |i: usize| {
        let sign = |bit: usize| if i & bit != 0 { 1.0 } else { -1.0 };
        center + radius * Vec3::new(sign(1), sign(2), sign(4))
    };

    let polygons = FACES
        .iter()
        .map(|(indices, side)| {
            let points = indices.map(corner);
            Polygon::from_points(&points, Some(SharedTag::new(format!("{TAG}.{side}"))))
        })
        .collect::<KernelResult<Vec<_>>>()?;

    let solid = Solid::from_polygons(polygons).validated()?;
    tracing::debug!(
        center = ?center,
        radius = ?radius,
        polygons = solid.polygon_count(),
        "generated cube"
    );
    Ok(solid)
}
