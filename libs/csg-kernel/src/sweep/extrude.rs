//! # Linear Extrusion
//!
//! Extrudes a 2D region along an offset vector, optionally twisting it about
//! the Z axis. Built on [`solid_from_slices_with`].

use config::constants::{approx_zero, KernelConfig};
use glam::DMat4;
use serde::{Deserialize, Serialize};

use super::solid_from_slices_with;
use crate::core::vec3::Vec3;
use crate::cross_section::CrossSection;
use crate::error::{KernelError, KernelResult};
use crate::solid::Solid;

/// Parameters for [`extrude`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtrudeParams {
    /// Displacement of the top slice relative to the region plane.
    pub offset: Vec3,
    /// Total rotation about Z in degrees, applied progressively.
    pub twist_angle: f64,
    /// Number of slabs the extrusion is divided into.
    pub twist_steps: u32,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 0.0, 1.0),
            twist_angle: 0.0,
            twist_steps: 1,
        }
    }
}

/// Extrudes a single-loop region.
///
/// Slice `i` of `twist_steps + 1` is the region rotated by
/// `twist_angle * t` and translated by `offset * t`, with
/// `t = i / twist_steps`. Either winding of the region works.
///
/// # Errors
/// - [`KernelError::InvalidParameters`] for zero steps, an offset without a
///   Z component, or a region with holes
///
/// # Examples
/// ```
/// use csg_kernel::cross_section::CrossSection;
/// use csg_kernel::sweep::{extrude, ExtrudeParams};
/// use csg_kernel::Vec2;
///
/// let square = CrossSection::rectangle(Vec2::ZERO, Vec2::ONE).unwrap();
/// let block = extrude(&square, &ExtrudeParams::default()).unwrap();
/// assert!((block.volume() - 4.0).abs() < 1e-12);
/// ```
pub fn extrude(section: &CrossSection, params: &ExtrudeParams) -> KernelResult<Solid> {
    extrude_with(section, params, &KernelConfig::default())
}

/// [`extrude`] with an explicit configuration.
pub fn extrude_with(
    section: &CrossSection,
    params: &ExtrudeParams,
    config: &KernelConfig,
) -> KernelResult<Solid> {
    if params.twist_steps == 0 {
        return Err(KernelError::invalid_parameters(
            "twist_steps must be at least 1",
        ));
    }
    if approx_zero(params.offset.z) || !params.offset.is_finite() {
        return Err(KernelError::invalid_parameters(format!(
            "offset {:?} must have a non-zero Z component",
            params.offset
        )));
    }
    if section.contours().len() != 1 {
        return Err(KernelError::invalid_parameters(
            "only single-loop regions can be extruded",
        ));
    }

    let steps = params.twist_steps as usize;
    let solid = solid_from_slices_with(
        steps + 1,
        |i| {
            let t = i as f64 / steps as f64;
            let matrix = DMat4::from_translation(params.offset * t)
                * DMat4::from_rotation_z((params.twist_angle * t).to_radians());
            section.to_slice(&matrix)
        },
        config,
    )?;

    tracing::debug!(
        offset = ?params.offset,
        twist_angle = params.twist_angle,
        twist_steps = params.twist_steps,
        polygons = solid.polygon_count(),
        "extruded region"
    );
    Ok(solid)
}
