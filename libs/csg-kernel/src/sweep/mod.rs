//! # Slice Sweep
//!
//! Builds a solid from an ordered sequence of closed 3D point loops.
//!
//! ## Algorithm
//!
//! 1. Obtain every slice from the caller's `slice_at(index)` function
//! 2. Check that every slice lies ahead of the previous one along the loop
//!    normal, then orient the loops so they wind counter-clockwise about the
//!    sweep direction
//! 3. Stitch side `k` of slice `i` to side `k` of slice `i + 1`
//! 4. Cap the first slice reversed and the last slice forward
//! 5. Validate manifold closure
//!
//! ## Example
//!
//! ```rust
//! use csg_kernel::cross_section::CrossSection;
//! use csg_kernel::sweep::solid_from_slices;
//! use csg_kernel::{Vec2, Vec3};
//! use glam::DMat4;
//!
//! let square = CrossSection::rectangle(Vec2::ZERO, Vec2::ONE).unwrap();
//! let prism = solid_from_slices(2, |i| {
//!     square.to_slice(&DMat4::from_translation(Vec3::new(0.0, 0.0, i as f64)))
//! }).unwrap();
//! assert_eq!(prism.polygon_count(), 6);
//! ```

pub mod extrude;

use config::constants::{KernelConfig, EPSILON};
use glam::DMat4;
use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;
use crate::error::{KernelError, KernelResult};
use crate::polygon::{collapse, newell_normal, push_face, Polygon, SharedTag};
use crate::solid::Solid;

pub use extrude::{extrude, extrude_with, ExtrudeParams};

const WALL_TAG: &str = "sweep.wall";
const CAP_TAG: &str = "sweep.cap";

// =============================================================================
// SLICE
// =============================================================================

/// A closed, planar loop of 3D points. Side `i` runs from point `i` to point
/// `(i + 1) % n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SliceRecord")]
pub struct Slice {
    points: Vec<Vec3>,
}

#[derive(Deserialize)]
struct SliceRecord {
    points: Vec<Vec3>,
}

impl TryFrom<SliceRecord> for Slice {
    type Error = KernelError;

    fn try_from(record: SliceRecord) -> KernelResult<Self> {
        Self::from_points(record.points)
    }
}

impl Slice {
    /// Creates a slice from its loop points.
    ///
    /// # Errors
    /// [`KernelError::DegenerateRegion`] for fewer than 3 points.
    pub fn from_points(points: Vec<Vec3>) -> KernelResult<Self> {
        if points.len() < 3 {
            return Err(KernelError::degenerate_region(format!(
                "a slice needs at least 3 points, got {}",
                points.len()
            )));
        }
        Ok(Self { points })
    }

    /// Loop points in order.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of sides, equal to the number of points.
    pub fn side_count(&self) -> usize {
        self.points.len()
    }

    /// Applies an affine transform to every point.
    pub fn transformed(&self, matrix: &DMat4) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|&p| matrix.transform_point3(p))
                .collect(),
        }
    }

    fn centroid(&self) -> Vec3 {
        self.points.iter().sum::<Vec3>() / self.points.len() as f64
    }

    fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
        }
    }
}

// =============================================================================
// SWEEP
// =============================================================================

/// Sweeps `num_slices` slices into a solid using the default configuration.
///
/// See [`solid_from_slices_with`].
pub fn solid_from_slices<F>(num_slices: usize, slice_at: F) -> KernelResult<Solid>
where
    F: Fn(usize) -> KernelResult<Slice>,
{
    solid_from_slices_with(num_slices, slice_at, &KernelConfig::default())
}

/// Sweeps `num_slices` slices into a solid.
///
/// `slice_at` is called once per index in order; it carries any per-slice
/// transform itself. Walls that stay planar within `config.tolerance` are
/// emitted as one quad, others as two triangles split along the diagonal
/// from side start on slice `i` to side end on slice `i + 1`. Slices that
/// collapse to a point (cone apex) get no cap.
///
/// Each slice must sit more than `config.tolerance` ahead of the previous
/// one, measured along the previous loop's normal (or the next loop's when
/// the previous one is a point). All steps must go the same way.
///
/// # Errors
/// - [`KernelError::InvalidParameters`] for fewer than 2 slices, or when a
///   slice does not advance along the loop normal, or when the steps change
///   direction
/// - [`KernelError::SliceMismatch`] when side counts differ
/// - errors returned by `slice_at`, or a validation failure
pub fn solid_from_slices_with<F>(
    num_slices: usize,
    slice_at: F,
    config: &KernelConfig,
) -> KernelResult<Solid>
where
    F: Fn(usize) -> KernelResult<Slice>,
{
    if num_slices < 2 {
        return Err(KernelError::invalid_parameters(format!(
            "a sweep needs at least 2 slices, got {num_slices}"
        )));
    }

    let mut slices = Vec::with_capacity(num_slices);
    for index in 0..num_slices {
        let slice = slice_at(index)?;
        tracing::trace!(index, sides = slice.side_count(), "sweep slice");
        slices.push(slice);
    }

    let expected = slices[0].side_count();
    if let Some((index, slice)) = slices
        .iter()
        .enumerate()
        .find(|(_, s)| s.side_count() != expected)
    {
        return Err(KernelError::SliceMismatch {
            index,
            expected,
            found: slice.side_count(),
        });
    }

    if winds_backward(&slices, config.tolerance)? {
        slices = slices.iter().map(Slice::reversed).collect();
    }

    let mut polygons = Vec::new();
    for pair in slices.windows(2) {
        stitch(&pair[0], &pair[1], config.tolerance, &mut polygons)?;
    }

    if let Some(first) = slices.first() {
        push_cap(first.reversed().points(), &mut polygons)?;
    }
    if let Some(last) = slices.last() {
        push_cap(last.points(), &mut polygons)?;
    }

    tracing::debug!(
        slices = num_slices,
        sides = expected,
        polygons = polygons.len(),
        "swept solid"
    );
    Solid::from_polygons(polygons).validated()
}

/// Returns true when the loops wind clockwise about the sweep direction.
fn winds_backward(slices: &[Slice], tolerance: f64) -> KernelResult<bool> {
    let mut backward = None;
    for (index, pair) in slices.windows(2).enumerate() {
        let next = index + 1;
        let normal = pair
            .iter()
            .map(|slice| newell_normal(slice.points()))
            .find(|n| n.length() > EPSILON)
            .ok_or_else(|| {
                KernelError::invalid_parameters(format!(
                    "slices {index} and {next} both enclose no area"
                ))
            })?
            .normalize();
        let advance = (pair[1].centroid() - pair[0].centroid()).dot(normal);
        if !(advance.abs() > tolerance) {
            return Err(KernelError::invalid_parameters(format!(
                "slice {next} does not advance along the loop normal of slice {index} \
                 (step {advance})"
            )));
        }
        let step_backward = advance < 0.0;
        match backward {
            Some(expected) if expected != step_backward => {
                return Err(KernelError::invalid_parameters(format!(
                    "sweep reverses direction at slice {next}"
                )));
            }
            _ => backward = Some(step_backward),
        }
    }
    Ok(backward.unwrap_or(false))
}

/// Emits the walls between two consecutive slices.
fn stitch(a: &Slice, b: &Slice, tolerance: f64, out: &mut Vec<Polygon>) -> KernelResult<()> {
    let n = a.side_count();
    let wall_tag = tag(WALL_TAG);
    for k in 0..n {
        let next = (k + 1) % n;
        push_face(
            &[a.points[k], a.points[next], b.points[next], b.points[k]],
            tolerance,
            &wall_tag,
            out,
        )?;
    }
    Ok(())
}

fn push_cap(points: &[Vec3], out: &mut Vec<Polygon>) -> KernelResult<()> {
    let cap = collapse(points);
    if cap.len() >= 3 {
        out.push(Polygon::from_points(&cap, tag(CAP_TAG))?);
    }
    Ok(())
}

fn tag(name: &str) -> Option<SharedTag> {
    Some(SharedTag::new(name))
}
