//! # Cross Section
//!
//! Flat 2D region stored as an ordered list of sides. Sides keep exactly the
//! order and winding they were built with. Counter-clockwise loops are outer
//! boundaries, clockwise loops are holes.
//!
//! ## Example
//!
//! ```rust
//! use csg_kernel::cross_section::CrossSection;
//! use csg_kernel::Vec2;
//!
//! let tri = CrossSection::from_points(&[
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(10.0, 0.0),
//!     Vec2::new(0.0, 10.0),
//! ]).unwrap();
//! assert_eq!(tri.sides().len(), 3);
//! assert!(tri.is_counter_clockwise());
//! ```

use std::f64::consts::TAU;

use config::constants::MIN_RESOLUTION;
use glam::{DMat2, DMat4};
use serde::{Deserialize, Serialize};

use crate::core::vec2::{cross, Vec2};
use crate::core::vec3::Vec3;
use crate::error::{KernelError, KernelResult};
use crate::sweep::Slice;

// =============================================================================
// SIDE
// =============================================================================

/// One directed boundary segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Side {
    /// First endpoint.
    pub start: Vec2,
    /// Second endpoint, the start of the following side in the same loop.
    pub end: Vec2,
}

impl Side {
    /// Create a side.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
}

// =============================================================================
// CROSS SECTION
// =============================================================================

/// Closed 2D region made of one or more side loops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CrossSectionRecord")]
pub struct CrossSection {
    sides: Vec<Side>,
}

#[derive(Deserialize)]
struct CrossSectionRecord {
    sides: Vec<Side>,
}

impl TryFrom<CrossSectionRecord> for CrossSection {
    type Error = KernelError;

    /// Accepts only sides that chain end to start into closed loops of at
    /// least 3 sides each.
    fn try_from(record: CrossSectionRecord) -> KernelResult<Self> {
        if record.sides.is_empty() {
            return Err(KernelError::degenerate_region("region has no sides"));
        }
        let mut loop_start = 0;
        for (i, side) in record.sides.iter().enumerate() {
            if !(side.start.is_finite() && side.end.is_finite()) {
                return Err(KernelError::degenerate_region(format!(
                    "side {i} has non-finite coordinates"
                )));
            }
            if side.end == record.sides[loop_start].start {
                check_loop_len(i + 1 - loop_start)?;
                loop_start = i + 1;
            } else if record.sides.get(i + 1).map(|next| next.start) != Some(side.end) {
                return Err(KernelError::degenerate_region(format!(
                    "side {i} does not connect to the next side"
                )));
            }
        }
        Ok(Self {
            sides: record.sides,
        })
    }
}

impl CrossSection {
    /// Builds a single loop: side `i` runs from `points[i]` to
    /// `points[(i + 1) % n]`. Repeated consecutive points are dropped, as is
    /// a last point that closes the loop explicitly.
    ///
    /// # Errors
    /// [`KernelError::DegenerateRegion`] for fewer than 3 distinct points.
    pub fn from_points(points: &[Vec2]) -> KernelResult<Self> {
        let points = closed_loop(points)?;
        Ok(Self {
            sides: loop_sides(&points).collect(),
        })
    }

    /// Builds a region from several loops, outer boundaries counter-clockwise
    /// and holes clockwise.
    ///
    /// # Errors
    /// [`KernelError::DegenerateRegion`] when no loop is given or a loop has
    /// fewer than 3 distinct points.
    pub fn from_contours(contours: &[Vec<Vec2>]) -> KernelResult<Self> {
        if contours.is_empty() {
            return Err(KernelError::degenerate_region("no contours given"));
        }
        let mut sides = Vec::new();
        for contour in contours {
            let contour = closed_loop(contour)?;
            sides.extend(loop_sides(&contour));
        }
        Ok(Self { sides })
    }

    /// Axis-aligned rectangle, counter-clockwise from the lower-left corner.
    ///
    /// # Errors
    /// [`KernelError::InvalidParameters`] unless both radii are positive.
    pub fn rectangle(center: Vec2, radius: Vec2) -> KernelResult<Self> {
        if !(radius.x > 0.0 && radius.y > 0.0) {
            return Err(KernelError::invalid_parameters(format!(
                "rectangle radius must be positive, got {radius:?}"
            )));
        }
        Self::from_points(&[
            center + Vec2::new(-radius.x, -radius.y),
            center + Vec2::new(radius.x, -radius.y),
            center + Vec2::new(radius.x, radius.y),
            center + Vec2::new(-radius.x, radius.y),
        ])
    }

    /// Regular polygon approximating a circle, counter-clockwise from the
    /// positive X axis.
    ///
    /// # Errors
    /// [`KernelError::InvalidParameters`] for a non-positive radius or a
    /// resolution below 3.
    pub fn circle(center: Vec2, radius: f64, resolution: u32) -> KernelResult<Self> {
        if !(radius > 0.0) {
            return Err(KernelError::invalid_parameters(format!(
                "circle radius must be positive, got {radius}"
            )));
        }
        if resolution < MIN_RESOLUTION {
            return Err(KernelError::invalid_parameters(format!(
                "resolution must be >= {MIN_RESOLUTION}, got {resolution}"
            )));
        }
        let points: Vec<Vec2> = (0..resolution)
            .map(|i| {
                let angle = TAU * f64::from(i) / f64::from(resolution);
                center + Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();
        Self::from_points(&points)
    }

    /// The sides in construction order.
    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    /// Regroups the sides into point loops.
    pub fn contours(&self) -> Vec<Vec<Vec2>> {
        let mut contours = Vec::new();
        let mut current: Vec<Vec2> = Vec::new();
        for side in &self.sides {
            current.push(side.start);
            if current.first() == Some(&side.end) {
                contours.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            contours.push(current);
        }
        contours
    }

    /// Total signed area. Holes count negative.
    pub fn signed_area(&self) -> f64 {
        self.sides
            .iter()
            .map(|side| cross(side.start, side.end))
            .sum::<f64>()
            * 0.5
    }

    /// True when the total signed area is positive.
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Reverses the point order of every loop.
    pub fn flipped(&self) -> Self {
        let sides = self
            .contours()
            .into_iter()
            .flat_map(|mut contour| {
                contour.reverse();
                loop_sides(&contour).collect::<Vec<_>>()
            })
            .collect();
        Self { sides }
    }

    /// Returns the region flipped if its total area is negative.
    ///
    /// # Examples
    /// ```
    /// use csg_kernel::cross_section::CrossSection;
    /// use csg_kernel::Vec2;
    ///
    /// let cw = CrossSection::from_points(&[
    ///     Vec2::new(0.0, 0.0),
    ///     Vec2::new(0.0, 10.0),
    ///     Vec2::new(10.0, 10.0),
    /// ]).unwrap();
    /// let starts: Vec<Vec2> = cw.with_ccw_winding().sides().iter().map(|s| s.start).collect();
    /// assert_eq!(starts, vec![Vec2::new(10.0, 10.0), Vec2::new(0.0, 10.0), Vec2::new(0.0, 0.0)]);
    /// ```
    pub fn with_ccw_winding(&self) -> Self {
        if self.signed_area() < 0.0 {
            self.flipped()
        } else {
            self.clone()
        }
    }

    /// Moves every side by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        self.map_points(|p| p + offset)
    }

    /// Rotates counter-clockwise about the origin by `degrees`.
    pub fn rotated(&self, degrees: f64) -> Self {
        let rotation = DMat2::from_angle(degrees.to_radians());
        self.map_points(|p| rotation * p)
    }

    /// Scales about the origin. Side order is kept, so a mirroring scale
    /// reverses the winding.
    pub fn scaled(&self, factors: Vec2) -> Self {
        self.map_points(|p| p * factors)
    }

    /// Places a single-loop region in 3D as a sweep slice, mapping `(x, y)`
    /// to `matrix * (x, y, 0)`.
    ///
    /// # Errors
    /// [`KernelError::InvalidParameters`] if the region has several loops.
    pub fn to_slice(&self, matrix: &DMat4) -> KernelResult<Slice> {
        let contours = self.contours();
        let [contour] = contours.as_slice() else {
            return Err(KernelError::invalid_parameters(format!(
                "a slice needs exactly one loop, region has {}",
                contours.len()
            )));
        };
        let points: Vec<Vec3> = contour
            .iter()
            .map(|p| matrix.transform_point3(Vec3::new(p.x, p.y, 0.0)))
            .collect();
        Slice::from_points(points)
    }

    fn map_points(&self, f: impl Fn(Vec2) -> Vec2) -> Self {
        Self {
            sides: self
                .sides
                .iter()
                .map(|side| Side::new(f(side.start), f(side.end)))
                .collect(),
        }
    }
}

/// Drops consecutive repeats and the closing duplicate of the first point.
fn closed_loop(points: &[Vec2]) -> KernelResult<Vec<Vec2>> {
    let mut out: Vec<Vec2> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    while out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    check_loop_len(out.len())?;
    Ok(out)
}

fn check_loop_len(len: usize) -> KernelResult<()> {
    if len < 3 {
        return Err(KernelError::degenerate_region(format!(
            "a region loop needs at least 3 points, got {len}"
        )));
    }
    Ok(())
}

fn loop_sides(points: &[Vec2]) -> impl Iterator<Item = Side> + '_ {
    let n = points.len();
    (0..n).map(move |i| Side::new(points[i], points[(i + 1) % n]))
}
