//! Surface of revolution shared by the sphere and cylinder generators.
//!
//! A profile is a polyline in `(radius, height)` space that starts and ends
//! on the axis. Revolving it in `resolution` steps produces a grid whose
//! cells become faces: quads on the surface, triangles where a cell touches
//! the axis. Caps therefore come out as triangle fans.
//!
//! The profile must run counter-clockwise in the `(radius, height)` plane
//! (bottom axis point, outwards, up, back to the top axis point) for the
//! faces to wind outward in a right-handed frame.

use std::f64::consts::TAU;

use config::constants::{approx_equal, EPSILON, FULL_CIRCLE_DEGREES};

use crate::core::frame::Frame;
use crate::core::vec2::Vec2;
use crate::core::vec3::Vec3;
use crate::error::KernelResult;
use crate::polygon::{push_face, Polygon, SharedTag};

/// One profile point. `radius` holds the extents along the frame's X and Y
/// axes, so unequal components give an elliptic ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ProfilePoint {
    pub radius: Vec2,
    pub height: f64,
}

impl ProfilePoint {
    pub fn new(radius: Vec2, height: f64) -> Self {
        Self { radius, height }
    }

    pub fn axis(height: f64) -> Self {
        Self::new(Vec2::ZERO, height)
    }

    fn is_axis(&self) -> bool {
        self.radius == Vec2::ZERO
    }

    fn approx_eq(&self, other: &Self) -> bool {
        self.radius.abs_diff_eq(other.radius, EPSILON) && approx_equal(self.height, other.height)
    }
}

/// Axis-to-axis polyline with a provenance tag per segment.
#[derive(Debug, Clone)]
pub(crate) struct Profile {
    points: Vec<ProfilePoint>,
    tags: Vec<&'static str>,
}

impl Profile {
    /// Starts on the axis at `height`.
    pub fn from_axis(height: f64) -> Self {
        Self {
            points: vec![ProfilePoint::axis(height)],
            tags: Vec::new(),
        }
    }

    /// Adds a segment to `point`. Points coinciding with the previous one
    /// are skipped.
    pub fn line_to(&mut self, point: ProfilePoint, tag: &'static str) {
        if self.points.last().is_some_and(|last| last.approx_eq(&point)) {
            return;
        }
        self.points.push(point);
        self.tags.push(tag);
    }

    /// Ends on the axis at `height`. A last point already (nearly) there is
    /// snapped onto the axis.
    pub fn close_to_axis(mut self, height: f64, tag: &'static str) -> Self {
        let axis = ProfilePoint::axis(height);
        match self.points.last_mut() {
            Some(last) if last.approx_eq(&axis) => *last = axis,
            _ => {
                self.points.push(axis);
                self.tags.push(tag);
            }
        }
        self
    }

    pub fn segment_count(&self) -> usize {
        self.tags.len()
    }
}

/// Placement and tessellation of a revolved profile.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Revolution {
    pub origin: Vec3,
    pub frame: Frame,
    pub resolution: u32,
    pub sector_degrees: f64,
    pub tolerance: f64,
}

impl Revolution {
    fn is_full(&self) -> bool {
        self.sector_degrees >= FULL_CIRCLE_DEGREES
    }

    fn point(&self, p: &ProfilePoint, angle: f64) -> Vec3 {
        if p.is_axis() {
            return self.origin + self.frame.z * p.height;
        }
        let local = Vec3::new(p.radius.x * angle.cos(), p.radius.y * angle.sin(), p.height);
        self.origin + self.frame.to_world(local)
    }

    /// Revolves `profile`, tagging wedge end faces with `wedge_tag`.
    pub fn revolve(&self, profile: &Profile, wedge_tag: &'static str) -> KernelResult<Vec<Polygon>> {
        let segments = self.resolution as usize;
        let full = self.is_full();
        let columns = if full { segments } else { segments + 1 };
        let sweep = if full {
            TAU
        } else {
            self.sector_degrees.to_radians()
        };

        let grid: Vec<Vec<Vec3>> = profile
            .points
            .iter()
            .map(|p| {
                (0..columns)
                    .map(|j| self.point(p, sweep * (j as f64 / segments as f64)))
                    .collect()
            })
            .collect();

        let mut polygons = Vec::new();
        for (k, tag) in profile.tags.iter().enumerate() {
            let shared = Some(SharedTag::new(*tag));
            let (lower, upper) = (&grid[k], &grid[k + 1]);
            for j in 0..segments {
                let next = (j + 1) % columns;
                push_face(
                    &[lower[j], lower[next], upper[next], upper[j]],
                    self.tolerance,
                    &shared,
                    &mut polygons,
                )?;
            }
        }

        if !full {
            let shared = Some(SharedTag::new(wedge_tag));
            let start: Vec<Vec3> = grid.iter().map(|ring| ring[0]).collect();
            let end: Vec<Vec3> = grid.iter().rev().map(|ring| ring[segments]).collect();
            push_face(&start, self.tolerance, &shared, &mut polygons)?;
            push_face(&end, self.tolerance, &shared, &mut polygons)?;
        }

        if self.frame.is_left_handed() {
            polygons = polygons.iter().map(Polygon::flipped).collect();
        }
        Ok(polygons)
    }
}
