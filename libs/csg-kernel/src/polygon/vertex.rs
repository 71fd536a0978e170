//! # Polygon Vertex
//!
//! Position plus the normal of the owning polygon.

use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;

/// A polygon corner. Vertices are owned by one polygon and never shared,
/// even where two faces meet at the same coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Position in world space.
    pub pos: Vec3,
    /// Unit normal of the owning polygon.
    pub normal: Vec3,
}

impl Vertex {
    /// Create new vertex.
    pub fn new(pos: Vec3, normal: Vec3) -> Self {
        Self { pos, normal }
    }

    /// Same position, opposite normal.
    pub fn flipped(&self) -> Self {
        Self {
            pos: self.pos,
            normal: -self.normal,
        }
    }
}
