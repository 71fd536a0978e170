//! # Kernel Errors
//!
//! Error types for primitive generation, sweeping and validation.
//!
//! ## Error Policy
//!
//! - Input errors are returned to the immediate caller, never retried
//! - Validation errors mean a generator produced an open or misoriented
//!   surface and must not be ignored
//! - No partial results are returned on failure

use thiserror::Error;

use crate::core::vec3::Vec3;

/// Result alias used throughout the kernel.
pub type KernelResult<T> = Result<T, KernelError>;

// =============================================================================
// KERNEL ERRORS
// =============================================================================

/// Errors that can occur while building polygons, regions and solids.
///
/// ## Example
///
/// ```rust
/// use csg_kernel::primitives::sphere::{sphere, SphereParams};
/// use csg_kernel::KernelError;
///
/// let params = SphereParams { resolution: Some(2), ..Default::default() };
/// assert!(matches!(sphere(&params), Err(KernelError::InvalidParameters { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// Conflicting or out-of-range parameter values.
    #[error("Invalid parameters: {message}")]
    InvalidParameters {
        /// Description of the offending parameter
        message: String,
    },

    /// A vector of zero length was normalized.
    #[error("Degenerate vector: {message}")]
    DegenerateVector {
        /// What the vector was used for
        message: String,
    },

    /// Too few or collinear points for a polygon.
    #[error("Degenerate polygon: {message}")]
    DegeneratePolygon {
        /// Why the polygon could not be built
        message: String,
    },

    /// Too few points for a 2D region.
    #[error("Degenerate region: {message}")]
    DegenerateRegion {
        /// Why the region could not be built
        message: String,
    },

    /// A polyhedron face references a point that does not exist.
    #[error("Face {face} references point {index}, but only {len} points exist")]
    IndexOutOfRange {
        /// Index of the face in the face list
        face: usize,
        /// Offending point index
        index: usize,
        /// Number of points supplied
        len: usize,
    },

    /// Slices handed to the sweep engine have different side counts.
    #[error("Slice {index} has {found} sides, expected {expected}")]
    SliceMismatch {
        /// Index of the offending slice
        index: usize,
        /// Side count of the first slice
        expected: usize,
        /// Side count of the offending slice
        found: usize,
    },

    /// Manifold closure check failed on generated output.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl KernelError {
    /// Creates an invalid parameters error.
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Creates a degenerate vector error.
    pub fn degenerate_vector(message: impl Into<String>) -> Self {
        Self::DegenerateVector {
            message: message.into(),
        }
    }

    /// Creates a degenerate polygon error.
    pub fn degenerate_polygon(message: impl Into<String>) -> Self {
        Self::DegeneratePolygon {
            message: message.into(),
        }
    }

    /// Creates a degenerate region error.
    pub fn degenerate_region(message: impl Into<String>) -> Self {
        Self::DegenerateRegion {
            message: message.into(),
        }
    }
}

// =============================================================================
// VALIDATION ERRORS
// =============================================================================

/// Manifold closure failures reported by [`crate::validate::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// An undirected edge is not shared by exactly two polygons.
    #[error("Open edge {start:?} -> {end:?} is used by {count} polygon(s)")]
    OpenEdge {
        /// First endpoint of the edge
        start: Vec3,
        /// Second endpoint of the edge
        end: Vec3,
        /// Number of polygons using the edge
        count: usize,
    },

    /// Both polygons of an edge traverse it in the same direction.
    #[error("Edge {start:?} -> {end:?} is traversed twice in the same direction")]
    InconsistentWinding {
        /// First endpoint of the edge
        start: Vec3,
        /// Second endpoint of the edge
        end: Vec3,
    },
}
