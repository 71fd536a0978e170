//! # Configuration Constants
//!
//! Centralized constants for the CSG kernel. Tessellation defaults and
//! precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default tessellation parameters
//! - **Geometry**: Default shape parameters
//! - **Snapshot**: [`KernelConfig`], an immutable bundle of the above

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, and for rejecting zero-length vectors and
/// collinear point triples.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Maximum distance of a fourth point from the plane of the first three
/// for a quad to still be emitted as a single planar polygon.
///
/// # Example
///
/// ```rust
/// use config::constants::{EPSILON, PLANARITY_EPSILON};
///
/// assert!(PLANARITY_EPSILON >= EPSILON);
/// ```
pub const PLANARITY_EPSILON: f64 = 1e-7;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of segments around a full circle for spheres and
/// cylinders.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RESOLUTION;
///
/// let user_resolution: Option<u32> = None;
/// assert_eq!(user_resolution.unwrap_or(DEFAULT_RESOLUTION), 12);
/// ```
pub const DEFAULT_RESOLUTION: u32 = 12;

/// Default resolution for rounded cube corners and edges.
pub const DEFAULT_ROUND_RESOLUTION: u32 = 8;

/// Minimum resolution accepted by any generator.
///
/// A circle needs at least 3 points to form a polygon.
pub const MIN_RESOLUTION: u32 = 3;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Default round radius of rounded shapes, as a fraction of the smallest
/// radius of the shape.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_ROUND_RADIUS_RATIO;
///
/// let radius = 1.0;
/// assert_eq!(radius * DEFAULT_ROUND_RADIUS_RATIO, 0.2);
/// ```
pub const DEFAULT_ROUND_RADIUS_RATIO: f64 = 0.2;

/// Sector angle of an uncut cylinder, in degrees.
pub const FULL_CIRCLE_DEGREES: f64 = 360.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// KERNEL CONFIG
// =============================================================================

/// Immutable snapshot of the kernel defaults that can be handed to
/// generators explicitly.
///
/// # Examples
/// ```
/// use config::constants::KernelConfig;
/// let config = KernelConfig::default();
/// assert_eq!(config.default_resolution, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Numeric tolerance used for planarity decisions.
    pub tolerance: f64,
    /// Resolution of spheres and cylinders when none is requested.
    pub default_resolution: u32,
    /// Resolution of rounded cube corners when none is requested.
    pub round_resolution: u32,
}

impl KernelConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::KernelConfig;
    /// let cfg = KernelConfig::new(1.0e-6, 24, 8).expect("valid config");
    /// assert_eq!(cfg.default_resolution, 24);
    /// ```
    pub fn new(
        tolerance: f64,
        default_resolution: u32,
        round_resolution: u32,
    ) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if default_resolution < MIN_RESOLUTION {
            return Err(ConfigError::InvalidResolution(default_resolution));
        }
        if round_resolution < MIN_RESOLUTION {
            return Err(ConfigError::InvalidResolution(round_resolution));
        }
        Ok(Self {
            tolerance,
            default_resolution,
            round_resolution,
        })
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            tolerance: PLANARITY_EPSILON,
            default_resolution: DEFAULT_RESOLUTION,
            round_resolution: DEFAULT_ROUND_RESOLUTION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when a resolution is too small to form a polygon.
    InvalidResolution(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidResolution(value) => {
                write!(f, "resolution must be >= {MIN_RESOLUTION}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
