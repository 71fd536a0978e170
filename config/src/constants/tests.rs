//! Tests for the kernel configuration snapshot.

use super::*;

/// Ensures default snapshot mirrors the compiled-in constants.
///
/// # Examples
/// ```
/// use config::constants::KernelConfig;
/// let cfg = KernelConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[test]
fn default_config_matches_constants() {
    let cfg = KernelConfig::default();
    assert_eq!(cfg.tolerance, PLANARITY_EPSILON);
    assert_eq!(cfg.default_resolution, DEFAULT_RESOLUTION);
    assert_eq!(cfg.round_resolution, DEFAULT_ROUND_RESOLUTION);
}

/// Validates the constructor rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::KernelConfig;
/// assert!(KernelConfig::new(0.0, 24, 8).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        KernelConfig::new(0.0, 24, 8).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        KernelConfig::new(1.0e-9, 2, 8).unwrap_err(),
        ConfigError::InvalidResolution(2)
    );
    assert_eq!(
        KernelConfig::new(1.0e-9, 12, 1).unwrap_err(),
        ConfigError::InvalidResolution(1)
    );
    assert!(KernelConfig::new(f64::NAN, 12, 8).is_err());
}

#[test]
fn error_messages_name_the_value() {
    let message = ConfigError::InvalidResolution(2).to_string();
    assert!(message.contains(">= 3"));
    assert!(message.contains('2'));
}
