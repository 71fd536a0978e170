//! # Config Crate
//!
//! Compiled-in tolerances and tessellation defaults for the CSG kernel.
//! Generators never read mutable global state: they take the constants
//! below directly or a [`constants::KernelConfig`] snapshot built from them.
//!
//! ```rust
//! use config::constants::{KernelConfig, DEFAULT_RESOLUTION};
//!
//! let config = KernelConfig::default();
//! assert_eq!(config.default_resolution, DEFAULT_RESOLUTION);
//! assert!(KernelConfig::new(1e-7, 2, 8).is_err());
//! ```

pub mod constants;

#[cfg(test)]
mod tests;
