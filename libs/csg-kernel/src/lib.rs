//! Parametric CSG primitive generation and slice-sweep kernel.
//!
//! This crate turns small parameter records into closed polygonal solids.
//! Every solid is a plain set of planar, outward-facing [`Polygon`]s that a
//! boolean engine, exporter or renderer can consume directly.
//!
//! - [`primitives`] generates boxes, spheres, cylinders and explicit
//!   polyhedra.
//! - [`cross_section`] describes 2D regions as ordered sides.
//! - [`sweep`] stitches an ordered sequence of slices into a solid.
//! - [`validate`] checks that a solid is closed and consistently wound.

pub mod core;
pub mod cross_section;
pub mod error;
pub mod polygon;
pub mod primitives;
pub mod solid;
pub mod sweep;
pub mod validate;

pub use core::{Frame, Vec2, Vec3};
pub use cross_section::CrossSection;
pub use error::{KernelError, KernelResult, ValidationError};
pub use polygon::{Polygon, SharedTag};
pub use solid::Solid;
pub use sweep::Slice;
