//! Core math primitives shared by every kernel module.
//!
//! Vectors are `glam` double-precision types re-exported under short names;
//! [`frame::Frame`] carries the axis triples used by oriented generators.

pub mod frame;
pub mod vec2;
pub mod vec3;

pub use frame::Frame;
pub use vec2::Vec2;
pub use vec3::Vec3;
