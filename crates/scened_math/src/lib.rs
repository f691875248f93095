//! Math types for the scened scene editor
//!
//! Vectors, quaternions and matrices come from `glam`; this crate adds the
//! editor-specific value types built on top of them.
//!
//! ## Core Types
//!
//! - [`Bounds3`] - Axis-aligned bounding box in 3D
//! - [`Color`] - Linear RGBA color

mod bounds;
mod color;

pub use bounds::Bounds3;
pub use color::Color;

pub use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};
