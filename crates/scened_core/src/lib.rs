//! Core types for the scened editor
//!
//! This crate provides the scene hierarchy and its building blocks:
//!
//! - [`Scene`] - Root container owning every object
//! - [`SceneObject`] - A node with a transform, components and children
//! - [`ObjectKey`] - Generational key to an object in its scene
//! - [`Transform`] - Local position, rotation, and scale
//! - [`Component`] - Optional capabilities ([`Primitive`], [`Camera`])
//! - [`HierarchyIter`] - Depth-first traversal, optionally skipping hidden subtrees
//! - [`Selection`] - The editor's current node

mod camera;
mod component;
mod error;
mod mesh;
mod node;
mod object;
mod scene;
mod selection;
mod transform;
mod traversal;

pub use camera::{
    Camera, ProjectionType, DEFAULT_FAR, DEFAULT_HEIGHT, DEFAULT_NEAR, DEFAULT_VIEW_ANGLE,
    MAX_VIEW_ANGLE, MIN_DEPTH, MIN_HEIGHT, MIN_VIEW_ANGLE,
};
pub use component::{Component, ComponentKind, Primitive};
pub use error::SceneError;
pub use mesh::{DrawHandle, Mesh, MeshLibrary, MeshRef, StaticMesh};
pub use node::{NodeRef, SceneNode};
pub use object::{DirtyFlags, ObjectKey, Owner, SceneObject};
pub use scene::Scene;
pub use selection::Selection;
pub use transform::{Space, Transform};
pub use traversal::HierarchyIter;

// Re-export commonly used math types for convenience
pub use scened_math::{Bounds3, Color, EulerRot, Mat4, Quat, Vec3};
