//! Scene construction utilities
//!
//! This module provides numbered object creation and a declarative API for
//! building editor scenes.

mod object_factory;
mod scene_builder;

pub use object_factory::ObjectFactory;
pub use scene_builder::SceneBuilder;
