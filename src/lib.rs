//! scened - Hierarchical scene editor
//!
//! Application-level pieces on top of the `scened_*` crates: layered
//! configuration and scene construction.

pub mod config;
pub mod scene;
