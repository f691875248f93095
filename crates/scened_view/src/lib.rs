//! Scene navigation for the scened editor
//!
//! This crate provides the editor's viewing camera and the seam to the
//! renderer that draws what it sees.
//!
//! ## Key Components
//!
//! - [`Navigator`] - Camera + transform with orbit, pan, zoom and frame-to-bounds
//! - [`FrameTarget`] - Whatever a frame is drawn into

pub mod frame;
pub mod navigator;

pub use frame::FrameTarget;
pub use navigator::{Navigator, DEFAULT_ORBIT_DISTANCE, DEFAULT_VIEW_DISTANCE};
