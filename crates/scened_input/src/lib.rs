//! Editor input handling
//!
//! This crate maps keyboard, mouse and scroll events onto navigation
//! commands for the editor camera.

mod editor_controller;

pub use editor_controller::{
    DragFlags, EditorController, MoveFlags, NavigationControl, DEFAULT_CAMERA_RES,
    DEFAULT_ZOOM_SCALE,
};
