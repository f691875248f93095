//! Render target seam
//!
//! The renderer itself lives outside this workspace. The navigator only
//! needs to clear the target, hand over its view, and ask for a ground grid.

use scened_math::{Color, Mat4, Vec3};

/// Side length of the ground grid drawn by [`Navigator::new_frame`](crate::Navigator::new_frame)
pub const GROUND_SIZE: f32 = 10.0;
/// Spacing between ground grid lines
pub const GROUND_STEP: f32 = 1.0;

/// Something a frame can be drawn into
pub trait FrameTarget {
    /// Clear color and depth
    fn clear(&mut self, color: Color);
    /// Set the eye position and combined view-projection matrix for this frame
    fn set_view(&mut self, eye: Vec3, view_projection: Mat4);
    /// Draw a square grid on the XZ plane centered on the origin
    fn draw_ground(&mut self, size: f32, step: f32);
}
