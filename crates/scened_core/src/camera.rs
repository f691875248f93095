//! Camera component
//!
//! Projection parameters only; the camera's pose comes from the transform
//! of the object (or navigator) that owns it.

use scened_math::Mat4;

/// Minimum and maximum perspective view angles, in degrees
pub const MIN_VIEW_ANGLE: f32 = 1.0;
pub const MAX_VIEW_ANGLE: f32 = 179.0;
/// Minimum parallel view height
pub const MIN_HEIGHT: f32 = 0.01;
/// Minimum distance of the near clipping plane
pub const MIN_DEPTH: f32 = 0.01;
/// Minimum gap between the near and far clipping planes
const MIN_DEPTH_RANGE: f32 = 0.01;
/// Smallest accepted aspect ratio
const MIN_ASPECT: f32 = 1e-4;

pub const DEFAULT_VIEW_ANGLE: f32 = 60.0;
pub const DEFAULT_HEIGHT: f32 = 10.0;
pub const DEFAULT_NEAR: f32 = 0.01;
pub const DEFAULT_FAR: f32 = 1000.0;

/// Projection type of a camera
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectionType {
    #[default]
    Perspective,
    Parallel,
}

/// Projection parameters for a camera
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    projection_type: ProjectionType,
    /// Vertical field of view in degrees (perspective)
    view_angle: f32,
    /// Height of the view volume (parallel)
    height: f32,
    near: f32,
    far: f32,
    aspect_ratio: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Camera {
    /// Create a perspective camera with default parameters
    pub fn new(aspect_ratio: f32) -> Self {
        let mut camera = Self {
            projection_type: ProjectionType::Perspective,
            view_angle: DEFAULT_VIEW_ANGLE,
            height: DEFAULT_HEIGHT,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            aspect_ratio: 1.0,
        };
        camera.set_aspect_ratio(aspect_ratio);
        camera
    }

    /// Restore default projection parameters for the given aspect ratio
    pub fn reset(&mut self, aspect_ratio: f32) {
        *self = Self::new(aspect_ratio);
    }

    #[inline]
    pub fn projection_type(&self) -> ProjectionType {
        self.projection_type
    }

    pub fn set_projection_type(&mut self, projection_type: ProjectionType) {
        self.projection_type = projection_type;
    }

    /// Vertical field of view in degrees
    #[inline]
    pub fn view_angle(&self) -> f32 {
        self.view_angle
    }

    /// Set the field of view, clamped to [`MIN_VIEW_ANGLE`, `MAX_VIEW_ANGLE`]
    pub fn set_view_angle(&mut self, degrees: f32) {
        if degrees.is_finite() {
            self.view_angle = degrees.clamp(MIN_VIEW_ANGLE, MAX_VIEW_ANGLE);
        }
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Set the parallel view height, never below [`MIN_HEIGHT`]
    pub fn set_height(&mut self, height: f32) {
        if height.is_finite() {
            self.height = height.max(MIN_HEIGHT);
        }
    }

    #[inline]
    pub fn near_plane(&self) -> f32 {
        self.near
    }

    #[inline]
    pub fn far_plane(&self) -> f32 {
        self.far
    }

    /// Set both clipping planes
    ///
    /// The near plane is kept at or beyond [`MIN_DEPTH`] and the far plane
    /// strictly beyond the near plane.
    pub fn set_clipping_planes(&mut self, near: f32, far: f32) {
        if !near.is_finite() || !far.is_finite() {
            return;
        }
        self.near = near.max(MIN_DEPTH);
        self.far = far.max(self.near + MIN_DEPTH_RANGE);
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        if aspect_ratio.is_finite() {
            self.aspect_ratio = aspect_ratio.max(MIN_ASPECT);
        }
    }

    /// Right-handed projection matrix for this camera
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection_type {
            ProjectionType::Perspective => Mat4::perspective_rh_gl(
                self.view_angle.to_radians(),
                self.aspect_ratio,
                self.near,
                self.far,
            ),
            ProjectionType::Parallel => {
                let half_height = self.height * 0.5;
                let half_width = half_height * self.aspect_ratio;
                Mat4::orthographic_rh_gl(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cam = Camera::new(1.5);
        assert_eq!(cam.projection_type(), ProjectionType::Perspective);
        assert_eq!(cam.view_angle(), DEFAULT_VIEW_ANGLE);
        assert_eq!(cam.height(), DEFAULT_HEIGHT);
        assert_eq!(cam.aspect_ratio(), 1.5);
    }

    #[test]
    fn test_view_angle_clamped() {
        let mut cam = Camera::default();
        cam.set_view_angle(500.0);
        assert_eq!(cam.view_angle(), MAX_VIEW_ANGLE);
        cam.set_view_angle(0.0);
        assert_eq!(cam.view_angle(), MIN_VIEW_ANGLE);
        cam.set_view_angle(f32::NAN);
        assert_eq!(cam.view_angle(), MIN_VIEW_ANGLE);
    }

    #[test]
    fn test_height_clamped() {
        let mut cam = Camera::default();
        cam.set_height(-3.0);
        assert_eq!(cam.height(), MIN_HEIGHT);
    }

    #[test]
    fn test_clipping_planes() {
        let mut cam = Camera::default();
        cam.set_clipping_planes(0.0, -1.0);
        assert_eq!(cam.near_plane(), MIN_DEPTH);
        assert!(cam.far_plane() > cam.near_plane());
    }

    #[test]
    fn test_reset() {
        let mut cam = Camera::new(2.0);
        cam.set_projection_type(ProjectionType::Parallel);
        cam.set_view_angle(20.0);
        cam.reset(1.0);
        assert_eq!(cam, Camera::new(1.0));
    }

    #[test]
    fn test_projection_matrices_are_finite() {
        let mut cam = Camera::new(16.0 / 9.0);
        assert!(cam.projection_matrix().is_finite());
        cam.set_projection_type(ProjectionType::Parallel);
        assert!(cam.projection_matrix().is_finite());
    }
}
