//! Scene navigator: the editor's viewing camera
//!
//! The navigator owns its own [`Camera`] and [`Transform`], independent of
//! the scene tree. It reads scene bounds to frame objects but never writes
//! to the scene.
//!
//! Orientation follows the camera convention of the core crate: the camera
//! looks down `-forward()`, with `right()` and `up()` spanning the image
//! plane.

use scened_core::{Camera, ProjectionType, Scene, Space, Transform};
use scened_input::NavigationControl;
use scened_math::{Bounds3, Mat4, Quat, Vec3};

use crate::frame::{FrameTarget, GROUND_SIZE, GROUND_STEP};

/// Distance from the origin along the view axis after [`Navigator::set_default_view`]
pub const DEFAULT_VIEW_DISTANCE: f32 = 10.0;
/// Default distance from the camera to the point it orbits around
pub const DEFAULT_ORBIT_DISTANCE: f32 = 10.0;

/// Interactive camera for inspecting a scene
#[derive(Clone, Debug)]
pub struct Navigator {
    camera: Camera,
    transform: Transform,
    orbit_distance: f32,
    default_distance: f32,
    /// Whether [`Navigator::new_frame`] draws the ground grid
    pub show_ground: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Navigator {
    /// Create a navigator in its default view
    pub fn new(aspect_ratio: f32) -> Self {
        let mut navigator = Self {
            camera: Camera::new(aspect_ratio),
            transform: Transform::identity(),
            orbit_distance: DEFAULT_ORBIT_DISTANCE,
            default_distance: DEFAULT_VIEW_DISTANCE,
            show_ground: true,
        };
        navigator.set_default_view(aspect_ratio);
        navigator
    }

    // --- Accessors ---

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.transform.local_position()
    }

    /// Direction the camera looks along
    pub fn view_direction(&self) -> Vec3 {
        -self.transform.forward()
    }

    #[inline]
    pub fn orbit_distance(&self) -> f32 {
        self.orbit_distance
    }

    /// Set the orbit distance (non-finite or non-positive values are ignored)
    pub fn set_orbit_distance(&mut self, distance: f32) {
        if distance.is_finite() && distance > 0.0 {
            self.orbit_distance = distance;
        }
    }

    #[inline]
    pub fn default_distance(&self) -> f32 {
        self.default_distance
    }

    /// Distance used by the next [`Navigator::set_default_view`]
    pub fn set_default_distance(&mut self, distance: f32) {
        if distance.is_finite() {
            self.default_distance = distance;
        }
    }

    /// Follow a window resize
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.camera.set_aspect_ratio(aspect_ratio);
    }

    // --- Navigation ---

    /// Reset to the start-up view: identity orientation, backed off along
    /// the view axis, default projection
    pub fn set_default_view(&mut self, aspect_ratio: f32) {
        self.transform.reset();
        self.transform
            .set_local_position(Vec3::new(0.0, 0.0, self.default_distance));
        self.camera.reset(aspect_ratio);
    }

    /// Zoom in by `factor` (values below 1 zoom out)
    ///
    /// Perspective cameras narrow their view angle, parallel cameras shrink
    /// their view height. Non-positive or non-finite factors are ignored.
    pub fn zoom(&mut self, factor: f32) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        match self.camera.projection_type() {
            ProjectionType::Perspective => {
                let angle = self.camera.view_angle() / factor;
                self.camera.set_view_angle(angle);
            }
            ProjectionType::Parallel => {
                let height = self.camera.height() / factor;
                self.camera.set_height(height);
            }
        }
    }

    /// Rotate in place, angles in radians
    ///
    /// Yaw turns about the world up axis first; pitch then turns about the
    /// resulting local right axis.
    pub fn rotate_view(&mut self, pitch: f32, yaw: f32) {
        self.transform
            .rotate(Quat::from_rotation_y(yaw), Space::World);
        let right = self.transform.right();
        self.transform
            .rotate(Quat::from_axis_angle(right, pitch), Space::World);
    }

    /// Rotate around the point `orbit_distance` ahead of the camera,
    /// angles in radians
    pub fn orbit(&mut self, pitch: f32, yaw: f32) {
        let target = self.position() - self.transform.forward() * self.orbit_distance;
        self.rotate_view(pitch, yaw);
        let position = target + self.transform.forward() * self.orbit_distance;
        self.transform.set_local_position(position);
    }

    /// Move along the camera's own axes
    pub fn pan(&mut self, delta: Vec3) {
        self.transform.translate(delta, Space::Local);
    }

    /// Move the camera so the box fills the view, keeping the orientation
    ///
    /// Empty bounds are ignored.
    pub fn focus_on(&mut self, bounds: &Bounds3) {
        if bounds.is_empty() {
            log::debug!("Ignoring focus on empty bounds");
            return;
        }
        let center = bounds.center();
        let diagonal = bounds.diagonal_length();
        let direction = self.view_direction();

        let distance = match self.camera.projection_type() {
            ProjectionType::Parallel => {
                let height = bounds.size().y.max(self.camera.height());
                self.camera.set_height(height);
                diagonal.max((center - self.position()).length())
            }
            ProjectionType::Perspective => {
                let half_angle = (self.camera.view_angle() * 0.5).to_radians();
                self.camera.near_plane() + 0.5 * diagonal / half_angle.tan()
            }
        };

        self.transform.set_local_position(center - direction * distance);
    }

    // --- Rendering ---

    /// World-to-camera matrix
    pub fn view_matrix(&self) -> Mat4 {
        self.transform.local_matrix().inverse()
    }

    /// Projection times view
    pub fn view_projection(&self) -> Mat4 {
        self.camera.projection_matrix() * self.view_matrix()
    }

    /// Start a frame: clear to the scene's background, set the view, and
    /// draw the ground grid when enabled
    pub fn new_frame<T: FrameTarget + ?Sized>(&self, scene: &Scene, target: &mut T) {
        target.clear(scene.background_color);
        target.set_view(self.position(), self.view_projection());
        if self.show_ground {
            target.draw_ground(GROUND_SIZE, GROUND_STEP);
        }
    }
}

impl NavigationControl for Navigator {
    fn pan(&mut self, delta: Vec3) {
        Navigator::pan(self, delta);
    }

    fn rotate_view(&mut self, pitch: f32, yaw: f32) {
        Navigator::rotate_view(self, pitch, yaw);
    }

    fn orbit(&mut self, pitch: f32, yaw: f32) {
        Navigator::orbit(self, pitch, yaw);
    }

    fn zoom(&mut self, factor: f32) {
        Navigator::zoom(self, factor);
    }

    fn focus_on(&mut self, bounds: &Bounds3) {
        Navigator::focus_on(self, bounds);
    }

    fn view_angle(&self) -> f32 {
        self.camera.view_angle()
    }

    fn orbit_distance(&self) -> f32 {
        self.orbit_distance
    }
}
