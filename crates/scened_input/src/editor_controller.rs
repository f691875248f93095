//! Editor camera controller
//!
//! Controls:
//! - Alt+W/S: Forward/backward
//! - Alt+A/D: Left/right
//! - Alt+Q/E: Up/down
//! - Alt+F: Focus on the selection
//! - Scroll: Zoom
//! - Right-click + drag: Rotate in place (orbit while Alt is held)
//! - Middle-click + drag: Pan

use bitflags::bitflags;
use scened_math::{Bounds3, Vec3};
use winit::event::{ElementState, MouseButton};
use winit::keyboard::{KeyCode, ModifiersState};

/// Fraction of the orbit distance (or view angle) moved per frame or pixel
pub const DEFAULT_CAMERA_RES: f32 = 0.01;
/// Zoom factor per scroll step
pub const DEFAULT_ZOOM_SCALE: f32 = 1.01;

bitflags! {
    /// Held movement keys
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct MoveFlags: u8 {
        const FORWARD = 1 << 0;
        const BACK = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const UP = 1 << 4;
        const DOWN = 1 << 5;
    }
}

bitflags! {
    /// Held mouse buttons that drag the view
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DragFlags: u8 {
        const ROTATE = 1 << 0;
        const PAN = 1 << 1;
    }
}

/// Editor controller for handling input
pub struct EditorController {
    moves: MoveFlags,
    drags: DragFlags,
    alt: bool,
    focus_requested: bool,

    // Mouse travel since the last update, in pixels
    pending_dx: f32,
    pending_dy: f32,
    pending_zoom: f32,

    // Configuration
    pub camera_res: f32,
    pub zoom_scale: f32,
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorController {
    pub fn new() -> Self {
        Self {
            moves: MoveFlags::empty(),
            drags: DragFlags::empty(),
            alt: false,
            focus_requested: false,

            pending_dx: 0.0,
            pending_dy: 0.0,
            pending_zoom: 1.0,

            camera_res: DEFAULT_CAMERA_RES,
            zoom_scale: DEFAULT_ZOOM_SCALE,
        }
    }

    /// Track the modifier keys
    pub fn process_modifiers(&mut self, modifiers: ModifiersState) {
        self.alt = modifiers.alt_key();
    }

    /// Process keyboard input
    ///
    /// Movement keys only count while Alt is held; releasing either stops
    /// the movement. Returns whether the key is an editor key.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let active = state == ElementState::Pressed && self.alt;

        let flag = match key {
            KeyCode::KeyW => MoveFlags::FORWARD,
            KeyCode::KeyS => MoveFlags::BACK,
            KeyCode::KeyA => MoveFlags::LEFT,
            KeyCode::KeyD => MoveFlags::RIGHT,
            KeyCode::KeyQ => MoveFlags::UP,
            KeyCode::KeyE => MoveFlags::DOWN,
            KeyCode::KeyF => {
                if active {
                    self.focus_requested = true;
                }
                return true;
            }
            _ => return false,
        };
        self.moves.set(flag, active);
        true
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match button {
            MouseButton::Right => self.drags.set(DragFlags::ROTATE, pressed),
            MouseButton::Middle => self.drags.set(DragFlags::PAN, pressed),
            _ => {}
        }
        if self.drags.is_empty() {
            self.pending_dx = 0.0;
            self.pending_dy = 0.0;
        }
    }

    /// Process mouse movement in pixels (x to the right, y downward)
    ///
    /// Ignored unless a drag button is held.
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if self.drags.is_empty() {
            return;
        }
        self.pending_dx += delta_x as f32;
        self.pending_dy += delta_y as f32;
    }

    /// Process a vertical scroll offset (positive away from the user)
    pub fn process_scroll(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.pending_zoom *= self.zoom_scale;
        } else if delta_y < 0.0 {
            self.pending_zoom /= self.zoom_scale;
        }
    }

    /// Apply the accumulated input to the camera
    ///
    /// `selection_bounds` is what a pending Alt+F focuses on; with no
    /// selection the request is dropped.
    pub fn update<C: NavigationControl>(&mut self, camera: &mut C, selection_bounds: Option<&Bounds3>) {
        if !self.moves.is_empty() {
            camera.pan(self.move_direction() * camera.orbit_distance() * self.camera_res);
        }

        if self.focus_requested {
            if let Some(bounds) = selection_bounds {
                camera.focus_on(bounds);
            }
            self.focus_requested = false;
        }

        if self.pending_zoom != 1.0 {
            camera.zoom(self.pending_zoom);
            self.pending_zoom = 1.0;
        }

        let (dx, dy) = (self.pending_dx, self.pending_dy);
        if dx != 0.0 || dy != 0.0 {
            if self.drags.contains(DragFlags::ROTATE) {
                // Degrees per pixel, scaled with the field of view so zoomed-in
                // views turn slower
                let da = camera.view_angle() * self.camera_res;
                let pitch = (dy * da).to_radians();
                let yaw = (dx * da).to_radians();
                if self.alt {
                    camera.orbit(pitch, yaw);
                } else {
                    camera.rotate_view(pitch, yaw);
                }
            }
            if self.drags.contains(DragFlags::PAN) {
                let step = camera.orbit_distance() * self.camera_res;
                camera.pan(Vec3::new(-step * sign(dx), step * sign(dy), 0.0));
            }
        }
        self.pending_dx = 0.0;
        self.pending_dy = 0.0;
    }

    /// Unit movement direction in camera space for the held keys
    pub fn move_direction(&self) -> Vec3 {
        let axis = |pos: MoveFlags, neg: MoveFlags| {
            (self.moves.contains(pos) as i32 - self.moves.contains(neg) as i32) as f32
        };
        Vec3::new(
            axis(MoveFlags::RIGHT, MoveFlags::LEFT),
            axis(MoveFlags::UP, MoveFlags::DOWN),
            axis(MoveFlags::BACK, MoveFlags::FORWARD),
        )
    }

    #[inline]
    pub fn move_flags(&self) -> MoveFlags {
        self.moves
    }

    #[inline]
    pub fn drag_flags(&self) -> DragFlags {
        self.drags
    }

    /// Check if any movement keys are held
    pub fn is_moving(&self) -> bool {
        !self.moves.is_empty()
    }

    /// Check if a mouse drag is in progress
    pub fn is_dragging(&self) -> bool {
        !self.drags.is_empty()
    }

    /// Builder: set the camera resolution factor
    pub fn with_camera_res(mut self, camera_res: f32) -> Self {
        self.camera_res = camera_res;
        self
    }

    /// Builder: set the zoom factor per scroll step
    pub fn with_zoom_scale(mut self, zoom_scale: f32) -> Self {
        self.zoom_scale = zoom_scale;
        self
    }
}

fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Trait for editor camera control
/// Allows the controller to drive different camera implementations
pub trait NavigationControl {
    /// Move along the camera's own axes
    fn pan(&mut self, delta: Vec3);
    /// Rotate in place, radians
    fn rotate_view(&mut self, pitch: f32, yaw: f32);
    /// Rotate around the look target, radians
    fn orbit(&mut self, pitch: f32, yaw: f32);
    fn zoom(&mut self, factor: f32);
    fn focus_on(&mut self, bounds: &Bounds3);
    /// Vertical field of view in degrees
    fn view_angle(&self) -> f32;
    fn orbit_distance(&self) -> f32;
}
