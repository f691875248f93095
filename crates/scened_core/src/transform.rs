//! Local transform (position, rotation, scale)
//!
//! A Transform holds the pose of a scene object relative to its parent.
//! World-space queries need the parent chain and therefore live on
//! [`Scene`](crate::Scene); a transform with no parent (such as the
//! navigator's) has local == world.

use scened_math::{EulerRot, Mat4, Quat, Vec3};

/// Smallest magnitude allowed for a scale component
const MIN_SCALE: f32 = 1e-4;

/// Coordinate space for incremental transform operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Space {
    /// Relative to the transform's own axes
    Local,
    /// Relative to the parent's axes (world axes for root transforms)
    World,
}

/// A 3D transform with position, rotation, and non-uniform scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    local_position: Vec3,
    local_rotation: Quat,
    local_scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            local_position: Vec3::ZERO,
            local_rotation: Quat::IDENTITY,
            local_scale: Vec3::ONE,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            local_position: position,
            ..Self::identity()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            local_position: position,
            local_rotation: rotation.normalize(),
            local_scale: Vec3::ONE,
        }
    }

    /// Reset to identity
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    #[inline]
    pub fn local_position(&self) -> Vec3 {
        self.local_position
    }

    #[inline]
    pub fn local_rotation(&self) -> Quat {
        self.local_rotation
    }

    #[inline]
    pub fn local_scale(&self) -> Vec3 {
        self.local_scale
    }

    pub fn set_local_position(&mut self, position: Vec3) {
        self.local_position = position;
    }

    pub fn set_local_rotation(&mut self, rotation: Quat) {
        self.local_rotation = rotation.normalize();
    }

    /// Set the local scale
    ///
    /// Components are kept away from zero so the local matrix stays invertible.
    pub fn set_local_scale(&mut self, scale: Vec3) {
        self.local_scale = Vec3::new(
            clamp_scale(scale.x),
            clamp_scale(scale.y),
            clamp_scale(scale.z),
        );
    }

    /// Local rotation as Euler angles in degrees (x = pitch, y = yaw, z = roll)
    pub fn local_euler_angles(&self) -> Vec3 {
        let (yaw, pitch, roll) = self.local_rotation.to_euler(EulerRot::YXZ);
        Vec3::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees())
    }

    /// Set the local rotation from Euler angles in degrees
    ///
    /// Applied as yaw about Y, then pitch about X, then roll about Z.
    pub fn set_local_euler_angles(&mut self, angles: Vec3) {
        self.local_rotation = Quat::from_euler(
            EulerRot::YXZ,
            angles.y.to_radians(),
            angles.x.to_radians(),
            angles.z.to_radians(),
        );
    }

    /// Local-to-parent matrix: scale, then rotate, then translate
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.local_scale,
            self.local_rotation,
            self.local_position,
        )
    }

    /// Move by `delta`, expressed in the given space
    pub fn translate(&mut self, delta: Vec3, space: Space) {
        self.local_position += match space {
            Space::Local => self.local_rotation * delta,
            Space::World => delta,
        };
    }

    /// Compose a rotation, applied about the given space's axes
    pub fn rotate(&mut self, rotation: Quat, space: Space) {
        self.local_rotation = match space {
            Space::Local => self.local_rotation * rotation,
            Space::World => rotation * self.local_rotation,
        }
        .normalize();
    }

    /// The local +Z axis; cameras look down its negative
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.local_rotation * Vec3::Z
    }

    /// The local +X axis
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.local_rotation * Vec3::X
    }

    /// The local +Y axis
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.local_rotation * Vec3::Y
    }
}

fn clamp_scale(s: f32) -> f32 {
    if s.abs() < MIN_SCALE {
        MIN_SCALE.copysign(s)
    } else {
        s
    }
}
