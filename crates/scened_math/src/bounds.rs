//! Axis-aligned bounding box

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// An axis-aligned box in 3D space
///
/// A box is empty when `min > max` on any axis. [`Bounds3::EMPTY`] is the
/// inverted infinite box, which is the identity for [`Bounds3::union`].
/// Growing operations never shrink an existing box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds3 {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Default for Bounds3 {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds3 {
    /// The empty box
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    /// Create the smallest box containing both points
    pub fn new(p1: Vec3, p2: Vec3) -> Self {
        Self {
            min: p1.min(p2),
            max: p1.max(p2),
        }
    }

    /// Create a box from a center and half extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half_extents = half_extents.abs();
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Create a degenerate box holding a single point
    pub fn from_point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Whether the box contains no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Center point (undefined for empty boxes)
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis, zero for empty boxes
    #[inline]
    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Length of the min-to-max diagonal, zero for empty boxes
    #[inline]
    pub fn diagonal_length(&self) -> f32 {
        self.size().length()
    }

    /// The eight corners of the box
    pub fn corners(&self) -> [Vec3; 8] {
        [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ]
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &Bounds3) -> Bounds3 {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        Bounds3 {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grow this box in place to contain `other`
    pub fn inflate_bounds(&mut self, other: &Bounds3) {
        *self = self.union(other);
    }

    /// Grow this box in place to contain `p`
    pub fn inflate_point(&mut self, p: Vec3) {
        self.inflate_bounds(&Bounds3::from_point(p));
    }

    /// Push every face outward by `amount`
    ///
    /// Negative amounts are ignored, as is inflating an empty box.
    pub fn inflate(&mut self, amount: f32) {
        if amount <= 0.0 || self.is_empty() {
            return;
        }
        self.min -= Vec3::splat(amount);
        self.max += Vec3::splat(amount);
    }

    /// Axis-aligned box enclosing this box after an affine transform
    ///
    /// All eight corners are transformed, so rotated boxes grow to stay
    /// enclosed. Empty boxes stay empty.
    pub fn transformed(&self, matrix: &Mat4) -> Bounds3 {
        if self.is_empty() {
            return Bounds3::EMPTY;
        }
        self.corners()
            .iter()
            .fold(Bounds3::EMPTY, |mut acc, corner| {
                acc.inflate_point(matrix.transform_point3(*corner));
                acc
            })
    }

    /// Whether `point` lies inside or on the box
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;
    use std::f32::consts::FRAC_PI_4;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < EPSILON
    }

    #[test]
    fn test_new_orders_corners() {
        let b = Bounds3::new(Vec3::new(1.0, -1.0, 2.0), Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(b.min, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_empty() {
        let b = Bounds3::EMPTY;
        assert!(b.is_empty());
        assert_eq!(b.size(), Vec3::ZERO);
        assert_eq!(b.diagonal_length(), 0.0);
        assert!(!b.contains_point(Vec3::ZERO));
        assert_eq!(Bounds3::default(), Bounds3::EMPTY);
    }

    #[test]
    fn test_union_of_disjoint_boxes() {
        let a = Bounds3::new(Vec3::ZERO, Vec3::ONE);
        let b = Bounds3::new(Vec3::splat(2.0), Vec3::splat(3.0));
        let u = a.union(&b);
        assert_eq!(u.min, Vec3::ZERO);
        assert_eq!(u.max, Vec3::splat(3.0));
    }

    #[test]
    fn test_union_with_empty_is_identity() {
        let a = Bounds3::new(Vec3::ZERO, Vec3::ONE);
        assert_eq!(a.union(&Bounds3::EMPTY), a);
        assert_eq!(Bounds3::EMPTY.union(&a), a);
    }

    #[test]
    fn test_inflate_never_shrinks() {
        let mut b = Bounds3::new(Vec3::ZERO, Vec3::ONE);
        b.inflate(-5.0);
        assert_eq!(b, Bounds3::new(Vec3::ZERO, Vec3::ONE));

        b.inflate(0.5);
        assert_eq!(b.min, Vec3::splat(-0.5));
        assert_eq!(b.max, Vec3::splat(1.5));

        b.inflate_point(Vec3::splat(0.25));
        assert_eq!(b.max, Vec3::splat(1.5));
    }

    #[test]
    fn test_center_size_diagonal() {
        let b = Bounds3::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(b.center(), Vec3::ZERO);
        assert_eq!(b.size(), Vec3::splat(2.0));
        assert!((b.diagonal_length() - 12.0_f32.sqrt()).abs() < EPSILON);
    }

    #[test]
    fn test_transformed_translation() {
        let b = Bounds3::new(Vec3::ZERO, Vec3::ONE);
        let t = b.transformed(&Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0)));
        assert!(vec_approx_eq(t.min, Vec3::new(5.0, 0.0, 0.0)));
        assert!(vec_approx_eq(t.max, Vec3::new(6.0, 1.0, 1.0)));
    }

    #[test]
    fn test_transformed_rotation_encloses_corners() {
        let b = Bounds3::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let t = b.transformed(&Mat4::from_quat(Quat::from_rotation_y(FRAC_PI_4)));
        let r = 2.0_f32.sqrt();
        assert!(vec_approx_eq(t.min, Vec3::new(-r, -1.0, -r)));
        assert!(vec_approx_eq(t.max, Vec3::new(r, 1.0, r)));
    }

    #[test]
    fn test_transformed_empty_stays_empty() {
        let t = Bounds3::EMPTY.transformed(&Mat4::from_scale(Vec3::splat(2.0)));
        assert!(t.is_empty());
    }

    #[test]
    fn test_contains_point() {
        let b = Bounds3::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
        assert!(b.contains_point(Vec3::new(1.0, 0.0, -1.0)));
        assert!(!b.contains_point(Vec3::new(1.1, 0.0, 0.0)));
    }
}
