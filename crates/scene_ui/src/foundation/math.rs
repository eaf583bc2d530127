//! Math utilities and types
//!
//! Thin aliases over nalgebra plus the small 2D helpers the widget layer needs.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Matrix4, Quaternion, Unit, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }
}

/// Axis-aligned rectangle (x, y is the minimum corner)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum x
    pub x: f32,
    /// Minimum y
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Check if a point lies inside the rectangle (edges inclusive)
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }

    /// Clamp a point into the rectangle, each axis independently
    pub fn clamp_point(&self, px: f32, py: f32) -> (f32, f32) {
        (
            utils::clamp(px, self.x, self.x + self.w),
            utils::clamp(py, self.y, self.y + self.h),
        )
    }
}

/// Picking ray in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin
    pub origin: Vec3,
    /// Ray direction
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray from origin and direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Screen-space pointer ray: origin at (x, y, 0) looking down -Z
    pub fn from_screen(x: f32, y: f32) -> Self {
        Self::new(Vec3::new(x, y, 0.0), Vec3::new(0.0, 0.0, -1.0))
    }
}

/// Math utility functions
pub mod utils {
    /// Clamp a value between min and max
    ///
    /// Unlike `f32::clamp` this never panics when `min > max`; the lower bound wins
    /// first, then the upper bound, which is how drag limits are applied.
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        let mut v = value;
        if v < min {
            v = min;
        }
        if v > max {
            v = max;
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_clamp() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(rect.clamp_point(150.0, 10.0), (100.0, 10.0));
        assert_eq!(rect.clamp_point(-20.0, -20.0), (0.0, 0.0));
        assert!(rect.contains(100.0, 50.0));
        assert!(!rect.contains(100.1, 50.0));
    }

    #[test]
    fn test_transform_matrix_inverse() {
        let mut transform = Transform::identity();
        transform.position = Vec3::new(10.0, 20.0, 0.0);
        transform.scale = Vec3::new(2.0, 2.0, 1.0);

        let matrix = transform.to_matrix();
        let inverse = matrix.try_inverse().expect("invertible");
        let local = inverse.transform_point(&Point3::new(30.0, 40.0, 0.0));

        assert_relative_eq!(local.x, 10.0);
        assert_relative_eq!(local.y, 10.0);
    }

    #[test]
    fn test_clamp_inverted_bounds() {
        // Upper bound is applied last
        assert_eq!(utils::clamp(5.0, 10.0, 0.0), 0.0);
    }
}
