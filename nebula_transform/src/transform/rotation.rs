/// Rotation builders: 2D rotation, cardinal-axis rotations and
/// rotation about an arbitrary axis (Rodrigues' formula).
///
/// Under the left-handed convention a positive angle rotates
/// counterclockwise when viewed from the positive axis toward the
/// origin (`rotation_z(pi/2)` maps x to y); the right-handed
/// convention mirrors the angle sign. The 4x4 variants embed the 3x3
/// rotation and leave the homogeneous coordinate untouched.

use glam::{Mat2, Mat3, Mat4, Vec2, Vec3};

use crate::conventions::Conventions;

impl Conventions {
    /// 2x2 rotation by `angle` radians.
    pub fn rotation2(&self, angle: f32) -> Mat2 {
        let (s, c) = angle.sin_cos();
        let s = s * self.handedness_sign();
        self.mat2_from_rows(Vec2::new(c, s), Vec2::new(-s, c))
    }

    /// 3x3 rotation about the x axis.
    pub fn rotation3_x(&self, angle: f32) -> Mat3 {
        let (s, c) = angle.sin_cos();
        let s = s * self.handedness_sign();
        self.mat3_from_rows(Vec3::X, Vec3::new(0.0, c, s), Vec3::new(0.0, -s, c))
    }

    /// 3x3 rotation about the y axis.
    pub fn rotation3_y(&self, angle: f32) -> Mat3 {
        let (s, c) = angle.sin_cos();
        let s = s * self.handedness_sign();
        self.mat3_from_rows(Vec3::new(c, 0.0, -s), Vec3::Y, Vec3::new(s, 0.0, c))
    }

    /// 3x3 rotation about the z axis.
    pub fn rotation3_z(&self, angle: f32) -> Mat3 {
        let (s, c) = angle.sin_cos();
        let s = s * self.handedness_sign();
        self.mat3_from_rows(Vec3::new(c, s, 0.0), Vec3::new(-s, c, 0.0), Vec3::Z)
    }

    /// 3x3 rotation about an arbitrary axis.
    ///
    /// `axis` must be unit length; a zero or non-unit axis yields an
    /// ill-defined (but fully formed) result.
    pub fn rotation3_axis(&self, axis: Vec3, angle: f32) -> Mat3 {
        debug_assert!(
            (axis.length_squared() - 1.0).abs() < 1e-4,
            "rotation axis must be unit length"
        );

        let (s, c) = angle.sin_cos();
        let s = s * self.handedness_sign();
        let t = 1.0 - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        self.mat3_from_rows(
            Vec3::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y),
            Vec3::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x),
            Vec3::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c),
        )
    }

    // ===== 4x4 VARIANTS =====

    /// 4x4 rotation about the x axis.
    pub fn rotation4_x(&self, angle: f32) -> Mat4 {
        Mat4::from_mat3(self.rotation3_x(angle))
    }

    /// 4x4 rotation about the y axis.
    pub fn rotation4_y(&self, angle: f32) -> Mat4 {
        Mat4::from_mat3(self.rotation3_y(angle))
    }

    /// 4x4 rotation about the z axis.
    pub fn rotation4_z(&self, angle: f32) -> Mat4 {
        Mat4::from_mat3(self.rotation3_z(angle))
    }

    /// 4x4 rotation about an arbitrary unit axis.
    pub fn rotation4_axis(&self, axis: Vec3, angle: f32) -> Mat4 {
        Mat4::from_mat3(self.rotation3_axis(axis, angle))
    }
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod tests;
