/// Scale and translation builders.
///
/// Scaling matrices are diagonal and therefore identical under every
/// layout and handedness. Translation lives in the row or column
/// dedicated to the homogeneous coordinate, decided by the layout.

use glam::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

use crate::conventions::Conventions;

impl Conventions {
    /// 2x2 scaling matrix.
    pub fn scale2(&self, scale: Vec2) -> Mat2 {
        Mat2::from_diagonal(scale)
    }

    /// 3x3 scaling matrix.
    ///
    /// For affine 2D scaling keep the homogeneous component at one:
    /// `scale3(vec3(sx, sy, 1.0))`.
    pub fn scale3(&self, scale: Vec3) -> Mat3 {
        Mat3::from_diagonal(scale)
    }

    /// 4x4 scaling matrix; the homogeneous diagonal entry stays 1.
    pub fn scale4(&self, scale: Vec3) -> Mat4 {
        Mat4::from_diagonal(scale.extend(1.0))
    }

    /// 3x3 affine 2D translation.
    pub fn translation2(&self, offset: Vec2) -> Mat3 {
        self.mat3_from_rows(Vec3::X, Vec3::Y, offset.extend(1.0))
    }

    /// 4x4 affine 3D translation.
    pub fn translation3(&self, offset: Vec3) -> Mat4 {
        self.mat4_from_rows(Vec4::X, Vec4::Y, Vec4::Z, offset.extend(1.0))
    }
}

#[cfg(test)]
#[path = "affine_tests.rs"]
mod tests;
