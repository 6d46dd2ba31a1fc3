/// Projection types and builders: view-volume bounds, depth-clip
/// conventions, orthographic and perspective matrices.
///
/// A `Frustum` carries the six scalar bounds of the view volume; a
/// `Projection` pairs it with the depth range the matrix should clip
/// to. The handedness decides the sign of the depth axis (left-handed
/// views look down +z, right-handed down -z); the layout decides
/// whether the offset terms land in the last row or last column.

use glam::{Mat4, Vec4};

use crate::conventions::Conventions;

/// Normalized device depth range targeted by a projection matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZClip {
    /// Depth maps to [0, 1] (Direct3D, Vulkan, Metal, WebGPU).
    Zero,
    /// Depth maps to [-1, 1] (OpenGL).
    MinusOne,
}

/// Six scalar bounds of a view volume before projection.
///
/// `near` and `far` are distances along the viewing axis in view
/// space. Degenerate bound pairs (`left == right` and so on) are a
/// precondition violation and are not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Frustum {
    /// Frustum from explicit bounds.
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }

    /// Symmetric frustum from a vertical field of view (radians) and
    /// a width/height aspect ratio.
    pub fn from_field_of_view_y(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let half_height = near * (fov_y * 0.5).tan();
        let half_width = half_height * aspect;
        Self::new(-half_width, half_width, -half_height, half_height, near, far)
    }

    /// Symmetric frustum from a horizontal field of view (radians)
    /// and a width/height aspect ratio.
    pub fn from_field_of_view_x(fov_x: f32, aspect: f32, near: f32, far: f32) -> Self {
        let half_width = near * (fov_x * 0.5).tan();
        let half_height = half_width / aspect;
        Self::new(-half_width, half_width, -half_height, half_height, near, far)
    }
}

/// A frustum paired with its depth-clip convention.
///
/// The clip convention is chosen per projection value, not globally:
/// the same frustum can feed a [0, 1] pipeline and a [-1, 1] pipeline
/// in one program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub frustum: Frustum,
    pub zclip: ZClip,
}

impl Projection {
    /// Pair a frustum with a depth-clip convention.
    pub const fn new(frustum: Frustum, zclip: ZClip) -> Self {
        Self { frustum, zclip }
    }
}

impl Conventions {
    /// Orthographic projection of the frustum.
    ///
    /// Maps x to [-1, 1] across [left, right], y to [-1, 1] across
    /// [bottom, top], and z to the clip range across [near, far].
    pub fn orthographic(&self, projection: Projection) -> Mat4 {
        let Frustum {
            left,
            right,
            bottom,
            top,
            near,
            far,
        } = projection.frustum;

        let rcp_width = 1.0 / (right - left);
        let rcp_height = 1.0 / (top - bottom);
        let rcp_depth = 1.0 / (far - near);
        let z_sign = self.handedness_sign();

        // Depth scale and offset for the configured clip range. The
        // offset is handedness-independent; the scale follows the
        // viewing axis.
        let (sz, oz) = match projection.zclip {
            ZClip::Zero => (rcp_depth, -near * rcp_depth),
            ZClip::MinusOne => (2.0 * rcp_depth, -(far + near) * rcp_depth),
        };

        self.mat4_from_rows(
            Vec4::new(2.0 * rcp_width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * rcp_height, 0.0, 0.0),
            Vec4::new(0.0, 0.0, z_sign * sz, 0.0),
            Vec4::new(
                -(right + left) * rcp_width,
                -(top + bottom) * rcp_height,
                oz,
                1.0,
            ),
        )
    }

    /// Perspective projection of the frustum.
    ///
    /// x and y are scaled by 2*near/(right-left) and
    /// 2*near/(top-bottom); w receives the view depth, so after the
    /// perspective divide z = near lands on the near clip value and
    /// z = far on the far clip value of the configured range.
    pub fn perspective(&self, projection: Projection) -> Mat4 {
        let Frustum {
            left,
            right,
            bottom,
            top,
            near,
            far,
        } = projection.frustum;

        let rcp_width = 1.0 / (right - left);
        let rcp_height = 1.0 / (top - bottom);
        let rcp_depth = 1.0 / (far - near);
        let z_sign = self.handedness_sign();

        let (sz, oz) = match projection.zclip {
            ZClip::Zero => (far * rcp_depth, -near * far * rcp_depth),
            ZClip::MinusOne => ((far + near) * rcp_depth, -2.0 * far * near * rcp_depth),
        };

        self.mat4_from_rows(
            Vec4::new(2.0 * near * rcp_width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * near * rcp_height, 0.0, 0.0),
            Vec4::new(
                -z_sign * (right + left) * rcp_width,
                -z_sign * (top + bottom) * rcp_height,
                z_sign * sz,
                z_sign,
            ),
            Vec4::new(0.0, 0.0, oz, 0.0),
        )
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
