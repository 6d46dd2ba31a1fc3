/// Look-at view-matrix construction.
///
/// Builds an orthonormal camera basis from eye, target and up, then
/// returns the inverse of the camera's world transform: the rotation
/// block is the transposed basis (inverse, since orthonormal) and the
/// translation re-expresses `-eye` in basis coordinates. Applying the
/// result maps `eye` to the origin.

use glam::{Mat4, Vec3, Vec4};

use crate::conventions::{Conventions, Handedness};

impl Conventions {
    /// View matrix looking from `eye` toward `target`.
    ///
    /// Left-handed cameras look down +z (forward = target - eye),
    /// right-handed cameras down -z (forward = eye - target).
    ///
    /// Preconditions (not validated in release builds): `target` must
    /// not coincide with `eye`, and `up` must not be parallel to the
    /// view direction.
    pub fn look_at(&self, eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let forward = match self.handedness() {
            Handedness::LeftHanded => target - eye,
            Handedness::RightHanded => eye - target,
        }
        .normalize();
        let right = up.cross(forward).normalize();
        let up = forward.cross(right);

        debug_assert!(
            forward.is_finite() && right.is_finite(),
            "look_at requires a nonzero view direction and a non-parallel up vector"
        );

        self.mat4_from_rows(
            Vec4::new(right.x, up.x, forward.x, 0.0),
            Vec4::new(right.y, up.y, forward.y, 0.0),
            Vec4::new(right.z, up.z, forward.z, 0.0),
            Vec4::new(-eye.dot(right), -eye.dot(up), -eye.dot(forward), 1.0),
        )
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
