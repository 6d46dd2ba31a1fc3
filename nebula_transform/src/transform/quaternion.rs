/// Quaternion to rotation-matrix conversion.
///
/// The input is assumed unit length; the library does not normalize,
/// and a non-unit quaternion yields an ill-defined (but fully formed)
/// result. Conversion depends on the configured layout only: a
/// quaternion encodes its own rotation direction, so handedness plays
/// no part.

use glam::{Mat3, Mat4, Quat, Vec3};

use crate::conventions::Conventions;

impl Conventions {
    /// 3x3 rotation matrix of a unit quaternion.
    pub fn quat_to_mat3(&self, q: Quat) -> Mat3 {
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);

        let x2 = x * x;
        let y2 = y * y;
        let z2 = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        self.mat3_from_rows(
            Vec3::new(1.0 - 2.0 * (y2 + z2), 2.0 * (xy + wz), 2.0 * (xz - wy)),
            Vec3::new(2.0 * (xy - wz), 1.0 - 2.0 * (x2 + z2), 2.0 * (yz + wx)),
            Vec3::new(2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (x2 + y2)),
        )
    }

    /// 4x4 rotation matrix of a unit quaternion.
    ///
    /// The 3x3 block is embedded top-left; the remaining entries of
    /// the first three rows and columns are zero and the last row and
    /// column are (0, 0, 0, 1). A pure rotation: no translation, and
    /// the homogeneous coordinate passes through unchanged.
    pub fn quat_to_mat4(&self, q: Quat) -> Mat4 {
        Mat4::from_mat3(self.quat_to_mat3(q))
    }
}

#[cfg(test)]
#[path = "quaternion_tests.rs"]
mod tests;
