/// Matrix layout and coordinate-handedness conventions.
///
/// The two switches that shape every transform builder (multiply
/// order and rotation/view orientation) are carried by an immutable
/// value instead of a mutable global. Construct one `Conventions` at
/// program start and hand it to everything that builds or applies
/// matrices.
///
/// Matrices built under different `Conventions` values must never be
/// mixed; nothing in the type system catches it.

use glam::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

/// Multiply-order convention for matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Basis vectors are the matrix rows; vectors transform as `v * M`.
    RowMajor,
    /// Basis vectors are the matrix columns; vectors transform as `M * v`.
    ColumnMajor,
}

/// Coordinate-system handedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    /// Positive rotation is counterclockwise when viewed from the
    /// positive axis toward the origin; cameras look down +z.
    LeftHanded,
    /// Mirrored rotation sign; cameras look down -z.
    RightHanded,
}

/// Immutable transform-convention configuration.
///
/// All transform builders live on this type, so the configuration is
/// always explicit at the call site. The value is `Copy` and has no
/// setters; once constructed it cannot change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conventions {
    layout: Layout,
    handedness: Handedness,
}

impl Conventions {
    /// Create a configuration from a layout and a handedness.
    pub const fn new(layout: Layout, handedness: Handedness) -> Self {
        Self { layout, handedness }
    }

    // ===== GETTERS =====

    /// Configured multiply order.
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Configured handedness.
    pub const fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// Sign applied to every `sin` term in rotation builders and to
    /// the depth axis of projection builders: +1 left-handed,
    /// -1 right-handed.
    pub(crate) const fn handedness_sign(&self) -> f32 {
        match self.handedness {
            Handedness::LeftHanded => 1.0,
            Handedness::RightHanded => -1.0,
        }
    }

    // ===== CONVENTION-ORDER MULTIPLY =====

    /// Apply a 2x2 matrix built under these conventions to a vector,
    /// using the configured multiply order (`v * M` or `M * v`).
    pub fn mul_vec2(&self, m: &Mat2, v: Vec2) -> Vec2 {
        match self.layout {
            Layout::RowMajor => m.transpose() * v,
            Layout::ColumnMajor => *m * v,
        }
    }

    /// Apply a 3x3 matrix in the configured multiply order.
    pub fn mul_vec3(&self, m: &Mat3, v: Vec3) -> Vec3 {
        match self.layout {
            Layout::RowMajor => m.transpose() * v,
            Layout::ColumnMajor => *m * v,
        }
    }

    /// Apply a 4x4 matrix in the configured multiply order.
    pub fn mul_vec4(&self, m: &Mat4, v: Vec4) -> Vec4 {
        match self.layout {
            Layout::RowMajor => m.transpose() * v,
            Layout::ColumnMajor => *m * v,
        }
    }

    // ===== INTERNAL ASSEMBLY =====

    // Builders describe matrices by their logical rows (the row-vector
    // reading). Under ColumnMajor the same content is the transpose,
    // which is exactly what glam's from_cols produces from those rows.

    pub(crate) fn mat2_from_rows(&self, r0: Vec2, r1: Vec2) -> Mat2 {
        match self.layout {
            Layout::RowMajor => Mat2::from_cols(r0, r1).transpose(),
            Layout::ColumnMajor => Mat2::from_cols(r0, r1),
        }
    }

    pub(crate) fn mat3_from_rows(&self, r0: Vec3, r1: Vec3, r2: Vec3) -> Mat3 {
        match self.layout {
            Layout::RowMajor => Mat3::from_cols(r0, r1, r2).transpose(),
            Layout::ColumnMajor => Mat3::from_cols(r0, r1, r2),
        }
    }

    pub(crate) fn mat4_from_rows(&self, r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Mat4 {
        match self.layout {
            Layout::RowMajor => Mat4::from_cols(r0, r1, r2, r3).transpose(),
            Layout::ColumnMajor => Mat4::from_cols(r0, r1, r2, r3),
        }
    }
}

impl Default for Conventions {
    /// Row-major, left-handed.
    fn default() -> Self {
        Self::new(Layout::RowMajor, Handedness::LeftHanded)
    }
}

#[cfg(test)]
#[path = "conventions_tests.rs"]
mod tests;
