use std::f32::consts::FRAC_PI_2;

use glam::{Mat3, Mat4, Quat, Vec3, Vec4};
use proptest::prelude::*;

use crate::conventions::{Conventions, Handedness, Layout};

fn left_handed() -> Conventions {
    Conventions::new(Layout::RowMajor, Handedness::LeftHanded)
}

fn right_handed() -> Conventions {
    Conventions::new(Layout::RowMajor, Handedness::RightHanded)
}

fn assert_mat3_eq(actual: &Mat3, expected: &Mat3, tolerance: f32) {
    for (a, e) in actual
        .to_cols_array()
        .iter()
        .zip(expected.to_cols_array().iter())
    {
        assert!(
            (a - e).abs() <= tolerance,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn test_identity_quaternion_converts_to_identity() {
    for layout in [Layout::RowMajor, Layout::ColumnMajor] {
        let conventions = Conventions::new(layout, Handedness::LeftHanded);

        assert_eq!(conventions.quat_to_mat3(Quat::IDENTITY), Mat3::IDENTITY);
        assert_eq!(conventions.quat_to_mat4(Quat::IDENTITY), Mat4::IDENTITY);
    }
}

#[test]
fn test_quarter_turn_about_z_rotates_x_to_y() {
    let conventions = left_handed();
    let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
    let m = conventions.quat_to_mat3(q);

    let rotated = conventions.mul_vec3(&m, Vec3::X);
    assert!((rotated - Vec3::Y).abs().max_element() <= 1e-6);
}

#[test]
fn test_conversion_matches_axis_angle_rotation_left_handed() {
    let conventions = left_handed();

    for (axis, angle) in [
        (Vec3::X, 0.7),
        (Vec3::Y, -1.2),
        (Vec3::Z, 2.5),
        (Vec3::new(1.0, 2.0, 3.0).normalize(), 0.9),
    ] {
        let q = Quat::from_axis_angle(axis, angle);
        assert_mat3_eq(
            &conventions.quat_to_mat3(q),
            &conventions.rotation3_axis(axis, angle),
            1e-6,
        );
    }
}

#[test]
fn test_conversion_is_handedness_independent() {
    // The quaternion carries its own orientation, so the right-handed
    // configuration produces the same matrix; only the axis-angle
    // builders mirror their angle.
    let axis = Vec3::new(0.5, -0.5, 0.2).normalize();
    let q = Quat::from_axis_angle(axis, 0.8);

    assert_eq!(
        left_handed().quat_to_mat3(q),
        right_handed().quat_to_mat3(q)
    );
    assert_mat3_eq(
        &right_handed().quat_to_mat3(q),
        &right_handed().rotation3_axis(axis, -0.8),
        1e-6,
    );
}

#[test]
fn test_layouts_store_transposed_content() {
    let q = Quat::from_axis_angle(Vec3::new(2.0, -1.0, 4.0).normalize(), 1.4);

    let row = Conventions::new(Layout::RowMajor, Handedness::LeftHanded);
    let column = Conventions::new(Layout::ColumnMajor, Handedness::LeftHanded);

    assert_eq!(row.quat_to_mat3(q).transpose(), column.quat_to_mat3(q));
}

// ============================================================================
// 4x4 embedding
// ============================================================================

#[test]
fn test_mat4_embeds_rotation_with_identity_border() {
    let conventions = left_handed();
    let q = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 1.0).normalize(), 0.6);
    let m = conventions.quat_to_mat4(q);

    assert_mat3_eq(&Mat3::from_mat4(m), &conventions.quat_to_mat3(q), 0.0);
    assert_eq!(m.row(3), Vec4::W);
    assert_eq!(m.col(3), Vec4::W);
}

#[test]
fn test_mat4_rotates_points_without_translating() {
    let conventions = left_handed();
    let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
    let m = conventions.quat_to_mat4(q);

    let rotated = conventions.mul_vec4(&m, Vec4::new(1.0, 1.0, 1.0, 1.0));
    assert!((rotated - Vec4::new(-1.0, 1.0, 1.0, 1.0)).abs().max_element() <= 1e-6);

    // The origin stays put: a pure rotation has no translation part
    let origin = conventions.mul_vec4(&m, Vec4::W);
    assert_eq!(origin, Vec4::W);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_unit_quaternion_matrices_are_orthonormal(
        a in -1.0f32..1.0,
        b in -1.0f32..1.0,
        c in -1.0f32..1.0,
        d in -1.0f32..1.0,
    ) {
        prop_assume!(Vec4::new(a, b, c, d).length_squared() > 0.04);
        let q = Quat::from_xyzw(a, b, c, d).normalize();
        let m = left_handed().quat_to_mat3(q);

        let rows = [m.row(0), m.row(1), m.row(2)];
        for row in rows {
            prop_assert!((row.length() - 1.0).abs() <= 1e-6);
        }
        prop_assert!(rows[0].dot(rows[1]).abs() <= 1e-6);
        prop_assert!(rows[0].dot(rows[2]).abs() <= 1e-6);
        prop_assert!(rows[1].dot(rows[2]).abs() <= 1e-6);
    }

    #[test]
    fn prop_matrix_agrees_with_quaternion_rotation(
        a in -1.0f32..1.0,
        b in -1.0f32..1.0,
        c in -1.0f32..1.0,
        d in -1.0f32..1.0,
        x in -10.0f32..10.0,
        y in -10.0f32..10.0,
        z in -10.0f32..10.0,
    ) {
        prop_assume!(Vec4::new(a, b, c, d).length_squared() > 0.04);
        let q = Quat::from_xyzw(a, b, c, d).normalize();
        let v = Vec3::new(x, y, z);

        // Whatever the layout, applying the matrix in convention
        // order reproduces glam's own quaternion rotation.
        for layout in [Layout::RowMajor, Layout::ColumnMajor] {
            let conventions = Conventions::new(layout, Handedness::LeftHanded);
            let m = conventions.quat_to_mat3(q);
            let by_matrix = conventions.mul_vec3(&m, v);
            let by_quat = q * v;
            prop_assert!((by_matrix - by_quat).abs().max_element() <= 1e-4);
        }
    }
}
