//! Nebula Transform demo.
//!
//! Builds a row-major, left-handed camera, spins a unit cube, walks
//! its corners through model, view and projection, and prints the
//! resulting normalized device coordinates through the logging
//! facade. Run with `RUST_LOG=info cargo run -p nebula_transform_demo`.

use std::f32::consts::{FRAC_PI_3, FRAC_PI_4};

use glam::{Quat, Vec3, Vec4};
use log::info;
use nebula_transform::{AsUint, Conventions, Frustum, Handedness, Layout, Projection, ZClip};

fn main() {
    env_logger::init();

    let conventions = Conventions::new(Layout::RowMajor, Handedness::LeftHanded);
    info!("conventions: {:?}", conventions);

    // Model: an eighth turn about the cube diagonal, then two units
    // forward along the view axis
    let spin = conventions.quat_to_mat4(Quat::from_axis_angle(Vec3::ONE.normalize(), FRAC_PI_4));
    let push = conventions.translation3(Vec3::new(0.0, 0.0, 2.0));

    // View: camera slightly above and behind the origin, looking at
    // the cube
    let view = conventions.look_at(Vec3::new(0.0, 1.5, -4.0), Vec3::new(0.0, 0.0, 2.0), Vec3::Y);

    // Projection: 60-degree vertical field of view, [0, 1] depth
    let projection = conventions.perspective(Projection::new(
        Frustum::from_field_of_view_y(FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0),
        ZClip::Zero,
    ));

    let corners = [
        Vec4::new(-0.5, -0.5, -0.5, 1.0),
        Vec4::new(0.5, -0.5, -0.5, 1.0),
        Vec4::new(-0.5, 0.5, -0.5, 1.0),
        Vec4::new(0.5, 0.5, -0.5, 1.0),
        Vec4::new(-0.5, -0.5, 0.5, 1.0),
        Vec4::new(0.5, -0.5, 0.5, 1.0),
        Vec4::new(-0.5, 0.5, 0.5, 1.0),
        Vec4::new(0.5, 0.5, 0.5, 1.0),
    ];

    for corner in corners {
        let world = conventions.mul_vec4(&push, conventions.mul_vec4(&spin, corner));
        let clip = conventions.mul_vec4(&projection, conventions.mul_vec4(&view, world));
        let ndc = clip.truncate() / clip.w;
        info!("corner {} -> ndc {}", corner.truncate(), ndc);
    }

    // Bit-level view of a float vector, courtesy of the
    // reinterpretation layer
    let bits = Vec4::new(0.5, 1.0, -1.0, f32::INFINITY).as_uint();
    info!(
        "lane encodings: {:#010X} {:#010X} {:#010X} {:#010X}",
        bits.x, bits.y, bits.z, bits.w
    );
}
