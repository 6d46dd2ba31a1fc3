/*!
# Nebula Transform

Convention-aware transform mathematics for 3D rendering.

This crate builds scale, translation, rotation, look-at and projection
matrices under explicit conventions: matrix layout (row-major,
vector-times-matrix vs column-major, matrix-times-vector multiply
order) and coordinate handedness (left vs right). It also converts
unit quaternions to rotation matrices and reinterprets 32-bit vector
bit patterns between float, unsigned and signed lanes.

## Architecture

- **Conventions**: immutable configuration value fixing layout and
  handedness; every builder is a method on it
- **Transform**: pure matrix factory functions (scale, translation,
  rotation, look-at, orthographic, perspective)
- **Reinterpret**: bit-exact `as_float` / `as_uint` / `as_int`
  conversions

Every operation is a pure, allocation-free function of its inputs.
Vector and matrix arithmetic is supplied by [`glam`], re-exported at
the crate root; this crate only decides matrix content and placement.
*/

// Internal modules
mod conventions;
mod reinterpret;
mod transform;

// Main nebula namespace module
pub mod nebula {
    // Convention configuration
    pub use crate::conventions::{Conventions, Handedness, Layout};

    // Bit-pattern reinterpretation
    pub use crate::reinterpret::{AsFloat, AsInt, AsUint};

    // Projection types
    pub use crate::transform::{Frustum, Projection, ZClip};
}

// Flat re-exports at the crate root
pub use conventions::{Conventions, Handedness, Layout};
pub use reinterpret::{AsFloat, AsInt, AsUint};
pub use transform::{Frustum, Projection, ZClip};

// Re-export math library at crate root
pub use glam;
