//! Transform builders: scale, translation, rotation, quaternion
//! conversion, look-at and projection matrices.
//!
//! Every builder is a pure method on [`Conventions`]: it reads the
//! configured layout and handedness, computes the matrix content and
//! returns a fresh glam matrix. Calls are independent and idempotent;
//! no builder validates its numeric preconditions (unit axes, unit
//! quaternions, non-degenerate frusta) beyond debug assertions.
//!
//! [`Conventions`]: crate::Conventions

mod affine;
mod projection;
mod quaternion;
mod rotation;
mod view;

pub use projection::{Frustum, Projection, ZClip};
