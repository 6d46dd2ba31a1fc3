//! Bit-pattern reinterpretation between float, unsigned and signed
//! 32-bit lanes.
//!
//! These are NOT numeric casts: the output occupies the identical bit
//! pattern as the input. `0x3F80_0000u32.as_float()` is `1.0`, not
//! `1065353216.0`. Every conversion is total: NaN and Inf encodings
//! and all integer values pass through unchanged, and no error
//! condition exists.
//!
//! Conversions go through `bytemuck::cast`, a checked same-size value
//! cast, never through pointer aliasing.

use glam::{IVec2, IVec3, IVec4, UVec2, UVec3, UVec4, Vec2, Vec3, Vec4};

/// Reinterpret the bits of a value as floats of the same lane count.
pub trait AsFloat {
    /// Float scalar or vector of the same width.
    type Output;

    /// Read the bit pattern as floats. Branch-free, side-effect-free.
    fn as_float(self) -> Self::Output;
}

/// Reinterpret the bits of a value as unsigned integers of the same
/// lane count.
pub trait AsUint {
    /// Unsigned scalar or vector of the same width.
    type Output;

    /// Read the bit pattern as unsigned integers.
    fn as_uint(self) -> Self::Output;
}

/// Reinterpret the bits of a value as signed integers of the same
/// lane count.
pub trait AsInt {
    /// Signed scalar or vector of the same width.
    type Output;

    /// Read the bit pattern as signed integers.
    fn as_int(self) -> Self::Output;
}

macro_rules! impl_reinterpret {
    ($trait_:ident :: $method:ident, $($src:ty => $dst:ty),+ $(,)?) => {
        $(
            impl $trait_ for $src {
                type Output = $dst;

                #[inline]
                fn $method(self) -> $dst {
                    bytemuck::cast(self)
                }
            }
        )+
    };
}

impl_reinterpret!(AsFloat::as_float,
    u32 => f32, UVec2 => Vec2, UVec3 => Vec3, UVec4 => Vec4,
    i32 => f32, IVec2 => Vec2, IVec3 => Vec3, IVec4 => Vec4,
);

impl_reinterpret!(AsUint::as_uint,
    f32 => u32, Vec2 => UVec2, Vec3 => UVec3, Vec4 => UVec4,
    i32 => u32, IVec2 => UVec2, IVec3 => UVec3, IVec4 => UVec4,
);

impl_reinterpret!(AsInt::as_int,
    f32 => i32, Vec2 => IVec2, Vec3 => IVec3, Vec4 => IVec4,
    u32 => i32, UVec2 => IVec2, UVec3 => IVec3, UVec4 => IVec4,
);

#[cfg(test)]
#[path = "reinterpret_tests.rs"]
mod tests;
