//! Shorthands for the common shapes and element types.

use crate::matrix::{Matrix, Quaternion};
use base::{F1616, F824, F88, UF032};
use static_assertions::{assert_eq_align, assert_eq_size, assert_impl_all};

macro_rules! vector_aliases {
    ($($($prefix:ident)? => $t:ty, $name:literal);* $(;)?) => {
        paste::paste! {
            $(
                #[doc = concat!("2-component vector of ", $name, ".")]
                pub type [<$($prefix)? Vec2>] = Matrix<$t, 2, 1>;
                #[doc = concat!("3-component vector of ", $name, ".")]
                pub type [<$($prefix)? Vec3>] = Matrix<$t, 3, 1>;
                #[doc = concat!("4-component vector of ", $name, ".")]
                pub type [<$($prefix)? Vec4>] = Matrix<$t, 4, 1>;
            )*
        }
    };
}

vector_aliases!(
    => f32, "`f32`";
    D => f64, "`f64`";
    I8 => i8, "`i8`";
    I16 => i16, "`i16`";
    I => i32, "`i32`";
    C => u8, "`u8`, typically a color";
    U16 => u16, "`u16`";
    U => u32, "`u32`";
    F88 => F88, "[`F88`]";
    F1616 => F1616, "[`F1616`]";
    F824 => F824, "[`F824`]";
    UF032 => UF032, "[`UF032`], typically a normalized color or direction";
);

macro_rules! square_aliases {
    ($($($prefix:ident)? => $t:ty, $name:literal);* $(;)?) => {
        paste::paste! {
            $(
                #[doc = concat!("2x2 matrix of ", $name, ".")]
                pub type [<$($prefix)? Mat2>] = Matrix<$t, 2, 2>;
                #[doc = concat!("3x3 matrix of ", $name, ".")]
                pub type [<$($prefix)? Mat3>] = Matrix<$t, 3, 3>;
                #[doc = concat!("4x4 matrix of ", $name, ".")]
                pub type [<$($prefix)? Mat4>] = Matrix<$t, 4, 4>;
            )*
        }
    };
}

square_aliases!(
    => f32, "`f32`";
    D => f64, "`f64`";
    I => i32, "`i32`";
);

/// Matrix of any shape.
pub type Mat<T, const X: usize, const Y: usize> = Matrix<T, X, Y>;

/// Matrix of [`F88`] with `X` columns and `Y` rows.
pub type F88Mat<const X: usize, const Y: usize> = Matrix<F88, X, Y>;

/// Matrix of [`F1616`] with `X` columns and `Y` rows.
pub type F1616Mat<const X: usize, const Y: usize> = Matrix<F1616, X, Y>;

/// Quaternion of `f32`.
pub type Quat = Matrix<f32, 4, 1, Quaternion>;

/// Quaternion of `f64`.
pub type DQuat = Matrix<f64, 4, 1, Quaternion>;

/// Quaternion of [`F1616`].
pub type F1616Quat = Matrix<F1616, 4, 1, Quaternion>;

assert_eq_size!(Vec3, [f32; 3]);
assert_eq_size!(Mat4, [f32; 16]);
assert_eq_size!(Quat, Vec4);
assert_eq_size!(F88Mat<3, 2>, [i16; 6]);
assert_eq_size!(UF032Vec4, [u32; 4]);
assert_eq_align!(DMat3, f64);
assert_impl_all!(Mat3: Copy, Send, Sync, Default, PartialEq);
assert_impl_all!(IVec4: Eq, core::hash::Hash);
