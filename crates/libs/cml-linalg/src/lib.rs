//! Fixed-size matrices, vectors and quaternions.
//!
//! Everything is built on one container, [`Matrix<T, X, Y, K>`], a row-major
//! grid of `X` columns by `Y` rows. Vectors are single rows, quaternions are
//! 4-vectors of the [`Quaternion`] kind. Shapes are part of the type, so
//! mismatched products, oversized constructors or out-of-range swizzles are
//! rejected at compile time.
//!
//! ```
//! use cml_linalg::{mat, IVec2, IVec4, Mat2, Vec2};
//!
//! let mut v = IVec4::from_parts((1, IVec2::new(2, 3), 4));
//! v.swizzle2_mut::<'x', 'w'>().store(IVec2::new(10, 40));
//! assert_eq!(v, IVec4::new(10, 2, 3, 40));
//!
//! let m: Mat2 = mat![0.0f32, -1.0f32, 1.0f32, 0.0f32];
//! assert_eq!(Vec2::new(1.0, 0.0) * m, Vec2::new(0.0, -1.0));
//! ```
#![warn(missing_docs)]

/// Invokes `$mac!([generics] Type)` for every scalar type the container
/// broadcasts against.
macro_rules! for_each_scalar {
    ($mac:ident) => {
        $mac!([] f32);
        $mac!([] f64);
        $mac!([] i8);
        $mac!([] i16);
        $mac!([] i32);
        $mac!([] i64);
        $mac!([] isize);
        $mac!([] u8);
        $mac!([] u16);
        $mac!([] u32);
        $mac!([] u64);
        $mac!([] usize);
        $mac!([S: base::FixedStorage, const F: u32] base::Fixed<S, F>);
    };
}

pub(crate) use for_each_scalar;

mod aliases;
mod cast;
mod component;
mod matrix;
mod ops;
mod parts;
mod quat;
mod vector;

pub use aliases::*;
pub use cast::{BitPattern, PackTarget};
pub use component::{component_index, ComponentsMut};
pub use matrix::{Matrix, MatrixKind, Normal, Quaternion};
pub use parts::Parts;
pub use vector::{cross, distance, dot, length, normalize, transpose};
