//! # cml
//!
//! Compile-time sized vectors, matrices and quaternions over floating-point
//! or fixed-point scalars, with elementary functions computed from series
//! instead of the platform math library.
//!
//! The scalar kernel lives in [`base`], the containers in [`linalg`]; both
//! are re-exported here, and [`prelude`] gathers what most code needs.
//!
//! ```
//! use cml::prelude::*;
//!
//! let axis = Vector::<3>::new(0.0, 0.0, 1.0);
//! let q = Rotation::from_axis_angle(axis, degrees!(90.0));
//! let v = q * Vector::<3>::new(1.0, 0.0, 0.0);
//! assert!(is_close(v.y(), 1.0, 1.0e-5));
//! ```
#![warn(missing_docs)]

pub use base;
pub use linalg;

pub use base::*;
pub use linalg::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "use_f64")] {
        /// Scalar type of [`Vector`], [`SquareMatrix`] and [`Rotation`].
        pub type Float = f64;
    } else {
        /// Scalar type of [`Vector`], [`SquareMatrix`] and [`Rotation`].
        pub type Float = f32;
    }
}

/// Vector of [`Float`].
pub type Vector<const N: usize> = Matrix<Float, N, 1>;

/// Square matrix of [`Float`].
pub type SquareMatrix<const N: usize> = Matrix<Float, N, N>;

/// Quaternion of [`Float`].
pub type Rotation = Matrix<Float, 4, 1, Quaternion>;

/// The types, functions and macros used in most programs.
pub mod prelude {
    pub use crate::{Float, Rotation, SquareMatrix, Vector};
    pub use base::{
        degrees, func::*, half_pi, is_close, is_equal, pi, radians, tau, Angle, Degrees,
        DomainError, Fixed, Radians, Real, F1616, F824, F88, UF032,
    };
    pub use linalg::{
        cross, distance, dot, length, mat, normalize, transpose, Matrix, Parts, Quaternion,
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use approx::assert_relative_eq;

    #[test]
    fn float_follows_the_feature() {
        let expected = if cfg!(feature = "use_f64") { 8 } else { 4 };
        assert_eq!(core::mem::size_of::<Float>(), expected);
    }

    #[test]
    fn prelude_covers_a_small_program() {
        let m = SquareMatrix::<2>::identity() * 2.0;
        let v: Vector<2> = mat![3.0 as Float, 4.0 as Float];
        assert_relative_eq!(length(&(v * m)), 10.0, epsilon = 1.0e-5);
        assert_relative_eq!(sqrt(dot(&v, &v)), 5.0, epsilon = 1.0e-5);
        assert_eq!(try_log(-1.0 as Float), Err(DomainError::NonPositiveLog(-1.0)));
        let a: Degrees<Float> = radians!(pi::<Float>()).into();
        assert_relative_eq!(a.value(), 180.0, epsilon = 1.0e-4);
    }
}
