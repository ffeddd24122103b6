//! Arithmetic and comparison operators.
//!
//! `+`, `-` and `/` between two containers of the same shape act element by
//! element, for every kind. `*` between two plain matrices is the matrix
//! product and only type-checks when the column count of the left operand
//! equals the row count of the right one:
//!
//! ```compile_fail
//! use cml_linalg::{Mat2, Mat3};
//! let m = Mat2::identity() * Mat3::identity();
//! ```
//!
//! A bare scalar of the element type broadcasts against every element, on
//! either side of the operator. Comparisons are exact; use the `approx`
//! traits or [`base::is_equal`] for tolerant checks.

use crate::matrix::{Matrix, MatrixKind, Normal};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::Zero;

macro_rules! impl_elementwise_ops {
    ($($op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident);*) => {
        $(
            impl<T, const X: usize, const Y: usize, K> $op for Matrix<T, X, Y, K>
            where
                T: Copy + $op<Output = T>,
                K: MatrixKind,
            {
                type Output = Self;

                #[inline]
                fn $fn(self, rhs: Self) -> Self::Output { self.zip_map(rhs, $op::$fn) }
            }

            impl<T, const X: usize, const Y: usize, K> $op_assign for Matrix<T, X, Y, K>
            where
                T: Copy + $op<Output = T>,
                K: MatrixKind,
            {
                #[inline]
                fn $fn_assign(&mut self, rhs: Self) { *self = $op::$fn(*self, rhs); }
            }
        )*
    };
}

impl_elementwise_ops!(
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Div, div, DivAssign, div_assign
);

impl<T, const X: usize, const Y: usize, K> Neg for Matrix<T, X, Y, K>
where
    T: Copy + Neg<Output = T>,
    K: MatrixKind,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output { self.map(Neg::neg) }
}

impl<T: Copy + Mul<Output = T>, const X: usize, const Y: usize, K: MatrixKind> Matrix<T, X, Y, K> {
    /// Element-by-element product.
    #[inline]
    pub fn component_mul(self, rhs: Self) -> Self { self.zip_map(rhs, Mul::mul) }
}

/// Matrix product: the element at column `x`, row `y` is the dot product of
/// row `y` of the left operand with column `x` of the right one.
impl<T, const X1: usize, const Y1: usize, const X2: usize> Mul<Matrix<T, X2, X1>>
    for Matrix<T, X1, Y1>
where
    T: Copy + Zero + Mul<Output = T>,
{
    type Output = Matrix<T, X2, Y1>;

    fn mul(self, rhs: Matrix<T, X2, X1>) -> Self::Output {
        Matrix::from_fn(|x, y| {
            (0..X1).fold(T::zero(), |acc, k| acc + self[(k, y)] * rhs[(x, k)])
        })
    }
}

/// In-place product with a square matrix whose side is the column count of
/// `self`, the only shape that leaves the type of `self` unchanged.
///
/// ```compile_fail
/// use cml_linalg::{Mat2, Matrix};
/// let mut m = Matrix::<f32, 3, 2>::zeros();
/// m *= Mat2::identity();
/// ```
impl<T, const X: usize, const Y: usize> MulAssign<Matrix<T, X, X>> for Matrix<T, X, Y>
where
    T: Copy + Zero + Mul<Output = T>,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, X, X>) { *self = *self * rhs; }
}

impl<T: PartialEq, const X: usize, const Y: usize, K: MatrixKind> PartialEq for Matrix<T, X, Y, K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool { self.as_slice() == other.as_slice() }
}

impl<T: Eq, const X: usize, const Y: usize, K: MatrixKind> Eq for Matrix<T, X, Y, K> {}

macro_rules! impl_scalar_ops {
    ([$($g:tt)*] $t:ty) => {
        impl_scalar_ops!(@any [$($g)*] $t, Add, add, AddAssign, add_assign);
        impl_scalar_ops!(@any [$($g)*] $t, Sub, sub, SubAssign, sub_assign);
        impl_scalar_ops!(@any [$($g)*] $t, Div, div, DivAssign, div_assign);
        impl_scalar_ops!(@normal [$($g)*] $t, Mul, mul, MulAssign, mul_assign);
        impl_scalar_ops!(@eq [$($g)*] $t);
    };
    (@any [$($g:tt)*] $t:ty, $op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident) => {
        impl<const X: usize, const Y: usize, K: MatrixKind, $($g)*> $op<$t> for Matrix<$t, X, Y, K> {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: $t) -> Self::Output { self.map(|v| $op::$fn(v, rhs)) }
        }

        impl<const X: usize, const Y: usize, K: MatrixKind, $($g)*> $op<Matrix<$t, X, Y, K>> for $t {
            type Output = Matrix<$t, X, Y, K>;

            #[inline]
            fn $fn(self, rhs: Matrix<$t, X, Y, K>) -> Self::Output { rhs.map(|v| $op::$fn(self, v)) }
        }

        impl<const X: usize, const Y: usize, K: MatrixKind, $($g)*> $op_assign<$t> for Matrix<$t, X, Y, K> {
            #[inline]
            fn $fn_assign(&mut self, rhs: $t) {
                for v in self.iter_mut() {
                    *v = $op::$fn(*v, rhs);
                }
            }
        }
    };
    (@normal [$($g:tt)*] $t:ty, $op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident) => {
        impl<const X: usize, const Y: usize, $($g)*> $op<$t> for Matrix<$t, X, Y, Normal> {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: $t) -> Self::Output { self.map(|v| $op::$fn(v, rhs)) }
        }

        impl<const X: usize, const Y: usize, $($g)*> $op<Matrix<$t, X, Y, Normal>> for $t {
            type Output = Matrix<$t, X, Y, Normal>;

            #[inline]
            fn $fn(self, rhs: Matrix<$t, X, Y, Normal>) -> Self::Output {
                rhs.map(|v| $op::$fn(self, v))
            }
        }

        impl<const X: usize, const Y: usize, $($g)*> $op_assign<$t> for Matrix<$t, X, Y, Normal> {
            #[inline]
            fn $fn_assign(&mut self, rhs: $t) {
                for v in self.iter_mut() {
                    *v = $op::$fn(*v, rhs);
                }
            }
        }
    };
    (@eq [$($g:tt)*] $t:ty) => {
        /// Every element equals the scalar.
        impl<const X: usize, const Y: usize, K: MatrixKind, $($g)*> PartialEq<$t> for Matrix<$t, X, Y, K> {
            #[inline]
            fn eq(&self, rhs: &$t) -> bool { self.iter().all(|v| v == rhs) }
        }

        impl<const X: usize, const Y: usize, K: MatrixKind, $($g)*> PartialEq<Matrix<$t, X, Y, K>> for $t {
            #[inline]
            fn eq(&self, rhs: &Matrix<$t, X, Y, K>) -> bool { rhs == self }
        }
    };
}

crate::for_each_scalar!(impl_scalar_ops);
