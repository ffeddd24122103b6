//! Geometric helpers on vectors.
//!
//! Each helper exists both as a method and as a free function, the latter
//! reading closer to the usual notation: `dot(a, b)`, `cross(a, b)`.

use crate::matrix::{Matrix, MatrixKind};
use base::{func, raise, DomainError, Real};
use core::ops::{Mul, Sub};
use num_traits::Zero;

impl<T, const N: usize, K> Matrix<T, N, 1, K>
where
    T: Copy + Zero + Mul<Output = T>,
    K: MatrixKind,
{
    /// Sum of the element-by-element products.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
    }

    /// Squared euclidean length.
    #[inline]
    pub fn length_squared(&self) -> T { self.dot(self) }
}

impl<T: Real + Zero, const N: usize, K: MatrixKind> Matrix<T, N, 1, K> {
    /// Euclidean length.
    #[inline]
    pub fn try_length(&self) -> Result<T, DomainError> { func::try_sqrt(self.length_squared()) }

    /// Euclidean length.
    ///
    /// # Panics
    ///
    /// Panics if an element is NaN.
    #[inline]
    #[track_caller]
    pub fn length(&self) -> T { raise(self.try_length()) }

    /// Vector of unit length pointing in the same direction.
    ///
    /// Fails with [`DomainError::ZeroLength`] when the length is zero, which
    /// for the fixed-point formats includes vectors whose squared length
    /// underflows.
    pub fn try_normalize(self) -> Result<Self, DomainError> {
        let len = self.try_length()?;
        if len == T::ZERO {
            return Err(DomainError::ZeroLength);
        }
        Ok(self.map(|v| v / len))
    }

    /// Vector of unit length pointing in the same direction.
    ///
    /// # Panics
    ///
    /// Panics on a zero-length vector.
    #[inline]
    #[track_caller]
    pub fn normalize(self) -> Self { raise(self.try_normalize()) }

    /// Euclidean distance between two points.
    #[inline]
    #[track_caller]
    pub fn distance(&self, other: &Self) -> T { (*other - *self).length() }
}

impl<T, K> Matrix<T, 3, 1, K>
where
    T: Copy + Mul<Output = T> + Sub<Output = T>,
    K: MatrixKind,
{
    /// Cross product.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        let [[ax, ay, az]] = *self.rows();
        let [[bx, by, bz]] = *rhs.rows();
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

/// Dot product of two vectors.
#[inline]
pub fn dot<T, const N: usize, K>(a: &Matrix<T, N, 1, K>, b: &Matrix<T, N, 1, K>) -> T
where
    T: Copy + Zero + Mul<Output = T>,
    K: MatrixKind,
{
    a.dot(b)
}

/// Cross product of two 3-vectors.
#[inline]
pub fn cross<T, K>(a: &Matrix<T, 3, 1, K>, b: &Matrix<T, 3, 1, K>) -> Matrix<T, 3, 1, K>
where
    T: Copy + Mul<Output = T> + Sub<Output = T>,
    K: MatrixKind,
{
    a.cross(b)
}

/// Euclidean length of a vector.
#[inline]
#[track_caller]
pub fn length<T: Real + Zero, const N: usize, K: MatrixKind>(v: &Matrix<T, N, 1, K>) -> T {
    v.length()
}

/// Unit vector in the direction of `v`.
#[inline]
#[track_caller]
pub fn normalize<T: Real + Zero, const N: usize, K: MatrixKind>(
    v: Matrix<T, N, 1, K>,
) -> Matrix<T, N, 1, K> {
    v.normalize()
}

/// Distance between two points.
#[inline]
#[track_caller]
pub fn distance<T: Real + Zero, const N: usize, K: MatrixKind>(
    a: &Matrix<T, N, 1, K>,
    b: &Matrix<T, N, 1, K>,
) -> T {
    a.distance(b)
}

/// Transpose of a matrix.
#[inline]
pub fn transpose<T: Copy, const X: usize, const Y: usize, K: MatrixKind>(
    m: &Matrix<T, X, Y, K>,
) -> Matrix<T, Y, X, K> {
    m.transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DVec3, F1616Vec2, IVec3, Vec2, Vec3};
    use approx::assert_relative_eq;
    use base::F1616;
    use proptest::prelude::*;

    #[test]
    fn dot_and_length() {
        let a = IVec3::new(1, 2, 3);
        let b = IVec3::new(4, -5, 6);
        assert_eq!(dot(&a, &b), 12);
        assert_eq!(a.length_squared(), 14);
        assert_relative_eq!(Vec2::new(3.0, 4.0).length(), 5.0, epsilon = 1.0e-6);
        assert_eq!(F1616Vec2::new(F1616::from_num(3), F1616::from_num(4)).length(), F1616::from_num(5));
    }

    #[test]
    fn cross_follows_the_right_hand_rule() {
        let x = IVec3::new(1, 0, 0);
        let y = IVec3::new(0, 1, 0);
        assert_eq!(cross(&x, &y), IVec3::new(0, 0, 1));
        assert_eq!(y.cross(&x), IVec3::new(0, 0, -1));
        assert_eq!(IVec3::new(2, 3, 4).cross(&IVec3::new(5, 6, 7)), IVec3::new(-3, 6, -3));
    }

    #[test]
    fn normalize_gives_unit_length() {
        let v = normalize(Vec3::new(0.0, 3.0, 4.0));
        assert_relative_eq!(v, Vec3::new(0.0, 0.6, 0.8), epsilon = 1.0e-6);
        assert_relative_eq!(v.length(), 1.0, epsilon = 1.0e-6);
        assert_relative_eq!(distance(&Vec3::zeros(), &Vec3::new(2.0, 3.0, 6.0)), 7.0, epsilon = 1.0e-6);
    }

    #[test]
    fn normalize_rejects_zero_length() {
        assert_eq!(Vec3::zeros().try_normalize(), Err(DomainError::ZeroLength));
        assert_eq!(
            DVec3::new(f64::NAN, 0.0, 0.0).try_length(),
            Err(DomainError::NotANumber("sqrt"))
        );
    }

    #[test]
    #[should_panic(expected = "cannot normalize a zero-length vector")]
    fn normalize_panics_on_zero_length() { let _ = DVec3::zeros().normalize(); }

    proptest! {
        #[test]
        fn cross_is_orthogonal(a in prop::array::uniform3(-100i64..100), b in prop::array::uniform3(-100i64..100)) {
            let a = crate::Matrix::<i64, 3, 1>::from(a);
            let b = crate::Matrix::<i64, 3, 1>::from(b);
            let c = a.cross(&b);
            prop_assert_eq!(c.dot(&a), 0);
            prop_assert_eq!(c.dot(&b), 0);
        }
    }
}
