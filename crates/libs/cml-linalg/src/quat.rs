//! Quaternions: `Matrix<T, 4, 1, Quaternion>` with `(x, y, z)` the vector
//! part and `w` the scalar part.
//!
//! The quaternion kind shares the storage and the elementwise operators of
//! the plain vectors but gives `*` three different meanings depending on the
//! right operand:
//!
//! - another quaternion: the Hamilton product;
//! - a 3-vector: rotation of the vector;
//! - a scalar: the real power of a unit quaternion.

use crate::matrix::{Matrix, Quaternion};
use base::{func, raise, Angle, AngleUnit, DomainError, Fixed, Real};
use core::ops::{Add, Mul, MulAssign, Sub};
use num_traits::Zero;

impl<T: Copy> Matrix<T, 4, 1, Quaternion> {
    /// Creates a quaternion from its vector and scalar parts.
    #[inline]
    pub fn from_vector_scalar(vector: Matrix<T, 3, 1>, scalar: T) -> Self {
        let [[x, y, z]] = vector.into_rows();
        Self::new(x, y, z, scalar)
    }

    /// The `(x, y, z)` part.
    #[inline]
    pub fn vector(&self) -> Matrix<T, 3, 1> {
        let [[x, y, z, _]] = *self.rows();
        Matrix::<T, 3, 1>::new(x, y, z)
    }

    /// The `w` part.
    #[inline]
    pub fn scalar(&self) -> T { self.rows()[0][3] }
}

impl<T: Real + Zero> Matrix<T, 4, 1, Quaternion> {
    /// The quaternion `(0, 0, 0, 1)`, rotating by nothing.
    #[inline]
    pub fn identity() -> Self { Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE) }

    /// Unit quaternion rotating by `angle` around `axis`.
    ///
    /// The axis does not need to be normalized but must not be zero.
    pub fn try_from_axis_angle<A: AngleUnit>(
        axis: Matrix<T, 3, 1>,
        angle: Angle<T, A>,
    ) -> Result<Self, DomainError> {
        let axis = axis.try_normalize()?;
        let (sin, cos) = (angle / (T::ONE + T::ONE)).sin_cos();
        Ok(Self::from_vector_scalar(axis.map(|v| v * sin), cos))
    }

    /// Unit quaternion rotating by `angle` around `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is the zero vector.
    #[inline]
    #[track_caller]
    pub fn from_axis_angle<A: AngleUnit>(axis: Matrix<T, 3, 1>, angle: Angle<T, A>) -> Self {
        raise(Self::try_from_axis_angle(axis, angle))
    }

    /// Negates the vector part.
    #[inline]
    pub fn conjugate(self) -> Self { Self::from_vector_scalar(-self.vector(), self.scalar()) }

    /// Raises a unit quaternion to the real power `e` by scaling its
    /// rotation angle.
    ///
    /// A quaternion with a negative scalar part is first replaced by its
    /// opposite, which encodes the same rotation through the shorter arc. A
    /// quaternion without vector part has no axis and yields the identity.
    /// Fails with [`DomainError::UndefinedAtan2`] on the zero quaternion.
    pub fn try_powf(self, e: T) -> Result<Self, DomainError> {
        let (axis, s) = if self.scalar() < T::ZERO {
            (-self.vector(), -self.scalar())
        } else {
            (self.vector(), self.scalar())
        };
        let len = axis.try_length()?;
        let half = func::try_atan2(len, s)? * e;
        if len == T::ZERO {
            return Ok(Self::identity());
        }
        let (sin, cos) = (func::try_sin(half)?, func::try_cos(half)?);
        Ok(Self::from_vector_scalar(axis.map(|v| v / len * sin), cos))
    }

    /// Raises a unit quaternion to a real power, see [`Self::try_powf`].
    ///
    /// # Panics
    ///
    /// Panics on the zero quaternion.
    #[inline]
    #[track_caller]
    pub fn powf(self, e: T) -> Self { raise(self.try_powf(e)) }
}

/// Hamilton product.
impl<T> Mul for Matrix<T, 4, 1, Quaternion>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [[x1, y1, z1, w1]] = *self.rows();
        let [[x2, y2, z2, w2]] = *rhs.rows();
        Self::new(
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }
}

impl<T> MulAssign for Matrix<T, 4, 1, Quaternion>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Self) { *self = *self * rhs; }
}

/// Rotation of a 3-vector: `2(p·v)p + (s² - p·p)v + 2s(p×v)` with `p` the
/// vector part and `s` the scalar part.
impl<T: Real + Zero> Mul<Matrix<T, 3, 1>> for Matrix<T, 4, 1, Quaternion> {
    type Output = Matrix<T, 3, 1>;

    fn mul(self, v: Matrix<T, 3, 1>) -> Self::Output {
        let p = self.vector();
        let s = self.scalar();
        let two = T::ONE + T::ONE;
        let along = two * p.dot(&v);
        let scale = s * s - p.length_squared();
        let twice_s = two * s;
        let across = p.cross(&v);
        Matrix::from_fn(|x, _| along * p[x] + scale * v[x] + twice_s * across[x])
    }
}

/// Rotation of a 3-vector written vector first; same as `q * v`.
impl<T: Real + Zero> Mul<Matrix<T, 4, 1, Quaternion>> for Matrix<T, 3, 1> {
    type Output = Self;

    #[inline]
    fn mul(self, q: Matrix<T, 4, 1, Quaternion>) -> Self::Output { q * self }
}

macro_rules! impl_quat_power {
    ($([$($g:tt)*] $t:ty),* $(,)?) => {
        $(
            /// Real power, see [`Matrix::powf`].
            impl<$($g)*> Mul<$t> for Matrix<$t, 4, 1, Quaternion> {
                type Output = Self;

                #[inline]
                #[track_caller]
                fn mul(self, e: $t) -> Self::Output { self.powf(e) }
            }

            impl<$($g)*> MulAssign<$t> for Matrix<$t, 4, 1, Quaternion> {
                #[inline]
                #[track_caller]
                fn mul_assign(&mut self, e: $t) { *self = self.powf(e); }
            }

            /// Real power written exponent first; same as `q * e`.
            impl<$($g)*> Mul<Matrix<$t, 4, 1, Quaternion>> for $t {
                type Output = Matrix<$t, 4, 1, Quaternion>;

                #[inline]
                #[track_caller]
                fn mul(self, q: Matrix<$t, 4, 1, Quaternion>) -> Self::Output { q.powf(self) }
            }
        )*
    };
}

impl_quat_power!(
    [] f32,
    [] f64,
    [const F: u32] Fixed<i8, F>,
    [const F: u32] Fixed<i16, F>,
    [const F: u32] Fixed<i32, F>,
    [const F: u32] Fixed<i64, F>,
);
