//! Scalar abstraction shared by the floating-point types and the signed
//! fixed-point formats.

use crate::fixed::Fixed;
use core::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Real-number scalar the elementary functions are defined over.
pub trait Real:
    Copy
    + Default
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Relative tolerance unit: the gap between `1` and the next value.
    const EPSILON: Self;
    /// Absolute tolerance floor: the smallest positive normal value.
    const MIN_POSITIVE: Self;
    /// π.
    const PI: Self;
    /// π/2.
    const HALF_PI: Self;
    /// τ = 2π.
    const TAU: Self;
    /// Largest finite value.
    const MAX: Self;
    /// Value standing for results above [`Real::MAX`]: infinity for the
    /// floating-point types, `None` for formats that cannot represent one.
    const INFINITY: Option<Self>;

    /// Converts from `f64`, rounding or truncating to the nearest
    /// representable value of `Self`.
    fn from_f64(v: f64) -> Self;

    /// Converts to `f64`.
    fn to_f64(self) -> f64;

    /// Absolute value.
    #[inline]
    fn abs(self) -> Self {
        if self < Self::ZERO {
            -self
        } else {
            self
        }
    }

    /// Whether the value is NaN.
    #[inline]
    #[allow(clippy::eq_op)]
    fn is_nan(self) -> bool { self != self }

    /// Whether the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Square root of a strictly positive finite value.
    ///
    /// Defaults to Newton's iteration; fixed-point formats use a bit-by-bit
    /// search instead.
    #[inline]
    fn sqrt_kernel(self) -> Self { crate::func::sqrt::newton(self) }
}

macro_rules! impl_real_float {
    ($($t:ident),*) => {
        $(
            impl Real for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const EPSILON: Self = $t::EPSILON;
                const MIN_POSITIVE: Self = $t::MIN_POSITIVE;
                const PI: Self = core::$t::consts::PI;
                const HALF_PI: Self = core::$t::consts::FRAC_PI_2;
                const TAU: Self = core::$t::consts::TAU;
                const MAX: Self = $t::MAX;
                const INFINITY: Option<Self> = Some($t::INFINITY);

                #[inline(always)]
                fn from_f64(v: f64) -> Self { v as $t }

                #[inline(always)]
                fn to_f64(self) -> f64 { self as f64 }

                #[inline(always)]
                fn is_finite(self) -> bool { $t::is_finite(self) }
            }
        )*
    };
}

impl_real_float!(f32, f64);

macro_rules! impl_real_fixed {
    ($($t:ty),*) => {
        $(
            impl<const F: u32> Real for Fixed<$t, F> {
                const ZERO: Self = Fixed::<$t, F>::ZERO;
                const ONE: Self = Self::from_bits(1 << F);
                const EPSILON: Self = Fixed::<$t, F>::EPSILON;
                const MIN_POSITIVE: Self = Fixed::<$t, F>::EPSILON;
                const PI: Self =
                    Self::from_bits((core::f64::consts::PI * (1u64 << F) as f64) as $t);
                const HALF_PI: Self =
                    Self::from_bits((core::f64::consts::FRAC_PI_2 * (1u64 << F) as f64) as $t);
                const TAU: Self =
                    Self::from_bits((core::f64::consts::TAU * (1u64 << F) as f64) as $t);
                const MAX: Self = Fixed::<$t, F>::MAX;
                const INFINITY: Option<Self> = None;

                #[inline(always)]
                fn from_f64(v: f64) -> Self { Self::from_num(v) }

                #[inline(always)]
                fn to_f64(self) -> f64 { Fixed::to_f64(self) }

                #[inline(always)]
                fn abs(self) -> Self { Fixed::abs(self) }

                #[inline(always)]
                fn is_nan(self) -> bool { false }

                #[inline(always)]
                fn is_finite(self) -> bool { true }

                #[inline]
                fn sqrt_kernel(self) -> Self { crate::func::sqrt::bitwise(self) }
            }
        )*
    };
}

impl_real_fixed!(i8, i16, i32, i64);

/// Returns π for the scalar type.
#[inline(always)]
pub fn pi<T: Real>() -> T { T::PI }

/// Returns π/2 for the scalar type.
#[inline(always)]
pub fn half_pi<T: Real>() -> T { T::HALF_PI }

/// Returns τ = 2π for the scalar type.
#[inline(always)]
pub fn tau<T: Real>() -> T { T::TAU }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::{F1616, F88};

    #[test]
    fn constants_of_fixed_formats() {
        assert_eq!(<F88 as Real>::ONE.to_bits(), 0x0100);
        assert_eq!(<F88 as Real>::PI.to_bits(), 804);
        assert_eq!(<F1616 as Real>::HALF_PI.to_bits(), 102943);
        assert_eq!(<F1616 as Real>::MIN_POSITIVE.to_bits(), 1);
        assert_eq!(<F88 as Real>::MAX.to_bits(), i16::MAX);
        assert_eq!(<F88 as Real>::INFINITY, None);
    }

    #[test]
    fn constants_of_floats() {
        assert_eq!(pi::<f64>(), 3.141592653589793);
        assert_eq!(half_pi::<f64>(), 1.5707963267948966);
        assert_eq!(tau::<f32>(), core::f32::consts::TAU);
        assert_eq!(<f64 as Real>::INFINITY, Some(f64::INFINITY));
    }

    #[test]
    fn absolute_value_and_classification() {
        assert_eq!(Real::abs(-2.0f32), 2.0);
        assert_eq!(Real::abs(F88::from_num(-0.5)), F88::from_num(0.5));
        assert!(Real::is_nan(f64::NAN));
        assert!(!Real::is_finite(f32::INFINITY));
        assert!(Real::is_finite(F1616::MAX));
    }
}
