//! Fixed-point numbers.
//!
//! A [`Fixed<S, F>`] stores a real value as an integer `S` scaled by
//! `2^F`: the represented value is `bits / 2^F`. Additions and
//! subtractions act on the integer directly; multiplications and divisions
//! go through the twice-as-wide intermediate of the storage so that neither
//! the product nor the pre-shifted dividend overflows.

mod convert;
mod storage;

pub use convert::FixedConvert;
pub use storage::FixedStorage;

use crate::error::{raise, DomainError};
use core::{
    fmt::{Debug, Display, Formatter},
    ops::{
        Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
        ShrAssign, Sub, SubAssign,
    },
};
use num_traits::{Bounded, One, Zero};

/// Fixed-point number with storage `S` and `F` fractional bits.
///
/// The format is validated when a value is first constructed: `F` must be
/// even, must not exceed the storage width, and signed formats must keep at
/// least one integer bit for the sign.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fixed<S, const F: u32> {
    bits: S,
}

impl<S: FixedStorage, const F: u32> Fixed<S, F> {
    const FORMAT: () = {
        assert!(F % 2 == 0, "the fractional part must have an even number of bits");
        assert!(
            F <= S::BITS,
            "the fractional part cannot be wider than the storage"
        );
        assert!(
            !S::SIGNED || F < S::BITS - 1,
            "a signed fixed-point format needs room for its sign bit"
        );
    };

    /// Number of fractional bits.
    pub const FRAC_BITS: u32 = F;

    /// Number of integer bits (sign bit included for signed storages).
    pub const INT_BITS: u32 = S::BITS - F;

    /// Zero.
    pub const ZERO: Self = Self { bits: S::ZERO };

    /// Smallest positive increment, `2^-F`.
    pub const EPSILON: Self = Self { bits: S::UNIT };

    /// Smallest representable value.
    pub const MIN: Self = Self { bits: S::MIN };

    /// Largest representable value.
    pub const MAX: Self = Self { bits: S::MAX };

    /// Creates a fixed-point number from its raw storage.
    #[inline(always)]
    pub const fn from_bits(bits: S) -> Self {
        let () = Self::FORMAT;
        Self { bits }
    }

    /// Returns the raw storage.
    #[inline(always)]
    pub const fn to_bits(self) -> S { self.bits }

    /// Creates a fixed-point number from a primitive number.
    ///
    /// The value is multiplied by `2^F` then truncated toward zero into the
    /// storage; floating-point inputs beyond the representable range
    /// saturate.
    #[inline]
    pub fn from_num<N: FixedConvert>(n: N) -> Self { Self::from_bits(n.to_fixed_bits::<S>(F)) }

    /// Converts to a primitive number, truncating toward zero for integers.
    #[inline]
    pub fn to_num<N: FixedConvert>(self) -> N { N::from_fixed_bits(self.bits, F) }

    /// Converts to `f32`.
    #[inline]
    pub fn to_f32(self) -> f32 { self.to_num() }

    /// Converts to `f64`.
    #[inline]
    pub fn to_f64(self) -> f64 { self.to_num() }

    /// Converts from another fixed-point format by shifting the storage.
    ///
    /// Bits are shifted right when the source carries more fractional bits
    /// and left otherwise; the result is truncated to the destination
    /// storage width.
    pub fn from_fixed<S2: FixedStorage, const F2: u32>(other: Fixed<S2, F2>) -> Self {
        let raw = other.bits.to_i128();
        let shifted = if F2 > F {
            raw >> (F2 - F)
        } else {
            raw << (F - F2)
        };
        Self::from_bits(S::wrap_i128(shifted))
    }

    /// Converts into another fixed-point format, see [`Fixed::from_fixed`].
    #[inline]
    pub fn to_fixed<S2: FixedStorage, const F2: u32>(self) -> Fixed<S2, F2> {
        Fixed::<S2, F2>::from_fixed(self)
    }

    /// Divides by `rhs`, reporting a zero divisor instead of faulting.
    pub fn try_div(self, rhs: Self) -> Result<Self, DomainError> {
        if rhs.bits == S::ZERO {
            return Err(DomainError::DivisionByZero);
        }
        let dividend = self.bits.widen() << F as usize;
        Ok(Self::from_bits(S::narrow(dividend / rhs.bits.widen())))
    }

    /// Remainder of the truncated division by `rhs`, reporting a zero divisor
    /// instead of faulting.
    pub fn try_rem(self, rhs: Self) -> Result<Self, DomainError> {
        if rhs.bits == S::ZERO {
            return Err(DomainError::DivisionByZero);
        }
        Ok(Self::from_bits(self.bits % rhs.bits))
    }

    /// Absolute value. The minimum of a signed format maps onto itself.
    #[inline]
    pub fn abs(self) -> Self {
        if self.bits < S::ZERO {
            Self::from_bits(S::ZERO.wrapping_sub(&self.bits))
        } else {
            self
        }
    }

    /// Adds one (the real value `1.0`).
    #[inline]
    pub fn inc(&mut self) { *self += Self::one(); }

    /// Subtracts one (the real value `1.0`).
    #[inline]
    pub fn dec(&mut self) { *self -= Self::one(); }

    /// Whether the value is strictly negative.
    #[inline(always)]
    pub fn is_negative(self) -> bool { self.bits < S::ZERO }
}

impl<S: FixedStorage, const F: u32> Debug for Fixed<S, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Fixed")
            .field("value", &self.to_f64())
            .field("bits", &self.bits)
            .field("frac", &F)
            .finish()
    }
}

impl<S: FixedStorage, const F: u32> Display for Fixed<S, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.to_f64(), f)
    }
}

impl<S: FixedStorage, const F: u32> Add for Fixed<S, F> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self { Self::from_bits(self.bits.wrapping_add(&rhs.bits)) }
}

impl<S: FixedStorage, const F: u32> Sub for Fixed<S, F> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self { Self::from_bits(self.bits.wrapping_sub(&rhs.bits)) }
}

impl<S: FixedStorage, const F: u32> Mul for Fixed<S, F> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let product = self.bits.widen() * rhs.bits.widen();
        Self::from_bits(S::narrow(product >> F as usize))
    }
}

impl<S: FixedStorage, const F: u32> Div for Fixed<S, F> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when `rhs` is zero, see [`Fixed::try_div`].
    #[inline]
    #[track_caller]
    fn div(self, rhs: Self) -> Self { raise(self.try_div(rhs)) }
}

impl<S: FixedStorage, const F: u32> Rem for Fixed<S, F> {
    type Output = Self;

    /// Remainder of the truncated division.
    ///
    /// Panics when `rhs` is zero, see [`Fixed::try_rem`].
    #[inline]
    #[track_caller]
    fn rem(self, rhs: Self) -> Self { raise(self.try_rem(rhs)) }
}

impl<S: FixedStorage, const F: u32> AddAssign for Fixed<S, F> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<S: FixedStorage, const F: u32> SubAssign for Fixed<S, F> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<S: FixedStorage, const F: u32> MulAssign for Fixed<S, F> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) { *self = *self * rhs; }
}

impl<S: FixedStorage, const F: u32> DivAssign for Fixed<S, F> {
    #[inline]
    #[track_caller]
    fn div_assign(&mut self, rhs: Self) { *self = *self / rhs; }
}

impl<S: FixedStorage, const F: u32> RemAssign for Fixed<S, F> {
    #[inline]
    #[track_caller]
    fn rem_assign(&mut self, rhs: Self) { *self = *self % rhs; }
}

impl<S: FixedStorage, const F: u32> Shl<u32> for Fixed<S, F> {
    type Output = Self;

    /// Shifts the raw storage left.
    #[inline(always)]
    fn shl(self, rhs: u32) -> Self { Self::from_bits(self.bits << rhs as usize) }
}

impl<S: FixedStorage, const F: u32> Shr<u32> for Fixed<S, F> {
    type Output = Self;

    /// Shifts the raw storage right (arithmetic shift for signed storages).
    #[inline(always)]
    fn shr(self, rhs: u32) -> Self { Self::from_bits(self.bits >> rhs as usize) }
}

impl<S: FixedStorage, const F: u32> ShlAssign<u32> for Fixed<S, F> {
    #[inline(always)]
    fn shl_assign(&mut self, rhs: u32) { *self = *self << rhs; }
}

impl<S: FixedStorage, const F: u32> ShrAssign<u32> for Fixed<S, F> {
    #[inline(always)]
    fn shr_assign(&mut self, rhs: u32) { *self = *self >> rhs; }
}

/// Negation keeps the format of signed storages and promotes unsigned
/// storages to their signed twin, which requires a spare bit for the sign.
macro_rules! impl_neg {
    (signed $($t:ty),*) => {
        $(
            impl<const F: u32> Neg for Fixed<$t, F> {
                type Output = Self;

                #[inline(always)]
                fn neg(self) -> Self { Self::from_bits(self.bits.wrapping_neg()) }
            }
        )*
    };
    (unsigned $($t:ty => $s:ty),*) => {
        $(
            impl<const F: u32> Fixed<$t, F> {
                const NEGATABLE: () = assert!(
                    F < <$t>::BITS - 1,
                    "cannot negate: the fractional part leaves no bit for the sign"
                );
            }

            impl<const F: u32> Neg for Fixed<$t, F> {
                type Output = Fixed<$s, F>;

                #[inline(always)]
                fn neg(self) -> Fixed<$s, F> {
                    let () = Self::NEGATABLE;
                    Fixed::from_bits((self.bits as $s).wrapping_neg())
                }
            }
        )*
    };
}

impl_neg!(signed i8, i16, i32, i64);
impl_neg!(unsigned u8 => i8, u16 => i16, u32 => i32, u64 => i64);

impl<S: FixedStorage, const F: u32> Zero for Fixed<S, F> {
    #[inline(always)]
    fn zero() -> Self { Self::ZERO }

    #[inline(always)]
    fn is_zero(&self) -> bool { self.bits == S::ZERO }
}

impl<S: FixedStorage, const F: u32> One for Fixed<S, F> {
    /// The real value `1.0`, or [`Fixed::MAX`] for formats without integer
    /// bits where `1.0` is out of range.
    #[inline(always)]
    fn one() -> Self {
        if F >= S::BITS - S::SIGNED as u32 {
            Self::MAX
        } else {
            Self::from_bits(S::UNIT << F as usize)
        }
    }
}

impl<S: FixedStorage, const F: u32> Bounded for Fixed<S, F> {
    fn min_value() -> Self { Self::MIN }

    fn max_value() -> Self { Self::MAX }
}

impl<S: FixedStorage, const F: u32> approx::AbsDiffEq for Fixed<S, F> {
    type Epsilon = Self;

    fn default_epsilon() -> Self { Self::EPSILON }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self) -> bool {
        (self.bits.to_i128() - other.bits.to_i128()).abs() <= epsilon.bits.to_i128().abs()
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<S: FixedStorage + bytemuck::Zeroable, const F: u32> bytemuck::Zeroable for Fixed<S, F> {}

#[cfg(feature = "bytemuck")]
unsafe impl<S: FixedStorage + bytemuck::Pod, const F: u32> bytemuck::Pod for Fixed<S, F> {}

/// 16-bit format with 8 fractional bits, range `[-128, 128[`.
pub type F88 = Fixed<i16, 8>;

/// 32-bit format with 16 fractional bits, range `[-32768, 32768[`.
pub type F1616 = Fixed<i32, 16>;

/// 32-bit format with 24 fractional bits, range `]-128, 128[` with a
/// resolution of about `6e-8`.
pub type F824 = Fixed<i32, 24>;

/// 64-bit format with 32 fractional bits.
pub type F3232 = Fixed<i64, 32>;

/// 64-bit format with 16 fractional bits.
pub type F4816 = Fixed<i64, 16>;

/// Unsigned 32-bit format made only of fractional bits, range `[0, 1[` with a
/// resolution of about `2e-10`. Suited to normalised colors and directions.
pub type UF032 = Fixed<u32, 32>;

static_assertions::assert_eq_size!(F88, i16);
static_assertions::assert_eq_size!(F1616, i32);
static_assertions::assert_eq_size!(UF032, u32);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn storage_of_exact_values() {
        assert_eq!(F88::from_num(2.5).to_bits(), 0x0280);
        assert_eq!(F88::from_num(0.5).to_bits(), 0x0080);
        assert_eq!(F88::from_num(2).to_bits(), 0x0200);
        assert_eq!(F88::from_num(-2.5).to_bits(), -0x0280);
        assert_eq!(UF032::from_num(0.5).to_bits(), 0x8000_0000);
    }

    #[test]
    fn construction_truncates_toward_zero() {
        // 0.00390625 is one step of F88; anything below truncates to zero.
        assert_eq!(F88::from_num(0.003).to_bits(), 0);
        assert_eq!(F88::from_num(-0.003).to_bits(), 0);
        assert_eq!(F88::from_num(1.999).to_bits(), 0x01ff);
        assert_eq!(F88::from_num(-1.999).to_bits(), -0x01ff);
    }

    #[test]
    fn conversion_to_primitives() {
        assert_eq!(F88::from_num(-2.5).to_num::<i32>(), -2);
        assert_eq!(F88::from_num(2.5).to_num::<i32>(), 2);
        assert_eq!(F88::from_num(2.5).to_f32(), 2.5);
        assert_eq!(F1616::from_num(-0.25).to_f64(), -0.25);
    }

    #[test]
    fn format_conversion_is_a_shift() {
        let a = F88::from_num(2.5);
        assert_eq!(F1616::from_fixed(a), F1616::from_num(2.5));
        assert_eq!(F1616::from_fixed(a).to_bits(), 0x0002_8000);
        assert_eq!(F88::from_fixed(F1616::from_num(-1.75)), F88::from_num(-1.75));
        // Narrowing drops the extra fractional bits.
        let fine = F1616::from_bits(0x0001_0001);
        assert_eq!(F88::from_fixed(fine).to_bits(), 0x0100);
    }

    #[test]
    fn addition_and_subtraction() {
        let r = F88::from_num(-1) - F88::from_num(0.5) - F88::from_num(2) - F88::from_num(0.5);
        assert_eq!(r, F88::from_num(-4));
        assert_eq!(F88::from_num(1.25) + F88::from_num(2.5), F88::from_num(3.75));
    }

    #[test]
    fn multiplication_rescales() {
        assert_eq!(
            F88::from_num(-1) * F88::from_num(0.5),
            F88::from_num(-0.5)
        );
        assert_eq!(F88::from_num(3) * F88::from_num(-2), F88::from_num(-6));
        // The product goes through the wide intermediate.
        assert_eq!(F88::from_num(64) * F88::from_num(0.5), F88::from_num(32));
        assert_eq!(UF032::from_num(0.5) * UF032::from_num(0.5), UF032::from_num(0.25));
    }

    #[test]
    fn division_preserves_fraction() {
        assert_eq!(F88::from_num(1) / F88::from_num(2), F88::from_num(0.5));
        assert_eq!(F1616::from_num(-3) / F1616::from_num(4), F1616::from_num(-0.75));
        assert_eq!(
            F88::from_num(1).try_div(F88::ZERO),
            Err(DomainError::DivisionByZero)
        );
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_by_zero_panics() { let _ = F1616::from_num(1) / F1616::ZERO; }

    #[test]
    fn negation() {
        assert_eq!(-F88::from_num(1.5), F88::from_num(-1.5));
        let u = Fixed::<u16, 8>::from_num(3.5);
        let n: Fixed<i16, 8> = -u;
        assert_eq!(n, F88::from_num(-3.5));
    }

    #[test]
    fn comparisons_use_storage() {
        assert!(F88::from_num(-1) < F88::from_num(0.5));
        assert!(F88::from_num(2) >= F88::from_num(2));
        assert!(F88::EPSILON > F88::ZERO);
        assert!(F88::MIN < F88::MAX);
    }

    #[test]
    fn increment_and_decrement() {
        let mut a = F88::from_num(0.5);
        a.inc();
        assert_eq!(a, F88::from_num(1.5));
        a.dec();
        a.dec();
        assert_eq!(a, F88::from_num(-0.5));
    }

    #[test]
    fn shifts_act_on_storage() {
        assert_eq!(F88::from_num(1) << 1, F88::from_num(2));
        assert_eq!(F88::from_num(-4) >> 2, F88::from_num(-1));
        let mut a = F1616::from_num(0.25);
        a <<= 2;
        assert_eq!(a, F1616::from_num(1));
    }

    #[test]
    fn remainder() {
        assert_eq!(F88::from_num(5.5) % F88::from_num(2), F88::from_num(1.5));
        assert_eq!(F88::from_num(-5.5).try_rem(F88::from_num(2)), Ok(F88::from_num(-1.5)));
        assert_eq!(F88::from_num(1).try_rem(F88::ZERO), Err(DomainError::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "fixed-point division by zero")]
    fn remainder_by_zero_panics() { let _ = F1616::from_num(3) % F1616::ZERO; }

    #[test]
    fn one_without_integer_bits_saturates() {
        assert_eq!(UF032::one(), UF032::MAX);
        assert_eq!(Fixed::<u16, 16>::one(), Fixed::<u16, 16>::MAX);
        assert_eq!(Fixed::<u16, 8>::one().to_bits(), 0x0100);
        assert_eq!(F88::one(), F88::from_num(1));
    }

    #[test]
    fn display() {
        assert_eq!(F88::from_num(2.5).to_string(), "2.5");
        assert_eq!(F1616::from_num(-0.125).to_string(), "-0.125");
    }

    #[test]
    fn absolute_value() {
        assert_eq!(F88::from_num(-2.25).abs(), F88::from_num(2.25));
        assert_eq!(F88::from_num(2.25).abs(), F88::from_num(2.25));
    }

    proptest! {
        #[test]
        fn shift_round_trip_recovers_coarse_value(bits in i16::MIN..i16::MAX) {
            let a = F88::from_bits(bits);
            let wide = F1616::from_fixed(a);
            prop_assert_eq!(F88::from_fixed(wide), a);
        }

        #[test]
        fn round_trip_through_coarser_format(bits in -0x007f_ffffi32..0x007f_ffff) {
            let a = F1616::from_bits(bits);
            let back = F1616::from_fixed(F88::from_fixed(a));
            // Within one step of the coarser format.
            prop_assert!((a.to_f64() - back.to_f64()).abs() < F88::EPSILON.to_f64());
        }

        #[test]
        fn addition_matches_float(a in -60.0f64..60.0, b in -60.0f64..60.0) {
            let fa = F1616::from_num(a);
            let fb = F1616::from_num(b);
            prop_assert_eq!((fa + fb).to_f64(), fa.to_f64() + fb.to_f64());
        }

        #[test]
        fn multiplication_close_to_float(a in -100.0f64..100.0, b in -100.0f64..100.0) {
            let fa = F1616::from_num(a);
            let fb = F1616::from_num(b);
            let expected = fa.to_f64() * fb.to_f64();
            prop_assert!(((fa * fb).to_f64() - expected).abs() <= F1616::EPSILON.to_f64());
        }
    }
}
