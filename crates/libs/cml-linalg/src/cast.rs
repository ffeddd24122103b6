//! Element type conversions.
//!
//! [`Matrix::cast`] only accepts conversions that cannot lose information,
//! as decided by the [`From`] implementations of the element types:
//!
//! ```compile_fail
//! use cml_linalg::DVec3;
//! let v = DVec3::splat(1.0).cast::<f32>();
//! ```
//!
//! [`Matrix::unsafe_cast`] converts with `as` semantics and may truncate.
//! [`Matrix::pack`] concatenates the bit patterns of the elements into one
//! integer, which must be wide enough to hold them all:
//!
//! ```compile_fail
//! use cml_linalg::CVec4;
//! let bits = CVec4::new(4, 3, 2, 1).pack::<u16>();
//! ```

use crate::matrix::{Matrix, MatrixKind};
use base::{Fixed, FixedStorage};
use core::marker::PhantomData;
use num_traits::AsPrimitive;

/// Scalar with a fixed-width bit pattern.
pub trait BitPattern: Copy {
    /// Width of the pattern.
    const BITS: u32;

    /// The pattern, zero-extended.
    fn bit_pattern(self) -> u128;
}

/// Integer receiving packed bit patterns.
pub trait PackTarget: Copy {
    /// Width of the integer.
    const BITS: u32;

    /// Builds the integer from its low bits.
    fn from_bit_pattern(bits: u128) -> Self;
}

macro_rules! impl_bit_pattern {
    ($($t:ty => $u:ty),*) => {
        $(
            impl BitPattern for $t {
                const BITS: u32 = <$u>::BITS;

                #[inline(always)]
                fn bit_pattern(self) -> u128 { self as $u as u128 }
            }

            impl PackTarget for $t {
                const BITS: u32 = <$u>::BITS;

                #[inline(always)]
                fn from_bit_pattern(bits: u128) -> Self { bits as $u as $t }
            }
        )*
    };
}

impl_bit_pattern!(
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128
);

impl BitPattern for f32 {
    const BITS: u32 = 32;

    #[inline(always)]
    fn bit_pattern(self) -> u128 { self.to_bits() as u128 }
}

impl BitPattern for f64 {
    const BITS: u32 = 64;

    #[inline(always)]
    fn bit_pattern(self) -> u128 { self.to_bits() as u128 }
}

impl<S: FixedStorage, const F: u32> BitPattern for Fixed<S, F> {
    const BITS: u32 = S::BITS;

    #[inline(always)]
    fn bit_pattern(self) -> u128 { self.to_bits().bit_pattern() }
}

/// Checks that `U` holds `X * Y` patterns of `T`.
struct PackWidth<T, U, const X: usize, const Y: usize>(PhantomData<(T, U)>);

impl<T: BitPattern, U: PackTarget, const X: usize, const Y: usize> PackWidth<T, U, X, Y> {
    const FITS: () = assert!(
        T::BITS as usize * X * Y <= U::BITS as usize,
        "the target integer is too narrow to hold every element"
    );
}

impl<T: Copy, const X: usize, const Y: usize, K: MatrixKind> Matrix<T, X, Y, K> {
    /// Converts every element losslessly.
    #[inline]
    pub fn cast<U: From<T>>(self) -> Matrix<U, X, Y, K> { self.map(U::from) }

    /// Converts every element with `as` semantics.
    #[inline]
    pub fn unsafe_cast<U>(self) -> Matrix<U, X, Y, K>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(AsPrimitive::as_)
    }

    /// Concatenates the bit patterns of the elements, element 0 in the
    /// lowest bits.
    pub fn pack<U: PackTarget>(self) -> U
    where
        T: BitPattern,
    {
        let () = PackWidth::<T, U, X, Y>::FITS;
        let mut bits = 0u128;
        for (i, v) in self.iter().enumerate() {
            bits |= v.bit_pattern() << (i as u32 * T::BITS);
        }
        U::from_bit_pattern(bits)
    }
}
