use core::{fmt::Debug, hash::Hash};
use num_traits::{PrimInt, WrappingAdd, WrappingMul, WrappingSub};

/// Integer types that can back a fixed-point number.
///
/// Each storage type knows its twice-as-wide intermediate used by the
/// multiplication and division of fixed-point values.
pub trait FixedStorage:
    PrimInt + WrappingAdd + WrappingSub + WrappingMul + Default + Debug + Hash + Send + Sync + 'static
{
    /// Intermediate type with double the bit width.
    type Wide: PrimInt + Debug;

    /// Whether the storage is a signed integer.
    const SIGNED: bool;

    /// Number of bits of the storage.
    const BITS: u32;

    /// Storage value zero.
    const ZERO: Self;

    /// Storage value one, the smallest positive fixed-point step.
    const UNIT: Self;

    /// Smallest storage value.
    const MIN: Self;

    /// Largest storage value.
    const MAX: Self;

    /// Promotes to the wide intermediate.
    fn widen(self) -> Self::Wide;

    /// Truncates a wide intermediate back to the storage width.
    fn narrow(wide: Self::Wide) -> Self;

    /// Converts to `i128` without loss.
    fn to_i128(self) -> i128;

    /// Truncates an `i128` to the storage width (two's complement wrap).
    fn wrap_i128(v: i128) -> Self;

    /// Converts to `f64`.
    fn to_f64(self) -> f64;

    /// Converts from `f64`, truncating toward zero and saturating at the
    /// storage bounds.
    fn saturate_f64(v: f64) -> Self;

    /// Raw bit pattern of the storage, zero-extended to 128 bits.
    fn bit_pattern(self) -> u128;
}

macro_rules! impl_fixed_storage {
    ($($t:ty => $wide:ty, $unsigned:ty, $signed:literal);* $(;)?) => {
        $(
            impl FixedStorage for $t {
                type Wide = $wide;

                const SIGNED: bool = $signed;
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const UNIT: Self = 1;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline(always)]
                fn widen(self) -> $wide { self as $wide }

                #[inline(always)]
                fn narrow(wide: $wide) -> Self { wide as $t }

                #[inline(always)]
                fn to_i128(self) -> i128 { self as i128 }

                #[inline(always)]
                fn wrap_i128(v: i128) -> Self { v as $t }

                #[inline(always)]
                fn to_f64(self) -> f64 { self as f64 }

                #[inline(always)]
                fn saturate_f64(v: f64) -> Self { v as $t }

                #[inline(always)]
                fn bit_pattern(self) -> u128 { self as $unsigned as u128 }
            }
        )*
    };
}

impl_fixed_storage!(
    i8 => i16, u8, true;
    i16 => i32, u16, true;
    i32 => i64, u32, true;
    i64 => i128, u64, true;
    u8 => u16, u8, false;
    u16 => u32, u16, false;
    u32 => u64, u32, false;
    u64 => u128, u64, false;
);

/// Powers of two used as the fixed-point scale, as `f64`.
#[inline(always)]
pub(crate) fn scale_f64(frac: u32) -> f64 { (1u128 << frac) as f64 }
