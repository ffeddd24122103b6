use super::{storage::scale_f64, Fixed, FixedStorage, F1616, F3232, F4816, F824, F88, UF032};
use num_traits::AsPrimitive;

/// Primitive numbers convertible to and from fixed-point storage.
pub trait FixedConvert: Copy + 'static {
    /// Scales `self` by `2^frac` and truncates it into the storage `S`.
    fn to_fixed_bits<S: FixedStorage>(self, frac: u32) -> S;

    /// Converts raw storage with `frac` fractional bits back into `Self`.
    fn from_fixed_bits<S: FixedStorage>(bits: S, frac: u32) -> Self;
}

macro_rules! impl_fixed_convert_int {
    ($($t:ty),*) => {
        $(
            impl FixedConvert for $t {
                #[inline]
                fn to_fixed_bits<S: FixedStorage>(self, frac: u32) -> S {
                    S::wrap_i128((self as i128) << frac)
                }

                #[inline]
                fn from_fixed_bits<S: FixedStorage>(bits: S, frac: u32) -> Self {
                    // Integer division truncates toward zero.
                    (bits.to_i128() / (1i128 << frac)) as $t
                }
            }
        )*
    };
}

macro_rules! impl_fixed_convert_float {
    ($($t:ty),*) => {
        $(
            impl FixedConvert for $t {
                fn to_fixed_bits<S: FixedStorage>(self, frac: u32) -> S {
                    let scaled = self as f64 * scale_f64(frac);
                    let (lo, hi) = (S::MIN.to_f64(), S::MAX.to_f64());
                    if !(scaled >= lo && scaled <= hi) {
                        log::warn!(
                            "{} does not fit a fixed-point format with {} fractional bits, saturating",
                            self,
                            frac
                        );
                    }
                    S::saturate_f64(scaled)
                }

                #[inline]
                fn from_fixed_bits<S: FixedStorage>(bits: S, frac: u32) -> Self {
                    (bits.to_f64() / scale_f64(frac)) as $t
                }
            }
        )*
    };
}

impl_fixed_convert_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_fixed_convert_float!(f32, f64);

macro_rules! impl_as_primitive {
    ($($t:ty),*) => {
        $(
            impl<S: FixedStorage, const F: u32> AsPrimitive<$t> for Fixed<S, F> {
                #[inline]
                fn as_(self) -> $t { self.to_num() }
            }

            impl<S: FixedStorage, const F: u32> AsPrimitive<Fixed<S, F>> for $t {
                #[inline]
                fn as_(self) -> Fixed<S, F> { Fixed::from_num(self) }
            }
        )*
    };
}

impl_as_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<S1, S2, const F1: u32, const F2: u32> AsPrimitive<Fixed<S2, F2>> for Fixed<S1, F1>
where
    S1: FixedStorage,
    S2: FixedStorage,
{
    #[inline]
    fn as_(self) -> Fixed<S2, F2> { Fixed::from_fixed(self) }
}

/// Conversions that never lose information: both the integer and the
/// fractional part of the destination are at least as wide as the source's.
macro_rules! impl_lossless_from {
    (fixed $($src:ty => $($dst:ty),+);* $(;)?) => {
        $($(
            impl From<$src> for $dst {
                #[inline]
                fn from(value: $src) -> Self { Self::from_fixed(value) }
            }
        )+)*
    };
    (prim $($src:ty => $($dst:ty),+);* $(;)?) => {
        $($(
            impl From<$src> for $dst {
                #[inline]
                fn from(value: $src) -> Self { Self::from_num(value) }
            }
        )+)*
    };
    (into $($src:ty => $($dst:ty),+);* $(;)?) => {
        $($(
            impl From<$src> for $dst {
                #[inline]
                fn from(value: $src) -> Self { value.to_num() }
            }
        )+)*
    };
}

impl_lossless_from!(fixed
    F88 => F1616, F824, F3232, F4816;
    F1616 => F3232, F4816;
    F824 => F3232;
    UF032 => F3232;
);

impl_lossless_from!(prim
    i8 => F88, F1616, F824, F3232, F4816;
    i16 => F1616, F3232, F4816;
    i32 => F3232, F4816;
    u8 => F1616, F3232, F4816;
    u16 => F3232, F4816;
    u32 => F4816;
);

impl_lossless_from!(into
    F88 => f32, f64;
    F1616 => f64;
    F824 => f64;
    UF032 => f64;
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_truncate_toward_zero() {
        assert_eq!(i32::from_fixed_bits(-0x0280i16, 8), -2);
        assert_eq!(i32::from_fixed_bits(0x0280i16, 8), 2);
        assert_eq!(u8::from_fixed_bits(0x01ffu16, 8), 1);
        assert_eq!(7i32.to_fixed_bits::<i32>(16), 7 << 16);
    }

    #[test]
    fn floats_scale_by_power_of_two() {
        assert_eq!(0.75f32.to_fixed_bits::<i16>(8), 192);
        assert_eq!(f64::from_fixed_bits(192i16, 8), 0.75);
        assert_eq!(0.5f64.to_fixed_bits::<u32>(32), 1 << 31);
    }

    #[test]
    fn out_of_range_floats_saturate() {
        assert_eq!(1000.0f64.to_fixed_bits::<i16>(8), i16::MAX);
        assert_eq!((-1000.0f32).to_fixed_bits::<i16>(8), i16::MIN);
    }

    #[test]
    fn as_primitive_truncates() {
        let a: F88 = 3.75f32.as_();
        assert_eq!(a, F88::from_num(3.75));
        let i: i32 = a.as_();
        assert_eq!(i, 3);
        let narrow: F88 = F1616::from_num(1.5).as_();
        assert_eq!(narrow, F88::from_num(1.5));
    }

    #[test]
    fn lossless_conversions() {
        assert_eq!(F1616::from(F88::from_num(-2.5)), F1616::from_num(-2.5));
        assert_eq!(F3232::from(UF032::from_num(0.25)), F3232::from_num(0.25));
        assert_eq!(F88::from(-128i8), F88::from_num(-128));
        assert_eq!(F1616::from(255u8), F1616::from_num(255));
        assert_eq!(f64::from(F824::from_num(-0.125)), -0.125);
        assert_eq!(f32::from(F88::from_num(1.5)), 1.5);
    }
}
