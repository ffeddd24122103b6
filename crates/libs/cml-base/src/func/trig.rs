use super::{check_nan, count, diverged, unchecked_forms, MAX_ITERATIONS};
use crate::{equality::is_equal, error::DomainError, real::Real};
use core::f64::consts::FRAC_PI_2;

/// Binary expansion of 2/π, most significant bit first: bit `j` of the
/// fraction is bit `63 - (j - 1) % 64` of word `(j - 1) / 64`. Long enough
/// for the exponent range of `f64`.
const TWO_OVER_PI: [u64; 20] = [
    0xA2F9836E4E441529, 0xFC2757D1F534DDC0, 0xDB6295993C439041, 0xFE5163ABDEBBC561,
    0xB7246E3A424DD2E0, 0x06492EEA09D1921C, 0xFE1DEB1CB129A73E, 0xE88235F52EBB4484,
    0xE99C7026B45F7E41, 0x3991D639835339F4, 0x9C845F8BBDF9283B, 0x1FF897FFDE05980F,
    0xEF2F118B5A0A6D1F, 0x6D367ECF27CB09B7, 0x4F463F669E5FEA2D, 0x7527BAC7EBE5F17B,
    0x3D0739F78A5292EA, 0x6BFB5FB11F8D5D08, 0x56033046FC7B6BAB, 0xF0CFBC209AF4361D,
];

/// `2^-128`.
const TWO_POW_MINUS_128: f64 = 2.938735877055719e-39;

/// Fraction bits `start + 1 ..= start + 192` of 2/π, most significant word
/// first.
fn two_over_pi_window(start: usize) -> [u64; 3] {
    let (word, shift) = (start / 64, start % 64);
    let mut window = [0u64; 3];
    for (i, w) in window.iter_mut().enumerate() {
        let hi = TWO_OVER_PI[word + i];
        let lo = TWO_OVER_PI.get(word + i + 1).copied().unwrap_or(0);
        *w = if shift == 0 {
            hi
        } else {
            (hi << shift) | (lo >> (64 - shift))
        };
    }
    window
}

/// Exact reduction of a finite `|x| > π` into `[-π, π]`.
///
/// With `|x| = m 2^e`, only the bits of 2/π from position `e - 1` on
/// contribute to `x 2/π mod 4`; the product of `m` with a 192-bit window of
/// them yields the quadrant and a 128-bit fraction of a quarter turn.
fn reduce_f64(x: f64) -> f64 {
    let bits = x.to_bits();
    let m = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
    let e = ((bits >> 52) & 0x7ff) as i64 - 1075;
    let start = (e - 2).max(0);
    let shift = (192 + start - e) as u32;

    let window = two_over_pi_window(start as usize);
    let mut limbs = [0u64; 4];
    let mut carry = 0u128;
    for (limb, w) in limbs.iter_mut().zip(window.iter().rev()) {
        let t = u128::from(m) * u128::from(*w) + carry;
        *limb = t as u64;
        carry = t >> 64;
    }
    limbs[3] = carry as u64;
    let lo = u128::from(limbs[0]) | (u128::from(limbs[1]) << 64);
    let hi = u128::from(limbs[2]) | (u128::from(limbs[3]) << 64);
    let bits_from = |offset: u32| -> u128 {
        if offset >= 128 {
            hi >> (offset - 128)
        } else {
            (lo >> offset) | (hi << (128 - offset))
        }
    };

    let mut quadrant = (bits_from(shift) & 3) as i32;
    let fraction = bits_from(shift - 128);
    let quarter = if fraction >> 127 == 1 {
        quadrant += 1;
        -(fraction.wrapping_neg() as f64) * TWO_POW_MINUS_128
    } else {
        fraction as f64 * TWO_POW_MINUS_128
    };
    let quadrant = match quadrant & 3 {
        3 => -1,
        2 if quarter > 0.0 => -2,
        q => q,
    };
    let reduced = f64::from(quadrant) * FRAC_PI_2 + quarter * FRAC_PI_2;
    if x < 0.0 {
        -reduced
    } else {
        reduced
    }
}

/// Brings a finite angle into `[-π, π]` by removing whole turns.
fn reduce_angle<T: Real>(x: T) -> T {
    if x.abs() <= T::PI {
        return x;
    }
    let reduced = T::from_f64(reduce_f64(x.to_f64()));
    debug_assert!(reduced.abs() <= T::PI);
    reduced
}

/// Alternating Taylor series shared by sine and cosine.
///
/// Starting from `first`, each term is the previous one multiplied by
/// `-x²/(i (i + 1))`, with `i` advancing by two: the sign alternates and the
/// factorial denominator moves two terms at a time.
fn alternating_series<T: Real>(x2: T, first: T, mut i: usize) -> T {
    let mut sum = first;
    let mut term = first;
    for _ in 0..MAX_ITERATIONS {
        term = -(term * x2 / count(i) / count(i + 1));
        let next = sum + term;
        if is_equal(sum, next) {
            return next;
        }
        sum = next;
        i += 2;
    }
    diverged("trigonometric series")
}

/// Sine of an angle in radians.
pub fn try_sin<T: Real>(x: T) -> Result<T, DomainError> {
    check_nan(x, "sin")?;
    if !x.is_finite() {
        return Err(DomainError::OutOfDomain {
            function: "sin",
            value: x.to_f64(),
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        });
    }
    let x = reduce_angle(x);
    Ok(alternating_series(x * x, x, 2))
}

/// Cosine of an angle in radians.
pub fn try_cos<T: Real>(x: T) -> Result<T, DomainError> {
    check_nan(x, "cos")?;
    if !x.is_finite() {
        return Err(DomainError::OutOfDomain {
            function: "cos",
            value: x.to_f64(),
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        });
    }
    let x = reduce_angle(x);
    Ok(alternating_series(x * x, T::ONE, 1))
}

/// Tangent of an angle in radians, `sin(x) / cos(x)`.
///
/// Fails where the computed cosine is exactly zero.
pub fn try_tan<T: Real>(x: T) -> Result<T, DomainError> {
    let s = try_sin(x)?;
    let c = try_cos(x)?;
    if c == T::ZERO {
        return Err(DomainError::Pole(x.to_f64()));
    }
    Ok(s / c)
}

unchecked_forms!(
    sin => try_sin, "Sine, see [`try_sin`].";
    cos => try_cos, "Cosine, see [`try_cos`].";
    tan => try_tan, "Tangent, see [`try_tan`].";
);
