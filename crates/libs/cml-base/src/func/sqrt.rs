use super::{check_nan, diverged, unchecked_forms, MAX_ITERATIONS};
use crate::{
    equality::is_equal,
    error::DomainError,
    fixed::{Fixed, FixedStorage},
    real::Real,
};

/// Square root.
///
/// Fails for negative inputs. Zero and infinity are returned unchanged.
pub fn try_sqrt<T: Real>(x: T) -> Result<T, DomainError> {
    check_nan(x, "sqrt")?;
    if x < T::ZERO {
        return Err(DomainError::NegativeSqrt(x.to_f64()));
    }
    if x == T::ZERO || !x.is_finite() {
        return Ok(x);
    }
    Ok(x.sqrt_kernel())
}

unchecked_forms!(sqrt => try_sqrt, "Square root, see [`try_sqrt`].");

/// Babylonian iteration `y = (y + x / y) / 2` seeded with `y = x`.
///
/// Stops when two successive iterates are tolerantly equal, or when the
/// iteration falls into a two-cycle between neighbouring values.
pub(crate) fn newton<T: Real>(x: T) -> T {
    let two = T::ONE + T::ONE;
    let mut prev = x;
    let mut y = x;
    for i in 0..MAX_ITERATIONS {
        let next = (y + x / y) / two;
        if is_equal(next, y) || next == prev {
            log::trace!("sqrt({x}) converged after {i} iterations");
            return next;
        }
        prev = y;
        y = next;
    }
    diverged("sqrt")
}

/// Digit-by-digit integer square root.
fn isqrt(n: u128) -> u128 {
    let mut rem = n;
    let mut root = 0u128;
    let mut bit = 1u128 << 126;
    while bit > n {
        bit >>= 2;
    }
    while bit != 0 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    root
}

/// Bit-by-bit square root of a non-negative fixed-point value.
///
/// `sqrt(bits / 2^F) * 2^F = sqrt(bits * 2^F)`, so the result is the integer
/// square root of the storage pre-shifted by the fractional bits, truncated.
pub(crate) fn bitwise<S: FixedStorage, const F: u32>(x: Fixed<S, F>) -> Fixed<S, F> {
    let bits = x.to_bits().to_i128();
    debug_assert!(bits >= 0);
    let root = isqrt((bits as u128) << F);
    Fixed::from_bits(S::wrap_i128(root as i128))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::{F1616, F88};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn perfect_squares() {
        assert_eq!(sqrt(4.0f64), 2.0);
        assert_eq!(sqrt(0.25f32), 0.5);
        assert_eq!(sqrt(1.0f64), 1.0);
        assert_eq!(sqrt(0.0f64), 0.0);
        assert_eq!(sqrt(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn square_of_root() {
        let r = sqrt(5.0f64);
        assert_relative_eq!(r * r, 5.0, max_relative = 4.0 * f64::EPSILON);
        assert_relative_eq!(sqrt(2.0f32), core::f32::consts::SQRT_2, max_relative = f32::EPSILON);
    }

    #[test]
    fn extreme_magnitudes() {
        assert_relative_eq!(sqrt(1.0e300f64), 1.0e150, max_relative = 1.0e-15);
        assert_relative_eq!(sqrt(1.0e-300f64), 1.0e-150, max_relative = 1.0e-15);
        assert_relative_eq!(sqrt(f64::MAX), 1.3407807929942596e154, max_relative = 1.0e-15);
    }

    #[test]
    fn negative_input_is_a_domain_error() {
        assert_eq!(try_sqrt(-1.0f64), Err(DomainError::NegativeSqrt(-1.0)));
        assert!(matches!(
            try_sqrt(f32::NAN),
            Err(DomainError::NotANumber("sqrt"))
        ));
        assert!(try_sqrt(F88::from_num(-0.5)).is_err());
    }

    #[test]
    #[should_panic(expected = "square root of a negative number")]
    fn unchecked_form_panics() { sqrt(-4.0f32); }

    #[test]
    fn fixed_point_roots() {
        assert_eq!(sqrt(F88::from_num(4)), F88::from_num(2));
        assert_eq!(sqrt(F88::from_num(0.25)), F88::from_num(0.5));
        assert_eq!(sqrt(F1616::from_num(2.25)), F1616::from_num(1.5));
        // Truncated, within one step of the true root.
        let r = sqrt(F1616::from_num(2)).to_f64();
        assert!((r - core::f64::consts::SQRT_2).abs() < F1616::EPSILON.to_f64());
        assert!(r <= core::f64::consts::SQRT_2);
    }

    #[test]
    fn integer_square_root() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(15), 3);
        assert_eq!(isqrt(16), 4);
        assert_eq!(isqrt(u64::MAX as u128), u32::MAX as u128);
    }

    proptest! {
        #[test]
        fn root_squares_back(x in 1.0e-6f64..1.0e6) {
            let r = sqrt(x);
            prop_assert!(((r * r - x) / x).abs() <= 4.0 * f64::EPSILON);
        }

        #[test]
        fn fixed_root_is_floor(bits in 0i32..i32::MAX) {
            let x = F1616::from_bits(bits);
            let r = sqrt(x).to_bits() as i128;
            let n = (bits as i128) << 16;
            prop_assert!(r * r <= n && (r + 1) * (r + 1) > n);
        }
    }
}
