//! Tolerant comparisons.
//!
//! These predicates drive the convergence tests of the iterative functions
//! and are what callers reach for when exact `==` is too strict.

use crate::real::Real;

/// Equality test tolerating one unit of epsilon scaled by the magnitude of
/// the operands, with an absolute floor of the smallest positive value.
///
/// # Arguments
///
/// * `a`: The first number.
/// * `b`: The second number.
///
/// returns: bool
#[inline]
pub fn is_equal<T: Real>(a: T, b: T) -> bool { is_equal_ulps(a, b, 1) }

/// Same as [`is_equal`] with the relative tolerance widened to `ulps` units
/// of epsilon.
pub fn is_equal_ulps<T: Real>(a: T, b: T, ulps: u32) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    let scale = T::from_f64(ulps as f64);
    diff <= T::EPSILON * (a + b).abs() * scale || diff <= T::MIN_POSITIVE
}

/// Whether `a` and `b` differ by at most `tolerance`.
#[inline]
pub fn is_close<T: Real>(a: T, b: T, tolerance: T) -> bool { (a - b).abs() <= tolerance }

/// Whether `a` is within one epsilon of zero.
#[inline]
pub fn is_close_zero<T: Real>(a: T) -> bool { a.abs() <= T::EPSILON }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::{F1616, F88};

    #[test]
    fn exact_and_adjacent_floats() {
        assert!(is_equal(1.0f64, 1.0));
        assert!(is_equal(1.0f64, 1.0 + f64::EPSILON));
        assert!(!is_equal(1.0f64, 1.0 + 4.0 * f64::EPSILON));
        assert!(is_equal(f32::INFINITY, f32::INFINITY));
        assert!(!is_equal(f64::NAN, f64::NAN));
    }

    #[test]
    fn scaled_by_magnitude() {
        let big = 1.0e20f64;
        assert!(is_equal(big, big + big * f64::EPSILON));
        assert!(!is_equal(big, big * 1.000001));
        assert!(is_equal_ulps(1.0f32, 1.0 + 3.0 * f32::EPSILON, 4));
    }

    #[test]
    fn absolute_floor_near_zero() {
        assert!(is_equal(0.0f64, f64::MIN_POSITIVE));
        assert!(!is_equal(0.0f64, 1.0e-300));
        assert!(is_equal(F88::ZERO, F88::EPSILON));
        assert!(!is_equal(F88::ZERO, F88::EPSILON + F88::EPSILON));
    }

    #[test]
    fn closeness() {
        assert!(is_close(1.0f32, 1.05, 0.1));
        assert!(!is_close(1.0f32, 1.2, 0.1));
        assert!(is_close_zero(f64::EPSILON * 0.5));
        assert!(!is_close_zero(1.0e-10f64));
        assert!(is_close_zero(F1616::EPSILON));
    }
}
