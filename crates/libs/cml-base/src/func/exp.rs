use super::{check_nan, count, diverged, unchecked_forms, MAX_ITERATIONS};
use crate::{equality::is_equal, error::DomainError, real::Real};

/// Taylor series of `e^x` for `|x| <= 1`, each term derived from the
/// previous one as `term * x / n`.
pub(crate) fn exp_series<T: Real>(x: T) -> T {
    let mut sum = T::ONE;
    let mut term = T::ONE;
    for n in 1..MAX_ITERATIONS {
        term = term * x / count(n);
        let next = sum + term;
        if is_equal(sum, next) {
            log::trace!("exp series for {x} converged after {n} terms");
            return next;
        }
        sum = next;
    }
    diverged("exp")
}

/// Exponential function.
///
/// The argument is halved until it lies in `[-1, 1]`, the series is summed
/// there and the result squared back as many times. A result above
/// [`Real::MAX`] is infinity for floating-point types and a
/// [`DomainError::Overflow`] for fixed-point formats.
pub fn try_exp<T: Real>(x: T) -> Result<T, DomainError> {
    check_nan(x, "exp")?;
    if !x.is_finite() {
        return Ok(if x > T::ZERO { x } else { T::ZERO });
    }
    let half = T::from_f64(0.5);
    let mut reduced = x;
    let mut halvings = 0usize;
    while reduced.abs() > T::ONE {
        reduced = reduced * half;
        halvings += 1;
    }
    let mut result = exp_series(reduced);
    for _ in 0..halvings {
        if result > T::ONE && result > T::MAX / result {
            return T::INFINITY.ok_or(DomainError::Overflow {
                function: "exp",
                value: x.to_f64(),
            });
        }
        result = result * result;
    }
    Ok(result)
}

unchecked_forms!(exp => try_exp, "Exponential function, see [`try_exp`].");

/// Natural logarithm.
///
/// The input is first scaled by powers of two into `[0.5, 2[`, so that
/// `log(x) = log(v) + k ln 2`. The reduced `log(v)` solves `e^y = v` with
/// the iteration `y = y + 2 (v - e^y) / (v + e^y)` starting from `y = 0`;
/// every intermediate stays below 4 and fits even the narrow fixed-point
/// formats.
pub fn try_log<T: Real>(x: T) -> Result<T, DomainError> {
    check_nan(x, "log")?;
    if x <= T::ZERO {
        return Err(DomainError::NonPositiveLog(x.to_f64()));
    }
    if !x.is_finite() {
        return Ok(x);
    }

    let half = T::from_f64(0.5);
    let mut v = x;
    let mut k = 0i32;
    while v.to_f64() >= 2.0 {
        v = v * half;
        k += 1;
    }
    while v.to_f64() < 0.5 {
        v = v + v;
        k -= 1;
    }
    if k != 0 {
        log::debug!("log({x}): reduced to log({v}) + {k} ln 2");
    }

    let mut prev = T::ZERO;
    let mut y = T::ZERO;
    for i in 0..MAX_ITERATIONS {
        let ey = exp_of_reduced(y);
        let next = y + (v - ey) / (v * half + ey * half);
        if is_equal(next, y) || (i > 0 && next == prev) {
            log::trace!("log({x}) converged after {i} iterations");
            return Ok(next + T::from_f64(f64::from(k) * core::f64::consts::LN_2));
        }
        prev = y;
        y = next;
    }
    diverged("log")
}

unchecked_forms!(log => try_log, "Natural logarithm, see [`try_log`].");

/// `e^y` for the finite iterates of the logarithm.
#[inline]
fn exp_of_reduced<T: Real>(y: T) -> T {
    match try_exp(y) {
        Ok(v) => v,
        Err(_) => diverged("log"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::{F1616, F88};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn exp_of_one() {
        assert_relative_eq!(exp(1.0f64), 2.718281828459045, max_relative = 1.0e-15);
        assert_relative_eq!(exp(1.0f32), core::f32::consts::E, max_relative = 4.0 * f32::EPSILON);
        assert_eq!(exp(0.0f64), 1.0);
    }

    #[test]
    fn exp_with_range_reduction() {
        assert_relative_eq!(exp(10.0f64), 22026.465794806718, max_relative = 1.0e-13);
        assert_relative_eq!(exp(-10.0f64), 4.5399929762484854e-5, max_relative = 1.0e-13);
        assert_relative_eq!(exp(-1.0f64), 0.36787944117144233, max_relative = 1.0e-14);
        assert_eq!(exp(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp(f64::NEG_INFINITY), 0.0);
        assert_eq!(exp(1000.0f64), f64::INFINITY);
    }

    #[test]
    fn exp_of_fixed() {
        assert_abs_diff_eq!(exp(F1616::from_num(1)).to_f64(), core::f64::consts::E, epsilon = 1.0e-3);
        assert_abs_diff_eq!(exp(F88::from_num(2)).to_f64(), 7.38905609893065, epsilon = 0.1);
    }

    #[test]
    fn exp_overflowing_a_fixed_format() {
        assert_eq!(
            try_exp(F1616::from_num(11)),
            Err(DomainError::Overflow { function: "exp", value: 11.0 })
        );
        assert!(try_exp(F88::from_num(5)).is_err());
        assert_abs_diff_eq!(exp(F1616::from_num(10)).to_f64(), 22026.465794806718, epsilon = 20.0);
        assert_eq!(exp(F1616::from_num(-20)), F1616::ZERO);
    }

    #[test]
    #[should_panic(expected = "exp(11) overflows the number format")]
    fn exp_overflow_panics() { exp(F1616::from_num(11)); }

    #[test]
    fn log_values() {
        assert_eq!(log(1.0f64), 0.0);
        assert_relative_eq!(log(core::f64::consts::E), 1.0, max_relative = 2.0e-15);
        assert_relative_eq!(log(2.0f64), core::f64::consts::LN_2, max_relative = 4.0e-15);
        assert_relative_eq!(log(10.0f32), core::f32::consts::LN_10, max_relative = 1.0e-6);
    }

    #[test]
    fn log_with_range_reduction() {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_relative_eq!(log(1.0e6f64), 13.815510557964274, max_relative = 1.0e-14);
        assert_relative_eq!(log(1.0e-6f64), -13.815510557964274, max_relative = 1.0e-14);
        assert_relative_eq!(log(f64::MAX), 709.782712893384, max_relative = 1.0e-14);
        assert_eq!(log(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn log_of_fixed() {
        assert_abs_diff_eq!(log(F1616::from_num(8)).to_f64(), 2.0794415416798357, epsilon = 1.0e-3);
        assert_abs_diff_eq!(log(F1616::from_num(30000)).to_f64(), 10.308952660644293, epsilon = 1.0e-3);
        assert_abs_diff_eq!(log(F1616::EPSILON).to_f64(), -11.090354888959125, epsilon = 1.0e-3);
    }

    #[test]
    fn log_of_narrow_fixed_format() {
        assert_abs_diff_eq!(log(F88::from_num(100)).to_f64(), 4.605170185988092, epsilon = 0.05);
        assert_abs_diff_eq!(log(F88::from_num(70)).to_f64(), 4.248495242049359, epsilon = 0.05);
        assert_abs_diff_eq!(log(F88::MAX).to_f64(), 4.852030263919617, epsilon = 0.05);
        assert_abs_diff_eq!(log(F88::from_num(0.25)).to_f64(), -1.3862943611198906, epsilon = 0.05);
    }

    #[test]
    fn log_domain() {
        assert_eq!(try_log(0.0f64), Err(DomainError::NonPositiveLog(0.0)));
        assert_eq!(try_log(-2.0f32), Err(DomainError::NonPositiveLog(-2.0)));
        assert!(try_log(F1616::ZERO).is_err());
        assert_eq!(try_exp(f64::NAN), Err(DomainError::NotANumber("exp")));
    }

    proptest! {
        #[test]
        fn log_inverts_exp(x in -20.0f64..20.0) {
            let y = log(exp(x));
            prop_assert!((y - x).abs() <= 1.0e-12 * x.abs().max(1.0));
        }

        #[test]
        fn exp_matches_libm(x in -50.0f64..50.0) {
            let expected = libm::exp(x);
            prop_assert!(((exp(x) - expected) / expected).abs() <= 1.0e-13);
        }
    }
}
