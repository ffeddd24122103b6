use super::{check_nan, count, diverged, sqrt::try_sqrt, unchecked_forms, MAX_ITERATIONS};
use crate::{equality::is_equal, error::DomainError, real::Real};

fn out_of_unit_interval<T: Real>(function: &'static str, x: T) -> DomainError {
    DomainError::OutOfDomain {
        function,
        value: x.to_f64(),
        lower: -1.0,
        upper: 1.0,
    }
}

/// Maclaurin series of `asin` for `|x| <= 1/2`.
///
/// The ratio of two consecutive terms is `x² (2k+1)² / ((2k+2)(2k+3))`.
fn asin_series<T: Real>(x: T) -> T {
    let x2 = x * x;
    let mut sum = x;
    let mut term = x;
    for k in 0..MAX_ITERATIONS {
        let odd = 2 * k + 1;
        term = term * x2 * count(odd * odd) / count((odd + 1) * (odd + 2));
        let next = sum + term;
        if is_equal(sum, next) {
            return next;
        }
        sum = next;
    }
    diverged("asin")
}

/// Arcsine, in `[-π/2, π/2]`.
///
/// The boundary values `-1, 0, 1` map to their exact results. Inputs with
/// `|x| > 1/2` use `asin(x) = π/2 - 2 asin(sqrt((1 - x) / 2))` so that the
/// series never runs close to the edge of its domain.
pub fn try_asin<T: Real>(x: T) -> Result<T, DomainError> {
    check_nan(x, "asin")?;
    let a = x.abs();
    if a > T::ONE {
        return Err(out_of_unit_interval("asin", x));
    }
    if x == T::ZERO {
        return Ok(T::ZERO);
    }
    if a == T::ONE {
        return Ok(if x > T::ZERO { T::HALF_PI } else { -T::HALF_PI });
    }
    let two = T::ONE + T::ONE;
    if a > T::ONE / two {
        let r = T::HALF_PI - two * asin_series(try_sqrt((T::ONE - a) / two)?);
        return Ok(if x < T::ZERO { -r } else { r });
    }
    Ok(asin_series(x))
}

/// Arccosine, in `[0, π]`, computed as `π/2 - asin(x)` with exact results
/// at `-1, 0, 1`.
pub fn try_acos<T: Real>(x: T) -> Result<T, DomainError> {
    check_nan(x, "acos")?;
    if x.abs() > T::ONE {
        return Err(out_of_unit_interval("acos", x));
    }
    if x == T::ONE {
        return Ok(T::ZERO);
    }
    if x == -T::ONE {
        return Ok(T::PI);
    }
    Ok(T::HALF_PI - try_asin(x)?)
}

/// Euler's series of `atan` for `|x| <= 1`:
///
/// `atan(x) = x / (1 + x²) Σ_n Π_{k=1..n} 2k x² / ((2k + 1)(1 + x²))`.
fn atan_euler<T: Real>(x: T) -> T {
    let x2 = x * x;
    let d = T::ONE + x2;
    let ratio = x2 / d;
    let mut sum = T::ONE;
    let mut product = T::ONE;
    for k in 1..MAX_ITERATIONS {
        product = product * ratio * count(2 * k) / count(2 * k + 1);
        let next = sum + product;
        if is_equal(sum, next) {
            return x / d * next;
        }
        sum = next;
    }
    diverged("atan")
}

/// Arctangent, in `[-π/2, π/2]`.
///
/// Inputs with `|x| > 1` use `atan(x) = ±π/2 - atan(1/x)`.
pub fn try_atan<T: Real>(x: T) -> Result<T, DomainError> {
    check_nan(x, "atan")?;
    if !x.is_finite() {
        return Ok(if x > T::ZERO { T::HALF_PI } else { -T::HALF_PI });
    }
    if x.abs() > T::ONE {
        let r = T::HALF_PI - atan_euler(T::ONE / x.abs());
        return Ok(if x < T::ZERO { -r } else { r });
    }
    Ok(atan_euler(x))
}

/// Angle of the point `(x, y)` from the positive x axis, in `]-π, π]`.
///
/// The angle to the nearer axis is computed from the ratio of the smaller
/// magnitude to the larger one, which never exceeds one, then moved into
/// the quadrant given by the signs of `x` and `y`. The origin has no angle
/// and is reported as [`DomainError::UndefinedAtan2`].
pub fn try_atan2<T: Real>(y: T, x: T) -> Result<T, DomainError> {
    check_nan(y, "atan2")?;
    check_nan(x, "atan2")?;
    if x == T::ZERO && y == T::ZERO {
        return Err(DomainError::UndefinedAtan2);
    }
    let (ax, ay) = (x.abs(), y.abs());
    let first_quadrant = if !ax.is_finite() && !ay.is_finite() {
        T::HALF_PI * T::from_f64(0.5)
    } else if ay <= ax {
        atan_euler(ay / ax)
    } else {
        T::HALF_PI - atan_euler(ax / ay)
    };
    let angle = if x < T::ZERO {
        T::PI - first_quadrant
    } else {
        first_quadrant
    };
    Ok(if y < T::ZERO { -angle } else { angle })
}

/// Two-argument arctangent, see [`try_atan2`].
///
/// # Panics
///
/// Panics at the origin.
#[inline]
#[track_caller]
pub fn atan2<T: Real>(y: T, x: T) -> T { crate::error::raise(try_atan2(y, x)) }

unchecked_forms!(
    asin => try_asin, "Arcsine, see [`try_asin`].";
    acos => try_acos, "Arccosine, see [`try_acos`].";
    atan => try_atan, "Arctangent, see [`try_atan`].";
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fixed::F1616,
        func::{sin, tan},
    };
    use approx::assert_abs_diff_eq;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, PI};
    use proptest::prelude::*;

    #[test]
    fn boundary_values_are_exact() {
        assert_eq!(asin(1.0f64), FRAC_PI_2);
        assert_eq!(asin(-1.0f64), -FRAC_PI_2);
        assert_eq!(asin(0.0f32), 0.0);
        assert_eq!(acos(1.0f64), 0.0);
        assert_eq!(acos(-1.0f64), PI);
        assert_eq!(acos(0.0f64), FRAC_PI_2);
    }

    #[test]
    fn inverse_sine_and_cosine() {
        assert_abs_diff_eq!(asin(0.5f64), FRAC_PI_6, epsilon = 1.0e-15);
        assert_abs_diff_eq!(asin(0.99f64), libm::asin(0.99), epsilon = 1.0e-14);
        assert_abs_diff_eq!(asin(-0.75f64), libm::asin(-0.75), epsilon = 1.0e-14);
        assert_abs_diff_eq!(acos(0.5f64), PI / 3.0, epsilon = 1.0e-14);
        assert_abs_diff_eq!(acos(-0.3f32), libm::acosf(-0.3), epsilon = 1.0e-6);
    }

    #[test]
    fn out_of_domain() {
        assert!(matches!(
            try_asin(1.5f64),
            Err(DomainError::OutOfDomain { function: "asin", .. })
        ));
        assert!(matches!(
            try_acos(-1.01f32),
            Err(DomainError::OutOfDomain { function: "acos", .. })
        ));
    }

    #[test]
    fn arctangent() {
        assert_eq!(atan(0.0f64), 0.0);
        assert_abs_diff_eq!(atan(1.0f64), FRAC_PI_4, epsilon = 1.0e-15);
        assert_abs_diff_eq!(atan(-1.0e6f64), libm::atan(-1.0e6), epsilon = 1.0e-14);
        assert_abs_diff_eq!(atan(3.0f32), libm::atanf(3.0), epsilon = 1.0e-6);
        assert_eq!(atan(f64::INFINITY), FRAC_PI_2);
        assert_abs_diff_eq!(tan(atan(0.3f64)), 0.3, epsilon = 1.0e-15);
    }

    #[test]
    fn two_argument_arctangent_quadrants() {
        assert_abs_diff_eq!(atan2(1.0f64, 1.0), FRAC_PI_4, epsilon = 1.0e-15);
        assert_abs_diff_eq!(atan2(1.0f64, -1.0), 3.0 * FRAC_PI_4, epsilon = 1.0e-15);
        assert_abs_diff_eq!(atan2(-1.0f64, -1.0), -3.0 * FRAC_PI_4, epsilon = 1.0e-15);
        assert_abs_diff_eq!(atan2(-1.0f64, 1.0), -FRAC_PI_4, epsilon = 1.0e-15);
        assert_abs_diff_eq!(atan2(0.0f64, -2.0), PI, epsilon = 1.0e-15);
        assert_eq!(atan2(3.0f64, 0.0), FRAC_PI_2);
        assert_eq!(atan2(-3.0f64, 0.0), -FRAC_PI_2);
        assert_eq!(try_atan2(0.0f64, 0.0), Err(DomainError::UndefinedAtan2));
        assert_abs_diff_eq!(atan2(f64::INFINITY, -f64::INFINITY), 3.0 * FRAC_PI_4, epsilon = 1.0e-15);
        assert_eq!(atan2(-1.0f64, f64::INFINITY), 0.0);
    }

    #[test]
    fn fixed_point_atan2_near_the_axes() {
        let tiny = F1616::EPSILON;
        let hundred = F1616::from_num(100);
        assert_abs_diff_eq!(try_atan2(hundred, tiny).unwrap().to_f64(), FRAC_PI_2, epsilon = 1.0e-3);
        assert_abs_diff_eq!(try_atan2(-hundred, tiny).unwrap().to_f64(), -FRAC_PI_2, epsilon = 1.0e-3);
        assert_abs_diff_eq!(atan2(hundred, -tiny).to_f64(), FRAC_PI_2, epsilon = 1.0e-3);
        assert_abs_diff_eq!(atan2(tiny, -hundred).to_f64(), PI, epsilon = 1.0e-3);
        assert_abs_diff_eq!(
            atan2(F1616::from_num(-3), F1616::from_num(-4)).to_f64(),
            libm::atan2(-3.0, -4.0),
            epsilon = 1.0e-3
        );
    }

    #[test]
    #[should_panic(expected = "atan2 is undefined at the origin")]
    fn atan2_origin_panics() { atan2(0.0f32, 0.0); }

    #[test]
    fn fixed_point_inverses() {
        assert_abs_diff_eq!(asin(F1616::from_num(0.5)).to_f64(), FRAC_PI_6, epsilon = 1.0e-3);
        assert_abs_diff_eq!(atan(F1616::from_num(2)).to_f64(), libm::atan(2.0), epsilon = 1.0e-3);
    }

    proptest! {
        #[test]
        fn sine_inverts_arcsine(x in -0.999_999f64..0.999_999) {
            prop_assert!((sin(asin(x)) - x).abs() <= 1.0e-14);
        }

        #[test]
        fn atan2_matches_libm(y in -100.0f64..100.0, x in -100.0f64..100.0) {
            prop_assume!(x != 0.0 || y != 0.0);
            prop_assert!((atan2(y, x) - libm::atan2(y, x)).abs() <= 1.0e-14);
        }
    }
}
