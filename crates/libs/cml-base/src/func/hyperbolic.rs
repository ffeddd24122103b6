use super::{check_nan, exp::try_exp, exp::try_log, sqrt::try_sqrt, unchecked_forms};
use crate::{error::DomainError, real::Real};

/// Hyperbolic sine, `(e^x - e^-x) / 2`.
///
/// Fails with [`DomainError::Overflow`] where `e^|x|` exceeds a fixed-point
/// format.
pub fn try_sinh<T: Real>(x: T) -> Result<T, DomainError> {
    check_nan(x, "sinh")?;
    let two = T::ONE + T::ONE;
    Ok((try_exp(x)? - try_exp(-x)?) / two)
}

/// Hyperbolic cosine, `(e^x + e^-x) / 2`.
pub fn try_cosh<T: Real>(x: T) -> Result<T, DomainError> {
    check_nan(x, "cosh")?;
    let two = T::ONE + T::ONE;
    Ok((try_exp(x)? + try_exp(-x)?) / two)
}

/// Hyperbolic tangent, `(1 - e^-2x) / (1 + e^-2x)` mirrored for negative
/// inputs. Only `e^-|x|` is evaluated, so the result never overflows.
pub fn try_tanh<T: Real>(x: T) -> Result<T, DomainError> {
    check_nan(x, "tanh")?;
    if x < T::ZERO {
        return Ok(-try_tanh(-x)?);
    }
    let e = try_exp(-x)?;
    let e2 = e * e;
    Ok((T::ONE - e2) / (T::ONE + e2))
}

/// Inverse hyperbolic sine, `log(x + sqrt(x² + 1))` evaluated on `|x|`.
pub fn try_asinh<T: Real>(x: T) -> Result<T, DomainError> {
    check_nan(x, "asinh")?;
    if x == T::ZERO {
        return Ok(x);
    }
    let a = x.abs();
    let r = try_log(a + try_sqrt(a * a + T::ONE)?)?;
    Ok(if x < T::ZERO { -r } else { r })
}

/// Inverse hyperbolic cosine, `log(x + sqrt(x² - 1))`, defined for `x >= 1`.
pub fn try_acosh<T: Real>(x: T) -> Result<T, DomainError> {
    check_nan(x, "acosh")?;
    if x < T::ONE {
        return Err(DomainError::OutOfDomain {
            function: "acosh",
            value: x.to_f64(),
            lower: 1.0,
            upper: f64::INFINITY,
        });
    }
    try_log(x + try_sqrt(x * x - T::ONE)?)
}

/// Inverse hyperbolic tangent, `log((1 + x) / (1 - x)) / 2`, defined on the
/// open interval `]-1, 1[`.
pub fn try_atanh<T: Real>(x: T) -> Result<T, DomainError> {
    check_nan(x, "atanh")?;
    if x.abs() >= T::ONE {
        return Err(DomainError::OutOfDomain {
            function: "atanh",
            value: x.to_f64(),
            lower: -1.0,
            upper: 1.0,
        });
    }
    let two = T::ONE + T::ONE;
    Ok(try_log((T::ONE + x) / (T::ONE - x))? / two)
}

unchecked_forms!(
    sinh => try_sinh, "Hyperbolic sine, see [`try_sinh`].";
    cosh => try_cosh, "Hyperbolic cosine, see [`try_cosh`].";
    tanh => try_tanh, "Hyperbolic tangent, see [`try_tanh`].";
    asinh => try_asinh, "Inverse hyperbolic sine, see [`try_asinh`].";
    acosh => try_acosh, "Inverse hyperbolic cosine, see [`try_acosh`].";
    atanh => try_atanh, "Inverse hyperbolic tangent, see [`try_atanh`].";
);
