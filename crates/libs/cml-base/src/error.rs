//! Errors raised by the scalar kernel.

/// Value-domain violation of a scalar function.
///
/// Every checked function (`try_sqrt`, `try_log`, ...) reports its failure
/// with this type; the unchecked counterparts panic with the same message.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Square root of a negative number.
    #[error("square root of a negative number: {0}")]
    NegativeSqrt(f64),
    /// Logarithm of zero or of a negative number.
    #[error("logarithm of a non-positive number: {0}")]
    NonPositiveLog(f64),
    /// Input outside the closed or open interval accepted by the function.
    #[error("{function} is undefined for {value} (domain is {lower}..{upper})")]
    OutOfDomain {
        /// Name of the function.
        function: &'static str,
        /// Offending input.
        value: f64,
        /// Lower bound of the domain.
        lower: f64,
        /// Upper bound of the domain.
        upper: f64,
    },
    /// `atan2(0, 0)` has no defined angle.
    #[error("atan2 is undefined at the origin")]
    UndefinedAtan2,
    /// Division of a fixed-point number by zero.
    #[error("fixed-point division by zero")]
    DivisionByZero,
    /// Tangent evaluated where the cosine vanishes.
    #[error("tangent is undefined at {0} (cosine is zero)")]
    Pole(f64),
    /// Normalisation of a zero-length vector.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
    /// NaN input.
    #[error("{0} received a NaN input")]
    NotANumber(&'static str),
    /// Result larger than the largest value of a fixed-point format.
    #[error("{function}({value}) overflows the number format")]
    Overflow {
        /// Name of the function.
        function: &'static str,
        /// Offending input.
        value: f64,
    },
}

/// Unwraps a checked result, panicking with the domain error message.
///
/// Used by the unchecked function forms so that a domain violation is always
/// signaled instead of yielding a silent NaN.
#[inline]
#[track_caller]
pub fn raise<T>(result: Result<T, DomainError>) -> T {
    match result {
        Ok(v) => v,
        Err(err) => panic!("{err}"),
    }
}
