//! Elementary functions computed from scratch.
//!
//! Every function is a bounded loop over a series or a fixed-point
//! iteration; a loop stops as soon as the accumulated value no longer changes
//! under [`is_equal`](crate::equality::is_equal). Each function comes in two
//! forms: `try_*` returning a [`DomainError`] for inputs outside its domain,
//! and a plain form that panics with the same error.

use crate::{error::DomainError, real::Real};

/// Upper bound on the number of steps of any convergence loop.
///
/// Newton's square root seeded with the input needs about half the binary
/// exponent range of `f64` in the worst case; everything else converges
/// within a few dozen steps.
pub const MAX_ITERATIONS: usize = 4096;

/// Rejects NaN inputs.
#[inline(always)]
pub(crate) fn check_nan<T: Real>(x: T, function: &'static str) -> Result<(), DomainError> {
    if x.is_nan() {
        Err(DomainError::NotANumber(function))
    } else {
        Ok(())
    }
}

/// Internal defect: a convergence loop ran out of iterations.
#[cold]
#[track_caller]
pub(crate) fn diverged(function: &'static str) -> ! {
    log::error!("{function} did not converge within {MAX_ITERATIONS} iterations");
    panic!("{function} did not converge within {MAX_ITERATIONS} iterations")
}

/// Converts a small counter into the scalar type.
#[inline(always)]
pub(crate) fn count<T: Real>(n: usize) -> T { T::from_f64(n as f64) }

/// Generates the panicking form of checked functions.
macro_rules! unchecked_forms {
    ($($name:ident => $checked:ident, $doc:literal);* $(;)?) => {
        $(
            #[doc = $doc]
            ///
            /// # Panics
            ///
            #[doc = concat!("Panics on the inputs for which [`", stringify!($checked), "`] fails.")]
            #[inline]
            #[track_caller]
            pub fn $name<T: $crate::real::Real>(x: T) -> T { $crate::error::raise($checked(x)) }
        )*
    };
}

pub(crate) use unchecked_forms;

mod exp;
mod hyperbolic;
mod inverse;
pub(crate) mod sqrt;
mod trig;

pub use exp::*;
pub use hyperbolic::*;
pub use inverse::*;
pub use sqrt::{sqrt, try_sqrt};
pub use trig::*;
