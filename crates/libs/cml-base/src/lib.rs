//! Scalar kernel of `cml`.
//!
//! Provides the fixed-point number type, the [`Real`] abstraction shared by
//! floating-point and fixed-point scalars, tolerant equality, angles with
//! units and a set of elementary functions evaluated by series and
//! iterations instead of calls into a math runtime.
#![warn(missing_docs)]

pub mod angle;
pub mod equality;
mod error;
pub mod fixed;
pub mod func;
mod real;

pub use angle::{
    factor, Angle, AngleUnit, Degd, Degf, Degrees, F1616Deg, F1616Rad, F824Deg, F824Rad, F88Deg,
    F88Rad, Radd, Radf, Radians, UDegree, URadian,
};
pub use equality::{is_close, is_close_zero, is_equal, is_equal_ulps};
pub use error::{raise, DomainError};
pub use fixed::{Fixed, FixedConvert, FixedStorage, F1616, F3232, F4816, F824, F88, UF032};
pub use real::{half_pi, pi, tau, Real};
