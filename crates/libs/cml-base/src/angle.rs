//! Angles tagged with their unit.
//!
//! An [`Angle`] stores its value in the unit named by its type parameter.
//! Conversions between units multiply by a factor that depends only on the
//! pair of units and is evaluated at compile time; the factor is exactly one
//! when both units are the same.

use crate::{
    equality::is_equal,
    error::DomainError,
    fixed::{F1616, F824, F88},
    func,
    real::Real,
};
use core::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    marker::PhantomData,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// Radian unit.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct URadian;

/// Degree unit.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UDegree;

/// Unit of an [`Angle`].
pub trait AngleUnit: Debug + Default + Copy + Send + Sync + 'static {
    /// The name of the unit.
    const NAME: &'static str;

    /// The symbol of the unit.
    const SYMBOL: &'static str;

    /// Number of units in a full turn.
    const PER_TURN: f64;
}

impl AngleUnit for URadian {
    const NAME: &'static str = "radian";
    const SYMBOL: &'static str = "rad";
    const PER_TURN: f64 = core::f64::consts::TAU;
}

impl AngleUnit for UDegree {
    const NAME: &'static str = "degree";
    const SYMBOL: &'static str = "deg";
    const PER_TURN: f64 = 360.0;
}

/// Conversion factor from unit `A` to unit `B`.
struct Factor<A, B>(PhantomData<(A, B)>);

impl<A: AngleUnit, B: AngleUnit> Factor<A, B> {
    const VALUE: f64 = if A::PER_TURN == B::PER_TURN {
        1.0
    } else {
        B::PER_TURN / A::PER_TURN
    };
}

/// Returns the factor converting a value in unit `A` into unit `B`.
///
/// `factor::<UDegree, URadian>()` is `τ/360`, the reverse is `360/τ`, and
/// the factor between a unit and itself is `1`.
#[inline(always)]
pub const fn factor<A: AngleUnit, B: AngleUnit>() -> f64 { Factor::<A, B>::VALUE }

/// Angle with unit.
#[derive(Copy, Clone, Default)]
pub struct Angle<T, A: AngleUnit> {
    value: T,
    unit: PhantomData<A>,
}

impl<T: Real, A: AngleUnit> Angle<T, A> {
    /// Zero angle.
    pub const ZERO: Self = Self::new(T::ZERO);

    /// Creates a new angle from a value expressed in unit `A`.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Returns the value in unit `A`.
    #[inline(always)]
    pub const fn value(&self) -> T { self.value }

    /// Converts the angle to another unit.
    #[inline]
    pub fn convert<B: AngleUnit>(self) -> Angle<T, B> {
        let f = factor::<A, B>();
        if f == 1.0 {
            Angle::new(self.value)
        } else {
            Angle::new(self.value * T::from_f64(f))
        }
    }

    /// Converts the angle to radians.
    #[inline]
    pub fn to_radians(self) -> Radians<T> { self.convert() }

    /// Converts the angle to degrees.
    #[inline]
    pub fn to_degrees(self) -> Degrees<T> { self.convert() }

    /// Returns the absolute value of the angle.
    #[inline]
    pub fn abs(self) -> Self { Self::new(self.value.abs()) }

    /// Sine of the angle.
    pub fn sin(self) -> T { func::sin(self.to_radians().value) }

    /// Cosine of the angle.
    pub fn cos(self) -> T { func::cos(self.to_radians().value) }

    /// Tangent of the angle.
    ///
    /// # Panics
    ///
    /// Panics where the cosine of the angle is zero, see [`Self::try_tan`].
    #[track_caller]
    pub fn tan(self) -> T { func::tan(self.to_radians().value) }

    /// Tangent of the angle, failing where the cosine vanishes.
    pub fn try_tan(self) -> Result<T, DomainError> { func::try_tan(self.to_radians().value) }

    /// Sine and cosine of the angle.
    pub fn sin_cos(self) -> (T, T) {
        let r = self.to_radians().value;
        (func::sin(r), func::cos(r))
    }
}

impl<T: Real> Radians<T> {
    /// Half a turn.
    pub const PI: Self = Self::new(T::PI);
    /// A quarter turn.
    pub const HALF_PI: Self = Self::new(T::HALF_PI);
    /// A full turn.
    pub const TAU: Self = Self::new(T::TAU);

    /// Angle whose sine is `x`, see [`func::try_asin`].
    pub fn try_asin(x: T) -> Result<Self, DomainError> { func::try_asin(x).map(Self::new) }

    /// Angle whose cosine is `x`, see [`func::try_acos`].
    pub fn try_acos(x: T) -> Result<Self, DomainError> { func::try_acos(x).map(Self::new) }

    /// Angle whose tangent is `x`.
    pub fn atan(x: T) -> Self { Self::new(func::atan(x)) }

    /// Angle of the point `(x, y)`, see [`func::try_atan2`].
    pub fn try_atan2(y: T, x: T) -> Result<Self, DomainError> {
        func::try_atan2(y, x).map(Self::new)
    }
}

impl<T: Real, A: AngleUnit> Debug for Angle<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Angle {{ value: {:?}, unit: {} }}", self.value, A::SYMBOL)
    }
}

impl<T: Real, A: AngleUnit> Display for Angle<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.value, A::SYMBOL)
    }
}

impl<T: Real> From<Degrees<T>> for Radians<T> {
    fn from(angle: Degrees<T>) -> Self { angle.convert() }
}

impl<T: Real> From<Radians<T>> for Degrees<T> {
    fn from(angle: Radians<T>) -> Self { angle.convert() }
}

/// Two angles are equal when their values in radians are tolerantly equal.
impl<T: Real, A: AngleUnit, B: AngleUnit> PartialEq<Angle<T, B>> for Angle<T, A> {
    fn eq(&self, other: &Angle<T, B>) -> bool {
        is_equal(self.to_radians().value, other.to_radians().value)
    }
}

impl<T: Real, A: AngleUnit, B: AngleUnit> PartialOrd<Angle<T, B>> for Angle<T, A> {
    fn partial_cmp(&self, other: &Angle<T, B>) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.to_radians()
            .value
            .partial_cmp(&other.to_radians().value)
    }
}

macro_rules! impl_angle_ops {
    ($($op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident);*) => {
        $(
            impl<T: Real, A: AngleUnit, B: AngleUnit> $op<Angle<T, B>> for Angle<T, A> {
                type Output = Self;

                #[inline]
                fn $fn(self, rhs: Angle<T, B>) -> Self::Output {
                    Self::new(self.value.$fn(rhs.convert::<A>().value))
                }
            }

            impl<T: Real, A: AngleUnit, B: AngleUnit> $op_assign<Angle<T, B>> for Angle<T, A> {
                #[inline]
                fn $fn_assign(&mut self, rhs: Angle<T, B>) { *self = (*self).$fn(rhs); }
            }
        )*
    };
}

impl_angle_ops!(Add, add, AddAssign, add_assign; Sub, sub, SubAssign, sub_assign);

impl<T: Real, A: AngleUnit> Mul<T> for Angle<T, A> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output { Self::new(self.value * rhs) }
}

impl<T: Real, A: AngleUnit> Div<T> for Angle<T, A> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self::Output { Self::new(self.value / rhs) }
}

/// Ratio of two angles.
impl<T: Real, A: AngleUnit, B: AngleUnit> Div<Angle<T, B>> for Angle<T, A> {
    type Output = T;

    #[inline]
    fn div(self, rhs: Angle<T, B>) -> T { self.value / rhs.convert::<A>().value }
}

impl<T: Real, A: AngleUnit> Neg for Angle<T, A> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output { Self::new(-self.value) }
}

macro_rules! impl_scalar_mul_angle {
    ($($t:ty),*) => {
        $(
            impl<A: AngleUnit> Mul<Angle<$t, A>> for $t {
                type Output = Angle<$t, A>;

                #[inline]
                fn mul(self, rhs: Angle<$t, A>) -> Self::Output { Angle::new(self * rhs.value) }
            }
        )*
    };
}

impl_scalar_mul_angle!(f32, f64, F88, F1616, F824);

/// Angle in radians.
pub type Radians<T> = Angle<T, URadian>;

/// Angle in degrees.
pub type Degrees<T> = Angle<T, UDegree>;

macro_rules! angle_aliases {
    ($($prefix:ident => $t:ty),*) => {
        paste::paste! {
            $(
                #[doc = concat!("Radians stored as `", stringify!($t), "`.")]
                pub type [<$prefix Rad>] = Radians<$t>;
                #[doc = concat!("Degrees stored as `", stringify!($t), "`.")]
                pub type [<$prefix Deg>] = Degrees<$t>;
            )*
        }
    };
}

/// Radians stored as `f32`.
pub type Radf = Radians<f32>;
/// Degrees stored as `f32`.
pub type Degf = Degrees<f32>;
/// Radians stored as `f64`.
pub type Radd = Radians<f64>;
/// Degrees stored as `f64`.
pub type Degd = Degrees<f64>;

angle_aliases!(F88 => F88, F1616 => F1616, F824 => F824);

/// Creates an angle in radians.
#[macro_export]
macro_rules! radians {
    ($value:expr) => {
        $crate::angle::Radians::new($value)
    };
}

/// Creates an angle in degrees.
#[macro_export]
macro_rules! degrees {
    ($value:expr) => {
        $crate::angle::Degrees::new($value)
    };
}
