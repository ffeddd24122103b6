//! Access to components by letter.
//!
//! Letters come in three groups naming the same four slots: `x y z w`
//! (positions), `r g b a` (colors) and `s t u v` (texture coordinates).
//! The digits `'0'` to `'9'` name slots by number. Letters are const
//! generic parameters, so a letter that is unknown or out of range for the
//! container is rejected at compile time:
//!
//! ```compile_fail
//! use cml_linalg::Vec2;
//! let v = Vec2::new(1.0, 2.0);
//! let z = v.get::<'z'>();
//! ```
//!
//! ```compile_fail
//! use cml_linalg::Vec4;
//! let v = Vec4::splat(1.0);
//! let q = v.swizzle2::<'x', 'q'>();
//! ```

use crate::matrix::{Matrix, MatrixKind};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Maps a component letter to its slot.
pub const fn component_index(c: char) -> Option<usize> {
    match c {
        'x' | 'r' | 's' => Some(0),
        'y' | 'g' | 't' => Some(1),
        'z' | 'b' | 'u' => Some(2),
        'w' | 'a' | 'v' => Some(3),
        '0'..='9' => Some(c as usize - '0' as usize),
        _ => None,
    }
}

/// Slot named by `C` in a `X * Y` container.
struct Slot<const C: char, const X: usize, const Y: usize>;

impl<const C: char, const X: usize, const Y: usize> Slot<C, X, Y> {
    const INDEX: usize = match component_index(C) {
        Some(i) if i < X * Y => i,
        Some(_) => panic!("component is out of range for the container"),
        None => panic!("unknown component letter"),
    };
}

impl<T: Copy, const X: usize, const Y: usize, K: MatrixKind> Matrix<T, X, Y, K> {
    /// Component named by `C`.
    #[inline(always)]
    pub fn get<const C: char>(&self) -> &T { &self.as_slice()[Slot::<C, X, Y>::INDEX] }

    /// Mutable component named by `C`.
    #[inline(always)]
    pub fn get_mut<const C: char>(&mut self) -> &mut T {
        &mut self.as_mut_slice()[Slot::<C, X, Y>::INDEX]
    }

    /// Writable view of the components named by `A` and `B`.
    pub fn swizzle2_mut<const A: char, const B: char>(&mut self) -> ComponentsMut<'_, T, 2> {
        ComponentsMut::new(
            self.as_mut_slice(),
            [Slot::<A, X, Y>::INDEX, Slot::<B, X, Y>::INDEX],
        )
    }

    /// Writable view of the components named by `A`, `B` and `C`.
    pub fn swizzle3_mut<const A: char, const B: char, const C: char>(
        &mut self,
    ) -> ComponentsMut<'_, T, 3> {
        ComponentsMut::new(
            self.as_mut_slice(),
            [
                Slot::<A, X, Y>::INDEX,
                Slot::<B, X, Y>::INDEX,
                Slot::<C, X, Y>::INDEX,
            ],
        )
    }

    /// Writable view of the components named by `A`, `B`, `C` and `D`.
    pub fn swizzle4_mut<const A: char, const B: char, const C: char, const D: char>(
        &mut self,
    ) -> ComponentsMut<'_, T, 4> {
        ComponentsMut::new(
            self.as_mut_slice(),
            [
                Slot::<A, X, Y>::INDEX,
                Slot::<B, X, Y>::INDEX,
                Slot::<C, X, Y>::INDEX,
                Slot::<D, X, Y>::INDEX,
            ],
        )
    }
}

impl<T: Copy, const X: usize, const Y: usize, K: MatrixKind> Matrix<T, X, Y, K> {
    /// Copies the components named by `A` and `B` into a new vector.
    #[inline]
    pub fn swizzle2<const A: char, const B: char>(&self) -> Matrix<T, 2, 1> {
        Matrix::<T, 2, 1>::new(*self.get::<A>(), *self.get::<B>())
    }

    /// Copies the components named by `A`, `B` and `C` into a new vector.
    #[inline]
    pub fn swizzle3<const A: char, const B: char, const C: char>(&self) -> Matrix<T, 3, 1> {
        Matrix::<T, 3, 1>::new(*self.get::<A>(), *self.get::<B>(), *self.get::<C>())
    }

    /// Copies the components named by `A`, `B`, `C` and `D` into a new
    /// vector.
    #[inline]
    pub fn swizzle4<const A: char, const B: char, const C: char, const D: char>(
        &self,
    ) -> Matrix<T, 4, 1> {
        Matrix::<T, 4, 1>::new(
            *self.get::<A>(),
            *self.get::<B>(),
            *self.get::<C>(),
            *self.get::<D>(),
        )
    }
}

macro_rules! named_accessors {
    ($($letter:ident => $c:literal),*) => {
        paste::paste! {
            impl<T: Copy, const X: usize, const Y: usize, K: MatrixKind> Matrix<T, X, Y, K> {
                $(
                    #[doc = concat!("Component `", stringify!($letter), "`.")]
                    #[inline(always)]
                    pub fn $letter(&self) -> T { *self.get::<$c>() }

                    #[doc = concat!("Mutable component `", stringify!($letter), "`.")]
                    #[inline(always)]
                    pub fn [<$letter _mut>](&mut self) -> &mut T { self.get_mut::<$c>() }
                )*
            }
        }
    };
}

named_accessors!(
    x => 'x', y => 'y', z => 'z', w => 'w',
    r => 'r', g => 'g', b => 'b', a => 'a',
    s => 's', t => 't', u => 'u', v => 'v'
);

/// Writable selection of `N` components of a container.
///
/// Each operation reads the selected slot, applies the operation and
/// writes the slot back, in selection order. Nothing is cached between
/// operations: a slot selected twice sees the first write.
pub struct ComponentsMut<'a, T, const N: usize> {
    storage: &'a mut [T],
    indices: [usize; N],
}

impl<'a, T: Copy, const N: usize> ComponentsMut<'a, T, N> {
    fn new(storage: &'a mut [T], indices: [usize; N]) -> Self { Self { storage, indices } }

    /// Slots of the container the view refers to.
    #[inline]
    pub fn indices(&self) -> [usize; N] { self.indices }

    /// Current value of the `i`-th selected component.
    #[inline]
    pub fn get(&self, i: usize) -> T { self.storage[self.indices[i]] }

    /// Overwrites the `i`-th selected component.
    #[inline]
    pub fn set(&mut self, i: usize, value: T) { self.storage[self.indices[i]] = value; }

    /// Copies the selected components into a new vector.
    pub fn load(&self) -> Matrix<T, N, 1> {
        Matrix::from_rows([core::array::from_fn(|i| self.get(i))])
    }

    /// Writes the components of `values` to the selected slots.
    pub fn store<K: MatrixKind>(&mut self, values: Matrix<T, N, 1, K>) {
        for i in 0..N {
            self.set(i, values[i]);
        }
    }

    /// Writes `value` to every selected slot.
    pub fn fill(&mut self, value: T) {
        for i in 0..N {
            self.set(i, value);
        }
    }

    fn update(&mut self, mut f: impl FnMut(usize, T) -> T) {
        for i in 0..N {
            let v = f(i, self.get(i));
            self.set(i, v);
        }
    }
}

macro_rules! impl_components_op_assign {
    ($($op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident);*) => {
        $(
            impl<T, K, const N: usize> $op_assign<Matrix<T, N, 1, K>> for ComponentsMut<'_, T, N>
            where
                T: Copy + $op<Output = T>,
                K: MatrixKind,
            {
                fn $fn_assign(&mut self, rhs: Matrix<T, N, 1, K>) {
                    self.update(|i, v| v.$fn(rhs[i]));
                }
            }
        )*
    };
}

impl_components_op_assign!(
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign
);

macro_rules! impl_components_scalar_op_assign {
    ([$($g:tt)*] $t:ty) => {
        impl_components_scalar_op_assign!(@op [$($g)*] $t, Add, add, AddAssign, add_assign);
        impl_components_scalar_op_assign!(@op [$($g)*] $t, Sub, sub, SubAssign, sub_assign);
        impl_components_scalar_op_assign!(@op [$($g)*] $t, Mul, mul, MulAssign, mul_assign);
        impl_components_scalar_op_assign!(@op [$($g)*] $t, Div, div, DivAssign, div_assign);
    };
    (@op [$($g:tt)*] $t:ty, $op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident) => {
        impl<const N: usize, $($g)*> $op_assign<$t> for ComponentsMut<'_, $t, N> {
            fn $fn_assign(&mut self, rhs: $t) { self.update(|_, v| $op::$fn(v, rhs)); }
        }
    };
}

crate::for_each_scalar!(impl_components_scalar_op_assign);
