//! Construction of containers from a mixture of scalars and smaller
//! containers.
//!
//! Every argument is flattened in order into the storage of the new
//! container. The number of flattened elements must equal the size of the
//! container; a mismatch is rejected when the constructor is instantiated:
//!
//! ```compile_fail
//! use cml_linalg::{Vec3, Vec4};
//! let v = Vec4::from_parts((Vec3::new(1.0, 2.0, 3.0), 4.0f32, 5.0f32));
//! ```
//!
//! Elements convert with [`From`], so only lossless conversions are
//! accepted:
//!
//! ```compile_fail
//! use cml_linalg::{DVec2, Vec4};
//! let v = Vec4::from_parts((DVec2::new(1.0, 2.0), 3.0f32, 4.0f32));
//! ```

use crate::matrix::{Matrix, MatrixKind};
use base::{Fixed, FixedStorage};
use core::marker::PhantomData;

/// Something that flattens into a sequence of `T`.
pub trait Parts<T>: Sized {
    /// Number of elements written.
    const COUNT: usize;

    /// Writes the elements into `out`, which holds exactly
    /// [`COUNT`](Self::COUNT) slots.
    fn write_to(self, out: &mut [T]);
}

/// Checks that `P` flattens into exactly `X * Y` elements.
pub(crate) struct PartCount<P, T, const X: usize, const Y: usize>(PhantomData<(P, T)>);

impl<P: Parts<T>, T, const X: usize, const Y: usize> PartCount<P, T, X, Y> {
    pub(crate) const MATCHES: () = assert!(
        P::COUNT == X * Y,
        "the number of components does not match the size of the container"
    );
}

/// Checks that an array of `N` elements fills a `X * Y` container.
pub(crate) struct ElementCount<const N: usize, const X: usize, const Y: usize>;

impl<const N: usize, const X: usize, const Y: usize> ElementCount<N, X, Y> {
    pub(crate) const MATCHES: () = assert!(
        N == X * Y,
        "the number of components does not match the size of the container"
    );
}

macro_rules! impl_parts_for_scalar {
    ($($s:ty),*) => {
        $(
            impl<T: From<$s>> Parts<T> for $s {
                const COUNT: usize = 1;

                #[inline(always)]
                fn write_to(self, out: &mut [T]) { out[0] = T::from(self); }
            }
        )*
    };
}

impl_parts_for_scalar!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool);

impl<T: From<Fixed<S, F>>, S: FixedStorage, const F: u32> Parts<T> for Fixed<S, F> {
    const COUNT: usize = 1;

    #[inline(always)]
    fn write_to(self, out: &mut [T]) { out[0] = T::from(self); }
}

impl<T, U, const X: usize, const Y: usize, K> Parts<T> for Matrix<U, X, Y, K>
where
    T: From<U>,
    U: Copy,
    K: MatrixKind,
{
    const COUNT: usize = X * Y;

    fn write_to(self, out: &mut [T]) {
        for (slot, v) in out.iter_mut().zip(self.iter()) {
            *slot = T::from(*v);
        }
    }
}

impl<T, P: Parts<T>, const N: usize> Parts<T> for [P; N] {
    const COUNT: usize = P::COUNT * N;

    fn write_to(self, out: &mut [T]) {
        for (chunk, part) in out.chunks_mut(P::COUNT.max(1)).zip(self) {
            part.write_to(chunk);
        }
    }
}

macro_rules! impl_parts_for_tuple {
    ($($p:ident),+) => {
        impl<T, $($p: Parts<T>),+> Parts<T> for ($($p,)+) {
            const COUNT: usize = 0 $(+ $p::COUNT)+;

            #[allow(non_snake_case)]
            fn write_to(self, out: &mut [T]) {
                let ($($p,)+) = self;
                let mut rest = out;
                $(
                    let (head, tail) = rest.split_at_mut($p::COUNT);
                    $p.write_to(head);
                    rest = tail;
                )+
                let _ = rest;
            }
        }
    };
}

impl_parts_for_tuple!(A);
impl_parts_for_tuple!(A, B);
impl_parts_for_tuple!(A, B, C);
impl_parts_for_tuple!(A, B, C, D);
impl_parts_for_tuple!(A, B, C, D, E);
impl_parts_for_tuple!(A, B, C, D, E, G);
impl_parts_for_tuple!(A, B, C, D, E, G, H);
impl_parts_for_tuple!(A, B, C, D, E, G, H, I);

impl<T: Copy + Default, const X: usize, const Y: usize, K: MatrixKind> Matrix<T, X, Y, K> {
    /// Creates a container by flattening `parts` into its storage, see
    /// [`Parts`].
    pub fn from_parts<P: Parts<T>>(parts: P) -> Self {
        let () = PartCount::<P, T, X, Y>::MATCHES;
        let mut out = Self::default();
        parts.write_to(out.as_mut_slice());
        out
    }
}

/// Builds a container from any number of parts, see [`Matrix::from_parts`].
///
/// ```
/// use cml_linalg::{mat, IVec2, IVec4};
/// let v: IVec4 = mat![1, IVec2::new(2, 3), 4];
/// assert_eq!(v, IVec4::new(1, 2, 3, 4));
/// ```
#[macro_export]
macro_rules! mat {
    ($($part:expr),+ $(,)?) => {
        $crate::Matrix::from_parts($crate::__nest_parts!($($part),+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __nest_parts {
    ($part:expr) => { ($part,) };
    ($part:expr, $($rest:expr),+) => { ($part, $crate::__nest_parts!($($rest),+)) };
}
