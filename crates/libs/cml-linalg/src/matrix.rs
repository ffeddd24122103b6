//! The fixed-size container shared by vectors, matrices and quaternions.

use core::{
    fmt::{Debug, Display, Formatter},
    hash::Hash,
    marker::PhantomData,
    ops::{Index, IndexMut},
};
use num_traits::{One, Zero};

mod sealed {
    pub trait Sealed {}
}

/// Tag distinguishing containers that share a layout but not a
/// multiplication: plain matrices and quaternions.
pub trait MatrixKind:
    sealed::Sealed + Debug + Default + Copy + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Name of the kind.
    const NAME: &'static str;
}

/// Plain matrix or vector.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Normal;

/// Four components read as `(x, y, z)` vector part and `w` scalar part.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Quaternion;

impl sealed::Sealed for Normal {}
impl sealed::Sealed for Quaternion {}

impl MatrixKind for Normal {
    const NAME: &'static str = "matrix";
}

impl MatrixKind for Quaternion {
    const NAME: &'static str = "quaternion";
}

/// A `X` by `Y` grid of `T`, stored row-major.
///
/// `X` is the number of columns (the extent along a row) and `Y` the number
/// of rows. A vector is a single row, `Matrix<T, N, 1>`; the component `i`
/// of any container is its `i`-th element in storage order.
#[repr(C)]
#[derive(Clone, Copy, Hash)]
pub struct Matrix<T, const X: usize, const Y: usize, K = Normal> {
    rows: [[T; X]; Y],
    kind: PhantomData<K>,
}

impl<T, const X: usize, const Y: usize, K: MatrixKind> Matrix<T, X, Y, K> {
    /// Number of elements.
    pub const COUNT: usize = X * Y;

    /// Creates a container from its rows.
    #[inline(always)]
    pub const fn from_rows(rows: [[T; X]; Y]) -> Self {
        Self {
            rows,
            kind: PhantomData,
        }
    }

    /// Creates a container whose element at column `x` and row `y` is
    /// `f(x, y)`.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self::from_rows(core::array::from_fn(|y| core::array::from_fn(|x| f(x, y))))
    }

    /// Returns the rows.
    #[inline(always)]
    pub const fn rows(&self) -> &[[T; X]; Y] { &self.rows }

    /// Consumes the container into its rows.
    #[inline(always)]
    pub fn into_rows(self) -> [[T; X]; Y] { self.rows }

    /// Elements in storage order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] { self.rows.as_flattened() }

    /// Mutable elements in storage order.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] { self.rows.as_flattened_mut() }

    /// Iterates over the elements in storage order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.as_slice().iter() }

    /// Iterates mutably over the elements in storage order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> { self.as_mut_slice().iter_mut() }

    /// Reinterprets the container under another kind.
    #[inline(always)]
    pub fn with_kind<K2: MatrixKind>(self) -> Matrix<T, X, Y, K2> { Matrix::from_rows(self.rows) }
}

impl<T: Copy, const X: usize, const Y: usize, K: MatrixKind> Matrix<T, X, Y, K> {
    /// Creates a container with every element set to `v`.
    #[inline(always)]
    pub const fn splat(v: T) -> Self { Self::from_rows([[v; X]; Y]) }

    /// Creates a container from its elements in storage order.
    ///
    /// ```compile_fail
    /// use cml_linalg::Vec3;
    /// let v = Vec3::from_array([1.0, 2.0]);
    /// ```
    pub fn from_array<const N: usize>(values: [T; N]) -> Self
    where
        T: Default,
    {
        let () = crate::parts::ElementCount::<N, X, Y>::MATCHES;
        let mut out = Self::splat(T::default());
        out.as_mut_slice().copy_from_slice(&values);
        out
    }

    /// Row `y` as a vector.
    #[inline]
    pub fn row(&self, y: usize) -> Matrix<T, X, 1> { Matrix::from_rows([self.rows[y]]) }

    /// Column `x` as a single-column matrix.
    #[inline]
    pub fn column(&self, x: usize) -> Matrix<T, 1, Y> {
        Matrix::from_rows(core::array::from_fn(|y| [self.rows[y][x]]))
    }

    /// Applies `f` to every element.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Matrix<U, X, Y, K> {
        Matrix::from_rows(self.rows.map(|row| row.map(&mut f)))
    }

    /// Combines two containers element by element.
    pub fn zip_map<U: Copy, V>(
        self,
        other: Matrix<U, X, Y, K>,
        mut f: impl FnMut(T, U) -> V,
    ) -> Matrix<V, X, Y, K> {
        Matrix::from_fn(|x, y| f(self.rows[y][x], other.rows[y][x]))
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Matrix<T, Y, X, K> { Matrix::from_fn(|x, y| self.rows[x][y]) }
}

impl<T: Copy + Zero, const X: usize, const Y: usize, K: MatrixKind> Matrix<T, X, Y, K> {
    /// Creates a container filled with zeros.
    #[inline]
    pub fn zeros() -> Self { Self::splat(T::zero()) }
}

impl<T: Copy + Zero + One, const N: usize> Matrix<T, N, N> {
    /// Square matrix with ones on the diagonal and zeros elsewhere.
    ///
    /// Only square shapes have an identity:
    ///
    /// ```compile_fail
    /// use cml_linalg::Matrix;
    /// let m = Matrix::<f32, 3, 2>::identity();
    /// ```
    pub fn identity() -> Self {
        Self::from_fn(|x, y| if x == y { T::one() } else { T::zero() })
    }
}

impl<T: Copy, K: MatrixKind> Matrix<T, 1, 1, K> {
    /// Value of a `1x1` container.
    #[inline(always)]
    pub fn scalar_value(&self) -> T { self.rows[0][0] }
}

impl<T, K: MatrixKind> Matrix<T, 2, 1, K> {
    /// Creates a 2-component vector.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self { Self::from_rows([[x, y]]) }
}

impl<T, K: MatrixKind> Matrix<T, 3, 1, K> {
    /// Creates a 3-component vector.
    #[inline(always)]
    pub const fn new(x: T, y: T, z: T) -> Self { Self::from_rows([[x, y, z]]) }
}

impl<T, K: MatrixKind> Matrix<T, 4, 1, K> {
    /// Creates a 4-component vector.
    #[inline(always)]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self { Self::from_rows([[x, y, z, w]]) }
}

impl<T: Copy + Default, const X: usize, const Y: usize, K: MatrixKind> Default
    for Matrix<T, X, Y, K>
{
    fn default() -> Self { Self::splat(T::default()) }
}

impl<T, const N: usize, K: MatrixKind> From<[T; N]> for Matrix<T, N, 1, K> {
    fn from(values: [T; N]) -> Self { Self::from_rows([values]) }
}

impl<T, const X: usize, const Y: usize, K: MatrixKind> Index<usize> for Matrix<T, X, Y, K> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T { &self.as_slice()[i] }
}

impl<T, const X: usize, const Y: usize, K: MatrixKind> IndexMut<usize> for Matrix<T, X, Y, K> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T { &mut self.as_mut_slice()[i] }
}

/// Element at column `x`, row `y`.
impl<T, const X: usize, const Y: usize, K: MatrixKind> Index<(usize, usize)>
    for Matrix<T, X, Y, K>
{
    type Output = T;

    #[inline(always)]
    fn index(&self, (x, y): (usize, usize)) -> &T { &self.rows[y][x] }
}

impl<T, const X: usize, const Y: usize, K: MatrixKind> IndexMut<(usize, usize)>
    for Matrix<T, X, Y, K>
{
    #[inline(always)]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T { &mut self.rows[y][x] }
}

impl<'a, T, const X: usize, const Y: usize, K: MatrixKind> IntoIterator
    for &'a Matrix<T, X, Y, K>
{
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T, const X: usize, const Y: usize, K: MatrixKind> IntoIterator
    for &'a mut Matrix<T, X, Y, K>
{
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T: Debug, const X: usize, const Y: usize, K: MatrixKind> Debug for Matrix<T, X, Y, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}x{}", K::NAME, X, Y)?;
        if Y == 1 {
            f.debug_list().entries(self.as_slice()).finish()
        } else {
            f.debug_list().entries(self.rows.iter()).finish()
        }
    }
}

impl<T: Display, const X: usize, const Y: usize, K: MatrixKind> Display for Matrix<T, X, Y, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let write_row = |f: &mut Formatter<'_>, row: &[T; X]| -> core::fmt::Result {
            write!(f, "[")?;
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")
        };
        if Y == 1 {
            return write_row(f, &self.rows[0]);
        }
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_row(f, row)?;
        }
        write!(f, "]")
    }
}

impl<T, const X: usize, const Y: usize, K> approx::AbsDiffEq for Matrix<T, X, Y, K>
where
    T: approx::AbsDiffEq,
    T::Epsilon: Copy,
    K: MatrixKind,
    Self: PartialEq,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const X: usize, const Y: usize, K> approx::RelativeEq for Matrix<T, X, Y, K>
where
    T: approx::RelativeEq,
    T::Epsilon: Copy,
    K: MatrixKind,
    Self: PartialEq,
{
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const X: usize, const Y: usize, K> approx::UlpsEq for Matrix<T, X, Y, K>
where
    T: approx::UlpsEq,
    T::Epsilon: Copy,
    K: MatrixKind,
    Self: PartialEq,
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const X: usize, const Y: usize, K: MatrixKind>
    bytemuck::Zeroable for Matrix<T, X, Y, K>
{
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const X: usize, const Y: usize, K: MatrixKind> bytemuck::Pod
    for Matrix<T, X, Y, K>
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IVec3, Mat2, Mat3, Vec3};
    use approx::assert_ulps_eq;
    use proptest::prelude::*;

    #[test]
    fn layout_is_row_major() {
        let m = Matrix::<i32, 3, 2>::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(m[(2, 0)], 3);
        assert_eq!(m[(0, 1)], 4);
        assert_eq!(m[4], 5);
        assert_eq!(m.row(1), IVec3::new(4, 5, 6));
        assert_eq!(m.column(1).as_slice(), &[2, 5]);
        assert_eq!(Matrix::<i32, 3, 2>::COUNT, 6);
    }

    #[test]
    fn default_is_all_zero() {
        assert_eq!(Mat3::default(), Mat3::zeros());
        assert!(Mat3::default().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn identity_of_square_matrices() {
        let i = Mat3::identity();
        assert_eq!(i.rows(), &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(Matrix::<u8, 1, 1>::identity().scalar_value(), 1);
        let (max, zero) = (base::UF032::MAX, base::UF032::ZERO);
        assert_eq!(Matrix::<base::UF032, 2, 2>::identity().rows(), &[[max, zero], [zero, max]]);
    }

    #[test]
    fn from_fn_and_transpose() {
        let m = Matrix::<usize, 3, 2>::from_fn(|x, y| 10 * y + x);
        assert_eq!(m.rows(), &[[0, 1, 2], [10, 11, 12]]);
        let t = m.transpose();
        assert_eq!(t.rows(), &[[0, 10], [1, 11], [2, 12]]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn from_array_fills_storage_order() {
        let m = Mat2::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.rows(), &[[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn map_and_zip_map() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.map(|c| c * 2.0), Vec3::new(2.0, 4.0, 6.0));
        let w = v.zip_map(IVec3::new(1, 0, 2), |a, b| a * b as f32);
        assert_eq!(w, Vec3::new(1.0, 0.0, 6.0));
    }

    #[test]
    fn iteration() {
        let mut v = IVec3::new(1, 2, 3);
        for c in &mut v {
            *c += 1;
        }
        assert_eq!((&v).into_iter().copied().sum::<i32>(), 9);
    }

    #[test]
    fn formatting() {
        let v = IVec3::new(1, 2, 3);
        assert_eq!(v.to_string(), "[1, 2, 3]");
        assert_eq!(format!("{v:?}"), "matrix3x1[1, 2, 3]");
        let m = Matrix::<i32, 2, 2>::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.to_string(), "[[1, 2], [3, 4]]");
    }

    #[test]
    fn approximate_comparison() {
        let a = Matrix::<f64, 3, 1>::new(0.1 + 0.2, 1.0, 2.0);
        let b = Matrix::<f64, 3, 1>::new(0.3, 1.0, 2.0);
        assert_ne!(a, b);
        assert_ulps_eq!(a, b);
    }

    proptest! {
        #[test]
        fn transpose_is_an_involution(v in proptest::array::uniform6(-1000i32..1000)) {
            let m = Matrix::<i32, 2, 3>::from_array(v);
            prop_assert_eq!(m.transpose().transpose(), m);
            prop_assert_eq!(m.transpose()[(1, 0)], m[(0, 1)]);
        }
    }
}
