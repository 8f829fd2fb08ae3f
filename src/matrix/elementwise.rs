//! Dimension-checked elementwise dispatch.
//!
//! Two failure policies coexist. The in-place operations on a matrix
//! (`apply_functor_with` and the compound assignment operators) leave the
//! receiver untouched when the shapes differ. The free functions in this module
//! and the binary operators built on them return the empty matrix instead.

use num_traits::Zero;
use std::ops::Mul;

use matrix::Matrix;

impl<T> Matrix<T> {
    /// Returns true if both matrices have the same number of rows and columns.
    #[inline]
    pub fn has_same_dimensions_as<K>(&self, other: &Matrix<K>) -> bool {
        self.rows == other.rows && self.columns == other.columns
    }

    /// Replaces every cell `x` by `f(x)`.
    pub fn apply_functor<F: Fn(&T) -> T>(&mut self, f: F) {
        for row in &mut self.data {
            for cell in row.iter_mut() {
                *cell = f(cell);
            }
        }
    }

    /// Replaces every cell `x` by `f(x, y)`, with `y` the corresponding cell of
    /// `other`. Does nothing if the dimensions differ.
    pub fn apply_functor_with<K, F: Fn(&T, &K) -> T>(&mut self, other: &Matrix<K>, f: F) {
        if !self.has_same_dimensions_as(other) {
            debug!(
                "Skipping elementwise update: {}x{} vs {}x{}",
                self.rows, self.columns, other.rows, other.columns
            );
            return;
        }

        for (row, other_row) in self.data.iter_mut().zip(&other.data) {
            for (cell, y) in row.iter_mut().zip(other_row) {
                *cell = f(cell, y);
            }
        }
    }

    /// Combines every cell with the corresponding cell of `other` in place.
    /// Does nothing if the dimensions differ.
    pub(crate) fn zip_assign<K, F: Fn(&mut T, &K)>(&mut self, other: &Matrix<K>, f: F) {
        if !self.has_same_dimensions_as(other) {
            debug!(
                "Skipping compound assignment: {}x{} vs {}x{}",
                self.rows, self.columns, other.rows, other.columns
            );
            return;
        }

        for (row, other_row) in self.data.iter_mut().zip(&other.data) {
            for (cell, y) in row.iter_mut().zip(other_row) {
                f(cell, y);
            }
        }
    }

    /// Combines every cell with the same scalar in place, e.g.
    /// `m.broadcast_assign(&s, |x, s| *x -= s.clone())`.
    ///
    /// The `op=` operators only accept primitive scalars; this works for any
    /// scalar type.
    pub fn broadcast_assign<K, F: Fn(&mut T, &K)>(&mut self, scalar: &K, f: F) {
        for row in &mut self.data {
            for cell in row.iter_mut() {
                f(cell, scalar);
            }
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Returns the `columns x rows` matrix with cell `(j, i)` equal to cell
    /// `(i, j)` of `self`.
    pub fn transpose(&self) -> Matrix<T> {
        Matrix::from_fn(self.columns, self.rows, |j, i| self.data[i][j].clone())
    }
}

impl<T: Clone + Zero> Matrix<T> {
    /// Constructs a `rank x rank` matrix with `value` on the diagonal and zeros
    /// elsewhere.
    pub fn identity(rank: usize, value: T) -> Matrix<T> {
        Matrix::from_fn(rank, rank, |i, j| {
            if i == j {
                value.clone()
            } else {
                T::zero()
            }
        })
    }
}

/// Applies `f` to corresponding cells of `a` and `b`.
/// Returns the empty matrix if the dimensions differ.
pub fn apply_functor_to_matrices<T, K, O, F>(a: &Matrix<T>, b: &Matrix<K>, f: F) -> Matrix<O>
where
    F: Fn(&T, &K) -> O,
{
    if !a.has_same_dimensions_as(b) {
        debug!(
            "Dimension mismatch in elementwise operation: {}x{} vs {}x{}",
            a.rows, a.columns, b.rows, b.columns
        );
        return Matrix::empty();
    }

    Matrix::from_fn(a.rows, a.columns, |i, j| f(&a.data[i][j], &b.data[i][j]))
}

/// Applies `f` to every cell of `a` together with `scalar`.
pub fn apply_functor_to_matrix_and_scalar<T, K, O, F>(a: &Matrix<T>, scalar: &K, f: F) -> Matrix<O>
where
    F: Fn(&T, &K) -> O,
{
    a.map(|x| f(x, scalar))
}

/// The matrix product of `a` and `b`.
/// Returns the empty matrix if `a.columns() != b.rows()`.
pub fn multiply_matrices<T, K, P>(a: &Matrix<T>, b: &Matrix<K>) -> Matrix<P>
where
    T: Clone + Mul<K, Output = P>,
    K: Clone,
    P: Zero,
{
    if a.columns != b.rows {
        debug!(
            "Cannot multiply {}x{} by {}x{}",
            a.rows, a.columns, b.rows, b.columns
        );
        return Matrix::empty();
    }

    Matrix::from_fn(a.rows, b.columns, |i, j| {
        let mut sum = P::zero();
        for k in 0..a.columns {
            sum = sum + a.data[i][k].clone() * b.data[k][j].clone();
        }
        sum
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::Wrapping;

    #[test]
    fn same_dimensions() {
        let a = Matrix::new(2, 3, 0i32);
        assert!(a.has_same_dimensions_as(&Matrix::new(2, 3, 1.0f64)));
        assert!(!a.has_same_dimensions_as(&Matrix::new(3, 2, 0i32)));
    }

    #[test]
    fn transpose() {
        let a = matrix![[1, 2, 3], [4, 5, 6]];
        let t = a.transpose();
        assert_eq!(t, matrix![[1, 4], [2, 5], [3, 6]]);
        assert!(Matrix::<u8>::empty().transpose().is_empty());
    }

    #[test]
    fn identity() {
        let m = Matrix::identity(3, 5i64);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], if i == j { 5 } else { 0 });
            }
        }
        assert!(Matrix::identity(0, 1.0).is_empty());
    }

    #[test]
    fn unary_functor() {
        let mut m = matrix![[1.0, 4.0], [9.0, 16.0]];
        m.apply_functor(|x: &f64| x.sqrt());
        assert_eq!(m, matrix![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn binary_functor_in_place() {
        let mut m = matrix![[1i32, 2], [3, 4]];
        m.apply_functor_with(&matrix![[10u8, 20], [30, 40]], |x, y| x * i32::from(*y));
        assert_eq!(m, matrix![[10, 40], [90, 160]]);

        let before = m.clone();
        m.apply_functor_with(&matrix![[1i32, 2, 3]], |x, y| x + y);
        assert_eq!(m, before);
    }

    #[test]
    fn broadcast_non_primitive_scalar() {
        let mut m = matrix![[Wrapping(1u8), Wrapping(200)], [Wrapping(3), Wrapping(255)]];
        m.broadcast_assign(&Wrapping(3u8), |x, s| *x -= *s);
        assert_eq!(
            m,
            matrix![[Wrapping(254u8), Wrapping(197)], [Wrapping(0), Wrapping(252)]]
        );

        let mut empty: Matrix<Wrapping<u8>> = Matrix::empty();
        empty.broadcast_assign(&Wrapping(1u8), |x, s| *x += *s);
        assert!(empty.is_empty());
    }

    #[test]
    fn functor_to_matrices() {
        let a = matrix![[3.0, 0.0], [1.0, 2.0]];
        let b = matrix![[4.0, 1.0], [0.0, 1.0]];
        let r = apply_functor_to_matrices(&a, &b, |x: &f64, y: &f64| (x * x + y * y).sqrt());
        assert_eq!(r, matrix![[5.0, 1.0], [1.0, 5.0f64.sqrt()]]);

        let mismatch = apply_functor_to_matrices(&a, &matrix![[1.0]], |x: &f64, y: &f64| x + y);
        assert!(mismatch.is_empty());
        assert_eq!(mismatch.columns(), 0);
    }

    #[test]
    fn functor_to_scalar_promotes() {
        let a = matrix![[1u8, 2], [3, 4]];
        let r = apply_functor_to_matrix_and_scalar(&a, &0.5f64, |x, s| f64::from(*x) * s);
        assert_eq!(r, matrix![[0.5, 1.0], [1.5, 2.0]]);
    }

    #[test]
    fn matrix_product() {
        let a = matrix![[1i32, 2, 3], [4, 5, 6]];
        let b = matrix![[7i32, 8], [9, 10], [11, 12]];
        let p: Matrix<i32> = multiply_matrices(&a, &b);
        assert_eq!(p, matrix![[58, 64], [139, 154]]);

        let i = Matrix::identity(3, 1i32);
        let q: Matrix<i32> = multiply_matrices(&a, &i);
        assert_eq!(q, a);
    }

    #[test]
    fn matrix_product_mismatch() {
        let a = Matrix::new(2, 3, 1.0f64);
        let b = Matrix::new(2, 3, 1.0f64);
        let p: Matrix<f64> = multiply_matrices(&a, &b);
        assert_eq!((p.rows(), p.columns()), (0, 0));
    }

    #[test]
    fn matrix_product_mixed_types() {
        let a = matrix![[1.0f64, 2.0]];
        let column = [3.0f64, 4.0];
        let b = Matrix::from_fn(2, 1, |i, _| &column[i]);
        let p: Matrix<f64> = multiply_matrices(&a, &b);
        assert_eq!(p, matrix![[11.0]]);
    }
}
