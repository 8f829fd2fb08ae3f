//! Dense two-dimensional matrices.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use itertools::Itertools;
use ndarray::Array2;
use num_traits::cast::AsPrimitive;
use num_traits::Zero;

/// Builds a `Matrix` from row literals, e.g. `matrix![[1, 2], [3, 4]]`.
///
/// The column count is taken from the first row; shorter rows are padded
/// with zeros and longer rows are truncated.
#[macro_export]
macro_rules! matrix {
    () => {
        $crate::matrix::Matrix::empty()
    };
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {
        $crate::matrix::Matrix::from_rows(vec![$(vec![$($x),*]),+])
    };
}

pub mod elementwise;
pub mod ops;
pub mod structural;

pub use self::elementwise::{
    apply_functor_to_matrices, apply_functor_to_matrix_and_scalar, multiply_matrices,
};

/// A dense, row-major matrix with value semantics.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    // Keep data.len() == rows and data[i].len() == columns for every row.
    // A zero in either dimension means the matrix is empty and both are zero.
    data: Vec<Vec<T>>,
    rows: usize,
    columns: usize,
}

impl<T> Matrix<T> {
    /// Constructs the empty `0 x 0` matrix.
    #[inline]
    pub fn empty() -> Self {
        Matrix {
            data: Vec::new(),
            rows: 0,
            columns: 0,
        }
    }

    /// Constructs a matrix whose cell `(i, j)` is `f(i, j)`.
    pub fn from_fn<F: FnMut(usize, usize) -> T>(rows: usize, columns: usize, mut f: F) -> Self {
        if rows == 0 || columns == 0 {
            return Self::empty();
        }

        let mut data = Vec::with_capacity(rows);
        for i in 0..rows {
            let mut row = Vec::with_capacity(columns);
            for j in 0..columns {
                row.push(f(i, j));
            }
            data.push(row);
        }

        Matrix {
            data,
            rows,
            columns,
        }
    }

    /// Constructs a `1 x n` matrix from a single row.
    pub fn from_row(row: Vec<T>) -> Self {
        if row.is_empty() {
            return Self::empty();
        }
        Matrix {
            columns: row.len(),
            rows: 1,
            data: vec![row],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn number_of_cells(&self) -> usize {
        self.rows * self.columns
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Returns the cells of row `index`.
    ///
    /// Panics if `index >= self.rows()`.
    #[inline]
    pub fn row(&self, index: usize) -> &[T] {
        &self.data[index]
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.data.get(row).and_then(|r| r.get(column))
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.data.get_mut(row).and_then(|r| r.get_mut(column))
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows<'a>(&'a self) -> impl Iterator<Item = &'a [T]> + 'a {
        self.data.iter().map(|r| r.as_slice())
    }

    /// Resets the matrix to `0 x 0` and releases its storage.
    pub fn clear(&mut self) {
        self.rows = 0;
        self.columns = 0;
        self.data = Vec::new();
    }

    /// Moves the contents out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::empty())
    }

    /// Builds a new matrix of the same shape by applying `f` to every cell.
    pub fn map<O, F: Fn(&T) -> O>(&self, f: F) -> Matrix<O> {
        Matrix {
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(&f).collect())
                .collect(),
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Converts every cell to another element type through `Into`.
    pub fn convert<K>(&self) -> Matrix<K>
    where
        T: Clone + Into<K>,
    {
        self.map(|x| x.clone().into())
    }

    /// Converts every cell with an `as` cast, which may truncate or wrap.
    pub fn cast<K: Copy + 'static>(&self) -> Matrix<K>
    where
        T: AsPrimitive<K>,
    {
        self.map(|x| (*x).as_())
    }

    /// Copies the matrix into an `ndarray` array of the same shape.
    pub fn to_array2(&self) -> Array2<T>
    where
        T: Clone,
    {
        Array2::from_shape_fn((self.rows, self.columns), |(i, j)| self.data[i][j].clone())
    }

    /// Restores the empty state if one of the dimensions dropped to zero.
    fn collapse_if_degenerate(&mut self) {
        if self.rows == 0 || self.columns == 0 {
            self.clear();
        }
        debug_assert!(self.is_consistent());
    }

    fn is_consistent(&self) -> bool {
        self.data.len() == self.rows
            && self.data.iter().all(|r| r.len() == self.columns)
            && (self.rows == 0) == (self.columns == 0)
    }
}

impl<T: Clone> Matrix<T> {
    /// Constructs a `rows x columns` matrix with every cell set to `value`.
    pub fn new(rows: usize, columns: usize, value: T) -> Self {
        Self::from_fn(rows, columns, |_, _| value.clone())
    }
}

impl<T: Clone + Zero> Matrix<T> {
    /// Constructs a `rows x columns` matrix of zeros.
    #[inline]
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::new(rows, columns, T::zero())
    }

    /// Constructs a matrix from nested rows. The column count is the length
    /// of the first row; other rows are padded with zeros or truncated to it.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let columns = rows.first().map_or(0, |r| r.len());
        if columns == 0 {
            return Self::empty();
        }

        let nrows = rows.len();
        let data = rows
            .into_iter()
            .map(|mut row| {
                row.resize(columns, T::zero());
                row
            })
            .collect();

        Matrix {
            data,
            rows: nrows,
            columns,
        }
    }
}

impl<T> Default for Matrix<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> From<Array2<T>> for Matrix<T> {
    fn from(array: Array2<T>) -> Self {
        let (rows, columns) = array.dim();
        Self::from_fn(rows, columns, |i, j| array[(i, j)].clone())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.data[row][column]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        &mut self.data[row][column]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "{}", row.iter().join(", "))?;
        }
        Ok(())
    }
}
