//! Arithmetic operators for matrices.
//!
//! `matrix op matrix` works cell by cell (`*` is the Hadamard product, see
//! `multiply_matrices` for the matrix product) and yields the empty matrix on
//! a shape mismatch. `matrix op= matrix` is skipped on a shape mismatch.
//! Scalars of every primitive numeric type broadcast from either side.
//! The element type of the result is the `Output` of the cell operation, so
//! operands of different element types can be combined.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use matrix::elementwise::{apply_functor_to_matrices, apply_functor_to_matrix_and_scalar};
use matrix::Matrix;

macro_rules! impl_matrix_op {
    ($trt:ident, $mth:ident, $assign_trt:ident, $assign_mth:ident) => {
        impl<'a, 'b, T, K> $trt<&'b Matrix<K>> for &'a Matrix<T>
        where
            T: Clone + $trt<K>,
            K: Clone,
        {
            type Output = Matrix<<T as $trt<K>>::Output>;

            fn $mth(self, other: &'b Matrix<K>) -> Self::Output {
                apply_functor_to_matrices(self, other, |x, y| {
                    <T as $trt<K>>::$mth(x.clone(), y.clone())
                })
            }
        }

        impl<T, K> $trt<Matrix<K>> for Matrix<T>
        where
            T: Clone + $trt<K>,
            K: Clone,
        {
            type Output = Matrix<<T as $trt<K>>::Output>;

            #[inline]
            fn $mth(self, other: Matrix<K>) -> Self::Output {
                $trt::$mth(&self, &other)
            }
        }

        impl<'a, T, K> $assign_trt<&'a Matrix<K>> for Matrix<T>
        where
            T: $assign_trt<K>,
            K: Clone,
        {
            fn $assign_mth(&mut self, other: &'a Matrix<K>) {
                self.zip_assign(other, |x, y| <T as $assign_trt<K>>::$assign_mth(x, y.clone()));
            }
        }

        impl<T, K> $assign_trt<Matrix<K>> for Matrix<T>
        where
            T: $assign_trt<K>,
            K: Clone,
        {
            #[inline]
            fn $assign_mth(&mut self, other: Matrix<K>) {
                $assign_trt::$assign_mth(self, &other);
            }
        }
    };
}

impl_matrix_op!(Add, add, AddAssign, add_assign);
impl_matrix_op!(Sub, sub, SubAssign, sub_assign);
impl_matrix_op!(Mul, mul, MulAssign, mul_assign);
impl_matrix_op!(Div, div, DivAssign, div_assign);

macro_rules! impl_scalar_op {
    ($trt:ident, $mth:ident, $assign_trt:ident, $assign_mth:ident; $($scalar:ty),*) => {$(
        impl<'a, T> $trt<$scalar> for &'a Matrix<T>
        where
            T: Clone + $trt<$scalar>,
        {
            type Output = Matrix<<T as $trt<$scalar>>::Output>;

            fn $mth(self, scalar: $scalar) -> Self::Output {
                apply_functor_to_matrix_and_scalar(self, &scalar, |x, s| {
                    <T as $trt<$scalar>>::$mth(x.clone(), *s)
                })
            }
        }

        impl<T> $trt<$scalar> for Matrix<T>
        where
            T: Clone + $trt<$scalar>,
        {
            type Output = Matrix<<T as $trt<$scalar>>::Output>;

            #[inline]
            fn $mth(self, scalar: $scalar) -> Self::Output {
                $trt::$mth(&self, scalar)
            }
        }

        impl<'a, T> $trt<&'a Matrix<T>> for $scalar
        where
            $scalar: $trt<T>,
            T: Clone,
        {
            type Output = Matrix<<$scalar as $trt<T>>::Output>;

            fn $mth(self, matrix: &'a Matrix<T>) -> Self::Output {
                apply_functor_to_matrix_and_scalar(matrix, &self, |x, s| {
                    <$scalar as $trt<T>>::$mth(*s, x.clone())
                })
            }
        }

        impl<T> $trt<Matrix<T>> for $scalar
        where
            $scalar: $trt<T>,
            T: Clone,
        {
            type Output = Matrix<<$scalar as $trt<T>>::Output>;

            #[inline]
            fn $mth(self, matrix: Matrix<T>) -> Self::Output {
                <$scalar as $trt<&Matrix<T>>>::$mth(self, &matrix)
            }
        }

        impl<T> $assign_trt<$scalar> for Matrix<T>
        where
            T: $assign_trt<$scalar>,
        {
            fn $assign_mth(&mut self, scalar: $scalar) {
                self.broadcast_assign(&scalar, |x, s| <T as $assign_trt<$scalar>>::$assign_mth(x, *s));
            }
        }
    )*};
}

macro_rules! impl_scalar_ops {
    ($($scalar:ty),*) => {
        impl_scalar_op!(Add, add, AddAssign, add_assign; $($scalar),*);
        impl_scalar_op!(Sub, sub, SubAssign, sub_assign; $($scalar),*);
        impl_scalar_op!(Mul, mul, MulAssign, mul_assign; $($scalar),*);
        impl_scalar_op!(Div, div, DivAssign, div_assign; $($scalar),*);
    };
}

impl_scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<'a, T: Clone + Neg> Neg for &'a Matrix<T> {
    type Output = Matrix<T::Output>;

    fn neg(self) -> Self::Output {
        self.map(|x| -x.clone())
    }
}

impl<T: Clone + Neg> Neg for Matrix<T> {
    type Output = Matrix<T::Output>;

    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}
