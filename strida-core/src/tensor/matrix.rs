// src/tensor/matrix.rs

use crate::error::StridaError;
use crate::ops::traits::Number;
use crate::tensor::Tensor;
use std::ops::Deref;

/// A [`Tensor`] constrained to exactly two axes.
///
/// The wrapper owns the tensor and only adds the rank precondition plus
/// row/column helpers. Read access to the tensor goes through `Deref`; mutation goes
/// through forwarding methods that keep the shape, so the inner tensor cannot be replaced:
///
/// ```compile_fail
/// use strida_core::{Matrix, Tensor};
///
/// let mut m = Matrix::<i32>::identity(2);
/// *m = Tensor::new(&[3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Number>(Tensor<T>);

impl<T: Number> Matrix<T> {
    /// A zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix(Tensor::new(&[rows, cols]))
    }

    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, StridaError> {
        Tensor::from_vec(data, vec![rows, cols]).map(Matrix)
    }

    /// Wraps a rank-2 tensor.
    ///
    /// # Errors
    /// Returns `StridaError::RankMismatch` if the tensor does not have exactly two axes.
    pub fn from_tensor(tensor: Tensor<T>) -> Result<Self, StridaError> {
        if tensor.rank() != 2 {
            return Err(StridaError::RankMismatch {
                expected: 2,
                actual: tensor.rank(),
                operation: "Matrix::from_tensor".to_string(),
            });
        }
        Ok(Matrix(tensor))
    }

    /// A `rows x cols` matrix with every entry set to one.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Matrix(crate::tensor::ones(&[rows, cols]))
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::new(n, n);
        for i in 0..n {
            let offset = m.offset2(i, i);
            m.0.data[offset] = T::one();
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.0.shape[0]
    }

    pub fn cols(&self) -> usize {
        self.0.shape[1]
    }

    pub fn as_tensor(&self) -> &Tensor<T> {
        &self.0
    }

    pub fn into_tensor(self) -> Tensor<T> {
        self.0
    }

    /// Offset of `(row, col)`; callers guarantee both are in range.
    #[inline]
    pub(crate) fn offset2(&self, row: usize, col: usize) -> usize {
        row * self.0.strides[0] + col * self.0.strides[1]
    }

    #[inline]
    pub(crate) fn get2(&self, row: usize, col: usize) -> T {
        self.0.data[self.offset2(row, col)]
    }

    #[inline]
    pub(crate) fn set2(&mut self, row: usize, col: usize, value: T) {
        let offset = self.offset2(row, col);
        self.0.data[offset] = value;
    }

    fn check_row(&self, row: usize) -> Result<(), StridaError> {
        if row >= self.rows() {
            return Err(StridaError::IndexOutOfBounds {
                index: vec![row],
                shape: vec![self.rows()],
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<(), StridaError> {
        if col >= self.cols() {
            return Err(StridaError::IndexOutOfBounds {
                index: vec![col],
                shape: vec![self.cols()],
            });
        }
        Ok(())
    }

    /// Exchanges rows `row1` and `row2` in place.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<(), StridaError> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        if row1 == row2 {
            return Ok(());
        }
        for j in 0..self.cols() {
            let (i1, i2) = (self.offset2(row1, j), self.offset2(row2, j));
            self.0.data.swap(i1, i2);
        }
        Ok(())
    }

    /// Exchanges columns `col1` and `col2` in place.
    pub fn swap_cols(&mut self, col1: usize, col2: usize) -> Result<(), StridaError> {
        self.check_col(col1)?;
        self.check_col(col2)?;
        if col1 == col2 {
            return Ok(());
        }
        for i in 0..self.rows() {
            let (i1, i2) = (self.offset2(i, col1), self.offset2(i, col2));
            self.0.data.swap(i1, i2);
        }
        Ok(())
    }

    /// `row1 -= row2`, in place.
    pub fn sub_rows(&mut self, row1: usize, row2: usize) -> Result<(), StridaError> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        for j in 0..self.cols() {
            let value = self.get2(row1, j) - self.get2(row2, j);
            self.set2(row1, j, value);
        }
        Ok(())
    }

    /// `col1 -= col2`, in place.
    pub fn sub_cols(&mut self, col1: usize, col2: usize) -> Result<(), StridaError> {
        self.check_col(col1)?;
        self.check_col(col2)?;
        for i in 0..self.rows() {
            let value = self.get2(i, col1) - self.get2(i, col2);
            self.set2(i, col1, value);
        }
        Ok(())
    }
}

forward_shape_preserving_mutators!(Matrix);

impl<T: Number> Deref for Matrix<T> {
    type Target = Tensor<T>;

    fn deref(&self) -> &Tensor<T> {
        &self.0
    }
}

impl<T: Number> TryFrom<Tensor<T>> for Matrix<T> {
    type Error = StridaError;

    fn try_from(tensor: Tensor<T>) -> Result<Self, Self::Error> {
        Matrix::from_tensor(tensor)
    }
}

impl<T: Number> From<Matrix<T>> for Tensor<T> {
    fn from(matrix: Matrix<T>) -> Self {
        matrix.0
    }
}

#[cfg(test)]
#[path = "matrix_test.rs"]
mod tests;
