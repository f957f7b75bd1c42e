// src/ops/linalg/matmul.rs

use crate::error::StridaError;
use crate::ops::traits::Number;
use crate::tensor::{Matrix, Tensor};
use log::debug;

fn check_rank2<T: Number>(t: &Tensor<T>, operation: &str) -> Result<(), StridaError> {
    if t.rank() != 2 {
        return Err(StridaError::RankMismatch {
            expected: 2,
            actual: t.rank(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// Performs matrix multiplication C = A @ B.
///
/// A: [M, K], B: [K, N] -> C: [M, N], row-major.
///
/// Dense triple loop in `i, k, j` order. Products where either factor is exactly zero are
/// skipped. Both operands are read through their strides, so transposed inputs are fine.
///
/// # Errors
/// - `RankMismatch` if either operand is not rank 2.
/// - `ShapeMismatch` if `a.shape[1] != b.shape[0]`.
pub fn matmul_op<T: Number>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, StridaError> {
    check_rank2(a, "matmul")?;
    check_rank2(b, "matmul")?;

    let (m, n) = (a.shape[0], a.shape[1]);
    let p = b.shape[1];
    if n != b.shape[0] {
        return Err(StridaError::ShapeMismatch {
            expected: vec![n, p],
            actual: b.shape.clone(),
            operation: "matmul".to_string(),
        });
    }

    let (as0, as1) = (a.strides[0], a.strides[1]);
    let (bs0, bs1) = (b.strides[0], b.strides[1]);
    let mut out = Tensor::new(&[m, p]);

    for i in 0..m {
        for k in 0..n {
            let a_val = a.data[i * as0 + k * as1];
            if a_val.is_zero() {
                continue;
            }
            for j in 0..p {
                let b_val = b.data[k * bs0 + j * bs1];
                if b_val.is_zero() {
                    continue;
                }
                out.data[i * p + j] += a_val * b_val;
            }
        }
    }
    Ok(out)
}

/// The generic tensor product: rank-2 operands are matrix-multiplied.
///
/// # Errors
/// `UnsupportedOperation` for any other rank, plus the errors of [`matmul_op`].
pub fn tensor_mul_op<T: Number>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, StridaError> {
    match a.rank() {
        2 => matmul_op(a, b),
        rank => Err(StridaError::UnsupportedOperation(format!(
            "mul is only defined for rank-2 tensors, got rank {}",
            rank
        ))),
    }
}

impl<T: Number> Tensor<T> {
    pub fn matmul(&self, other: &Tensor<T>) -> Result<Tensor<T>, StridaError> {
        matmul_op(self, other)
    }

    /// See [`tensor_mul_op`].
    pub fn mul(&self, other: &Tensor<T>) -> Result<Tensor<T>, StridaError> {
        tensor_mul_op(self, other)
    }

    /// In-place tensor product: on success `self` takes the shape, strides and buffer of
    /// `self.mul(other)`. On error `self` is unchanged.
    pub fn mul_(&mut self, other: &Tensor<T>) -> Result<(), StridaError> {
        let product = tensor_mul_op(self, other)?;
        if product.shape != self.shape {
            debug!(
                "mul_: shape changes from {:?} to {:?}",
                self.shape, product.shape
            );
        }
        *self = product;
        Ok(())
    }
}

impl<T: Number> Matrix<T> {
    /// Matrix product; the result is always a matrix.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, StridaError> {
        matmul_op(self.as_tensor(), other.as_tensor()).and_then(Matrix::from_tensor)
    }
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
