// src/ops/arithmetic/add.rs

use super::elementwise_op;
use crate::error::StridaError;
use crate::ops::traits::Number;
use crate::tensor::Tensor;

/// Performs element-wise addition of two tensors of identical shape.
///
/// # Errors
/// Returns `StridaError::ShapeMismatch` if the shapes differ.
pub fn add_op<T: Number>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, StridaError> {
    elementwise_op(a, b, "add", |x, y| x + y)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
