// src/ops/arithmetic/mul.rs

use super::elementwise_op;
use crate::error::StridaError;
use crate::ops::traits::Number;
use crate::tensor::Tensor;

/// Performs element-wise (Hadamard) multiplication of two tensors of identical shape.
///
/// For the matrix product see [`crate::ops::linalg::matmul_op`].
pub fn elem_mul_op<T: Number>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, StridaError> {
    elementwise_op(a, b, "elem_mul", |x, y| x * y)
}
