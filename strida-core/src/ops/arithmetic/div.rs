// src/ops/arithmetic/div.rs

use super::elementwise_op;
use crate::error::StridaError;
use crate::ops::traits::Number;
use crate::tensor::Tensor;

/// Performs element-wise division `a / b` of two tensors of identical shape.
///
/// Division is whatever the element kind defines: integers truncate and panic on a
/// zero divisor, floats and complex values produce infinities or NaN. There is no
/// divide-by-zero guard.
pub fn div_op<T: Number>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, StridaError> {
    elementwise_op(a, b, "div", |x, y| x / y)
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
