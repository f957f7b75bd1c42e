// src/ops/arithmetic/sub.rs

use super::elementwise_op;
use crate::error::StridaError;
use crate::ops::traits::Number;
use crate::tensor::Tensor;

/// Performs element-wise subtraction `a - b` of two tensors of identical shape.
///
/// Unsigned kinds follow the primitive's own underflow behaviour.
pub fn sub_op<T: Number>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, StridaError> {
    elementwise_op(a, b, "sub", |x, y| x - y)
}
