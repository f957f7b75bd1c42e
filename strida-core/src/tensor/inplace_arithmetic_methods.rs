// src/tensor/inplace_arithmetic_methods.rs

use crate::error::StridaError;
use crate::ops::arithmetic::elementwise_op_inplace;
use crate::ops::traits::Number;
use crate::tensor::Tensor;

/// In-place elementwise arithmetic.
///
/// Operands must have identical shapes. On error `self` is left untouched.
/// `self` keeps its own strides: a transposed receiver is updated through its layout.
impl<T: Number> Tensor<T> {
    /// `self += other`.
    pub fn add_(&mut self, other: &Tensor<T>) -> Result<(), StridaError> {
        elementwise_op_inplace(self, other, "add_", |a, b| a + b)
    }

    /// `self -= other`.
    pub fn sub_(&mut self, other: &Tensor<T>) -> Result<(), StridaError> {
        elementwise_op_inplace(self, other, "sub_", |a, b| a - b)
    }

    /// `self *= other`, elementwise.
    pub fn elem_mul_(&mut self, other: &Tensor<T>) -> Result<(), StridaError> {
        elementwise_op_inplace(self, other, "elem_mul_", |a, b| a * b)
    }

    /// `self /= other`, with the kind's own division semantics.
    ///
    /// # Panics
    /// Integer kinds panic on a zero divisor, like the primitive `/`.
    pub fn div_(&mut self, other: &Tensor<T>) -> Result<(), StridaError> {
        elementwise_op_inplace(self, other, "div_", |a, b| a / b)
    }

    /// `self *= c` for every element.
    pub fn scale_(&mut self, c: T) {
        for value in self.data.iter_mut() {
            *value *= c;
        }
    }
}

#[cfg(test)]
#[path = "inplace_arithmetic_methods_test.rs"]
mod tests;
