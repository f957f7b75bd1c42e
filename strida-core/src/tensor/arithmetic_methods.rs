// src/tensor/arithmetic_methods.rs

use crate::error::StridaError;
use crate::ops::arithmetic;
use crate::ops::traits::Number;
use crate::tensor::Tensor;

/// Elementwise arithmetic returning a new tensor. See [`crate::ops::arithmetic`].
impl<T: Number> Tensor<T> {
    pub fn add(&self, other: &Tensor<T>) -> Result<Tensor<T>, StridaError> {
        arithmetic::add_op(self, other)
    }

    pub fn sub(&self, other: &Tensor<T>) -> Result<Tensor<T>, StridaError> {
        arithmetic::sub_op(self, other)
    }

    /// Hadamard product. For the matrix product use [`Tensor::mul`].
    pub fn elem_mul(&self, other: &Tensor<T>) -> Result<Tensor<T>, StridaError> {
        arithmetic::elem_mul_op(self, other)
    }

    pub fn div(&self, other: &Tensor<T>) -> Result<Tensor<T>, StridaError> {
        arithmetic::div_op(self, other)
    }

    pub fn scale(&self, c: T) -> Tensor<T> {
        arithmetic::scale_op(self, c)
    }
}
