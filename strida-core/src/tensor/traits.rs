// src/tensor/traits.rs

use crate::ops::traits::Number;
use crate::tensor::Tensor;

// --- Trait Implementations ---

impl<T: Number> PartialEq for Tensor<T> {
    /// Same semantics as [`Tensor::equal`]: identical shape, then exact elementwise
    /// equality in logical order.
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Number> TryFrom<(Vec<T>, Vec<usize>)> for Tensor<T> {
    type Error = crate::error::StridaError;

    fn try_from((data, shape): (Vec<T>, Vec<usize>)) -> Result<Self, Self::Error> {
        Tensor::from_vec(data, shape)
    }
}
