// src/ops/arithmetic/scale.rs

use crate::ops::traits::Number;
use crate::tensor::Tensor;

/// Multiplies every element by the scalar `c`. Shape and strides are preserved.
pub fn scale_op<T: Number>(a: &Tensor<T>, c: T) -> Tensor<T> {
    Tensor {
        shape: a.shape.clone(),
        strides: a.strides.clone(),
        data: a.data.iter().map(|&x| x * c).collect(),
    }
}
