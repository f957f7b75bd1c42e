// src/ops/arithmetic/mod.rs

//! Shape-checked elementwise arithmetic.
//!
//! Operands must have identical shapes (no broadcasting). When both operands share
//! the same strides the flat buffers are combined position by position; otherwise
//! elements are paired in logical order through each operand's strides.

pub mod add;
pub mod div;
pub mod mul;
pub mod scale;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::elem_mul_op;
pub use scale::scale_op;
pub use sub::sub_op;

use crate::error::StridaError;
use crate::ops::traits::Number;
use crate::tensor::utils::{calculate_strides, logical_offsets};
use crate::tensor::Tensor;

fn check_same_shape<T: Number>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    operation: &str,
) -> Result<(), StridaError> {
    if !a.same_shape(b) {
        return Err(StridaError::ShapeMismatch {
            expected: a.shape().to_vec(),
            actual: b.shape().to_vec(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// Builds a new tensor with `op(a[i], b[i])` at every position.
pub(crate) fn elementwise_op<T, F>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    operation: &str,
    op: F,
) -> Result<Tensor<T>, StridaError>
where
    T: Number,
    F: Fn(T, T) -> T,
{
    check_same_shape(a, b, operation)?;

    if a.strides == b.strides {
        let data = a.data.iter().zip(&b.data).map(|(&x, &y)| op(x, y)).collect();
        return Ok(Tensor {
            shape: a.shape.clone(),
            strides: a.strides.clone(),
            data,
        });
    }

    let a_offsets = logical_offsets(&a.shape, &a.strides);
    let b_offsets = logical_offsets(&b.shape, &b.strides);
    let data = a_offsets
        .iter()
        .zip(&b_offsets)
        .map(|(&i, &j)| op(a.data[i], b.data[j]))
        .collect();
    Ok(Tensor {
        shape: a.shape.clone(),
        strides: calculate_strides(&a.shape),
        data,
    })
}

/// Applies `op(a[i], b[i])` into `a`, leaving `a` untouched when the shapes differ.
pub(crate) fn elementwise_op_inplace<T, F>(
    a: &mut Tensor<T>,
    b: &Tensor<T>,
    operation: &str,
    op: F,
) -> Result<(), StridaError>
where
    T: Number,
    F: Fn(T, T) -> T,
{
    check_same_shape(a, b, operation)?;

    if a.strides == b.strides {
        for (x, &y) in a.data.iter_mut().zip(&b.data) {
            *x = op(*x, y);
        }
        return Ok(());
    }

    let a_offsets = logical_offsets(&a.shape, &a.strides);
    let b_offsets = logical_offsets(&b.shape, &b.strides);
    for (&i, &j) in a_offsets.iter().zip(&b_offsets) {
        a.data[i] = op(a.data[i], b.data[j]);
    }
    Ok(())
}
