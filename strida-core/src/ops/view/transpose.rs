// src/ops/view/transpose.rs

use super::utils;
use crate::error::{Must, StridaError};
use crate::ops::traits::Number;
use crate::tensor::Tensor;

/// Permutes the axes of a tensor.
///
/// `order[new_axis]` names the source axis that lands at `new_axis`; `None` reverses all
/// axes. Only shape and strides are permuted: the result owns a clone of the buffer in
/// its original order, and reads through the permuted strides.
///
/// # Errors
/// - `InvalidTransposeOrder` if `order.len()` differs from the rank.
/// - `InvalidAxis` if an entry is not below the rank.
/// - `DuplicateAxis` if an axis appears twice.
pub fn transpose_op<T: Number>(
    tensor: &Tensor<T>,
    order: Option<&[usize]>,
) -> Result<Tensor<T>, StridaError> {
    let rank = tensor.rank();
    let default_order;
    let order = match order {
        Some(order) => order,
        None => {
            default_order = utils::reversed_axes(rank);
            default_order.as_slice()
        }
    };
    utils::validate_permutation(rank, order)?;

    Ok(Tensor {
        shape: utils::permute_shape(&tensor.shape, order),
        strides: utils::permute_strides(&tensor.strides, order),
        data: tensor.data.clone(),
    })
}

impl<T: Number> Tensor<T> {
    /// Permutes the axes; see [`transpose_op`].
    pub fn transpose(&self, order: Option<&[usize]>) -> Result<Tensor<T>, StridaError> {
        transpose_op(self, order)
    }

    /// Like [`Tensor::transpose`], but panics on an invalid order.
    #[track_caller]
    pub fn must_transpose(&self, order: &[usize]) -> Tensor<T> {
        self.transpose(Some(order)).must("Tensor::transpose")
    }

    /// Reverses all axes. The default order is always valid.
    pub fn t(&self) -> Tensor<T> {
        self.transpose(None).must("Tensor::t")
    }
}

#[cfg(test)]
#[path = "transpose_test.rs"]
mod tests;
