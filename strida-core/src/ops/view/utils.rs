use crate::error::StridaError;

/// Full axis reversal, the default transpose order.
pub fn reversed_axes(rank: usize) -> Vec<usize> {
    (0..rank).rev().collect()
}

/// Validates a transpose order against the tensor rank.
///
/// Entries are checked left to right: an out-of-range axis is reported before a
/// repeated one that appears later.
pub fn validate_permutation(rank: usize, order: &[usize]) -> Result<(), StridaError> {
    if order.len() != rank {
        return Err(StridaError::InvalidTransposeOrder {
            order_len: order.len(),
            rank,
        });
    }
    let mut seen = vec![false; rank];
    for &axis in order {
        if axis >= rank {
            return Err(StridaError::InvalidAxis { axis, rank });
        }
        if seen[axis] {
            return Err(StridaError::DuplicateAxis { axis });
        }
        seen[axis] = true;
    }
    Ok(())
}

/// Calculates the new shape after permutation: `shape'[new] = shape[order[new]]`.
pub fn permute_shape(shape: &[usize], order: &[usize]) -> Vec<usize> {
    order.iter().map(|&axis| shape[axis]).collect()
}

/// Calculates the new strides after permutation.
pub fn permute_strides(strides: &[usize], order: &[usize]) -> Vec<usize> {
    order.iter().map(|&axis| strides[axis]).collect()
}
