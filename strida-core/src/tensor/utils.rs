// src/tensor/utils.rs

/// Calculates the row-major strides for a given shape.
/// Strides represent the number of elements to skip in the flattened data array
/// to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Buffer offsets of every element, visited in logical row-major order.
///
/// Walks the coordinates with a single in-place counter (last axis fastest) and keeps the
/// running offset in step with it.
pub fn logical_offsets(shape: &[usize], strides: &[usize]) -> Vec<usize> {
    let numel: usize = shape.iter().product();
    let mut offsets = Vec::with_capacity(numel);
    let mut coord = vec![0; shape.len()];
    let mut offset = 0;

    for _ in 0..numel {
        offsets.push(offset);
        for axis in (0..shape.len()).rev() {
            coord[axis] += 1;
            offset += strides[axis];
            if coord[axis] < shape[axis] {
                break;
            }
            // Reset and carry into the next axis.
            offset -= coord[axis] * strides[axis];
            coord[axis] = 0;
        }
    }
    offsets
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
