// src/tensor/mod.rs

use crate::error::{Must, StridaError};
use crate::ops::traits::Number;

/// Mutators of a rank-constrained wrapper. Each one forwards to the inner tensor and
/// none of them can change its shape, so the wrapper is `Deref` but not `DerefMut`.
macro_rules! forward_shape_preserving_mutators {
    ($wrapper:ident) => {
        impl<T: Number> $wrapper<T> {
            /// See [`Tensor::set`].
            pub fn set(&mut self, value: T, idxs: &[usize]) -> Result<(), StridaError> {
                self.0.set(value, idxs)
            }

            /// See [`Tensor::must_set`].
            pub fn must_set(&mut self, value: T, idxs: &[usize]) {
                self.0.must_set(value, idxs)
            }

            /// The raw buffer; a slice, so its length is fixed.
            pub fn data_mut(&mut self) -> &mut [T] {
                self.0.data_mut()
            }

            pub fn fill_random<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
                self.0.fill_random(rng)
            }

            pub fn fill_random_below<R: rand::Rng + ?Sized>(&mut self, rng: &mut R, bound: T) {
                self.0.fill_random_below(rng, bound)
            }

            pub fn add_(&mut self, other: &Tensor<T>) -> Result<(), StridaError> {
                self.0.add_(other)
            }

            pub fn sub_(&mut self, other: &Tensor<T>) -> Result<(), StridaError> {
                self.0.sub_(other)
            }

            pub fn elem_mul_(&mut self, other: &Tensor<T>) -> Result<(), StridaError> {
                self.0.elem_mul_(other)
            }

            pub fn div_(&mut self, other: &Tensor<T>) -> Result<(), StridaError> {
                self.0.div_(other)
            }

            pub fn scale_(&mut self, c: T) {
                self.0.scale_(c)
            }
        }
    };
}

mod arithmetic_methods;
pub mod create;
mod inplace_arithmetic_methods;
pub mod matrix;
mod traits;
pub mod utils;
pub mod vector;

pub use create::{full, ones, rand, rand_below, randn, zeros};
pub use matrix::Matrix;
pub use vector::Vector;

use utils::{calculate_strides, logical_offsets};

/// A multi-dimensional strided array over a fixed numeric element kind.
///
/// A `Tensor` exclusively owns its flat buffer. Element `idxs` lives at
/// `data[Σ idxs[i] * strides[i]]`. Construction always produces row-major strides
/// (last axis fastest); [`Tensor::transpose`] permutes shape and strides while keeping the
/// buffer order, so a transposed tensor is read through its strides.
///
/// `Clone` (and [`Tensor::copy`]) duplicates shape, strides and data; two tensors never
/// share a buffer.
#[derive(Debug, Clone)]
pub struct Tensor<T: Number> {
    pub(crate) shape: Vec<usize>,
    pub(crate) strides: Vec<usize>,
    pub(crate) data: Vec<T>,
}

impl<T: Number> Tensor<T> {
    /// Creates a zero-filled tensor with the given shape and row-major strides.
    ///
    /// Dimensions are `usize`, so negative sizes cannot be expressed.
    pub fn new(shape: &[usize]) -> Self {
        let numel = shape.iter().product();
        Tensor {
            shape: shape.to_vec(),
            strides: calculate_strides(shape),
            data: vec![T::zero(); numel],
        }
    }

    /// Creates a tensor from row-major data.
    ///
    /// # Errors
    /// Returns `StridaError::TensorCreationError` if `data.len()` is not the product of `shape`.
    pub fn from_vec(data: Vec<T>, shape: Vec<usize>) -> Result<Self, StridaError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(StridaError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        let strides = calculate_strides(&shape);
        Ok(Tensor {
            shape,
            strides,
            data,
        })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements, always equal to the buffer length.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// The flat buffer, in storage order (not logical order for transposed tensors).
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the tensor, returning its flat buffer.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Computes the buffer offset of `idxs`.
    ///
    /// # Errors
    /// - `WrongNumberOfIndices` if `idxs.len()` differs from the rank.
    /// - `IndexOutOfBounds` if any `idxs[i] >= shape[i]`.
    pub fn offset(&self, idxs: &[usize]) -> Result<usize, StridaError> {
        if idxs.len() != self.shape.len() {
            return Err(StridaError::WrongNumberOfIndices {
                expected: self.shape.len(),
                actual: idxs.len(),
            });
        }
        let mut offset = 0;
        for (axis, (&idx, &dim)) in idxs.iter().zip(&self.shape).enumerate() {
            if idx >= dim {
                return Err(StridaError::IndexOutOfBounds {
                    index: idxs.to_vec(),
                    shape: self.shape.clone(),
                });
            }
            offset += idx * self.strides[axis];
        }
        Ok(offset)
    }

    /// Reads the element at `idxs`.
    pub fn at(&self, idxs: &[usize]) -> Result<T, StridaError> {
        let offset = self.offset(idxs)?;
        Ok(self.data[offset])
    }

    /// Writes `value` at `idxs`. Nothing is written when validation fails.
    pub fn set(&mut self, value: T, idxs: &[usize]) -> Result<(), StridaError> {
        let offset = self.offset(idxs)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Like [`Tensor::at`], but panics on an invalid index.
    #[track_caller]
    pub fn must_at(&self, idxs: &[usize]) -> T {
        self.at(idxs).must("Tensor::at")
    }

    /// Like [`Tensor::set`], but panics on an invalid index.
    #[track_caller]
    pub fn must_set(&mut self, value: T, idxs: &[usize]) {
        self.set(value, idxs).must("Tensor::set")
    }

    /// True iff both tensors hold the same number of elements, have the same rank and
    /// agree on every axis size (checked in that order).
    pub fn same_shape(&self, other: &Tensor<T>) -> bool {
        if self.numel() != other.numel() {
            return false;
        }
        if self.shape.len() != other.shape.len() {
            return false;
        }
        self.shape.iter().zip(&other.shape).all(|(a, b)| a == b)
    }

    /// A fully independent deep copy.
    pub fn copy(&self) -> Tensor<T> {
        self.clone()
    }

    /// Exact elementwise equality over identical shapes.
    ///
    /// Elements are compared in logical order, so a transposed tensor equals its
    /// materialised counterpart. No tolerance is applied.
    pub fn equal(&self, other: &Tensor<T>) -> bool {
        if !self.same_shape(other) {
            return false;
        }
        if self.strides == other.strides {
            return self.data == other.data;
        }
        let lhs = logical_offsets(&self.shape, &self.strides);
        let rhs = logical_offsets(&other.shape, &other.strides);
        lhs.iter()
            .zip(&rhs)
            .all(|(&i, &j)| self.data[i] == other.data[j])
    }

    /// Checks if the strides are the row-major strides of the shape.
    pub fn is_contiguous(&self) -> bool {
        let mut expected = 1;
        for i in (0..self.shape.len()).rev() {
            let dim = self.shape[i];
            if dim == 0 {
                return true;
            }
            if dim != 1 {
                if self.strides[i] != expected {
                    return false;
                }
                expected *= dim;
            }
        }
        true
    }

    /// Returns a row-major tensor holding the elements in logical order.
    pub fn contiguous(&self) -> Tensor<T> {
        if self.is_contiguous() {
            return self.clone();
        }
        let data = logical_offsets(&self.shape, &self.strides)
            .into_iter()
            .map(|offset| self.data[offset])
            .collect();
        Tensor {
            shape: self.shape.clone(),
            strides: calculate_strides(&self.shape),
            data,
        }
    }
}
