// src/tensor/vector.rs

use crate::error::StridaError;
use crate::ops::traits::Number;
use crate::tensor::Tensor;
use std::ops::Deref;

/// A [`Tensor`] constrained to exactly one axis.
///
/// Like [`Matrix`](crate::Matrix), it derefs to the tensor for reading only.
///
/// ```compile_fail
/// use strida_core::{Tensor, Vector};
///
/// let mut v = Vector::<f64>::new(3);
/// *v = Tensor::new(&[3, 1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T: Number>(Tensor<T>);

impl<T: Number> Vector<T> {
    /// A zero-filled vector of `len` elements.
    pub fn new(len: usize) -> Self {
        Vector(Tensor::new(&[len]))
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        Vector(Tensor {
            shape: vec![len],
            strides: vec![1],
            data,
        })
    }

    /// Wraps a rank-1 tensor.
    ///
    /// # Errors
    /// Returns `StridaError::RankMismatch` if the tensor does not have exactly one axis.
    pub fn from_tensor(tensor: Tensor<T>) -> Result<Self, StridaError> {
        if tensor.rank() != 1 {
            return Err(StridaError::RankMismatch {
                expected: 1,
                actual: tensor.rank(),
                operation: "Vector::from_tensor".to_string(),
            });
        }
        Ok(Vector(tensor))
    }

    pub fn len(&self) -> usize {
        self.0.shape[0]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub(crate) fn get1(&self, i: usize) -> T {
        self.0.data[i * self.0.strides[0]]
    }

    #[inline]
    pub(crate) fn set1(&mut self, i: usize, value: T) {
        let offset = i * self.0.strides[0];
        self.0.data[offset] = value;
    }

    /// Elements in logical order.
    pub fn to_vec(&self) -> Vec<T> {
        (0..self.len()).map(|i| self.get1(i)).collect()
    }

    pub fn as_tensor(&self) -> &Tensor<T> {
        &self.0
    }

    pub fn into_tensor(self) -> Tensor<T> {
        self.0
    }
}

forward_shape_preserving_mutators!(Vector);

impl<T: Number> Deref for Vector<T> {
    type Target = Tensor<T>;

    fn deref(&self) -> &Tensor<T> {
        &self.0
    }
}

impl<T: Number> TryFrom<Tensor<T>> for Vector<T> {
    type Error = StridaError;

    fn try_from(tensor: Tensor<T>) -> Result<Self, Self::Error> {
        Vector::from_tensor(tensor)
    }
}

impl<T: Number> From<Vector<T>> for Tensor<T> {
    fn from(vector: Vector<T>) -> Self {
        vector.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_basics() {
        let mut v = Vector::<i64>::new(3);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        v.set(5, &[1]).unwrap();
        assert_eq!(v.to_vec(), vec![0, 5, 0]);
        assert!(v.at(&[3]).is_err());
    }

    #[test]
    fn test_vector_mutators_keep_shape() {
        let mut v = Vector::from_vec(vec![1.0f64, 2.0, 3.0]);
        v.scale_(2.0);
        v.add_(&Tensor::from_vec(vec![1.0, 1.0, 1.0], vec![3]).unwrap())
            .unwrap();
        v.data_mut()[0] = 0.0;
        assert_eq!(v.to_vec(), vec![0.0, 5.0, 7.0]);

        // A rank-2 operand is rejected and the vector is left as it was.
        assert!(v.sub_(&Tensor::new(&[3, 1])).is_err());
        assert_eq!(v.shape(), &[3]);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_vector_rank_check() {
        assert!(Vector::from_tensor(Tensor::<f32>::new(&[2, 1])).is_err());
        let v = Vector::from_tensor(Tensor::<f32>::new(&[4])).unwrap();
        assert_eq!(v.len(), 4);
        let back: Tensor<f32> = v.into();
        assert_eq!(back.shape(), &[4]);
    }
}
