// src/tensor/create.rs

use crate::error::StridaError;
use crate::ops::traits::Number;
use crate::tensor::Tensor;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Creates a new tensor filled with zeros with the specified shape.
pub fn zeros<T: Number>(shape: &[usize]) -> Tensor<T> {
    Tensor::new(shape)
}

/// Creates a new tensor filled with ones with the specified shape.
pub fn ones<T: Number>(shape: &[usize]) -> Tensor<T> {
    full(shape, T::one())
}

/// Creates a new tensor filled with a specific value with the specified shape.
pub fn full<T: Number>(shape: &[usize], value: T) -> Tensor<T> {
    let mut tensor = Tensor::new(shape);
    tensor.data.fill(value);
    tensor
}

// Random fixtures. The algorithms never draw random numbers; these exist for tests
// and benchmarks.

/// A tensor of [`Number::random_value`] draws from the thread-local generator.
pub fn rand<T: Number>(shape: &[usize]) -> Tensor<T> {
    let mut tensor = Tensor::new(shape);
    tensor.fill_random(&mut rand::thread_rng());
    tensor
}

/// A tensor of draws in `[0, bound)` from the thread-local generator.
///
/// # Panics
/// Panics if `bound` is not strictly positive.
pub fn rand_below<T: Number>(shape: &[usize], bound: T) -> Tensor<T> {
    let mut tensor = Tensor::new(shape);
    tensor.fill_random_below(&mut rand::thread_rng(), bound);
    tensor
}

/// A tensor of standard normal draws. Only float kinds have a normal distribution.
pub fn randn<T>(shape: &[usize]) -> Result<Tensor<T>, StridaError>
where
    T: Number,
    StandardNormal: Distribution<T>,
{
    let numel = shape.iter().product();
    let mut rng = rand::thread_rng();
    let data_vec: Vec<T> = (0..numel)
        .map(|_| StandardNormal.sample(&mut rng))
        .collect();
    Tensor::from_vec(data_vec, shape.to_vec())
}

impl<T: Number> Tensor<T> {
    /// Overwrites every element with [`Number::random_value`].
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for value in self.data.iter_mut() {
            *value = T::random_value(rng);
        }
    }

    /// Overwrites every element with a draw in `[0, bound)`.
    ///
    /// # Panics
    /// Panics if `bound` is not strictly positive.
    pub fn fill_random_below<R: Rng + ?Sized>(&mut self, rng: &mut R, bound: T) {
        for value in self.data.iter_mut() {
            *value = T::random_below(rng, bound);
        }
    }
}
