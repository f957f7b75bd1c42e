//! # Tensor Operations Module (`ops`)
//!
//! Operations are grouped into submodules by functionality. Each one has a core function
//! named `xxx_op` that takes its operands by reference and returns a fresh tensor, plus a
//! matching method on [`Tensor`](crate::Tensor) that delegates to it.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: Element-wise arithmetic (add, sub, elem_mul, div, scale).
//! - [`linalg`]: Matrix multiplication and the Gaussian elimination solver.
//! - [`view`]: Axis permutation (transpose).
//! - [`traits`]: The [`Number`](traits::Number) element-kind abstraction.

pub mod traits;

pub mod arithmetic;
pub mod linalg;
pub mod view;
