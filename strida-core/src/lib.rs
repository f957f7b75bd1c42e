//! Strided N-dimensional tensors over a closed set of numeric kinds.
//!
//! Integer, float and complex elements share one generic [`Tensor`]; the kind-specific
//! behaviour (magnitude, tolerance, exact integer arithmetic) lives in [`Number`].
//! On top of the tensor sit shape-checked elementwise arithmetic, metadata-only transpose,
//! dense matrix multiplication and a Gaussian elimination solver that classifies systems
//! as uniquely solvable, inconsistent or underdetermined.

pub mod error;
pub mod ops;
pub mod tensor;

pub use error::{Must, StridaError};
pub use ops::arithmetic::{add_op, div_op, elem_mul_op, scale_op, sub_op};
pub use ops::linalg::{
    matmul_op, rank_of_matrix, rank_of_matrix_with, solve_gauss, solve_gauss_with,
    tensor_mul_op, upper_triangular, upper_triangular_with, PivotStrategy, SolveOptions,
};
pub use ops::traits::{Number, NumberKind};
pub use ops::view::transpose_op;
pub use tensor::{Matrix, Tensor, Vector};

// Re-export traits required by public functions/structs
pub use num_complex;
pub use num_traits;
