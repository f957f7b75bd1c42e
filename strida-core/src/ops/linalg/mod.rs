// src/ops/linalg/mod.rs

pub mod gauss;
pub mod matmul;

pub use gauss::{
    rank_of_matrix, rank_of_matrix_with, solve_gauss, solve_gauss_with, upper_triangular,
    upper_triangular_with, PivotStrategy, SolveOptions,
};
pub use matmul::{matmul_op, tensor_mul_op};
