// src/ops/view/mod.rs

pub mod transpose;

pub mod utils; // Declare the utils module

pub use transpose::transpose_op;
