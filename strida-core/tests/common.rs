use strida_core::{Matrix, Number, Tensor, Vector};

// Helpers shared by the integration test crates. Not every test crate uses every helper.

/// Installs `env_logger` once so `RUST_LOG=debug cargo test` shows solver traces.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    // If it fails (already initialized), that's okay.
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn create_test_tensor<T: Number>(data: Vec<T>, shape: Vec<usize>) -> Tensor<T> {
    Tensor::from_vec(data, shape).expect("Test tensor creation failed")
}

/// Row-major `1..=rows*cols` as a matrix.
#[allow(dead_code)]
pub(crate) fn sequential_matrix(rows: usize, cols: usize) -> Matrix<i64> {
    let data = (1..=(rows * cols) as i64).collect();
    Matrix::from_vec(data, rows, cols).expect("Test matrix creation failed")
}

/// `A x` for a vector `x`, as a flat vector.
#[allow(dead_code)]
pub(crate) fn apply<T: Number>(a: &Matrix<T>, x: &Vector<T>) -> Vec<T> {
    let column = Tensor::from_vec(x.to_vec(), vec![x.len(), 1]).expect("column creation failed");
    a.as_tensor()
        .matmul(&column)
        .expect("matmul failed")
        .into_data()
}
