use super::*;
use num_complex::Complex;

fn sequential(rows: usize, cols: usize) -> Tensor<i32> {
    let data = (1..=(rows * cols) as i32).collect();
    Tensor::from_vec(data, vec![rows, cols]).unwrap()
}

#[test]
fn test_matmul_basic() {
    let a = sequential(2, 3);
    let b = sequential(3, 2);
    let c = matmul_op(&a, &b).unwrap();
    assert_eq!(c.shape(), &[2, 2]);
    assert_eq!(c.data(), &[22, 28, 49, 64]);
}

#[test]
fn test_matmul_identity_and_zero() {
    let a = Tensor::from_vec(vec![1.5f64, -2.0, 0.5, 4.0], vec![2, 2]).unwrap();
    let id = Matrix::<f64>::identity(2);
    assert_eq!(matmul_op(&a, &id).unwrap(), a);
    assert_eq!(matmul_op(&id, &a).unwrap(), a);

    let zero = Tensor::<f64>::new(&[2, 3]);
    let c = matmul_op(&a, &zero).unwrap();
    assert_eq!(c.shape(), &[2, 3]);
    assert!(c.data().iter().all(|&x| x == 0.0));
}

#[test]
fn test_matmul_reads_transposed_operands() {
    let a = sequential(3, 2).t(); // logical [[1,3,5],[2,4,6]]
    let b = sequential(3, 2);
    let c = matmul_op(&a, &b).unwrap();
    assert_eq!(c.data(), &[35, 44, 44, 56]);
    assert_eq!(c, matmul_op(&a.contiguous(), &b).unwrap());
}

#[test]
fn test_matmul_shape_mismatch() {
    let a = sequential(2, 3);
    let b = sequential(2, 3);
    match matmul_op(&a, &b) {
        Err(StridaError::ShapeMismatch { actual, .. }) => assert_eq!(actual, vec![2, 3]),
        other => panic!("Expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_matmul_rank_mismatch() {
    let a = Tensor::<i32>::new(&[2, 2, 2]);
    let b = sequential(2, 2);
    assert!(matches!(
        matmul_op(&a, &b),
        Err(StridaError::RankMismatch { expected: 2, actual: 3, .. })
    ));
    assert!(matches!(
        matmul_op(&b, &Tensor::new(&[2])),
        Err(StridaError::RankMismatch { actual: 1, .. })
    ));
}

#[test]
fn test_matmul_complex() {
    let i = Complex::new(0.0f64, 1.0);
    let one = Complex::new(1.0f64, 0.0);
    let a = Tensor::from_vec(vec![i, one], vec![1, 2]).unwrap();
    let b = Tensor::from_vec(vec![i, one], vec![2, 1]).unwrap();
    // i*i + 1*1 = 0
    let c = matmul_op(&a, &b).unwrap();
    assert_eq!(c.data(), &[Complex::new(0.0, 0.0)]);
}

#[test]
fn test_tensor_mul_dispatch() {
    let a = sequential(2, 3);
    let b = sequential(3, 2);
    assert_eq!(a.mul(&b).unwrap().data(), &[22, 28, 49, 64]);

    let v = Tensor::<i32>::new(&[3]);
    assert!(matches!(
        v.mul(&v),
        Err(StridaError::UnsupportedOperation(_))
    ));
    let cube = Tensor::<i32>::new(&[2, 2, 2]);
    assert!(matches!(
        tensor_mul_op(&cube, &cube),
        Err(StridaError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_mul_inplace() {
    let mut a = sequential(2, 3);
    let b = sequential(3, 2);
    a.mul_(&b).unwrap();
    assert_eq!(a.shape(), &[2, 2]);
    assert_eq!(a.strides(), &[2, 1]);
    assert_eq!(a.data(), &[22, 28, 49, 64]);

    let before = a.clone();
    assert!(a.mul_(&sequential(3, 3)).is_err());
    assert_eq!(a, before);
}

#[test]
fn test_matrix_matmul() {
    let a = Matrix::from_vec(vec![2i64, 1, 1, 3], 2, 2).unwrap();
    let x = Matrix::from_vec(vec![1i64, 3], 2, 1).unwrap();
    let b = a.matmul(&x).unwrap();
    assert_eq!(b.rows(), 2);
    assert_eq!(b.cols(), 1);
    assert_eq!(b.data(), &[5, 10]);
}
