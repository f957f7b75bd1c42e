// src/tensor/inplace_arithmetic_methods_test.rs

use crate::error::StridaError;
use crate::tensor::Tensor;

fn tensor_f32(data: Vec<f32>, shape: Vec<usize>) -> Tensor<f32> {
    Tensor::from_vec(data, shape).unwrap()
}

#[test]
fn test_add_inplace_simple_correctness() -> Result<(), StridaError> {
    let mut a = tensor_f32(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let b = tensor_f32(vec![5.0, 6.0, 7.0, 8.0], vec![2, 2]);

    a.add_(&b)?;

    assert_eq!(a.data(), &[6.0, 8.0, 10.0, 12.0]);
    assert_eq!(a.shape(), &[2, 2]);
    Ok(())
}

#[test]
fn test_sub_and_elem_mul_inplace() -> Result<(), StridaError> {
    let mut a = Tensor::from_vec(vec![10i64, 20, 30], vec![3])?;
    let b = Tensor::from_vec(vec![1i64, 2, 3], vec![3])?;
    a.sub_(&b)?;
    assert_eq!(a.data(), &[9, 18, 27]);
    a.elem_mul_(&b)?;
    assert_eq!(a.data(), &[9, 36, 81]);
    Ok(())
}

#[test]
fn test_div_inplace_integer_truncates() -> Result<(), StridaError> {
    let mut a = Tensor::from_vec(vec![7i32, -7, 9], vec![3])?;
    let b = Tensor::from_vec(vec![2i32, 2, 3], vec![3])?;
    a.div_(&b)?;
    assert_eq!(a.data(), &[3, -3, 3]);
    Ok(())
}

#[test]
fn test_inplace_shape_mismatch_leaves_receiver() {
    let mut a = tensor_f32(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let b = tensor_f32(vec![1.0, 2.0, 3.0, 4.0], vec![4]);
    let before = a.copy();

    let result = a.add_(&b);
    assert!(matches!(result, Err(StridaError::ShapeMismatch { .. })));
    assert_eq!(a, before);
    assert!(a.div_(&b).is_err());
    assert_eq!(a, before);
}

#[test]
fn test_inplace_with_transposed_operand() -> Result<(), StridaError> {
    // a is [[1,2],[3,4]], b is the transposed view of the same values.
    let mut a = Tensor::from_vec(vec![1i32, 2, 3, 4], vec![2, 2])?;
    let b = a.t();
    a.add_(&b)?;
    assert_eq!(a.data(), &[2, 5, 5, 8]);
    Ok(())
}

#[test]
fn test_inplace_on_transposed_receiver() -> Result<(), StridaError> {
    let mut a = Tensor::from_vec(vec![1i32, 2, 3, 4, 5, 6], vec![2, 3])?.t();
    let ones = crate::tensor::ones::<i32>(&[3, 2]);
    a.add_(&ones)?;
    assert_eq!(a.strides(), &[1, 3]);
    assert_eq!(a.at(&[2, 1])?, 7);
    assert_eq!(a.at(&[0, 1])?, 5);
    Ok(())
}

#[test]
fn test_scale_inplace() {
    let mut a = tensor_f32(vec![1.0, -2.0, 0.5], vec![3]);
    a.scale_(2.0);
    assert_eq!(a.data(), &[2.0, -4.0, 1.0]);
}
