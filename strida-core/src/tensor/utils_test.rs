use super::*;

#[test]
fn test_calculate_strides() {
    assert_eq!(calculate_strides(&[2, 3]), vec![3, 1]);
    assert_eq!(calculate_strides(&[2, 3, 4]), vec![12, 4, 1]);
    assert_eq!(calculate_strides(&[5]), vec![1]);
    assert_eq!(calculate_strides(&[]), Vec::<usize>::new());
    // A zero-sized axis still yields well-formed strides.
    assert_eq!(calculate_strides(&[2, 0, 3]), vec![0, 3, 1]);
}

#[test]
fn test_logical_offsets() {
    assert_eq!(logical_offsets(&[2, 3], &[3, 1]), vec![0, 1, 2, 3, 4, 5]);
    // [3, 2] view over a row-major [2, 3] buffer.
    assert_eq!(logical_offsets(&[3, 2], &[1, 3]), vec![0, 3, 1, 4, 2, 5]);
    assert!(logical_offsets(&[0, 4], &[4, 1]).is_empty());
    // A scalar has exactly one element at offset 0.
    assert_eq!(logical_offsets(&[], &[]), vec![0]);
}

#[test]
fn test_logical_offsets_carry_across_axes() {
    // [2, 3, 4] buffer read with axes reversed: shape [4, 3, 2], strides [1, 4, 12].
    let offsets = logical_offsets(&[4, 3, 2], &[1, 4, 12]);
    assert_eq!(offsets.len(), 24);
    assert_eq!(&offsets[..6], &[0, 12, 4, 16, 8, 20]);
    assert_eq!(&offsets[6..8], &[1, 13]);
    assert_eq!(offsets[23], 23);

    let mut sorted = offsets.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..24).collect::<Vec<_>>());
}
