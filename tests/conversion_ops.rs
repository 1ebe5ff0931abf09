//! Integration tests for casts and dense interop

mod common;

use common::{assert_allclose_f64, assert_no_default_entries, dense_by_get, vector};
use spla::prelude::*;

#[test]
fn test_cast_keeps_shape_and_values() {
    let v = SparseTensor::from_entries([2, 2], 1i32, [([0, 1], 5), ([1, 1], -2)]).unwrap();
    let f = v.cast::<f64>();

    assert_eq!(f.shape(), v.shape());
    assert_eq!(f.dtype(), DType::F64);
    assert_eq!(f.default_value(), 1.0);
    assert_eq!(f.sparsity(), 2);
    assert_eq!(dense_by_get(&f), vec![1.0, 5.0, 1.0, -2.0]);
}

#[test]
fn test_cast_is_independent() {
    let v = vector(3, 0i64, &[(2, 4)]);
    let mut c = v.cast::<i64>();
    c.set(&[0], 9).unwrap();
    assert_eq!(v.get(&[0]).unwrap(), 0);
    assert_eq!(v.sparsity(), 1);
}

#[test]
fn test_narrowing_cast_drops_collapsed_entries() {
    let v = vector(4, 1.0f64, &[(0, 1.25), (1, 2.5), (3, 0.75)]);
    let i = v.cast::<i32>();

    assert_eq!(i.default_value(), 1);
    assert_eq!(dense_by_get(&i), vec![1, 2, 1, 0]);
    // 1.25 truncates to the default and is no longer stored
    assert!(!i.is_stored(&[0]));
    assert_eq!(i.sparsity(), 2);
    assert_no_default_entries(&i);
}

#[test]
fn test_cast_of_ones_equals_ones() {
    assert_eq!(
        SparseTensor::<i32>::ones([3, 2]).cast::<f32>(),
        SparseTensor::<f32>::ones([3, 2])
    );
    assert_eq!(
        SparseTensor::<u8>::zeros(5).cast::<i16>(),
        SparseTensor::<i16>::zeros(5)
    );
}

#[test]
fn test_to_dense_row_major() {
    let m = SparseTensor::from_entries([2, 3], 0.0f64, [([0, 2], 1.0), ([1, 0], 2.0)]).unwrap();
    assert_allclose_f64(
        &m.to_dense(),
        &[0.0, 0.0, 1.0, 2.0, 0.0, 0.0],
        0.0,
        0.0,
        "to_dense",
    );
    assert_eq!(SparseTensor::scalar(7u16).to_dense(), vec![7]);
    assert!(SparseTensor::<i8>::zeros([4, 0]).to_dense().is_empty());
}

#[test]
fn test_from_dense() {
    let values = [3, 3, 1, 3, 0, 3];
    let t = SparseTensor::from_dense([3, 2], 3i32, &values).unwrap();
    assert_eq!(t.sparsity(), 2);
    assert_eq!(t.get(&[1, 0]).unwrap(), 1);
    assert_eq!(t.get(&[2, 0]).unwrap(), 0);
    assert_eq!(t.to_dense(), values.to_vec());
    assert_eq!(dense_by_get(&t), values.to_vec());
}

#[test]
fn test_from_dense_length_mismatch() {
    let err = SparseTensor::from_dense([2, 2], 0.0f32, &[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { arg: "values", .. }));
}

#[test]
fn test_density_and_memory() {
    let v = vector(8, 0.0f32, &[(1, 1.0), (6, 2.0)]);
    assert_eq!(v.density(), 0.25);
    assert_eq!(
        v.memory_usage(),
        2 * (std::mem::size_of::<usize>() + std::mem::size_of::<f32>())
    );

    assert_eq!(SparseTensor::<f64>::zeros(0).density(), 0.0);
}
