//! Common test utilities
#![allow(dead_code)]

use proptest::prelude::*;
use spla::prelude::*;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert a scalar is within an absolute tolerance of the expected value
pub fn assert_near(actual: f64, expected: f64, atol: f64) {
    assert!(
        (actual - expected).abs() < atol,
        "{} is not within {} of {}",
        actual,
        atol,
        expected
    );
}

/// Build a vector container from `(position, value)` pairs
pub fn vector<T: Value>(len: usize, default: T, entries: &[(usize, T)]) -> SparseTensor<T> {
    SparseTensor::from_entries(len, default, entries.iter().map(|&(i, v)| ([i], v)))
        .expect("entries must be in range")
}

/// Every position of `t`, read one at a time through `get`
pub fn dense_by_get<T: Value>(t: &SparseTensor<T>) -> Vec<T> {
    t.shape()
        .indices()
        .map(|i| t.get(&i).expect("index from shape is valid"))
        .collect()
}

/// Check the no-redundant-entry invariant
pub fn assert_no_default_entries<T: Value>(t: &SparseTensor<T>) {
    let default = t.default_value();
    for (index, value) in t.entries() {
        assert!(
            value != default,
            "entry {:?} stores the default {}",
            index,
            default
        );
    }
}

// ============================================================================
// Proptest generators
// ============================================================================

/// Small shapes (rank 0 to 3, extents 1 to 4)
pub fn arb_shape() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..5, 0..4)
}

/// A container over `shape` with values drawn from a narrow range, so that
/// collisions with the default (and between operands) are common
pub fn arb_tensor_with_shape(shape: Vec<usize>) -> impl Strategy<Value = SparseTensor<i64>> {
    let numel: usize = shape.iter().product();
    (
        -3i64..4,
        prop::collection::vec(prop::option::of(-3i64..4), numel),
    )
        .prop_map(move |(default, cells)| {
            let values: Vec<i64> = cells.into_iter().map(|c| c.unwrap_or(default)).collect();
            SparseTensor::from_dense(shape.clone(), default, &values).expect("values match shape")
        })
}

/// A single container of arbitrary small shape
pub fn arb_tensor() -> impl Strategy<Value = SparseTensor<i64>> {
    arb_shape().prop_flat_map(arb_tensor_with_shape)
}

/// Two containers sharing one shape
pub fn arb_tensor_pair() -> impl Strategy<Value = (SparseTensor<i64>, SparseTensor<i64>)> {
    arb_shape().prop_flat_map(|shape| {
        (
            arb_tensor_with_shape(shape.clone()),
            arb_tensor_with_shape(shape),
        )
    })
}
