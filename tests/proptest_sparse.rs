//! Property-based tests for SparseTensor
//!
//! Every property compares the sparse result against a dense oracle built
//! position by position, or checks that the stored-entry invariants survive
//! the operation.

mod common;

use common::{arb_tensor, arb_tensor_pair, assert_no_default_entries, dense_by_get};
use proptest::prelude::*;
use spla::prelude::*;

fn dense_zip(
    a: &SparseTensor<i64>,
    b: &SparseTensor<i64>,
    op: impl Fn(i64, i64) -> i64,
) -> Vec<i64> {
    dense_by_get(a)
        .into_iter()
        .zip(dense_by_get(b))
        .map(|(x, y)| op(x, y))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_add_matches_dense((a, b) in arb_tensor_pair()) {
        let sum = a.add(&b).unwrap();
        prop_assert_eq!(dense_by_get(&sum), dense_zip(&a, &b, |x, y| x + y));
        assert_no_default_entries(&sum);
    }

    #[test]
    fn prop_sub_mul_match_dense((a, b) in arb_tensor_pair()) {
        let diff = a.sub(&b).unwrap();
        let prod = a.mul(&b).unwrap();
        prop_assert_eq!(dense_by_get(&diff), dense_zip(&a, &b, |x, y| x - y));
        prop_assert_eq!(dense_by_get(&prod), dense_zip(&a, &b, |x, y| x * y));
        assert_no_default_entries(&diff);
        assert_no_default_entries(&prod);
    }

    #[test]
    fn prop_inplace_agrees_with_out_of_place((a, b) in arb_tensor_pair()) {
        let mut lhs = a.clone();
        lhs.add_inplace(&b).unwrap();
        prop_assert_eq!(&lhs, &a.add(&b).unwrap());

        let mut lhs = a.clone();
        lhs.mul_inplace(&b).unwrap();
        prop_assert_eq!(&lhs, &a.mul(&b).unwrap());
    }

    #[test]
    fn prop_comparisons_match_dense((a, b) in arb_tensor_pair()) {
        let lt = a.elementwise_lt(&b).unwrap();
        let expected: Vec<bool> = dense_by_get(&a)
            .into_iter()
            .zip(dense_by_get(&b))
            .map(|(x, y)| x < y)
            .collect();
        prop_assert_eq!(dense_by_get(&lt), expected);
        assert_no_default_entries(&lt);

        let eq = a.elementwise_eq(&b).unwrap();
        prop_assert_eq!(eq.all(), dense_by_get(&a) == dense_by_get(&b));
    }

    #[test]
    fn prop_sum_matches_dense(a in arb_tensor()) {
        prop_assert_eq!(a.sum(), dense_by_get(&a).iter().sum::<i64>());
    }

    #[test]
    fn prop_dot_matches_dense((a, b) in arb_tensor_pair()) {
        let expected: i64 = dense_zip(&a, &b, |x, y| x * y).iter().sum();
        prop_assert_eq!(a.dot(&b).unwrap(), expected);
    }

    #[test]
    fn prop_sparsity_counts_non_defaults(a in arb_tensor()) {
        let default = a.default_value();
        let non_default = dense_by_get(&a).iter().filter(|&&v| v != default).count();
        prop_assert_eq!(a.sparsity(), non_default);
    }

    #[test]
    fn prop_rewriting_values_is_idempotent(a in arb_tensor()) {
        let mut b = a.clone();
        let indices: Vec<_> = a.shape().indices().collect();
        for index in &indices {
            let value = a.get(index).unwrap();
            b.set(index, value).unwrap();
        }
        prop_assert_eq!(&b, &a);
    }

    #[test]
    fn prop_cast_round_trip(a in arb_tensor()) {
        let back = a.cast::<f64>().cast::<i64>();
        prop_assert_eq!(&back, &a);
    }

    #[test]
    fn prop_dense_round_trip(a in arb_tensor()) {
        let dense = a.to_dense();
        let rebuilt = SparseTensor::from_dense(a.shape().clone(), a.default_value(), &dense).unwrap();
        prop_assert_eq!(&rebuilt, &a);
    }

    #[test]
    fn prop_scalar_mul_matches_dense(a in arb_tensor(), k in -3i64..4) {
        let mut scaled = a.clone();
        scaled *= k;
        let expected: Vec<i64> = dense_by_get(&a).iter().map(|x| x * k).collect();
        prop_assert_eq!(dense_by_get(&scaled), expected);
        assert_no_default_entries(&scaled);
    }
}
