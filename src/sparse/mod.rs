//! Sparse containers for spla
//!
//! A [`SparseTensor`] stores an explicit map from index to value plus a
//! default value that covers every other index. The default need not be
//! zero: a container of ones with a handful of exceptions is as cheap as a
//! container of zeros with a handful of non-zeros.
//!
//! # Usage
//!
//! ```
//! use spla::prelude::*;
//!
//! let mut v = SparseTensor::<i64>::zeros(10);
//! v.set(&[1], -14)?;
//! v.set(&[3], 8)?;
//!
//! let mut w = SparseTensor::<i64>::zeros(10);
//! w.set(&[3], 2)?;
//! w.set(&[5], 1)?;
//!
//! v.add_inplace(&w)?;
//! assert_eq!(v.sparsity(), 3);
//! assert_eq!(v.dot(&w)?, 21);
//! assert!((v.norm(2) - 297f64.sqrt()).abs() < 1e-6);
//! # Ok::<(), spla::error::Error>(())
//! ```
//!
//! # Cost model
//!
//! - `get`/`set`: O(log nnz)
//! - binary elementwise operations: O(nnz_lhs + nnz_rhs)
//! - reductions: O(nnz + log(elements_in))
//!
//! Only [`SparseTensor::to_dense`] and [`SparseTensor::from_dense`] touch
//! every position of the index space.

mod tensor;

pub use tensor::SparseTensor;

/// Norm type for [`SparseTensor::norm_of`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormType {
    /// L1 norm: sum of absolute values
    L1,
    /// L2 norm: square root of sum of squares
    L2,
    /// General p-norm for the given order
    Lp(i32),
    /// L-infinity norm: maximum absolute value
    Linf,
}
