//! Relational elementwise operations producing boolean containers

use crate::dtype::Value;
use crate::error::Result;
use crate::sparse::SparseTensor;

impl<T: Value> SparseTensor<T> {
    /// Element-wise equality mask: `C[i] = A[i] == B[i]`
    ///
    /// Combine with [`SparseTensor::all`] to test dense-view equality. Unlike
    /// `==` on the containers, this ignores how each side is stored.
    pub fn elementwise_eq(&self, other: &Self) -> Result<SparseTensor<bool>> {
        self.zip_with(other, |a, b| a == b)
    }

    /// Element-wise inequality mask: `C[i] = A[i] != B[i]`
    pub fn elementwise_ne(&self, other: &Self) -> Result<SparseTensor<bool>> {
        self.zip_with(other, |a, b| a != b)
    }
}

impl<T: Value + PartialOrd> SparseTensor<T> {
    /// Element-wise less-than mask: `C[i] = A[i] < B[i]`
    pub fn elementwise_lt(&self, other: &Self) -> Result<SparseTensor<bool>> {
        self.zip_with(other, |a, b| a < b)
    }

    /// Element-wise less-or-equal mask: `C[i] = A[i] <= B[i]`
    pub fn elementwise_le(&self, other: &Self) -> Result<SparseTensor<bool>> {
        self.zip_with(other, |a, b| a <= b)
    }

    /// Element-wise greater-than mask: `C[i] = A[i] > B[i]`
    pub fn elementwise_gt(&self, other: &Self) -> Result<SparseTensor<bool>> {
        self.zip_with(other, |a, b| a > b)
    }

    /// Element-wise greater-or-equal mask: `C[i] = A[i] >= B[i]`
    pub fn elementwise_ge(&self, other: &Self) -> Result<SparseTensor<bool>> {
        self.zip_with(other, |a, b| a >= b)
    }
}
