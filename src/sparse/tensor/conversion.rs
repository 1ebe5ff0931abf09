//! SparseTensor conversions: entry-type casts and dense interop

use tracing::trace;

use super::SparseTensor;
use crate::dtype::{Element, Value};
use crate::error::{Error, Result};
use crate::tensor::Shape;

impl<T: Element> SparseTensor<T> {
    /// Cast every position to another entry type
    ///
    /// The shape is kept, the default and each stored entry are cast
    /// independently through `f64`, and no storage is shared with `self`.
    /// A narrowing cast can map a stored entry onto the new default; such
    /// entries are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// # use spla::prelude::*;
    /// let ones = SparseTensor::<i32>::ones(3);
    /// let cast = ones.cast::<f64>();
    /// assert_eq!(cast, SparseTensor::<f64>::ones(3));
    /// ```
    pub fn cast<U: Element>(&self) -> SparseTensor<U> {
        let (from, to) = (T::DTYPE, U::DTYPE);
        trace!(%from, %to, nnz = self.sparsity(), "sparse cast");
        self.map(|v| U::from_f64(v.to_f64()))
    }
}

impl<T: Value> SparseTensor<T> {
    // =========================================================================
    // Dense Conversion
    // =========================================================================

    /// Materialize every position in row-major order
    ///
    /// This enumerates the full index space and is meant for small shapes.
    pub fn to_dense(&self) -> Vec<T> {
        self.shape
            .indices()
            .map(|index| {
                self.entries
                    .get(index.as_slice())
                    .copied()
                    .unwrap_or(self.default)
            })
            .collect()
    }

    /// Build a container from row-major dense values
    ///
    /// Values equal to `default` are not stored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `values.len()` differs from the number of
    /// positions in `shape`.
    pub fn from_dense(shape: impl Into<Shape>, default: T, values: &[T]) -> Result<Self> {
        let shape = shape.into();
        if values.len() as u128 != shape.numel() {
            return Err(Error::invalid_argument(
                "values",
                format!(
                    "expected {} values for shape {:?}, got {}",
                    shape.numel(),
                    shape,
                    values.len()
                ),
            ));
        }

        let entries = shape
            .indices()
            .zip(values.iter().copied())
            .filter(|&(_, v)| v != default)
            .collect();

        Ok(Self::from_parts(shape, default, entries))
    }
}
