//! Core SparseTensor implementation: struct, creation, subscript access

use std::collections::BTreeMap;
use std::fmt;

use crate::dtype::{DType, Element, Value};
use crate::error::Result;
use crate::tensor::{Index, Shape};

/// Sparse tensor over a fixed index space with a meaningful default value
///
/// Every valid index that is not explicitly stored reads as the default
/// value, so the container behaves as if it were dense while only storing
/// the positions that differ. The rank is carried by the shape: 0 for a
/// scalar, 1 for a vector, N for a tensor.
///
/// # Invariants
///
/// - No stored entry equals the default value. Every mutation that would
///   store the default removes the entry instead.
/// - Every stored index lies inside the shape.
///
/// # Example
///
/// ```
/// use spla::prelude::*;
///
/// let mut v = SparseTensor::<i64>::zeros(10);
/// v.set(&[1], -7)?;
/// v.set(&[3], 4)?;
/// v *= 2;
///
/// assert_eq!(v.get(&[1])?, -14);
/// assert_eq!(v.get(&[2])?, 0);
/// assert_eq!(v.sparsity(), 2);
/// # Ok::<(), spla::error::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SparseTensor<T: Value> {
    pub(crate) shape: Shape,
    pub(crate) default: T,
    pub(crate) entries: BTreeMap<Index, T>,
}

impl<T: Value> SparseTensor<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a container where every index holds `value`
    pub fn full(shape: impl Into<Shape>, value: T) -> Self {
        Self {
            shape: shape.into(),
            default: value,
            entries: BTreeMap::new(),
        }
    }

    /// Create a rank-0 container holding a single value
    pub fn scalar(value: T) -> Self {
        Self::full(Shape::scalar(), value)
    }

    /// Create a container from explicit `(index, value)` pairs
    ///
    /// Entries equal to `default` are dropped; later pairs overwrite earlier
    /// ones. Fails with `IndexOutOfRange` on the first invalid index, in
    /// which case nothing is built.
    pub fn from_entries<I, K>(shape: impl Into<Shape>, default: T, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<[usize]>,
    {
        let mut tensor = Self::full(shape, default);
        for (index, value) in entries {
            tensor.set(index.as_ref(), value)?;
        }
        Ok(tensor)
    }

    /// Assemble a container from parts produced by the engines, dropping any
    /// entry equal to the default.
    pub(crate) fn from_parts(shape: Shape, default: T, mut entries: BTreeMap<Index, T>) -> Self {
        entries.retain(|_, v| *v != default);
        Self {
            shape,
            default,
            entries,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of dimensions (0 for a scalar)
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Value assumed at every index that is not explicitly stored
    pub fn default_value(&self) -> T {
        self.default
    }

    /// Runtime tag of the entry type
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Number of explicitly stored entries
    pub fn sparsity(&self) -> usize {
        self.entries.len()
    }

    /// Total number of valid indices (product of the shape's extents)
    ///
    /// Saturates at `u128::MAX`.
    pub fn elements_in(&self) -> u128 {
        self.shape.numel()
    }

    /// Whether some valid index is not explicitly stored
    pub(crate) fn has_unstored(&self) -> bool {
        (self.sparsity() as u128) < self.elements_in()
    }

    /// Fraction of the index space that is explicitly stored
    pub fn density(&self) -> f64 {
        match self.elements_in() {
            0 => 0.0,
            n => self.sparsity() as f64 / n as f64,
        }
    }

    /// Bytes used by the explicit entries (indices plus values)
    pub fn memory_usage(&self) -> usize {
        let index_size = self.ndim() * std::mem::size_of::<usize>();
        self.sparsity() * (index_size + T::DTYPE.size_in_bytes())
    }

    /// Iterate over stored entries in ascending index order
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&[usize], T)> + '_ {
        self.entries.iter().map(|(k, &v)| (k.as_slice(), v))
    }

    // =========================================================================
    // Subscript access
    // =========================================================================

    /// Read the value at `index`
    ///
    /// Returns the stored entry if present and the default otherwise. Fails
    /// with `IndexOutOfRange` if `index` is not a valid position.
    pub fn get(&self, index: &[usize]) -> Result<T> {
        self.shape.check_index(index)?;
        Ok(self.entries.get(index).copied().unwrap_or(self.default))
    }

    /// Whether `index` is explicitly stored (out-of-range indices never are)
    pub fn is_stored(&self, index: &[usize]) -> bool {
        self.entries.contains_key(index)
    }

    /// Write `value` at `index`
    ///
    /// Writing the default value removes the entry, so repeated writes never
    /// grow storage beyond the number of non-default positions. Fails with
    /// `IndexOutOfRange` before touching storage.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        self.shape.check_index(index)?;
        if value == self.default {
            self.entries.remove(index);
        } else {
            self.entries.insert(Index::from_slice(index), value);
        }
        Ok(())
    }

    /// Read-modify-write at `index`, returning the value written
    ///
    /// This is the explicit form of a compound subscript assignment such as
    /// `v[i] += x`.
    pub fn update<F>(&mut self, index: &[usize], f: F) -> Result<T>
    where
        F: FnOnce(T) -> T,
    {
        let value = f(self.get(index)?);
        self.set(index, value)?;
        Ok(value)
    }

    /// Reset every position to `value`, dropping all stored entries
    pub fn fill(&mut self, value: T) {
        self.entries.clear();
        self.default = value;
    }
}

impl<T: Element> SparseTensor<T> {
    /// Create a container filled with the additive identity
    pub fn zeros(shape: impl Into<Shape>) -> Self {
        Self::full(shape, T::zero())
    }

    /// Create a container filled with the multiplicative identity
    pub fn ones(shape: impl Into<Shape>) -> Self {
        Self::full(shape, T::one())
    }
}

impl<T: Value> fmt::Debug for SparseTensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseTensor")
            .field("shape", &self.shape)
            .field("dtype", &T::DTYPE)
            .field("default", &self.default)
            .field("entries", &self.entries)
            .finish()
    }
}

/// Lists stored entries only, e.g. `{[1]: -14, [3]: 10}`
impl<T: Value> fmt::Display for SparseTensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (index, value)) in self.entries().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: {}", index, value)?;
        }
        f.write_str("}")
    }
}
