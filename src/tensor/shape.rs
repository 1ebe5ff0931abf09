//! Shape type: the index space of a container

use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

use crate::error::{Error, Result};

/// Stack allocation threshold for dimensions
/// Most containers have 4 or fewer dimensions, so we stack-allocate up to 4
pub(crate) const STACK_DIMS: usize = 4;

/// An index into a container: one coordinate per dimension
pub type Index = SmallVec<[usize; STACK_DIMS]>;

/// Shape type: per-dimension extents of a container
///
/// A shape of length 0 describes a scalar (exactly one index, `[]`), length 1
/// a vector, length N a tensor. Shapes are immutable once a container owns
/// them.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape(SmallVec<[usize; STACK_DIMS]>);

impl Shape {
    /// Create the rank-0 (scalar) shape.
    pub fn scalar() -> Self {
        Self(SmallVec::new())
    }

    /// View shape as a slice.
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Number of dimensions in this shape.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Total number of valid indices (product of extents, 1 for a scalar).
    ///
    /// The count is exact up to `u128::MAX` and saturates beyond it; index
    /// spaces need not fit in memory, or even in `usize`.
    pub fn numel(&self) -> u128 {
        if self.0.contains(&0) {
            return 0;
        }
        self.0
            .iter()
            .try_fold(1u128, |acc, &d| acc.checked_mul(d as u128))
            .unwrap_or(u128::MAX)
    }

    /// Whether `index` names a valid position in this shape.
    #[inline]
    pub fn contains(&self, index: &[usize]) -> bool {
        index.len() == self.0.len() && index.iter().zip(self.0.iter()).all(|(i, d)| i < d)
    }

    /// Validate `index`, returning `IndexOutOfRange` if it has the wrong arity
    /// or exceeds an extent in any dimension.
    pub fn check_index(&self, index: &[usize]) -> Result<()> {
        if self.contains(index) {
            Ok(())
        } else {
            Err(Error::index_out_of_range(index, self.as_slice()))
        }
    }

    /// Validate that `other` is the same shape, returning `ShapeMismatch` otherwise.
    pub fn check_same(&self, other: &Shape) -> Result<()> {
        if self == other {
            Ok(())
        } else {
            Err(Error::shape_mismatch(self.as_slice(), other.as_slice()))
        }
    }

    /// Iterate over every valid index in row-major order.
    ///
    /// This enumerates the full index space; the sparse engines never call it.
    pub fn indices(&self) -> Indices {
        Indices::new(self.as_slice())
    }
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl From<Vec<usize>> for Shape {
    fn from(value: Vec<usize>) -> Self {
        Self(value.into_iter().collect())
    }
}

impl From<&[usize]> for Shape {
    fn from(value: &[usize]) -> Self {
        Self(value.iter().copied().collect())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(value: [usize; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

impl From<usize> for Shape {
    fn from(len: usize) -> Self {
        Self(std::iter::once(len).collect())
    }
}

impl FromIterator<usize> for Shape {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// Index iteration
// ============================================================================

/// Row-major iterator over all indices of a shape (odometer order)
pub struct Indices {
    dims: Index,
    current: Index,
    done: bool,
}

impl Indices {
    fn new(dims: &[usize]) -> Self {
        Self {
            dims: dims.iter().copied().collect(),
            current: Index::from_elem(0, dims.len()),
            done: dims.contains(&0),
        }
    }
}

impl Iterator for Indices {
    type Item = Index;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current.clone();

        // Advance; the last dimension varies fastest
        self.done = true;
        for i in (0..self.dims.len()).rev() {
            self.current[i] += 1;
            if self.current[i] < self.dims[i] {
                self.done = false;
                break;
            }
            self.current[i] = 0;
        }

        Some(result)
    }
}
