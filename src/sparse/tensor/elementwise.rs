//! Elementwise merge engine for SparseTensor
//!
//! Binary operations walk the two sorted entry maps once (a merge-join) and
//! evaluate `op` only at positions stored in either operand. Every other
//! position is covered by evaluating `op` on the two defaults, so no
//! operation ever enumerates the index space.

mod arith;
mod compare;
mod scalar;

use std::cmp::Ordering;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::iter::Peekable;

use tracing::trace;

use super::SparseTensor;
use crate::dtype::Value;
use crate::error::Result;
use crate::tensor::Index;

/// One position visited by a merge-join over two entry maps
pub(crate) enum Merged<'a, T, U> {
    /// Stored only on the left
    Left(&'a Index, T),
    /// Stored only on the right
    Right(&'a Index, U),
    /// Stored on both sides
    Both(&'a Index, T, U),
}

/// Ordered walk over the union of two entry maps' keys
pub(crate) struct MergeJoin<'a, T, U> {
    lhs: Peekable<btree_map::Iter<'a, Index, T>>,
    rhs: Peekable<btree_map::Iter<'a, Index, U>>,
}

impl<'a, T, U> MergeJoin<'a, T, U> {
    pub(crate) fn new(lhs: &'a BTreeMap<Index, T>, rhs: &'a BTreeMap<Index, U>) -> Self {
        Self {
            lhs: lhs.iter().peekable(),
            rhs: rhs.iter().peekable(),
        }
    }
}

impl<'a, T: Copy, U: Copy> Iterator for MergeJoin<'a, T, U> {
    type Item = Merged<'a, T, U>;

    fn next(&mut self) -> Option<Self::Item> {
        let order = match (self.lhs.peek(), self.rhs.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some((lk, _)), Some((rk, _))) => lk.cmp(rk),
        };

        match order {
            Ordering::Less => self.lhs.next().map(|(k, &a)| Merged::Left(k, a)),
            Ordering::Greater => self.rhs.next().map(|(k, &b)| Merged::Right(k, b)),
            Ordering::Equal => {
                let (k, &a) = self.lhs.next()?;
                let (_, &b) = self.rhs.next()?;
                Some(Merged::Both(k, a, b))
            }
        }
    }
}

impl<T: Value> SparseTensor<T> {
    /// Apply `op` to every position, producing a new container
    ///
    /// The result's default is `op(default)` and each stored entry is mapped
    /// independently; entries that land on the new default are dropped.
    pub fn map<U, F>(&self, op: F) -> SparseTensor<U>
    where
        U: Value,
        F: Fn(T) -> U,
    {
        let default = op(self.default);
        let entries = self
            .entries
            .iter()
            .filter_map(|(k, &v)| {
                let v = op(v);
                (v != default).then(|| (k.clone(), v))
            })
            .collect();

        SparseTensor {
            shape: self.shape.clone(),
            default,
            entries,
        }
    }

    /// Apply `op` to every position in place
    pub(crate) fn map_inplace<F>(&mut self, op: F)
    where
        F: Fn(T) -> T,
    {
        let default = op(self.default);
        self.entries.retain(|_, v| {
            *v = op(*v);
            *v != default
        });
        self.default = default;
    }

    /// Combine two containers of the same shape position by position
    ///
    /// For every valid index `i` the result holds `op(self[i], rhs[i])`. The
    /// result's default is `op` of the two defaults; positions stored in only
    /// one operand pair with the other operand's default.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the shapes differ. No result is produced.
    pub fn zip_with<U, V, F>(&self, rhs: &SparseTensor<U>, op: F) -> Result<SparseTensor<V>>
    where
        U: Value,
        V: Value,
        F: Fn(T, U) -> V,
    {
        self.shape.check_same(&rhs.shape)?;

        let default = op(self.default, rhs.default);
        let entries: BTreeMap<Index, V> = MergeJoin::new(&self.entries, &rhs.entries)
            .filter_map(|m| {
                let (k, v) = match m {
                    Merged::Left(k, a) => (k, op(a, rhs.default)),
                    Merged::Right(k, b) => (k, op(self.default, b)),
                    Merged::Both(k, a, b) => (k, op(a, b)),
                };
                (v != default).then(|| (k.clone(), v))
            })
            .collect();

        trace!(
            lhs_nnz = self.sparsity(),
            rhs_nnz = rhs.sparsity(),
            out_nnz = entries.len(),
            "sparse merge"
        );

        Ok(SparseTensor {
            shape: self.shape.clone(),
            default,
            entries,
        })
    }

    /// Combine `rhs` into `self` position by position
    ///
    /// Equivalent to `*self = self.zip_with(rhs, op)?` without building a
    /// second container. Shapes are validated before any mutation, so on
    /// error `self` is unchanged.
    pub fn zip_with_inplace<F>(&mut self, rhs: &Self, op: F) -> Result<()>
    where
        F: Fn(T, T) -> T,
    {
        self.shape.check_same(&rhs.shape)?;

        let default = op(self.default, rhs.default);

        // Positions stored only in rhs start from our current default
        let fresh: Vec<(Index, T)> = rhs
            .entries
            .iter()
            .filter(|(k, _)| !self.entries.contains_key(*k))
            .map(|(k, &b)| (k.clone(), op(self.default, b)))
            .filter(|(_, v)| *v != default)
            .collect();

        self.entries.retain(|k, a| {
            let b = rhs.entries.get(k).copied().unwrap_or(rhs.default);
            *a = op(*a, b);
            *a != default
        });
        self.entries.extend(fresh);
        self.default = default;

        trace!(
            rhs_nnz = rhs.sparsity(),
            out_nnz = self.sparsity(),
            "sparse merge in place"
        );
        Ok(())
    }
}
