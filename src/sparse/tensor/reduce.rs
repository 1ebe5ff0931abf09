//! Reductions over SparseTensor: sum, all, any, dot, inner, norm
//!
//! A reduction folds the default value over every unstored position and
//! then folds each stored entry. The unstored block is never enumerated:
//! `n` copies of the default are combined by binary doubling, which needs
//! O(log n) applications of the operator and is valid because reduction
//! operators must be associative and commutative.

use super::elementwise::{MergeJoin, Merged};
use super::SparseTensor;
use crate::dtype::{Element, Value};
use crate::error::Result;
use crate::sparse::NormType;

/// Number of positions in `extents` minus `stored`, as little-endian 64-bit
/// limbs. Exact for every shape, including counts past `u128`.
fn unstored_count(extents: &[usize], stored: usize) -> Vec<u64> {
    let mut limbs = vec![1u64];
    for &extent in extents {
        let mut carry = 0u128;
        for limb in limbs.iter_mut() {
            let wide = u128::from(*limb) * extent as u128 + carry;
            *limb = wide as u64;
            carry = wide >> 64;
        }
        if carry > 0 {
            limbs.push(carry as u64);
        }
    }

    // stored never exceeds the product, so the borrow stops inside `limbs`
    let mut borrow = stored as u64;
    for limb in limbs.iter_mut() {
        if borrow == 0 {
            break;
        }
        let (value, overflowed) = limb.overflowing_sub(borrow);
        *limb = value;
        borrow = u64::from(overflowed);
    }
    limbs
}

/// `value` combined with itself `count` times (`count` in little-endian
/// limbs), or `None` when the count is zero
fn repeat<T, F>(value: T, count: &[u64], op: &F) -> Option<T>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    let bits = count.iter().rposition(|&limb| limb != 0).map_or(0, |top| {
        top * 64 + (64 - count[top].leading_zeros() as usize)
    });

    let mut result = None;
    let mut power = value;
    for bit in 0..bits {
        if (count[bit / 64] >> (bit % 64)) & 1 == 1 {
            result = Some(match result {
                Some(acc) => op(acc, power),
                None => power,
            });
        }
        if bit + 1 < bits {
            power = op(power, power);
        }
    }
    result
}

impl<T: Value> SparseTensor<T> {
    /// Fold every position of the container with `op`
    ///
    /// `op` must be associative and commutative; the order in which
    /// positions are combined is unspecified. Returns `None` only for an
    /// empty index space.
    ///
    /// # Example
    ///
    /// ```
    /// # use spla::prelude::*;
    /// let mut v = SparseTensor::<i32>::ones(5);
    /// v.set(&[2], 7)?;
    /// v.set(&[3], -1)?;
    /// assert_eq!(v.reduce(|a, b| a + b), Some(9));
    /// # Ok::<(), spla::error::Error>(())
    /// ```
    pub fn reduce<F>(&self, op: F) -> Option<T>
    where
        F: Fn(T, T) -> T,
    {
        let unstored = unstored_count(self.shape.as_slice(), self.sparsity());
        self.entries
            .values()
            .fold(repeat(self.default, &unstored, &op), |acc, &v| {
                Some(match acc {
                    Some(acc) => op(acc, v),
                    None => v,
                })
            })
    }
}

impl SparseTensor<bool> {
    /// Whether every position is `true` (vacuously true for an empty index space)
    ///
    /// Stops at the first decisive value.
    pub fn all(&self) -> bool {
        if !self.default && self.has_unstored() {
            return false;
        }
        self.entries.values().all(|&v| v)
    }

    /// Whether any position is `true`
    ///
    /// Stops at the first decisive value.
    pub fn any(&self) -> bool {
        if self.default && self.has_unstored() {
            return true;
        }
        self.entries.values().any(|&v| v)
    }
}

impl<T: Element> SparseTensor<T> {
    /// Sum of every position
    pub fn sum(&self) -> T {
        self.reduce(|a, b| a + b).unwrap_or_else(T::zero)
    }

    /// Inner product: the sum of the element-wise product
    ///
    /// Defaults take part like any other position, so two containers of
    /// ones with length n have inner product n.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the shapes differ.
    pub fn dot(&self, other: &Self) -> Result<T> {
        Ok(self.mul(other)?.sum())
    }

    /// Inner product over explicitly stored positions only
    ///
    /// Only positions stored in both operands contribute, which makes this
    /// cheaper than [`SparseTensor::dot`] and equal to it whenever both
    /// defaults are the additive identity.
    pub fn inner(&self, other: &Self) -> Result<T> {
        self.shape.check_same(&other.shape)?;
        Ok(MergeJoin::new(&self.entries, &other.entries)
            .filter_map(|m| match m {
                Merged::Both(_, a, b) => Some(a * b),
                _ => None,
            })
            .fold(T::zero(), |acc, v| acc + v))
    }

    /// p-norm: `(sum |x|^ord)^(1/ord)`
    ///
    /// The powers are taken in the entry type; only the final root is taken
    /// in `f64`. `ord <= 0` is undefined and left to the caller.
    pub fn norm(&self, ord: i32) -> f64 {
        let exponent = T::from_f64(f64::from(ord));
        self.map(|v| v.abs().pow(exponent))
            .sum()
            .to_f64()
            .powf(1.0 / f64::from(ord))
    }

    /// Norm selected by [`NormType`]
    pub fn norm_of(&self, norm: NormType) -> f64 {
        match norm {
            NormType::L1 => self.norm(1),
            NormType::L2 => self.norm(2),
            NormType::Lp(ord) => self.norm(ord),
            NormType::Linf => self
                .map(Element::abs)
                .reduce(|a, b| if b > a { b } else { a })
                .map_or(0.0, Element::to_f64),
        }
    }

    /// Whether two containers agree at every position within `tol`
    ///
    /// Shapes must match exactly. Positions are compared by value through
    /// `f64`, so containers with different defaults can still be close.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.zip_with(other, |a, b| (a.to_f64() - b.to_f64()).abs() <= tol)
            .map(|mask| mask.all())
            .unwrap_or(false)
    }
}
