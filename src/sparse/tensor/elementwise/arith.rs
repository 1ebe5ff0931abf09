//! Arithmetic elementwise operations: add, sub, mul, pow, abs, exp

use crate::dtype::Element;
use crate::error::Result;
use crate::sparse::SparseTensor;

#[allow(clippy::should_implement_trait)]
impl<T: Element> SparseTensor<T> {
    /// Element-wise addition: C = A + B
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the shapes differ.
    ///
    /// # Example
    ///
    /// ```
    /// # use spla::prelude::*;
    /// // a = [0, 1, 0, 1]   b = [0, 0, 2, 2]   a + b = [0, 1, 2, 3]
    /// let mut a = SparseTensor::<i32>::ones(4);
    /// a.set(&[0], 0)?;
    /// a.set(&[2], 0)?;
    /// let mut b = SparseTensor::<i32>::full(4, 2);
    /// b.set(&[0], 0)?;
    /// b.set(&[1], 0)?;
    ///
    /// let c = a.add(&b)?;
    /// assert_eq!(c.to_dense(), vec![0, 1, 2, 3]);
    /// assert_eq!(c.sparsity(), 3);
    /// # Ok::<(), spla::error::Error>(())
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise subtraction: C = A - B
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Element-wise multiplication: C = A * B
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Element-wise power: C = A ^ B
    ///
    /// Neither operand is modified.
    pub fn pow(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, Element::pow)
    }

    /// Element-wise absolute value
    pub fn abs(&self) -> Self {
        self.map(Element::abs)
    }

    /// Element-wise natural exponential
    pub fn exp(&self) -> Self {
        self.map(Element::exp)
    }

    // =========================================================================
    // In-place variants
    // =========================================================================

    /// In-place element-wise addition: A += B
    ///
    /// On error `self` is left unchanged.
    pub fn add_inplace(&mut self, other: &Self) -> Result<()> {
        self.zip_with_inplace(other, |a, b| a + b)
    }

    /// In-place element-wise subtraction: A -= B
    pub fn sub_inplace(&mut self, other: &Self) -> Result<()> {
        self.zip_with_inplace(other, |a, b| a - b)
    }

    /// In-place element-wise multiplication: A *= B
    pub fn mul_inplace(&mut self, other: &Self) -> Result<()> {
        self.zip_with_inplace(other, |a, b| a * b)
    }
}
