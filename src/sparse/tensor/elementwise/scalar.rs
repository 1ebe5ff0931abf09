//! Scalar operations for sparse tensors

use std::ops::{AddAssign, MulAssign, SubAssign};

use tracing::debug;

use crate::dtype::Element;
use crate::sparse::SparseTensor;

impl<T: Element> SparseTensor<T> {
    /// Scalar addition: C = A + scalar
    ///
    /// Same as adding `full(shape, scalar)`: the default and every stored
    /// entry shift together.
    pub fn scalar_add(&self, scalar: T) -> Self {
        self.map(|v| v + scalar)
    }

    /// Scalar multiplication: C = A * scalar
    ///
    /// Multiplying by the additive identity yields a container with no
    /// stored entries.
    pub fn scalar_mul(&self, scalar: T) -> Self {
        let mut result = self.clone();
        result *= scalar;
        result
    }
}

impl<T: Element> AddAssign<T> for SparseTensor<T> {
    fn add_assign(&mut self, rhs: T) {
        self.map_inplace(|v| v + rhs);
    }
}

impl<T: Element> SubAssign<T> for SparseTensor<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.map_inplace(|v| v - rhs);
    }
}

impl<T: Element> MulAssign<T> for SparseTensor<T> {
    fn mul_assign(&mut self, rhs: T) {
        if rhs == T::zero() {
            // Every product collapses onto the new default
            debug!(cleared = self.sparsity(), "scalar multiply by zero");
            self.entries.clear();
            self.default = self.default * rhs;
        } else {
            self.map_inplace(|v| v * rhs);
        }
    }
}
