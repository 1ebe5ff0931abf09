//! # spla
//!
//! **Sparse vectors and tensors whose unlisted positions share a default value.**
//!
//! spla stores an explicit map from index to value plus one default value
//! for every index not in the map. The default is an ordinary value, not an
//! implicit zero, and every operation treats the container as if it were
//! dense while only ever touching the stored entries.
//!
//! ## Features
//!
//! - **One container, any rank**: scalars, vectors and N-dimensional tensors
//!   share [`SparseTensor`](sparse::SparseTensor); the shape fixes the rank
//! - **Elementwise algebra**: add, sub, mul, pow, abs, exp and relational
//!   masks, with in-place variants, merged without densifying
//! - **Reductions**: sum, any, all, dot, inner product and p-norms that
//!   account for every unstored position in logarithmic time
//! - **Conversions**: casts between entry types and dense interop
//!
//! ## Quick Start
//!
//! ```rust
//! use spla::prelude::*;
//!
//! let mut a = SparseTensor::<i32>::full(4, 2);
//! a.set(&[0], 1)?;
//! a.set(&[1], 2)?;
//! a.set(&[2], 3)?;
//!
//! let b = a.pow(&a)?;
//! assert_eq!(b.to_dense(), vec![1, 4, 27, 4]);
//! assert_eq!(a.to_string(), "{[0]: 1, [2]: 3}");
//! # Ok::<(), spla::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `f16`: Half-precision entry types (`half::f16`, `half::bf16`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod sparse;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element, Value};
    pub use crate::error::{Error, Result};
    pub use crate::sparse::{NormType, SparseTensor};
    pub use crate::tensor::{Index, Shape};
}
