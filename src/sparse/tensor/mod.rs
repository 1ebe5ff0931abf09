//! Sparse tensor with an implicit default value

mod conversion;
mod core;
mod elementwise;
mod reduce;

pub use core::SparseTensor;
