//! Index space types
//!
//! This module provides [`Shape`], the per-dimension extents of a container,
//! and [`Index`], a position within it.

mod shape;

pub use shape::{Index, Indices, Shape};
