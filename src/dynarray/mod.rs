//! DynArray Module
//!
//! Resizable array of payload handles.
//!
//! ## Responsibilities
//! - Bucket storage for the index tree (one bucket per key)
//! - General-purpose list for catalogue records (authors, categories)
//!
//! ## Growth
//! Capacity grows as `old * 2 + 1`, so an array created with capacity 0
//! steps through 1, 3, 7, 15, ...

mod array;

pub use array::{DynArray, Iter};
