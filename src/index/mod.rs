//! Index Module
//!
//! AVL tree mapping keys to non-empty buckets of payload handles.
//!
//! ## Responsibilities
//! - Ordered lookup by key (one tree per searchable attribute)
//! - Duplicate keys share one node; payloads accumulate in its bucket
//! - Height balance `|h(left) - h(right)| <= 1` at every node
//! - In-order walks with early exit
//!
//! ## Ownership
//! Keys are moved into the tree. Payloads are handles the tree never drops
//! on its own: whenever one leaves the tree without being returned to the
//! caller (void insert, teardown) it goes through the node's release function.
//!
//! ```text
//!                 ┌───────────────┐
//!                 │ key: "banana" │
//!                 │ bucket: [#2]  │
//!                 │ height: 2     │
//!                 └───┬───────┬───┘
//!                     │       │
//!          ┌──────────▼──┐ ┌──▼───────────┐
//!          │ "apple" [#1]│ │"cherry" [#3] │
//!          └─────────────┘ └──────────────┘
//! ```

mod node;
mod tree;

use std::cmp::Ordering;

use crate::buffer::Buffer;

pub use tree::IndexTree;

/// Key type an [`IndexTree`] is ordered by
///
/// Each tree is fixed to one key type, so keys of different kinds can never
/// meet inside one tree.
pub trait IndexKey {
    /// Total order used for descent
    fn compare(&self, other: &Self) -> Ordering;

    /// Void keys are never stored; inserting one releases the payload
    fn is_void(&self) -> bool {
        false
    }
}

/// Text keys: ASCII case-insensitive, empty is void
impl IndexKey for Buffer {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp_ignore_ascii_case(other)
    }

    fn is_void(&self) -> bool {
        self.is_empty()
    }
}

impl IndexKey for i32 {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Function applied to a payload the tree is discarding
pub type Release<P> = fn(P);

/// Release function for borrowed handles: does nothing
pub fn no_release<P>(_payload: P) {}
