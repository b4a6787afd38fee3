//! IndexTree implementation
//!
//! Recursive AVL insert/remove over boxed nodes. Recursion depth is bounded
//! by the tree height, which balancing keeps at O(log n).

use std::cmp::Ordering;
use std::fmt;

use crate::dynarray::DynArray;

use super::node::{self, Link, Node};
use super::{IndexKey, Release};

/// Height-balanced index from keys to payload buckets
pub struct IndexTree<K, P> {
    root: Link<K, P>,

    /// Number of nodes (distinct keys)
    len: usize,
}

impl<K: IndexKey, P> IndexTree<K, P> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert `payload` under `key`
    ///
    /// - Void key: `release(payload)`, key dropped, tree unchanged.
    /// - Existing key: the new key replaces the stored one and the payload is
    ///   pushed onto the bucket. The node keeps the release function it was
    ///   created with.
    /// - New key: a leaf with a single-element bucket, then rebalancing on
    ///   the way back up.
    pub fn insert(&mut self, key: K, payload: P, release: Release<P>) {
        if key.is_void() {
            tracing::trace!("void key, releasing payload");
            release(payload);
            return;
        }
        let mut created = false;
        let root = self.root.take();
        self.root = Some(insert_into(root, key, payload, release, &mut created));
        if created {
            self.len += 1;
        }
    }

    /// Bucket stored under `key`
    pub fn get(&self, key: &K) -> Option<&DynArray<P>> {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.compare(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(&node.bucket),
            };
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove one payload stored under `key`
    ///
    /// A bucket with several payloads loses its most recent one and the tree
    /// shape is untouched. A single-payload bucket takes its node with it;
    /// every ancestor is rebalanced. The payload is handed back, not released.
    pub fn remove(&mut self, key: &K) -> Option<P> {
        let mut excised = false;
        let root = self.root.take();
        let (root, payload) = remove_from(root, key, &mut excised);
        self.root = root;
        if excised {
            self.len -= 1;
        }
        payload
    }

    /// In-order traversal; the first error stops the walk and is returned
    pub fn walk<E, F>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&K, &DynArray<P>) -> Result<(), E>,
    {
        walk_from(&self.root, &mut visitor)
    }
}

impl<K, P> IndexTree<K, P> {
    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root (0 when empty)
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Tear down every node, releasing bucket payloads
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            node::teardown(root);
        }
        self.len = 0;
    }
}

// =============================================================================
// Recursive Helpers
// =============================================================================

fn insert_into<K: IndexKey, P>(
    link: Link<K, P>,
    key: K,
    payload: P,
    release: Release<P>,
    created: &mut bool,
) -> Box<Node<K, P>> {
    let Some(mut node) = link else {
        tracing::trace!("new index node");
        *created = true;
        return Node::leaf(key, payload, release);
    };

    match key.compare(&node.key) {
        Ordering::Equal => {
            node.key = key;
            node.bucket.push(Some(payload));
            node
        }
        Ordering::Less => {
            node.left = Some(insert_into(node.left.take(), key, payload, release, created));
            node::rebalance(node)
        }
        Ordering::Greater => {
            node.right = Some(insert_into(node.right.take(), key, payload, release, created));
            node::rebalance(node)
        }
    }
}

fn remove_from<K: IndexKey, P>(
    link: Link<K, P>,
    key: &K,
    excised: &mut bool,
) -> (Link<K, P>, Option<P>) {
    let Some(mut node) = link else {
        return (None, None);
    };

    match key.compare(&node.key) {
        Ordering::Less => {
            let (left, payload) = remove_from(node.left.take(), key, excised);
            node.left = left;
            (Some(node::rebalance(node)), payload)
        }
        Ordering::Greater => {
            let (right, payload) = remove_from(node.right.take(), key, excised);
            node.right = right;
            (Some(node::rebalance(node)), payload)
        }
        Ordering::Equal if node.bucket.len() > 1 => {
            let payload = node.bucket.pop();
            (Some(node), payload)
        }
        Ordering::Equal => {
            tracing::trace!("excising index node");
            *excised = true;
            let payload = node.bucket.pop();
            (node::excise(node), payload)
        }
    }
}

fn walk_from<K, P, E, F>(link: &Link<K, P>, visitor: &mut F) -> Result<(), E>
where
    F: FnMut(&K, &DynArray<P>) -> Result<(), E>,
{
    let Some(node) = link else {
        return Ok(());
    };
    walk_from(&node.left, visitor)?;
    visitor(&node.key, &node.bucket)?;
    walk_from(&node.right, visitor)
}

// =============================================================================
// Trait Impls
// =============================================================================

impl<K: IndexKey, P> Default for IndexTree<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> Drop for IndexTree<K, P> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Parenthesised shape, e.g. `((apple) banana (cherry))`
impl<K: fmt::Display, P> fmt::Display for IndexTree<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_link<K: fmt::Display, P>(
            link: &Link<K, P>,
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            let Some(node) = link else {
                return Ok(());
            };
            f.write_str("(")?;
            write_link(&node.left, f)?;
            if node.left.is_some() {
                f.write_str(" ")?;
            }
            write!(f, "{}", node.key)?;
            if node.right.is_some() {
                f.write_str(" ")?;
            }
            write_link(&node.right, f)?;
            f.write_str(")")
        }
        write_link(&self.root, f)
    }
}

impl<K: fmt::Debug, P: fmt::Debug> fmt::Debug for IndexTree<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn collect<'a, K, P>(link: &'a Link<K, P>, out: &mut Vec<(&'a K, &'a DynArray<P>)>) {
            if let Some(node) = link {
                collect(&node.left, out);
                out.push((&node.key, &node.bucket));
                collect(&node.right, out);
            }
        }
        let mut entries = Vec::with_capacity(self.len);
        collect(&self.root, &mut entries);
        f.debug_map().entries(entries).finish()
    }
}
