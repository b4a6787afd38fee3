//! Tree nodes, rotations and rebalancing

use crate::dynarray::DynArray;

use super::Release;

pub(super) type Link<K, P> = Option<Box<Node<K, P>>>;

/// A populated subtree root
pub(super) struct Node<K, P> {
    pub(super) key: K,
    pub(super) bucket: DynArray<P>,
    pub(super) height: usize,
    pub(super) left: Link<K, P>,
    pub(super) right: Link<K, P>,
    /// Captured from the insert that created the node
    pub(super) release: Release<P>,
}

impl<K, P> Node<K, P> {
    /// New leaf holding a single-element bucket
    pub(super) fn leaf(key: K, payload: P, release: Release<P>) -> Box<Self> {
        let mut bucket = DynArray::with_capacity(1);
        bucket.push(Some(payload));
        Box::new(Self {
            key,
            bucket,
            height: 1,
            left: None,
            right: None,
            release,
        })
    }

    pub(super) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `h(left) - h(right)`
    pub(super) fn balance(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Height of a possibly empty subtree
pub(super) fn height<K, P>(link: &Link<K, P>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Left child becomes the subtree root
pub(super) fn rotate_right<K, P>(mut root: Box<Node<K, P>>) -> Box<Node<K, P>> {
    let Some(mut new_root) = root.left.take() else {
        panic!("rotate_right: node has no left child");
    };
    root.left = new_root.right.take();
    root.update_height();
    new_root.right = Some(root);
    new_root.update_height();
    new_root
}

/// Right child becomes the subtree root
pub(super) fn rotate_left<K, P>(mut root: Box<Node<K, P>>) -> Box<Node<K, P>> {
    let Some(mut new_root) = root.right.take() else {
        panic!("rotate_left: node has no right child");
    };
    root.right = new_root.left.take();
    root.update_height();
    new_root.left = Some(root);
    new_root.update_height();
    new_root
}

/// Recompute the height of `node` and restore the AVL property
///
/// Children must already be balanced; a balance factor outside `-2..=2`
/// means the tree is corrupt and panics.
pub(super) fn rebalance<K, P>(mut node: Box<Node<K, P>>) -> Box<Node<K, P>> {
    node.update_height();
    match node.balance() {
        -1..=1 => node,
        2 => {
            if let Some(left) = node.left.take() {
                // Left-right case
                node.left = Some(if left.balance() < 0 {
                    tracing::trace!("double rotation (left-right)");
                    rotate_left(left)
                } else {
                    left
                });
            }
            tracing::trace!("rotate right at height {}", node.height);
            rotate_right(node)
        }
        -2 => {
            if let Some(right) = node.right.take() {
                // Right-left case
                node.right = Some(if right.balance() > 0 {
                    tracing::trace!("double rotation (right-left)");
                    rotate_right(right)
                } else {
                    right
                });
            }
            tracing::trace!("rotate left at height {}", node.height);
            rotate_left(node)
        }
        other => panic!("invalid tree balance: {}", other),
    }
}

/// Detach the leftmost node of a subtree
///
/// Returns the remaining subtree (rebalanced on the way up) and the
/// detached node with both links cleared.
pub(super) fn detach_min<K, P>(mut node: Box<Node<K, P>>) -> (Link<K, P>, Box<Node<K, P>>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = detach_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
    }
}

/// Replace `node` by a subtree made of its children
///
/// With two children the in-order successor takes the node's place.
pub(super) fn excise<K, P>(mut node: Box<Node<K, P>>) -> Link<K, P> {
    match (node.left.take(), node.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (Some(left), Some(right)) => {
            let (rest, mut successor) = detach_min(right);
            successor.left = Some(left);
            successor.right = rest;
            Some(rebalance(successor))
        }
    }
}

/// Post-order teardown: children, key, then bucket through `release`
pub(super) fn teardown<K, P>(node: Box<Node<K, P>>) {
    let Node {
        key,
        bucket,
        left,
        right,
        release,
        ..
    } = *node;
    if let Some(left) = left {
        teardown(left);
    }
    if let Some(right) = right {
        teardown(right);
    }
    drop(key);
    bucket.release_with(release);
}
