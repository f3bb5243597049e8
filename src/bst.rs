//! Plain binary search tree primitives.
//!
//! These maintain the binary search property and the cached node heights, but
//! never act on the balance of the tree. Each primitive accepts a `fixup`
//! function that is applied to every child link it rewrites while unwinding,
//! allowing a caller to restore any additional structural property (such as
//! the AVL balance) bottom-up. Passing an identity function produces an ordinary,
//! unbalanced search tree.

use std::cmp::Ordering;

use crate::node::{update_height, Key, Link, Node};

/// A `fixup` that leaves every subtree as-is.
#[cfg(test)]
pub(crate) fn identity(v: Link) -> Link {
    v
}

/// Insert `key` into the subtree rooted at `link` in binary search order,
/// returning the new subtree root.
///
/// Inserting a key that already exists is a no-op.
pub(crate) fn raw_insert<F>(key: Key, link: Link, fixup: &mut F) -> Link
where
    F: FnMut(Link) -> Link,
{
    let mut node = match link {
        Some(v) => v,
        None => return Some(Box::new(Node::new(key))),
    };

    match key.cmp(&node.key()) {
        Ordering::Less => {
            let child = raw_insert(key, node.take_left(), fixup);
            node.set_left(fixup(child));
        }
        Ordering::Greater => {
            let child = raw_insert(key, node.take_right(), fixup);
            node.set_right(fixup(child));
        }
        Ordering::Equal => return Some(node),
    }

    update_height(&mut node);
    Some(node)
}

/// Remove `key` from the subtree rooted at `link`, returning the new subtree
/// root.
///
/// Removing a key that does not exist is a no-op.
pub(crate) fn raw_remove<F>(key: Key, link: Link, fixup: &mut F) -> Link
where
    F: FnMut(Link) -> Link,
{
    let mut node = link?;

    match key.cmp(&node.key()) {
        Ordering::Less => {
            let child = raw_remove(key, node.take_left(), fixup);
            node.set_left(fixup(child));
        }
        Ordering::Greater => {
            let child = raw_remove(key, node.take_right(), fixup);
            node.set_right(fixup(child));
        }
        Ordering::Equal => return unlink(node, fixup),
    }

    update_height(&mut node);
    Some(node)
}

/// Drop `node` from the tree, returning the subtree that replaces it.
fn unlink<F>(mut node: Box<Node>, fixup: &mut F) -> Link
where
    F: FnMut(Link) -> Link,
{
    // This node may have 0, 1 or 2 children.
    //
    // With both children present, the minimum node of the right subtree (the
    // in-order successor) is detached and relinked in place of "node". Keys
    // are never copied between nodes.
    match (node.take_left(), node.take_right()) {
        (None, None) => None,
        (Some(v), None) | (None, Some(v)) => Some(v),
        (Some(left), Some(right)) => {
            let (mut successor, right) = extract_min(right, fixup);

            // Invariant: the minimum node has no left subtree, and its right
            // subtree was relinked into its parent.
            debug_assert!(successor.left().is_none());
            debug_assert!(successor.right().is_none());

            successor.set_left(Some(left));
            successor.set_right(fixup(right));
            update_height(&mut successor);

            Some(successor)
        }
    }
}

/// Detach the minimum node of the subtree rooted at `node`, returning it and
/// the remaining subtree.
///
/// The right subtree of the extracted node (if any) is linked in its place.
fn extract_min<F>(mut node: Box<Node>, fixup: &mut F) -> (Box<Node>, Link)
where
    F: FnMut(Link) -> Link,
{
    match node.take_left() {
        Some(left) => {
            let (min, rest) = extract_min(left, fixup);
            node.set_left(fixup(rest));
            update_height(&mut node);
            (min, Some(node))
        }
        None => {
            let rest = node.take_right();
            update_height(&mut node);
            (node, rest)
        }
    }
}

/// Returns true if `key` exists in the subtree rooted at `n`.
pub(crate) fn contains(key: Key, mut n: Option<&Node>) -> bool {
    while let Some(v) = n {
        n = match key.cmp(&v.key()) {
            Ordering::Less => v.left(),
            Ordering::Equal => return true,
            Ordering::Greater => v.right(),
        };
    }
    false
}

/// Return the smallest key in the subtree rooted at `n`.
pub(crate) fn min(mut n: Option<&Node>) -> Option<Key> {
    let mut out = None;
    while let Some(v) = n {
        out = Some(v.key());
        n = v.left();
    }
    out
}

/// Return the largest key in the subtree rooted at `n`.
pub(crate) fn max(mut n: Option<&Node>) -> Option<Key> {
    let mut out = None;
    while let Some(v) = n {
        out = Some(v.key());
        n = v.right();
    }
    out
}
