use std::cmp::max;

/// The totally-ordered key stored in each [`Node`].
pub type Key = i64;

/// The cached height of a subtree.
///
/// A leaf has a height of 0, and an absent subtree a height of -1.
pub type Height = i32;

/// An owning link to a (possibly absent) subtree.
pub type Link = Option<Box<Node>>;

/// A single vertex in the tree.
///
/// Each [`Node`] exclusively owns its children - there are no parent pointers
/// and no sharing, so rotations only ever move ownership of a subtree from one
/// link to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Child nodes pointers.
    left: Link,
    right: Link,

    /// The node's AVL height, derived from the height of the children.
    height: Height,

    key: Key,
}

impl Node {
    pub(crate) fn new(key: Key) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// The key held by this node.
    pub fn key(&self) -> Key {
        self.key
    }

    /// The cached height of the subtree rooted at this node.
    pub fn height(&self) -> Height {
        self.height
    }

    /// The left subtree, holding keys strictly less than [`Node::key()`].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right subtree, holding keys strictly greater than [`Node::key()`].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Link {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Link {
        self.right.take()
    }

    pub(crate) fn set_left(&mut self, v: Link) {
        self.left = v;
    }

    pub(crate) fn set_right(&mut self, v: Link) {
        self.right = v;
    }

    /// Construct a subtree from parts, computing the height from the children.
    #[cfg(test)]
    pub(crate) fn from_parts(key: Key, left: Link, right: Link) -> Box<Self> {
        let mut n = Box::new(Self {
            key,
            left,
            right,
            height: 0,
        });
        update_height(&mut n);
        n
    }

    #[cfg(test)]
    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }

    /// Overwrite the cached height, corrupting the tree if `height` is wrong.
    #[cfg(test)]
    pub(crate) fn set_height(&mut self, height: Height) {
        self.height = height;
    }
}

/// Return the cached height of the subtree rooted at `n`, or -1 if `n` is
/// [`None`].
///
/// All balance decisions are made using this accessor, never by walking the
/// subtree.
pub fn height(n: Option<&Node>) -> Height {
    n.map(|v| v.height()).unwrap_or(-1)
}

pub(crate) fn update_height(n: &mut Node) {
    n.height = 1 + max(height(n.left()), height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance_factor(n: &Node) -> Height {
    height(n.left()) - height(n.right())
}

/// Right rotate the subtree rooted at `k2` around its left child `P`,
/// returning `P` as the new subtree root.
///
/// ```text
///          k2
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     k2
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `k2` has no left pointer (cannot be rotated).
pub(crate) fn rotate_right(mut k2: Box<Node>) -> Box<Node> {
    let mut p = k2.left.take().unwrap();

    k2.left = p.right.take();
    update_height(&mut k2);

    // "p" depends on the height of "k2", so it must be computed last.
    p.right = Some(k2);
    update_height(&mut p);

    p
}

/// Left rotate the subtree rooted at `k1` around its right child `P`,
/// returning `P` as the new subtree root.
///
/// ```text
///
///      k1
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    k1    y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `k1` has no right pointer (cannot be rotated).
pub(crate) fn rotate_left(mut k1: Box<Node>) -> Box<Node> {
    let mut p = k1.right.take().unwrap();

    k1.right = p.left.take();
    update_height(&mut k1);

    p.left = Some(k1);
    update_height(&mut p);

    p
}

/// Correct a left-right skew by left rotating the left child of `k3`, then
/// right rotating `k3`.
///
/// ```text
///        k3                    k3
///       /                     /                    y
///      x      Rotate Left    y     Rotate Right   / \
///       \    ----------->   /     ------------>  x   k3
///        y                 x
/// ```
pub(crate) fn rotate_left_right(mut k3: Box<Node>) -> Box<Node> {
    k3.left = k3.left.take().map(rotate_left);
    rotate_right(k3)
}

/// Correct a right-left skew by right rotating the right child of `k1`, then
/// left rotating `k1`.
pub(crate) fn rotate_right_left(mut k1: Box<Node>) -> Box<Node> {
    k1.right = k1.right.take().map(rotate_right);
    rotate_left(k1)
}
