use proptest::prelude::*;

use crate::{
    balance::Rotation,
    error::BalanceError,
    node::{Key, Link, Node},
    observer::RebalanceObserver,
};

pub(crate) fn leaf(key: Key) -> Box<Node> {
    Node::from_parts(key, None, None)
}

pub(crate) fn branch(key: Key, left: Link, right: Link) -> Box<Node> {
    Node::from_parts(key, left, right)
}

/// Collect the keys of the subtree rooted at `n` with an in-order traversal.
pub(crate) fn in_order(n: Option<&Node>) -> Vec<Key> {
    n.map(|v| crate::iter::Iter::new(v).collect())
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
pub(crate) enum Op {
    Insert(Key),
    Remove(Key),
}

/// Generate inserts and removes of keys in [0..`max`).
pub(crate) fn arbitrary_op(max: Key) -> impl Strategy<Value = Op> {
    // A small key domain encourages multiple operations to act on the same
    // key.
    prop_oneof![
        (0..max).prop_map(Op::Insert),
        (0..max).prop_map(Op::Remove),
    ]
}

/// A [`RebalanceObserver`] that records all events.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) rotations: Vec<(Rotation, Key)>,
    pub(crate) violations: Vec<BalanceError>,
}

impl RebalanceObserver for Recorder {
    fn on_rotation(&mut self, rotation: Rotation, key: Key) {
        self.rotations.push((rotation, key));
    }

    fn on_violation(&mut self, error: &BalanceError) {
        self.violations.push(error.clone());
    }
}

/// Assert the BST ordering and cached heights of all nodes in the subtree
/// rooted at `root`, without requiring the subtree be balanced.
pub(crate) fn validate_order_and_heights(root: Option<&Node>) {
    // Invariant 1: an in-order traversal yields strictly increasing keys.
    let keys = in_order(root);
    for w in keys.windows(2) {
        assert!(w[0] < w[1], "keys out of order: {keys:?}");
    }

    let root = match root {
        Some(v) => v,
        None => return,
    };

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        // Invariant 2: the height of this node is always +1 of the maximum
        // child height, and a leaf is at height 0.
        let left_height = n.left().map(|v| v.height()).unwrap_or(-1);
        let right_height = n.right().map(|v| v.height()).unwrap_or(-1);
        let want_height = left_height.max(right_height) + 1;

        assert_eq!(
            n.height(),
            want_height,
            "expect node with key {} to have height {}, has {}",
            n.key(),
            want_height,
            n.height(),
        );
    }
}

/// Assert the BST and AVL properties of the subtree rooted at `root`, ensuring
/// the tree is well-formed.
pub(crate) fn validate_tree_structure(root: Option<&Node>) {
    validate_order_and_heights(root);

    let root = match root {
        Some(v) => v,
        None => return,
    };

    let mut n_nodes = 0_u32;
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        stack.extend(n.left().iter().chain(n.right().iter()));
        n_nodes += 1;

        // Invariant 3: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let left_height = n.left().map(|v| v.height()).unwrap_or(-1);
        let right_height = n.right().map(|v| v.height()).unwrap_or(-1);
        let balance = (left_height - right_height).abs();
        assert!(balance <= 1, "balance={balance}, node={n:?}");
    }

    // Invariant 4: the height of the tree is bounded by the AVL worst case.
    let bound = 1.4405 * f64::from(n_nodes + 2).log2() - 0.3277;
    assert!(
        f64::from(root.height()) <= bound,
        "height {} exceeds bound {bound} for {n_nodes} nodes",
        root.height()
    );
}
