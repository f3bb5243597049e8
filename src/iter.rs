use crate::node::{Key, Node};

/// An in-order iterator over the keys of a tree, yielding keys in strictly
/// increasing order.
///
/// Constructed by [`AvlTree::iter()`](crate::AvlTree::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    pub(crate) fn empty() -> Self {
        Self { stack: vec![] }
    }

    fn push_subtree(&mut self, subtree_root: &'a Node) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v.key())
    }
}
