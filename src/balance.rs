use std::fmt::Display;

use crate::{
    bst,
    config::{Config, ViolationPolicy},
    error::BalanceError,
    node::{
        balance_factor, rotate_left, rotate_left_right, rotate_right,
        rotate_right_left, update_height, Height, Key, Link, Node,
    },
    observer::{NoopObserver, RebalanceObserver},
};

/// The rotation applied to restore the balance of a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Corrects a left-left skew.
    SingleRight,
    /// Corrects a right-right skew.
    SingleLeft,
    /// Corrects a left-right skew.
    DoubleLeftRight,
    /// Corrects a right-left skew.
    DoubleRightLeft,
}

impl Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::SingleRight => "single right rotation",
            Self::SingleLeft => "single left rotation",
            Self::DoubleLeftRight => "double left-right rotation",
            Self::DoubleRightLeft => "double right-left rotation",
        };
        f.write_str(s)
    }
}

/// Maintains the AVL property of a tree of [`Node`] as keys are inserted and
/// removed.
///
/// The [`Balancer`] layers balancing on top of the plain binary search tree
/// primitives: each mutation delegates to the search tree, and every subtree
/// the search tree rewrites is rebalanced as the recursion unwinds. Each call
/// takes ownership of a subtree root and returns the (possibly different) new
/// root, which the caller links in place of the old one.
#[derive(Debug, Default, Clone)]
pub struct Balancer<O = NoopObserver> {
    config: Config,
    observer: O,
}

impl<O> Balancer<O>
where
    O: RebalanceObserver,
{
    pub fn new(config: Config, observer: O) -> Self {
        Self { config, observer }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Insert `key` into the subtree rooted at `root`, returning the new
    /// balanced subtree root.
    ///
    /// Inserting a key that already exists leaves the subtree unchanged.
    pub fn insert(&mut self, key: Key, root: Link) -> Link {
        // A single rotation is sufficient to rebalance the tree after an
        // insert, but the height of every ancestor may change, so each is
        // visited on unwind.
        let root = bst::raw_insert(key, root, &mut |v| self.rebalance(v));
        self.rebalance(root)
    }

    /// Remove `key` from the subtree rooted at `root`, returning the new
    /// balanced subtree root.
    ///
    /// Removing a key that does not exist leaves the subtree unchanged.
    pub fn remove(&mut self, key: Key, root: Link) -> Link {
        // Unlike inserts, a removal may require a rotation at every ancestor.
        let root = bst::raw_remove(key, root, &mut |v| self.rebalance(v));
        self.rebalance(root)
    }

    /// Restore the AVL property at the root of a subtree in which both
    /// children already satisfy it, returning the new subtree root.
    pub fn rebalance(&mut self, root: Link) -> Link {
        let node = root?;
        let key = node.key();

        let (mut node, rotation) = match balance_factor(&node) {
            // Left-heavy
            //
            // A tie between the left grandchildren resolves to the single
            // rotation.
            (2..) if node.left().map(balance_factor).unwrap_or_default() >= 0 => {
                (rotate_right(node), Some(Rotation::SingleRight))
            }
            (2..) => (rotate_left_right(node), Some(Rotation::DoubleLeftRight)),
            // Right-heavy
            (..=-2) if node.right().map(balance_factor).unwrap_or_default() <= 0 => {
                (rotate_left(node), Some(Rotation::SingleLeft))
            }
            (..=-2) => (rotate_right_left(node), Some(Rotation::DoubleRightLeft)),

            #[allow(clippy::manual_range_patterns)]
            -1 | 0 | 1 => (node, None),
        };

        update_height(&mut node);

        if let Some(rotation) = rotation {
            self.observer.on_rotation(rotation, key);
        }

        if self.config.validate() {
            if let Err(e) = check_balance(Some(&node)) {
                self.observer.on_violation(&e);
                match self.config.violation_policy() {
                    ViolationPolicy::Panic => panic!("AVL invariant violated: {e}"),
                    ViolationPolicy::Report => {}
                }
            }
        }

        Some(node)
    }
}

/// Recompute the height of the subtree rooted at `n` without using the cached
/// node heights, validating the cache and the balance of every node along the
/// way.
///
/// Returns the height of the subtree if consistent (-1 for [`None`]).
pub fn check_balance(n: Option<&Node>) -> Result<Height, BalanceError> {
    let n = match n {
        Some(v) => v,
        None => return Ok(-1),
    };

    let left = check_balance(n.left())?;
    let right = check_balance(n.right())?;

    for (child, computed) in [(n.left(), left), (n.right(), right)] {
        if let Some(child) = child {
            if child.height() != computed {
                return Err(BalanceError::HeightMismatch {
                    key: child.key(),
                    cached: child.height(),
                    computed,
                });
            }
        }
    }

    if (left - right).abs() > 1 {
        return Err(BalanceError::Skewed {
            key: n.key(),
            left,
            right,
        });
    }

    Ok(1 + left.max(right))
}

/// Validate the subtree rooted at `n`, including the cached height of `n`
/// itself.
pub(crate) fn validate(n: Option<&Node>) -> Result<(), BalanceError> {
    let computed = check_balance(n)?;
    match n {
        Some(v) if v.height() != computed => Err(BalanceError::HeightMismatch {
            key: v.key(),
            cached: v.height(),
            computed,
        }),
        _ => Ok(()),
    }
}
