//! A height-balanced (AVL) binary search tree of integer keys.
//!
//! Every insert and removal delegates to plain binary search tree primitives
//! and then restores the AVL property bottom-up as the recursion unwinds,
//! applying one of four rotations wherever the heights of two sibling
//! subtrees differ by more than one. The cached height of every node is kept
//! consistent, and by default the result of each rebalance is checked by an
//! independent recomputation of the subtree heights.
//!
//! Rebalancing events can be observed through a [`RebalanceObserver`], such
//! as the [`LogObserver`] which emits them through the [`log`] facade.
//!
//! ```
//! use avltree::{AvlTree, Config, LogObserver};
//!
//! let mut t = AvlTree::with_observer(Config::default(), LogObserver);
//! t.extend([3, 2, 1]);
//!
//! let root = t.root().unwrap();
//! assert_eq!(root.key(), 2);
//! assert_eq!(t.validate(), Ok(()));
//! ```

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    clippy::dbg_macro,
    clippy::todo,
    clippy::use_self,
    missing_debug_implementations
)]

mod balance;
mod bst;
mod config;
mod dot;
mod error;
mod iter;
mod node;
mod observer;
mod tree;

#[cfg(test)]
mod test_utils;

pub use balance::{check_balance, Balancer, Rotation};
pub use config::{Config, ViolationPolicy};
pub use error::BalanceError;
pub use iter::Iter;
pub use node::{height, Height, Key, Link, Node};
pub use observer::{LogObserver, NoopObserver, RebalanceObserver};
pub use tree::AvlTree;
