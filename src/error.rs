use thiserror::Error;

use crate::node::{Height, Key};

/// An inconsistency detected by the independent balance check.
///
/// Observing either variant after a rebalance indicates a defect in the
/// balancing logic, not a caller error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// The cached height of a node disagrees with the height recomputed from
    /// its subtree.
    #[error("node {key} caches height {cached} but its subtree has height {computed}")]
    HeightMismatch {
        key: Key,
        cached: Height,
        computed: Height,
    },

    /// The heights of the two subtrees of a node differ by more than 1.
    #[error("node {key} is unbalanced (left height {left}, right height {right})")]
    Skewed { key: Key, left: Height, right: Height },
}

impl BalanceError {
    /// The key of the node at which the inconsistency was found.
    pub fn key(&self) -> Key {
        match self {
            Self::HeightMismatch { key, .. } | Self::Skewed { key, .. } => *key,
        }
    }
}
