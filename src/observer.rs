use log::{debug, error};

use crate::{balance::Rotation, error::BalanceError, node::Key};

/// A sink for the diagnostic events emitted while rebalancing.
///
/// All methods default to doing nothing.
pub trait RebalanceObserver {
    /// Called after `rotation` corrected an imbalance detected at the node
    /// holding `key`.
    fn on_rotation(&mut self, _rotation: Rotation, _key: Key) {}

    /// Called when the post-rebalance check finds the tree inconsistent.
    fn on_violation(&mut self, _error: &BalanceError) {}
}

impl<T> RebalanceObserver for &mut T
where
    T: RebalanceObserver + ?Sized,
{
    fn on_rotation(&mut self, rotation: Rotation, key: Key) {
        (**self).on_rotation(rotation, key)
    }

    fn on_violation(&mut self, error: &BalanceError) {
        (**self).on_violation(error)
    }
}

/// A [`RebalanceObserver`] that discards all events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoopObserver;

impl RebalanceObserver for NoopObserver {}

/// A [`RebalanceObserver`] that emits events through the [`log`] facade.
///
/// Rotations are logged at debug level, and balance violations at error
/// level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver;

impl RebalanceObserver for LogObserver {
    fn on_rotation(&mut self, rotation: Rotation, key: Key) {
        debug!("{rotation} at node {key}");
    }

    fn on_violation(&mut self, error: &BalanceError) {
        error!("tree unbalanced: {error}");
    }
}
