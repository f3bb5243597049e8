/// The action taken when the post-rebalance check finds the tree
/// inconsistent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ViolationPolicy {
    /// Report the inconsistency to the observer, then panic.
    #[default]
    Panic,

    /// Report the inconsistency to the observer and continue with the
    /// (known-inconsistent) tree.
    Report,
}

/// Configuration of the balancing behaviour.
///
/// ```
/// use avltree::{Config, ViolationPolicy};
///
/// let config = Config::default()
///     .with_validation(true)
///     .with_violation_policy(ViolationPolicy::Report);
///
/// assert!(config.validate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    validate: bool,
    on_violation: ViolationPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validate: true,
            on_violation: ViolationPolicy::default(),
        }
    }
}

impl Config {
    /// Run the independent balance check over each rebalanced subtree.
    ///
    /// The check walks the whole subtree, making each mutation linear in the
    /// size of the tree. Enabled by default.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Set the [`ViolationPolicy`] applied when the balance check fails.
    pub fn with_violation_policy(mut self, policy: ViolationPolicy) -> Self {
        self.on_violation = policy;
        self
    }

    pub fn validate(&self) -> bool {
        self.validate
    }

    pub fn violation_policy(&self) -> ViolationPolicy {
        self.on_violation
    }
}
