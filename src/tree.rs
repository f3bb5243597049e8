use crate::{
    balance::{self, Balancer},
    bst,
    config::Config,
    dot::Dot,
    error::BalanceError,
    iter::Iter,
    node::{height, Height, Key, Link, Node},
    observer::{NoopObserver, RebalanceObserver},
};

/// A set of [`Key`] stored in a height-balanced (AVL) binary search tree.
///
/// ```
/// use avltree::AvlTree;
///
/// let mut t = AvlTree::new();
/// for k in 1..=7 {
///     t.insert(k);
/// }
///
/// assert!(t.remove(1));
/// assert_eq!(t.iter().collect::<Vec<_>>(), [2, 3, 4, 5, 6, 7]);
/// assert_eq!(t.height(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct AvlTree<O = NoopObserver> {
    root: Link,
    len: usize,
    balancer: Balancer<O>,
}

impl<O> Default for AvlTree<O>
where
    O: RebalanceObserver + Default,
{
    fn default() -> Self {
        Self::with_observer(Config::default(), O::default())
    }
}

impl AvlTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_observer(config, NoopObserver)
    }
}

impl<O> AvlTree<O>
where
    O: RebalanceObserver,
{
    /// Construct an empty tree, reporting rebalancing events to `observer`.
    pub fn with_observer(config: Config, observer: O) -> Self {
        Self {
            root: None,
            len: 0,
            balancer: Balancer::new(config, observer),
        }
    }

    /// Insert `key`, returning true if it was not already present.
    pub fn insert(&mut self, key: Key) -> bool {
        if self.contains(key) {
            return false;
        }

        self.root = self.balancer.insert(key, self.root.take());
        self.len += 1;
        true
    }

    /// Remove `key`, returning true if it was present.
    pub fn remove(&mut self, key: Key) -> bool {
        if !self.contains(key) {
            return false;
        }

        self.root = self.balancer.remove(key, self.root.take());
        self.len -= 1;
        true
    }

    pub fn contains(&self, key: Key) -> bool {
        bst::contains(key, self.root())
    }

    /// The smallest key in the tree, if any.
    pub fn min(&self) -> Option<Key> {
        bst::min(self.root())
    }

    /// The largest key in the tree, if any.
    pub fn max(&self) -> Option<Key> {
        bst::max(self.root())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all keys from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// The height of the tree, or -1 if it is empty.
    pub fn height(&self) -> Height {
        height(self.root())
    }

    /// The root node of the tree, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Iterate over the keys in increasing order.
    pub fn iter(&self) -> Iter<'_> {
        match self.root() {
            Some(v) => Iter::new(v),
            None => Iter::empty(),
        }
    }

    /// Recompute all node heights independently of the cached values,
    /// returning an error if the tree is not a consistent AVL tree.
    pub fn validate(&self) -> Result<(), BalanceError> {
        balance::validate(self.root())
    }

    /// Render the tree in the Graphviz dot format.
    pub fn to_dot(&self) -> String {
        Dot(self.root()).to_string()
    }

    pub fn observer(&self) -> &O {
        self.balancer.observer()
    }

    pub fn observer_mut(&mut self) -> &mut O {
        self.balancer.observer_mut()
    }
}

impl<O> Extend<Key> for AvlTree<O>
where
    O: RebalanceObserver,
{
    fn extend<T: IntoIterator<Item = Key>>(&mut self, iter: T) {
        for k in iter {
            self.insert(k);
        }
    }
}

impl<O> FromIterator<Key> for AvlTree<O>
where
    O: RebalanceObserver + Default,
{
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<'a, O> IntoIterator for &'a AvlTree<O>
where
    O: RebalanceObserver,
{
    type Item = Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
