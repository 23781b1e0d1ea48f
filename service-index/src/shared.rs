use core::borrow::Borrow;

use spin::{RwLock, RwLockReadGuard};

use super::rb_tree::RBIndex;

/// An [`RBIndex`] behind a single reader-writer lock.
///
/// Inserts hold the write lock for the whole operation, since rebalancing may
/// rotate any ancestor up to the root. Searches share the read lock.
#[derive(Debug)]
pub struct SharedIndex<K, V> {
    tree: RwLock<RBIndex<K, V>>,
}

impl<K, V> SharedIndex<K, V> {
    pub fn new() -> SharedIndex<K, V> {
        SharedIndex::from(RBIndex::new())
    }

    pub fn len(&self) -> usize {
        self.tree.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.read().is_empty()
    }

    pub fn destroy(&self) {
        self.tree.write().destroy();
    }

    /// Lock the index for a batch of reads.
    pub fn read(&self) -> RwLockReadGuard<'_, RBIndex<K, V>> {
        self.tree.read()
    }

    pub fn into_inner(self) -> RBIndex<K, V> {
        self.tree.into_inner()
    }
}

impl<K: Ord, V> SharedIndex<K, V> {
    pub fn insert(&self, key: K, val: V) {
        self.tree.write().insert(key, val);
    }

    /// Look up `key` and run `f` on the record while the read lock is held.
    pub fn search_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        F: FnOnce(&V) -> R,
    {
        self.tree.read().search(key).map(f)
    }

    pub fn search_cloned<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: Clone,
    {
        self.search_with(key, V::clone)
    }
}

impl<K, V> From<RBIndex<K, V>> for SharedIndex<K, V> {
    fn from(tree: RBIndex<K, V>) -> Self {
        SharedIndex {
            tree: RwLock::new(tree),
        }
    }
}

impl<K, V> Default for SharedIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
