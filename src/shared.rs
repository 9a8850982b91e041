use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::SortedMap;

/// [`SortedMap`] behind a shared reader-writer lock.
///
/// The tree has no synchronization of its own. Readers share the lock for
/// lookups; every mutation and every traversal takes it exclusively, since
/// a traversal threads links through the tree while it runs.
#[derive(Debug)]
pub struct SharedSortedMap<K, V>(Arc<RwLock<SortedMap<K, V>>>);

impl<K, V> Clone for SharedSortedMap<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<K, V> Default for SharedSortedMap<K, V> {
    #[inline(always)]
    fn default() -> Self { Self::new() }
}

impl<K, V> From<SortedMap<K, V>> for SharedSortedMap<K, V> {
    #[inline]
    fn from(map: SortedMap<K, V>) -> Self {
        Self(Arc::new(RwLock::new(map)))
    }
}

impl<K, V> SharedSortedMap<K, V> {
    #[inline]
    pub fn new() -> Self {
        SortedMap::new().into()
    }
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        SortedMap::with_capacity(capacity).into()
    }
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, SortedMap<K, V>> {
        self.0.read()
    }
    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, SortedMap<K, V>> {
        self.0.write()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.0.read().len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }
}

impl<K: Ord, V> SharedSortedMap<K, V> {
    #[inline]
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.0.write().insert(key, value)
    }
    #[inline]
    pub fn remove(&self, key: &K) -> Option<V> {
        self.0.write().remove(key)
    }
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.0.read().contains_key(key)
    }
    #[inline]
    pub fn get_cloned(&self, key: &K) -> Option<V>
        where V: Clone
    {
        self.0.read().get(key).cloned()
    }
    /// Ascending copy of every pair, taken under the exclusive lock.
    pub fn to_vec(&self) -> Vec<(K, V)>
        where K: Clone, V: Clone
    {
        let mut map = self.0.write();
        let pairs = map.forward_iter()
            .map( |(k, v)| (k.clone(), v.clone()) )
            .collect();
        pairs
    }
}
