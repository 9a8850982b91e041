use std::fmt::Debug;

use crate::tree::{BackwardIter, Error, ForwardIter, IntoIter, Side, Tree, TreeDisplay, Violation};

/// Ordered map backed by a red-black tree.
///
/// Every method forwards to the tree. Lookups take `&self`; inserting,
/// removing and iterating take `&mut self`, because the in-order traversal
/// temporarily rewrites links inside the tree.
///
/// ```
/// use rb_sorted_map::SortedMap;
///
/// let mut map = SortedMap::new();
/// map.insert(10, "ten");
/// map.insert(5, "five");
/// map.insert(15, "fifteen");
/// assert_eq!(map.get(&5), Some(&"five"));
/// assert!(map.delete(&10));
/// let keys = map.forward_iter().map( |(k, _)| *k ).collect::<Vec<_>>();
/// assert_eq!(keys, [5, 15]);
/// ```
#[derive(Debug)]
pub struct SortedMap<K, V> {
    tree: Tree<K, V>,
}

impl<K, V> SortedMap<K, V> {
    #[inline]
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { tree: Tree::with_capacity(capacity) }
    }
    /// Number of nodes that fit without growing the arena.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }
    #[doc(alias = "size")]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tree.len()
    }
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
    pub fn clear(&mut self) {
        self.tree.clear()
    }
    #[inline]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.tree.peek(Side::Left)
    }
    #[inline]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.tree.peek(Side::Right)
    }
    #[inline]
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.tree.pop(Side::Left)
    }
    #[inline]
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.tree.pop(Side::Right)
    }
    /// Pairs in ascending key order.
    ///
    /// Dropping the iterator early still walks the rest of the tree to restore its links.
    #[doc(alias = "iter")]
    #[inline]
    pub fn forward_iter(&mut self) -> ForwardIter<'_, K, V> {
        self.tree.iter()
    }
    /// Pairs in descending key order.
    ///
    /// Dropping the iterator early still walks the rest of the tree to restore its links.
    #[doc(alias = "rev")]
    #[inline]
    pub fn backward_iter(&mut self) -> BackwardIter<'_, K, V> {
        self.tree.iter()
    }
    /// Number of nodes on the longest path from the root down.
    #[inline]
    pub fn height(&self) -> usize {
        self.tree.height()
    }
}

impl<K: Ord, V> SortedMap<K, V> {
    /// Stores `value` under `key`. An existing value is overwritten and returned.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.tree.insert(key, value)
    }
    /// Stores `value` under `key` unless the key is already present.
    #[inline]
    pub fn try_insert(&mut self, key: K, value: V) -> Result<&mut V, Error> {
        self.tree.try_insert(key, value)
    }
    #[doc(alias = "search")]
    #[doc(alias = "find")]
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key)
    }
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key)
    }
    #[doc(alias = "has")]
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains(key)
    }
    #[inline]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree.remove(key)
    }
    /// Removes `key`, returning whether it was present.
    #[inline]
    pub fn delete(&mut self, key: &K) -> bool {
        self.tree.remove(key).is_some()
    }
    /// Checks the red-black invariants, returning the black height of the tree.
    #[inline]
    pub fn validate(&self) -> Result<usize, Violation> {
        self.tree.validate()
    }
}

impl<K: Debug, V: Debug> SortedMap<K, V> {
    /// Structure of the tree, one node per line with its color.
    #[inline]
    pub fn display(&self) -> TreeDisplay<'_, K, V> {
        self.tree.display()
    }
}

impl<K, V> Default for SortedMap<K, V> {
    #[inline(always)]
    fn default() -> Self { Self::new() }
}

impl<K: Ord, V> Extend<(K, V)> for SortedMap<K, V> {
    #[inline]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SortedMap<K, V> {
    #[inline]
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        map.extend(iter);
        map
    }
}

impl<K, V> IntoIterator for SortedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a, K, V> IntoIterator for &'a mut SortedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ForwardIter<'a, K, V>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.forward_iter()
    }
}
