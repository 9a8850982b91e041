use std::mem::replace;

use log::trace;

use crate::tree::{Error, Link, Node, NodeIndex, SearchResult, Side, Tree};

impl<K, V> Tree<K, V> {
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }
    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_nil()
    }
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.arena.capacity()
    }
    pub(crate) fn clear(&mut self) {
        trace!("clear: dropping {} nodes", self.arena.len());
        self.arena.clear();
        self.arena[NodeIndex::NIL] = Link::SENTINEL;
        self.root = NodeIndex::NIL;
        self.threaded = false;
    }
    /// Outermost pair on `side`: the minimum for [`Side::Left`], the maximum for [`Side::Right`].
    pub(crate) fn peek(&self, side: Side) -> Option<(&K, &V)> {
        if self.root.is_nil() {
            return None;
        }
        let node = self.arena.item(self.limit(self.root, side));
        Some((&node.key, &node.value))
    }
    pub(crate) fn pop(&mut self, side: Side) -> Option<(K, V)> {
        self.unthread();
        if self.root.is_nil() {
            return None;
        }
        let ptr = self.limit(self.root, side);
        let node = self.remove_at(ptr);
        trace!("pop: removed node {} ({:?} end, len {})", ptr.get(), side, self.len());
        Some((node.key, node.value))
    }
}

impl<K: Ord, V> Tree<K, V> {
    /// Stores `value` under `key`, returning the value it replaced.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.unthread();
        let (parent, side) = match self.search(&key) {
            SearchResult::Here(ptr) => {
                let node = self.arena.item_mut(ptr);
                return Some(replace(&mut node.value, value));
            },
            SearchResult::Empty => (NodeIndex::NIL, Side::Left),
            SearchResult::LeftOf(parent) => (parent, Side::Left),
            SearchResult::RightOf(parent) => (parent, Side::Right),
        };
        let ptr = self.insert_at(parent, side, Node { key, value });
        trace!("insert: linked node {} under {} (len {})", ptr.get(), parent.get(), self.len());
        None
    }
    /// Stores `value` under a key that is not present yet.
    pub(crate) fn try_insert(&mut self, key: K, value: V) -> Result<&mut V, Error> {
        self.unthread();
        let (parent, side) = match self.search(&key) {
            SearchResult::Here(_) => return Err(Error::DuplicateKey),
            SearchResult::Empty => (NodeIndex::NIL, Side::Left),
            SearchResult::LeftOf(parent) => (parent, Side::Left),
            SearchResult::RightOf(parent) => (parent, Side::Right),
        };
        let ptr = self.insert_at(parent, side, Node { key, value });
        trace!("try_insert: linked node {} under {} (len {})", ptr.get(), parent.get(), self.len());
        Ok(&mut self.arena.item_mut(ptr).value)
    }
    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        match self.search(key) {
            SearchResult::Here(ptr) => Some(&self.arena.item(ptr).value),
            _ => None
        }
    }
    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.search(key) {
            SearchResult::Here(ptr) => Some(&mut self.arena.item_mut(ptr).value),
            _ => None
        }
    }
    #[inline]
    pub(crate) fn contains(&self, key: &K) -> bool {
        matches!(self.search(key), SearchResult::Here(_))
    }
    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        self.unthread();
        match self.search(key) {
            SearchResult::Here(ptr) => {
                let node = self.remove_at(ptr);
                trace!("remove: unlinked node {} (len {})", ptr.get(), self.len());
                Some(node.value)
            },
            _ => None
        }
    }
}
