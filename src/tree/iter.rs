use std::iter::FusedIterator;

use crate::{
    arena::{Items, LinksMut},
    tree::{Link, Node, NodeIndex, Side, Tree},
};

/// In-order traversal that threads the tree instead of keeping a stack.
///
/// `I` is the child slot visited first: `0` walks keys in ascending order,
/// `1` in descending order. Before descending into the near subtree of a node,
/// the far link of that subtree's last node is pointed back at the node. The
/// thread is removed when the walk comes back through it, so every link is
/// restored by the time the last pair is produced. Dropping the iterator early
/// finishes the walk without producing anything.
#[derive(Debug)]
pub struct Iter<'a, K, V, const I: usize> {
    items: Items<'a, Node<K, V>>,
    links: LinksMut<'a, Link>,
    threaded: &'a mut bool,
    current: NodeIndex,
    remaining: usize,
}

/// Ascending traversal, see [`SortedMap::forward_iter`](crate::SortedMap::forward_iter).
pub type ForwardIter<'a, K, V> = Iter<'a, K, V, 0>;
/// Descending traversal, see [`SortedMap::backward_iter`](crate::SortedMap::backward_iter).
pub type BackwardIter<'a, K, V> = Iter<'a, K, V, 1>;

impl<'a, K, V, const I: usize> Iter<'a, K, V, I> {
    #[inline]
    fn visit(&mut self, ptr: NodeIndex) -> (&'a K, &'a V) {
        self.remaining = self.remaining.saturating_sub(1);
        let node = self.items.item(ptr);
        (&node.key, &node.value)
    }
}

impl<'a, K, V, const I: usize> Iterator for Iter<'a, K, V, I> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        while !self.current.is_nil() {
            let current = self.current;
            let near = self.links[current].children[I];
            if near.is_nil() {
                self.current = self.links[current].children[1 - I];
                return Some(self.visit(current));
            }
            let mut last = near;
            loop {
                let next = self.links[last].children[1 - I];
                if next.is_nil() || next == current {
                    break;
                }
                last = next;
            }
            if self.links[last].children[1 - I].is_nil() {
                self.links[last].children[1 - I] = current;
                self.current = near;
            } else {
                self.links[last].children[1 - I] = NodeIndex::NIL;
                self.current = self.links[current].children[1 - I];
                return Some(self.visit(current));
            }
        }
        *self.threaded = false;
        None
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<'a, K, V, const I: usize> ExactSizeIterator for Iter<'a, K, V, I> {}
impl<'a, K, V, const I: usize> FusedIterator for Iter<'a, K, V, I> {}

impl<'a, K, V, const I: usize> Drop for Iter<'a, K, V, I> {
    fn drop(&mut self) {
        while self.next().is_some() {}
    }
}

/// Owning iterator, removes pairs from either end of the tree.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    tree: Tree<K, V>,
}
impl<K, V> IntoIter<K, V> {
    #[inline(always)]
    pub(crate) fn new(tree: Tree<K, V>) -> Self {
        Self { tree }
    }
}
impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.tree.pop(Side::Left)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tree.len();
        (len, Some(len))
    }
}
impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.pop(Side::Right)
    }
}
impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Tree<K, V> {
    /// Starts a threaded traversal, `I` selects the direction as on [`Iter`].
    pub(crate) fn iter<const I: usize>(&mut self) -> Iter<'_, K, V, I> {
        self.unthread();
        let current = self.root;
        let remaining = self.arena.len();
        self.threaded = !current.is_nil();
        let (items, links) = self.arena.split_mut();
        Iter { items, links, threaded: &mut self.threaded, current, remaining }
    }
}
