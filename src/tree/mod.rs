mod node;
pub(crate) use node::*;
mod interface;
mod iter;
pub use iter::*;
mod check;
pub use check::*;

use std::cmp::Ordering;

use log::debug;
use thiserror::Error;

use crate::arena::Arena;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("key already exists")]
    DuplicateKey,
    #[error("tree is corrupted: {0}")]
    Corrupted(#[from] Violation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchResult<T> {
    Empty,
    LeftOf(T),
    Here(T),
    RightOf(T)
}

/// Red-black tree over an index arena.
///
/// Slot `0` of the arena is the sentinel: every absent child and the parent
/// of the root point at it, and it is always black. The tree owns the arena,
/// so every helper below works on `&mut self` and never keeps links of its own.
#[derive(Debug)]
pub(crate) struct Tree<K, V> {
    arena: Arena<Node<K, V>, Link>,
    root: NodeIndex,
    /// Set while a traversal may have links threaded back up the tree.
    threaded: bool,
}

impl<K, V> Tree<K, V> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self { arena: Arena::new(Link::SENTINEL), root: NodeIndex::NIL, threaded: false }
    }
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { arena: Arena::with_capacity(capacity, Link::SENTINEL), root: NodeIndex::NIL, threaded: false }
    }
    /// Child of `ptr` on `side`, or the sentinel when the link is a traversal thread.
    ///
    /// A thread always points up the tree, so the target never names `ptr` as its parent.
    #[inline]
    fn descend(&self, ptr: NodeIndex, side: Side) -> NodeIndex {
        let child = self.arena[ptr].child(side);
        if child.is_nil() || self.arena[child].parent != ptr {
            NodeIndex::NIL
        } else {
            child
        }
    }
    /// Outermost node on `side` of the subtree at `ptr`.
    #[inline]
    fn limit(&self, mut ptr: NodeIndex, side: Side) -> NodeIndex {
        loop {
            let next = self.descend(ptr, side);
            if next.is_nil() {
                return ptr;
            }
            ptr = next;
        }
    }
    /// Drops every thread a leaked traversal left behind.
    fn unthread(&mut self) {
        if !self.threaded {
            return;
        }
        debug!("repairing links threaded by an unfinished traversal");
        let live = self.arena.indices().collect::<Vec<_>>();
        for ptr in live {
            for side in [Side::Left, Side::Right] {
                if self.descend(ptr, side).is_nil() {
                    *self.arena[ptr].child_mut(side) = NodeIndex::NIL;
                }
            }
        }
        self.threaded = false;
    }
    /// Points the link that held `old` under `parent` at `new` instead.
    #[inline]
    fn replace_child(&mut self, parent: NodeIndex, old: NodeIndex, new: NodeIndex) {
        if parent.is_nil() {
            self.root = new;
        } else {
            let side = self.arena[parent].side_of(old);
            *self.arena[parent].child_mut(side) = new;
        }
    }
    /// Moves `ptr` down on `side`, lifting its child from the other side into its place.
    ///
    /// The child opposite of `side` cannot be the sentinel.
    fn rotate(&mut self, ptr: NodeIndex, side: Side) {
        let pivot = self.arena[ptr].child(!side);
        let inner = self.arena[pivot].child(side);
        *self.arena[ptr].child_mut(!side) = inner;
        if !inner.is_nil() {
            self.arena[inner].parent = ptr;
        }
        let parent = self.arena[ptr].parent;
        self.arena[pivot].parent = parent;
        self.replace_child(parent, ptr, pivot);
        *self.arena[pivot].child_mut(side) = ptr;
        self.arena[ptr].parent = pivot;
    }
    /// Hangs the subtree at `child` where `ptr` used to be.
    ///
    /// The parent of `child` is written even when it is the sentinel, delete-fixup starts from there.
    fn transplant(&mut self, ptr: NodeIndex, child: NodeIndex) {
        let parent = self.arena[ptr].parent;
        self.replace_child(parent, ptr, child);
        self.arena[child].parent = parent;
    }
    fn fix_insert(&mut self, mut ptr: NodeIndex) {
        loop {
            let parent = self.arena[ptr].parent;
            if self.arena[parent].is_black() {
                break;
            }
            // a red parent is never the root, so the grandparent is a real node
            let grandparent = self.arena[parent].parent;
            let side = self.arena[grandparent].side_of(parent);
            let uncle = self.arena[grandparent].child(!side);
            match (self.arena[uncle].color, self.arena[parent].side_of(ptr) == side) {
                (Color::Red, _) => {
                    // Case A
                    self.arena[parent].color = Color::Black;
                    self.arena[uncle].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    ptr = grandparent;
                },
                (Color::Black, outer) => {
                    if !outer {
                        // Case B
                        self.rotate(parent, side);
                        ptr = parent;
                    }
                    // Case C
                    let parent = self.arena[ptr].parent;
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    self.rotate(grandparent, !side);
                }
            }
        }
        let root = self.root;
        self.arena[root].color = Color::Black;
    }
    /// Unlinks `ptr` and frees its slot.
    fn remove_at(&mut self, ptr: NodeIndex) -> Node<K, V> {
        let link = self.arena[ptr];
        let mut color = link.color;
        let fix = if link.child(Side::Left).is_nil() {
            let fix = link.child(Side::Right);
            self.transplant(ptr, fix);
            fix
        } else if link.child(Side::Right).is_nil() {
            let fix = link.child(Side::Left);
            self.transplant(ptr, fix);
            fix
        } else {
            let min = self.limit(link.child(Side::Right), Side::Left);
            color = self.arena[min].color;
            let fix = self.arena[min].child(Side::Right);
            if self.arena[min].parent == ptr {
                self.arena[fix].parent = min;
            } else {
                self.transplant(min, fix);
                let right = self.arena[ptr].child(Side::Right);
                *self.arena[min].child_mut(Side::Right) = right;
                self.arena[right].parent = min;
            }
            self.transplant(ptr, min);
            let left = self.arena[ptr].child(Side::Left);
            *self.arena[min].child_mut(Side::Left) = left;
            self.arena[left].parent = min;
            self.arena[min].color = link.color;
            fix
        };
        if color == Color::Black {
            self.fix_remove(fix);
        }
        self.arena[NodeIndex::NIL] = Link::SENTINEL;
        match self.arena.remove(ptr) {
            Some(node) => node,
            None => panic!("removed node {} was not allocated", ptr.get()),
        }
    }
    /// Pushes the missing black at `ptr` up the tree until it can be absorbed.
    ///
    /// `ptr` may be the sentinel, in which case its parent link was set by transplant.
    fn fix_remove(&mut self, mut ptr: NodeIndex) {
        while ptr != self.root && self.arena[ptr].is_black() {
            let parent = self.arena[ptr].parent;
            let side = self.arena[parent].side_of(ptr);
            let mut sibling = self.arena[parent].child(!side);
            if self.arena[sibling].is_red() {
                // Case 1
                self.arena[sibling].color = Color::Black;
                self.arena[parent].color = Color::Red;
                self.rotate(parent, side);
                sibling = self.arena[parent].child(!side);
            }
            let near = self.arena[sibling].child(side);
            let far = self.arena[sibling].child(!side);
            match (self.arena[near].color, self.arena[far].color) {
                (Color::Black, Color::Black) => {
                    // Case 2
                    self.arena[sibling].color = Color::Red;
                    ptr = parent;
                },
                (_, far_color) => {
                    if far_color == Color::Black {
                        // Case 3
                        self.arena[near].color = Color::Black;
                        self.arena[sibling].color = Color::Red;
                        self.rotate(sibling, !side);
                        sibling = self.arena[parent].child(!side);
                    }
                    // Case 4
                    let far = self.arena[sibling].child(!side);
                    let parent_color = self.arena[parent].color;
                    self.arena[sibling].color = parent_color;
                    self.arena[parent].color = Color::Black;
                    self.arena[far].color = Color::Black;
                    self.rotate(parent, side);
                    ptr = self.root;
                }
            }
        }
        self.arena[ptr].color = Color::Black;
    }
}

impl<K: Ord, V> Tree<K, V> {
    fn search(&self, key: &K) -> SearchResult<NodeIndex> {
        let (mut ptr, mut parent, mut side) = (self.root, NodeIndex::NIL, Side::Left);
        while !ptr.is_nil() {
            parent = ptr;
            side = match self.arena.item(ptr).key.cmp(key) {
                Ordering::Greater => Side::Left,
                Ordering::Equal => return SearchResult::Here(ptr),
                Ordering::Less => Side::Right,
            };
            ptr = self.descend(ptr, side);
        }
        match (parent.is_nil(), side) {
            (true, _) => SearchResult::Empty,
            (false, Side::Left) => SearchResult::LeftOf(parent),
            (false, Side::Right) => SearchResult::RightOf(parent),
        }
    }
    /// Links a fresh red node below `parent` (or as the root) and rebalances.
    fn insert_at(&mut self, parent: NodeIndex, side: Side, node: Node<K, V>) -> NodeIndex {
        let ptr = self.arena.insert(node, Link::new(Color::Red, parent));
        if parent.is_nil() {
            self.root = ptr;
        } else {
            *self.arena[parent].child_mut(side) = ptr;
        }
        self.fix_insert(ptr);
        ptr
    }
}
