use std::fmt::{self, Debug, Display, Formatter};

use thiserror::Error;

use crate::tree::{Color, NodeIndex, Side, Tree};

/// Broken red-black invariant found by [`SortedMap::validate`](crate::SortedMap::validate).
///
/// Nodes are named by their arena slot.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("sentinel is not black")]
    RedSentinel,
    #[error("root {0} is not black")]
    RedRoot(usize),
    #[error("root {0} has a parent")]
    RootParent(usize),
    #[error("red node {0} has a red child")]
    DoubleRed(usize),
    #[error("black height below node {node} differs ({left} left, {right} right)")]
    BlackHeight { node: usize, left: usize, right: usize },
    #[error("keys around node {0} are out of order")]
    Order(usize),
    #[error("node {child} does not link back to its parent {parent}")]
    ParentLink { parent: usize, child: usize },
    #[error("tracked length {tracked} does not match {counted} reachable nodes")]
    Length { tracked: usize, counted: usize },
    #[error("traversal threads were left in the tree")]
    Threaded,
}

struct Subtree<'a, K> {
    range: Option<(&'a K, &'a K)>,
    black_height: usize,
    len: usize,
}

impl<K: Ord, V> Tree<K, V> {
    /// Checks every structural invariant and returns the black height of the root.
    pub(crate) fn validate(&self) -> Result<usize, Violation> {
        if self.threaded {
            return Err(Violation::Threaded);
        }
        if self.arena[NodeIndex::NIL].color != Color::Black {
            return Err(Violation::RedSentinel);
        }
        if !self.root.is_nil() {
            let root = &self.arena[self.root];
            if root.is_red() {
                return Err(Violation::RedRoot(self.root.get()));
            }
            if !root.parent.is_nil() {
                return Err(Violation::RootParent(self.root.get()));
            }
        }
        let subtree = self.validate_at(self.root)?;
        if subtree.len != self.arena.len() {
            return Err(Violation::Length { tracked: self.arena.len(), counted: subtree.len });
        }
        Ok(subtree.black_height)
    }
    fn validate_at(&self, ptr: NodeIndex) -> Result<Subtree<'_, K>, Violation> {
        if ptr.is_nil() {
            return Ok(Subtree { range: None, black_height: 0, len: 0 });
        }
        let link = &self.arena[ptr];
        let key = &self.arena.item(ptr).key;
        let mut heights = [0; 2];
        let mut range = (key, key);
        let mut len = 1;
        for side in [Side::Left, Side::Right] {
            let child = link.child(side);
            if !child.is_nil() {
                if !self.arena.contains(child) || self.arena[child].parent != ptr {
                    return Err(Violation::ParentLink { parent: ptr.get(), child: child.get() });
                }
                if link.is_red() && self.arena[child].is_red() {
                    return Err(Violation::DoubleRed(ptr.get()));
                }
            }
            let subtree = self.validate_at(child)?;
            if let Some((min, max)) = subtree.range {
                match side {
                    Side::Left if max < key => range.0 = min,
                    Side::Right if key < min => range.1 = max,
                    _ => return Err(Violation::Order(ptr.get())),
                }
            }
            heights[side as usize] = subtree.black_height;
            len += subtree.len;
        }
        let [left, right] = heights;
        if left != right {
            return Err(Violation::BlackHeight { node: ptr.get(), left, right });
        }
        Ok(Subtree {
            range: Some(range),
            black_height: left + (link.color as usize),
            len,
        })
    }
}

impl<K, V> Tree<K, V> {
    /// Number of nodes on the longest root to leaf path.
    pub(crate) fn height(&self) -> usize {
        fn height_at<K, V>(tree: &Tree<K, V>, ptr: NodeIndex) -> usize {
            if ptr.is_nil() {
                return 0;
            }
            let left = height_at(tree, tree.descend(ptr, Side::Left));
            let right = height_at(tree, tree.descend(ptr, Side::Right));
            1 + left.max(right)
        }
        height_at(self, self.root)
    }
    #[inline]
    pub(crate) fn display(&self) -> TreeDisplay<'_, K, V> {
        TreeDisplay { tree: self }
    }
}

/// Renders a tree one node per line, children indented below their parent.
///
/// ```text
/// [B] 10 => "ten"
///   [R] 5 => "five"
///   | [B] NIL
///   | [B] NIL
///   [B] NIL
/// ```
pub struct TreeDisplay<'a, K, V> {
    tree: &'a Tree<K, V>,
}

impl<'a, K: Debug, V: Debug> TreeDisplay<'a, K, V> {
    fn fmt_subtree(&self, f: &mut Formatter<'_>, ptr: NodeIndex, depth: usize, markers: u128) -> fmt::Result {
        for i in 0..depth.min(128) {
            if markers & (1 << i) == 0 {
                f.write_str("| ")?;
            } else {
                f.write_str("  ")?;
            }
        }
        if ptr.is_nil() {
            return writeln!(f, "[B] NIL");
        }
        let link = &self.tree.arena[ptr];
        let node = self.tree.arena.item(ptr);
        writeln!(f, "[{}] {:?} => {:?}", if link.is_red() { "R" } else { "B" }, &node.key, &node.value)?;
        let depth = depth + 1;
        let [left, right] = [Side::Left, Side::Right].map( |side| self.tree.descend(ptr, side) );
        self.fmt_subtree(f, left, depth, markers)?;
        self.fmt_subtree(f, right, depth, markers | (1 << depth.min(127)))
    }
}

impl<'a, K: Debug, V: Debug> Display for TreeDisplay<'a, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_subtree(f, self.tree.root, 0, 1)
    }
}
