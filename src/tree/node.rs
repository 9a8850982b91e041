use std::ops::Not;

use crate::arena::Index;

pub(crate) type NodeIndex = Index;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red = 0,
    Black = 1,
}

/// Child slot of a node. Rotating toward a side moves the node down on that side.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left = 0,
    Right = 1,
}
impl Not for Side {
    type Output = Side;
    #[inline]
    fn not(self) -> Self::Output {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left
        }
    }
}

#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
}

/// Structural half of a node, stored apart from its key and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link {
    pub color: Color,
    pub parent: NodeIndex,
    pub children: [NodeIndex; 2],
}

impl Link {
    pub const SENTINEL: Self = Self {
        color: Color::Black,
        parent: NodeIndex::NIL,
        children: [NodeIndex::NIL; 2],
    };

    #[inline]
    pub const fn new(color: Color, parent: NodeIndex) -> Self {
        Self { color, parent, children: [NodeIndex::NIL; 2] }
    }
    #[inline(always)]
    pub const fn is_black(&self) -> bool {
        match self.color {
            Color::Black => true,
            Color::Red => false
        }
    }
    #[inline(always)]
    pub const fn is_red(&self) -> bool {
        match self.color {
            Color::Black => false,
            Color::Red => true
        }
    }
    #[inline(always)]
    pub const fn child(&self, side: Side) -> NodeIndex {
        self.children[side as usize]
    }
    #[inline(always)]
    pub fn child_mut(&mut self, side: Side) -> &mut NodeIndex {
        &mut self.children[side as usize]
    }
    /// Side under which `child` hangs. `child` has to be one of the children.
    #[inline]
    pub fn side_of(&self, child: NodeIndex) -> Side {
        if self.children[0] == child { Side::Left } else { Side::Right }
    }
}
