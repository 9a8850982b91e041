//! Sorted map backed by a red-black tree whose nodes live in an index arena.
//!
//! Slot `0` of the arena is a shared black sentinel standing in for every
//! absent child and for the parent of the root, so links are plain indices
//! and color checks never special-case a missing node. Iteration walks the
//! tree with threaded (Morris) traversal and needs no stack.
//!
//! The map is single-threaded. With the `parking_lot` feature,
//! [`SharedSortedMap`] puts it behind a reader-writer lock.

mod arena;
mod tree;
mod map;
#[cfg(feature = "parking_lot")]
mod shared;

pub use crate::{
    map::SortedMap,
    tree::{BackwardIter, Error, ForwardIter, IntoIter, Iter, TreeDisplay, Violation},
};
#[cfg(feature = "parking_lot")]
pub use crate::shared::SharedSortedMap;

pub mod prelude {
    pub use crate::{SortedMap, Error, Violation};
    #[cfg(feature = "parking_lot")]
    pub use crate::SharedSortedMap;
}

#[cfg(test)]
mod test;
