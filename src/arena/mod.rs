use std::{
    mem::replace,
    ops::{Index as IndexRO, IndexMut},
};

/// Slot address inside an [`Arena`]. Slot `0` is reserved for the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub(crate) struct Index(usize);
impl Index {
    pub(crate) const NIL: Self = Self(0);

    #[inline(always)]
    pub(crate) const fn is_nil(self) -> bool {
        self.0 == 0
    }
    #[inline(always)]
    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
enum Entry<T> {
    Reserved,
    Occupied(T),
    Free(Index),
}

/// Slot arena storing items and their links in two parallel vectors.
///
/// Keeping the links apart from the items lets a caller rewrite links while
/// handing out shared references to items, see [`Arena::split_mut`].
/// The link at slot `0` belongs to the sentinel and is never freed.
// ASSERT: user is responsible for dangling references
#[derive(Debug)]
pub(crate) struct Arena<T, L> {
    items: Vec<Entry<T>>,
    links: Vec<L>,
    free: Index,
    len: usize,
}
impl<T, L> Arena<T, L> {
    #[inline]
    pub fn new(sentinel: L) -> Self {
        Self::with_capacity(0, sentinel)
    }
    #[inline]
    pub fn with_capacity(capacity: usize, sentinel: L) -> Self {
        let mut items = Vec::with_capacity(capacity + 1);
        let mut links = Vec::with_capacity(capacity + 1);
        items.push(Entry::Reserved);
        links.push(sentinel);
        Self { items, links, free: Index::NIL, len: 0 }
    }
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity().min(self.links.capacity()) - 1
    }
    pub fn insert(&mut self, value: T, link: L) -> Index {
        self.len += 1;
        if self.free.is_nil() {
            let index = Index(self.items.len());
            self.items.push(Entry::Occupied(value));
            self.links.push(link);
            return index;
        }
        let index = self.free;
        match replace(&mut self.items[index.0], Entry::Occupied(value)) {
            Entry::Free(next) => self.free = next,
            _ => panic!("free list points at slot {} which is not free", index.0),
        }
        self.links[index.0] = link;
        index
    }
    pub fn remove(&mut self, index: Index) -> Option<T> {
        let entry = self.items.get_mut(index.0)?;
        if !matches!(entry, Entry::Occupied(_)) {
            return None;
        }
        match replace(entry, Entry::Free(self.free)) {
            Entry::Occupied(value) => {
                self.free = index;
                self.len -= 1;
                Some(value)
            },
            _ => panic!("this should never happen!"),
        }
    }
    #[inline]
    pub fn get(&self, index: Index) -> Option<&T> {
        match self.items.get(index.0) {
            Some(Entry::Occupied(value)) => Some(value),
            _ => None,
        }
    }
    #[inline]
    pub fn get_mut(&mut self, index: Index) -> Option<&mut T> {
        match self.items.get_mut(index.0) {
            Some(Entry::Occupied(value)) => Some(value),
            _ => None,
        }
    }
    #[inline]
    pub fn contains(&self, index: Index) -> bool {
        matches!(self.items.get(index.0), Some(Entry::Occupied(_)))
    }
    /// Item stored at a slot that a live link points to.
    #[inline]
    pub fn item(&self, index: Index) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("dangling arena index {}", index.0),
        }
    }
    #[inline]
    pub fn item_mut(&mut self, index: Index) -> &mut T {
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("dangling arena index {}", index.0),
        }
    }
    /// Every occupied slot in slot order.
    pub fn indices(&self) -> impl Iterator<Item = Index> + '_ {
        self.items.iter()
            .enumerate()
            .filter_map( |(i, entry)| matches!(entry, Entry::Occupied(_)).then_some(Index(i)) )
    }
    /// Drops every item, keeping the sentinel slot and the allocation.
    pub fn clear(&mut self) {
        self.items.truncate(1);
        self.links.truncate(1);
        self.free = Index::NIL;
        self.len = 0;
    }
    #[inline]
    pub fn split_mut(&mut self) -> (Items<'_, T>, LinksMut<'_, L>) {
        (Items(&self.items), LinksMut(&mut self.links))
    }
}

impl<T, L> IndexRO<Index> for Arena<T, L> {
    type Output = L;
    #[inline(always)]
    fn index(&self, index: Index) -> &L {
        &self.links[index.0]
    }
}
impl<T, L> IndexMut<Index> for Arena<T, L> {
    #[inline(always)]
    fn index_mut(&mut self, index: Index) -> &mut L {
        &mut self.links[index.0]
    }
}

/// Shared view of the items of a split arena.
#[derive(Debug)]
pub(crate) struct Items<'a, T>(&'a [Entry<T>]);
impl<'a, T> Items<'a, T> {
    #[inline]
    pub fn item(&self, index: Index) -> &'a T {
        match self.0.get(index.0) {
            Some(Entry::Occupied(value)) => value,
            _ => panic!("dangling arena index {}", index.0),
        }
    }
}

/// Exclusive view of the links of a split arena.
#[derive(Debug)]
pub(crate) struct LinksMut<'a, L>(&'a mut [L]);
impl<'a, L> IndexRO<Index> for LinksMut<'a, L> {
    type Output = L;
    #[inline(always)]
    fn index(&self, index: Index) -> &L {
        &self.0[index.0]
    }
}
impl<'a, L> IndexMut<Index> for LinksMut<'a, L> {
    #[inline(always)]
    fn index_mut(&mut self, index: Index) -> &mut L {
        &mut self.0[index.0]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn free_slots_are_reused() {
        let mut arena = Arena::with_capacity(4, 0u8);
        let a = arena.insert("a", 1);
        let b = arena.insert("b", 2);
        let c = arena.insert("c", 3);
        assert_eq!(arena.len(), 3);
        assert!(!a.is_nil());
        assert_eq!(arena.remove(b), Some("b"));
        assert_eq!(arena.remove(b), None);
        assert!(!arena.contains(b));
        let d = arena.insert("d", 4);
        assert_eq!(d, b, "freed slot is handed out first");
        assert_eq!(arena[d], 4);
        assert_eq!(arena.get(c), Some(&"c"));
        assert_eq!(arena.indices().collect::<Vec<_>>(), vec![a, d, c]);
    }
    #[test]
    fn sentinel_slot_is_never_occupied() {
        let mut arena = Arena::new(7u8);
        assert_eq!(arena.get(Index::NIL), None::<&()>);
        assert_eq!(arena.remove(Index::NIL), None);
        arena.insert((), 1);
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena[Index::NIL], 7);
        assert_eq!(arena.indices().count(), 0);
    }
}
