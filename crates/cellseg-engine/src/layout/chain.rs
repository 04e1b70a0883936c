use super::leaf::Leaf;

/// Index of a leaf slot in a [`LeafChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeafId(usize);

/// Leaves in document order, stored in an arena and linked by index.
///
/// Disposing a leaf empties its slot and cuts the links to it; ids of other
/// leaves stay valid. The chain has no internal locking: concurrent readers
/// are fine, mutation needs `&mut`.
#[derive(Debug, Clone, Default)]
pub struct LeafChain {
    slots: Vec<Option<Leaf>>,
    first: Option<LeafId>,
    last: Option<LeafId>,
    live: usize,
}

impl LeafChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `leaf` after the current last leaf and links the two.
    pub fn push(&mut self, mut leaf: Leaf) -> LeafId {
        let id = LeafId(self.slots.len());
        leaf.previous = self.last;
        leaf.next = None;
        if let Some(prev_id) = self.last
            && let Some(prev) = self.slot_mut(prev_id)
        {
            prev.next = Some(id);
        }
        self.slots.push(Some(leaf));
        if self.first.is_none() {
            self.first = Some(id);
        }
        self.last = Some(id);
        self.live += 1;
        id
    }

    pub fn get(&self, id: LeafId) -> Option<&Leaf> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn first(&self) -> Option<LeafId> {
        self.first
    }

    pub fn last(&self) -> Option<LeafId> {
        self.last
    }

    pub fn previous(&self, id: LeafId) -> Option<LeafId> {
        self.get(id).and_then(Leaf::previous)
    }

    pub fn next(&self, id: LeafId) -> Option<LeafId> {
        self.get(id).and_then(Leaf::next)
    }

    /// Number of live leaves.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live leaves in document order.
    pub fn iter(&self) -> impl Iterator<Item = (LeafId, &Leaf)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|leaf| (LeafId(i), leaf)))
    }

    pub fn ids(&self) -> impl Iterator<Item = LeafId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    /// The live leaf whose span strictly contains `offset`.
    pub fn leaf_containing(&self, offset: usize) -> Option<LeafId> {
        self.iter().find(|(_, l)| l.contains(offset)).map(|(id, _)| id)
    }

    /// The live leaf starting exactly at `offset`.
    pub fn leaf_starting_at(&self, offset: usize) -> Option<LeafId> {
        self.iter()
            .find(|(_, l)| l.span().start == offset)
            .map(|(id, _)| id)
    }

    /// Removes `id` from the chain, returning the leaf.
    ///
    /// Neighbours lose their link to it; walks that would have crossed it now
    /// end there.
    pub fn dispose(&mut self, id: LeafId) -> Option<Leaf> {
        let leaf = self.slots.get_mut(id.0)?.take()?;
        self.live -= 1;

        if let Some(prev) = leaf.previous.and_then(|p| self.slot_mut(p)) {
            prev.next = None;
        }
        if let Some(next) = leaf.next.and_then(|n| self.slot_mut(n)) {
            next.previous = None;
        }
        if self.first == Some(id) {
            self.first = leaf.next;
        }
        if self.last == Some(id) {
            self.last = leaf.previous;
        }
        log::trace!("disposed leaf {id:?} at {:?}", leaf.span());
        Some(leaf)
    }

    /// Disposes every leaf.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.first = None;
        self.last = None;
        self.live = 0;
    }

    fn slot_mut(&mut self, id: LeafId) -> Option<&mut Leaf> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{document::Span, layout::WhiteSpace};
    use cellseg_syntax::TokenKind;
    use pretty_assertions::assert_eq;

    fn leaf(start: usize, end: usize) -> Leaf {
        Leaf::new(
            TokenKind::Text,
            Span::new(start, end),
            WhiteSpace::empty(start),
            false,
            end - start,
            false,
        )
    }

    fn three() -> (LeafChain, [LeafId; 3]) {
        let mut chain = LeafChain::new();
        let a = chain.push(leaf(0, 1));
        let b = chain.push(leaf(2, 3));
        let c = chain.push(leaf(4, 5));
        (chain, [a, b, c])
    }

    #[test]
    fn push_links_front_to_back() {
        let (chain, [a, b, c]) = three();
        assert_eq!(chain.first(), Some(a));
        assert_eq!(chain.last(), Some(c));
        assert_eq!(chain.next(a), Some(b));
        assert_eq!(chain.next(b), Some(c));
        assert_eq!(chain.next(c), None);
        assert_eq!(chain.previous(c), Some(b));
        assert_eq!(chain.previous(a), None);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn dispose_middle_cuts_both_links() {
        let (mut chain, [a, b, c]) = three();
        let removed = chain.dispose(b).unwrap();
        assert_eq!(removed.span(), Span::new(2, 3));
        assert_eq!(chain.get(b), None);
        assert_eq!(chain.next(a), None);
        assert_eq!(chain.previous(c), None);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.ids().collect::<Vec<_>>(), vec![a, c]);
    }

    #[test]
    fn dispose_ends_moves_first_and_last() {
        let (mut chain, [a, b, c]) = three();
        chain.dispose(a);
        assert_eq!(chain.first(), Some(b));
        chain.dispose(c);
        assert_eq!(chain.last(), Some(b));
        assert_eq!(chain.dispose(c), None);
    }

    #[test]
    fn clear_empties_chain() {
        let (mut chain, [a, ..]) = three();
        chain.clear();
        assert!(chain.is_empty());
        assert_eq!(chain.get(a), None);
        assert_eq!(chain.first(), None);
    }

    #[test]
    fn offset_lookups() {
        let (chain, [_, b, _]) = three();
        assert_eq!(chain.leaf_starting_at(2), Some(b));
        assert_eq!(chain.leaf_starting_at(1), None);
        assert_eq!(chain.leaf_containing(0), None);
        let mut wide = LeafChain::new();
        let w = wide.push(leaf(0, 10));
        assert_eq!(wide.leaf_containing(5), Some(w));
    }
}
