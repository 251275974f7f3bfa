use alloc::vec::Vec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::PrioritySource;
use super::record::{LeftFacet, PairRecord, RightFacet};
use super::treap::RawTreap;
use crate::order::TotalOrder;

pub(crate) type LeftTree<L, R, CL> = RawTreap<PairRecord<L, R>, LeftFacet, CL>;
pub(crate) type RightTree<L, R, CR> = RawTreap<PairRecord<L, R>, RightFacet, CR>;

/// The core store backing `BiMap`.
///
/// Every live record is linked into both trees; a record's handle is its position in either
/// ordering, so moving between orderings never searches.
pub(crate) struct RawBiMap<L, R, CL, CR> {
    /// Arena owning every pair record.
    records: Arena<PairRecord<L, R>>,
    left: LeftTree<L, R, CL>,
    right: RightTree<L, R, CR>,
    priorities: PrioritySource,
    /// Number of live pairs.
    len: usize,
}

impl<L, R, CL, CR> RawBiMap<L, R, CL, CR> {
    pub(crate) fn new(left_order: CL, right_order: CR, priorities: PrioritySource) -> Self {
        Self {
            records: Arena::new(),
            left: RawTreap::new(left_order),
            right: RawTreap::new(right_order),
            priorities,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize, left_order: CL, right_order: CR, priorities: PrioritySource) -> Self {
        Self {
            records: Arena::with_capacity(capacity),
            ..Self::new(left_order, right_order, priorities)
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        debug_assert_eq!(self.left.is_empty(), self.right.is_empty(), "orderings disagree on emptiness");
        debug_assert_eq!(self.left.is_empty(), self.len == 0, "pair count out of sync");
        debug_assert_eq!(self.records.len(), self.len, "arena holds detached records");
        self.left.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.records.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.records.reserve(additional);
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
        self.left.clear();
        self.right.clear();
        self.len = 0;
    }

    pub(crate) fn records(&self) -> &Arena<PairRecord<L, R>> {
        &self.records
    }

    pub(crate) fn record(&self, handle: Handle) -> &PairRecord<L, R> {
        self.records.get(handle)
    }

    pub(crate) fn left_tree(&self) -> &LeftTree<L, R, CL> {
        &self.left
    }

    pub(crate) fn right_tree(&self) -> &RightTree<L, R, CR> {
        &self.right
    }

    /// Moves every pair out in left order, leaving the store empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(L, R)> {
        let mut order = Vec::with_capacity(self.len);
        let mut pos = self.left.first(&self.records);
        while let Some(handle) = pos {
            order.push(handle);
            pos = self.left.next(&self.records, pos);
        }

        let mut pairs = Vec::with_capacity(order.len());
        for handle in order {
            pairs.push(self.records.remove(handle).into_pair());
        }
        self.clear();
        pairs
    }
}

impl<L, R, CL, CR> RawBiMap<L, R, CL, CR>
where
    CL: TotalOrder<L>,
    CR: TotalOrder<R>,
{
    pub(crate) fn find_left(&self, key: &L) -> Option<Handle> {
        self.left.find(&self.records, key)
    }

    pub(crate) fn find_right(&self, key: &R) -> Option<Handle> {
        self.right.find(&self.records, key)
    }

    /// Inserts the pair unless either key is already present.
    pub(crate) fn insert(&mut self, left: L, right: R) -> Option<Handle> {
        if self.find_left(&left).is_some() || self.find_right(&right).is_some() {
            return None;
        }
        Some(self.insert_unique(left, right))
    }

    /// Inserts a pair whose keys the caller has checked to be absent on both sides.
    pub(crate) fn insert_unique(&mut self, left: L, right: R) -> Handle {
        let record = PairRecord::new(left, right, &mut self.priorities);
        let handle = self.records.insert(record);
        self.right.insert(&mut self.records, handle);
        self.left.insert(&mut self.records, handle);
        self.len += 1;
        handle
    }

    /// Unlinks the record from both orderings and frees its slot.
    ///
    /// Returns the positions that followed it in the left and right orderings, and the pair.
    pub(crate) fn remove(&mut self, handle: Handle) -> (Option<Handle>, Option<Handle>, (L, R)) {
        let left_next = self.left.erase(&mut self.records, handle);
        let right_next = self.right.erase(&mut self.records, handle);
        let pair = self.records.remove(handle).into_pair();
        self.len -= 1;
        (left_next, right_next, pair)
    }
}

impl<L: Clone, R: Clone, CL: Clone, CR: Clone> RawBiMap<L, R, CL, CR>
where
    CL: TotalOrder<L>,
    CR: TotalOrder<R>,
{
    /// Copies every pair into a fresh store with its own records and tree shapes.
    pub(crate) fn deep_clone(&self) -> Self {
        let mut copy = Self::with_capacity(
            self.len,
            self.left.order().clone(),
            self.right.order().clone(),
            self.priorities.clone(),
        );
        copy.copy_pairs_from(self);
        copy
    }

    /// Turns `self` into a deep copy of `source`, orders and priority stream included, keeping the
    /// arena's allocation.
    pub(crate) fn clone_from_store(&mut self, source: &Self) {
        self.clear();
        self.left = RawTreap::new(source.left.order().clone());
        self.right = RawTreap::new(source.right.order().clone());
        self.priorities = source.priorities.clone();
        self.records.reserve(source.len);
        self.copy_pairs_from(source);
    }

    /// Reinserts the pairs of `source`, which are unique under the orders `self` now holds.
    fn copy_pairs_from(&mut self, source: &Self) {
        let mut pos = source.left.first(&source.records);
        while let Some(handle) = pos {
            let (left, right) = source.records.get(handle).pair();
            self.insert_unique(left.clone(), right.clone());
            pos = source.left.next(&source.records, pos);
        }
    }
}
