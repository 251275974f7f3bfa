use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use tracing::trace;

use crate::Error;
#[cfg(feature = "std")]
use crate::order::Natural;
use crate::order::TotalOrder;
use crate::raw::{
    Arena, Facet, Handle, LeftFacet, PairRecord, PrioritySource, RawBiMap, RightFacet, first, last, predecessor, successor,
};

mod capacity;
mod cursor;
mod default_value;

pub use cursor::{LeftCursor, RightCursor};

/// A bidirectional ordered map: a set of `(L, R)` pairs in which every left value and every right
/// value occurs at most once.
///
/// Each pair can be reached from either side in O(log n) expected time. The map keeps two sorted
/// views over the same pairs: one ordered by the left values under `CL`, one ordered by the right
/// values under `CR`. Both default to [`Natural`](crate::Natural), the order given by [`Ord`].
///
/// Positions in either view are [`LeftCursor`] and [`RightCursor`] values. A cursor can be moved
/// along its view, dereferenced through the map, and flipped to the other view in O(1).
///
/// # Examples
///
/// ```
/// use treap_bimap::BiMap;
///
/// let mut elements = BiMap::new();
/// elements.insert("H", 1);
/// elements.insert("He", 2);
/// elements.insert("Li", 3);
///
/// // Lookups go both ways.
/// assert_eq!(elements.at_left(&"He"), Ok(&2));
/// assert_eq!(elements.at_right(&3), Ok(&"Li"));
///
/// // Neither side may repeat: this pair is rejected.
/// assert!(elements.insert("H", 4).is_end());
/// assert_eq!(elements.len(), 3);
///
/// // Walk the right view from 2 upward.
/// let mut cursor = elements.lower_bound_right(&2);
/// let mut names = Vec::new();
/// while elements.right_key(cursor).is_some() {
///     names.push(*elements.left_key(cursor.flip()).unwrap());
///     cursor = elements.next_right(cursor);
/// }
/// assert_eq!(names, ["He", "Li"]);
/// ```
///
/// # Background
///
/// Each view is a treap: a binary search tree by key that is also a max-heap by a random priority
/// drawn once per node. For independent random priorities the expected height is O(log n) without
/// any rebalancing step. The priorities come from a generator owned by the map, seeded from the
/// operating system by [`new`](BiMap::new) or explicitly by [`with_seed`](BiMap::with_seed).
///
/// Every pair lives in one arena slot holding a node for each view, so the two trees share the
/// pairs rather than copying them, and a position in one view is also a position in the other.
pub struct BiMap<L, R, CL = crate::Natural, CR = crate::Natural> {
    raw: RawBiMap<L, R, CL, CR>,
}

/// An iterator over the pairs of a `BiMap`, in ascending order of the left values.
///
/// This `struct` is created by the [`iter_left`] method on [`BiMap`].
///
/// [`iter_left`]: BiMap::iter_left
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct LeftIter<'a, L, R> {
    walk: Walk<'a, L, R, LeftFacet>,
}

/// An iterator over the pairs of a `BiMap`, in ascending order of the right values.
///
/// This `struct` is created by the [`iter_right`] method on [`BiMap`].
///
/// [`iter_right`]: BiMap::iter_right
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RightIter<'a, L, R> {
    walk: Walk<'a, L, R, RightFacet>,
}

/// An owning iterator over the pairs of a `BiMap`, in ascending order of the left values.
///
/// This `struct` is created by the [`into_iter`] method on [`BiMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<L, R> {
    inner: alloc::vec::IntoIter<(L, R)>,
}

/// Two-ended in-order walk over one view.
struct Walk<'a, L, R, F> {
    records: &'a Arena<PairRecord<L, R>>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
    _facet: PhantomData<fn() -> F>,
}

impl<'a, L, R, F: Facet<PairRecord<L, R>>> Walk<'a, L, R, F> {
    fn new(records: &'a Arena<PairRecord<L, R>>, root: Option<Handle>, len: usize) -> Self {
        Walk {
            records,
            front: first::<_, F>(records, root),
            back: last::<_, F>(records, root),
            remaining: len,
            _facet: PhantomData,
        }
    }

    fn next_pair(&mut self) -> Option<(&'a L, &'a R)> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.front = successor::<_, F>(self.records, handle);
        self.remaining -= 1;
        Some(self.records.get(handle).pair())
    }

    fn next_back_pair(&mut self) -> Option<(&'a L, &'a R)> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.back = predecessor::<_, F>(self.records, handle);
        self.remaining -= 1;
        Some(self.records.get(handle).pair())
    }
}

impl<L, R, F> Clone for Walk<'_, L, R, F> {
    fn clone(&self) -> Self {
        Walk {
            records: self.records,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            _facet: PhantomData,
        }
    }
}

#[cfg(feature = "std")]
impl<L, R> BiMap<L, R> {
    /// Makes a new, empty `BiMap` ordered by [`Ord`] on both sides.
    ///
    /// Node priorities are drawn from a generator seeded by the operating system. Does not allocate
    /// anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'a');
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_orders(Natural, Natural)
    }
}

impl<L, R> BiMap<L, R> {
    /// Makes a new, empty `BiMap` ordered by [`Ord`] on both sides, with priorities drawn from a
    /// generator seeded by `seed`.
    ///
    /// Two maps built with the same seed and the same sequence of operations have identical tree
    /// shapes, which makes runs reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::with_seed(42);
    /// map.insert("x", 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_orders_and_seed(crate::Natural, crate::Natural, seed)
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR> {
    /// Makes a new, empty `BiMap` whose left values are ordered by `left_order` and right values by
    /// `right_order`.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn with_orders(left_order: CL, right_order: CR) -> Self {
        BiMap {
            raw: RawBiMap::new(left_order, right_order, PrioritySource::from_os()),
        }
    }

    /// Makes a new, empty `BiMap` with the given orders and a seeded priority generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::{BiMap, Natural, Reverse};
    ///
    /// let mut map = BiMap::with_orders_and_seed(Reverse, Natural, 7);
    /// map.insert(1, 'b');
    /// map.insert(2, 'a');
    /// assert_eq!(map.left_key(map.begin_left()), Some(&2));
    /// assert_eq!(map.right_key(map.begin_right()), Some(&'a'));
    /// ```
    #[must_use]
    pub fn with_orders_and_seed(left_order: CL, right_order: CR, seed: u64) -> Self {
        BiMap {
            raw: RawBiMap::new(left_order, right_order, PrioritySource::seeded(seed)),
        }
    }

    /// Returns the number of pairs in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no pairs.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every pair. Invalidates every cursor except the end positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::with_seed(1);
    /// map.insert(1, 2);
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        trace!(len = self.raw.len(), "clearing bimap");
        self.raw.clear();
    }

    /// Returns the position of the smallest left value, or [`end_left`](BiMap::end_left) if the
    /// map is empty.
    #[must_use]
    pub fn begin_left(&self) -> LeftCursor {
        LeftCursor(self.raw.left_tree().first(self.raw.records()))
    }

    /// Returns the position one past the largest left value.
    #[must_use]
    pub const fn end_left(&self) -> LeftCursor {
        LeftCursor::END
    }

    /// Returns the position of the smallest right value, or [`end_right`](BiMap::end_right) if the
    /// map is empty.
    #[must_use]
    pub fn begin_right(&self) -> RightCursor {
        RightCursor(self.raw.right_tree().first(self.raw.records()))
    }

    /// Returns the position one past the largest right value.
    #[must_use]
    pub const fn end_right(&self) -> RightCursor {
        RightCursor::END
    }

    /// Returns the left value at `cursor`, or `None` at the end position.
    #[must_use]
    pub fn left_key(&self, cursor: LeftCursor) -> Option<&L> {
        cursor.0.map(|handle| self.raw.record(handle).left_key())
    }

    /// Returns the right value at `cursor`, or `None` at the end position.
    #[must_use]
    pub fn right_key(&self, cursor: RightCursor) -> Option<&R> {
        cursor.0.map(|handle| self.raw.record(handle).right_key())
    }

    /// Returns the position after `cursor` in the left ordering.
    ///
    /// Moving past the largest left value reaches the end position; moving past the end position
    /// wraps around to the smallest left value.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::with_seed(5);
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    ///
    /// let cursor = map.next_left(map.begin_left());
    /// assert_eq!(map.left_key(cursor), Some(&2));
    /// assert!(map.next_left(cursor).is_end());
    /// assert_eq!(map.next_left(map.end_left()), map.begin_left());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) expected, amortized O(1) over a full walk.
    #[must_use]
    pub fn next_left(&self, cursor: LeftCursor) -> LeftCursor {
        LeftCursor(self.raw.left_tree().next(self.raw.records(), cursor.0))
    }

    /// Returns the position before `cursor` in the left ordering.
    ///
    /// Moving back from the end position reaches the largest left value; moving back from the
    /// smallest left value reaches the end position.
    #[must_use]
    pub fn prev_left(&self, cursor: LeftCursor) -> LeftCursor {
        LeftCursor(self.raw.left_tree().prev(self.raw.records(), cursor.0))
    }

    /// Returns the position after `cursor` in the right ordering. Wraps like
    /// [`next_left`](BiMap::next_left).
    #[must_use]
    pub fn next_right(&self, cursor: RightCursor) -> RightCursor {
        RightCursor(self.raw.right_tree().next(self.raw.records(), cursor.0))
    }

    /// Returns the position before `cursor` in the right ordering. Wraps like
    /// [`prev_left`](BiMap::prev_left).
    #[must_use]
    pub fn prev_right(&self, cursor: RightCursor) -> RightCursor {
        RightCursor(self.raw.right_tree().prev(self.raw.records(), cursor.0))
    }

    /// Gets an iterator over the pairs, sorted by left value.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::with_seed(0);
    /// map.insert(3, 'c');
    /// map.insert(1, 'z');
    /// map.insert(2, 'a');
    ///
    /// let pairs: Vec<_> = map.iter_left().collect();
    /// assert_eq!(pairs, [(&1, &'z'), (&2, &'a'), (&3, &'c')]);
    /// ```
    pub fn iter_left(&self) -> LeftIter<'_, L, R> {
        LeftIter {
            walk: Walk::new(self.raw.records(), self.raw.left_tree().root(), self.raw.len()),
        }
    }

    /// Gets an iterator over the pairs, sorted by right value.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::with_seed(0);
    /// map.insert(3, 'c');
    /// map.insert(1, 'z');
    /// map.insert(2, 'a');
    ///
    /// let lefts: Vec<i32> = map.iter_right().map(|(l, _)| *l).collect();
    /// assert_eq!(lefts, [2, 3, 1]);
    /// ```
    pub fn iter_right(&self) -> RightIter<'_, L, R> {
        RightIter {
            walk: Walk::new(self.raw.records(), self.raw.right_tree().root(), self.raw.len()),
        }
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR>
where
    CL: TotalOrder<L>,
    CR: TotalOrder<R>,
{
    /// Inserts the pair `(left, right)` and returns its position in the left ordering.
    ///
    /// If `left` is already paired, or `right` is already paired, nothing changes and the end
    /// position is returned. A duplicate is an expected outcome, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::with_seed(0);
    /// let cursor = map.insert(1, "a");
    /// assert_eq!(map.left_key(cursor), Some(&1));
    ///
    /// assert!(map.insert(1, "b").is_end());
    /// assert!(map.insert(2, "a").is_end());
    /// assert_eq!(map.at_left(&1), Ok(&"a"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) expected.
    pub fn insert(&mut self, left: L, right: R) -> LeftCursor {
        let inserted = self.raw.insert(left, right);
        if inserted.is_none() {
            trace!(len = self.raw.len(), "rejected pair with an existing key");
        }
        LeftCursor(inserted)
    }

    /// Removes the pair at `cursor` from both orderings and returns the position that followed it
    /// in the left ordering.
    ///
    /// Invalidates every cursor naming the removed pair, on either side. Erasing at the end
    /// position does nothing and returns the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::with_seed(0);
    /// map.insert(1, 'a');
    /// map.insert(2, 'b');
    ///
    /// let after = map.erase_left(map.begin_left());
    /// assert_eq!(map.left_key(after), Some(&2));
    /// assert!(map.find_right(&'a').is_end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) expected.
    pub fn erase_left(&mut self, cursor: LeftCursor) -> LeftCursor {
        match cursor.0 {
            Some(handle) => {
                let (after, _, _) = self.raw.remove(handle);
                LeftCursor(after)
            }
            None => LeftCursor::END,
        }
    }

    /// Removes the pair at `cursor` from both orderings and returns the position that followed it
    /// in the right ordering. The mirror of [`erase_left`](BiMap::erase_left).
    pub fn erase_right(&mut self, cursor: RightCursor) -> RightCursor {
        match cursor.0 {
            Some(handle) => {
                let (_, after, _) = self.raw.remove(handle);
                RightCursor(after)
            }
            None => RightCursor::END,
        }
    }

    /// Removes the pair whose left value is `key`. Returns whether a pair was removed.
    pub fn erase_left_key(&mut self, key: &L) -> bool {
        self.remove_left(key).is_some()
    }

    /// Removes the pair whose right value is `key`. Returns whether a pair was removed.
    pub fn erase_right_key(&mut self, key: &R) -> bool {
        self.remove_right(key).is_some()
    }

    /// Removes the pair whose left value is `key` and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::with_seed(0);
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_left(&1), Some((1, "a")));
    /// assert_eq!(map.remove_left(&1), None);
    /// ```
    pub fn remove_left(&mut self, key: &L) -> Option<(L, R)> {
        let handle = self.raw.find_left(key)?;
        let (_, _, pair) = self.raw.remove(handle);
        Some(pair)
    }

    /// Removes the pair whose right value is `key` and returns it.
    pub fn remove_right(&mut self, key: &R) -> Option<(L, R)> {
        let handle = self.raw.find_right(key)?;
        let (_, _, pair) = self.raw.remove(handle);
        Some(pair)
    }

    /// Removes every pair in `[first, last)` of the left ordering, front to back, and returns
    /// `last`.
    ///
    /// `last` must be reachable from `first`; if the walk reaches the end position first, it stops
    /// there.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map: BiMap<i32, i32> = (0..10).map(|i| (i, -i)).collect();
    /// let first = map.find_left(&2);
    /// let last = map.find_left(&7);
    /// map.erase_left_range(first, last);
    ///
    /// let left: Vec<i32> = map.iter_left().map(|(l, _)| *l).collect();
    /// assert_eq!(left, [0, 1, 7, 8, 9]);
    /// ```
    pub fn erase_left_range(&mut self, first: LeftCursor, last: LeftCursor) -> LeftCursor {
        let mut cursor = first;
        while cursor != last && !cursor.is_end() {
            cursor = self.erase_left(cursor);
        }
        last
    }

    /// Removes every pair in `[first, last)` of the right ordering, front to back, and returns
    /// `last`. The mirror of [`erase_left_range`](BiMap::erase_left_range).
    pub fn erase_right_range(&mut self, first: RightCursor, last: RightCursor) -> RightCursor {
        let mut cursor = first;
        while cursor != last && !cursor.is_end() {
            cursor = self.erase_right(cursor);
        }
        last
    }

    /// Returns the position of `key` in the left ordering, or the end position if it is absent.
    ///
    /// # Complexity
    ///
    /// O(log n) expected.
    #[must_use]
    pub fn find_left(&self, key: &L) -> LeftCursor {
        LeftCursor(self.raw.find_left(key))
    }

    /// Returns the position of `key` in the right ordering, or the end position if it is absent.
    #[must_use]
    pub fn find_right(&self, key: &R) -> RightCursor {
        RightCursor(self.raw.find_right(key))
    }

    /// Returns the right value paired with `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LeftNotFound`] if no pair has the left value `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::{BiMap, Error};
    ///
    /// let mut map = BiMap::with_seed(0);
    /// map.insert("one", 1);
    /// assert_eq!(map.at_left(&"one"), Ok(&1));
    /// assert_eq!(map.at_left(&"two"), Err(Error::LeftNotFound));
    /// ```
    pub fn at_left(&self, key: &L) -> Result<&R, Error> {
        self.get_by_left(key).ok_or(Error::LeftNotFound)
    }

    /// Returns the left value paired with `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RightNotFound`] if no pair has the right value `key`.
    pub fn at_right(&self, key: &R) -> Result<&L, Error> {
        self.get_by_right(key).ok_or(Error::RightNotFound)
    }

    /// Returns the right value paired with `key`, if any.
    #[must_use]
    pub fn get_by_left(&self, key: &L) -> Option<&R> {
        self.raw.find_left(key).map(|handle| self.raw.record(handle).right_key())
    }

    /// Returns the left value paired with `key`, if any.
    #[must_use]
    pub fn get_by_right(&self, key: &R) -> Option<&L> {
        self.raw.find_right(key).map(|handle| self.raw.record(handle).left_key())
    }

    /// Returns `true` if some pair has the left value `key`.
    #[must_use]
    pub fn contains_left(&self, key: &L) -> bool {
        self.raw.find_left(key).is_some()
    }

    /// Returns `true` if some pair has the right value `key`.
    #[must_use]
    pub fn contains_right(&self, key: &R) -> bool {
        self.raw.find_right(key).is_some()
    }

    /// Returns the position of the first left value not less than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::with_seed(0);
    /// map.insert(10, 'a');
    /// map.insert(20, 'b');
    ///
    /// assert_eq!(map.left_key(map.lower_bound_left(&10)), Some(&10));
    /// assert_eq!(map.left_key(map.lower_bound_left(&11)), Some(&20));
    /// assert!(map.lower_bound_left(&21).is_end());
    /// ```
    #[must_use]
    pub fn lower_bound_left(&self, key: &L) -> LeftCursor {
        LeftCursor(self.raw.left_tree().lower_bound(self.raw.records(), key))
    }

    /// Returns the position of the first left value greater than `key`.
    #[must_use]
    pub fn upper_bound_left(&self, key: &L) -> LeftCursor {
        LeftCursor(self.raw.left_tree().upper_bound(self.raw.records(), key))
    }

    /// Returns the position of the first right value not less than `key`.
    #[must_use]
    pub fn lower_bound_right(&self, key: &R) -> RightCursor {
        RightCursor(self.raw.right_tree().lower_bound(self.raw.records(), key))
    }

    /// Returns the position of the first right value greater than `key`.
    #[must_use]
    pub fn upper_bound_right(&self, key: &R) -> RightCursor {
        RightCursor(self.raw.right_tree().upper_bound(self.raw.records(), key))
    }
}

impl<L, R, CL, CR> Clone for BiMap<L, R, CL, CR>
where
    L: Clone,
    R: Clone,
    CL: TotalOrder<L> + Clone,
    CR: TotalOrder<R> + Clone,
{
    /// Copies every pair into new records; the copy shares nothing with `self`.
    fn clone(&self) -> Self {
        BiMap {
            raw: self.raw.deep_clone(),
        }
    }

    /// Takes the orders of `source` along with its pairs, reusing the records already allocated by
    /// `self`.
    fn clone_from(&mut self, source: &Self) {
        self.raw.clone_from_store(&source.raw);
    }
}

/// Two maps are equal when they hold the same pairs, however they were built.
impl<L, R, CL, CR> PartialEq for BiMap<L, R, CL, CR>
where
    R: PartialEq,
    CL: TotalOrder<L>,
    CR: TotalOrder<R>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter_left().all(|(l, r)| other.get_by_left(l) == Some(r))
    }
}

impl<L, R, CL, CR> Eq for BiMap<L, R, CL, CR>
where
    R: Eq,
    CL: TotalOrder<L>,
    CR: TotalOrder<R>,
{
}

impl<L: fmt::Debug, R: fmt::Debug, CL, CR> fmt::Debug for BiMap<L, R, CL, CR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_left()).finish()
    }
}

#[cfg(feature = "std")]
impl<L, R, CL: Default, CR: Default> Default for BiMap<L, R, CL, CR> {
    /// Creates an empty map with default orders and an OS-seeded priority generator.
    fn default() -> Self {
        BiMap::with_orders(CL::default(), CR::default())
    }
}

#[cfg(feature = "std")]
impl<L, R, CL, CR> FromIterator<(L, R)> for BiMap<L, R, CL, CR>
where
    CL: TotalOrder<L> + Default,
    CR: TotalOrder<R> + Default,
{
    /// Pairs that repeat an earlier left or right value are skipped.
    fn from_iter<T: IntoIterator<Item = (L, R)>>(iter: T) -> Self {
        let mut map = BiMap::default();
        map.extend(iter);
        map
    }
}

impl<L, R, CL, CR> Extend<(L, R)> for BiMap<L, R, CL, CR>
where
    CL: TotalOrder<L>,
    CR: TotalOrder<R>,
{
    fn extend<T: IntoIterator<Item = (L, R)>>(&mut self, iter: T) {
        for (l, r) in iter {
            self.insert(l, r);
        }
    }
}

impl<'a, L: Copy, R: Copy, CL, CR> Extend<(&'a L, &'a R)> for BiMap<L, R, CL, CR>
where
    CL: TotalOrder<L>,
    CR: TotalOrder<R>,
{
    fn extend<T: IntoIterator<Item = (&'a L, &'a R)>>(&mut self, iter: T) {
        for (&l, &r) in iter {
            self.insert(l, r);
        }
    }
}

#[cfg(feature = "std")]
impl<L, R, const N: usize> From<[(L, R); N]> for BiMap<L, R>
where
    L: Ord,
    R: Ord,
{
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let map = BiMap::from([(1, 'a'), (2, 'b')]);
    /// assert_eq!(map.at_right(&'b'), Ok(&2));
    /// ```
    fn from(pairs: [(L, R); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a, L, R, CL, CR> IntoIterator for &'a BiMap<L, R, CL, CR> {
    type Item = (&'a L, &'a R);
    type IntoIter = LeftIter<'a, L, R>;

    fn into_iter(self) -> LeftIter<'a, L, R> {
        self.iter_left()
    }
}

impl<L, R, CL, CR> IntoIterator for BiMap<L, R, CL, CR> {
    type Item = (L, R);
    type IntoIter = IntoIter<L, R>;

    /// Gets an owning iterator over the pairs, sorted by left value.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let map = BiMap::from([(2, 'x'), (1, 'y')]);
    /// let pairs: Vec<(i32, char)> = map.into_iter().collect();
    /// assert_eq!(pairs, [(1, 'y'), (2, 'x')]);
    /// ```
    fn into_iter(mut self) -> IntoIter<L, R> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, L, R> Iterator for LeftIter<'a, L, R> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<(&'a L, &'a R)> {
        self.walk.next_pair()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.walk.remaining, Some(self.walk.remaining))
    }
}

impl<L, R> DoubleEndedIterator for LeftIter<'_, L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.walk.next_back_pair()
    }
}

impl<L, R> ExactSizeIterator for LeftIter<'_, L, R> {
    fn len(&self) -> usize {
        self.walk.remaining
    }
}

impl<L, R> FusedIterator for LeftIter<'_, L, R> {}

impl<L, R> Clone for LeftIter<'_, L, R> {
    fn clone(&self) -> Self {
        LeftIter {
            walk: self.walk.clone(),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for LeftIter<'_, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, L, R> Iterator for RightIter<'a, L, R> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<(&'a L, &'a R)> {
        self.walk.next_pair()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.walk.remaining, Some(self.walk.remaining))
    }
}

impl<L, R> DoubleEndedIterator for RightIter<'_, L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.walk.next_back_pair()
    }
}

impl<L, R> ExactSizeIterator for RightIter<'_, L, R> {
    fn len(&self) -> usize {
        self.walk.remaining
    }
}

impl<L, R> FusedIterator for RightIter<'_, L, R> {}

impl<L, R> Clone for RightIter<'_, L, R> {
    fn clone(&self) -> Self {
        RightIter {
            walk: self.walk.clone(),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for RightIter<'_, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<L, R> Iterator for IntoIter<L, R> {
    type Item = (L, R);

    fn next(&mut self) -> Option<(L, R)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<L, R> DoubleEndedIterator for IntoIter<L, R> {
    fn next_back(&mut self) -> Option<(L, R)> {
        self.inner.next_back()
    }
}

impl<L, R> ExactSizeIterator for IntoIter<L, R> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<L, R> FusedIterator for IntoIter<L, R> {}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for IntoIter<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}
