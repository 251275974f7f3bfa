use crate::raw::Handle;

/// A position in the left ordering of a [`BiMap`](crate::BiMap).
///
/// A cursor is a plain value: it does not borrow the map, so it can be handed back to erasing
/// methods. It names either a pair or the end position (one past the largest left value).
///
/// A cursor is invalidated when the pair it names is removed. Using an invalidated cursor is a
/// logic error: the map stays memory-safe, but the call may panic or report an unrelated pair.
///
/// # Examples
///
/// ```
/// use treap_bimap::BiMap;
///
/// let mut map = BiMap::with_seed(0);
/// map.insert(1, "one");
/// let cursor = map.find_left(&1);
/// assert_eq!(map.left_key(cursor), Some(&1));
/// assert_eq!(map.right_key(cursor.flip()), Some(&"one"));
/// assert!(map.find_left(&2).is_end());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LeftCursor(pub(crate) Option<Handle>);

/// A position in the right ordering of a [`BiMap`](crate::BiMap).
///
/// The right-hand twin of [`LeftCursor`]; the same validity rules apply.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RightCursor(pub(crate) Option<Handle>);

impl LeftCursor {
    pub(crate) const END: Self = Self(None);

    /// Returns `true` if this is the end position.
    #[must_use]
    pub const fn is_end(self) -> bool {
        self.0.is_none()
    }

    /// Returns the position of the same pair in the right ordering.
    ///
    /// The end position flips to the end position.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn flip(self) -> RightCursor {
        RightCursor(self.0)
    }
}

impl RightCursor {
    pub(crate) const END: Self = Self(None);

    /// Returns `true` if this is the end position.
    #[must_use]
    pub const fn is_end(self) -> bool {
        self.0.is_none()
    }

    /// Returns the position of the same pair in the left ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::with_seed(0);
    /// map.insert('a', 10);
    /// let right = map.find_right(&10);
    /// assert_eq!(map.left_key(right.flip()), Some(&'a'));
    /// assert_eq!(map.end_right().flip(), map.end_left());
    /// ```
    #[must_use]
    pub const fn flip(self) -> LeftCursor {
        LeftCursor(self.0)
    }
}
