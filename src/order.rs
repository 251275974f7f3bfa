use core::cmp::Ordering;

/// A total order over `T`, supplied per side of a [`BiMap`](crate::BiMap).
///
/// The order must be consistent for the lifetime of the map: the same two keys must always compare
/// the same way. Breaking that is a logic error; the map stays memory-safe but lookups and
/// uniqueness checks may give wrong answers.
///
/// Closures of the shape `Fn(&T, &T) -> Ordering` are total orders.
///
/// # Examples
///
/// ```
/// use treap_bimap::BiMap;
///
/// // Case-insensitive names on the left, natural order on the right.
/// let by_lowercase = |a: &&str, b: &&str| a.to_lowercase().cmp(&b.to_lowercase());
/// let mut ids = BiMap::with_orders_and_seed(by_lowercase, treap_bimap::Natural, 42);
/// ids.insert("Alice", 1);
/// assert!(ids.insert("ALICE", 2).is_end());
/// assert_eq!(ids.at_left(&"alice"), Ok(&1));
/// ```
pub trait TotalOrder<T: ?Sized> {
    /// Compares two keys.
    fn cmp(&self, a: &T, b: &T) -> Ordering;
}

/// The order given by [`Ord`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

/// The reverse of the order given by [`Ord`].
///
/// # Examples
///
/// ```
/// use treap_bimap::{BiMap, Natural, Reverse};
///
/// let mut map = BiMap::with_orders_and_seed(Natural, Reverse, 1);
/// map.insert(1, 'a');
/// map.insert(2, 'b');
/// let by_right: Vec<char> = map.iter_right().map(|(_, r)| *r).collect();
/// assert_eq!(by_right, ['b', 'a']);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reverse;

impl<T: Ord + ?Sized> TotalOrder<T> for Natural {
    #[inline]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: Ord + ?Sized> TotalOrder<T> for Reverse {
    #[inline]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F> TotalOrder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
