use super::BiMap;

#[cfg(feature = "std")]
use crate::order::Natural;
#[cfg(feature = "std")]
use crate::raw::{PrioritySource, RawBiMap};

#[cfg(feature = "std")]
impl<L, R> BiMap<L, R> {
    /// Creates an empty map with room for at least `capacity` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let map: BiMap<i32, i32> = BiMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BiMap {
            raw: RawBiMap::with_capacity(capacity, Natural, Natural, PrioritySource::from_os()),
        }
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR> {
    /// Returns the number of pairs the map can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Reserves room for at least `additional` more pairs.
    ///
    /// Slots freed by earlier removals count toward the reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map: BiMap<u8, u8> = BiMap::with_seed(3);
    /// map.reserve(10);
    /// assert!(map.capacity() >= 10);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.raw.reserve(additional);
    }
}
