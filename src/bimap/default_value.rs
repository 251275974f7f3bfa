use tracing::debug;

use super::BiMap;
use crate::order::TotalOrder;

impl<L, R, CL, CR> BiMap<L, R, CL, CR>
where
    R: Default,
    CL: TotalOrder<L>,
    CR: TotalOrder<R>,
{
    /// Returns the right value paired with `key`, pairing it with `R::default()` first if `key` is
    /// absent.
    ///
    /// The default right value is always free to claim: if another pair already holds it, that pair
    /// is removed before the new one is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::with_seed(0);
    /// map.insert(1, String::from("a"));
    /// map.insert(2, String::new());
    ///
    /// assert_eq!(map.at_left_or_default(1), "a");
    /// assert_eq!(map.at_left_or_default(3), "");
    /// assert!(map.find_left(&2).is_end());
    /// assert_eq!(map.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) expected.
    pub fn at_left_or_default(&mut self, key: L) -> &R {
        let handle = match self.raw.find_left(&key) {
            Some(handle) => handle,
            None => {
                let value = R::default();
                if let Some(owner) = self.raw.find_right(&value) {
                    self.raw.remove(owner);
                    debug!(len = self.raw.len(), "evicted pair holding the default right value");
                }
                self.raw.insert_unique(key, value)
            }
        };
        self.raw.record(handle).right_key()
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR>
where
    L: Default,
    CL: TotalOrder<L>,
    CR: TotalOrder<R>,
{
    /// Returns the left value paired with `key`, pairing it with `L::default()` first if `key` is
    /// absent.
    ///
    /// The mirror of [`at_left_or_default`](BiMap::at_left_or_default).
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::with_seed(0);
    /// map.insert(0, 'x');
    /// map.insert(5, 'y');
    ///
    /// assert_eq!(*map.at_right_or_default('z'), 0);
    /// assert!(map.find_right(&'x').is_end());
    /// assert_eq!(map.at_right(&'z'), Ok(&0));
    /// ```
    pub fn at_right_or_default(&mut self, key: R) -> &L {
        let handle = match self.raw.find_right(&key) {
            Some(handle) => handle,
            None => {
                let value = L::default();
                if let Some(owner) = self.raw.find_left(&value) {
                    self.raw.remove(owner);
                    debug!(len = self.raw.len(), "evicted pair holding the default left value");
                }
                self.raw.insert_unique(value, key)
            }
        };
        self.raw.record(handle).left_key()
    }
}
