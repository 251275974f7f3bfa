use core::num::NonZero;

#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// Slot index of a pair record, stored one-based so `Option<Handle>` (a cursor, or a missing link)
/// costs no more than the handle itself.
///
/// Both orderings link records by the same handle, so a handle names a record in the left tree and
/// in the right tree at once.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    /// Largest slot index a handle can name.
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    /// Returns the handle of `slot`, or `None` if the slot lies beyond [`Handle::MAX`].
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn for_slot(slot: usize) -> Option<Self> {
        if slot > Self::MAX {
            return None;
        }
        match NonZero::new((slot + 1) as RawHandle) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
