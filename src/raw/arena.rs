use alloc::vec::Vec;
use core::mem;

use super::handle::Handle;

/// One arena slot: a live record, or a link in the chain of vacant slots.
#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next: Option<Handle> },
}

/// Growable record store. Removed slots form a chain threaded through the slots themselves and
/// are handed out again last-in, first-out.
///
/// A handle stays valid from `insert` until the matching `remove`. After that the slot may be
/// reused, so a handle kept past removal can name an unrelated record.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    /// Head of the vacancy chain.
    next_vacant: Option<Handle>,
    vacant: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_vacant: None,
            vacant: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Makes room for `additional` more records. Vacant slots count toward the room.
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional.saturating_sub(self.vacant));
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len() - self.vacant
    }

    pub(crate) fn insert(&mut self, record: T) -> Handle {
        if let Some(handle) = self.next_vacant {
            let Slot::Vacant { next } = mem::replace(&mut self.slots[handle.slot()], Slot::Occupied(record)) else {
                unreachable!("`Arena::insert()` - vacancy chain names a live slot!");
            };
            self.next_vacant = next;
            self.vacant -= 1;
            return handle;
        }

        let Some(handle) = Handle::for_slot(self.slots.len()) else {
            panic!("`Arena::insert()` - arena is full ({} records)", Handle::MAX + 1);
        };
        self.slots.push(Slot::Occupied(record));
        handle
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match &self.slots[handle.slot()] {
            Slot::Occupied(record) => record,
            Slot::Vacant { .. } => panic!("`Arena::get()` - `handle` names a vacant slot!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match &mut self.slots[handle.slot()] {
            Slot::Occupied(record) => record,
            Slot::Vacant { .. } => panic!("`Arena::get_mut()` - `handle` names a vacant slot!"),
        }
    }

    pub(crate) fn remove(&mut self, handle: Handle) -> T {
        let slot = &mut self.slots[handle.slot()];
        assert!(matches!(slot, Slot::Occupied(_)), "`Arena::remove()` - `handle` names a vacant slot!");
        let Slot::Occupied(record) = mem::replace(slot, Slot::Vacant { next: self.next_vacant }) else {
            unreachable!();
        };
        self.next_vacant = Some(handle);
        self.vacant += 1;
        record
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.next_vacant = None;
        self.vacant = 0;
    }
}
