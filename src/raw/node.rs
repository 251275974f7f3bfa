use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use super::handle::Handle;

/// Structural links of a node within one ordering.
///
/// `parent == None` on a linked node means the node is the root, i.e. the left child of the tree's
/// anchor. Only `left` and `right` describe shape; `parent` is a back-reference for cursor walks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Links {
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    pub(crate) parent: Option<Handle>,
}

/// Heap-order weight of a node. Drawn once when the node is built and never changed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub(crate) struct Priority(u32);

impl Priority {
    #[cfg(test)]
    pub(crate) const fn fixed(value: u32) -> Self {
        Self(value)
    }
}

/// Random source for node priorities, owned by one container.
#[derive(Clone, Debug)]
pub(crate) struct PrioritySource(Xoshiro256StarStar);

impl PrioritySource {
    pub(crate) fn seeded(seed: u64) -> Self {
        Self(Xoshiro256StarStar::seed_from_u64(seed))
    }

    #[cfg(feature = "std")]
    pub(crate) fn from_os() -> Self {
        let mut seed = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut seed);
        Self(Xoshiro256StarStar::from_seed(seed))
    }

    pub(crate) fn draw(&mut self) -> Priority {
        Priority(self.0.next_u32())
    }
}

/// One key in one ordering: the key itself, its priority and its links.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    key: K,
    priority: Priority,
    links: Links,
}

impl<K> Node<K> {
    /// Creates a detached node.
    pub(crate) fn new(key: K, priority: Priority) -> Self {
        Self {
            key,
            priority,
            links: Links::default(),
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn priority(&self) -> Priority {
        self.priority
    }

    #[inline]
    pub(crate) fn links(&self) -> Links {
        self.links
    }

    #[inline]
    pub(crate) fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }
}
