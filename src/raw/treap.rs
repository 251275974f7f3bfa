//! Treap over arena-resident nodes.
//!
//! The tree keeps BST order by key under a [`TotalOrder`] and max-heap order by the random
//! [`Priority`](super::node::Priority) of each node, which gives expected logarithmic height with
//! no rebalancing pass. Nodes are never allocated or freed here: the caller owns the arena, links a
//! record in with [`RawTreap::insert`] and detaches it with [`RawTreap::erase`].
//!
//! A position is an `Option<Handle>`; `None` is the anchor, the one-past-the-end position whose
//! left child is the root. Walking is circular through the anchor.

use core::cmp::Ordering;
use core::marker::PhantomData;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Links;
use super::record::Facet;
use crate::order::TotalOrder;

#[derive(Clone, Copy, Debug)]
enum Side {
    Left,
    Right,
}

#[inline]
fn links<T, F: Facet<T>>(records: &Arena<T>, handle: Handle) -> Links {
    F::node(records.get(handle)).links()
}

#[inline]
fn links_mut<'a, T, F: Facet<T>>(records: &'a mut Arena<T>, handle: Handle) -> &'a mut Links
where
    F::Key: 'a,
{
    F::node_mut(records.get_mut(handle)).links_mut()
}

fn leftmost<T, F: Facet<T>>(records: &Arena<T>, mut handle: Handle) -> Handle {
    while let Some(left) = links::<T, F>(records, handle).left {
        handle = left;
    }
    handle
}

fn rightmost<T, F: Facet<T>>(records: &Arena<T>, mut handle: Handle) -> Handle {
    while let Some(right) = links::<T, F>(records, handle).right {
        handle = right;
    }
    handle
}

/// Smallest node of the tree rooted at `root`, or the anchor if the tree is empty.
pub(crate) fn first<T, F: Facet<T>>(records: &Arena<T>, root: Option<Handle>) -> Option<Handle> {
    root.map(|root| leftmost::<T, F>(records, root))
}

/// Largest node of the tree rooted at `root`, or the anchor if the tree is empty.
pub(crate) fn last<T, F: Facet<T>>(records: &Arena<T>, root: Option<Handle>) -> Option<Handle> {
    root.map(|root| rightmost::<T, F>(records, root))
}

/// In-order successor of a linked node; `None` past the largest node.
pub(crate) fn successor<T, F: Facet<T>>(records: &Arena<T>, handle: Handle) -> Option<Handle> {
    let node = links::<T, F>(records, handle);
    if let Some(right) = node.right {
        return Some(leftmost::<T, F>(records, right));
    }
    // Climb while we are a right child; the first parent reached from its left is next.
    let mut child = handle;
    let mut parent = node.parent;
    while let Some(p) = parent {
        let up = links::<T, F>(records, p);
        if up.left == Some(child) {
            return Some(p);
        }
        child = p;
        parent = up.parent;
    }
    None
}

/// In-order predecessor of a linked node; `None` before the smallest node.
pub(crate) fn predecessor<T, F: Facet<T>>(records: &Arena<T>, handle: Handle) -> Option<Handle> {
    let node = links::<T, F>(records, handle);
    if let Some(left) = node.left {
        return Some(rightmost::<T, F>(records, left));
    }
    let mut child = handle;
    let mut parent = node.parent;
    while let Some(p) = parent {
        let up = links::<T, F>(records, p);
        if up.right == Some(child) {
            return Some(p);
        }
        child = p;
        parent = up.parent;
    }
    None
}

/// Position after `pos`. Past the largest node is the anchor; past the anchor is the smallest node.
pub(crate) fn next<T, F: Facet<T>>(records: &Arena<T>, root: Option<Handle>, pos: Option<Handle>) -> Option<Handle> {
    match pos {
        Some(handle) => successor::<T, F>(records, handle),
        None => first::<T, F>(records, root),
    }
}

/// Position before `pos`, the mirror of [`next`].
pub(crate) fn prev<T, F: Facet<T>>(records: &Arena<T>, root: Option<Handle>, pos: Option<Handle>) -> Option<Handle> {
    match pos {
        Some(handle) => predecessor::<T, F>(records, handle),
        None => last::<T, F>(records, root),
    }
}

/// One ordering over the records of an arena, selected by the facet `F`.
pub(crate) struct RawTreap<T, F, C> {
    root: Option<Handle>,
    order: C,
    _facet: PhantomData<fn() -> (T, F)>,
}

impl<T, F, C: Clone> Clone for RawTreap<T, F, C> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            order: self.order.clone(),
            _facet: PhantomData,
        }
    }
}

impl<T, F, C> RawTreap<T, F, C> {
    pub(crate) const fn new(order: C) -> Self {
        Self {
            root: None,
            order,
            _facet: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn order(&self) -> &C {
        &self.order
    }

    /// Forgets every node. Only sound together with clearing the arena the nodes live in.
    pub(crate) fn clear(&mut self) {
        self.root = None;
    }
}

impl<T, F: Facet<T>, C> RawTreap<T, F, C> {
    pub(crate) fn first(&self, records: &Arena<T>) -> Option<Handle> {
        first::<T, F>(records, self.root)
    }

    pub(crate) fn last(&self, records: &Arena<T>) -> Option<Handle> {
        last::<T, F>(records, self.root)
    }

    pub(crate) fn next(&self, records: &Arena<T>, pos: Option<Handle>) -> Option<Handle> {
        next::<T, F>(records, self.root, pos)
    }

    pub(crate) fn prev(&self, records: &Arena<T>, pos: Option<Handle>) -> Option<Handle> {
        prev::<T, F>(records, self.root, pos)
    }
}

impl<T, F, C> RawTreap<T, F, C>
where
    F: Facet<T>,
    C: TotalOrder<F::Key>,
{
    #[inline]
    fn key<'a>(records: &'a Arena<T>, handle: Handle) -> &'a F::Key {
        F::node(records.get(handle)).key()
    }

    #[inline]
    fn compare(&self, records: &Arena<T>, a: Handle, b: Handle) -> Ordering {
        self.order.cmp(Self::key(records, a), Self::key(records, b))
    }

    pub(crate) fn find(&self, records: &Arena<T>, key: &F::Key) -> Option<Handle> {
        let mut cursor = self.root;
        while let Some(current) = cursor {
            let node = F::node(records.get(current));
            cursor = match self.order.cmp(key, node.key()) {
                Ordering::Less => node.links().left,
                Ordering::Greater => node.links().right,
                Ordering::Equal => return Some(current),
            };
        }
        None
    }

    /// First node whose key is not less than `key`.
    pub(crate) fn lower_bound(&self, records: &Arena<T>, key: &F::Key) -> Option<Handle> {
        let mut best = None;
        let mut cursor = self.root;
        while let Some(current) = cursor {
            let node = F::node(records.get(current));
            if self.order.cmp(node.key(), key) == Ordering::Less {
                cursor = node.links().right;
            } else {
                best = Some(current);
                cursor = node.links().left;
            }
        }
        best
    }

    /// First node whose key is greater than `key`.
    pub(crate) fn upper_bound(&self, records: &Arena<T>, key: &F::Key) -> Option<Handle> {
        let mut best = None;
        let mut cursor = self.root;
        while let Some(current) = cursor {
            let node = F::node(records.get(current));
            if self.order.cmp(key, node.key()) == Ordering::Less {
                best = Some(current);
                cursor = node.links().left;
            } else {
                cursor = node.links().right;
            }
        }
        best
    }

    /// Links the detached node `node` into the tree and returns it.
    ///
    /// The caller guarantees that no node with an equal key is linked.
    pub(crate) fn insert(&mut self, records: &mut Arena<T>, node: Handle) -> Handle {
        debug_assert_eq!(links::<T, F>(records, node), Links::default(), "inserting a linked node");
        let priority = F::node(records.get(node)).priority();

        // Descend until the new node outranks the subtree root; that subtree is split around it.
        let mut parent = None;
        let mut side = Side::Left;
        let mut cursor = self.root;
        while let Some(current) = cursor {
            if priority > F::node(records.get(current)).priority() {
                break;
            }
            let down = links::<T, F>(records, current);
            parent = Some(current);
            if self.compare(records, node, current) == Ordering::Less {
                side = Side::Left;
                cursor = down.left;
            } else {
                side = Side::Right;
                cursor = down.right;
            }
        }

        let (low, high) = self.split(records, cursor, node);
        *links_mut::<T, F>(records, node) = Links {
            left: low,
            right: high,
            parent,
        };
        for child in [low, high].into_iter().flatten() {
            links_mut::<T, F>(records, child).parent = Some(node);
        }
        self.attach(records, parent, side, Some(node));
        node
    }

    /// Unlinks `node` and returns the position that followed it.
    ///
    /// The node's slot is left in the arena with cleared links.
    pub(crate) fn erase(&mut self, records: &mut Arena<T>, node: Handle) -> Option<Handle> {
        let after = successor::<T, F>(records, node);
        let Links { left, right, parent } = links::<T, F>(records, node);
        let merged = Self::merge(records, left, right);
        let side = match parent {
            Some(p) if links::<T, F>(records, p).right == Some(node) => Side::Right,
            _ => Side::Left,
        };
        self.attach(records, parent, side, merged);
        *links_mut::<T, F>(records, node) = Links::default();
        after
    }

    /// Partitions `subtree` into keys ordered before `pivot` and the rest.
    ///
    /// Both returned roots have no parent set.
    fn split(&self, records: &mut Arena<T>, subtree: Option<Handle>, pivot: Handle) -> (Option<Handle>, Option<Handle>) {
        let (mut low, mut high) = (None, None);
        // The low spine grows through right children, the high spine through left children.
        let mut low_tail: Option<Handle> = None;
        let mut high_tail: Option<Handle> = None;
        let mut cursor = subtree;

        while let Some(current) = cursor {
            let down = links::<T, F>(records, current);
            if self.compare(records, pivot, current) == Ordering::Less {
                match high_tail {
                    None => high = Some(current),
                    Some(tail) => links_mut::<T, F>(records, tail).left = Some(current),
                }
                links_mut::<T, F>(records, current).parent = high_tail;
                high_tail = Some(current);
                cursor = down.left;
            } else {
                match low_tail {
                    None => low = Some(current),
                    Some(tail) => links_mut::<T, F>(records, tail).right = Some(current),
                }
                links_mut::<T, F>(records, current).parent = low_tail;
                low_tail = Some(current);
                cursor = down.right;
            }
        }

        if let Some(tail) = low_tail {
            links_mut::<T, F>(records, tail).right = None;
        }
        if let Some(tail) = high_tail {
            links_mut::<T, F>(records, tail).left = None;
        }
        (low, high)
    }

    /// Joins two trees where every key of `low` orders before every key of `high`.
    ///
    /// The returned root has no parent set.
    fn merge(records: &mut Arena<T>, mut low: Option<Handle>, mut high: Option<Handle>) -> Option<Handle> {
        let mut root = None;
        let mut hook: Option<(Handle, Side)> = None;
        loop {
            let (top, side) = match (low, high) {
                (Some(a), Some(b)) => {
                    if F::node(records.get(a)).priority() > F::node(records.get(b)).priority() {
                        low = links::<T, F>(records, a).right;
                        (a, Side::Right)
                    } else {
                        high = links::<T, F>(records, b).left;
                        (b, Side::Left)
                    }
                }
                (rest, None) | (None, rest) => {
                    Self::hang(records, &mut root, hook, rest);
                    return root;
                }
            };
            Self::hang(records, &mut root, hook, Some(top));
            hook = Some((top, side));
        }
    }

    fn hang(records: &mut Arena<T>, root: &mut Option<Handle>, hook: Option<(Handle, Side)>, child: Option<Handle>) {
        match hook {
            None => *root = child,
            Some((parent, Side::Left)) => links_mut::<T, F>(records, parent).left = child,
            Some((parent, Side::Right)) => links_mut::<T, F>(records, parent).right = child,
        }
        if let Some(child) = child {
            links_mut::<T, F>(records, child).parent = hook.map(|(parent, _)| parent);
        }
    }

    fn attach(&mut self, records: &mut Arena<T>, parent: Option<Handle>, side: Side, child: Option<Handle>) {
        match (parent, side) {
            (None, _) => self.root = child,
            (Some(p), Side::Left) => links_mut::<T, F>(records, p).left = child,
            (Some(p), Side::Right) => links_mut::<T, F>(records, p).right = child,
        }
        if let Some(child) = child {
            links_mut::<T, F>(records, child).parent = parent;
        }
    }
}
