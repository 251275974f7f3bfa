use super::node::{Node, PrioritySource};

/// One live pair. The record carries a node for each ordering, so one arena slot is linked into
/// both trees without copying either key.
#[derive(Clone, Debug)]
pub(crate) struct PairRecord<L, R> {
    left: Node<L>,
    right: Node<R>,
}

impl<L, R> PairRecord<L, R> {
    pub(crate) fn new(left: L, right: R, priorities: &mut PrioritySource) -> Self {
        Self {
            left: Node::new(left, priorities.draw()),
            right: Node::new(right, priorities.draw()),
        }
    }

    #[inline]
    pub(crate) fn left_key(&self) -> &L {
        self.left.key()
    }

    #[inline]
    pub(crate) fn right_key(&self) -> &R {
        self.right.key()
    }

    #[inline]
    pub(crate) fn pair(&self) -> (&L, &R) {
        (self.left.key(), self.right.key())
    }

    pub(crate) fn into_pair(self) -> (L, R) {
        (self.left.into_key(), self.right.into_key())
    }
}

/// Selects the node of a record that takes part in one ordering.
pub(crate) trait Facet<T> {
    type Key;

    fn node(record: &T) -> &Node<Self::Key>;

    fn node_mut(record: &mut T) -> &mut Node<Self::Key>;
}

/// The ordering by left value.
#[derive(Debug)]
pub(crate) enum LeftFacet {}

/// The ordering by right value.
#[derive(Debug)]
pub(crate) enum RightFacet {}

impl<L, R> Facet<PairRecord<L, R>> for LeftFacet {
    type Key = L;

    #[inline]
    fn node(record: &PairRecord<L, R>) -> &Node<L> {
        &record.left
    }

    #[inline]
    fn node_mut(record: &mut PairRecord<L, R>) -> &mut Node<L> {
        &mut record.left
    }
}

impl<L, R> Facet<PairRecord<L, R>> for RightFacet {
    type Key = R;

    #[inline]
    fn node(record: &PairRecord<L, R>) -> &Node<R> {
        &record.right
    }

    #[inline]
    fn node_mut(record: &mut PairRecord<L, R>) -> &mut Node<R> {
        &mut record.right
    }
}
