mod arena;
mod handle;
mod node;
mod raw_bimap;
mod record;
mod treap;

pub(crate) use arena::Arena;
pub(crate) use handle::Handle;
pub(crate) use node::PrioritySource;
pub(crate) use raw_bimap::RawBiMap;
pub(crate) use record::{Facet, LeftFacet, PairRecord, RightFacet};
pub(crate) use treap::{first, last, predecessor, successor};
