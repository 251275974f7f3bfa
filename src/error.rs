use thiserror::Error;

/// Failure of a lookup that must find its key.
///
/// Returned by [`BiMap::at_left`](crate::BiMap::at_left) and
/// [`BiMap::at_right`](crate::BiMap::at_right).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// No pair has the requested left value.
    #[error("left key not found")]
    LeftNotFound,
    /// No pair has the requested right value.
    #[error("right key not found")]
    RightNotFound,
}
