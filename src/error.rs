use std::fmt;

/// The ways an operation on a [`Tree`][crate::Tree] can fail.
///
/// None of these are retried internally. A failed operation leaves the tree exactly as it was
/// before the call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// The operation needs a root but the tree holds no values.
    EmptyCollection,
    /// An equivalent value is already stored in the tree.
    DuplicateKey,
    /// The allocator could not provide memory for a node.
    ResourceExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::EmptyCollection => "cannot get the root value of an empty tree",
            Self::DuplicateKey => "cannot insert a value that is already in the tree",
            Self::ResourceExhausted => "could not allocate a tree node",
        })
    }
}

impl std::error::Error for Error {}
