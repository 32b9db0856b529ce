//! Error types for dynamic array operations.

use thiserror::Error;

/// Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while operating on a dynamic array.
///
/// Every operation that returns one of these leaves the array exactly as it
/// was before the call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The allocator could not provide a buffer of the requested capacity,
    /// or the byte size of that buffer does not fit in `usize`.
    #[error("failed to allocate a buffer for {capacity} elements")]
    AllocationFailure {
        /// Number of element slots that were requested.
        capacity: usize,
    },

    /// Index outside `[0, len)` for access and deletion, or outside
    /// `[0, len]` for insertion.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Logical length at the time of the call.
        len: usize,
    },

    /// Deletion attempted on an array with no elements.
    #[error("the array is empty")]
    EmptyContainer,

    /// A byte block handed to a type-erased array does not match its
    /// element size.
    #[error("expected a block of {expected} bytes, got {actual}")]
    ElementSizeMismatch {
        /// Element size of the array.
        expected: usize,
        /// Length of the block supplied by the caller.
        actual: usize,
    },
}
