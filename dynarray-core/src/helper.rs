//! Helper traits and utilities.

use crate::error::Result;

/// Trait for types that can fail cloning.
///
/// Cloning a container allocates a new buffer, and allocation failure is
/// reported rather than aborting.
pub trait TryClone: Sized {
    /// Returns a copy of `self` or the allocation error.
    fn try_clone(&self) -> Result<Self>;
}

/// Trait for linear lookup of a value in a container.
pub trait Search {
    /// The type of value to look for.
    type Item;

    /// Returns the index of the first element equal to `value`.
    fn index_of(&self, value: &Self::Item) -> Option<usize>;

    /// Returns true if the container holds an element equal to `value`.
    fn contains(&self, value: &Self::Item) -> bool {
        self.index_of(value).is_some()
    }
}
