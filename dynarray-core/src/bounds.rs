//! Index checks shared by every container surface.
//!
//! Access is always bounded by the logical length, never by the capacity.

use crate::error::{Error, Result};

/// Checks an index used by `get` and `set`.
#[inline]
pub fn check_access(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Checks an index used by `insert`. `index == len` appends.
#[inline]
pub fn check_insert(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Checks an index used by `delete`.
#[inline]
pub fn check_delete(index: usize, len: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::EmptyContainer);
    }
    check_access(index, len)
}
