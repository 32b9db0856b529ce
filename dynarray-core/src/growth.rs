//! Capacity growth law.

use tracing::debug;

use crate::error::{Error, Result};

/// Returns the capacity a full buffer grows to before an insertion.
///
/// An empty buffer grows to a single slot, anything else doubles. Doubling
/// past `usize::MAX` is reported as an allocation failure since no allocator
/// could satisfy it anyway.
pub fn next_capacity(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Ok(1);
    }
    capacity.checked_mul(2).ok_or_else(|| {
        debug!(capacity, "capacity doubling overflows usize");
        Error::AllocationFailure {
            capacity: usize::MAX,
        }
    })
}
