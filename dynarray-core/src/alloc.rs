//! Fallible allocation of zero-initialized buffers.

use crate::error::{Error, Result};

/// Allocates `slots` elements, every one set to `T::default()`.
///
/// The allocation goes through [`Vec::try_reserve_exact`], so an allocator
/// refusal or a size overflow comes back as [`Error::AllocationFailure`]
/// instead of aborting the process. Nothing is allocated for `slots == 0`.
pub fn zeroed_slots<T: Default>(slots: usize) -> Result<Box<[T]>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(slots)
        .map_err(|_| Error::AllocationFailure { capacity: slots })?;
    buf.resize_with(slots, T::default);
    Ok(buf.into_boxed_slice())
}

/// Allocates `count * element_size` zero bytes.
///
/// The error reports `count`, the number of elements the caller asked for.
pub fn zeroed_blocks(count: usize, element_size: usize) -> Result<Box<[u8]>> {
    let bytes = count
        .checked_mul(element_size)
        .ok_or(Error::AllocationFailure { capacity: count })?;
    zeroed_slots::<u8>(bytes).map_err(|_| Error::AllocationFailure { capacity: count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_slots() {
        let buf = zeroed_slots::<i32>(4).unwrap();
        assert_eq!(&*buf, &[0, 0, 0, 0]);
        assert!(zeroed_slots::<i32>(0).unwrap().is_empty());
    }

    #[test]
    fn test_capacity_overflow() {
        assert_eq!(
            zeroed_slots::<u64>(usize::MAX).unwrap_err(),
            Error::AllocationFailure {
                capacity: usize::MAX
            }
        );
    }

    #[test]
    fn test_zeroed_blocks() {
        let buf = zeroed_blocks(3, 5).unwrap();
        assert_eq!(buf.len(), 15);
        assert!(buf.iter().all(|b| *b == 0));
        assert_eq!(
            zeroed_blocks(usize::MAX, 2).unwrap_err(),
            Error::AllocationFailure {
                capacity: usize::MAX
            }
        );
    }
}
