//! Type-erased resizable array.
//!
//! Elements are opaque blocks of `element_size` bytes. Element `i` lives at
//! byte offset `i * element_size` of the backing buffer, and values are
//! copied in from and out to caller-supplied byte slices.

use std::ops::Range;

use dynarray_core::{
    Error, Result, TryClone,
    alloc::zeroed_blocks,
    bounds::{check_access, check_delete, check_insert},
    next_capacity,
};
use tracing::trace;

/// A resizable array of fixed-size byte blocks.
///
/// Capacity is tracked separately from the buffer length so that zero-sized
/// elements keep their element accounting.
#[derive(Debug)]
pub struct RawDynArray {
    buf: Box<[u8]>,
    element_size: usize,
    capacity: usize,
    len: usize,
}

impl RawDynArray {
    #[inline]
    fn check_rep(&self) {
        debug_assert!(self.len <= self.capacity);
        debug_assert_eq!(self.buf.len(), self.capacity * self.element_size);
    }

    /// Creates an array of `element_count` zeroed blocks of `element_size`
    /// bytes each. Length and capacity are both `element_count`.
    pub fn new(element_count: usize, element_size: usize) -> Result<Self> {
        let buf = zeroed_blocks(element_count, element_size)?;
        let this = Self {
            buf,
            element_size,
            capacity: element_count,
            len: element_count,
        };
        this.check_rep();
        Ok(this)
    }

    /// Creates an empty array for blocks of `element_size` bytes.
    pub fn empty(element_size: usize) -> Self {
        Self {
            buf: Box::new([]),
            element_size,
            capacity: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bytes of elements `[0, len)`, back to back.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len * self.element_size]
    }

    /// Copies element `index` into `out`, which must be exactly
    /// `element_size` bytes long. `out` is untouched on failure.
    pub fn get(&self, index: usize, out: &mut [u8]) -> Result<()> {
        let element = self.element(index)?;
        self.check_block(out)?;
        out.copy_from_slice(element);
        Ok(())
    }

    /// Borrows the bytes of element `index`.
    pub fn element(&self, index: usize) -> Result<&[u8]> {
        check_access(index, self.len)?;
        Ok(&self.buf[self.slot(index)])
    }

    /// Overwrites element `index` with `block`.
    pub fn set(&mut self, index: usize, block: &[u8]) -> Result<()> {
        self.check_block(block)?;
        check_access(index, self.len)?;
        let slot = self.slot(index);
        self.buf[slot].copy_from_slice(block);
        Ok(())
    }

    /// Inserts `block` at `index`, shifting later elements to the right.
    ///
    /// `index == len()` appends. A full buffer is reallocated first; if that
    /// fails the array is left as it was.
    pub fn insert(&mut self, index: usize, block: &[u8]) -> Result<()> {
        self.check_block(block)?;
        check_insert(index, self.len)?;
        if self.len == self.capacity {
            self.grow_and_insert(index, block)?;
        } else {
            let size = self.element_size;
            self.buf
                .copy_within(index * size..self.len * size, (index + 1) * size);
            let slot = self.slot(index);
            self.buf[slot].copy_from_slice(block);
        }
        self.len += 1;
        self.check_rep();
        Ok(())
    }

    /// Appends `block`.
    pub fn push(&mut self, block: &[u8]) -> Result<()> {
        self.insert(self.len, block)
    }

    /// Deletes element `index`, shifting later elements to the left.
    /// Capacity is unchanged and the vacated tail slot is zeroed.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        check_delete(index, self.len)?;
        let size = self.element_size;
        let slot = self.slot(index);
        self.buf[slot].fill(0);
        self.buf
            .copy_within((index + 1) * size..self.len * size, index * size);
        self.len -= 1;
        let tail = self.slot(self.len);
        self.buf[tail].fill(0);
        self.check_rep();
        Ok(())
    }

    /// Zeroes every element and sets the length to 0. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.buf[..self.len * self.element_size].fill(0);
        self.len = 0;
    }

    /// Reallocates the buffer so that capacity equals length.
    ///
    /// This is the only operation that lowers capacity.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        if self.len == self.capacity {
            return Ok(());
        }
        let mut trimmed = zeroed_blocks(self.len, self.element_size)?;
        trimmed.copy_from_slice(self.as_bytes());
        trace!(from = self.capacity, to = self.len, "trimmed buffer");
        self.buf = trimmed;
        self.capacity = self.len;
        self.check_rep();
        Ok(())
    }

    fn grow_and_insert(&mut self, index: usize, block: &[u8]) -> Result<()> {
        let capacity = next_capacity(self.capacity)?;
        let mut grown = zeroed_blocks(capacity, self.element_size)?;
        let split = index * self.element_size;
        let end = self.len * self.element_size;
        let size = self.element_size;
        grown[..split].copy_from_slice(&self.buf[..split]);
        grown[split..split + size].copy_from_slice(block);
        grown[split + size..end + size].copy_from_slice(&self.buf[split..end]);
        trace!(
            from = self.capacity,
            to = capacity,
            element_size = size,
            "grew buffer"
        );
        self.buf = grown;
        self.capacity = capacity;
        Ok(())
    }

    #[inline]
    fn slot(&self, index: usize) -> Range<usize> {
        let start = index * self.element_size;
        start..start + self.element_size
    }

    #[inline]
    fn check_block(&self, block: &[u8]) -> Result<()> {
        if block.len() == self.element_size {
            Ok(())
        } else {
            Err(Error::ElementSizeMismatch {
                expected: self.element_size,
                actual: block.len(),
            })
        }
    }
}

impl TryClone for RawDynArray {
    fn try_clone(&self) -> Result<Self> {
        let mut buf = zeroed_blocks(self.capacity, self.element_size)?;
        buf.copy_from_slice(&self.buf);
        Ok(Self {
            buf,
            element_size: self.element_size,
            capacity: self.capacity,
            len: self.len,
        })
    }
}

impl PartialEq for RawDynArray {
    fn eq(&self, other: &Self) -> bool {
        self.element_size == other.element_size && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for RawDynArray {}
