//! Typed resizable array.

use std::fmt;

use dynarray_core::{
    Error, Result, Search, TryClone,
    alloc::zeroed_slots,
    bounds::{check_access, check_delete, check_insert},
    next_capacity,
};
use tracing::trace;

/// A resizable array of `T`.
///
/// The backing buffer is a boxed slice whose length is the capacity. Slots
/// `[0, len)` hold caller values; the rest hold `T::default()`.
pub struct DynArray<T> {
    buf: Box<[T]>,
    len: usize,
}

impl<T> DynArray<T> {
    /// Creates an empty array. Nothing is allocated.
    pub fn new() -> Self {
        Self {
            buf: Box::new([]),
            len: 0,
        }
    }

    /// Number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        check_access(index, self.len)?;
        Ok(&self.buf[index])
    }

    /// Returns the element at `index` for in-place modification.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_access(index, self.len)?;
        Ok(&mut self.buf[index])
    }

    /// Overwrites the element at `index`. Length and capacity are unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf[..self.len]
    }
}

impl<T: Default> DynArray<T> {
    /// Creates an array of `len` default values with capacity `len`.
    pub fn with_len(len: usize) -> Result<Self> {
        let buf = zeroed_slots(len)?;
        Ok(Self { buf, len })
    }

    /// Inserts `value` at `index`, shifting later elements to the right.
    ///
    /// `index == len()` appends. A full buffer is reallocated first; if that
    /// fails the array is left as it was.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        check_insert(index, self.len)?;
        if self.len == self.buf.len() {
            self.grow_and_insert(index, value)?;
        } else {
            // first free slot, then rotated down to `index`
            self.buf[self.len] = value;
            self.buf[index..=self.len].rotate_right(1);
        }
        self.len += 1;
        Ok(())
    }

    /// Appends `value`.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.insert(self.len, value)
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// to the left. Capacity is unchanged.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        check_delete(index, self.len)?;
        let value = std::mem::take(&mut self.buf[index]);
        self.buf[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(value)
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.buf[..self.len].fill_with(T::default);
        self.len = 0;
    }

    /// Reallocates the buffer so that capacity equals length.
    ///
    /// This is the only operation that lowers capacity.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        if self.len == self.buf.len() {
            return Ok(());
        }
        let mut trimmed = zeroed_slots(self.len)?;
        trimmed.swap_with_slice(&mut self.buf[..self.len]);
        trace!(from = self.buf.len(), to = self.len, "trimmed buffer");
        self.buf = trimmed;
        Ok(())
    }

    fn grow_and_insert(&mut self, index: usize, value: T) -> Result<()> {
        let capacity = next_capacity(self.buf.len())?;
        let mut grown = zeroed_slots(capacity)?;
        grown[..index].swap_with_slice(&mut self.buf[..index]);
        grown[index] = value;
        grown[index + 1..=self.len].swap_with_slice(&mut self.buf[index..self.len]);
        trace!(from = self.buf.len(), to = capacity, "grew buffer");
        self.buf = grown;
        Ok(())
    }
}

impl<T: Clone + Default> DynArray<T> {
    /// Creates an array holding a copy of `values`, with capacity equal to
    /// its length.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        let mut arr = Self::with_len(values.len())?;
        arr.buf.clone_from_slice(values);
        Ok(arr)
    }
}

impl<T: PartialEq> Search for DynArray<T> {
    type Item = T;

    fn index_of(&self, value: &T) -> Option<usize> {
        self.as_slice().iter().position(|v| v == value)
    }
}

impl<T: Clone + Default> TryClone for DynArray<T> {
    fn try_clone(&self) -> Result<Self> {
        let mut buf = zeroed_slots(self.buf.len())?;
        buf[..self.len].clone_from_slice(self.as_slice());
        Ok(Self { buf, len: self.len })
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Takes over the vector's buffer when it has no spare capacity. Otherwise
/// the elements move into a fresh buffer of exactly `len` slots, so the
/// result always has capacity equal to length and a failed allocation is
/// reported rather than aborting.
impl<T: Default> TryFrom<Vec<T>> for DynArray<T> {
    type Error = Error;

    fn try_from(values: Vec<T>) -> Result<Self> {
        let len = values.len();
        if len == values.capacity() {
            return Ok(Self {
                buf: values.into_boxed_slice(),
                len,
            });
        }
        let mut buf = zeroed_slots(len)?;
        for (slot, value) in buf.iter_mut().zip(values) {
            *slot = value;
        }
        Ok(Self { buf, len })
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}
