//! Resizable arrays with explicit, fallible growth.
//!
//! Two containers share one algorithm:
//!
//! - [`DynArray<T>`] stores values of a type known at compile time.
//! - [`RawDynArray`] stores fixed-size byte blocks whose size is chosen at
//!   construction, copying them in and out of caller storage.
//!
//! Both keep a logical length separate from the allocated capacity. Only an
//! insertion into a full buffer reallocates, and it always grows the buffer
//! to `max(1, 2 * capacity)`. Allocation failure is returned as
//! [`Error::AllocationFailure`] and leaves the container untouched.
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut arr = DynArray::new();
//! arr.insert(0, 1).unwrap();
//! arr.insert(0, 2).unwrap();
//! arr.insert(0, 3).unwrap();
//! assert_eq!(arr.as_slice(), &[3, 2, 1]);
//! assert_eq!(arr.capacity(), 4);
//! ```

pub mod raw;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod typed;

pub use dynarray_core::{Error, Result, Search, TryClone, next_capacity};
#[cfg(feature = "logging")]
pub use dynarray_core::logger;
pub use raw::RawDynArray;
pub use typed::DynArray;
