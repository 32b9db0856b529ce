//! C-compatible handle interface to [`RawDynArray`].
//!
//! The array lives behind an opaque [`DYNARRAY_HANDLE`]. Every operation
//! reports failure through its return value: a null handle from
//! [`init_array`], `false` from the element operations, and `0` from the
//! queries when given a null handle. Rejected calls are logged at `debug`
//! level with the underlying [`dynarray::Error`].
//!
//! ```
//! use cdynarray::*;
//!
//! let handle = init_array(0, size_of::<i32>());
//! let value = 7i32;
//! unsafe {
//!     assert!(insert_element(handle, 0, (&value as *const i32).cast()));
//!     assert_eq!(array_size(handle), 1);
//!     free_array(handle);
//! }
//! ```

#![allow(non_camel_case_types)]

use std::{ffi::c_void, ptr, slice};

use dynarray::{RawDynArray, Result};
use tracing::debug;

/// Opaque handle to an array created by [`init_array`].
pub type DYNARRAY_HANDLE = *mut c_void;

/// Creates an array of `num_elements` zeroed elements of `element_size`
/// bytes each.
///
/// Returns a null handle if the buffer cannot be allocated. A non-null handle
/// must be released with [`free_array`].
#[unsafe(no_mangle)]
pub extern "C" fn init_array(num_elements: usize, element_size: usize) -> DYNARRAY_HANDLE {
    match RawDynArray::new(num_elements, element_size) {
        Ok(array) => Box::into_raw(Box::new(array)).cast(),
        Err(err) => {
            debug!(num_elements, element_size, %err, "init_array failed");
            ptr::null_mut()
        }
    }
}

/// Releases the array behind `handle`. A null handle is ignored.
///
/// # Safety
///
/// `handle` must be null or a handle returned by [`init_array`] that has not
/// been freed yet. It must not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_array(handle: DYNARRAY_HANDLE) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle.cast::<RawDynArray>()) });
    }
}

/// Overwrites the element at `index` with `element_size` bytes read from
/// `p_data`.
///
/// # Safety
///
/// `handle` must be null or a live handle. `p_data` must be null or valid for
/// reads of `element_size` bytes. It is not read when `element_size` is 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn set_element(
    handle: DYNARRAY_HANDLE,
    index: usize,
    p_data: *const c_void,
) -> bool {
    let Some(array) = (unsafe { array_mut(handle) }) else {
        return false;
    };
    let Some(block) = (unsafe { block(p_data, array.element_size()) }) else {
        return false;
    };
    report("set_element", index, array.set(index, block))
}

/// Copies the element at `index` into `p_data`. `p_data` is left untouched
/// on failure.
///
/// # Safety
///
/// `handle` must be null or a live handle. `p_data` must be null or valid for
/// writes of `element_size` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn get_element(
    handle: DYNARRAY_HANDLE,
    index: usize,
    p_data: *mut c_void,
) -> bool {
    let Some(array) = (unsafe { array_ref(handle) }) else {
        return false;
    };
    if p_data.is_null() {
        return false;
    }
    let out = unsafe { slice::from_raw_parts_mut(p_data.cast::<u8>(), array.element_size()) };
    report("get_element", index, array.get(index, out))
}

/// Inserts `element_size` bytes read from `p_data` at `index`, growing the
/// array when it is full. `index` may equal the current size to append.
///
/// # Safety
///
/// Same requirements as [`set_element`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn insert_element(
    handle: DYNARRAY_HANDLE,
    index: usize,
    p_data: *const c_void,
) -> bool {
    let Some(array) = (unsafe { array_mut(handle) }) else {
        return false;
    };
    let Some(block) = (unsafe { block(p_data, array.element_size()) }) else {
        return false;
    };
    report("insert_element", index, array.insert(index, block))
}

/// Deletes the element at `index`, shifting later elements down.
///
/// # Safety
///
/// `handle` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn delete_element(handle: DYNARRAY_HANDLE, index: usize) -> bool {
    match unsafe { array_mut(handle) } {
        Some(array) => report("delete_element", index, array.delete(index)),
        None => false,
    }
}

/// Number of element slots allocated, `0` for a null handle.
///
/// # Safety
///
/// `handle` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn array_capacity(handle: DYNARRAY_HANDLE) -> usize {
    unsafe { array_ref(handle) }.map_or(0, RawDynArray::capacity)
}

/// Number of elements, `0` for a null handle.
///
/// # Safety
///
/// `handle` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn array_size(handle: DYNARRAY_HANDLE) -> usize {
    unsafe { array_ref(handle) }.map_or(0, RawDynArray::len)
}

unsafe fn array_ref<'a>(handle: DYNARRAY_HANDLE) -> Option<&'a RawDynArray> {
    unsafe { handle.cast::<RawDynArray>().as_ref() }
}

unsafe fn array_mut<'a>(handle: DYNARRAY_HANDLE) -> Option<&'a mut RawDynArray> {
    unsafe { handle.cast::<RawDynArray>().as_mut() }
}

unsafe fn block<'a>(p_data: *const c_void, len: usize) -> Option<&'a [u8]> {
    // zero-sized elements read nothing, so any pointer will do
    if len == 0 {
        return Some(&[]);
    }
    if p_data.is_null() {
        return None;
    }
    Some(unsafe { slice::from_raw_parts(p_data.cast::<u8>(), len) })
}

fn report(op: &'static str, index: usize, result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            debug!(op, index, %err, "rejected");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_handle() {
        let value = 1i32;
        let data = (&value as *const i32).cast();
        let mut out = 0i32;
        unsafe {
            assert!(!set_element(ptr::null_mut(), 0, data));
            assert!(!insert_element(ptr::null_mut(), 0, data));
            assert!(!get_element(ptr::null_mut(), 0, (&mut out as *mut i32).cast()));
            assert!(!delete_element(ptr::null_mut(), 0));
            assert_eq!(array_capacity(ptr::null_mut()), 0);
            assert_eq!(array_size(ptr::null_mut()), 0);
            free_array(ptr::null_mut());
        }
    }

    #[test]
    fn test_null_data() {
        let handle = init_array(2, 4);
        unsafe {
            assert!(!set_element(handle, 0, ptr::null()));
            assert!(!insert_element(handle, 0, ptr::null()));
            assert!(!get_element(handle, 0, ptr::null_mut()));
            assert_eq!(array_size(handle), 2);
            free_array(handle);
        }
    }

    #[test]
    fn test_zero_sized_elements_accept_null_data() {
        let handle = init_array(0, 0);
        unsafe {
            assert!(insert_element(handle, 0, ptr::null()));
            assert!(insert_element(handle, 1, ptr::null()));
            assert!(set_element(handle, 0, ptr::null()));
            assert_eq!(array_size(handle), 2);
            assert!(!insert_element(handle, 3, ptr::null()));
            free_array(handle);
        }
    }

    #[test]
    fn test_init_failure_returns_null() {
        assert!(init_array(usize::MAX, 16).is_null());
    }
}
