//! C ABI entry point for foreign-function loaders
//!
//! The cdylib exports `sum(const int *buffer, int len) -> int`, so a loader
//! such as Python's `ctypes` can call it without any interpreter glue:
//!
//! ```python
//! import ctypes
//!
//! lib = ctypes.CDLL("./libpybridge_core_rs.so")
//! items = [5, 6, 7, 8]
//! buffer = (ctypes.c_int * len(items))(*items)
//! print(lib.sum(buffer, len(items)))  # 26
//! ```

use std::os::raw::c_int;

use crate::core::list_sum;

/// Sum `len` C ints starting at `buffer`
///
/// A null `buffer` or a non-positive `len` sums to 0. Totals outside the
/// `int` range saturate at `INT_MIN`/`INT_MAX`.
///
/// # Safety
///
/// When `buffer` is non-null it must point to at least `len` initialized,
/// properly aligned `int`s that stay valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn sum(buffer: *const c_int, len: c_int) -> c_int {
    if buffer.is_null() || len <= 0 {
        return 0;
    }

    // Safety: upheld by the caller per the contract above; `len > 0` here.
    let items = unsafe { std::slice::from_raw_parts(buffer, len as usize) };
    let widened: Vec<i64> = items.iter().map(|&item| i64::from(item)).collect();

    // i32 items can't overflow an i64 total for any length an int can express.
    let total = list_sum(&widened).unwrap_or_default();
    let clamped = total.clamp(i64::from(c_int::MIN), i64::from(c_int::MAX));
    if clamped != total {
        tracing::warn!(total, "C ABI sum saturated to the int range");
    }
    clamped as c_int
}
