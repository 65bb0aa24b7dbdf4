//! `sum` with automatic marshaling
//!
//! The argument is converted to `Vec<i64>` by [`extract_int_list`], which
//! does all of the validation; its errors reach the caller unchanged.
//! Exposed by the `pybind11_sum` module.
//!
//! ```python
//! import pybind11_sum
//!
//! pybind11_sum.sum([5, 6, 7])        # 18
//! pybind11_sum.sum(buffer=[])        # 0
//! pybind11_sum.sum([1, "2"])         # TypeError: list items must be integers.
//! ```

use pyo3::prelude::*;

use super::types::{extract_int_list, ConvertError};
use crate::core::list_sum;

/// A function which calculates the sum of buffer
#[pyfunction]
#[pyo3(name = "sum", signature = (buffer))]
pub fn buffer_sum(buffer: &Bound<'_, PyAny>) -> PyResult<i64> {
    let items = extract_int_list(buffer)?;
    let total = list_sum(&items).map_err(ConvertError::from)?;
    Ok(total)
}
