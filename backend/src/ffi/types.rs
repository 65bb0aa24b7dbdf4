//! Type conversion utilities for FFI boundary
//!
//! The one place where Python lists become `Vec<i64>` and back. Every
//! binding flavour and every host goes through these helpers, so the
//! validation contract is the same everywhere:
//!
//! - the container must be a `list` (subclasses included),
//! - each item must be an `int` (subclasses included, so `bool` passes),
//!   otherwise `TypeError("list items must be integers.")`,
//! - an `int` that does not fit in 64 bits raises `OverflowError`.

use pyo3::exceptions::{PyOverflowError, PyTypeError};
use pyo3::prelude::*;
use pyo3::types::{PyList, PyLong};
use thiserror::Error;

use crate::core::SumError;

/// Message raised for a list item that is not an integer
pub const NON_INTEGER_ITEM: &str = "list items must be integers.";

/// Marshaling failures at the interpreter boundary
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("list items must be integers.")]
    NonIntegerItem { index: usize, type_name: String },

    #[error("argument must be list, not {0}")]
    NotAList(String),

    #[error("integer at index {index} does not fit in 64 bits")]
    IntegerOverflow { index: usize },

    #[error("function takes exactly {expected} argument(s) ({actual} given)")]
    Arity { expected: usize, actual: usize },

    #[error("expected an integer result, got {0}")]
    NotAnInteger(String),

    #[error(transparent)]
    Sum(#[from] SumError),
}

impl From<ConvertError> for PyErr {
    fn from(err: ConvertError) -> PyErr {
        match err {
            ConvertError::IntegerOverflow { .. } | ConvertError::Sum(_) => {
                PyOverflowError::new_err(err.to_string())
            }
            ConvertError::NonIntegerItem { .. }
            | ConvertError::NotAList(_)
            | ConvertError::Arity { .. }
            | ConvertError::NotAnInteger(_) => PyTypeError::new_err(err.to_string()),
        }
    }
}

/// Python type name of `obj`, for error messages
pub fn type_name(obj: &Bound<'_, PyAny>) -> String {
    obj.get_type()
        .name()
        .map(|name| name.to_string())
        .unwrap_or_else(|_| "<unknown>".to_string())
}

/// Convert a Python list of integers to `Vec<i64>`
///
/// Call it from the function body rather than through `from_py_with`:
/// argument extraction would prefix the message with the argument name.
///
/// # Errors
///
/// - `TypeError` if `obj` is not a list or an item is not an integer
/// - `OverflowError` if an item does not fit in an `i64`
pub fn extract_int_list(obj: &Bound<'_, PyAny>) -> PyResult<Vec<i64>> {
    let list = obj
        .downcast::<PyList>()
        .map_err(|_| ConvertError::NotAList(type_name(obj)))?;

    list.iter()
        .enumerate()
        .map(|(index, item)| extract_int_item(&item, index))
        .collect()
}

fn extract_int_item(item: &Bound<'_, PyAny>, index: usize) -> PyResult<i64> {
    if !item.is_instance_of::<PyLong>() {
        let type_name = type_name(item);
        tracing::debug!(index, %type_name, "rejecting non-integer list item");
        return Err(ConvertError::NonIntegerItem { index, type_name }.into());
    }

    item.extract::<i64>().map_err(|err| {
        if err.is_instance_of::<PyOverflowError>(item.py()) {
            ConvertError::IntegerOverflow { index }.into()
        } else {
            err
        }
    })
}

/// Convert native integers to a new Python list
pub fn int_list_to_py<'py>(py: Python<'py>, items: &[i64]) -> Bound<'py, PyList> {
    PyList::new_bound(py, items)
}

/// Convert a scalar Python result to `i64`
///
/// Unlike a bare `extract`, floats are rejected rather than truncated.
pub fn extract_i64(obj: &Bound<'_, PyAny>) -> PyResult<i64> {
    if !obj.is_instance_of::<PyLong>() {
        return Err(ConvertError::NotAnInteger(type_name(obj)).into());
    }
    obj.extract::<i64>()
}

/// Convert a scalar Python result to `f64` (ints are widened)
pub fn extract_f64(obj: &Bound<'_, PyAny>) -> PyResult<f64> {
    obj.extract::<f64>()
}
