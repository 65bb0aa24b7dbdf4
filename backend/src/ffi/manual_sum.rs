//! `sum` with hand-written argument parsing
//!
//! Takes `*args` and unpacks it itself: exactly one positional argument,
//! which must be a `list`. Item validation is the shared contract from
//! [`super::types`], so a non-integer item raises
//! `TypeError("list items must be integers.")` and no result is returned.
//! Exposed by the `python_api_sum` module.

use pyo3::prelude::*;
use pyo3::types::{PyList, PyTuple};

use super::types::{extract_int_list, type_name, ConvertError};
use crate::core::list_sum;

/// Unpack `args` as a single `list` argument
///
/// # Errors
///
/// `TypeError` if there is not exactly one argument or it is not a list.
pub fn parse_single_list<'py>(args: &Bound<'py, PyTuple>) -> PyResult<Bound<'py, PyList>> {
    if args.len() != 1 {
        return Err(ConvertError::Arity {
            expected: 1,
            actual: args.len(),
        }
        .into());
    }

    let arg = args.get_item(0)?;
    if !arg.is_instance_of::<PyList>() {
        return Err(ConvertError::NotAList(type_name(&arg)).into());
    }
    Ok(arg.downcast_into::<PyList>()?)
}

/// sum method
#[pyfunction]
#[pyo3(name = "sum", signature = (*args))]
pub fn varargs_sum(args: &Bound<'_, PyTuple>) -> PyResult<i64> {
    let list = parse_single_list(args)?;
    let items = extract_int_list(list.as_any())?;
    tracing::debug!(len = items.len(), "python_api_sum.sum");

    let total = list_sum(&items).map_err(ConvertError::from)?;
    Ok(total)
}
