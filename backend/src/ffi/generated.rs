//! Bindings generated from plain declarations
//!
//! [`bind_int_list_fn!`] takes a plain `fn(&[i64]) -> Result<i64, SumError>`
//! and emits the `#[pyfunction]` glue for it, so the declaration itself never
//! touches the interpreter API. The `example2_sum` module exposes the result.

use pyo3::prelude::*;

/// Generate a Python-callable wrapper around a plain slice function
///
/// The wrapper takes one argument named `buffer`, marshals it through
/// [`super::types::extract_int_list`] and maps the plain function's error
/// through [`super::types::ConvertError`].
macro_rules! bind_int_list_fn {
    ($wrapper:ident => $plain:path, name = $name:tt, doc = $doc:tt) => {
        #[doc = $doc]
        #[pyfunction]
        #[pyo3(name = $name, signature = (buffer))]
        pub fn $wrapper(buffer: &Bound<'_, PyAny>) -> PyResult<i64> {
            let items = crate::ffi::types::extract_int_list(buffer)?;
            let total = $plain(&items).map_err(crate::ffi::types::ConvertError::from)?;
            Ok(total)
        }
    };
}

bind_int_list_fn!(
    list_sum_binding => crate::core::list_sum,
    name = "list_sum",
    doc = "Sum the integers in buffer"
);
