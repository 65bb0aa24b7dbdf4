//! Python-facing bindings
//!
//! Three ways of exposing the same `sum` to the interpreter:
//!
//! - [`auto_sum`]: automatic marshaling (`pybind11_sum` module)
//! - [`manual_sum`]: hand-parsed `*args` (`python_api_sum` module)
//! - [`generated`]: glue generated from a plain declaration (`example2_sum`)
//!
//! All three share the conversion layer in [`types`].

pub mod auto_sum;
pub mod generated;
pub mod manual_sum;
pub mod types;

pub use types::{extract_int_list, int_list_to_py, ConvertError, NON_INTEGER_ITEM};
