//! Python Bridge Core - Rust Library
//!
//! Native code on both sides of the Python boundary: hosts that embed an
//! interpreter, and extension modules the interpreter imports.
//!
//! # Architecture
//!
//! - **core**: Interpreter-free arithmetic (`list_sum`)
//! - **c_abi**: `extern "C" sum` for foreign-function loaders
//! - **config**: Host scenario inputs
//! - **embed**: Interpreter lifecycle and host-side calls
//! - **ffi**: Python-facing bindings and the shared conversion layer
//! - **logging**: Diagnostic logging setup
//!
//! # Extension modules
//!
//! The cdylib exports one `PyInit_*` symbol per module below. Python finds
//! a module by file name, so the library is installed once per name
//! (`pybind11_sum.so`, `python_api_sum.so`, `example2_sum.so`).
//!
//! # Critical Invariants
//!
//! 1. The interpreter is initialized once and finalized once per process
//! 2. Every list crossing the boundary goes through `ffi::types`
//! 3. Lookup failures on the host side are fatal, never retried

// Module declarations
pub mod c_abi;
pub mod config;
pub mod core;
pub mod logging;

#[cfg(feature = "pyo3")]
pub mod embed;
#[cfg(feature = "pyo3")]
pub mod ffi;

// Re-exports for convenience
pub use config::{ConfigError, HostConfig, SnippetConfig};
pub use crate::core::{list_sum, SumError};
pub use logging::init_logging;

#[cfg(feature = "pyo3")]
pub use embed::{with_interpreter, EmbedError, InterpreterGuard};

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

/// pybind11 sum plugin
#[cfg(feature = "pyo3")]
#[pymodule]
pub fn pybind11_sum(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::auto_sum::buffer_sum, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

/// Python interface for the array sum
#[cfg(feature = "pyo3")]
#[pymodule]
pub fn python_api_sum(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::manual_sum::varargs_sum, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

/// Generated bindings for plain native functions
#[cfg(feature = "pyo3")]
#[pymodule]
pub fn example2_sum(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::generated::list_sum_binding, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
