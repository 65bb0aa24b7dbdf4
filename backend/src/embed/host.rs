//! Driving an embedded interpreter from the host side
//!
//! The steps a host takes, each one a function: run source text, extend
//! `sys.path`, import a module, fetch a callable, call it. Lookup failures
//! come back as distinct [`EmbedError`] variants so a host can treat them as
//! fatal; every other Python exception becomes [`EmbedError::Python`].

use pyo3::exceptions::{PyAttributeError, PyImportError};
use pyo3::prelude::*;
use pyo3::types::{PyList, PyModule, PyTuple};
use tracing::{debug, info};

use super::error::{EmbedError, EmbedResult};
use crate::config::HostConfig;
use crate::ffi::types::{extract_f64, extract_i64, int_list_to_py};

/// Execute statements in the `__main__` namespace
///
/// Names bound by one call stay visible to the next, so
/// `run_source(py, "import sys")` followed by `run_source(py, "sys.path")`
/// works.
pub fn run_source(py: Python<'_>, source: &str) -> EmbedResult<()> {
    debug!(len = source.len(), "running inline source");
    py.run_bound(source, None, None)?;
    Ok(())
}

/// Flush Python's `sys.stdout`
///
/// Python block-buffers stdout when it is not a terminal, so without this its
/// output would only appear at finalization, after anything the host printed.
pub fn flush_stdout(py: Python<'_>) -> EmbedResult<()> {
    let stdout = py.import_bound("sys")?.getattr("stdout")?;
    if !stdout.is_none() {
        stdout.call_method0("flush")?;
    }
    Ok(())
}

/// Append each of `paths` to `sys.path`, skipping ones already present
pub fn extend_sys_path<S: AsRef<str>>(py: Python<'_>, paths: &[S]) -> EmbedResult<()> {
    let sys = py.import_bound("sys")?;
    let sys_path = sys.getattr("path")?;
    let sys_path = sys_path
        .downcast::<PyList>()
        .map_err(|err| EmbedError::Python(err.to_string()))?;

    for path in paths {
        let path = path.as_ref();
        if !sys_path.contains(path)? {
            sys_path.append(path)?;
            debug!(path, "appended to sys.path");
        }
    }
    Ok(())
}

/// An imported module, remembered together with the name it was imported by
pub struct HostModule<'py> {
    name: String,
    module: Bound<'py, PyModule>,
}

impl<'py> HostModule<'py> {
    /// Import `name`
    ///
    /// # Errors
    ///
    /// [`EmbedError::ModuleNotFound`] for any `ImportError`; other exceptions
    /// raised while executing the module body become [`EmbedError::Python`].
    pub fn import(py: Python<'py>, name: &str) -> EmbedResult<Self> {
        match py.import_bound(name) {
            Ok(module) => {
                info!(module = name, "imported module");
                Ok(Self {
                    name: name.to_string(),
                    module,
                })
            }
            Err(err) if err.is_instance_of::<PyImportError>(py) => {
                Err(EmbedError::ModuleNotFound {
                    module: name.to_string(),
                    reason: err.value_bound(py).to_string(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fetch attribute `function` and check that it can be called
    pub fn callable(&self, function: &str) -> EmbedResult<HostCallable<'py>> {
        let py = self.module.py();
        let attr = match self.module.getattr(function) {
            Ok(attr) => attr,
            Err(err) if err.is_instance_of::<PyAttributeError>(py) => {
                return Err(EmbedError::CallableNotFound {
                    module: self.name.clone(),
                    function: function.to_string(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        if !attr.is_callable() {
            return Err(EmbedError::NotCallable {
                module: self.name.clone(),
                function: function.to_string(),
            });
        }

        Ok(HostCallable {
            name: format!("{}.{}", self.name, function),
            inner: attr,
        })
    }
}

/// A callable fetched from a [`HostModule`]
pub struct HostCallable<'py> {
    name: String,
    inner: Bound<'py, PyAny>,
}

impl<'py> HostCallable<'py> {
    /// Qualified name, `module.function`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call with a prebuilt positional-argument tuple
    pub fn call_with_tuple(&self, args: Bound<'py, PyTuple>) -> EmbedResult<Bound<'py, PyAny>> {
        debug!(callable = %self.name, arity = args.len(), "calling");
        Ok(self.inner.call1(args)?)
    }

    /// Call with one list argument built from `items`; the result must be an int
    pub fn call_int_list(&self, items: &[i64]) -> EmbedResult<i64> {
        let py = self.inner.py();
        let list = int_list_to_py(py, items);
        let result = self.call_with_tuple(PyTuple::new_bound(py, [list]))?;
        Ok(extract_i64(&result)?)
    }

    /// Call with one float argument; the result must be a number
    pub fn call_float(&self, input: f64) -> EmbedResult<f64> {
        let py = self.inner.py();
        let result = self.call_with_tuple(PyTuple::new_bound(py, [input]))?;
        Ok(extract_f64(&result)?)
    }
}

/// Run a whole list-sum host scenario inside an already live interpreter
///
/// Start-up source, then `sys.path`, then import, lookup and call.
pub fn call_list_sum(py: Python<'_>, config: &HostConfig) -> EmbedResult<i64> {
    for source in &config.startup_source {
        run_source(py, source)?;
    }
    flush_stdout(py)?;
    extend_sys_path(py, &config.search_paths)?;

    let module = HostModule::import(py, &config.module)?;
    let callable = module.callable(&config.function)?;
    let total = callable.call_int_list(&config.args)?;
    info!(callable = callable.name(), total, "list sum finished");
    Ok(total)
}

/// Import `module` and call `module.function(input)`
pub fn call_unary_float(
    py: Python<'_>,
    module: &str,
    function: &str,
    input: f64,
) -> EmbedResult<f64> {
    let module = HostModule::import(py, module)?;
    module.callable(function)?.call_float(input)
}
