//! Raw-API host
//!
//! Drives the interpreter one step at a time: initialize, run start-up
//! source (flushing Python's stdout so it lands before ours), extend
//! `sys.path`, import `sum`, fetch `py_list_sum`, build the
//! argument tuple by hand, call, convert the result, finalize.

use std::process::ExitCode;

use pybridge_cli::{finish, format_call};
use pybridge_core_rs::embed::{extend_sys_path, flush_stdout, run_source, EmbedError, HostModule};
use pybridge_core_rs::ffi::types::{extract_i64, int_list_to_py};
use pybridge_core_rs::{init_logging, HostConfig, InterpreterGuard};
use pyo3::types::PyTuple;

fn run(config: &HostConfig) -> Result<(), EmbedError> {
    let interpreter = InterpreterGuard::acquire()?;

    let total = interpreter.with_gil(|py| -> Result<i64, EmbedError> {
        for source in &config.startup_source {
            run_source(py, source)?;
        }
        flush_stdout(py)?;
        extend_sys_path(py, &config.search_paths)?;

        let module = HostModule::import(py, &config.module)?;
        let callable = module.callable(&config.function)?;

        // One positional argument: the list itself
        let args = PyTuple::new_bound(py, [int_list_to_py(py, &config.args)]);
        let result = callable.call_with_tuple(args)?;
        Ok(extract_i64(&result)?)
    })?;

    println!("{} = {}", format_call(&config.function, &config.args), total);
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    finish(run(&HostConfig::pyapi_demo()))
}
