//! High-level host with an explicit interpreter guard
//!
//! The guard lives for the whole of `run`; the list argument and the result
//! are marshaled automatically.

use std::process::ExitCode;

use pybridge_cli::{finish, format_call};
use pybridge_core_rs::embed::{call_list_sum, EmbedError};
use pybridge_core_rs::{init_logging, HostConfig, InterpreterGuard};

fn run(config: &HostConfig) -> Result<(), EmbedError> {
    let interpreter = InterpreterGuard::acquire()?;
    let total = interpreter.with_gil(|py| call_list_sum(py, config))?;
    println!("{} result:{}", format_call(&config.function, &config.args), total);
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    finish(run(&HostConfig::scoped_demo()))
}
