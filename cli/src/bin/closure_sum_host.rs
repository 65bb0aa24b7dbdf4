//! High-level host with a closure-scoped interpreter
//!
//! Same scenario as `scoped_sum_host`; the interpreter's lifetime is the
//! closure passed to `with_interpreter`.

use std::process::ExitCode;

use pybridge_cli::{finish, format_call};
use pybridge_core_rs::embed::call_list_sum;
use pybridge_core_rs::{init_logging, with_interpreter, HostConfig};

fn main() -> ExitCode {
    init_logging();
    let config = HostConfig::scoped_demo();

    let result = with_interpreter(|py| call_list_sum(py, &config)).map(|total| {
        println!("{} result:{}", format_call(&config.function, &config.args), total);
    });
    finish(result)
}
