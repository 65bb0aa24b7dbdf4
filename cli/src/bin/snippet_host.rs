//! Host that calls a library function and then runs inline source

use std::process::ExitCode;

use pybridge_cli::finish;
use pybridge_core_rs::embed::{call_unary_float, run_source};
use pybridge_core_rs::{init_logging, with_interpreter, SnippetConfig};

fn main() -> ExitCode {
    init_logging();
    let config = SnippetConfig::default();
    println!("Hello PyBind World");

    let result = with_interpreter(|py| {
        let value = call_unary_float(py, &config.module, &config.function, config.input)?;
        println!("Sqrt of {} is: {}", config.input, value);
        run_source(py, &config.source)
    });
    finish(result)
}
