//! Embedding a Python interpreter in a native host
//!
//! - [`interpreter`]: lifecycle of the process-wide interpreter
//! - [`host`]: import, lookup and call helpers used inside it
//! - [`error`]: what can go wrong on the host side

pub mod error;
pub mod host;
pub mod interpreter;

pub use error::{EmbedError, EmbedResult};
pub use host::{
    call_list_sum, call_unary_float, extend_sys_path, flush_stdout, run_source, HostCallable,
    HostModule,
};
pub use interpreter::{interpreter_state, with_interpreter, InterpreterGuard, InterpreterState};
