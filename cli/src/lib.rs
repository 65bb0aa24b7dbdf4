//! Shared plumbing for the demo host binaries
//!
//! Each binary embeds an interpreter, runs one fixed scenario and exits.
//! Failures are printed to stdout (that is what the scenario's caller sees)
//! and logged; the exit status is non-zero.

use std::process::ExitCode;

use pybridge_core_rs::EmbedError;

/// Turn a host run into a process exit status
///
/// By the time this is called the interpreter guard has already been
/// dropped, so teardown has happened on both paths.
pub fn finish(result: Result<(), EmbedError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_lookup_failure() {
                tracing::error!(error = %err, "lookup failed");
            } else {
                tracing::error!(error = %err, "host failed");
            }
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Render a call the way the demos print it, e.g. `py_list_sum([5, 6, 7])`
pub fn format_call(function: &str, args: &[i64]) -> String {
    format!("{function}({args:?})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_call() {
        assert_eq!(format_call("py_list_sum", &[5, 6, 7]), "py_list_sum([5, 6, 7])");
        assert_eq!(format_call("f", &[]), "f([])");
    }
}
