//! End-to-end tests for the demo host binaries
//!
//! Each binary is run as its own process, with the working directory set to
//! a temp dir that does (or does not) contain the companion `sum.py`.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const COMPANION: &str = include_str!("../python/sum.py");

/// Helper to create a working directory, optionally holding `sum.py`
fn workdir(companion: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(source) = companion {
        fs::write(dir.path().join("sum.py"), source).unwrap();
    }
    dir
}

/// Helper to run a host binary inside `dir`
fn run_host(bin: &str, dir: &Path) -> Output {
    Command::new(bin)
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_pyapi_host_sums_five_six_seven() {
    let dir = workdir(Some(COMPANION));
    let output = run_host(env!("CARGO_BIN_EXE_pyapi_sum_host"), dir.path());

    assert!(output.status.success(), "{output:?}");
    let text = stdout(&output);
    assert!(text.contains("py_list_sum([5, 6, 7]) = 18"), "{text}");
    assert!(text.contains("hello world"), "{text}");
}

#[test]
fn test_pyapi_host_startup_output_comes_first() {
    let dir = workdir(Some(COMPANION));
    let output = run_host(env!("CARGO_BIN_EXE_pyapi_sum_host"), dir.path());

    assert!(output.status.success(), "{output:?}");
    // stdout is a pipe here, so Python buffers it
    let text = stdout(&output);
    let greeting = text.find("hello world").unwrap();
    let result = text.find("py_list_sum([5, 6, 7]) = 18").unwrap();
    assert!(greeting < result, "{text}");
}

#[test]
fn test_scoped_host_sums_one_to_five() {
    let dir = workdir(Some(COMPANION));
    let output = run_host(env!("CARGO_BIN_EXE_scoped_sum_host"), dir.path());

    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("py_list_sum([1, 2, 3, 4, 5]) result:15"));
}

#[test]
fn test_closure_host_sums_one_to_five() {
    let dir = workdir(Some(COMPANION));
    let output = run_host(env!("CARGO_BIN_EXE_closure_sum_host"), dir.path());

    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("py_list_sum([1, 2, 3, 4, 5]) result:15"));
}

#[test]
fn test_snippet_host() {
    let dir = workdir(None);
    let output = run_host(env!("CARGO_BIN_EXE_snippet_host"), dir.path());

    assert!(output.status.success(), "{output:?}");
    let text = stdout(&output);
    assert!(text.contains("Hello PyBind World"), "{text}");
    assert!(text.contains("Sqrt of 25 is: 5"), "{text}");
    assert!(text.contains("Hello, World! The answer is 42"), "{text}");
}

#[test]
fn test_missing_module_exits_non_zero() {
    let dir = workdir(None);
    for bin in [
        env!("CARGO_BIN_EXE_pyapi_sum_host"),
        env!("CARGO_BIN_EXE_scoped_sum_host"),
        env!("CARGO_BIN_EXE_closure_sum_host"),
    ] {
        let output = run_host(bin, dir.path());
        assert!(!output.status.success(), "{bin}: {output:?}");
        // A signal would leave no exit code
        assert!(output.status.code().is_some(), "{bin}: {output:?}");
        assert!(stdout(&output).contains("module not found"), "{bin}: {output:?}");
    }
}

#[test]
fn test_missing_function_exits_non_zero() {
    let dir = workdir(Some("def other(items):\n    return 0\n"));
    let output = run_host(env!("CARGO_BIN_EXE_pyapi_sum_host"), dir.path());

    assert!(!output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("py_list_sum not found"));
}

#[test]
fn test_non_callable_exits_non_zero() {
    let dir = workdir(Some("py_list_sum = [1, 2, 3]\n"));
    let output = run_host(env!("CARGO_BIN_EXE_scoped_sum_host"), dir.path());

    assert!(!output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("py_list_sum not found"));
}
