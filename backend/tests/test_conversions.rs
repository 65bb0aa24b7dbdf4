//! Tests for the list <-> Vec<i64> conversion layer
//!
//! Every binding and host relies on these helpers, so the validation
//! contract is pinned down here once.

use pybridge_core_rs::ffi::types::{
    extract_f64, extract_i64, extract_int_list, int_list_to_py, NON_INTEGER_ITEM,
};
use pyo3::exceptions::{PyOverflowError, PyTypeError};
use pyo3::prelude::*;

/// Helper to evaluate a Python expression and run `f` on the result
fn with_expr<R>(expr: &str, f: impl for<'py> FnOnce(&Bound<'py, PyAny>) -> R) -> R {
    pyo3::prepare_freethreaded_python();
    Python::with_gil(|py| {
        let value = py.eval_bound(expr, None, None).unwrap();
        f(&value)
    })
}

#[test]
fn test_extract_int_list() {
    let items = with_expr("[5, 6, 7]", |obj| extract_int_list(obj).unwrap());
    assert_eq!(items, vec![5, 6, 7]);
}

#[test]
fn test_extract_empty_list() {
    let items = with_expr("[]", |obj| extract_int_list(obj).unwrap());
    assert!(items.is_empty());
}

#[test]
fn test_non_integer_item_is_type_error() {
    with_expr("[1, 2.5, 3]", |obj| {
        let err = extract_int_list(obj).unwrap_err();
        let py = obj.py();
        assert!(err.is_instance_of::<PyTypeError>(py));
        assert_eq!(err.value_bound(py).to_string(), NON_INTEGER_ITEM);
    });
}

#[test]
fn test_string_item_is_type_error() {
    with_expr("[1, '2']", |obj| {
        let err = extract_int_list(obj).unwrap_err();
        assert!(err.is_instance_of::<PyTypeError>(obj.py()));
    });
}

#[test]
fn test_non_list_container_is_type_error() {
    with_expr("(1, 2, 3)", |obj| {
        let err = extract_int_list(obj).unwrap_err();
        let py = obj.py();
        assert!(err.is_instance_of::<PyTypeError>(py));
        assert!(err.value_bound(py).to_string().contains("tuple"));
    });
}

#[test]
fn test_bool_counts_as_integer() {
    let items = with_expr("[True, False, 2]", |obj| extract_int_list(obj).unwrap());
    assert_eq!(items, vec![1, 0, 2]);
}

#[test]
fn test_list_subclass_is_accepted() {
    let items = with_expr(
        "type('IntList', (list,), {})([4, 5])",
        |obj| extract_int_list(obj).unwrap(),
    );
    assert_eq!(items, vec![4, 5]);
}

#[test]
fn test_oversized_integer_is_overflow_error() {
    with_expr("[1, 2**70]", |obj| {
        let err = extract_int_list(obj).unwrap_err();
        assert!(err.is_instance_of::<PyOverflowError>(obj.py()));
    });
}

#[test]
fn test_int_list_to_py() {
    pyo3::prepare_freethreaded_python();
    Python::with_gil(|py| {
        let list = int_list_to_py(py, &[1, 2, 3]);
        assert_eq!(list.len(), 3);
        let back: Vec<i64> = list.extract().unwrap();
        assert_eq!(back, vec![1, 2, 3]);

        let empty = int_list_to_py(py, &[]);
        assert_eq!(empty.len(), 0);
    });
}

#[test]
fn test_scalar_results() {
    assert_eq!(with_expr("18", |obj| extract_i64(obj).unwrap()), 18);
    assert_eq!(with_expr("5.0", |obj| extract_f64(obj).unwrap()), 5.0);
    assert_eq!(with_expr("5", |obj| extract_f64(obj).unwrap()), 5.0);

    with_expr("18.0", |obj| {
        let err = extract_i64(obj).unwrap_err();
        assert!(err.is_instance_of::<PyTypeError>(obj.py()));
    });
}
