//! Interpreter-free building blocks
//!
//! Everything in here is plain Rust over native containers. The bindings in
//! [`crate::ffi`] and the C ABI in [`crate::c_abi`] delegate to these
//! functions instead of repeating the arithmetic.

pub mod sum;

pub use sum::{list_sum, SumError};
