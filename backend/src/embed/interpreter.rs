//! Embedded interpreter lifecycle
//!
//! The interpreter is a process-wide singleton that moves through
//! `Uninitialized -> Live -> Finalized` exactly once. [`InterpreterGuard`]
//! owns the `Live` phase: acquiring it initializes the interpreter and
//! dropping it finalizes it, on every exit path. CPython extension state does
//! not survive a finalize/initialize cycle, so a finalized process refuses to
//! initialize again.
//!
//! # Example
//! ```no_run
//! use pybridge_core_rs::embed::{call_unary_float, InterpreterGuard};
//!
//! let interpreter = InterpreterGuard::acquire()?;
//! let root = interpreter.with_gil(|py| call_unary_float(py, "math", "sqrt", 25.0))?;
//! assert_eq!(root, 5.0);
//! # Ok::<(), pybridge_core_rs::embed::EmbedError>(())
//! ```

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU8, Ordering};

use pyo3::ffi;
use pyo3::prelude::*;
use tracing::{debug, info, warn};

use super::error::{EmbedError, EmbedResult};

const UNINITIALIZED: u8 = 0;
const LIVE: u8 = 1;
const FINALIZED: u8 = 2;

static STATE: AtomicU8 = AtomicU8::new(UNINITIALIZED);

/// Where the process is in the interpreter lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterState {
    Uninitialized,
    Live,
    Finalized,
}

/// Current lifecycle state of the embedded interpreter
pub fn interpreter_state() -> InterpreterState {
    match STATE.load(Ordering::Acquire) {
        UNINITIALIZED => InterpreterState::Uninitialized,
        LIVE => InterpreterState::Live,
        _ => InterpreterState::Finalized,
    }
}

/// Scoped ownership of the embedded interpreter
///
/// Not `Send`: the thread that initialized the interpreter holds the GIL
/// and is the one that must finalize it.
pub struct InterpreterGuard {
    _not_send: PhantomData<*mut ()>,
}

impl InterpreterGuard {
    /// Initialize the interpreter
    ///
    /// # Errors
    ///
    /// - [`EmbedError::AlreadyRunning`] while another guard is alive
    /// - [`EmbedError::AlreadyFinalized`] once a guard has been dropped
    /// - [`EmbedError::ForeignInterpreter`] if something else already
    ///   initialized the interpreter in this process
    pub fn acquire() -> EmbedResult<Self> {
        if let Err(state) =
            STATE.compare_exchange(UNINITIALIZED, LIVE, Ordering::AcqRel, Ordering::Acquire)
        {
            return Err(match state {
                LIVE => EmbedError::AlreadyRunning,
                _ => EmbedError::AlreadyFinalized,
            });
        }

        // Safety: plain status query, valid before initialization.
        if unsafe { ffi::Py_IsInitialized() } != 0 {
            STATE.store(UNINITIALIZED, Ordering::Release);
            return Err(EmbedError::ForeignInterpreter);
        }

        // Safety: STATE guarantees this is the only initialization. Signal
        // handlers are left to the host process.
        unsafe { ffi::Py_InitializeEx(0) };
        let guard = Self {
            _not_send: PhantomData,
        };
        info!("embedded interpreter initialized");

        // Registers this thread as the interpreter's main thread. On failure
        // the guard is dropped here, which finalizes.
        guard.with_gil(|py| py.import_bound("threading").map(drop))?;
        Ok(guard)
    }

    /// Run `f` with the GIL held
    pub fn with_gil<F, R>(&self, f: F) -> R
    where
        F: for<'py> FnOnce(Python<'py>) -> R,
    {
        Python::with_gil(f)
    }
}

impl Drop for InterpreterGuard {
    fn drop(&mut self) {
        // Safety: the guard is !Send, so this is the initializing thread,
        // which still holds the GIL; no Python objects outlive `with_gil`.
        let status = unsafe { ffi::Py_FinalizeEx() };
        STATE.store(FINALIZED, Ordering::Release);

        if status == 0 {
            info!("embedded interpreter finalized");
        } else {
            warn!(status, "interpreter finalized but failed to flush buffered data");
        }
    }
}

/// Run `f` inside a freshly initialized interpreter, finalizing afterwards
///
/// The closure-scoped counterpart of holding an [`InterpreterGuard`].
pub fn with_interpreter<F, R>(f: F) -> EmbedResult<R>
where
    F: for<'py> FnOnce(Python<'py>) -> EmbedResult<R>,
{
    let guard = InterpreterGuard::acquire()?;
    let result = guard.with_gil(f);
    debug!(ok = result.is_ok(), "interpreter scope finished");
    result
}
