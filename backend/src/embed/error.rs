//! Host-side error types

use pyo3::PyErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("interpreter already running")]
    AlreadyRunning,

    #[error("interpreter already finalized; it cannot be initialized again in this process")]
    AlreadyFinalized,

    #[error("interpreter was initialized outside of InterpreterGuard")]
    ForeignInterpreter,

    #[error("module not found: {module} ({reason})")]
    ModuleNotFound { module: String, reason: String },

    #[error("{function} not found in module {module}")]
    CallableNotFound { module: String, function: String },

    #[error("{function} not found: {module}.{function} is not callable")]
    NotCallable { module: String, function: String },

    #[error("Python error: {0}")]
    Python(String),
}

impl EmbedError {
    /// True for the two lookup failures a host treats as fatal
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            EmbedError::ModuleNotFound { .. }
                | EmbedError::CallableNotFound { .. }
                | EmbedError::NotCallable { .. }
        )
    }
}

impl From<PyErr> for EmbedError {
    fn from(err: PyErr) -> Self {
        EmbedError::Python(err.to_string())
    }
}

/// Result type for embedding operations
pub type EmbedResult<T> = Result<T, EmbedError>;
