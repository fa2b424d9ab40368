//! Error types for fmm_validate.

use thiserror::Error;

/// Errors that can occur while assembling solver validation statistics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidateError {
    /// A contract violation detected by the core math.
    #[error("{0}")]
    Core(#[from] fmm_core::FmmCoreError),

    /// Invalid test-case configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// The solver rejected its input.
    #[error("solver error: {message}")]
    Solver {
        /// Description of the solver failure.
        message: String,
    },

    /// The solver returned a buffer that does not cover the grid.
    #[error("solver output size mismatch: expected {expected} cells, got {got}")]
    SolverOutputMismatch {
        /// Number of grid cells.
        expected: usize,
        /// Length of the returned buffer.
        got: usize,
    },
}

impl ValidateError {
    /// Shorthand for a [`ValidateError::Solver`] error.
    pub fn solver(message: impl Into<String>) -> Self {
        ValidateError::Solver {
            message: message.into(),
        }
    }
}

/// Result type for fmm_validate operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
