//! Error types for the piphub launcher.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for launcher operations.
///
/// Script failures mirror the child's own exit code so downstream tooling
/// can branch on it; every other failure maps to the generic failure code.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Bundled script content is absent from the built binary.
    #[error("bundled script '{0}' is missing; the package is corrupt, reinstall it")]
    MissingScript(String),

    /// No candidate interpreter binary could be found on the host.
    #[error("{0}")]
    InterpreterNotFound(String),

    /// The interpreter ran but the script exited non-zero.
    #[error("script exited with code {code}")]
    ScriptFailure { code: i32 },

    /// Any other failure: I/O while materializing, a spawn error that is
    /// not "binary missing", or a signal-terminated child.
    #[error("{0}")]
    Internal(String),
}

impl LaunchError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::MissingScript(_) => exit_codes::FAILURE,
            LaunchError::InterpreterNotFound(_) => exit_codes::FAILURE,
            LaunchError::ScriptFailure { code } => *code,
            LaunchError::Internal(_) => exit_codes::FAILURE,
        }
    }

    /// Whether the binary should print a diagnostic line for this error.
    ///
    /// Script failures stay silent: the script already owns its stderr, and
    /// the mirrored exit code carries the result.
    pub fn prints_diagnostic(&self) -> bool {
        !matches!(self, LaunchError::ScriptFailure { .. })
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LaunchError>;
