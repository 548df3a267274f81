use thiserror::Error;

use crate::error::error_message;

/// Providing details of the compile error condition.
///
/// The string form is `"<pattern> (<offset>): <message>"`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{pattern} ({offset}): {message}")]
pub struct CompileError {
    /// The pattern that failed to compile.
    pub pattern: String,
    /// A human-readable error message describing the error.
    pub message: String,
    /// The byte offset in the pattern at which the error was detected.
    pub offset: usize,
}

impl CompileError {
    pub(crate) fn nul_byte(pattern: &str, offset: usize) -> Self {
        CompileError {
            pattern: pattern.to_owned(),
            message: "NUL byte in pattern".to_owned(),
            offset,
        }
    }

    pub(crate) fn from_code(pattern: &str, code: i32, offset: usize) -> Self {
        CompileError {
            pattern: pattern.to_owned(),
            message: error_message(code),
            offset,
        }
    }
}
