//! Error types for the promptgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for promptgen operations.
///
/// Each variant maps to a specific exit code. All errors are fatal: the tool
/// aborts before the output file is written, so a failed run never leaves a
/// partial result behind.
#[derive(Error, Debug)]
pub enum PromptGenError {
    /// The template or a bound input file does not exist.
    #[error("file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// The template's file name matches none of the known classification markers.
    #[error("unknown prompt type for: {0}")]
    UnrecognizedTemplate(String),

    /// A filesystem operation failed (read, write, or directory creation).
    #[error("{0}")]
    Io(String),
}

impl PromptGenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptGenError::MissingFile(_) => exit_codes::MISSING_FILE,
            PromptGenError::UnrecognizedTemplate(_) => exit_codes::UNRECOGNIZED_TEMPLATE,
            PromptGenError::Io(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for promptgen operations.
pub type Result<T> = std::result::Result<T, PromptGenError>;
