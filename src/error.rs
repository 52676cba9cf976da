//! Error types for the cardlint CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Malformed *tokens* never appear here: a token that fails
//! validation is data (`Invalid`), not an error. Only broken CLI usage and
//! violations of the batch framing contract are errors.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for cardlint operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum CardlintError {
    /// User provided invalid arguments or an unusable path.
    #[error("{0}")]
    UserError(String),

    /// The input stream violated the batch framing contract
    /// (missing/non-numeric count line, or fewer lines than declared).
    #[error("Input error: {0}")]
    InputError(String),

    /// A read or write on an already-open stream failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CardlintError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CardlintError::UserError(_) => exit_codes::USER_ERROR,
            CardlintError::InputError(_) => exit_codes::INPUT_ERROR,
            CardlintError::IoError(_) => exit_codes::IO_ERROR,
        }
    }
}

/// Result type alias for cardlint operations.
pub type Result<T> = std::result::Result<T, CardlintError>;
