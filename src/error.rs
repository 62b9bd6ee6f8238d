//! Error types for command execution.
//!
//! The `TermError` enum represents the in-band error conditions a command can
//! report. Errors are never propagated out of a session: they are rendered as
//! error-styled output lines.

use alloc::string::String;
use core::fmt;

/// Terminal error type.
///
/// The `Display` output is exactly the line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    /// First token of the line is not a known command
    CommandNotFound {
        /// Token the user typed
        name: String,
    },

    /// Known command, missing or bad argument
    InvalidArgument(String),

    /// An optional host collaborator is not present on the page
    Unavailable(String),
}

impl TermError {
    /// Unknown command error for `name`.
    pub fn not_found(name: &str) -> Self {
        TermError::CommandNotFound { name: name.into() }
    }

    /// Invalid argument error with the given message.
    pub fn invalid(message: impl Into<String>) -> Self {
        TermError::InvalidArgument(message.into())
    }

    /// Missing collaborator error with the given message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        TermError::Unavailable(message.into())
    }
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermError::CommandNotFound { name } => write!(
                f,
                "Command not found: {}. Type \"help\" for available commands.",
                name
            ),
            TermError::InvalidArgument(msg) => write!(f, "{}", msg),
            TermError::Unavailable(msg) => write!(f, "{}", msg),
        }
    }
}
