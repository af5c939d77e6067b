//! Error handling.
//!
//! This module provides a custom error type for the project. Highlighting
//! itself never fails; errors only come from reading input and parsing options.

use colored::*;
use std::fmt;

/// Result type alias for the highlight application.
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Main error type for the highlight application.
#[derive(Debug)]
pub enum HighlightError {
    /// Invalid command line arguments.
    /// This allows you to store a more detailed message explaining why the arguments were invalid.
    InvalidArguments(String),

    /// IO error.
    IoError(std::io::Error),

    /// Input validation error.
    InvalidInput(String),

    /// Unknown or malformed color.
    InvalidColor { value: String, reason: String },

    /// File access error.
    FileAccessError { path: String, reason: String },
}

impl fmt::Display for HighlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let warn_msg = match self {
            HighlightError::InvalidArguments(msg) => format!("Invalid arguments: {}", msg),
            HighlightError::IoError(err) => format!("IO error: {}", err),
            HighlightError::InvalidInput(err) => format!("Invalid input: {}", err),
            HighlightError::InvalidColor { value, reason } => {
                format!("Invalid color: {}\n reason: {}", value, reason)
            }
            HighlightError::FileAccessError { path, reason } => {
                format!("File access error: Path: {}\n Reason: {}", path, reason)
            }
        };
        write!(f, "{}", warn_msg.red().bold())
    }
}

impl std::error::Error for HighlightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HighlightError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HighlightError {
    fn from(err: std::io::Error) -> Self {
        HighlightError::IoError(err)
    }
}

impl Clone for HighlightError {
    fn clone(&self) -> Self {
        match self {
            HighlightError::InvalidArguments(msg) => HighlightError::InvalidArguments(msg.clone()),
            HighlightError::IoError(err) => {
                HighlightError::IoError(std::io::Error::new(err.kind(), err.to_string()))
            }
            HighlightError::InvalidInput(err) => HighlightError::InvalidInput(err.clone()),
            HighlightError::InvalidColor { value, reason } => HighlightError::InvalidColor {
                value: value.clone(),
                reason: reason.clone(),
            },
            HighlightError::FileAccessError { path, reason } => HighlightError::FileAccessError {
                path: path.clone(),
                reason: reason.clone(),
            },
        }
    }
}

impl HighlightError {
    /// Create a file access error with context
    pub fn file_access_error(path: &str, reason: &str) -> Self {
        HighlightError::FileAccessError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid color error
    pub fn invalid_color(value: &str, reason: &str) -> Self {
        HighlightError::InvalidColor {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Check if this error is recoverable by fixing the input
    pub fn is_recoverable(&self) -> bool {
        match self {
            HighlightError::InvalidInput(_) => true,
            HighlightError::InvalidColor { .. } => true,
            HighlightError::FileAccessError { .. } => true,
            HighlightError::InvalidArguments(_) => false,
            HighlightError::IoError(_) => false,
        }
    }

    /// Get user-friendly recovery suggestion
    pub fn get_recovery_suggestion(&self) -> Option<String> {
        match self {
            HighlightError::InvalidInput(..) => {
                Some("Please check your input and try again.".to_string())
            }
            HighlightError::InvalidColor { .. } => Some(
                "Use a color name such as 'blue' or 'bright yellow', or a hex code like '#1e90ff'."
                    .to_string(),
            ),
            HighlightError::FileAccessError { .. } => {
                Some("Check the file path and permissions and try again.".to_string())
            }
            HighlightError::InvalidArguments(..) => {
                Some("Run with --help to see the accepted arguments.".to_string())
            }
            _ => None,
        }
    }
}
