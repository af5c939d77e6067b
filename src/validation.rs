//! Input validation.
//!
//! Provides validation for file paths given on the command line

use crate::constants::*;
use crate::{HighlightError, Result};

/// Input validator for user supplied paths
pub struct InputValidator;

impl InputValidator {
    /// Validates file path
    pub fn validate_file_path(path: &str) -> Result<String> {
        let trimmed = path.trim();

        if trimmed.is_empty() {
            return Err(HighlightError::InvalidInput(
                "File path cannot be empty".to_string(),
            ));
        }

        // Check for null bytes
        if trimmed.contains('\0') {
            return Err(HighlightError::InvalidInput(
                "File path contains null bytes".to_string(),
            ));
        }

        if trimmed.len() > MAX_PATH_LENGTH {
            return Err(HighlightError::InvalidInput(format!(
                "File path is too long (max length is {} characters)",
                MAX_PATH_LENGTH
            )));
        }

        Ok(trimmed.to_string())
    }
}
