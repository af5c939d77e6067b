//! Main text input module.
//!
//! Reads the text to highlight from the command line, a file or stdin

use crate::validation::InputValidator;
use crate::{HighlightError, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where the main text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly as an argument
    Inline(String),
    /// Text read from a file
    File(PathBuf),
    /// Text read from standard input
    Stdin,
}

impl InputSource {
    /// Read the whole text from this source
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => read_file(path),
            InputSource::Stdin => read_from(io::stdin().lock()),
        }
    }
}

/// Read a whole file as UTF-8 text
// AsRef allows us to accept a &Path or &str as input
pub fn read_file<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    let display_path = file_path.to_string_lossy().to_string();
    InputValidator::validate_file_path(&display_path)?;

    if !file_path.exists() {
        return Err(HighlightError::file_access_error(
            &display_path,
            "File not found",
        ));
    }

    if !file_path.is_file() {
        return Err(HighlightError::file_access_error(
            &display_path,
            "Path is not a regular file",
        ));
    }

    let text = fs::read_to_string(file_path).map_err(|e| match e.kind() {
        io::ErrorKind::PermissionDenied | io::ErrorKind::InvalidData => {
            HighlightError::file_access_error(&display_path, &e.to_string())
        }
        _ => HighlightError::IoError(e),
    })?;

    crate::logging::debug_log(&format!(
        "Read {} bytes from {}",
        text.len(),
        file_path.display()
    ));

    Ok(text)
}

/// Read everything from a reader as UTF-8 text
pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    if text.is_empty() {
        crate::logging::warn_log("Input was empty, nothing to highlight");
    }
    Ok(text)
}
