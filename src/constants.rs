//! Constants used throughout the application.
//!
//! This module provides constants used throughout the application.

/// Characters that separate terms in a raw highlight input
pub const TERM_DELIMITERS: [char; 2] = [' ', ','];
pub const DEFAULT_HIGHLIGHT_FOREGROUND: &str = "white";
pub const DEFAULT_HIGHLIGHT_BACKGROUND: &str = "blue";
pub const MAX_PATH_LENGTH: usize = 4096;
pub const DEBUG_LOG_FILE_NAME: &str = "match-highlight-debug.log";
