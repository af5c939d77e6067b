//! Logging module for debug mode
//!
//! Provides logging module that writes to a file in the temp directory
//! with timestamps when --debug is specified

use crate::constants::DEBUG_LOG_FILE_NAME;
use log::{debug, info, trace, warn};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Once;

// Logger can only be installed once per process
static INIT: Once = Once::new();

/// Initializes logging module when debug mode is enabled
/// Creates a file in the temp directory and sets up logger with timestamps
pub fn init_debug_logging() -> crate::Result<PathBuf> {
    let mut log_path = std::env::temp_dir();
    log_path.push(DEBUG_LOG_FILE_NAME);

    // Create or truncate the log file
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .map_err(|e| crate::HighlightError::FileAccessError {
            path: log_path.to_string_lossy().to_string(),
            reason: format!("Failed to create log file: {}", e),
        })?;

    INIT.call_once(move || {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Trace)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}:{} - {}",
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S.%3f UTC"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .init();
    });

    info!("Debug logging initialized to: {}", log_path.display());

    Ok(log_path)
}

/// Log a debug message if debug mode is enabled
pub fn debug_log(msg: &str) {
    debug!("{}", msg);
}

/// Log an info message if debug mode is enabled
pub fn info_log(msg: &str) {
    info!("{}", msg);
}

/// Log a warning message if debug mode is enabled
pub fn warn_log(msg: &str) {
    warn!("{}", msg);
}

/// Log a trace message if debug mode is enabled
pub fn trace_log(msg: &str) {
    trace!("{}", msg);
}
