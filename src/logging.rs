use std::fs;
use std::path::PathBuf;

use flexi_logger::{FileSpec, FlexiLoggerError, Logger, LoggerHandle, WriteMode};

/// Returns the directory log files are written to.
///
/// The path is determined in the following order:
/// 1. `ASSIGNUST_LOG_DIR` environment variable.
/// 2. `~/.local/share/assignust/logs` (or platform equivalent).
/// 3. `logs` in the current directory (fallback).
pub fn log_dir() -> PathBuf {
    if let Ok(custom) = std::env::var("ASSIGNUST_LOG_DIR") {
        return PathBuf::from(custom);
    }
    if let Some(mut dir) = dirs::data_local_dir() {
        dir.push("assignust");
        dir.push("logs");
        let _ = fs::create_dir_all(&dir);
        return dir;
    }
    PathBuf::from("logs")
}

/// Starts file-backed logging and returns the handle that keeps it alive.
///
/// Diagnostics go to a file rather than stderr because the interactive
/// session owns the terminal. The level filter comes from `RUST_LOG` when
/// set and defaults to `info`.
pub fn init_logging() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir())
                .basename("assignust"),
        )
        .append()
        .write_mode(WriteMode::BufferAndFlush)
        .start()
}
