//! Diagnostics file log
//!
//! Append-only, timestamped line writer over a fixed-name file, mirrored
//! to standard output. Logging never fails and never blocks a dispatch:
//! I/O errors are swallowed — a diagnostics line is never worth aborting
//! a call over.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

use pawnlink_sdk::DiagLog;

/// Default name of the diagnostics file, created next to the server
/// binary.
pub const DEFAULT_LOG_FILE: &str = "pawnlink_errors.log";

/// Prefix for the standard-output mirror of every line.
const STDOUT_TAG: &str = "[pawnlink]";

/// File-backed [`DiagLog`] implementation.
///
/// The file is opened for append on every write, matching the
/// open-write-close pattern of log consumers that tail or rotate the
/// file externally.
pub struct FileDiagLog {
    path: PathBuf,
}

impl FileDiagLog {
    /// Log to [`DEFAULT_LOG_FILE`] in the working directory.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }

    /// Log to a specific file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this sink appends to.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn append(&self, level: &str, message: &str) {
        println!("{} {}: {}", STDOUT_TAG, level, message);

        let timestamp = Local::now().format("[%d/%m/%Y %H:%M:%S]");
        let line = format!("{} {}: {}\n", timestamp, level, message);

        // Logging never fails the dispatch path.
        let _ = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
    }
}

impl Default for FileDiagLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagLog for FileDiagLog {
    fn error(&self, message: &str) {
        self.append("ERROR", message);
    }

    fn info(&self, message: &str) {
        self.append("INFO", message);
    }
}
