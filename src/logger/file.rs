//! Plain-text log file output
//!
//! One file per process run under the logs directory. Writes are buffered
//! and flushed on `flush_file_logging()` and every Warning/Error line.
use crate::paths;
use chrono::Local;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

static LOG_FILE: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

/// Open the log file for this run. Failures fall back to console-only logging.
pub fn init_file_logging() {
    let logs_dir = paths::get_logs_directory();
    if let Err(e) = std::fs::create_dir_all(&logs_dir) {
        eprintln!("⚠️  Failed to create logs directory {}: {}", logs_dir.display(), e);
        return;
    }

    let file_name = format!("walletbot_{}.log", Local::now().format("%Y-%m-%d_%H-%M-%S"));
    let path = logs_dir.join(file_name);

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            *LOG_FILE.lock() = Some(BufWriter::new(file));
        }
        Err(e) => {
            eprintln!("⚠️  Failed to open log file {}: {}", path.display(), e);
        }
    }
}

/// Append a line to the log file (no-op before `init_file_logging`)
pub fn write_to_file(line: &str) {
    let mut guard = LOG_FILE.lock();
    if let Some(writer) = guard.as_mut() {
        let _ = writeln!(writer, "{}", line);
    }
}

pub fn flush_file_logging() {
    if let Some(writer) = LOG_FILE.lock().as_mut() {
        let _ = writer.flush();
    }
}
