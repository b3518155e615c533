//! Structured logging for WalletBot
//!
//! This module provides a small, ergonomic logging API with:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via --debug-<module> flags
//! - Dual output: colored console + file persistence
//!
//! ## Usage
//!
//! ```rust,ignore
//! use walletbot::logger::{self, LogTag};
//!
//! logger::error(LogTag::Api, "Etherscan request failed");
//! logger::info(LogTag::Telegram, "Bot started");
//! logger::debug(LogTag::Analysis, "Folded 42 events"); // Only with --debug-analysis
//! ```
//!
//! Call `logger::init()` once at startup, before any service starts.

mod config;
mod core;
mod file;
mod format;
mod levels;
mod tags;

pub use config::{
    config_from_args, get_logger_config, init_from_args, set_logger_config,
    LoggerConfig,
};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system
///
/// Parses command-line flags, then opens the log file for this run.
pub fn init() {
    config::init_from_args();

    if get_logger_config().file_enabled {
        file::init_file_logging();
    }
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (kept under --quiet)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations, hidden by --quiet)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Only shown when the matching --debug-<module> flag is provided.
///
/// ```rust,ignore
/// // Only shown with --debug-api
/// logger::debug(LogTag::Api, "GET https://api.etherscan.io/api?...");
/// ```
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (only with --verbose)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

/// Force flush all pending log writes
///
/// Call this during shutdown to ensure all logs are written to disk.
pub fn flush() {
    file::flush_file_logging();
}
