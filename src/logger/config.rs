//! Logger configuration derived from command-line flags
//!
//! Scanned once by `logger::init()`. Before that, defaults apply
//! (Info level, no debug tags, console + file output).
//! `--debug-all` enables debug output for every tag. In `--analyze` mode the
//! console goes to stderr so stdout carries only the report.
use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments::get_cmd_args;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Messages above this level are dropped
    pub min_level: LogLevel,
    /// Tags with debug output enabled (debug keys)
    pub debug_tags: HashSet<String>,
    /// Console lines go to stderr instead of stdout
    pub console_to_stderr: bool,
    pub file_enabled: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            console_to_stderr: false,
            file_enabled: true,
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> = Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG.read().clone()
}

pub fn set_logger_config(config: LoggerConfig) {
    *LOGGER_CONFIG.write() = config;
}

/// Build the logger configuration from an argument list
pub fn config_from_args(args: &[String]) -> LoggerConfig {
    let has = |flag: &str| args.iter().any(|a| a == flag);
    let mut config = LoggerConfig::default();

    if has("--verbose") {
        config.min_level = LogLevel::Verbose;
    } else if has("--quiet") {
        config.min_level = LogLevel::Warning;
    }

    for arg in args {
        if let Some(key) = arg.strip_prefix("--debug-") {
            config.debug_tags.insert(key.to_lowercase());
            if config.min_level < LogLevel::Debug {
                config.min_level = LogLevel::Debug;
            }
        }
    }

    if has("--no-log-file") {
        config.file_enabled = false;
    }

    if args.iter().any(|a| a == "--analyze" || a.starts_with("--analyze=")) {
        config.console_to_stderr = true;
    }

    config
}

/// Scan the process arguments and install the resulting configuration
pub fn init_from_args() {
    let config = config_from_args(&get_cmd_args());
    set_logger_config(config);
}

pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    let config = LOGGER_CONFIG.read();
    config.debug_tags.contains("all") || config.debug_tags.contains(tag.to_debug_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_config() {
        let config = config_from_args(&args(&["walletbot"]));
        assert_eq!(config.min_level, LogLevel::Info);
        assert!(config.debug_tags.is_empty());
        assert!(config.file_enabled);
        assert!(!config.console_to_stderr);
    }

    #[test]
    fn test_analyze_mode_logs_to_stderr() {
        let config = config_from_args(&args(&["walletbot", "--analyze", "0xabc"]));
        assert!(config.console_to_stderr);

        let config = config_from_args(&args(&["walletbot", "--analyze=0xabc", "--quiet"]));
        assert!(config.console_to_stderr);
        assert_eq!(config.min_level, LogLevel::Warning);
    }

    #[test]
    fn test_debug_flags_enable_tags() {
        let config = config_from_args(&args(&["walletbot", "--debug-api", "--debug-telegram"]));
        assert_eq!(config.min_level, LogLevel::Debug);
        assert!(config.debug_tags.contains("api"));
        assert!(config.debug_tags.contains("telegram"));
        assert!(!config.debug_tags.contains("analysis"));
    }

    #[test]
    fn test_no_log_file_flag() {
        assert!(!config_from_args(&args(&["walletbot", "--no-log-file"])).file_enabled);
    }

    #[test]
    fn test_quiet_and_verbose() {
        assert_eq!(
            config_from_args(&args(&["walletbot", "--quiet"])).min_level,
            LogLevel::Warning
        );
        assert_eq!(
            config_from_args(&args(&["walletbot", "--verbose"])).min_level,
            LogLevel::Verbose
        );
    }
}
