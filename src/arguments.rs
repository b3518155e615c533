//! Centralized argument handling for WalletBot
//!
//! Two layers:
//! - `CMD_ARGS` keeps the raw argument list so the logger can scan for
//!   `--debug-<module>` flags before anything else runs
//! - `Cli` is the typed `clap` parser used by `main`
use clap::Parser;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Override the stored arguments (used by tests)
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

/// Telegram wallet analytics bot
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "walletbot", version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Analyze one wallet address, print the report and exit (no Telegram)
    #[arg(long, value_name = "ADDRESS")]
    pub analyze: Option<String>,

    /// Etherscan / DeBank request debug output
    #[arg(long = "debug-api")]
    pub debug_api: bool,

    /// Token aggregation debug output
    #[arg(long = "debug-analysis")]
    pub debug_analysis: bool,

    /// Telegram handler debug output
    #[arg(long = "debug-telegram")]
    pub debug_telegram: bool,

    /// Configuration loading debug output
    #[arg(long = "debug-config")]
    pub debug_config: bool,

    /// Startup / shutdown debug output
    #[arg(long = "debug-system")]
    pub debug_system: bool,

    /// Debug output for every module
    #[arg(long = "debug-all")]
    pub debug_all: bool,

    /// Show verbose trace output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(long)]
    pub quiet: bool,

    /// Disable the log file (console only)
    #[arg(long = "no-log-file")]
    pub no_log_file: bool,
}

impl Cli {
    /// Parse the stored command-line arguments
    pub fn from_cmd_args() -> Self {
        Cli::parse_from(get_cmd_args())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_mode() {
        let cli = Cli::try_parse_from(["walletbot", "--analyze", "0xABC", "--debug-api"]).unwrap();
        assert_eq!(cli.analyze.as_deref(), Some("0xABC"));
        assert!(cli.debug_api);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_config_path() {
        let cli = Cli::try_parse_from(["walletbot", "--config", "/tmp/walletbot.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/walletbot.toml")));
        assert!(cli.analyze.is_none());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["walletbot", "--verbose", "--quiet"]).is_err());
    }

    #[test]
    fn test_from_cmd_args_reads_stored_args() {
        set_cmd_args(vec![
            "walletbot".to_string(),
            "--analyze".to_string(),
            "0xdef".to_string(),
        ]);
        assert_eq!(get_cmd_args().len(), 3);
        assert_eq!(Cli::from_cmd_args().analyze.as_deref(), Some("0xdef"));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["walletbot", "--dry-run"]).is_err());
    }
}
