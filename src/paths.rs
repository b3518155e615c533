//! Centralized path resolution for WalletBot
//!
//! ## Directory Structure
//!
//! ```text
//! <base>/
//! ├── data/
//! │   └── config.toml
//! └── logs/
//!     └── walletbot_*.log
//! ```
//!
//! `<base>` is `$WALLETBOT_HOME` when set, otherwise the platform data
//! directory (`~/.local/share/WalletBot` on Linux,
//! `~/Library/Application Support/WalletBot` on macOS).

use std::path::PathBuf;

const APP_DIR: &str = "WalletBot";

/// Environment variable overriding the base directory
pub const HOME_ENV_VAR: &str = "WALLETBOT_HOME";

fn resolve_base_directory() -> PathBuf {
    if let Ok(home) = std::env::var(HOME_ENV_VAR) {
        if !home.trim().is_empty() {
            return PathBuf::from(home);
        }
    }

    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(APP_DIR))
}

/// Root directory for all WalletBot files
pub fn get_base_directory() -> PathBuf {
    resolve_base_directory()
}

pub fn get_data_directory() -> PathBuf {
    get_base_directory().join("data")
}

pub fn get_logs_directory() -> PathBuf {
    get_base_directory().join("logs")
}

/// Default configuration file (`<base>/data/config.toml`)
pub fn get_config_path() -> PathBuf {
    get_data_directory().join("config.toml")
}

/// Create the data and logs directories if missing
pub fn ensure_all_directories() -> Result<(), String> {
    for dir in [get_data_directory(), get_logs_directory()] {
        std::fs::create_dir_all(&dir)
            .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_directory_not_empty() {
        assert!(!get_base_directory().as_os_str().is_empty());
    }

    #[test]
    fn test_data_and_logs_are_subdirs() {
        let base = get_base_directory();
        assert!(get_data_directory().starts_with(&base));
        assert!(get_logs_directory().starts_with(&base));
    }

    #[test]
    fn test_config_path_in_data_dir() {
        let config = get_config_path();
        assert!(config.starts_with(get_data_directory()));
        assert_eq!(config.file_name().unwrap(), "config.toml");
    }
}
