//! Configuration utilities - loading, environment overrides and validation
//!
//! The configuration is an explicit value: it is loaded once in `main` and
//! passed into the provider clients and the Telegram front-end.

use super::schemas::Config;
use crate::errors::ConfigError;
use crate::logger::{self, LogTag};
use std::path::Path;

/// Environment variable holding the Etherscan API key
pub const ETHERSCAN_API_KEY_ENV: &str = "ETHERSCAN_API_KEY";
/// Environment variable holding the Telegram bot token
pub const TELEGRAM_BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
/// Environment variable holding the optional DeBank access key
pub const DEBANK_ACCESS_KEY_ENV: &str = "DEBANK_ACCESS_KEY";

/// Load configuration from a TOML file, then apply environment overrides
///
/// A missing file is not an error: defaults are used and the secrets are
/// expected to come from the environment.
pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    let mut config = read_config_file(path)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Parse a config file without touching the environment
pub fn read_config_file(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path.display()),
        );
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let config = toml::from_str::<Config>(&contents).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    logger::debug(
        LogTag::Config,
        &format!("Loaded config from '{}'", path.display()),
    );

    Ok(config)
}

/// Overlay secrets from the environment on top of the file values
///
/// `lookup` is `std::env::var` in production; tests pass a map.
/// Empty or whitespace-only values are ignored.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(key) = get(ETHERSCAN_API_KEY_ENV) {
        config.etherscan.api_key = key;
        logger::debug(LogTag::Config, "Etherscan API key taken from environment");
    }
    if let Some(token) = get(TELEGRAM_BOT_TOKEN_ENV) {
        config.telegram.bot_token = token;
        logger::debug(LogTag::Config, "Telegram bot token taken from environment");
    }
    if let Some(key) = get(DEBANK_ACCESS_KEY_ENV) {
        config.debank.access_key = key;
    }
}

/// Write the configuration as pretty TOML (creates parent directories)
pub fn save_config(config: &Config, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create '{}': {}", parent.display(), e))?;
    }

    let contents = toml::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(path, contents)
        .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))
}

impl Config {
    /// Requirements for the one-shot `--analyze` mode
    pub fn validate_for_cli(&self) -> Result<(), ConfigError> {
        if self.etherscan.api_key.trim().is_empty() {
            return Err(ConfigError::MissingSecret {
                name: "Etherscan API key",
                env_var: ETHERSCAN_API_KEY_ENV,
                key: "etherscan.api_key",
            });
        }
        if self.etherscan.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "etherscan.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.debank.enabled && self.debank.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "debank.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Requirements for running the Telegram bot
    pub fn validate_for_bot(&self) -> Result<(), ConfigError> {
        self.validate_for_cli()?;

        if self.telegram.bot_token.trim().is_empty() {
            return Err(ConfigError::MissingSecret {
                name: "Telegram bot token",
                env_var: TELEGRAM_BOT_TOKEN_ENV,
                key: "telegram.bot_token",
            });
        }
        // Telegram rejects messages above 4096 characters
        if self.telegram.max_message_length == 0 || self.telegram.max_message_length > 4096 {
            return Err(ConfigError::Invalid {
                key: "telegram.max_message_length",
                reason: format!(
                    "{} is outside 1..=4096",
                    self.telegram.max_message_length
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::MalformedEventPolicy;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.etherscan.base_url, "https://api.etherscan.io/api");
        assert_eq!(config.telegram.max_message_length, 4000);
        assert!(config.debank.enabled);
        assert_eq!(
            config.analysis.malformed_event_policy,
            MalformedEventPolicy::Abort
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[etherscan]"));
        assert!(toml_str.contains("[telegram]"));
        assert!(toml_str.contains("malformed_event_policy = \"abort\""));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[etherscan]\napi_key = \"FILEKEY\"\n\n[analysis]\nmalformed_event_policy = \"skip\""
        )
        .unwrap();

        let config = read_config_file(file.path()).unwrap();
        assert_eq!(config.etherscan.api_key, "FILEKEY");
        assert_eq!(config.etherscan.timeout_secs, 20);
        assert_eq!(config.analysis.malformed_event_policy, MalformedEventPolicy::Skip);
        assert_eq!(config.telegram, crate::config::TelegramConfig::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = read_config_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[etherscan\napi_key = ").unwrap();
        assert!(matches!(
            read_config_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = Config::default();
        config.etherscan.api_key = "FILEKEY".to_string();
        let vars = env(&[
            (ETHERSCAN_API_KEY_ENV, "ENVKEY"),
            (TELEGRAM_BOT_TOKEN_ENV, " 123:abc "),
            (DEBANK_ACCESS_KEY_ENV, ""),
        ]);

        apply_env_overrides(&mut config, |k| vars.get(k).cloned());

        assert_eq!(config.etherscan.api_key, "ENVKEY");
        assert_eq!(config.telegram.bot_token, "123:abc");
        assert!(config.debank.access_key.is_empty());
    }

    #[test]
    fn test_validation_fails_fast_on_missing_secrets() {
        let mut config = Config::default();
        match config.validate_for_cli() {
            Err(ConfigError::MissingSecret { env_var, .. }) => {
                assert_eq!(env_var, ETHERSCAN_API_KEY_ENV)
            }
            other => panic!("expected missing Etherscan key, got {:?}", other),
        }

        config.etherscan.api_key = "KEY".to_string();
        assert!(config.validate_for_cli().is_ok());
        match config.validate_for_bot() {
            Err(ConfigError::MissingSecret { env_var, .. }) => {
                assert_eq!(env_var, TELEGRAM_BOT_TOKEN_ENV)
            }
            other => panic!("expected missing bot token, got {:?}", other),
        }

        config.telegram.bot_token = "123:abc".to_string();
        assert!(config.validate_for_bot().is_ok());
    }

    #[test]
    fn test_message_length_bounds() {
        let mut config = Config::default();
        config.etherscan.api_key = "KEY".to_string();
        config.telegram.bot_token = "123:abc".to_string();
        config.telegram.max_message_length = 5000;
        assert!(matches!(
            config.validate_for_bot(),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("config.toml");
        let mut config = Config::default();
        config.debank.enabled = false;

        save_config(&config, &path).unwrap();
        assert_eq!(read_config_file(&path).unwrap(), config);
    }
}
