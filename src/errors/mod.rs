//! Error types for WalletBot
//!
//! Provider errors are recovered at the boundary of each external call and
//! turned into user-facing text. Configuration errors are fatal at startup.
use thiserror::Error;

// =============================================================================
// PROVIDER ERRORS
// =============================================================================

/// Failure of an upstream HTTP data provider (Etherscan, DeBank)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// Network failure, timeout, non-2xx status or unparseable body
    #[error("{provider} unavailable: {reason}")]
    Unavailable {
        provider: &'static str,
        reason: String,
    },

    /// The call succeeded but carried no records (or an explicit failure status)
    #[error("{provider} returned no data: {message}")]
    DataEmpty {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    pub fn unavailable(provider: &'static str, reason: impl Into<String>) -> Self {
        ProviderError::Unavailable {
            provider,
            reason: reason.into(),
        }
    }

    pub fn data_empty(provider: &'static str, message: impl Into<String>) -> Self {
        ProviderError::DataEmpty {
            provider,
            message: message.into(),
        }
    }

    /// Map a reqwest error, keeping timeouts recognizable in logs
    ///
    /// The request URL is dropped first: it carries the API key in its query.
    pub fn from_reqwest(provider: &'static str, err: reqwest::Error) -> Self {
        let err = err.without_url();
        let reason = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else if err.is_decode() {
            format!("malformed response body: {}", err)
        } else {
            err.to_string()
        };
        ProviderError::unavailable(provider, reason)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, ProviderError::Unavailable { .. })
    }
}

// =============================================================================
// ANALYSIS ERRORS
// =============================================================================

/// A transfer record that cannot be folded into token statistics
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("malformed transfer event #{index}: field '{field}' {reason}")]
    MalformedEvent {
        /// Position of the event in the provider sequence
        index: usize,
        field: &'static str,
        reason: String,
    },
}

// =============================================================================
// CONFIGURATION ERRORS
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing required secret {name}: set the {env_var} environment variable or `{key}` in the config file")]
    MissingSecret {
        name: &'static str,
        env_var: &'static str,
        key: &'static str,
    },

    #[error("invalid configuration value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::unavailable("etherscan", "connection refused");
        assert_eq!(err.to_string(), "etherscan unavailable: connection refused");
        assert!(err.is_unavailable());

        let err = ProviderError::data_empty("etherscan", "No transactions found");
        assert_eq!(err.to_string(), "etherscan returned no data: No transactions found");
        assert!(!err.is_unavailable());
    }

    #[test]
    fn test_malformed_event_display() {
        let err = AnalysisError::MalformedEvent {
            index: 3,
            field: "value",
            reason: "is not an integer: '12abc'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed transfer event #3: field 'value' is not an integer: '12abc'"
        );
    }

    #[test]
    fn test_missing_secret_names_env_var() {
        let err = ConfigError::MissingSecret {
            name: "Etherscan API key",
            env_var: "ETHERSCAN_API_KEY",
            key: "etherscan.api_key",
        };
        let text = err.to_string();
        assert!(text.contains("ETHERSCAN_API_KEY"));
        assert!(text.contains("etherscan.api_key"));
    }
}
