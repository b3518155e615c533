//! Configuration schemas - all config structures defined once with defaults
//!
//! Each section maps to a `[section]` table in `config.toml`. Secrets may be
//! left empty in the file and supplied through the environment instead.
use crate::analysis::MalformedEventPolicy;
use crate::config_struct;

// ============================================================================
// ETHERSCAN (token transfer provider)
// ============================================================================

config_struct! {
    /// Block explorer API used to list ERC-20 transfers
    pub struct EtherscanConfig {
        /// API key (overridden by ETHERSCAN_API_KEY)
        api_key: String = String::new(),
        /// Endpoint accepting `module=account&action=tokentx`
        base_url: String = "https://api.etherscan.io/api".to_string(),
        timeout_secs: u64 = 20,
    }
}

// ============================================================================
// DEBANK (portfolio valuation provider)
// ============================================================================

config_struct! {
    /// Portfolio valuation API queried for the closing report line
    pub struct DebankConfig {
        /// Append the portfolio value line to reports
        enabled: bool = true,
        base_url: String = "https://openapi.debank.com/v1".to_string(),
        /// Sent as the `AccessKey` header when non-empty (overridden by DEBANK_ACCESS_KEY)
        access_key: String = String::new(),
        timeout_secs: u64 = 20,
    }
}

// ============================================================================
// TELEGRAM
// ============================================================================

config_struct! {
    /// Telegram bot front-end
    pub struct TelegramConfig {
        /// Bot token from @BotFather (overridden by TELEGRAM_BOT_TOKEN)
        bot_token: String = String::new(),
        /// Reports longer than this are split across several messages
        max_message_length: usize = 4000,
    }
}

// ============================================================================
// ANALYSIS
// ============================================================================

config_struct! {
    /// Token aggregation behavior
    pub struct AnalysisConfig {
        /// `abort` fails the whole report on a malformed transfer, `skip` drops it
        malformed_event_policy: MalformedEventPolicy = MalformedEventPolicy::Abort,
    }
}

// ============================================================================
// ROOT
// ============================================================================

config_struct! {
    /// Complete WalletBot configuration
    pub struct Config {
        etherscan: EtherscanConfig = EtherscanConfig::default(),
        debank: DebankConfig = DebankConfig::default(),
        telegram: TelegramConfig = TelegramConfig::default(),
        analysis: AnalysisConfig = AnalysisConfig::default(),
    }
}
