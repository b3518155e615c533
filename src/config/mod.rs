//! Configuration for WalletBot
//!
//! Sections are declared with `config_struct!` (defaults embedded), read
//! from TOML and overlaid with secrets from the environment.

mod macros;
mod schemas;
mod utils;

pub use schemas::{AnalysisConfig, Config, DebankConfig, EtherscanConfig, TelegramConfig};
pub use utils::{
    apply_env_overrides, load_config_from_path, read_config_file, save_config,
    DEBANK_ACCESS_KEY_ENV, ETHERSCAN_API_KEY_ENV, TELEGRAM_BOT_TOKEN_ENV,
};
