//! External data provider clients
pub mod client;
pub mod debank;
pub mod etherscan;

pub use client::HttpClient;
pub use debank::DebankClient;
pub use etherscan::EtherscanClient;
