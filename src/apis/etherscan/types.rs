//! Etherscan API response types
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope shared by every Etherscan account endpoint
///
/// `result` is a record array on success and a plain string (error text or
/// "Max rate limit reached") otherwise, so it stays untyped here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EtherscanResponse {
    pub status: String,
    pub message: String,
    pub result: Value,
}

impl EtherscanResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "1"
    }

    /// Error text carried in `result` when it is a string
    pub fn result_text(&self) -> Option<&str> {
        self.result.as_str()
    }
}
