//! DeBank OpenAPI response types
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `/user/total_balance` body
///
/// Only `total_usd_value` is read; `chain_list` and the rest are ignored.
/// The total is kept untyped so a missing or non-numeric value is reported
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DebankTotalBalance {
    pub total_usd_value: Value,
}

impl DebankTotalBalance {
    pub fn total_usd(&self) -> Option<f64> {
        self.total_usd_value.as_f64().filter(|v| v.is_finite())
    }
}
