//! Domain types for token-flow analysis

use serde::{Deserialize, Serialize};

/// One ERC-20 transfer record as returned by the block explorer
///
/// Every field is optional on the wire. Required fields are checked when
/// the event is folded, so one bad record never fails the whole fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferEvent {
    /// Grouping key (not unique across contracts)
    pub token_symbol: Option<String>,
    /// Raw integer magnitude, string-encoded
    pub value: Option<String>,
    /// Decimal places used to scale `value`, string-encoded
    pub token_decimal: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub hash: Option<String>,
    pub time_stamp: Option<String>,
    pub block_number: Option<String>,
    pub contract_address: Option<String>,
    pub token_name: Option<String>,
}

impl TransferEvent {
    /// Minimal record with only the fields the aggregator reads
    pub fn new(symbol: &str, value: &str, decimals: &str, to: &str) -> Self {
        Self {
            token_symbol: Some(symbol.to_string()),
            value: Some(value.to_string()),
            token_decimal: Some(decimals.to_string()),
            to: Some(to.to_string()),
            ..Default::default()
        }
    }
}

/// Direction of a transfer relative to the analyzed wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    /// Anything not addressed to the wallet
    Out,
}

/// Running totals for one token symbol
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TokenStats {
    pub inflow: f64,
    pub outflow: f64,
}

impl TokenStats {
    pub fn add(&mut self, direction: Direction, amount: f64) {
        match direction {
            Direction::In => self.inflow += amount,
            Direction::Out => self.outflow += amount,
        }
    }

    /// `outflow - inflow` on the unrounded sums (a proxy, not realized PNL)
    pub fn pnl(&self) -> f64 {
        self.outflow - self.inflow
    }
}

/// What to do with a transfer record that cannot be parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedEventPolicy {
    /// The whole report fails
    #[default]
    Abort,
    /// The record is logged and left out of the totals
    Skip,
}
