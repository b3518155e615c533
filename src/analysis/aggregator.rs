//! Token-flow aggregation
//!
//! Folds a wallet's transfer history into per-symbol inflow/outflow totals.
//! Symbols keep first-seen order so the report follows the provider's
//! chronological listing.

use super::report::{render_report, ANALYSIS_FAILED_MESSAGE, NO_DATA_MESSAGE};
use super::types::{Direction, MalformedEventPolicy, TokenStats, TransferEvent};
use crate::errors::AnalysisError;
use crate::logger::{self, LogTag};
use std::collections::HashMap;

/// A transfer event after validation
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTransfer {
    pub symbol: String,
    pub direction: Direction,
    /// `value / 10^tokenDecimal`
    pub amount: f64,
}

/// `value / 10^decimals` for a digit-string value
///
/// The value is parsed straight into `f64`: explorer values routinely
/// exceed `u128` for 18-decimal tokens.
pub fn scaled_amount(value: &str, decimals: u8) -> f64 {
    let raw: f64 = value.parse().unwrap_or(0.0);
    if decimals == 0 {
        raw
    } else {
        raw / 10f64.powi(decimals as i32)
    }
}

fn required<'a>(
    index: usize,
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, AnalysisError> {
    value.as_deref().ok_or_else(|| AnalysisError::MalformedEvent {
        index,
        field,
        reason: "is missing".to_string(),
    })
}

/// Validate one event and resolve its direction against `address_lower`
pub fn parse_event(
    index: usize,
    event: &TransferEvent,
    address_lower: &str,
) -> Result<ParsedTransfer, AnalysisError> {
    let symbol = required(index, "tokenSymbol", &event.token_symbol)?;
    let value = required(index, "value", &event.value)?.trim();
    let decimals = required(index, "tokenDecimal", &event.token_decimal)?.trim();
    let to = required(index, "to", &event.to)?;

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AnalysisError::MalformedEvent {
            index,
            field: "value",
            reason: format!("is not an integer: '{}'", value),
        });
    }

    let decimals: u8 = decimals.parse().map_err(|_| AnalysisError::MalformedEvent {
        index,
        field: "tokenDecimal",
        reason: format!("is not an integer in 0..=255: '{}'", decimals),
    })?;

    let direction = if to.to_lowercase() == address_lower {
        Direction::In
    } else {
        Direction::Out
    };

    Ok(ParsedTransfer {
        symbol: symbol.to_string(),
        direction,
        amount: scaled_amount(value, decimals),
    })
}

/// Per-symbol totals in first-seen order
#[derive(Debug, Clone, Default)]
pub struct TokenLedger {
    entries: Vec<(String, TokenStats)>,
    index: HashMap<String, usize>,
    skipped: Vec<AnalysisError>,
}

impl TokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `events` for `address`
    ///
    /// With `MalformedEventPolicy::Abort` the first bad event is returned as
    /// the error; with `Skip` it is recorded in `skipped()` and folding goes on.
    pub fn fold(
        address: &str,
        events: &[TransferEvent],
        policy: MalformedEventPolicy,
    ) -> Result<Self, AnalysisError> {
        let address_lower = address.to_lowercase();
        let mut ledger = Self::new();

        for (index, event) in events.iter().enumerate() {
            match parse_event(index, event, &address_lower) {
                Ok(transfer) => {
                    logger::verbose(
                        LogTag::Analysis,
                        &format!(
                            "#{} {} {:?} {}",
                            index, transfer.symbol, transfer.direction, transfer.amount
                        ),
                    );
                    ledger.record(&transfer.symbol, transfer.direction, transfer.amount);
                }
                Err(e) => match policy {
                    MalformedEventPolicy::Abort => return Err(e),
                    MalformedEventPolicy::Skip => {
                        logger::warning(LogTag::Analysis, &format!("Skipping {}", e));
                        ledger.skipped.push(e);
                    }
                },
            }
        }

        logger::debug(
            LogTag::Analysis,
            &format!(
                "Folded {} events into {} tokens ({} skipped)",
                events.len(),
                ledger.len(),
                ledger.skipped.len()
            ),
        );

        Ok(ledger)
    }

    /// Add `amount` to `symbol`'s totals, creating the entry on first sight
    pub fn record(&mut self, symbol: &str, direction: Direction, amount: f64) {
        let slot = match self.index.get(symbol) {
            Some(&i) => i,
            None => {
                self.entries.push((symbol.to_string(), TokenStats::default()));
                self.index.insert(symbol.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        self.entries[slot].1.add(direction, amount);
    }

    pub fn get(&self, symbol: &str) -> Option<&TokenStats> {
        self.index.get(symbol).map(|&i| &self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenStats)> {
        self.entries.iter().map(|(symbol, stats)| (symbol.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Events dropped under `MalformedEventPolicy::Skip`
    pub fn skipped(&self) -> &[AnalysisError] {
        &self.skipped
    }
}

/// Turns a transfer list into the token statistics report
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenAggregator {
    policy: MalformedEventPolicy,
}

impl TokenAggregator {
    pub fn new(policy: MalformedEventPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MalformedEventPolicy {
        self.policy
    }

    /// Render the report for `address`
    ///
    /// An empty list yields `NO_DATA_MESSAGE` (provider failure and "no
    /// transfers" look the same here). An aborted fold yields
    /// `ANALYSIS_FAILED_MESSAGE`.
    pub fn aggregate(&self, address: &str, events: &[TransferEvent]) -> String {
        if events.is_empty() {
            return NO_DATA_MESSAGE.to_string();
        }

        match TokenLedger::fold(address, events, self.policy) {
            Ok(ledger) if ledger.is_empty() => NO_DATA_MESSAGE.to_string(),
            Ok(ledger) => render_report(&ledger),
            Err(e) => {
                logger::error(
                    LogTag::Analysis,
                    &format!("Token analysis aborted for {}: {}", address, e),
                );
                ANALYSIS_FAILED_MESSAGE.to_string()
            }
        }
    }
}
