//! Provider seams for wallet analysis
//!
//! The analyzer only sees these traits, so any explorer or portfolio
//! service (or an in-process double) can drive it.
use super::report::{format_valuation, VALUATION_UNAVAILABLE_MESSAGE};
use super::types::TransferEvent;
use crate::errors::ProviderError;
use crate::logger::{self, LogTag};
use async_trait::async_trait;

/// Source of a wallet's token transfer history
#[async_trait]
pub trait TransferSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Transfers in provider order, with failure causes kept apart
    async fn fetch_transfers(&self, address: &str) -> Result<Vec<TransferEvent>, ProviderError>;

    /// Degrading form of `fetch_transfers`: every failure becomes an empty list
    async fn fetch(&self, address: &str) -> Vec<TransferEvent> {
        match self.fetch_transfers(address).await {
            Ok(events) => events,
            Err(e @ ProviderError::DataEmpty { .. }) => {
                logger::info(LogTag::Api, &format!("{} for {}", e, address));
                Vec::new()
            }
            Err(e) => {
                logger::warning(LogTag::Api, &format!("{} for {}", e, address));
                Vec::new()
            }
        }
    }
}

/// Source of a wallet's total portfolio value in USD
#[async_trait]
pub trait ValuationSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_total_usd(&self, address: &str) -> Result<f64, ProviderError>;

    /// One report line; failures turn into `VALUATION_UNAVAILABLE_MESSAGE`
    async fn valuation_line(&self, address: &str) -> String {
        match self.fetch_total_usd(address).await {
            Ok(total) => format_valuation(self.name(), total),
            Err(e) => {
                logger::warning(LogTag::Api, &format!("{} for {}", e, address));
                VALUATION_UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }
}
