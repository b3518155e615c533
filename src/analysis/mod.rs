//! Wallet analysis
//!
//! `WalletAnalyzer` fetches a wallet's transfer history and portfolio value
//! concurrently, folds the transfers into per-token statistics and renders
//! one report string.

pub mod aggregator;
pub mod report;
pub mod sources;
pub mod types;

pub use aggregator::{parse_event, scaled_amount, ParsedTransfer, TokenAggregator, TokenLedger};
pub use report::{
    format_amount, format_valuation, html_escape, render_report, round2, strip_html,
    ANALYSIS_FAILED_MESSAGE, NO_DATA_MESSAGE, VALUATION_UNAVAILABLE_MESSAGE,
};
pub use sources::{TransferSource, ValuationSource};
pub use types::{Direction, MalformedEventPolicy, TokenStats, TransferEvent};

use crate::apis::{DebankClient, EtherscanClient};
use crate::config::Config;
use crate::logger::{self, LogTag};
use std::sync::Arc;

pub struct WalletAnalyzer {
    transfers: Arc<dyn TransferSource>,
    valuation: Option<Arc<dyn ValuationSource>>,
    aggregator: TokenAggregator,
}

impl WalletAnalyzer {
    pub fn new(
        transfers: Arc<dyn TransferSource>,
        valuation: Option<Arc<dyn ValuationSource>>,
        aggregator: TokenAggregator,
    ) -> Self {
        Self {
            transfers,
            valuation,
            aggregator,
        }
    }

    /// Etherscan for transfers, DeBank for valuation unless disabled
    pub fn from_config(config: &Config) -> Result<Self, String> {
        let transfers: Arc<dyn TransferSource> =
            Arc::new(EtherscanClient::from_config(&config.etherscan)?);

        let valuation: Option<Arc<dyn ValuationSource>> = if config.debank.enabled {
            Some(Arc::new(DebankClient::from_config(&config.debank)?))
        } else {
            None
        };

        let aggregator = TokenAggregator::new(config.analysis.malformed_event_policy);

        logger::debug(
            LogTag::Analysis,
            &format!(
                "Analyzer ready: transfers={}, valuation={}, policy={:?}",
                transfers.name(),
                valuation.as_ref().map(|v| v.name()).unwrap_or("disabled"),
                aggregator.policy()
            ),
        );

        Ok(Self::new(transfers, valuation, aggregator))
    }

    pub fn has_valuation(&self) -> bool {
        self.valuation.is_some()
    }

    /// Full report for `address`
    ///
    /// Provider failures never escape: they surface as the fixed no-data or
    /// valuation-unavailable lines.
    pub async fn analyze(&self, address: &str) -> String {
        let address = address.trim();
        logger::info(LogTag::Analysis, &format!("Analyzing {}", address));

        let valuation = async {
            match &self.valuation {
                Some(source) => Some(source.valuation_line(address).await),
                None => None,
            }
        };
        let (events, valuation_line) = tokio::join!(self.transfers.fetch(address), valuation);

        let tokens_report = self.aggregator.aggregate(address, &events);
        match valuation_line {
            Some(line) => format!("{}\n\n{}", tokens_report, line),
            None => tokens_report,
        }
    }
}
