//! DeBank API client for portfolio valuation
//!
//! API Documentation: https://docs.open.debank.com/
//!
//! Endpoints implemented:
//! 1. /user/total_balance?id={address} - Total USD value across chains
pub mod types;

pub use self::types::DebankTotalBalance;

use crate::analysis::ValuationSource;
use crate::apis::client::HttpClient;
use crate::config::DebankConfig;
use crate::errors::ProviderError;
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use reqwest::RequestBuilder;

pub const PROVIDER_NAME: &str = "DeBank";

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

pub struct DebankClient {
    http_client: HttpClient,
    base_url: String,
    access_key: Option<String>,
}

impl DebankClient {
    pub fn new(base_url: &str, access_key: Option<&str>, timeout_secs: u64) -> Result<Self, String> {
        Ok(Self {
            http_client: HttpClient::new(timeout_secs)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key: access_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
        })
    }

    pub fn from_config(config: &DebankConfig) -> Result<Self, String> {
        Self::new(
            &config.base_url,
            Some(config.access_key.as_str()),
            config.timeout_secs,
        )
    }

    pub fn has_access_key(&self) -> bool {
        self.access_key.is_some()
    }

    pub fn total_balance_url(&self) -> String {
        format!("{}/user/total_balance", self.base_url)
    }

    /// `AccessKey` header is sent only when a key is configured
    pub fn total_balance_request(&self, address: &str) -> RequestBuilder {
        let request = self
            .http_client
            .client()
            .get(self.total_balance_url())
            .query(&[("id", address)]);
        match &self.access_key {
            Some(key) => request.header("AccessKey", key),
            None => request,
        }
    }

    pub async fn fetch_total_balance(
        &self,
        address: &str,
    ) -> Result<DebankTotalBalance, ProviderError> {
        let request = self.total_balance_request(address);
        self.http_client
            .send_json(PROVIDER_NAME, "debank.total_balance", request)
            .await
    }

    /// Total portfolio value in USD
    pub async fn fetch_total_usd(&self, address: &str) -> Result<f64, ProviderError> {
        let balance = self.fetch_total_balance(address).await?;
        let total = total_usd_from(&balance)?;
        logger::debug(
            LogTag::Api,
            &format!("DeBank total for {}: ${:.2}", address, total),
        );
        Ok(total)
    }
}

pub fn total_usd_from(balance: &DebankTotalBalance) -> Result<f64, ProviderError> {
    balance.total_usd().ok_or_else(|| {
        ProviderError::unavailable(
            PROVIDER_NAME,
            format!("total_usd_value missing or not a number: {}", balance.total_usd_value),
        )
    })
}

#[async_trait]
impl ValuationSource for DebankClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_total_usd(&self, address: &str) -> Result<f64, ProviderError> {
        DebankClient::fetch_total_usd(self, address).await
    }
}
