//! Etherscan API client for ERC-20 transfer history
//!
//! API Documentation: https://docs.etherscan.io/
//!
//! Endpoints implemented:
//! 1. ?module=account&action=tokentx - Token transfer events for an address
pub mod types;

pub use self::types::EtherscanResponse;

use crate::analysis::{TransferEvent, TransferSource};
use crate::apis::client::HttpClient;
use crate::config::EtherscanConfig;
use crate::errors::ProviderError;
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use reqwest::RequestBuilder;

pub const PROVIDER_NAME: &str = "Etherscan";

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

pub struct EtherscanClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl EtherscanClient {
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self, String> {
        Ok(Self {
            http_client: HttpClient::new(timeout_secs)?,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config(config: &EtherscanConfig) -> Result<Self, String> {
        Self::new(&config.base_url, &config.api_key, config.timeout_secs)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `tokentx` query for `address`, ascending by block
    pub fn transfers_request(&self, address: &str) -> RequestBuilder {
        self.http_client.client().get(&self.base_url).query(&[
            ("module", "account"),
            ("action", "tokentx"),
            ("address", address),
            ("sort", "asc"),
            ("apikey", self.api_key.as_str()),
        ])
    }

    /// Full ERC-20 transfer history of `address`, oldest first
    ///
    /// Single request: no pagination, no retries.
    pub async fn fetch_token_transfers(
        &self,
        address: &str,
    ) -> Result<Vec<TransferEvent>, ProviderError> {
        let request = self.transfers_request(address);

        let response: EtherscanResponse = self
            .http_client
            .send_json(PROVIDER_NAME, "etherscan.tokentx", request)
            .await?;

        let events = events_from_response(response)?;
        logger::debug(
            LogTag::Api,
            &format!("Etherscan returned {} transfers for {}", events.len(), address),
        );
        Ok(events)
    }
}

/// Unwrap the envelope into transfer events
///
/// A failure status or an empty list is `DataEmpty`; a success status whose
/// `result` is not a record array is `Unavailable`.
pub fn events_from_response(
    response: EtherscanResponse,
) -> Result<Vec<TransferEvent>, ProviderError> {
    if !response.is_ok() {
        let detail = match response.result_text() {
            Some(text) if !text.is_empty() => format!("{} ({})", response.message, text),
            _ => response.message.clone(),
        };
        return Err(ProviderError::data_empty(PROVIDER_NAME, detail));
    }

    let events: Vec<TransferEvent> = serde_json::from_value(response.result).map_err(|e| {
        ProviderError::unavailable(PROVIDER_NAME, format!("unexpected result shape: {}", e))
    })?;

    if events.is_empty() {
        return Err(ProviderError::data_empty(PROVIDER_NAME, "no transfers"));
    }
    Ok(events)
}

#[async_trait]
impl TransferSource for EtherscanClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_transfers(&self, address: &str) -> Result<Vec<TransferEvent>, ProviderError> {
        self.fetch_token_transfers(address).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> EtherscanResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_success_keeps_provider_order() {
        let resp = response(
            r#"{"status":"1","message":"OK","result":[
                {"tokenSymbol":"USDT","value":"1000000","tokenDecimal":"6","to":"0xabc"},
                {"tokenSymbol":"DAI","value":"5","tokenDecimal":"0","to":"0xdef"}
            ]}"#,
        );
        let events = events_from_response(resp).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].token_symbol.as_deref(), Some("USDT"));
        assert_eq!(events[1].token_symbol.as_deref(), Some("DAI"));
    }

    #[test]
    fn test_failure_status_is_data_empty() {
        let resp = response(r#"{"status":"0","message":"NOTOK","result":"Invalid API Key"}"#);
        match events_from_response(resp) {
            Err(ProviderError::DataEmpty { message, .. }) => {
                assert_eq!(message, "NOTOK (Invalid API Key)");
            }
            other => panic!("expected DataEmpty, got {:?}", other),
        }
    }

    #[test]
    fn test_no_transactions_is_data_empty() {
        let resp = response(r#"{"status":"0","message":"No transactions found","result":[]}"#);
        assert!(matches!(
            events_from_response(resp),
            Err(ProviderError::DataEmpty { .. })
        ));

        let resp = response(r#"{"status":"1","message":"OK","result":[]}"#);
        assert!(matches!(
            events_from_response(resp),
            Err(ProviderError::DataEmpty { .. })
        ));
    }

    #[test]
    fn test_success_with_string_result_is_unavailable() {
        let resp = response(r#"{"status":"1","message":"OK","result":"oops"}"#);
        assert!(events_from_response(resp).unwrap_err().is_unavailable());
    }

    #[tokio::test]
    async fn test_network_error_degrades_to_empty() {
        let client = EtherscanClient::new("http://127.0.0.1:9/api", "key", 2).unwrap();

        let err = client.fetch_transfers("0xabc").await.unwrap_err();
        assert!(err.is_unavailable());

        let events = client.fetch("0xabc").await;
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_network_error_hides_api_key() {
        let client = EtherscanClient::new("http://127.0.0.1:9/api", "SECRETKEY123", 2).unwrap();

        let err = client.fetch_transfers("0xabc").await.unwrap_err();
        assert!(err.is_unavailable());
        assert!(!err.to_string().contains("SECRETKEY123"));
        assert!(!format!("{:?}", err).contains("SECRETKEY123"));
    }

    #[test]
    fn test_transfers_request_query() {
        let client = EtherscanClient::new("https://api.etherscan.io/api", "KEY", 2).unwrap();
        let request = client.transfers_request("0xAbC").build().unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().path(), "/api");
        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let expected = [
            ("module", "account"),
            ("action", "tokentx"),
            ("address", "0xAbC"),
            ("sort", "asc"),
            ("apikey", "KEY"),
        ];
        assert_eq!(pairs.len(), expected.len());
        for ((k, v), (ek, ev)) in pairs.iter().zip(expected.iter()) {
            assert_eq!(k, ek);
            assert_eq!(v, ev);
        }
    }
}
