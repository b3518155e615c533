//! Base HTTP client shared by the provider adapters
use crate::errors::ProviderError;
use crate::logger::{self, LogTag};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

/// HTTP client wrapper with a per-request timeout
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(timeout_secs: u64) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send `request` and decode a 2xx JSON body
    ///
    /// Transport errors, non-2xx statuses and undecodable bodies all map to
    /// `ProviderError::Unavailable`.
    pub async fn send_json<T>(
        &self,
        provider: &'static str,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        let start = Instant::now();
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(provider, e))?;
        let elapsed = start.elapsed().as_millis();
        let status = response.status();

        logger::debug(
            LogTag::Api,
            &format!("{} HTTP {} in {}ms", endpoint, status.as_u16(), elapsed),
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            return Err(ProviderError::unavailable(
                provider,
                format!("HTTP {}: {}", status, snippet),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::from_reqwest(provider, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_timeout() {
        let client = HttpClient::new(7).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(7));
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        let client = HttpClient::new(2).unwrap();
        let request = client.client().get("http://127.0.0.1:9/");
        let result: Result<serde_json::Value, _> =
            client.send_json("Test", "test.closed_port", request).await;

        assert!(result.unwrap_err().is_unavailable());
    }
}
