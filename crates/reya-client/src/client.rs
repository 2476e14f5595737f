use crate::error::FetchError;
use crate::models::*;
use std::time::Duration;

const BASE_URL: &str = "https://api.reya.xyz";

/// Per-request timeout for the summary endpoint; it is polled far more
/// often than the others and must not stall a render for long.
const SUMMARY_TIMEOUT: Duration = Duration::from_secs(10);

/// Reya Network REST client for market data.
///
/// All endpoints are public GET requests (no authentication) returning a
/// JSON array of flat objects.
#[derive(Clone)]
pub struct ReyaClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReyaClient {
    /// Create a new client against the production API.
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Create a client against a custom base URL (test servers, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Helper to GET an endpoint and decode the body as a JSON array.
    async fn get_array<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        timeout: Option<Duration>,
    ) -> Result<Vec<T>, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::trace!("Reya GET request: {}", url);

        let mut request = self.http.get(&url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|source| FetchError::Transport {
            url: url.clone(),
            source,
        })?;

        // Check HTTP status
        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(FetchError::Status { url, status, body });
        }

        let body = response.text().await.map_err(|source| FetchError::Transport {
            url: url.clone(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }

    /// Fetch all market definitions.
    pub async fn get_market_definitions(&self) -> Result<Vec<RawMarketDefinition>, FetchError> {
        self.get_array("/v2/marketDefinitions", None).await
    }

    /// Fetch all liquidity parameters.
    pub async fn get_liquidity_parameters(&self) -> Result<Vec<RawLiquidityParameter>, FetchError> {
        self.get_array("/v2/liquidityParameters", None).await
    }

    /// Fetch the live summary for every market.
    pub async fn get_market_summaries(&self) -> Result<Vec<RawMarketSummary>, FetchError> {
        self.get_array("/v2/markets/summary", Some(SUMMARY_TIMEOUT))
            .await
    }
}

impl Default for ReyaClient {
    fn default() -> Self {
        Self::new()
    }
}
