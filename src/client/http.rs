//! HTTP client for the ledger v2 REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::PostTransaction;

use super::{CreateLedgerRequest, LedgerApi, LedgerApiError};

/// Default base URL of a locally running ledger
pub const DEFAULT_BASE_URL: &str = "http://localhost:3068/v2";

/// Timeout for the health probe
const HEALTH_TIMEOUT_SECS: u64 = 5;

/// Maximum number of retries for rate-limited (429) requests.
const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds for rate limiting.
const INITIAL_BACKOFF_MS: u64 = 500;

/// Ledger API client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct HttpLedgerClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpLedgerClient {
    /// Create a client for `base_url` (e.g. `http://localhost:3068/v2`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LedgerApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Build a client from process configuration
    pub fn from_config(config: &Config) -> Result<Self, LedgerApiError> {
        let client = Self::new(&config.ledger_api_url, config.request_timeout)?;
        Ok(match &config.ledger_api_token {
            Some(token) => client.with_token(token.clone()),
            None => client,
        })
    }

    /// Send a bearer token with every request
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Check if response is successful, returning a classified error if not.
    async fn check_response(response: Response) -> Result<Response, LedgerApiError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(LedgerApiError::from_status(status, &body))
    }

    async fn post<B: Serialize + Sync>(&self, url: &str, body: &B) -> Result<Response, LedgerApiError> {
        let mut retries = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            let mut request = self.client.post(url).json(body);
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }
            let response = request.send().await?;

            match Self::check_response(response).await {
                Err(LedgerApiError::RateLimited) if retries < MAX_RATE_LIMIT_RETRIES => {
                    retries += 1;
                    warn!(url = url, retry = retries, backoff_ms = backoff_ms, "Rate limited, backing off");
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms *= 2;
                }
                other => return other,
            }
        }
    }
}

#[async_trait]
impl LedgerApi for HttpLedgerClient {
    async fn health_check(&self) -> bool {
        let mut request = self
            .client
            .get(self.url("_/info"))
            .timeout(Duration::from_secs(HEALTH_TIMEOUT_SECS));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        match request.send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!(error = %e, base_url = %self.base_url, "Ledger health check failed");
                false
            }
        }
    }

    async fn create_ledger(&self, ledger: &str, request: &CreateLedgerRequest) -> Result<(), LedgerApiError> {
        debug!(ledger = ledger, "Creating ledger");
        self.post(&self.url(ledger), request).await?;
        Ok(())
    }

    async fn create_transaction(&self, ledger: &str, transaction: &PostTransaction) -> Result<(), LedgerApiError> {
        debug!(ledger = ledger, reference = %transaction.reference, "Creating transaction");
        self.post(&self.url(&format!("{ledger}/transactions")), transaction)
            .await?;
        Ok(())
    }
}
