//! HTTP JSON-RPC provider backed by `reqwest`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use chainweb3_core::error::ProviderError;
use chainweb3_core::provider::Provider;
use chainweb3_core::request::{JsonRpcRequest, JsonRpcResponse};
use chainweb3_core::result::RawResult;

/// Configuration for [`HttpProvider`].
#[derive(Debug, Clone)]
pub struct HttpProviderConfig {
    /// Node endpoint as `host:port`, without a scheme.
    pub address: String,
    /// Deadline for the whole round trip.
    pub timeout: Duration,
    /// Use `https` instead of `http`.
    pub secure: bool,
}

impl HttpProviderConfig {
    /// Config for `address` with a timeout in seconds.
    pub fn new(address: impl Into<String>, timeout_secs: u64, secure: bool) -> Self {
        Self {
            address: address.into(),
            timeout: Duration::from_secs(timeout_secs),
            secure,
        }
    }
}

impl Default for HttpProviderConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:8545".to_owned(),
            timeout: Duration::from_secs(10),
            secure: false,
        }
    }
}

/// HTTP JSON-RPC provider.
///
/// The provider is cheap to share: `reqwest::Client` is internally
/// reference-counted and every call builds its own request.
pub struct HttpProvider {
    url: String,
    http: reqwest::Client,
    timeout_ms: u64,
    closed: AtomicBool,
}

impl HttpProvider {
    /// Build a provider for the configured endpoint.
    pub fn new(config: HttpProviderConfig) -> Self {
        let scheme = if config.secure { "https" } else { "http" };
        let url = format!("{scheme}://{}", config.address);
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to build reqwest client");

        Self {
            url,
            http,
            timeout_ms: config.timeout.as_millis() as u64,
            closed: AtomicBool::new(false),
        }
    }

    /// Provider for `host:port` over plain http with the default
    /// 10-second timeout.
    pub fn for_address(address: impl Into<String>) -> Self {
        Self::new(HttpProviderConfig {
            address: address.into(),
            ..HttpProviderConfig::default()
        })
    }

    fn classify(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout {
                ms: self.timeout_ms,
            }
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl Provider for HttpProvider {
    async fn send_request(
        &self,
        method: &str,
        params: Value,
    ) -> Result<RawResult, ProviderError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(ProviderError::Closed);
        }

        let request = JsonRpcRequest::new(method, params);
        let body = request.to_body()?;

        tracing::debug!(url = %self.url, method = %request.method, "sending JSON-RPC request");

        let response = self
            .http
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, status = status.as_u16(), "non-success HTTP status");
            return Err(ProviderError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;
        let decoded: JsonRpcResponse =
            serde_json::from_slice(&bytes).map_err(ProviderError::Deserialization)?;

        Ok(RawResult::from_response(decoded))
    }

    fn close(&self) -> Result<(), ProviderError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

// ─────────────────────────── Tests ───────────────────────────
