//! The provider capability: one JSON-RPC endpoint behind one trait.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ProviderError;
use crate::result::RawResult;

/// A JSON-RPC transport endpoint.
///
/// Implementations are `Send + Sync`; a single provider instance is
/// shared by every namespace module of a client session and may be
/// driven from multiple tasks at once. Each call is one independent
/// request and response; nothing is cached or retried.
///
/// The trait is object-safe and is normally held as
/// `Arc<dyn Provider>`.
#[async_trait]
pub trait Provider: Send + Sync + 'static {
    /// Send one request and hand back the decoded raw result.
    ///
    /// `params` is the positional parameter value, `Value::Null` when
    /// the method takes none. The future resolves only once the full
    /// round trip is done or has failed.
    async fn send_request(&self, method: &str, params: Value) -> Result<RawResult, ProviderError>;

    /// Release transport resources. Safe to call more than once; after
    /// the first call every `send_request` fails with
    /// [`ProviderError::Closed`].
    fn close(&self) -> Result<(), ProviderError>;

    /// The endpoint this provider talks to (URL or socket path).
    fn endpoint(&self) -> &str;
}

impl dyn Provider {
    /// One-shot typed call: decode the result payload straight into
    /// `T`, bypassing the per-shape accessors.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, ProviderError> {
        self.send_request(method, params).await?.to_object()
    }
}

// ─────────────────────────── Tests ───────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Arc;

    struct CannedProvider {
        result: Value,
    }

    #[async_trait]
    impl Provider for CannedProvider {
        async fn send_request(
            &self,
            _method: &str,
            _params: Value,
        ) -> Result<RawResult, ProviderError> {
            Ok(RawResult::from_value(self.result.clone()))
        }

        fn close(&self) -> Result<(), ProviderError> {
            Ok(())
        }

        fn endpoint(&self) -> &str {
            "canned"
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Version {
        network: String,
    }

    #[tokio::test]
    async fn typed_request_through_a_trait_object() {
        let provider: Arc<dyn Provider> = Arc::new(CannedProvider {
            result: json!({"network": "1"}),
        });
        let version: Version = provider.request("net_version", Value::Null).await.unwrap();
        assert_eq!(version, Version { network: "1".to_owned() });
    }
}
