//! # chainweb3-api
//!
//! Typed namespace modules over a [`Provider`]: `eth`, `net`,
//! `personal`, `shh` and `db`, bundled behind the [`Web3`] umbrella
//! client.
//!
//! Every method is one JSON-RPC round trip. Methods return hex-backed
//! [`Quantity`](chainweb3_core::Quantity) values where the wire does,
//! and `Option` where the node answers `null` for "not there yet".
//!
//! ```no_run
//! use chainweb3_api::Web3;
//! use chainweb3_http::HttpProvider;
//!
//! # async fn demo() -> Result<(), chainweb3_core::ProviderError> {
//! let web3 = Web3::new(HttpProvider::for_address("127.0.0.1:8545"));
//! let head = web3.eth.block_number().await?;
//! println!("head: {}", head.to_u64_or_zero());
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod eth;
pub mod net;
pub mod personal;
pub mod shh;
pub mod testing;

use std::sync::Arc;

use serde_json::{json, Value};

use chainweb3_core::error::ProviderError;
use chainweb3_core::hex::encode_byte_string;
use chainweb3_core::provider::Provider;

/// Umbrella client: every namespace module over one shared provider.
pub struct Web3 {
    provider: Arc<dyn Provider>,
    pub eth: eth::Eth,
    pub net: net::Net,
    pub personal: personal::Personal,
    pub shh: shh::Shh,
    pub db: db::Db,
}

impl Web3 {
    /// Build a client over `provider`. The provider is shared by every
    /// namespace module.
    pub fn new(provider: impl Provider) -> Self {
        Self::from_arc(Arc::new(provider))
    }

    /// Build a client over an already-shared provider handle.
    pub fn from_arc(provider: Arc<dyn Provider>) -> Self {
        Self {
            eth: eth::Eth::new(provider.clone()),
            net: net::Net::new(provider.clone()),
            personal: personal::Personal::new(provider.clone()),
            shh: shh::Shh::new(provider.clone()),
            db: db::Db::new(provider.clone()),
            provider,
        }
    }

    /// The shared provider handle.
    pub fn provider(&self) -> &Arc<dyn Provider> {
        &self.provider
    }

    /// `web3_clientVersion`: the node's client version string.
    pub async fn client_version(&self) -> Result<String, ProviderError> {
        self.provider
            .send_request("web3_clientVersion", Value::Null)
            .await?
            .to_text()
    }

    /// `web3_sha3`: Keccak-256 of `data`, which is hex-encoded before
    /// it goes on the wire.
    pub async fn sha3(&self, data: &str) -> Result<String, ProviderError> {
        self.provider
            .send_request("web3_sha3", json!([encode_byte_string(data)]))
            .await?
            .to_text()
    }

    /// Close the shared provider. Every namespace module starts
    /// failing with `Closed` afterwards.
    pub fn close(&self) -> Result<(), ProviderError> {
        self.provider.close()
    }
}

// ─────────────────────────── Tests ───────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockProvider;
    use serde_json::json;

    #[tokio::test]
    async fn client_version_is_a_plain_string() {
        let mock = MockProvider::new();
        mock.expect("web3_clientVersion", Ok(json!("Mist/v0.9.3/darwin/go1.4.1")));

        let web3 = Web3::new(mock);
        assert_eq!(
            web3.client_version().await.unwrap(),
            "Mist/v0.9.3/darwin/go1.4.1"
        );
    }

    #[tokio::test]
    async fn sha3_hex_encodes_its_argument() {
        let mock = Arc::new(MockProvider::new());
        mock.expect(
            "web3_sha3",
            Ok(json!(
                "0x47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad"
            )),
        );

        let web3 = Web3::from_arc(mock.clone());
        let digest = web3.sha3("hello world").await.unwrap();
        assert!(digest.starts_with("0x4717"));

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, json!(["0x68656c6c6f20776f726c64"]));
    }

    #[tokio::test]
    async fn close_propagates_to_every_namespace() {
        let mock = MockProvider::new();
        let web3 = Web3::new(mock);
        web3.close().unwrap();

        let err = web3.net.version().await.unwrap_err();
        assert!(matches!(err, ProviderError::Closed));
    }
}
