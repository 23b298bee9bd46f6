//! The `net` namespace: network status queries.

use std::sync::Arc;

use serde_json::Value;

use chainweb3_core::error::ProviderError;
use chainweb3_core::provider::Provider;
use chainweb3_core::types::Quantity;

/// The `net_*` method family.
pub struct Net {
    provider: Arc<dyn Provider>,
}

impl Net {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    /// `net_listening`: whether the node accepts network connections.
    pub async fn listening(&self) -> Result<bool, ProviderError> {
        self.provider
            .send_request("net_listening", Value::Null)
            .await?
            .to_bool()
    }

    /// `net_peerCount`: number of connected peers.
    pub async fn peer_count(&self) -> Result<Quantity, ProviderError> {
        self.provider
            .send_request("net_peerCount", Value::Null)
            .await?
            .to_quantity()
    }

    /// `net_version`: the network id as a decimal string.
    pub async fn version(&self) -> Result<String, ProviderError> {
        self.provider
            .send_request("net_version", Value::Null)
            .await?
            .to_text()
    }
}

// ─────────────────────────── Tests ───────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockProvider;
    use crate::Web3;
    use serde_json::json;

    #[tokio::test]
    async fn a_listening_node_answers_true() {
        let mock = MockProvider::new();
        mock.expect("net_listening", Ok(json!(true)));

        let web3 = Web3::new(mock);
        assert!(web3.net.listening().await.unwrap());
    }

    #[tokio::test]
    async fn peer_count_stays_in_wire_form() {
        let mock = MockProvider::new();
        mock.expect("net_peerCount", Ok(json!("0x2")));

        let web3 = Web3::new(mock);
        let peers = web3.net.peer_count().await.unwrap();
        assert_eq!(peers.as_hex(), "0x2");
        assert_eq!(peers.to_u64().unwrap(), 2);
    }

    #[tokio::test]
    async fn version_is_a_decimal_string() {
        let mock = MockProvider::new();
        mock.expect("net_version", Ok(json!("1")));

        let web3 = Web3::new(mock);
        assert_eq!(web3.net.version().await.unwrap(), "1");
    }

    #[tokio::test]
    async fn a_number_shaped_version_is_unparseable() {
        let mock = MockProvider::new();
        mock.expect("net_version", Ok(json!(1)));

        let web3 = Web3::new(mock);
        let err = web3.net.version().await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::UnparseableInterface { expected: "string", .. }
        ));
    }
}
