//! The `db` namespace: the node's deprecated key-value store.
//!
//! Kept for parity with older nodes; newer ones answer these with a
//! method-not-found error object.

use std::sync::Arc;

use serde_json::json;

use chainweb3_core::error::ProviderError;
use chainweb3_core::hex::encode_byte_string;
use chainweb3_core::provider::Provider;
use chainweb3_core::types::ByteString;

/// The `db_*` method family.
pub struct Db {
    provider: Arc<dyn Provider>,
}

impl Db {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    /// `db_putString`: store `value` under `database`/`key`.
    pub async fn put_string(
        &self,
        database: &str,
        key: &str,
        value: &str,
    ) -> Result<bool, ProviderError> {
        self.provider
            .send_request("db_putString", json!([database, key, value]))
            .await?
            .to_bool()
    }

    /// `db_getString`: the value stored under `database`/`key`.
    pub async fn get_string(&self, database: &str, key: &str) -> Result<String, ProviderError> {
        self.provider
            .send_request("db_getString", json!([database, key]))
            .await?
            .to_text()
    }

    /// `db_putHex`: store `data` hex-encoded under `database`/`key`.
    pub async fn put_hex(
        &self,
        database: &str,
        key: &str,
        data: &str,
    ) -> Result<bool, ProviderError> {
        self.provider
            .send_request(
                "db_putHex",
                json!([database, key, encode_byte_string(data)]),
            )
            .await?
            .to_bool()
    }

    /// `db_getHex`: the hex data stored under `database`/`key`, still
    /// in wire form.
    pub async fn get_hex(&self, database: &str, key: &str) -> Result<ByteString, ProviderError> {
        self.provider
            .send_request("db_getHex", json!([database, key]))
            .await?
            .to_byte_string()
    }
}

// ─────────────────────────── Tests ───────────────────────────
