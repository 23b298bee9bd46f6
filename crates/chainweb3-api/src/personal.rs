//! The `personal` namespace: node-managed account operations.
//!
//! These methods only work against a node that exposes the personal
//! API and holds the keys itself. Passphrases travel in clear text
//! inside the request body; keep the transport local or TLS.

use std::sync::Arc;

use serde_json::{json, Value};

use chainweb3_core::dto::TransactionRequest;
use chainweb3_core::error::ProviderError;
use chainweb3_core::provider::Provider;

/// The `personal_*` method family.
pub struct Personal {
    provider: Arc<dyn Provider>,
}

impl Personal {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    /// `personal_listAccounts`: addresses of the node's keystore.
    pub async fn list_accounts(&self) -> Result<Vec<String>, ProviderError> {
        self.provider
            .send_request("personal_listAccounts", Value::Null)
            .await?
            .to_string_array()
    }

    /// `personal_newAccount`: create a key locked with `passphrase`,
    /// returning the new address.
    pub async fn new_account(&self, passphrase: &str) -> Result<String, ProviderError> {
        self.provider
            .send_request("personal_newAccount", json!([passphrase]))
            .await?
            .to_text()
    }

    /// `personal_unlockAccount`: unlock `address` for `duration_secs`
    /// seconds.
    pub async fn unlock_account(
        &self,
        address: &str,
        passphrase: &str,
        duration_secs: u64,
    ) -> Result<bool, ProviderError> {
        self.provider
            .send_request(
                "personal_unlockAccount",
                json!([address, passphrase, duration_secs]),
            )
            .await?
            .to_bool()
    }

    /// `personal_sendTransaction`: sign with the key unlocked by
    /// `passphrase` and submit, returning the transaction hash.
    pub async fn send_transaction(
        &self,
        tx: &TransactionRequest,
        passphrase: &str,
    ) -> Result<String, ProviderError> {
        self.provider
            .send_request(
                "personal_sendTransaction",
                json!([tx.to_wire(), passphrase]),
            )
            .await?
            .to_text()
    }
}

// ─────────────────────────── Tests ───────────────────────────
