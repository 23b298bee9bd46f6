//! The `shh` namespace: whisper messaging.

use std::sync::Arc;

use serde_json::{json, Value};

use chainweb3_core::dto::WhisperPost;
use chainweb3_core::error::ProviderError;
use chainweb3_core::provider::Provider;

/// The `shh_*` method family.
pub struct Shh {
    provider: Arc<dyn Provider>,
}

impl Shh {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    /// `shh_version`: the whisper protocol version.
    pub async fn version(&self) -> Result<String, ProviderError> {
        self.provider
            .send_request("shh_version", Value::Null)
            .await?
            .to_text()
    }

    /// `shh_post`: publish a whisper message, `true` on acceptance.
    pub async fn post(&self, message: &WhisperPost) -> Result<bool, ProviderError> {
        self.provider
            .send_request("shh_post", json!([message.to_wire()]))
            .await?
            .to_bool()
    }
}

// ─────────────────────────── Tests ───────────────────────────
