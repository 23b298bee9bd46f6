//! Test support: an in-memory provider programmed per method.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use chainweb3_core::error::ProviderError;
use chainweb3_core::provider::Provider;
use chainweb3_core::request::JsonRpcError;
use chainweb3_core::result::RawResult;

/// A provider that answers from a programmed method table and records
/// every call it sees.
///
/// Each programmed answer is consumed by the first matching call; a
/// call with no programmed answer fails loudly so a test cannot pass
/// by accident.
#[derive(Default)]
pub struct MockProvider {
    responses: Mutex<HashMap<String, Result<RawResult, ProviderError>>>,
    calls: Mutex<Vec<(String, Value)>>,
    closed: AtomicBool,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Program the answer for `method`: a result payload or a
    /// provider-level failure.
    pub fn expect(&self, method: impl Into<String>, response: Result<Value, ProviderError>) {
        let entry = response.map(RawResult::from_value);
        self.responses.lock().unwrap().insert(method.into(), entry);
    }

    /// Program a node-side error object for `method`, the shape a node
    /// answers with when it rejects the call itself.
    pub fn expect_rpc_error(&self, method: impl Into<String>, code: i64, message: &str) {
        let raw = RawResult::from_error(JsonRpcError {
            code,
            message: message.to_owned(),
            data: None,
        });
        self.responses.lock().unwrap().insert(method.into(), Ok(raw));
    }

    /// Every `(method, params)` pair seen so far, in call order.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn send_request(
        &self,
        method: &str,
        params: Value,
    ) -> Result<RawResult, ProviderError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(ProviderError::Closed);
        }

        self.calls
            .lock()
            .unwrap()
            .push((method.to_owned(), params));

        match self.responses.lock().unwrap().remove(method) {
            Some(response) => response,
            None => Err(ProviderError::Transport(format!(
                "no programmed response for {method}"
            ))),
        }
    }

    fn close(&self) -> Result<(), ProviderError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn endpoint(&self) -> &str {
        "mock://"
    }
}

// ─────────────────────────── Tests ───────────────────────────
