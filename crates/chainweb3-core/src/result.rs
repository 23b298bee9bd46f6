//! Typed projections over a raw JSON-RPC result.
//!
//! A response body is decoded once into [`serde_json::Value`] and
//! wrapped in [`RawResult`]. Every accessor is a narrowing projection
//! out of that value: a projection that does not match the payload's
//! runtime shape reports [`ProviderError::UnparseableInterface`]
//! instead of panicking, and a payload that is absent where a value is
//! mandatory reports [`ProviderError::EmptyResponse`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::dto::{Block, SyncState, Transaction, TransactionReceipt};
use crate::error::ProviderError;
use crate::request::{JsonRpcError, JsonRpcResponse};
use crate::types::{ByteString, Quantity};

/// The decoded top half of a JSON-RPC exchange: either a result
/// payload awaiting interpretation or the node's error object.
///
/// Built fresh per call, read by one accessor, then discarded.
#[derive(Debug, Clone)]
pub struct RawResult {
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

impl RawResult {
    /// Wrap a decoded response envelope.
    pub fn from_response(response: JsonRpcResponse) -> Self {
        Self {
            result: response.result,
            error: response.error,
        }
    }

    /// Wrap a bare result payload. Used by in-memory providers.
    pub fn from_value(result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    /// Wrap a node-side error object.
    pub fn from_error(error: JsonRpcError) -> Self {
        Self {
            result: None,
            error: Some(error),
        }
    }

    /// True when the node answered with an error object.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The undecoded payload, with a node-side error object surfaced
    /// as [`ProviderError::Rpc`]. An absent payload comes back as
    /// `Value::Null`.
    pub fn into_value(self) -> Result<Value, ProviderError> {
        match self.error {
            Some(err) => Err(ProviderError::Rpc(err)),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }

    fn check_error(&self) -> Result<(), ProviderError> {
        match &self.error {
            Some(err) => Err(ProviderError::Rpc(err.clone())),
            None => Ok(()),
        }
    }

    /// The payload, required to be present and non-null.
    fn require(&self) -> Result<&Value, ProviderError> {
        self.check_error()?;
        match &self.result {
            Some(Value::Null) | None => Err(ProviderError::EmptyResponse),
            Some(value) => Ok(value),
        }
    }

    /// Project the payload as a boolean.
    pub fn to_bool(&self) -> Result<bool, ProviderError> {
        let value = self.require()?;
        value.as_bool().ok_or_else(|| mismatch("boolean", value))
    }

    /// Project the payload as a string.
    pub fn to_text(&self) -> Result<String, ProviderError> {
        let value = self.require()?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| mismatch("string", value))
    }

    /// Project the payload as an array of strings.
    pub fn to_string_array(&self) -> Result<Vec<String>, ProviderError> {
        let value = self.require()?;
        let items = value.as_array().ok_or_else(|| mismatch("array", value))?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| mismatch("string", item))
            })
            .collect()
    }

    /// Project the payload as a hex quantity, kept in wire form.
    pub fn to_quantity(&self) -> Result<Quantity, ProviderError> {
        let value = self.require()?;
        value
            .as_str()
            .map(Quantity::new)
            .ok_or_else(|| mismatch("hex quantity", value))
    }

    /// Project the payload as a hex byte string, kept in wire form.
    pub fn to_byte_string(&self) -> Result<ByteString, ProviderError> {
        let value = self.require()?;
        value
            .as_str()
            .map(ByteString::new)
            .ok_or_else(|| mismatch("hex byte string", value))
    }

    /// Decode the payload into `T`, requiring it to be present.
    pub fn to_object<T: DeserializeOwned>(&self) -> Result<T, ProviderError> {
        let value = self.require()?;
        decode_into(value)
    }

    /// Decode the payload into `T`, mapping a null or absent payload
    /// to `None`. This is the shape of every "not found yet" answer.
    pub fn to_nullable_object<T: DeserializeOwned>(&self) -> Result<Option<T>, ProviderError> {
        self.check_error()?;
        match &self.result {
            Some(Value::Null) | None => Ok(None),
            Some(value) => decode_into(value).map(Some),
        }
    }

    /// Project the payload as a block record, `None` when the node has
    /// no block at the requested height.
    pub fn to_block(&self) -> Result<Option<Block>, ProviderError> {
        self.to_nullable_object()
    }

    /// Project the payload as a transaction record, `None` when the
    /// node does not know the transaction.
    pub fn to_transaction(&self) -> Result<Option<Transaction>, ProviderError> {
        self.to_nullable_object()
    }

    /// Project the payload as a transaction receipt, `None` until the
    /// transaction is mined.
    pub fn to_transaction_receipt(&self) -> Result<Option<TransactionReceipt>, ProviderError> {
        self.to_nullable_object()
    }

    /// Project an `eth_syncing` payload: a progress object while the
    /// node syncs, literal `false` once it has caught up. An absent
    /// payload reads as not syncing, not as an error.
    pub fn to_sync_state(&self) -> Result<SyncState, ProviderError> {
        self.check_error()?;
        match &self.result {
            Some(Value::Bool(false)) | Some(Value::Null) | None => Ok(SyncState::Synced),
            Some(value @ Value::Object(_)) => decode_into(value).map(SyncState::Syncing),
            Some(value) => Err(mismatch("sync status", value)),
        }
    }
}

fn decode_into<T: DeserializeOwned>(value: &Value) -> Result<T, ProviderError> {
    serde_json::from_value(value.clone()).map_err(|_| ProviderError::UnparseableInterface {
        expected: std::any::type_name::<T>(),
        actual: kind(value),
    })
}

fn mismatch(expected: &'static str, actual: &Value) -> ProviderError {
    ProviderError::UnparseableInterface {
        expected,
        actual: kind(actual),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ─────────────────────────── Tests ───────────────────────────
