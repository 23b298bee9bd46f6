//! Error taxonomy shared by every provider and typed accessor.

use thiserror::Error;

use crate::request::JsonRpcError;

/// Errors surfaced by providers and by the typed projections over a
/// raw result.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never completed: connect, DNS or socket I/O failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success HTTP status. The body
    /// is discarded; no result is decoded.
    #[error("HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The round trip exceeded the configured deadline.
    #[error("request timed out after {ms}ms")]
    Timeout { ms: u64 },

    /// The request envelope could not be encoded. Nothing was sent.
    #[error("request serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body was not a JSON-RPC response envelope.
    #[error("response deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The node returned a JSON-RPC error object instead of a result.
    #[error("rpc error {}: {}", .0.code, .0.message)]
    Rpc(JsonRpcError),

    /// The result payload was absent where a value is mandatory.
    #[error("empty response")]
    EmptyResponse,

    /// The result payload did not match the shape the caller asked for.
    #[error("unparseable interface: expected {expected}, got {actual}")]
    UnparseableInterface {
        expected: &'static str,
        actual: &'static str,
    },

    /// The provider was used after `close`.
    #[error("provider is closed")]
    Closed,
}

impl ProviderError {
    /// True when the failure happened before any response payload was
    /// decoded (connectivity, status, deadline or closed handle).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::HttpStatus { .. } | Self::Timeout { .. } | Self::Closed
        )
    }

    /// True when the node itself rejected the call.
    pub fn is_rpc(&self) -> bool {
        matches!(self, Self::Rpc(_))
    }

    /// The node's error code, when one was returned.
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            Self::Rpc(err) => Some(err.code),
            _ => None,
        }
    }
}

/// Errors from the hex codec.
///
/// The compat `*_or_zero` / `*_or_empty` helpers in [`crate::hex`]
/// swallow these; the strict functions report them.
#[derive(Debug, Error, PartialEq)]
pub enum HexError {
    /// The cleaned text was not a base-16 integer.
    #[error("invalid hex quantity {text:?}: {source}")]
    Quantity {
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The cleaned text was not an even run of hex digits.
    #[error("invalid hex bytes {text:?}: {source}")]
    Bytes {
        text: String,
        #[source]
        source: hex::FromHexError,
    },

    /// The decoded bytes were not valid UTF-8.
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
