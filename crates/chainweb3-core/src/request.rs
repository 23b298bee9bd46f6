//! JSON-RPC 2.0 envelope types.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProviderError;

/// Protocol version stamped on every request.
pub const PROTOCOL_VERSION: &str = "2.0";

/// A JSON-RPC request or response id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(u64),
    String(String),
    Null,
}

impl Default for RpcId {
    fn default() -> Self {
        Self::Null
    }
}

/// A JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    /// Positional parameters, or `Value::Null` when the method takes
    /// none.
    pub params: Value,
    pub id: RpcId,
}

impl JsonRpcRequest {
    /// Build an envelope for `method` with positional `params`.
    ///
    /// The id is a small pseudo-random integer. Each request gets its
    /// own connection or POST, so the id is not used for correlation.
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION.to_owned(),
            method: method.into(),
            params,
            id: RpcId::Number(rand::thread_rng().gen_range(0..100)),
        }
    }

    /// Build an envelope with an explicit id.
    pub fn with_id(method: impl Into<String>, params: Value, id: RpcId) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION.to_owned(),
            method: method.into(),
            params,
            id,
        }
    }

    /// Compact JSON body for the wire.
    ///
    /// Fails fast on encoding problems; nothing is ever sent with an
    /// empty or partial body.
    pub fn to_body(&self) -> Result<String, ProviderError> {
        serde_json::to_string(self).map_err(ProviderError::Serialization)
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rpc error {}: {}", self.code, self.message)
    }
}

/// A JSON-RPC 2.0 response envelope.
///
/// Every member is optional on decode. Fixtures and terse servers may
/// omit `jsonrpc` or `id`; the interesting members are `result` and
/// `error`, and exactly one of them is expected to be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: RpcId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

// ─────────────────────────── Tests ───────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_has_all_members() {
        let req = JsonRpcRequest::new("net_version", Value::Null);
        let encoded = serde_json::to_value(&req).unwrap();

        assert_eq!(encoded["jsonrpc"], "2.0");
        assert_eq!(encoded["method"], "net_version");
        assert_eq!(encoded["params"], Value::Null);
        assert!(encoded["id"].is_number());
    }

    #[test]
    fn params_keep_positional_order() {
        let req = JsonRpcRequest::new(
            "eth_getBalance",
            json!(["0x407d73d8a49eeb85d32cf465507dd71d507100c1", "latest"]),
        );
        let encoded = serde_json::to_value(&req).unwrap();

        assert_eq!(
            encoded["params"],
            json!(["0x407d73d8a49eeb85d32cf465507dd71d507100c1", "latest"])
        );
    }

    #[test]
    fn explicit_ids_pass_through() {
        let req = JsonRpcRequest::with_id("eth_mining", Value::Null, RpcId::Number(42));
        let encoded = serde_json::to_value(&req).unwrap();
        assert_eq!(encoded["id"], 42);
    }

    #[test]
    fn id_is_a_small_integer() {
        for _ in 0..32 {
            let req = JsonRpcRequest::new("eth_blockNumber", Value::Null);
            match req.id {
                RpcId::Number(n) => assert!(n < 100),
                other => panic!("unexpected id {other:?}"),
            }
        }
    }

    #[test]
    fn response_decodes_without_envelope_members() {
        // A null result and a missing one read the same: no payload.
        let resp: JsonRpcResponse = serde_json::from_str(r#"{"result":null}"#).unwrap();
        assert!(resp.result.is_none());
        assert!(resp.error.is_none());
        assert_eq!(resp.id, RpcId::Null);
    }

    #[test]
    fn response_decodes_error_objects() {
        let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"method not found"}}"#;
        let resp: JsonRpcResponse = serde_json::from_str(body).unwrap();

        let err = resp.error.unwrap();
        assert_eq!(err.code, -32601);
        assert_eq!(err.message, "method not found");
        assert!(resp.result.is_none());
    }
}
