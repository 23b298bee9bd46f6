//! # chainweb3-core
//!
//! Wire types, hex codec and the provider abstraction for the
//! chainweb3 client stack.
//!
//! The crate is transport-agnostic. It defines:
//!
//! - [`JsonRpcRequest`] / [`JsonRpcResponse`]: the JSON-RPC 2.0
//!   envelopes.
//! - [`hex`]: the quantity and byte-string codec, with strict and
//!   compat decode paths.
//! - [`Quantity`] / [`ByteString`]: hex text kept in wire form until
//!   the caller converts it.
//! - [`RawResult`]: one decode of the response payload, then typed
//!   narrowing projections.
//! - [`Provider`]: the async transport trait the HTTP and IPC crates
//!   implement.
//!
//! Concrete transports live in `chainweb3-http` and `chainweb3-ipc`;
//! the typed namespace modules (`eth`, `net`, `personal`, ...) live in
//! `chainweb3-api`.

pub mod dto;
pub mod error;
pub mod hex;
pub mod provider;
pub mod request;
pub mod result;
pub mod types;

pub use error::{HexError, ProviderError};
pub use provider::Provider;
pub use request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId, PROTOCOL_VERSION};
pub use result::RawResult;
pub use types::{BlockTag, ByteString, Quantity, WEI_PER_ETHER};
