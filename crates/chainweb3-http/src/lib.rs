//! # chainweb3-http
//!
//! HTTP provider for the chainweb3 client stack, backed by `reqwest`.
//!
//! One JSON-RPC call is one POST. There is no connection pinning, no
//! retry and no response caching; the only shared state is the
//! underlying HTTP client and a closed flag.

pub mod provider;

pub use provider::{HttpProvider, HttpProviderConfig};
