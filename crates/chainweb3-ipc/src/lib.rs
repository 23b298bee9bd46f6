//! # chainweb3-ipc
//!
//! IPC provider for the chainweb3 client stack, talking JSON-RPC over
//! a Unix domain socket (the `geth.ipc` style endpoint).
//!
//! Each call opens a fresh connection, writes one request, half-closes
//! the write side and reads the response to EOF. Connecting per call
//! keeps calls independent: there is no framing state to share and no
//! lock around a long-lived stream.

pub mod provider;

pub use provider::{IpcProvider, IpcProviderConfig};
