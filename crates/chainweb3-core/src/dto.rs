//! Data-transfer records for the typed RPC surface.
//!
//! Inbound records keep their quantity fields in hex wire form
//! ([`Quantity`]) so callers pick the numeric interpretation. Outbound
//! records come in pairs: a native-typed struct the caller fills in
//! and a wire struct with every numeric rendered as hex.

use serde::{Deserialize, Serialize};

use crate::hex::{encode_byte_string, encode_quantity};
use crate::types::{ByteString, Quantity};

/// A block header summary as returned by `eth_getBlockByNumber`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub number: Quantity,
    pub hash: String,
    #[serde(rename = "parentHash")]
    pub parent_hash: String,
    pub nonce: Quantity,
    pub timestamp: Quantity,
}

/// A transaction as returned by `eth_getTransactionByHash`.
///
/// Block coordinates are `None` while the transaction is pending and
/// `to` is `None` for contract creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub nonce: Quantity,
    #[serde(rename = "blockHash", default)]
    pub block_hash: Option<String>,
    #[serde(rename = "blockNumber", default)]
    pub block_number: Option<Quantity>,
    #[serde(rename = "transactionIndex", default)]
    pub transaction_index: Option<Quantity>,
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    pub value: Quantity,
    #[serde(rename = "gasPrice", default)]
    pub gas_price: Option<Quantity>,
    #[serde(default)]
    pub gas: Option<Quantity>,
    #[serde(default)]
    pub input: Option<ByteString>,
}

/// A transaction receipt as returned by `eth_getTransactionReceipt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    #[serde(rename = "transactionHash")]
    pub transaction_hash: String,
    #[serde(rename = "transactionIndex")]
    pub transaction_index: Quantity,
    #[serde(rename = "blockHash")]
    pub block_hash: String,
    #[serde(rename = "blockNumber")]
    pub block_number: Quantity,
    #[serde(rename = "cumulativeGasUsed")]
    pub cumulative_gas_used: Quantity,
    #[serde(rename = "gasUsed")]
    pub gas_used: Quantity,
    /// Set only when the transaction created a contract.
    #[serde(rename = "contractAddress", default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub logs: Vec<Log>,
}

/// A log entry emitted during transaction execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub address: String,
    pub topics: Vec<String>,
    pub data: ByteString,
    #[serde(rename = "blockNumber")]
    pub block_number: Quantity,
    #[serde(rename = "blockHash")]
    pub block_hash: String,
    #[serde(rename = "transactionHash")]
    pub transaction_hash: String,
    #[serde(rename = "logIndex")]
    pub log_index: Quantity,
    #[serde(default)]
    pub removed: Option<bool>,
}

/// Outcome of `eth_syncing`: a progress object while the node syncs,
/// literal `false` once it has caught up.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncState {
    Synced,
    Syncing(SyncStatus),
}

impl SyncState {
    pub fn is_syncing(&self) -> bool {
        matches!(self, Self::Syncing(_))
    }
}

/// Sync progress counters, all still in hex wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncStatus {
    #[serde(rename = "startingBlock")]
    pub starting_block: Quantity,
    #[serde(rename = "currentBlock")]
    pub current_block: Quantity,
    #[serde(rename = "highestBlock")]
    pub highest_block: Quantity,
}

/// Native-typed parameters for `eth_sendTransaction` and
/// `eth_estimateGas`. Zero and empty fields are legal; the wire form
/// substitutes the `"0x0"` placeholder for them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub gas: i64,
    pub gas_price: i64,
    pub value: i64,
    pub data: String,
}

impl TransactionRequest {
    /// The wire form with every numeric rendered as a hex quantity
    /// and the payload hex-encoded.
    pub fn to_wire(&self) -> WireTransactionRequest {
        WireTransactionRequest {
            from: self.from.clone(),
            to: self.to.clone(),
            gas: encode_quantity(self.gas),
            gas_price: encode_quantity(self.gas_price),
            value: encode_quantity(self.value),
            data: encode_byte_string(&self.data),
        }
    }
}

/// JSON shape of a transaction parameter object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireTransactionRequest {
    pub from: String,
    pub to: String,
    pub gas: String,
    #[serde(rename = "gasPrice")]
    pub gas_price: String,
    pub value: String,
    pub data: String,
}

/// Native-typed parameters for `shh_post`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhisperPost {
    /// Sender identity, optional.
    pub from: String,
    /// Receiver identity, optional.
    pub to: String,
    pub topics: Vec<String>,
    pub payload: String,
    pub priority: i64,
    /// Time to live in seconds.
    pub ttl: i64,
}

impl WhisperPost {
    /// The wire form with priority and ttl rendered as hex quantities.
    pub fn to_wire(&self) -> WireWhisperPost {
        WireWhisperPost {
            from: self.from.clone(),
            to: self.to.clone(),
            topics: self.topics.clone(),
            payload: self.payload.clone(),
            priority: encode_quantity(self.priority),
            ttl: encode_quantity(self.ttl),
        }
    }
}

/// JSON shape of a whisper post parameter object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireWhisperPost {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub from: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub to: String,
    pub topics: Vec<String>,
    pub payload: String,
    pub priority: String,
    pub ttl: String,
}

// ─────────────────────────── Tests ───────────────────────────
