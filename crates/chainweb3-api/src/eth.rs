//! The `eth` namespace: accounts, blocks, transactions and state.

use std::sync::Arc;

use serde_json::{json, Value};

use chainweb3_core::dto::{Block, SyncState, Transaction, TransactionReceipt, TransactionRequest};
use chainweb3_core::error::ProviderError;
use chainweb3_core::hex::encode_quantity;
use chainweb3_core::provider::Provider;
use chainweb3_core::types::{BlockTag, ByteString, Quantity};

/// The `eth_*` method family.
pub struct Eth {
    provider: Arc<dyn Provider>,
}

impl Eth {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    /// `eth_protocolVersion`: the wire protocol version.
    pub async fn protocol_version(&self) -> Result<String, ProviderError> {
        self.provider
            .send_request("eth_protocolVersion", Value::Null)
            .await?
            .to_text()
    }

    /// `eth_syncing`: sync progress, or [`SyncState::Synced`] once the
    /// node has caught up.
    pub async fn syncing(&self) -> Result<SyncState, ProviderError> {
        self.provider
            .send_request("eth_syncing", Value::Null)
            .await?
            .to_sync_state()
    }

    /// `eth_coinbase`: the node's coinbase address.
    pub async fn coinbase(&self) -> Result<String, ProviderError> {
        self.provider
            .send_request("eth_coinbase", Value::Null)
            .await?
            .to_text()
    }

    /// `eth_mining`: whether the node is actively mining.
    pub async fn mining(&self) -> Result<bool, ProviderError> {
        self.provider
            .send_request("eth_mining", Value::Null)
            .await?
            .to_bool()
    }

    /// `eth_hashrate`: hashes per second while mining.
    pub async fn hash_rate(&self) -> Result<Quantity, ProviderError> {
        self.provider
            .send_request("eth_hashrate", Value::Null)
            .await?
            .to_quantity()
    }

    /// `eth_gasPrice`: the current gas price in wei.
    pub async fn gas_price(&self) -> Result<Quantity, ProviderError> {
        self.provider
            .send_request("eth_gasPrice", Value::Null)
            .await?
            .to_quantity()
    }

    /// `eth_accounts`: addresses owned by the node.
    pub async fn accounts(&self) -> Result<Vec<String>, ProviderError> {
        self.provider
            .send_request("eth_accounts", Value::Null)
            .await?
            .to_string_array()
    }

    /// `eth_blockNumber`: the height of the most recent block.
    pub async fn block_number(&self) -> Result<Quantity, ProviderError> {
        self.provider
            .send_request("eth_blockNumber", Value::Null)
            .await?
            .to_quantity()
    }

    /// `eth_getBalance`: balance of `address` in wei at `block`.
    pub async fn balance(
        &self,
        address: &str,
        block: BlockTag,
    ) -> Result<Quantity, ProviderError> {
        self.provider
            .send_request("eth_getBalance", json!([address, block.as_param()]))
            .await?
            .to_quantity()
    }

    /// `eth_getStorageAt`: the storage word of `address` at
    /// `position`, at `block`.
    pub async fn storage_at(
        &self,
        address: &str,
        position: i64,
        block: BlockTag,
    ) -> Result<ByteString, ProviderError> {
        self.provider
            .send_request(
                "eth_getStorageAt",
                json!([address, encode_quantity(position), block.as_param()]),
            )
            .await?
            .to_byte_string()
    }

    /// `eth_estimateGas`: gas needed to execute `tx`, without mining
    /// it.
    pub async fn estimate_gas(
        &self,
        tx: &TransactionRequest,
    ) -> Result<Quantity, ProviderError> {
        self.provider
            .send_request("eth_estimateGas", json!([tx.to_wire()]))
            .await?
            .to_quantity()
    }

    /// `eth_getTransactionByHash`: `None` while the node does not know
    /// the transaction.
    pub async fn transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<Transaction>, ProviderError> {
        self.provider
            .send_request("eth_getTransactionByHash", json!([hash]))
            .await?
            .to_transaction()
    }

    /// `eth_sendTransaction`: submit `tx`, returning the transaction
    /// hash.
    pub async fn send_transaction(
        &self,
        tx: &TransactionRequest,
    ) -> Result<String, ProviderError> {
        self.provider
            .send_request("eth_sendTransaction", json!([tx.to_wire()]))
            .await?
            .to_text()
    }

    /// `eth_compileSolidity`: compiled code for `source`. Only nodes
    /// with a registered compiler answer this.
    pub async fn compile_solidity(&self, source: &str) -> Result<ByteString, ProviderError> {
        self.provider
            .send_request("eth_compileSolidity", json!([source]))
            .await?
            .to_byte_string()
    }

    /// `eth_getTransactionReceipt`: `None` until the transaction is
    /// mined.
    pub async fn transaction_receipt(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionReceipt>, ProviderError> {
        self.provider
            .send_request("eth_getTransactionReceipt", json!([hash]))
            .await?
            .to_transaction_receipt()
    }

    /// `eth_getBlockByNumber`: `None` when there is no block at
    /// `number`. `full_transactions` asks for transaction objects
    /// instead of hashes.
    pub async fn block_by_number(
        &self,
        number: i64,
        full_transactions: bool,
    ) -> Result<Option<Block>, ProviderError> {
        self.provider
            .send_request(
                "eth_getBlockByNumber",
                json!([encode_quantity(number), full_transactions]),
            )
            .await?
            .to_block()
    }
}

// ─────────────────────────── Tests ───────────────────────────
