//! Hex-backed wire scalars and the default-block parameter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HexError;
use crate::hex::{
    decode_byte_string, decode_byte_string_or_empty, decode_quantity_i64, decode_quantity_u64,
    encode_byte_string, encode_quantity,
};

/// Wei per ether, for scaling raw wei quantities into whole coins.
pub const WEI_PER_ETHER: f64 = 1e18;

/// An integer that travels as `0x`-prefixed hex text.
///
/// Inbound values keep their textual form until the caller picks a
/// numeric interpretation, so nothing is lost if the node sends a
/// width this client does not model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(String);

impl Quantity {
    /// Wrap already-encoded hex text.
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Encode a native integer.
    pub fn from_i64(value: i64) -> Self {
        Self(encode_quantity(value))
    }

    /// The hex wire form.
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    pub fn to_u64(&self) -> Result<u64, HexError> {
        decode_quantity_u64(&self.0)
    }

    pub fn to_i64(&self) -> Result<i64, HexError> {
        decode_quantity_i64(&self.0)
    }

    /// Compat accessor: zero when the text is not valid hex or is
    /// wider than 64 bits.
    pub fn to_u64_or_zero(&self) -> u64 {
        self.to_u64().unwrap_or(0)
    }

    /// Compat accessor: zero when the text is not valid hex or is
    /// wider than 64 bits.
    pub fn to_i64_or_zero(&self) -> i64 {
        self.to_i64().unwrap_or(0)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A byte sequence that travels as `0x`-prefixed hex text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByteString(String);

impl ByteString {
    /// Wrap already-encoded hex text.
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Encode UTF-8 text into the wire form.
    pub fn encode(text: &str) -> Self {
        Self(encode_byte_string(text))
    }

    /// The hex wire form.
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Decode back into UTF-8 text.
    pub fn decode(&self) -> Result<String, HexError> {
        decode_byte_string(&self.0)
    }

    /// Compat accessor: empty string when the text is not valid hex.
    pub fn decode_or_empty(&self) -> String {
        decode_byte_string_or_empty(&self.0)
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The default-block parameter accepted by state queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    /// The genesis block.
    Earliest,
    /// The most recent mined block.
    Latest,
    /// The pending state.
    Pending,
    /// An explicit block height.
    Number(i64),
}

impl BlockTag {
    /// Wire form: a tag keyword or a hex quantity.
    pub fn as_param(&self) -> String {
        match self {
            Self::Earliest => "earliest".to_owned(),
            Self::Latest => "latest".to_owned(),
            Self::Pending => "pending".to_owned(),
            Self::Number(height) => encode_quantity(*height),
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_param())
    }
}

// ─────────────────────────── Tests ───────────────────────────
