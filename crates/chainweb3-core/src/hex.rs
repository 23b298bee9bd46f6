//! Hex codec for wire quantities and byte strings.
//!
//! Quantities travel as `0x`-prefixed lowercase hex with no leading
//! zeros (`"0x0"` for zero). Byte strings travel as `0x` followed by
//! two hex digits per byte. Decoders first remove every occurrence of
//! the `0x` marker, not only a leading prefix, so doubled or embedded
//! markers parse the same as a single one.

use crate::error::HexError;

/// Remove every `0x` marker from `text`.
fn clean(text: &str) -> String {
    text.replace("0x", "")
}

/// Encode a signed integer as a hex quantity.
///
/// Negative values encode their two's-complement bit pattern, so the
/// output is always `0x` plus 1..=16 lowercase digits.
pub fn encode_quantity(value: i64) -> String {
    format!("0x{value:x}")
}

/// Decode a hex quantity into an unsigned 64-bit integer.
pub fn decode_quantity_u64(text: &str) -> Result<u64, HexError> {
    let cleaned = clean(text);
    u64::from_str_radix(&cleaned, 16).map_err(|source| HexError::Quantity {
        text: text.to_owned(),
        source,
    })
}

/// Decode a hex quantity into a signed 64-bit integer.
///
/// The digits are read as a 64-bit pattern and reinterpreted, so any
/// value produced by [`encode_quantity`] decodes back to itself,
/// negatives included.
pub fn decode_quantity_i64(text: &str) -> Result<i64, HexError> {
    decode_quantity_u64(text).map(|bits| bits as i64)
}

/// Compat decode: zero instead of an error on malformed input.
///
/// Quantities wider than 64 bits count as malformed, so an oversized
/// value comes back as zero, not saturated at [`u64::MAX`]. Prefer
/// [`decode_quantity_u64`]; a caller that cannot distinguish a
/// genuine zero from garbage should not use this.
pub fn decode_quantity_u64_or_zero(text: &str) -> u64 {
    decode_quantity_u64(text).unwrap_or(0)
}

/// Compat decode: zero instead of an error on malformed or oversized
/// input.
pub fn decode_quantity_i64_or_zero(text: &str) -> i64 {
    decode_quantity_i64(text).unwrap_or(0)
}

/// Encode UTF-8 text as a hex byte string. Empty text encodes as
/// `"0x0"`, the placeholder the wire format uses for "no data".
pub fn encode_byte_string(text: &str) -> String {
    if text.is_empty() {
        return "0x0".to_owned();
    }
    format!("0x{}", hex::encode(text.as_bytes()))
}

/// Decode a hex byte string back into UTF-8 text.
///
/// `"0x0"` and `"0x"` decode to the empty string, matching what
/// [`encode_byte_string`] emits for empty input.
pub fn decode_byte_string(text: &str) -> Result<String, HexError> {
    let cleaned = clean(text);
    if cleaned.is_empty() || cleaned == "0" {
        return Ok(String::new());
    }
    let bytes = hex::decode(&cleaned).map_err(|source| HexError::Bytes {
        text: text.to_owned(),
        source,
    })?;
    Ok(String::from_utf8(bytes)?)
}

/// Compat decode: empty string instead of an error on malformed input.
pub fn decode_byte_string_or_empty(text: &str) -> String {
    decode_byte_string(text).unwrap_or_default()
}

// ─────────────────────────── Tests ───────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_zero_as_0x0() {
        assert_eq!(encode_quantity(0), "0x0");
    }

    #[test]
    fn encodes_without_leading_zeros() {
        assert_eq!(encode_quantity(1), "0x1");
        assert_eq!(encode_quantity(0x4b7), "0x4b7");
        assert_eq!(encode_quantity(i64::MAX), "0x7fffffffffffffff");
    }

    #[test]
    fn unsigned_round_trip() {
        for v in [0u64, 1, 0x10, 0x4b7, 0xdead_beef, i64::MAX as u64] {
            let encoded = encode_quantity(v as i64);
            assert_eq!(decode_quantity_u64(&encoded).unwrap(), v);
        }
    }

    #[test]
    fn signed_round_trip_covers_negatives() {
        for v in [i64::MIN, -0xff, -1, 0, 1, 0x4b7, i64::MAX] {
            let encoded = encode_quantity(v);
            assert_eq!(decode_quantity_i64(&encoded).unwrap(), v);
        }
    }

    #[test]
    fn strips_every_marker_occurrence() {
        assert_eq!(decode_quantity_u64("0x0x1").unwrap(), 1);
        assert_eq!(decode_quantity_u64("0xff0x").unwrap(), 0xff);
    }

    #[test]
    fn malformed_quantity_is_an_error() {
        assert!(decode_quantity_u64("0xzz").is_err());
        assert!(decode_quantity_u64("").is_err());
        assert!(decode_quantity_u64("0x").is_err());
    }

    #[test]
    fn compat_decode_yields_zero_on_garbage() {
        assert_eq!(decode_quantity_u64_or_zero("0xzz"), 0);
        assert_eq!(decode_quantity_i64_or_zero("not hex"), 0);
        assert_eq!(decode_quantity_u64_or_zero("0x4b7"), 0x4b7);
    }

    #[test]
    fn oversized_quantity_errors_and_compat_zeroes() {
        // 72 bits, one digit past what u64 holds.
        let wide = "0xffffffffffffffffff";
        assert!(decode_quantity_u64(wide).is_err());
        assert_eq!(decode_quantity_u64_or_zero(wide), 0);
        assert_eq!(decode_quantity_i64_or_zero(wide), 0);
    }

    #[test]
    fn byte_string_round_trip() {
        for text in ["", "web3", "hello world", "0xdeadbeef's label"] {
            let encoded = encode_byte_string(text);
            assert_eq!(decode_byte_string(&encoded).unwrap(), text);
        }
    }

    #[test]
    fn empty_text_encodes_as_placeholder() {
        assert_eq!(encode_byte_string(""), "0x0");
        assert_eq!(decode_byte_string("0x0").unwrap(), "");
        assert_eq!(decode_byte_string("0x").unwrap(), "");
    }

    #[test]
    fn known_byte_string_form() {
        assert_eq!(encode_byte_string("web3"), "0x77656233");
        assert_eq!(decode_byte_string("0x77656233").unwrap(), "web3");
    }

    #[test]
    fn odd_length_bytes_are_an_error() {
        assert!(decode_byte_string("0x123").is_err());
        assert_eq!(decode_byte_string_or_empty("0x123"), "");
    }

    #[test]
    fn non_utf8_bytes_are_an_error() {
        assert!(decode_byte_string("0xff").is_err());
        assert_eq!(decode_byte_string_or_empty("0xff"), "");
    }
}
