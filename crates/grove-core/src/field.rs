//! Field element type and hex numeral encoding.
//!
//! Elements are encoded externally as `0x`-prefixed big-endian hex
//! numerals with no leading zeros, the form produced by big-integer
//! `toString(16)` style printers. Values outside the field are rejected,
//! never reduced or truncated.

use ff::PrimeField as _;
use thiserror::Error;

/// The field the hash and all tree operations work over.
pub type Element = pasta_curves::pallas::Base;

/// Number of hex digits in a fully padded field element.
const ELEMENT_HEX_DIGITS: usize = 64;

/// Errors that can occur when parsing a field element from its hex form.
#[derive(Debug, Error, PartialEq)]
pub enum FieldRangeError {
    /// The numeral contains non-hex characters or is empty.
    #[error("invalid hex numeral: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The numeral has no digits at all.
    #[error("empty hex numeral")]
    Empty,

    /// The numeral has more digits than any field element can.
    #[error("hex numeral of {digits} digits exceeds the {ELEMENT_HEX_DIGITS}-digit field width")]
    TooLong {
        /// Number of hex digits found.
        digits: usize,
    },

    /// The value is a well-formed 256-bit number but not a canonical
    /// field element (it is at or above the field modulus).
    #[error("value is not a canonical field element")]
    NotInField,
}

/// Encode a field element as a minimal `0x`-prefixed hex numeral.
///
/// Zero encodes as `0x0`.
#[must_use]
pub fn element_to_hex(element: &Element) -> String {
    let mut bytes = element.to_repr();
    bytes.reverse();
    let full = hex::encode(bytes);
    let digits = full.trim_start_matches('0');
    if digits.is_empty() {
        "0x0".to_owned()
    } else {
        format!("0x{digits}")
    }
}

/// Parse a field element from a hex numeral, with or without a `0x` prefix.
///
/// # Errors
/// Returns [`FieldRangeError`] if the numeral is empty, contains non-hex
/// characters, is wider than the field, or encodes a value at or above
/// the field modulus. Out-of-field values are rejected rather than
/// reduced, so every accepted numeral round-trips through
/// [`element_to_hex`].
pub fn element_from_hex(numeral: &str) -> Result<Element, FieldRangeError> {
    let digits = numeral
        .strip_prefix("0x")
        .or_else(|| numeral.strip_prefix("0X"))
        .unwrap_or(numeral);
    if digits.is_empty() {
        return Err(FieldRangeError::Empty);
    }
    if digits.len() > ELEMENT_HEX_DIGITS {
        return Err(FieldRangeError::TooLong {
            digits: digits.len(),
        });
    }

    let padded = format!("{digits:0>ELEMENT_HEX_DIGITS$}");
    let mut bytes = [0_u8; 32];
    hex::decode_to_slice(&padded, &mut bytes)?;
    bytes.reverse();
    Option::from(Element::from_repr(bytes)).ok_or(FieldRangeError::NotInField)
}

/// A `serde_as` adapter encoding field elements as hex numerals.
///
/// Used on proof and identity records so their JSON form carries
/// `0x`-prefixed numeral strings instead of raw byte arrays.
pub struct FieldHex;

impl serde_with::SerializeAs<Element> for FieldHex {
    fn serialize_as<S>(value: &Element, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&element_to_hex(value))
    }
}

impl<'de> serde_with::DeserializeAs<'de, Element> for FieldHex {
    fn deserialize_as<D>(deserializer: D) -> Result<Element, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let numeral = <String as serde::Deserialize>::deserialize(deserializer)?;
        element_from_hex(&numeral).map_err(serde::de::Error::custom)
    }
}
