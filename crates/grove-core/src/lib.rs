//! Grove base primitives.
//!
//! This crate holds everything the forest layer builds on: the field
//! element type and its hex encoding, the two-input field hash contract
//! with a Poseidon implementation, and identity commitments.

/// Field element type, hex encoding and serde helpers.
pub mod field;
/// The two-input field hash contract and its Poseidon implementation.
pub mod hash;
/// Secret pairs and the commitments derived from them.
pub mod identity;

pub use field::{Element, FieldHex, FieldRangeError, element_from_hex, element_to_hex};
pub use hash::{FieldHasher, PoseidonHasher};
pub use identity::{Identity, IdentityError};
