//! Identity commitments.
//!
//! An identity is a secret `(key, value)` pair together with the
//! commitment `hash2(key, value)` that binds it. The commitment is
//! derived once at construction and never mutated; exporting an identity
//! only carries the secrets, since the commitment is re-derivable.

use rand_core::RngCore;
use thiserror::Error;

use crate::field::{Element, FieldRangeError, element_from_hex, element_to_hex};
use crate::hash::FieldHasher;

/// A secret pair and its derived commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    key: Element,
    value: Element,
    commitment: Element,
}

/// Errors that can occur when importing an exported identity.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The export string is not a JSON array of strings.
    #[error("malformed identity export: {0}")]
    Json(#[from] serde_json::Error),

    /// The export array does not hold exactly a key and a value.
    #[error("identity export holds {found} entries, expected 2")]
    WrongLength {
        /// Number of entries found in the array.
        found: usize,
    },

    /// An entry is not a valid field element numeral.
    #[error(transparent)]
    Field(#[from] FieldRangeError),
}

impl Identity {
    /// Create an identity from a secret pair, deriving its commitment.
    #[must_use]
    pub fn new(hasher: &impl FieldHasher, key: Element, value: Element) -> Self {
        Self {
            key,
            value,
            commitment: hasher.hash2(key, value),
        }
    }

    /// Create an identity from small integer secrets.
    #[must_use]
    pub fn from_u64(hasher: &impl FieldHasher, key: u64, value: u64) -> Self {
        Self::new(hasher, Element::from(key), Element::from(value))
    }

    /// Create an identity with uniformly sampled secrets.
    #[must_use]
    pub fn random(hasher: &impl FieldHasher, mut rng: impl RngCore) -> Self {
        let key = <Element as ff::Field>::random(&mut rng);
        let value = <Element as ff::Field>::random(&mut rng);
        Self::new(hasher, key, value)
    }

    /// The secret key half of the pair.
    #[must_use]
    pub const fn key(&self) -> Element {
        self.key
    }

    /// The secret value half of the pair.
    #[must_use]
    pub const fn value(&self) -> Element {
        self.value
    }

    /// The commitment binding the pair.
    #[must_use]
    pub const fn commitment(&self) -> Element {
        self.commitment
    }

    /// Export the secrets as a JSON array of two hex numerals,
    /// `(key, value)` order.
    ///
    /// The commitment is deliberately absent: [`Identity::import`]
    /// re-derives it, so an export can never smuggle in a commitment
    /// that does not match its secrets.
    #[must_use]
    pub fn export(&self) -> String {
        format!(
            r#"["{}","{}"]"#,
            element_to_hex(&self.key),
            element_to_hex(&self.value)
        )
    }

    /// Reconstruct an identity from an [`Identity::export`] string.
    ///
    /// # Errors
    /// Returns [`IdentityError`] if the string is not a two-entry JSON
    /// array of canonical field element numerals.
    pub fn import(hasher: &impl FieldHasher, exported: &str) -> Result<Self, IdentityError> {
        let entries: Vec<String> = serde_json::from_str(exported)?;
        let [key, value] = entries.as_slice() else {
            return Err(IdentityError::WrongLength {
                found: entries.len(),
            });
        };
        Ok(Self::new(
            hasher,
            element_from_hex(key)?,
            element_from_hex(value)?,
        ))
    }
}
