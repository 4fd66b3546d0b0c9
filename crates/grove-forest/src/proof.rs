//! Inclusion proofs and their wire representation.

#![allow(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "Slot arithmetic is bounded by the per-level arity checks"
)]

use grove_core::{Element, FieldHasher, FieldHex};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// An inclusion proof for one leaf of an incremental Merkle tree.
///
/// Siblings run bottom-up, one group of `arity - 1` elements per level;
/// `path_indices` records which child slot the path took at each level.
/// The record serializes to JSON with field elements as hex numerals,
/// ready for transmission to a verifier.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Root the proof commits to.
    #[serde_as(as = "FieldHex")]
    pub root: Element,
    /// The proven leaf value.
    #[serde_as(as = "FieldHex")]
    pub leaf: Element,
    /// Insertion index of the leaf.
    pub index: usize,
    /// Sibling values per level, leaf level first.
    #[serde_as(as = "Vec<Vec<FieldHex>>")]
    pub siblings: Vec<Vec<Element>>,
    /// Child slot the path occupies at each level.
    pub path_indices: Vec<usize>,
}

impl MerkleProof {
    /// Recompute the root this proof's leaf and siblings imply.
    ///
    /// Returns `None` when the proof is structurally inconsistent:
    /// mismatched level counts, a path index outside its level's arity,
    /// or a path that disagrees with `index`. That binds every field of
    /// the record, so tampering with any one of them is caught either
    /// here or by the root comparison in the caller.
    #[must_use]
    pub fn compute_root(&self, hasher: &impl FieldHasher) -> Option<Element> {
        if self.siblings.len() != self.path_indices.len() {
            return None;
        }

        let mut node = self.leaf;
        let mut position = self.index;
        for (level_siblings, &slot) in self.siblings.iter().zip(&self.path_indices) {
            let arity = level_siblings.len().checked_add(1)?;
            if arity < 2 || slot >= arity || slot != position % arity {
                return None;
            }

            let mut children = Vec::with_capacity(arity);
            children.extend_from_slice(&level_siblings[..slot]);
            children.push(node);
            children.extend_from_slice(&level_siblings[slot..]);
            node = hasher.hash_children(&children);
            position /= arity;
        }

        // A leftover position means the claimed index lies beyond the
        // capacity this proof's depth can address.
        (position == 0).then_some(node)
    }
}
