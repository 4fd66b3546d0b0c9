//! Forest orchestration over caller-owned trees.
//!
//! The builder holds nothing but the hasher; every tree it touches is
//! owned by the caller and passed by reference, and the promoted
//! identity binds a base tree's root at the moment of promotion. If the
//! base tree grows afterwards the caller must promote again, there is no
//! automatic propagation.

use grove_core::{Element, FieldHasher, Identity, PoseidonHasher, element_to_hex};
use tracing::{debug, instrument};

use crate::error::TreeError;
use crate::proof::MerkleProof;
use crate::tree::IncrementalMerkleTree;

/// Links base trees to forest trees through nested commitments.
///
/// One builder instance serves any number of trees, as long as they all
/// share the hasher type, so the commitment and node-combination
/// conventions stay consistent across every level of nesting.
#[derive(Debug, Clone, Copy, Default)]
pub struct MerkleForestBuilder<H: FieldHasher = PoseidonHasher> {
    hasher: H,
}

impl<H: FieldHasher> MerkleForestBuilder<H> {
    /// Create a builder around the given hasher.
    #[must_use]
    pub const fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// Insert an identity's commitment into a base tree.
    ///
    /// # Errors
    /// Returns [`TreeError::CapacityExceeded`] if the tree is full.
    pub fn commit_to_base(
        &self,
        tree: &mut IncrementalMerkleTree<H>,
        identity: &Identity,
    ) -> Result<usize, TreeError> {
        let index = tree.insert(identity.commitment())?;
        debug!(index, "committed identity to base tree");
        Ok(index)
    }

    /// Commit a base tree's current root into a forest tree.
    ///
    /// This is the nesting step: a new identity is derived from
    /// `(base.root(), group_id)` and its commitment becomes one leaf of
    /// the forest tree. The returned identity carries the secrets needed
    /// to later prove which base tree state was promoted. Because the
    /// forest tree is an ordinary tree, its own root can be promoted
    /// again, nesting to any depth.
    ///
    /// # Errors
    /// Returns [`TreeError::CapacityExceeded`] if the forest tree is full.
    #[instrument(skip_all, fields(group_id = %element_to_hex(&group_id)))]
    pub fn promote_root_to_forest(
        &self,
        base: &IncrementalMerkleTree<H>,
        forest: &mut IncrementalMerkleTree<H>,
        group_id: Element,
    ) -> Result<(Identity, usize), TreeError> {
        let identity = Identity::new(&self.hasher, base.root(), group_id);
        let index = forest.insert(identity.commitment())?;
        debug!(index, "promoted base root into forest tree");
        Ok((identity, index))
    }

    /// Generate an inclusion proof from either tree level.
    ///
    /// Thin delegation to [`IncrementalMerkleTree::generate_proof`],
    /// provided here so base and forest proofs read symmetrically.
    ///
    /// # Errors
    /// Returns [`TreeError::IndexOutOfRange`] if no leaf was ever
    /// inserted at `index`.
    pub fn prove_membership(
        &self,
        tree: &IncrementalMerkleTree<H>,
        index: usize,
    ) -> Result<MerkleProof, TreeError> {
        tree.generate_proof(index)
    }
}
