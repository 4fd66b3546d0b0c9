//! Append-only incremental Merkle tree with configurable depth and arity.
//!
//! Every filled node is stored densely per level, and empty slots read
//! from a per-level empty-subtree cache, so an insert updates exactly the
//! `depth` ancestors on the leaf's path and proof generation never
//! rehashes the tree.

#![allow(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "Level and slot arithmetic is bounded by the checked capacity"
)]

use grove_core::{Element, FieldHasher, PoseidonHasher};

use crate::error::TreeError;
use crate::proof::MerkleProof;

/// An append-only, fixed-depth, fixed-arity Merkle tree.
///
/// Leaves are appended left to right; each leaf keeps the index it was
/// assigned at insertion. Depth 0 is a capacity-one tree whose root is
/// its single leaf, or the zero value while empty.
#[derive(Debug, Clone)]
pub struct IncrementalMerkleTree<H: FieldHasher = PoseidonHasher> {
    hasher: H,
    depth: u8,
    arity: usize,
    capacity: usize,
    /// `zeros[level]` is the root of an all-empty subtree of that height.
    zeros: Vec<Element>,
    /// `levels[0]` holds the leaves; `levels[depth]` holds at most the root.
    levels: Vec<Vec<Element>>,
}

impl<H: FieldHasher> IncrementalMerkleTree<H> {
    /// Create an empty tree of the given shape.
    ///
    /// The arity is a construction parameter, not a constant: binary
    /// trees combine nodes with plain `hash2(left, right)`, wider trees
    /// left-fold their children through the same two-input hash. Empty
    /// leaf slots are padded with `zero_value`.
    ///
    /// # Errors
    /// Returns [`TreeError::InvalidArity`] for arity below 2 and
    /// [`TreeError::CapacityOverflow`] when `arity ^ depth` does not fit
    /// in `usize`.
    pub fn new(hasher: H, depth: u8, arity: usize, zero_value: Element) -> Result<Self, TreeError> {
        if arity < 2 {
            return Err(TreeError::InvalidArity { arity });
        }
        let capacity = arity
            .checked_pow(u32::from(depth))
            .ok_or(TreeError::CapacityOverflow { arity, depth })?;

        let height = usize::from(depth);
        let mut zeros = Vec::with_capacity(height + 1);
        zeros.push(zero_value);
        for level in 0..height {
            let empty_children = vec![zeros[level]; arity];
            zeros.push(hasher.hash_children(&empty_children));
        }

        Ok(Self {
            hasher,
            depth,
            arity,
            capacity,
            zeros,
            levels: vec![Vec::new(); height + 1],
        })
    }

    /// Append a member at the next free index and return that index.
    ///
    /// # Errors
    /// Returns [`TreeError::CapacityExceeded`] once `arity ^ depth`
    /// leaves are held; the failed attempt leaves the tree untouched.
    pub fn insert(&mut self, member: Element) -> Result<usize, TreeError> {
        let index = self.len();
        if index >= self.capacity {
            return Err(TreeError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.levels[0].push(member);
        let mut node = index;
        for level in 0..usize::from(self.depth) {
            let parent = node / self.arity;
            let first_child = parent * self.arity;
            let mut children = Vec::with_capacity(self.arity);
            for slot in first_child..first_child + self.arity {
                children.push(self.node_at(level, slot));
            }
            let digest = self.hasher.hash_children(&children);

            let upper = &mut self.levels[level + 1];
            if parent == upper.len() {
                upper.push(digest);
            } else {
                upper[parent] = digest;
            }
            node = parent;
        }
        Ok(index)
    }

    /// Current root, reflecting every insertion so far.
    #[must_use]
    pub fn root(&self) -> Element {
        self.node_at(usize::from(self.depth), 0)
    }

    /// Generate an inclusion proof for a previously inserted leaf.
    ///
    /// Siblings are reported bottom-up, `arity - 1` per level, with
    /// empty slots read from the zero cache; the proof is deterministic
    /// for a given tree state and index.
    ///
    /// # Errors
    /// Returns [`TreeError::IndexOutOfRange`] if no leaf was ever
    /// inserted at `index`.
    pub fn generate_proof(&self, index: usize) -> Result<MerkleProof, TreeError> {
        let len = self.len();
        if index >= len {
            return Err(TreeError::IndexOutOfRange { index, len });
        }

        let height = usize::from(self.depth);
        let mut siblings = Vec::with_capacity(height);
        let mut path_indices = Vec::with_capacity(height);
        let mut node = index;
        for level in 0..height {
            let slot = node % self.arity;
            let parent = node / self.arity;
            let first_child = parent * self.arity;
            let mut level_siblings = Vec::with_capacity(self.arity - 1);
            for offset in 0..self.arity {
                if offset != slot {
                    level_siblings.push(self.node_at(level, first_child + offset));
                }
            }
            siblings.push(level_siblings);
            path_indices.push(slot);
            node = parent;
        }

        Ok(MerkleProof {
            root: self.root(),
            leaf: self.levels[0][index],
            index,
            siblings,
            path_indices,
        })
    }

    /// Check a proof against this tree's hashing convention.
    ///
    /// Returns `true` iff recomputing the root from the proof's leaf,
    /// siblings and path indices reproduces `proof.root`. A mismatch or
    /// a structurally malformed proof yields `false`, never an error.
    #[must_use]
    pub fn verify_proof(&self, proof: &MerkleProof) -> bool {
        proof.compute_root(&self.hasher) == Some(proof.root)
    }

    /// Number of leaves inserted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels[0].len()
    }

    /// Whether no leaf has been inserted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels[0].is_empty()
    }

    /// Fixed leaf capacity, `arity ^ depth`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fixed tree depth.
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// Fixed branching factor.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// The leaf at `index`, if one was inserted there.
    #[must_use]
    pub fn leaf(&self, index: usize) -> Option<Element> {
        self.levels[0].get(index).copied()
    }

    fn node_at(&self, level: usize, index: usize) -> Element {
        self.levels[level]
            .get(index)
            .copied()
            .unwrap_or(self.zeros[level])
    }
}
