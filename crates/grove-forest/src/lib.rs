//! Incremental Merkle trees and the nested-commitment forest construction.
//!
//! A base tree accumulates identity commitments left to right. Its root,
//! combined with a group identifier, is itself committed as a leaf of a
//! higher-level forest tree, so one tree's whole membership state becomes
//! a single member of another. Chaining that promotion gives hierarchical
//! group-of-groups membership proofs at any nesting depth.

mod error;
mod forest;
mod proof;
mod tree;

pub use error::TreeError;
pub use forest::MerkleForestBuilder;
pub use proof::MerkleProof;
pub use tree::IncrementalMerkleTree;
