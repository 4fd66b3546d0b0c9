//! Typed errors for tree construction, insertion and proof generation.

use thiserror::Error;

/// Errors that can occur when building or querying an incremental
/// Merkle tree.
///
/// Every variant is local to the failed operation: a failed insert or
/// proof request leaves the tree exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// The tree already holds `arity ^ depth` leaves.
    #[error("tree is full: capacity of {capacity} leaves reached")]
    CapacityExceeded {
        /// Fixed capacity of the tree.
        capacity: usize,
    },

    /// A proof was requested for a leaf that was never inserted.
    #[error("leaf index {index} is out of range: {len} leaves inserted")]
    IndexOutOfRange {
        /// The requested leaf index.
        index: usize,
        /// Number of leaves currently in the tree.
        len: usize,
    },

    /// Trees must branch at least two ways at every level.
    #[error("unsupported arity {arity}: trees must branch at least two ways")]
    InvalidArity {
        /// The rejected arity.
        arity: usize,
    },

    /// The requested `arity ^ depth` capacity does not fit in `usize`.
    #[error("capacity overflow: {arity}^{depth} leaves cannot be addressed")]
    CapacityOverflow {
        /// The requested arity.
        arity: usize,
        /// The requested depth.
        depth: u8,
    },
}
