//! The two-input field hash contract.
//!
//! Commitment derivation and tree-node combination share one hasher so a
//! single order-sensitivity convention holds everywhere a proof is
//! recomputed. Wider nodes are folded down to repeated two-input calls,
//! which keeps the contract at `hash2` regardless of tree arity.

use halo2_gadgets::poseidon::primitives::{self as poseidon, ConstantLength, P128Pow5T3};

use crate::field::Element;

/// A deterministic, collision-resistant two-input hash over the field.
///
/// Implementations must be pure: no side effects, and identical inputs
/// always produce identical outputs. `hash2(a, b)` and `hash2(b, a)` are
/// distinct in general; callers rely on that ordering.
pub trait FieldHasher {
    /// Hash an ordered pair of field elements.
    fn hash2(&self, a: Element, b: Element) -> Element;

    /// Hash an ordered sequence of children into one node.
    ///
    /// The children are combined by a left fold of [`FieldHasher::hash2`],
    /// so a two-child node is exactly `hash2(left, right)`. A single
    /// child hashes to itself and an empty sequence hashes to zero.
    fn hash_children(&self, children: &[Element]) -> Element {
        let mut remaining = children.iter().copied();
        let Some(first) = remaining.next() else {
            return Element::zero();
        };
        let Some(second) = remaining.next() else {
            return first;
        };
        let mut node = self.hash2(first, second);
        for child in remaining {
            node = self.hash2(node, child);
        }
        node
    }
}

/// Poseidon over the Pallas base field, width 3, rate 2.
///
/// This is the `P128Pow5T3` instantiation, the same permutation the
/// Halo 2 gadget set uses in-circuit, so commitments and roots produced
/// here can later be recomputed inside a circuit without re-hashing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoseidonHasher;

impl FieldHasher for PoseidonHasher {
    fn hash2(&self, a: Element, b: Element) -> Element {
        poseidon::Hash::<_, P128Pow5T3, ConstantLength<2>, 3, 2>::init().hash([a, b])
    }
}
