#![allow(missing_docs)]
#![allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]

use grove_core::{Element, Identity, PoseidonHasher};
use grove_forest::{IncrementalMerkleTree, MerkleForestBuilder, TreeError};

fn binary_tree(depth: u8) -> IncrementalMerkleTree {
    IncrementalMerkleTree::new(PoseidonHasher, depth, 2, Element::zero())
        .expect("valid tree parameters")
}

fn filled_tree(depth: u8, leaves: u64) -> IncrementalMerkleTree {
    let mut tree = binary_tree(depth);
    for value in 0..leaves {
        tree.insert(Element::from(100 + value)).expect("tree has room");
    }
    tree
}

#[test]
fn base_root_promotes_into_the_forest() {
    let hasher = PoseidonHasher;
    let builder = MerkleForestBuilder::new(hasher);
    let mut base = binary_tree(4);
    let mut forest = binary_tree(4);

    let member = Identity::from_u64(&hasher, 911, 5);
    let base_index = builder.commit_to_base(&mut base, &member).unwrap();
    assert_eq!(base_index, 0);

    let base_proof = builder.prove_membership(&base, 0).unwrap();
    assert_eq!(base_proof.root, base.root());
    assert_eq!(base_proof.leaf, member.commitment());

    let (group_identity, forest_index) = builder
        .promote_root_to_forest(&base, &mut forest, Element::from(3))
        .unwrap();
    assert_eq!(forest_index, 0);
    assert_eq!(group_identity, Identity::new(&hasher, base.root(), Element::from(3)));

    let forest_proof = builder.prove_membership(&forest, 0).unwrap();
    assert!(base.verify_proof(&base_proof));
    assert!(forest.verify_proof(&forest_proof));
    assert_eq!(forest_proof.leaf, group_identity.commitment());
    assert_ne!(forest_proof.leaf, base_proof.leaf);
}

#[test]
fn promotion_chains_to_deeper_nesting() {
    let hasher = PoseidonHasher;
    let builder = MerkleForestBuilder::new(hasher);
    let mut base = binary_tree(3);
    let mut mid = binary_tree(3);
    let mut top = binary_tree(3);

    builder
        .commit_to_base(&mut base, &Identity::from_u64(&hasher, 911, 5))
        .unwrap();
    let (_, mid_index) = builder
        .promote_root_to_forest(&base, &mut mid, Element::from(3))
        .unwrap();
    let (_, top_index) = builder
        .promote_root_to_forest(&mid, &mut top, Element::from(7))
        .unwrap();

    for (tree, index) in [(&base, 0), (&mid, mid_index), (&top, top_index)] {
        let proof = builder.prove_membership(tree, index).unwrap();
        assert!(tree.verify_proof(&proof));
    }
}

#[test]
fn every_inserted_index_round_trips() {
    let tree = filled_tree(3, 5);
    for index in 0..tree.len() {
        let proof = tree.generate_proof(index).unwrap();
        assert!(tree.verify_proof(&proof), "index {index} should verify");
        assert_eq!(proof.index, index);
        assert_eq!(proof.leaf, tree.leaf(index).unwrap());
    }
}

#[test]
fn insertion_indices_are_monotonic() {
    let mut tree = binary_tree(4);
    for expected in 0_usize..10 {
        let index = tree.insert(Element::from(7)).unwrap();
        assert_eq!(index, expected);
    }
}

#[test]
fn full_tree_rejects_inserts_and_keeps_its_root() {
    let mut tree = filled_tree(2, 4);
    let root_before = tree.root();

    assert_eq!(
        tree.insert(Element::from(999)),
        Err(TreeError::CapacityExceeded { capacity: 4 })
    );
    assert_eq!(tree.root(), root_before);
    assert_eq!(tree.len(), 4);
}

#[test]
fn proof_for_unknown_index_is_rejected() {
    let tree = filled_tree(3, 2);
    assert_eq!(
        tree.generate_proof(2),
        Err(TreeError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(
        tree.generate_proof(100),
        Err(TreeError::IndexOutOfRange { index: 100, len: 2 })
    );
}

#[test]
fn tampering_with_any_field_fails_verification() {
    let tree = filled_tree(3, 5);
    let proof = tree.generate_proof(2).unwrap();
    assert!(tree.verify_proof(&proof));

    let mut tampered = proof.clone();
    tampered.leaf = Element::from(0xdead);
    assert!(!tree.verify_proof(&tampered));

    let mut tampered = proof.clone();
    tampered.root = Element::from(0xdead);
    assert!(!tree.verify_proof(&tampered));

    let mut tampered = proof.clone();
    tampered.siblings[1][0] = Element::from(0xdead);
    assert!(!tree.verify_proof(&tampered));

    let mut tampered = proof.clone();
    tampered.path_indices[0] ^= 1;
    assert!(!tree.verify_proof(&tampered));

    let mut tampered = proof.clone();
    tampered.index += 1;
    assert!(!tree.verify_proof(&tampered));

    // The untouched proof still verifies afterwards.
    assert!(tree.verify_proof(&proof));
}

#[test]
fn proofs_survive_json_transport() {
    let tree = filled_tree(3, 3);
    let proof = tree.generate_proof(1).unwrap();

    let json = serde_json::to_string(&proof).expect("proof serializes");
    assert!(json.contains("\"0x"), "field elements travel as hex numerals");

    let restored = serde_json::from_str(&json).expect("proof deserializes");
    assert_eq!(proof, restored);
    assert!(tree.verify_proof(&restored));
}

#[test]
fn ternary_proofs_carry_two_siblings_per_level() {
    let mut tree = IncrementalMerkleTree::new(PoseidonHasher, 2, 3, Element::zero())
        .expect("valid tree parameters");
    for value in 0..4_u64 {
        tree.insert(Element::from(value)).unwrap();
    }

    for index in 0..tree.len() {
        let proof = tree.generate_proof(index).unwrap();
        assert!(proof.siblings.iter().all(|level| level.len() == 2));
        assert!(tree.verify_proof(&proof));
    }
}

#[test]
fn proofs_are_deterministic_for_a_tree_state() {
    let tree = filled_tree(4, 6);
    assert_eq!(
        tree.generate_proof(3).unwrap(),
        tree.generate_proof(3).unwrap()
    );
}
