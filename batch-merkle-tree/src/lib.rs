//! Padded complete-binary Merkle tree with compact per-leaf membership
//! proofs.
//!
//! The tree commits to an ordered batch of byte payloads: leaves are
//! domain-separated hashes of the payloads, unused leaf slots are padded
//! with a constant empty-leaf digest, and internal nodes hash their two
//! children in canonical (byte-wise sorted) order. Sorting makes node
//! combination commutative, so a proof never has to record whether a
//! sibling sits on the left or the right.
//!
//! # Core types
//!
//! - [`MerkleTree`] — offline builder (construct root, extract proofs).
//! - [`TreeProof`] — depth-prefixed proof as produced by the builder.
//! - [`WireProof`] — count-prefixed proof as consumed by the verifier.
//! - [`MerkleHasher`] — pluggable 32-byte hash backend ([`Keccak256`] is
//!   the default, [`Blake3`] an alternative).
//!
//! # Verification
//!
//! [`verify_proof`] is the bounds-checked entry point for untrusted
//! buffers; [`verify_proof_unchecked`] is the raw, trusted-caller path
//! that performs no bounds checking at all. Several proofs can be packed
//! back-to-back in one buffer and verified in a chain using the returned
//! end offset.
//!
//! All operations are pure and stateless: no I/O, no shared mutable
//! state, identical inputs always produce identical outputs.

#![warn(missing_docs)]

mod error;
mod hash;
mod proof;
mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::BatchMerkleError;
pub use hash::{
    Blake3, DIGEST_SIZE, Digest, EMPTY_LEAF_DOMAIN_TAG, Keccak256, LEAF_DOMAIN_TAG, MerkleHasher,
    NODE_DOMAIN_TAG, empty_leaf_hash, leaf_hash, node_hash,
};
pub use proof::{TreeProof, WireProof};
pub use tree::{MAX_TREE_DEPTH, MerkleTree, construct_proofs};
pub use verify::{
    DEFAULT_MAX_SIBLINGS, verify_proof, verify_proof_unchecked, verify_proof_with_limit,
};
