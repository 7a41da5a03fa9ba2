//! Shared helpers for the test suite.

use crate::{Keccak256, MerkleHasher, TreeProof};

/// Deterministic varied-length payloads for tree tests.
///
/// Payload `i` is derived from the Keccak digest of its index, with a
/// length between 1 and 48 bytes so batches mix short and long leaves.
pub(crate) fn sample_messages(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| {
            let seed = Keccak256::hash_parts(&[b"sample", &(i as u64).to_be_bytes()]);
            let len = 1 + (seed[0] as usize % 48);
            seed.iter().cycle().take(len).copied().collect()
        })
        .collect()
}

/// Pack the wire encodings of `proofs` back-to-back into one buffer.
pub(crate) fn pack_wire_proofs(proofs: &[TreeProof]) -> Vec<u8> {
    let mut buffer = Vec::new();
    for proof in proofs {
        proof
            .to_wire()
            .encode_into(&mut buffer)
            .expect("wire encoding should fit a u16 count");
    }
    buffer
}
