//! Proof verification over a packed wire buffer.
//!
//! Pure function — no storage, no tree. Starting from the leaf digest,
//! each sibling read from the buffer is folded in with the commutative
//! node hash; the proof is valid when the final digest equals the
//! trusted root.
//!
//! The raw entry point ([`verify_proof_unchecked`]) is a trusted-caller
//! contract: it performs no bounds checking whatsoever. The checked
//! wrappers validate the buffer up front and additionally cap the
//! untrusted sibling count, since the count field alone determines how
//! much work the fold performs.

use crate::{
    BatchMerkleError,
    hash::{DIGEST_SIZE, Digest, MerkleHasher, leaf_hash, node_hash},
};

/// Sibling-count ceiling applied by [`verify_proof`].
///
/// The count field is attacker-influenced and solely determines the
/// verifier's work, so the checked path refuses counts beyond this.
/// A depth-256 tree is far beyond any real batch; callers with larger
/// needs use [`verify_proof_with_limit`].
pub const DEFAULT_MAX_SIBLINGS: u16 = 256;

/// Verify a membership proof without any bounds checking.
///
/// Reads a big-endian u16 sibling count at `offset` in `buffer`,
/// followed by that many 32-byte sibling digests, folds them into the
/// digest of `leaf_data`, and compares the result to `root`. Returns
/// `(valid, end_offset)` where `end_offset = offset + 2 + 32 * count`,
/// so consecutive proofs packed in one buffer can be verified in a
/// chain without re-scanning.
///
/// A proof that does not reconstruct the root is a normal `false`
/// result, not an error.
///
/// # Safety
///
/// The caller must guarantee `buffer.len() >= offset + 2 + 32 * count`,
/// where `count` is the u16 stored at `offset`. Violating this is an
/// out-of-bounds read. Untrusted buffers go through [`verify_proof`]
/// instead.
pub unsafe fn verify_proof_unchecked<H: MerkleHasher>(
    buffer: &[u8],
    offset: usize,
    root: &Digest,
    leaf_data: &[u8],
) -> (bool, usize) {
    // SAFETY: the caller guarantees the count field is in bounds.
    let count = u16::from_be_bytes([
        unsafe { *buffer.get_unchecked(offset) },
        unsafe { *buffer.get_unchecked(offset + 1) },
    ]) as usize;

    let mut digest = leaf_hash::<H>(leaf_data);
    let mut cursor = offset + 2;
    for _ in 0..count {
        // SAFETY: the caller guarantees `count` siblings follow the
        // count field.
        let chunk = unsafe { buffer.get_unchecked(cursor..cursor + DIGEST_SIZE) };
        let mut sibling = [0u8; DIGEST_SIZE];
        sibling.copy_from_slice(chunk);
        digest = node_hash::<H>(&digest, &sibling);
        cursor += DIGEST_SIZE;
    }

    (digest == *root, cursor)
}

/// Verify a membership proof with bounds checking and the default
/// sibling-count ceiling ([`DEFAULT_MAX_SIBLINGS`]).
///
/// Same result contract as [`verify_proof_unchecked`]; a well-formed
/// proof that fails to reconstruct the root is `Ok((false, end))`.
pub fn verify_proof<H: MerkleHasher>(
    buffer: &[u8],
    offset: usize,
    root: &Digest,
    leaf_data: &[u8],
) -> Result<(bool, usize), BatchMerkleError> {
    verify_proof_with_limit::<H>(buffer, offset, root, leaf_data, DEFAULT_MAX_SIBLINGS)
}

/// Verify a membership proof with bounds checking and a caller-chosen
/// sibling-count ceiling.
///
/// Validates that the count field and every declared sibling lie within
/// `buffer` before delegating to the unchecked path. Fails with
/// [`BatchMerkleError::TooManySiblings`] when the declared count exceeds
/// `max_siblings`, and [`BatchMerkleError::BufferTooShort`] when the
/// buffer cannot hold what the count field promises.
pub fn verify_proof_with_limit<H: MerkleHasher>(
    buffer: &[u8],
    offset: usize,
    root: &Digest,
    leaf_data: &[u8],
    max_siblings: u16,
) -> Result<(bool, usize), BatchMerkleError> {
    let Some(header_end) = offset.checked_add(2) else {
        return Err(BatchMerkleError::BufferTooShort {
            needed: usize::MAX,
            actual: buffer.len(),
        });
    };
    if buffer.len() < header_end {
        return Err(BatchMerkleError::BufferTooShort {
            needed: header_end,
            actual: buffer.len(),
        });
    }

    let count = u16::from_be_bytes([buffer[offset], buffer[offset + 1]]);
    if count > max_siblings {
        return Err(BatchMerkleError::TooManySiblings {
            count,
            limit: max_siblings,
        });
    }

    let needed = header_end + DIGEST_SIZE * count as usize;
    if buffer.len() < needed {
        return Err(BatchMerkleError::BufferTooShort {
            needed,
            actual: buffer.len(),
        });
    }

    // SAFETY: buffer length validated against offset + 2 + 32 * count
    // just above.
    Ok(unsafe { verify_proof_unchecked::<H>(buffer, offset, root, leaf_data) })
}
