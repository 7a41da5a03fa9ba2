//! The two proof encodings.
//!
//! The builder emits depth-prefixed proofs ([`TreeProof`]); the verifier
//! consumes count-prefixed proofs ([`WireProof`]). The formats were never
//! reconciled upstream, so they are kept as distinct types with one
//! explicit conversion ([`TreeProof::to_wire`]) — mixing them is a
//! compile error rather than a silent byte-level mismatch.

use bincode::{Decode, Encode};

use crate::{
    BatchMerkleError,
    hash::{DIGEST_SIZE, Digest},
};

/// A membership proof as extracted by the builder.
///
/// Byte encoding: `[depth: 1 byte][sibling_0]..[sibling_{depth-1}]`,
/// siblings in leaf-to-root order, one per tree level.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct TreeProof {
    /// Depth of the tree the proof was extracted from.
    pub depth: u8,
    /// Sibling digests, leaf-to-root order, one per level.
    pub siblings: Vec<Digest>,
}

impl TreeProof {
    /// Encode into the depth-prefixed builder format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BatchMerkleError> {
        if self.siblings.len() != self.depth as usize {
            return Err(BatchMerkleError::InvalidEncoding(format!(
                "proof carries {} siblings but declares depth {}",
                self.siblings.len(),
                self.depth
            )));
        }
        let mut bytes = Vec::with_capacity(1 + DIGEST_SIZE * self.siblings.len());
        bytes.push(self.depth);
        for sibling in &self.siblings {
            bytes.extend_from_slice(sibling);
        }
        Ok(bytes)
    }

    /// Decode from the depth-prefixed builder format.
    ///
    /// The buffer must hold exactly `1 + 32 * depth` bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BatchMerkleError> {
        let (&depth, rest) = bytes
            .split_first()
            .ok_or_else(|| BatchMerkleError::InvalidEncoding("empty proof buffer".into()))?;
        let expected = DIGEST_SIZE * depth as usize;
        if rest.len() != expected {
            return Err(BatchMerkleError::InvalidEncoding(format!(
                "depth {} requires {} sibling bytes, got {}",
                depth,
                expected,
                rest.len()
            )));
        }
        let siblings = rest
            .chunks_exact(DIGEST_SIZE)
            .map(|chunk| {
                let mut digest = [0u8; DIGEST_SIZE];
                digest.copy_from_slice(chunk);
                digest
            })
            .collect();
        Ok(Self { depth, siblings })
    }

    /// Re-encode into the verifier's count-prefixed wire format.
    ///
    /// This is the only bridge between the two encodings.
    pub fn to_wire(&self) -> WireProof {
        WireProof {
            siblings: self.siblings.clone(),
        }
    }
}

/// A membership proof in the verifier's wire format.
///
/// Byte encoding: `[count: 2 bytes, big-endian u16][sibling_0]..
/// [sibling_{count-1}]`, siblings in leaf-to-root order. The leaf
/// payload is not part of the encoding; the verifier receives it
/// separately.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct WireProof {
    /// Sibling digests, leaf-to-root order.
    pub siblings: Vec<Digest>,
}

impl WireProof {
    /// Encode into a fresh buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BatchMerkleError> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut bytes)?;
        Ok(bytes)
    }

    /// Append the encoding to `buffer`.
    ///
    /// Several proofs appended to one buffer form a packed sequence that
    /// the verifier can walk using the end offset it returns.
    pub fn encode_into(&self, buffer: &mut Vec<u8>) -> Result<(), BatchMerkleError> {
        let count = u16::try_from(self.siblings.len()).map_err(|_| {
            BatchMerkleError::InvalidEncoding(format!(
                "{} siblings exceed the u16 count field",
                self.siblings.len()
            ))
        })?;
        buffer.extend_from_slice(&count.to_be_bytes());
        for sibling in &self.siblings {
            buffer.extend_from_slice(sibling);
        }
        Ok(())
    }

    /// Length of the encoding in bytes: `2 + 32 * count`.
    pub fn encoded_len(&self) -> usize {
        2 + DIGEST_SIZE * self.siblings.len()
    }
}
