use std::marker::PhantomData;

use crate::{
    BatchMerkleError,
    hash::{Digest, Keccak256, MerkleHasher, empty_leaf_hash, leaf_hash, node_hash},
    proof::TreeProof,
};

/// Maximum depth the builder accepts.
///
/// Construction allocates `2^(depth+1)` digests up front, so the cap
/// keeps the transient allocation bounded (1 GiB at depth 24). The
/// verifier is not bound by this limit.
pub const MAX_TREE_DEPTH: u8 = 24;

/// Validate that a tree depth is within the builder's supported range.
fn validate_depth(depth: u8) -> Result<(), BatchMerkleError> {
    if depth > MAX_TREE_DEPTH {
        return Err(BatchMerkleError::DepthTooLarge {
            depth,
            max: MAX_TREE_DEPTH,
        });
    }
    Ok(())
}

/// A complete binary Merkle tree over an ordered batch of messages.
///
/// Nodes live in a contiguous array indexed 1-based: slot 0 is unused,
/// the root is slot 1, children of `i` are `2i` and `2i+1`, the sibling
/// of `i` is `i ^ 1`, and leaves occupy `[2^depth, 2^(depth+1))`. Leaf
/// slots beyond the message batch are padded with the constant
/// empty-leaf digest.
///
/// The tree is built once, fully, and then queried; there is no
/// incremental insertion.
#[derive(Debug, Clone)]
pub struct MerkleTree<H: MerkleHasher = Keccak256> {
    depth: u8,
    message_count: usize,
    nodes: Vec<Digest>,
    _hasher: PhantomData<H>,
}

impl<H: MerkleHasher> MerkleTree<H> {
    /// Build the tree over `messages` at the given depth.
    ///
    /// Fails with [`BatchMerkleError::InsufficientDepth`] when the batch
    /// does not fit in `2^depth` leaves, and with
    /// [`BatchMerkleError::DepthTooLarge`] beyond [`MAX_TREE_DEPTH`].
    /// Depth 0 is valid: the root is then the single leaf digest.
    pub fn build<M: AsRef<[u8]>>(messages: &[M], depth: u8) -> Result<Self, BatchMerkleError> {
        validate_depth(depth)?;

        let leaf_count = 1usize << depth;
        if messages.len() > leaf_count {
            return Err(BatchMerkleError::InsufficientDepth {
                depth,
                capacity: leaf_count,
                message_count: messages.len(),
            });
        }

        let mut nodes = vec![[0u8; 32]; 2 * leaf_count];

        // Hash of the empty-leaf tag, computed once and reused for every
        // padded slot.
        let empty = empty_leaf_hash::<H>();
        for i in 0..leaf_count {
            nodes[leaf_count + i] = match messages.get(i) {
                Some(message) => leaf_hash::<H>(message.as_ref()),
                None => empty,
            };
        }

        // Reverse index order visits each level bottom-up, so both
        // children are final before their parent is hashed.
        for id in (1..leaf_count).rev() {
            nodes[id] = node_hash::<H>(&nodes[2 * id], &nodes[2 * id + 1]);
        }

        Ok(Self {
            depth,
            message_count: messages.len(),
            nodes,
            _hasher: PhantomData,
        })
    }

    /// The root digest, the externally published trust anchor.
    pub fn root(&self) -> Digest {
        self.nodes[1]
    }

    /// Depth of the tree.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Number of messages committed (padding slots excluded).
    pub fn message_count(&self) -> usize {
        self.message_count
    }

    /// Extract the membership proof for the message at `index`.
    ///
    /// Walks from the leaf to the root, collecting the sibling digest at
    /// each level in leaf-to-root order. Proofs are only issued for real
    /// messages, never for padding slots.
    pub fn proof(&self, index: usize) -> Result<TreeProof, BatchMerkleError> {
        if index >= self.message_count {
            return Err(BatchMerkleError::PositionOutOfRange {
                position: index,
                count: self.message_count,
            });
        }

        let mut siblings = Vec::with_capacity(self.depth as usize);
        let mut pos = (1usize << self.depth) + index;
        while pos > 1 {
            siblings.push(self.nodes[pos ^ 1]);
            pos /= 2;
        }

        Ok(TreeProof {
            depth: self.depth,
            siblings,
        })
    }
}

/// Build a tree over `messages` and extract one proof per message.
///
/// Returns the root digest and the proofs in message order. This is the
/// offline producer half of the system: the root is published, and each
/// proof is later re-encoded into the verifier's wire format
/// ([`TreeProof::to_wire`]) to be checked at the point of use.
pub fn construct_proofs<H: MerkleHasher, M: AsRef<[u8]>>(
    messages: &[M],
    depth: u8,
) -> Result<(Digest, Vec<TreeProof>), BatchMerkleError> {
    let tree = MerkleTree::<H>::build(messages, depth)?;
    let mut proofs = Vec::with_capacity(messages.len());
    for index in 0..messages.len() {
        proofs.push(tree.proof(index)?);
    }
    Ok((tree.root(), proofs))
}
