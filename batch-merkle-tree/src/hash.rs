//! Domain-separated hash primitives.
//!
//! Every digest in the tree is tagged by the byte category it came from:
//! leaves, internal nodes, and the empty-leaf placeholder each prepend a
//! distinct one-byte tag before hashing, so a leaf digest can never be
//! reinterpreted as a node digest or vice versa.

/// A 32-byte cryptographic hash output.
pub type Digest = [u8; 32];

/// Size of a [`Digest`] in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Tag byte prepended before hashing a leaf payload.
pub const LEAF_DOMAIN_TAG: u8 = 0x00;

/// Tag byte prepended before hashing a pair of child digests.
pub const NODE_DOMAIN_TAG: u8 = 0x01;

/// Tag byte hashed alone to produce the empty-leaf padding digest.
pub const EMPTY_LEAF_DOMAIN_TAG: u8 = 0x02;

/// A 32-byte-output hash backend.
///
/// The backend is injected as a type parameter; implementors are unit
/// types carrying no state. [`Keccak256`] is the default backend,
/// [`Blake3`] an alternative.
pub trait MerkleHasher {
    /// Hash the concatenation of `parts` into one 32-byte digest.
    fn hash_parts(parts: &[&[u8]]) -> Digest;
}

/// Keccak-256 hash backend, the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256;

impl MerkleHasher for Keccak256 {
    fn hash_parts(parts: &[&[u8]]) -> Digest {
        use sha3::Digest as _;
        let mut hasher = sha3::Keccak256::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize().into()
    }
}

/// BLAKE3 hash backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3;

impl MerkleHasher for Blake3 {
    fn hash_parts(parts: &[&[u8]]) -> Digest {
        let mut hasher = blake3::Hasher::new();
        for part in parts {
            hasher.update(part);
        }
        *hasher.finalize().as_bytes()
    }
}

/// Digest used to pad unused leaf slots: the hash of the empty-leaf tag
/// byte alone. Constant for a given backend.
pub fn empty_leaf_hash<H: MerkleHasher>() -> Digest {
    H::hash_parts(&[&[EMPTY_LEAF_DOMAIN_TAG]])
}

/// Hash a leaf payload: `H(LEAF_DOMAIN_TAG || payload)`.
pub fn leaf_hash<H: MerkleHasher>(payload: &[u8]) -> Digest {
    H::hash_parts(&[&[LEAF_DOMAIN_TAG], payload])
}

/// Combine two child digests: `H(NODE_DOMAIN_TAG || smaller || larger)`.
///
/// The children are sorted byte-wise before hashing, so
/// `node_hash(a, b) == node_hash(b, a)` and proofs need not record
/// left/right position.
pub fn node_hash<H: MerkleHasher>(a: &Digest, b: &Digest) -> Digest {
    let (smaller, larger) = if a <= b { (a, b) } else { (b, a) };
    H::hash_parts(&[&[NODE_DOMAIN_TAG], smaller, larger])
}
