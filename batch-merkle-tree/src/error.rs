use thiserror::Error;

/// Errors from batch Merkle tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchMerkleError {
    /// The requested depth cannot hold the message batch as leaves.
    #[error("tree of depth {depth} holds {capacity} leaves, cannot fit {message_count} messages")]
    InsufficientDepth {
        /// Requested tree depth.
        depth: u8,
        /// Leaf capacity at that depth (`2^depth`).
        capacity: usize,
        /// Number of messages in the batch.
        message_count: usize,
    },
    /// The requested depth exceeds the builder's supported maximum.
    #[error("depth {depth} exceeds the maximum supported depth {max}")]
    DepthTooLarge {
        /// Requested tree depth.
        depth: u8,
        /// Maximum depth the builder accepts.
        max: u8,
    },
    /// A proof was requested for a leaf slot holding no message.
    #[error("position {position} is out of range (count={count})")]
    PositionOutOfRange {
        /// Requested leaf position.
        position: usize,
        /// Number of messages committed in the tree.
        count: usize,
    },
    /// The proof buffer is shorter than its count field requires.
    #[error("proof buffer too short: need {needed} bytes, have {actual}")]
    BufferTooShort {
        /// Bytes required by the offset plus the declared sibling count.
        needed: usize,
        /// Actual buffer length.
        actual: usize,
    },
    /// The proof's declared sibling count exceeds the configured ceiling.
    #[error("proof declares {count} siblings, exceeding the limit of {limit}")]
    TooManySiblings {
        /// Sibling count read from the untrusted count field.
        count: u16,
        /// Configured maximum.
        limit: u16,
    },
    /// A proof byte encoding does not match its declared shape.
    #[error("invalid proof encoding: {0}")]
    InvalidEncoding(String),
}
