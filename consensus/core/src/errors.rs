use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsensusError {
    #[error("Invalid proof of work")]
    InvalidProofOfWork,

    #[error("Difficulty bits mismatch: expected {expected:#010x}, got {actual:#010x}")]
    BadDiffBits { expected: u32, actual: u32 },

    #[error("Invalid timestamp")]
    InvalidTimestamp,

    /// Ancestor lookup failed for an in-range height. This is a chain-index
    /// invariant break, not a property of the candidate block; processing of
    /// the block must be aborted rather than falling back to a default.
    #[error("Missing ancestor at height {height}")]
    MissingAncestor { height: u64 },
}
