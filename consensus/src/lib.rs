//! Difficulty governance for a proof-of-work blockchain
//!
//! This library computes the required difficulty target for the next block
//! and verifies that mined headers satisfy their claimed target. The rules
//! are consensus-critical: every node must derive bit-identical results for
//! the same chain state, including the height-gated historical regimes.

pub mod consensus;

// Re-export key types for easier access
pub use consensus::difficulty::{
    allow_min_difficulty_block, next_work_required, next_work_required_v1, next_work_required_v2,
};
pub use consensus::validation::{check_proof_of_work, HeaderValidator};
pub use consensus_core::Hash;
