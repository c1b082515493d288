//! Core consensus types for a proof-of-work blockchain
//!
//! This crate holds the pieces shared by every consensus subsystem: network
//! parameters, the block header, the append-only chain index used for
//! ancestor lookups, and the consensus error taxonomy.

pub mod chain;
pub mod config;
pub mod errors;
pub mod header;

// Re-export key types for easier access
pub use chain::{BlockEntry, ChainIndex};
pub use config::constants;
pub use config::params::{Params, RetargetRegime};
pub use errors::ConsensusError;
pub use header::Header;
pub use rapid_hashes::{Hash, ZERO_HASH};
