//! Contextual header validation
//!
//! Ties the difficulty schedule and the proof verifier together: a header
//! is accepted only if it claims exactly the bits the schedule requires for
//! its position and its hash satisfies that claim.

use consensus_core::{BlockEntry, ChainIndex, ConsensusError, Header, Params};

use crate::consensus::difficulty::next_work_required;
use super::proof::check_proof_of_work;

/// Maximum seconds a header timestamp may sit ahead of adjusted time.
pub const MAX_TIMESTAMP_FUTURE_OFFSET: i64 = 2 * 3600;

/// Header validator for consensus rules
pub struct HeaderValidator {
    max_timestamp_future_offset: i64,
}

impl HeaderValidator {
    /// Create a new header validator with default parameters
    pub fn new() -> Self {
        Self { max_timestamp_future_offset: MAX_TIMESTAMP_FUTURE_OFFSET }
    }

    /// Create a new header validator with a custom future-timestamp bound
    pub fn with_params(max_timestamp_future_offset: i64) -> Self {
        Self { max_timestamp_future_offset }
    }

    /// Validate a candidate header against the chain it extends.
    ///
    /// `last` is the chain tip the candidate builds on (`None` for genesis).
    pub fn validate_header(
        &self,
        chain: &ChainIndex,
        last: Option<&BlockEntry>,
        header: &Header,
        params: &Params,
    ) -> Result<(), ConsensusError> {
        // The claimed bits must be exactly what the schedule requires here.
        let expected = next_work_required(chain, last, header, params)?;
        if header.bits != expected {
            return Err(ConsensusError::BadDiffBits { expected, actual: header.bits });
        }

        if !check_proof_of_work(header.hash(), header.bits, params) {
            return Err(ConsensusError::InvalidProofOfWork);
        }

        Ok(())
    }

    /// Check the header timestamp against the caller-supplied adjusted time.
    pub fn check_timestamp(&self, header: &Header, now: i64) -> Result<(), ConsensusError> {
        if header.time > now + self.max_timestamp_future_offset {
            return Err(ConsensusError::InvalidTimestamp);
        }
        Ok(())
    }
}

impl Default for HeaderValidator {
    fn default() -> Self {
        Self::new()
    }
}
