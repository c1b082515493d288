//! Minimum-difficulty exception rule
//!
//! On networks that allow it, a block may be mined at the network ceiling
//! when enough wall-clock time has passed since the previous block. Both
//! retarget regimes consult the same rule.

use consensus_core::{BlockEntry, ChainIndex, ConsensusError, Header, Params};

/// Whether the candidate may be mined at the network ceiling.
///
/// Requires the exception to be enabled for the network, the chain to have
/// passed the activation height, and the candidate timestamp to exceed the
/// previous block's by more than twice the target spacing.
pub fn allow_min_difficulty_block(last: &BlockEntry, candidate: &Header, params: &Params) -> bool {
    if !params.allow_min_difficulty_blocks {
        return false;
    }

    if last.height < params.min_difficulty_height {
        return false;
    }

    candidate.time > last.time + params.pow_target_spacing * 2
}

/// Non-boundary handling on networks with minimum-difficulty blocks.
///
/// If the elapsed-time test passes, the candidate gets the ceiling outright.
/// Otherwise the comparison baseline must not be a previous ceiling block:
/// walk back past every ancestor that sits off an interval boundary with
/// ceiling bits, and return the bits of the first block that either carries
/// real difficulty or is an interval boundary. Without this walk the chain
/// would oscillate between the ceiling and a falsely-low retarget baseline.
pub(crate) fn min_difficulty_fallback(
    chain: &ChainIndex,
    last: &BlockEntry,
    candidate: &Header,
    params: &Params,
) -> Result<u32, ConsensusError> {
    if candidate.time > last.time + params.pow_target_spacing * 2 {
        return Ok(params.pow_limit_bits);
    }

    // The boundary test always uses the legacy interval, even when
    // Digishield has moved to per-block retargeting.
    let interval = params.difficulty_adjustment_interval();
    let mut entry = last;
    while entry.height > 0 && entry.height % interval != 0 && entry.bits == params.pow_limit_bits {
        let prev_height = entry.height - 1;
        entry = chain
            .ancestor_at(entry, prev_height)
            .ok_or(ConsensusError::MissingAncestor { height: prev_height })?;
    }
    Ok(entry.bits)
}
