//! Digishield retarget algorithm (V2)
//!
//! Height-uniform variant of the legacy shape: the same boundary walk and
//! rescale, but a single `[timespan/4, timespan*4]` clamp, and per-block
//! retargeting once the new-protocol height is reached.

use consensus_core::constants::MAX_ADJUSTMENT_FACTOR;
use consensus_core::{BlockEntry, ChainIndex, ConsensusError, Header, Params};

use super::min_difficulty::{allow_min_difficulty_block, min_difficulty_fallback};
use super::rescale_target;

/// Required compact target for the block following `last` under the
/// Digishield regime.
pub fn next_work_required_v2(
    chain: &ChainIndex,
    last: &BlockEntry,
    candidate: &Header,
    params: &Params,
) -> Result<u32, ConsensusError> {
    if allow_min_difficulty_block(last, candidate, params) {
        return Ok(params.pow_limit_bits);
    }

    // Per-block retargeting once the new protocol is in effect.
    let interval = if last.height >= params.digishield_height {
        1
    } else {
        params.difficulty_adjustment_interval()
    };

    let next_height = last.height + 1;
    if next_height % interval != 0 {
        if params.allow_min_difficulty_blocks {
            return min_difficulty_fallback(chain, last, candidate, params);
        }
        return Ok(last.bits);
    }

    // Same first-retarget anchor correction as the legacy regime.
    let blocks_to_go_back = if next_height == interval { interval - 1 } else { interval };
    let first_height = last.height - blocks_to_go_back;
    let first = chain
        .ancestor_at(last, first_height)
        .ok_or(ConsensusError::MissingAncestor { height: first_height })?;

    Ok(calculate_next_work_required(last, first.time, params))
}

/// Clamps the measured timespan to a uniform factor-of-four band, rescales
/// the previous target and clips to the ceiling.
///
/// `no_retargeting` short-circuits everything and keeps the previous bits.
pub fn calculate_next_work_required(last: &BlockEntry, first_block_time: i64, params: &Params) -> u32 {
    if params.no_retargeting {
        return last.bits;
    }

    let target_timespan = params.pow_target_timespan;
    let mut actual_timespan = last.time - first_block_time;
    if actual_timespan < target_timespan / MAX_ADJUSTMENT_FACTOR {
        actual_timespan = target_timespan / MAX_ADJUSTMENT_FACTOR;
    }
    if actual_timespan > target_timespan * MAX_ADJUSTMENT_FACTOR {
        actual_timespan = target_timespan * MAX_ADJUSTMENT_FACTOR;
    }

    rescale_target(last.bits, actual_timespan, target_timespan, params.pow_limit_bits)
}
