//! Legacy retarget algorithm (V1)
//!
//! Interval-based retargeting whose rule set is itself versioned by height:
//! the timespan floor loosens as the chain matures, and past the emergency
//! activation height two time-drop rules keep a stalled chain minable.

use primitive_types::U256;

use consensus_core::constants::{
    EMERGENCY_DROP_WINDOW, EMERGENCY_EASE_FACTOR, LEGACY_FLOOR_BAND_ONE, LEGACY_FLOOR_BAND_TWO,
    MAX_ADJUSTMENT_FACTOR, STALL_DROP_WINDOW,
};
use consensus_core::{BlockEntry, ChainIndex, ConsensusError, Header, Params};
use rapid_math::{compact_to_target, target_to_compact};

use super::min_difficulty::min_difficulty_fallback;
use super::rescale_target;

/// Required compact target for the block following `last` under the legacy
/// regime.
pub fn next_work_required_v1(
    chain: &ChainIndex,
    last: &BlockEntry,
    candidate: &Header,
    params: &Params,
) -> Result<u32, ConsensusError> {
    let target_timespan = params.pow_target_timespan;
    let interval = params.difficulty_adjustment_interval();
    let next_height = last.height + 1;

    // Emergency difficulty drops, active past their own hard-fork height.
    // A chain stalled for months resets to the ceiling outright; one stalled
    // for an hour gets a large one-block ease instead.
    if next_height > params.emergency_drop_height {
        let elapsed = candidate.time - last.time;
        if elapsed > STALL_DROP_WINDOW {
            log::debug!("emergency stall drop at height {next_height}: {elapsed}s elapsed");
            return Ok(params.pow_limit_bits);
        }
        if elapsed > EMERGENCY_DROP_WINDOW {
            log::debug!("emergency ease at height {next_height}: {elapsed}s elapsed");
            let pow_limit = compact_to_target(params.pow_limit_bits).target;
            let mut eased = compact_to_target(last.bits)
                .target
                .checked_mul(U256::from(EMERGENCY_EASE_FACTOR))
                .unwrap_or(U256::MAX);
            if eased > pow_limit {
                eased = pow_limit;
            }
            return Ok(target_to_compact(eased));
        }
    }

    // Only change once per interval.
    if next_height % interval != 0 {
        if params.allow_min_difficulty_blocks {
            return min_difficulty_fallback(chain, last, candidate, params);
        }
        return Ok(last.bits);
    }

    // Go back one full interval, except on the very first retarget where the
    // anchor is one block short. Anchoring the first retarget on the genesis
    // block closes a difficulty-manipulation vector for a majority attacker.
    let blocks_to_go_back = if next_height == interval { interval - 1 } else { interval };
    let first_height = last.height - blocks_to_go_back;
    let first = chain
        .ancestor_at(last, first_height)
        .ok_or(ConsensusError::MissingAncestor { height: first_height })?;

    let mut actual_timespan = last.time - first.time;
    log::trace!("v1 retarget at height {next_height}: actual timespan {actual_timespan}s");

    // The floor divisor depends on chain age: early heights may only climb
    // slowly, mature heights adjust within the usual factor of four.
    let floor = if next_height < LEGACY_FLOOR_BAND_ONE {
        target_timespan / 32
    } else if next_height < LEGACY_FLOOR_BAND_TWO {
        target_timespan / 8
    } else {
        target_timespan / MAX_ADJUSTMENT_FACTOR
    };
    if actual_timespan < floor {
        actual_timespan = floor;
    }
    if actual_timespan > target_timespan * MAX_ADJUSTMENT_FACTOR {
        actual_timespan = target_timespan * MAX_ADJUSTMENT_FACTOR;
    }

    Ok(rescale_target(last.bits, actual_timespan, target_timespan, params.pow_limit_bits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use consensus_core::ZERO_HASH;

    const REAL_BITS: u32 = 0x1c010000;

    fn params() -> Params {
        Params::mainnet()
    }

    fn candidate_at(time: i64) -> Header {
        Header::new(1, ZERO_HASH, ZERO_HASH, time, 0, 0)
    }

    /// Chain of `len` blocks spaced `spacing` seconds apart, all at `bits`.
    fn build_chain(len: u64, spacing: i64, bits: u32) -> ChainIndex {
        let mut chain = ChainIndex::new();
        for i in 0..len {
            chain.push(i as i64 * spacing, bits, ZERO_HASH);
        }
        chain
    }

    fn retarget_at(next_height: u64, spacing: i64, bits: u32, params: &Params) -> u32 {
        let chain = build_chain(next_height, spacing, bits);
        let last = *chain.tip().unwrap();
        let candidate = candidate_at(last.time + spacing);
        next_work_required_v1(&chain, &last, &candidate, params).unwrap()
    }

    #[test]
    fn test_non_boundary_keeps_previous_bits() {
        let params = params();
        let chain = build_chain(10, 12, REAL_BITS);
        let last = *chain.tip().unwrap();
        let bits = next_work_required_v1(&chain, &last, &candidate_at(last.time + 12), &params).unwrap();
        assert_eq!(bits, REAL_BITS);
    }

    #[test]
    fn test_boundary_slow_blocks_ease_target_four_fold() {
        let params = params();
        // 300 blocks spaced at 4x the target spacing: timespan clips to 4x
        // and the target comes out exactly 4x easier.
        let bits = retarget_at(300, params.pow_target_spacing * 8, REAL_BITS, &params);
        assert_eq!(bits, 0x1c040000);
    }

    #[test]
    fn test_boundary_result_saturates_at_ceiling() {
        let params = params();
        let bits = retarget_at(300, params.pow_target_spacing * 8, params.pow_limit_bits, &params);
        assert_eq!(bits, params.pow_limit_bits);
    }

    #[test]
    fn test_first_retarget_uses_shorter_walk() {
        // next_height == interval walks back interval - 1 blocks, anchoring
        // on genesis. With the chain spaced at exactly the target spacing the
        // measured timespan is (interval - 1) * spacing, slightly under the
        // target timespan, so the target tightens a little instead of
        // staying put.
        let params = params();
        let bits = retarget_at(300, params.pow_target_spacing, REAL_BITS, &params);
        let expected = rescale_target(
            REAL_BITS,
            (params.difficulty_adjustment_interval() as i64 - 1) * params.pow_target_spacing,
            params.pow_target_timespan,
            params.pow_limit_bits,
        );
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_later_retarget_uses_full_interval_walk() {
        let params = params();
        // next_height == 600: the anchor is 300 blocks back at height 299.
        let bits = retarget_at(600, params.pow_target_spacing, REAL_BITS, &params);
        let expected = rescale_target(
            REAL_BITS,
            params.difficulty_adjustment_interval() as i64 * params.pow_target_spacing,
            params.pow_target_timespan,
            params.pow_limit_bits,
        );
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_floor_band_one_clamps_to_thirty_second() {
        let params = params();
        // Instant blocks at height 300 (< 1250): floor is timespan / 32.
        let bits = retarget_at(300, 0, REAL_BITS, &params);
        let expected = rescale_target(
            REAL_BITS,
            params.pow_target_timespan / 32,
            params.pow_target_timespan,
            params.pow_limit_bits,
        );
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_floor_band_two_clamps_to_eighth() {
        let params = params();
        // Height 3900 sits between the two band thresholds.
        let bits = retarget_at(3900, 0, REAL_BITS, &params);
        let expected = rescale_target(
            REAL_BITS,
            params.pow_target_timespan / 8,
            params.pow_target_timespan,
            params.pow_limit_bits,
        );
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_floor_band_three_clamps_to_quarter() {
        let params = params();
        let bits = retarget_at(4800, 0, REAL_BITS, &params);
        let expected = rescale_target(
            REAL_BITS,
            params.pow_target_timespan / 4,
            params.pow_target_timespan,
            params.pow_limit_bits,
        );
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_emergency_stall_drop_to_ceiling() {
        let mut params = params();
        params.emergency_drop_height = 5;
        let chain = build_chain(10, 12, REAL_BITS);
        let last = *chain.tip().unwrap();
        let candidate = candidate_at(last.time + STALL_DROP_WINDOW + 1);
        let bits = next_work_required_v1(&chain, &last, &candidate, &params).unwrap();
        assert_eq!(bits, params.pow_limit_bits);
    }

    #[test]
    fn test_emergency_hour_ease_multiplies_by_fifteen() {
        let mut params = params();
        params.emergency_drop_height = 5;
        let chain = build_chain(10, 12, REAL_BITS);
        let last = *chain.tip().unwrap();
        let candidate = candidate_at(last.time + EMERGENCY_DROP_WINDOW + 1);
        let bits = next_work_required_v1(&chain, &last, &candidate, &params).unwrap();
        let expected = target_to_compact(
            compact_to_target(REAL_BITS).target * U256::from(EMERGENCY_EASE_FACTOR),
        );
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_emergency_ease_clips_to_ceiling() {
        let mut params = params();
        params.emergency_drop_height = 5;
        let chain = build_chain(10, 12, params.pow_limit_bits);
        let last = *chain.tip().unwrap();
        let candidate = candidate_at(last.time + EMERGENCY_DROP_WINDOW + 1);
        let bits = next_work_required_v1(&chain, &last, &candidate, &params).unwrap();
        assert_eq!(bits, params.pow_limit_bits);
    }

    #[test]
    fn test_emergency_rules_inactive_below_activation_height() {
        let params = params();
        let chain = build_chain(10, 12, REAL_BITS);
        let last = *chain.tip().unwrap();
        let candidate = candidate_at(last.time + STALL_DROP_WINDOW + 1);
        let bits = next_work_required_v1(&chain, &last, &candidate, &params).unwrap();
        assert_eq!(bits, REAL_BITS);
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let params = params();
        let chain = build_chain(600, 12, REAL_BITS);
        let last = *chain.tip().unwrap();
        let candidate = candidate_at(last.time + 12);
        let first = next_work_required_v1(&chain, &last, &candidate, &params).unwrap();
        let second = next_work_required_v1(&chain, &last, &candidate, &params).unwrap();
        assert_eq!(first, second);
    }
}
