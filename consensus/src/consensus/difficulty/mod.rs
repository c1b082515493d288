//! Difficulty retargeting
//!
//! Two retarget regimes coexist, selected by height: the legacy
//! interval-based algorithm with height-banded clamps and emergency
//! time-drop rules, and the Digishield-style algorithm with uniform clamps
//! and per-block adjustment past its activation height. Both regimes share
//! the testnet minimum-difficulty exception. The regime branches are kept
//! separate on purpose: each one must keep validating its slice of history.

pub mod digishield;
pub mod legacy;
pub mod min_difficulty;
mod regime;


pub use digishield::next_work_required_v2;
pub use legacy::next_work_required_v1;
pub use min_difficulty::allow_min_difficulty_block;
pub use regime::next_work_required;

use primitive_types::U256;
use rapid_math::{compact_to_target, target_to_compact};

/// Rescales the previous target by `actual_timespan / target_timespan` in
/// 256-bit arithmetic (truncating division) and clips the result to the
/// network ceiling.
///
/// `actual_timespan` must already be clamped positive by the caller.
pub(crate) fn rescale_target(prev_bits: u32, actual_timespan: i64, target_timespan: i64, pow_limit_bits: u32) -> u32 {
    let pow_limit = compact_to_target(pow_limit_bits).target;
    let prev_target = compact_to_target(prev_bits).target;

    let mut new_target = prev_target
        .checked_mul(U256::from(actual_timespan as u64))
        .unwrap_or(U256::MAX)
        / U256::from(target_timespan as u64);

    if new_target > pow_limit {
        new_target = pow_limit;
    }

    log::debug!(
        "retarget: bits {:#010x} * {} / {} -> {:#010x}",
        prev_bits,
        actual_timespan,
        target_timespan,
        target_to_compact(new_target)
    );

    target_to_compact(new_target)
}
