use serde::{Deserialize, Serialize};

use super::constants::*;

/// The retarget regime governing difficulty for a height range.
///
/// A closed enumeration: both variants encode historically deployed rule
/// sets and must remain independently reproducible for old blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetargetRegime {
    /// Interval-based retargeting with height-banded clamps and the
    /// emergency time-drop rules.
    Legacy,
    /// Digishield-style retargeting with uniform clamps and, past its
    /// activation height, per-block adjustment.
    Digishield,
}

/// Consensus parameters for difficulty governance.
///
/// Loaded once per network and never mutated. Every field that gates a rule
/// change by height refers to a named constant in [`super::constants`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Network identifier (string), kept for convenience
    pub network: String,
    /// Compact encoding of the network ceiling (the easiest allowed target)
    pub pow_limit_bits: u32,
    /// Target block spacing in seconds
    pub pow_target_spacing: i64,
    /// Target duration of one retarget interval in seconds
    pub pow_target_timespan: i64,
    /// Whether the elapsed-time minimum-difficulty exception is available
    pub allow_min_difficulty_blocks: bool,
    /// Test-network escape hatch: Digishield returns the previous bits
    /// unchanged instead of retargeting
    pub no_retargeting: bool,
    /// Regime used below `regime_v2_height`
    pub default_regime: RetargetRegime,
    /// Height from which the selector routes unconditionally to Digishield
    pub regime_v2_height: u64,
    /// Height from which minimum-difficulty blocks are permitted
    pub min_difficulty_height: u64,
    /// Height from which Digishield retargets on every block
    pub digishield_height: u64,
    /// Height from which the legacy emergency time-drop rules apply
    pub emergency_drop_height: u64,
}

impl Params {
    /// Main network parameters.
    pub fn mainnet() -> Self {
        Self {
            network: "mainnet".to_string(),
            pow_limit_bits: MAINNET_POW_LIMIT_BITS,
            pow_target_spacing: TARGET_SPACING,
            pow_target_timespan: TARGET_TIMESPAN,
            allow_min_difficulty_blocks: false,
            no_retargeting: false,
            default_regime: RetargetRegime::Legacy,
            regime_v2_height: REGIME_V2_HEIGHT,
            min_difficulty_height: MIN_DIFFICULTY_HEIGHT,
            digishield_height: DIGISHIELD_HEIGHT,
            emergency_drop_height: EMERGENCY_DROP_HEIGHT,
        }
    }

    /// Test network parameters.
    ///
    /// Note: both the minimum-difficulty exception and the emergency
    /// time-drop heights are reachable here. The deployed history never
    /// exercised the overlap of the two rules, so tests must not rely on
    /// their combined behavior.
    pub fn testnet() -> Self {
        Self {
            network: "testnet".to_string(),
            pow_limit_bits: TESTNET_POW_LIMIT_BITS,
            allow_min_difficulty_blocks: true,
            ..Self::mainnet()
        }
    }

    /// Regression-test parameters: everything relaxed, nothing retargets.
    pub fn regtest() -> Self {
        Self {
            network: "regtest".to_string(),
            pow_limit_bits: REGTEST_POW_LIMIT_BITS,
            pow_target_spacing: TARGET_SPACING,
            pow_target_timespan: TARGET_TIMESPAN,
            allow_min_difficulty_blocks: true,
            no_retargeting: true,
            default_regime: RetargetRegime::Digishield,
            regime_v2_height: 0,
            min_difficulty_height: 0,
            digishield_height: 0,
            emergency_drop_height: u64::MAX,
        }
    }

    /// Number of blocks between scheduled difficulty recalculations.
    pub fn difficulty_adjustment_interval(&self) -> u64 {
        (self.pow_target_timespan / self.pow_target_spacing) as u64
    }
}
