//! Named consensus constants.
//!
//! The activation heights below are immutable historical hard-fork points.
//! They must never be folded together or replaced by inline literals: each
//! one gates a rule regime that has to stay independently reproducible so
//! that every historical block keeps validating.

/// Compact network ceiling (easiest permitted target) on the main network.
pub const MAINNET_POW_LIMIT_BITS: u32 = 0x1e0f_ffff;

/// Compact network ceiling on the test network.
pub const TESTNET_POW_LIMIT_BITS: u32 = 0x1e0f_ffff;

/// Compact network ceiling on regression-test networks.
pub const REGTEST_POW_LIMIT_BITS: u32 = 0x207f_ffff;

/// Target block spacing in seconds.
pub const TARGET_SPACING: i64 = 12;

/// Target retarget timespan in seconds (one full adjustment interval).
pub const TARGET_TIMESPAN: i64 = 3600;

/// Height from which minimum-difficulty blocks may be mined on networks
/// that allow them.
pub const MIN_DIFFICULTY_HEIGHT: u64 = 157_500;

/// Height from which the emergency time-drop rules apply in the legacy
/// retarget regime.
pub const EMERGENCY_DROP_HEIGHT: u64 = 11_324_612;

/// Height from which the regime selector routes every block to the
/// Digishield regime, regardless of the configured default.
pub const REGIME_V2_HEIGHT: u64 = 11_327_900;

/// Height from which the Digishield regime retargets on every block
/// instead of once per interval.
pub const DIGISHIELD_HEIGHT: u64 = 11_327_900;

/// Elapsed seconds after which the legacy regime eases the previous target
/// by [`EMERGENCY_EASE_FACTOR`].
pub const EMERGENCY_DROP_WINDOW: i64 = 60 * 60;

/// Elapsed seconds after which the legacy regime drops straight to the
/// network ceiling, so a stalled chain never becomes unminable.
pub const STALL_DROP_WINDOW: i64 = 60 * 60 * 24 * 90;

/// Multiplier applied to the previous target by the one-hour emergency rule.
pub const EMERGENCY_EASE_FACTOR: u64 = 15;

/// Below this height the legacy timespan floor is `timespan / 32`.
pub const LEGACY_FLOOR_BAND_ONE: u64 = 1_250;

/// Below this height (and at or above [`LEGACY_FLOOR_BAND_ONE`]) the legacy
/// timespan floor is `timespan / 8`; from here on it is `timespan / 4`.
pub const LEGACY_FLOOR_BAND_TWO: u64 = 4_000;

/// Uniform upper clamp on the measured timespan, as a multiple of the
/// target timespan. Also the Digishield lower clamp divisor.
pub const MAX_ADJUSTMENT_FACTOR: i64 = 4;
