//! Proof-of-work verification
//!
//! Checks a header hash against its claimed compact target. A malformed or
//! out-of-range target means the block is invalid, never that the caller
//! made a programming error: the verifier simply returns `false`.

use primitive_types::U256;

use consensus_core::{Hash, Params};
use rapid_math::compact_to_target;

/// Hashes accepted regardless of their claimed target.
///
/// A single anomalous historical block was accepted by the deployed network
/// even though its hash does not satisfy its target. The carve-out is
/// permanent consensus: removing it would fork any node replaying the full
/// chain. Kept as an explicit table so further networks can add entries.
pub const POW_HASH_EXCEPTIONS: [Hash; 1] = [Hash::from_bytes([
    0xa1, 0x24, 0x33, 0x2a, 0x8d, 0x96, 0x04, 0x0c, 0x08, 0x1f, 0xf7, 0xdc, 0x3f, 0xac, 0x3f,
    0x75, 0x55, 0xea, 0x27, 0x9a, 0x63, 0x78, 0xc0, 0xf5, 0xee, 0x6c, 0x9c, 0x19, 0x94, 0x55,
    0x28, 0xfc,
])];

/// Whether `hash` satisfies the claimed compact target `bits`.
pub fn check_proof_of_work(hash: Hash, bits: u32, params: &Params) -> bool {
    if POW_HASH_EXCEPTIONS.contains(&hash) {
        return true;
    }

    let decode = compact_to_target(bits);
    let pow_limit = compact_to_target(params.pow_limit_bits).target;

    // Range check on the claimed target.
    if decode.negative || decode.target.is_zero() || decode.overflow || decode.target > pow_limit {
        return false;
    }

    // The hash, read as a big-endian 256-bit integer, must not exceed the
    // claimed target.
    U256::from_big_endian(hash.as_bytes()) <= decode.target
}
