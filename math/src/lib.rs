use primitive_types::U256;

/// Result of decoding a compact ("nBits") difficulty encoding.
///
/// The compact form is a floating-point-like layout: the high byte is a
/// base-256 exponent, bit 23 is a sign bit and the low 23 bits are the
/// mantissa. Decoding never fails; out-of-domain inputs are reported through
/// the `negative` and `overflow` flags so consensus code can reject them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompactDecode {
    /// The decoded 256-bit magnitude.
    pub target: U256,
    /// Set when the mantissa is non-zero and the sign bit is set.
    pub negative: bool,
    /// Set when the exponent would shift the mantissa past 256 bits.
    pub overflow: bool,
}

/// Decodes a compact difficulty encoding into its 256-bit magnitude.
pub fn compact_to_target(bits: u32) -> CompactDecode {
    let size = (bits >> 24) as usize;
    let word = bits & 0x007f_ffff;

    let target = if size <= 3 {
        U256::from(word >> (8 * (3 - size)))
    } else {
        U256::from(word) << (8 * (size - 3))
    };

    CompactDecode {
        target,
        negative: word != 0 && (bits & 0x0080_0000) != 0,
        overflow: word != 0
            && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32)),
    }
}

/// Encodes a 256-bit magnitude into its canonical compact form.
///
/// The mantissa is rounded (truncated) to 3 bytes and normalized so that the
/// sign bit stays clear. The encoding is lossy but deterministic: every node
/// must produce the identical 32-bit value for the same input.
pub fn target_to_compact(target: U256) -> u32 {
    let mut size = (target.bits() + 7) / 8;
    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (target >> (8 * (size - 3))).low_u64() as u32
    };

    // The compact form is signed; push the mantissa down a byte if its high
    // bit would collide with the sign bit.
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }

    compact | ((size as u32) << 24)
}
