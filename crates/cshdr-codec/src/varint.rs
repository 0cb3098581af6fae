//! Varint width calculation.

/// Maximum encoded width of a varint.
///
/// 9 bytes carry 63 payload bits; the width is clamped here rather than
/// growing a tenth byte for the top bit of a u64. No real ELF field value
/// reaches this, but the cap is part of the format.
pub const MAX_VARINT_BYTES: usize = 9;

/// Number of bytes the LEB128-style encoding uses for `value`.
///
/// Each encoded byte carries 7 payload bits plus a continuation bit, so the
/// width is the bit length of `value` divided by 7, rounded up, capped at
/// [`MAX_VARINT_BYTES`].
#[inline]
#[must_use]
pub const fn varint_size(value: u64) -> usize {
    if value < 0x80 {
        return 1;
    }
    let bits = (64 - value.leading_zeros()) as usize;
    let bytes = (bits + 6) / 7;
    if bytes > MAX_VARINT_BYTES {
        MAX_VARINT_BYTES
    } else {
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_range() {
        assert_eq!(varint_size(0), 1);
        assert_eq!(varint_size(1), 1);
        assert_eq!(varint_size(64), 1);
        assert_eq!(varint_size(127), 1);
    }

    #[test]
    fn test_width_boundaries() {
        assert_eq!(varint_size(128), 2);
        assert_eq!(varint_size(16383), 2);
        assert_eq!(varint_size(16384), 3);
        assert_eq!(varint_size((1 << 21) - 1), 3);
        assert_eq!(varint_size(1 << 21), 4);
    }

    #[test]
    fn test_monotonic() {
        let samples = [
            0u64,
            1,
            127,
            128,
            255,
            16383,
            16384,
            1 << 20,
            1 << 32,
            1 << 55,
            1 << 62,
            u64::MAX,
        ];
        for pair in samples.windows(2) {
            assert!(varint_size(pair[0]) <= varint_size(pair[1]));
        }
    }

    #[test]
    fn test_clamp_at_nine_bytes() {
        // 63 payload bits fit exactly in 9 bytes
        assert_eq!(varint_size((1 << 63) - 1), 9);
        // 64-bit values would need a tenth byte; the cap holds them at 9
        assert_eq!(varint_size(1 << 63), 9);
        assert_eq!(varint_size(u64::MAX), 9);
    }

    #[test]
    fn test_never_exceeds_max() {
        for shift in 0..64 {
            assert!(varint_size(1u64 << shift) <= MAX_VARINT_BYTES);
        }
    }
}
