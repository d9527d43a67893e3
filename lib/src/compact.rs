//! Compact ("nBits") encoding of a 256-bit proof-of-work target.
//!
//! The top byte is a size in bytes, the low 23 bits are the mantissa and bit 23
//! is a sign flag. Decoding and encoding follow the reference node's rules bit
//! for bit, including which malformed values count as negative or overflowing.

use std::fmt;

use crate::error::{ChainError, Result};
use crate::U256;
use serde::{Deserialize, Serialize};

const MANTISSA_MASK: u32 = 0x007f_ffff;
const SIGN_BIT: u32 = 0x0080_0000;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub struct CompactTarget(u32);

/// Result of [`CompactTarget::decode`]. Callers must reject negative or
/// overflowing targets; [`CompactTarget::to_target`] does that for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedTarget {
    pub value: U256,
    pub negative: bool,
    pub overflow: bool,
}

impl CompactTarget {
    pub const fn from_consensus(bits: u32) -> Self {
        CompactTarget(bits)
    }

    pub const fn to_consensus(self) -> u32 {
        self.0
    }

    /// Splits the packed value into its target and the two error flags.
    ///
    /// `word` is the 23-bit mantissa after the right shift applied to sizes
    /// up to 3. `negative` is `word != 0 && sign bit set`. `overflow` is
    ///
    /// ```text
    /// word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32))
    /// ```
    ///
    /// so it is set exactly when the shifted mantissa does not fit in 256
    /// bits. A zero mantissa never overflows, whatever its size byte:
    /// `0xff000000` decodes to a valid zero target.
    pub fn decode(self) -> DecodedTarget {
        let size = self.0 >> 24;
        let mut word = self.0 & MANTISSA_MASK;
        let value = if size <= 3 {
            word >>= 8 * (3 - size);
            U256::from(word)
        } else {
            let shift = 8 * (size as usize - 3);
            // anything shifted this far is reported as overflow below
            if shift >= 256 {
                U256::zero()
            } else {
                U256::from(word) << shift
            }
        };
        let negative = word != 0 && self.0 & SIGN_BIT != 0;
        let overflow = word != 0
            && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
        DecodedTarget {
            value,
            negative,
            overflow,
        }
    }

    /// Canonical (minimal, non-negative) encoding of `value`.
    pub fn encode(value: U256) -> Self {
        let mut size = (value.bits() + 7) / 8;
        let mut compact = if size <= 3 {
            (value.low_u64() << (8 * (3 - size))) as u32
        } else {
            (value >> (8 * (size - 3))).low_u64() as u32
        };
        // the mantissa's top bit would read as a sign, move it down a byte
        if compact & SIGN_BIT != 0 {
            compact >>= 8;
            size += 1;
        }
        CompactTarget(compact | ((size as u32) << 24))
    }

    /// Decodes and rejects negative or overflowing encodings.
    pub fn to_target(self) -> Result<U256> {
        let decoded = self.decode();
        if decoded.overflow {
            return Err(ChainError::CompactOverflow(self.0));
        }
        if decoded.negative {
            return Err(ChainError::CompactNegative(self.0));
        }
        Ok(decoded.value)
    }
}

impl From<u32> for CompactTarget {
    fn from(bits: u32) -> Self {
        CompactTarget(bits)
    }
}

impl fmt::Display for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn decode(bits: u32) -> DecodedTarget {
        CompactTarget::from_consensus(bits).decode()
    }

    fn hex_of(value: U256) -> String {
        let mut bytes = [0u8; 32];
        value.to_big_endian(&mut bytes);
        hex::encode(bytes)
    }

    #[test]
    fn zero_mantissas_decode_to_zero() {
        for bits in [
            0x0000_0000,
            0x0012_3456,
            0x0100_3456,
            0x0200_0056,
            0x0300_0000,
            0x0400_0000,
            0x0092_3456,
            0x0180_3456,
            0x0280_0056,
            0x0380_0000,
            0x0480_0000,
        ] {
            let decoded = decode(bits);
            assert!(decoded.value.is_zero(), "{bits:#010x}");
            assert!(!decoded.negative, "{bits:#010x}");
            assert!(!decoded.overflow, "{bits:#010x}");
        }
        assert_eq!(CompactTarget::encode(U256::zero()).to_consensus(), 0);
    }

    #[test]
    fn reference_vectors() {
        let cases: [(u32, u64, u32); 6] = [
            (0x0112_3456, 0x12, 0x0112_0000),
            (0x0212_3456, 0x1234, 0x0212_3400),
            (0x0312_3456, 0x12_3456, 0x0312_3456),
            (0x0412_3456, 0x1234_5600, 0x0412_3456),
            (0x0500_9234, 0x9234_0000, 0x0500_9234),
            (0x0200_8000, 0x80, 0x0200_8000),
        ];
        for (bits, value, canonical) in cases {
            let decoded = decode(bits);
            assert_eq!(decoded.value, U256::from(value), "{bits:#010x}");
            assert!(!decoded.negative && !decoded.overflow);
            assert_eq!(CompactTarget::encode(decoded.value).to_consensus(), canonical);
        }
    }

    #[test]
    fn large_exponent_shifts_bytes() {
        let decoded = decode(0x2012_3456);
        assert_eq!(decoded.value, U256::from(0x12_3456u64) << 232);
        assert_eq!(CompactTarget::encode(decoded.value).to_consensus(), 0x2012_3456);

        assert_eq!(
            hex_of(decode(0x1d00_ffff).value),
            "00000000ffff0000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(
            hex_of(decode(0x207f_ffff).value),
            "7fffff0000000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(
            hex_of(decode(0x1e0f_fff0).value),
            "00000ffff0000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn sign_bit_marks_negative() {
        let decoded = decode(0x01fe_dcba);
        assert_eq!(decoded.value, U256::from(0x7eu64));
        assert!(decoded.negative);
        // re-encoding an unsigned value never sets the sign bit
        assert_eq!(CompactTarget::encode(decoded.value).to_consensus(), 0x017e_0000);

        let decoded = decode(0x0492_3456);
        assert_eq!(decoded.value, U256::from(0x1234_5600u64));
        assert!(decoded.negative);
        assert_eq!(
            CompactTarget::from_consensus(0x0492_3456).to_target(),
            Err(ChainError::CompactNegative(0x0492_3456))
        );
    }

    #[test]
    fn overflow_boundaries() {
        assert!(decode(0xff12_3456).overflow);
        assert!(decode(0x2300_0001).overflow);
        assert!(decode(0x2200_0100).overflow);
        assert!(decode(0x2101_0000).overflow);
        assert!(decode(0x2112_3456).overflow);

        assert!(!decode(0x2200_0001).overflow);
        assert!(!decode(0x2100_ffff).overflow);
        assert_eq!(decode(0x2100_ffff).value, U256::from(0xffffu64) << 240);
        // nothing to shift out of range
        assert!(!decode(0xff00_0000).overflow);

        assert_eq!(
            CompactTarget::from_consensus(0xff12_3456).to_target(),
            Err(ChainError::CompactOverflow(0xff12_3456))
        );
    }

    #[test]
    fn encodes_full_width_values() {
        let encoded = CompactTarget::encode(crate::MAX_TARGET);
        assert_eq!(encoded.to_consensus(), 0x2100_ffff);
        assert_eq!(encoded.to_target().unwrap(), U256::from(0xffffu64) << 240);
    }

    proptest! {
        #[test]
        fn canonical_encoding_is_idempotent(size in 0u32..=34, mantissa in 0u32..0x0100_0000) {
            let decoded = decode((size << 24) | mantissa);
            // only sizes 33 and 34 can still overflow
            prop_assume!(!decoded.overflow);

            let canonical = CompactTarget::encode(decoded.value);
            let redecoded = canonical.decode();
            prop_assert_eq!(redecoded.value, decoded.value);
            prop_assert!(!redecoded.negative);
            prop_assert!(!redecoded.overflow);
            prop_assert_eq!(CompactTarget::encode(redecoded.value), canonical);
        }

        #[test]
        fn canonical_inputs_round_trip(bits in any::<u32>()) {
            let canonical = CompactTarget::encode(decode(bits).value);
            prop_assert_eq!(CompactTarget::encode(canonical.decode().value), canonical);
        }

        #[test]
        fn target_comparison_is_monotonic(
            a in any::<[u64; 4]>(),
            b in any::<[u64; 4]>(),
            hash in any::<[u64; 4]>(),
        ) {
            let (low, high) = if U256(a) < U256(b) { (U256(a), U256(b)) } else { (U256(b), U256(a)) };
            let hash = crate::sha256::Hash::from(U256(hash));
            if hash.matches_target(low) {
                prop_assert!(hash.matches_target(high));
            }
        }
    }
}
