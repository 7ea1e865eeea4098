//! # 256-bit Machine Word
//!
//! The value domain of the machine: unsigned integers in [0, 2^256 - 1],
//! stored as four 64-bit limbs, least-significant limb first. Arithmetic
//! wraps modulo 2^256.
//!
//! A `Word` is in range by construction. The only way to offer an
//! out-of-range value is through [`Word::from_be_slice`] with more than 32
//! bytes, which fails with [`SpecError::InvalidWord`] before any value
//! exists.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::WORD_BYTES;

/// Number of 64-bit limbs in a word
pub const NUM_LIMBS: usize = 4;

/// 256-bit unsigned integer with wraparound arithmetic
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word([u64; NUM_LIMBS]);

impl Word {
    /// The value 0
    pub const ZERO: Word = Word([0; NUM_LIMBS]);

    /// The value 1
    pub const ONE: Word = Word([1, 0, 0, 0]);

    /// The value 2^256 - 1
    pub const MAX: Word = Word([u64::MAX; NUM_LIMBS]);

    /// Build a word from limbs, least-significant first
    pub const fn from_limbs(limbs: [u64; NUM_LIMBS]) -> Self {
        Word(limbs)
    }

    /// Limbs, least-significant first
    pub const fn limbs(&self) -> [u64; NUM_LIMBS] {
        self.0
    }

    /// Build a word from a u64
    pub const fn from_u64(value: u64) -> Self {
        Word([value, 0, 0, 0])
    }

    /// Interpret 32 bytes as a big-endian unsigned integer
    pub fn from_be_bytes(bytes: [u8; WORD_BYTES]) -> Self {
        let mut limbs = [0u64; NUM_LIMBS];
        for (i, chunk) in bytes.rchunks(8).enumerate() {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            limbs[i] = u64::from_be_bytes(buf);
        }
        Word(limbs)
    }

    /// Interpret up to 32 bytes as a big-endian unsigned integer.
    ///
    /// Shorter slices are zero-extended on the high end. Slices longer
    /// than 32 bytes describe a value outside the word range and fail
    /// with [`SpecError::InvalidWord`].
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, SpecError> {
        if bytes.len() > WORD_BYTES {
            return Err(SpecError::InvalidWord { len: bytes.len() });
        }
        let mut buf = [0u8; WORD_BYTES];
        buf[WORD_BYTES - bytes.len()..].copy_from_slice(bytes);
        Ok(Self::from_be_bytes(buf))
    }

    /// Big-endian byte representation
    pub fn to_be_bytes(&self) -> [u8; WORD_BYTES] {
        let mut bytes = [0u8; WORD_BYTES];
        for (i, limb) in self.0.iter().enumerate() {
            let start = WORD_BYTES - 8 * (i + 1);
            bytes[start..start + 8].copy_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    /// Low 64 bits
    pub const fn low_u64(&self) -> u64 {
        self.0[0]
    }

    /// The value modulo 256
    pub const fn low_byte(&self) -> u8 {
        (self.0[0] & 0xFF) as u8
    }

    /// Convert to a host address, or `None` if the value does not fit
    pub fn to_usize(&self) -> Option<usize> {
        if self.0[1] != 0 || self.0[2] != 0 || self.0[3] != 0 {
            return None;
        }
        usize::try_from(self.0[0]).ok()
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.0 == [0; NUM_LIMBS]
    }

    /// Addition modulo 2^256
    pub fn wrapping_add(self, rhs: Self) -> Self {
        let mut limbs = [0u64; NUM_LIMBS];
        let mut carry = 0u64;
        for i in 0..NUM_LIMBS {
            let (sum, c1) = self.0[i].overflowing_add(rhs.0[i]);
            let (sum, c2) = sum.overflowing_add(carry);
            limbs[i] = sum;
            carry = c1 as u64 + c2 as u64;
        }
        Word(limbs)
    }

    /// Multiplication modulo 2^256
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        let mut limbs = [0u64; NUM_LIMBS];
        for i in 0..NUM_LIMBS {
            let mut carry = 0u128;
            for j in 0..NUM_LIMBS - i {
                let product = self.0[i] as u128 * rhs.0[j] as u128
                    + limbs[i + j] as u128
                    + carry;
                limbs[i + j] = product as u64;
                carry = product >> 64;
            }
        }
        Word(limbs)
    }
}

impl From<u64> for Word {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u8> for Word {
    fn from(value: u8) -> Self {
        Self::from_u64(value as u64)
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..NUM_LIMBS).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::LowerHex for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut started = false;
        for limb in self.0.iter().rev() {
            if started {
                write!(f, "{:016x}", limb)?;
            } else if *limb != 0 {
                write!(f, "{:x}", limb)?;
                started = true;
            }
        }
        if !started {
            f.write_str("0")?;
        }
        Ok(())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constants() {
        assert!(Word::ZERO.is_zero());
        assert_eq!(Word::ONE.low_u64(), 1);
        assert_eq!(Word::MAX.limbs(), [u64::MAX; 4]);
    }

    #[test]
    fn test_from_be_slice_short() {
        let word = Word::from_be_slice(&[0x12, 0x34]).unwrap();
        assert_eq!(word, Word::from_u64(0x1234));

        let word = Word::from_be_slice(&[]).unwrap();
        assert_eq!(word, Word::ZERO);
    }

    #[test]
    fn test_from_be_slice_full_width() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x01;
        bytes[31] = 0x02;
        let word = Word::from_be_slice(&bytes).unwrap();
        assert_eq!(word.limbs(), [2, 0, 0, 1 << 56]);
    }

    #[test]
    fn test_from_be_slice_too_long() {
        // 2^256 is 33 bytes: a one followed by 32 zero bytes
        let mut bytes = vec![0u8; 33];
        bytes[0] = 1;
        assert_eq!(
            Word::from_be_slice(&bytes),
            Err(SpecError::InvalidWord { len: 33 })
        );
    }

    #[test]
    fn test_be_bytes_round_trip() {
        let word = Word::from_limbs([1, 2, 3, 4]);
        assert_eq!(Word::from_be_bytes(word.to_be_bytes()), word);

        let bytes = Word::from_u64(0xFF).to_be_bytes();
        assert_eq!(bytes[31], 0xFF);
        assert!(bytes[..31].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_wrapping_add_carries_across_limbs() {
        let word = Word::from_u64(u64::MAX).wrapping_add(Word::ONE);
        assert_eq!(word.limbs(), [0, 1, 0, 0]);
    }

    #[test]
    fn test_wrapping_add_wraps_at_word_width() {
        assert_eq!(Word::MAX.wrapping_add(Word::ONE), Word::ZERO);
        // (2^256 - 1) + (2^256 - 1) = 2^256 - 2 (mod 2^256)
        let expected = Word::from_limbs([u64::MAX - 1, u64::MAX, u64::MAX, u64::MAX]);
        assert_eq!(Word::MAX.wrapping_add(Word::MAX), expected);
    }

    #[test]
    fn test_wrapping_mul_wraps_at_word_width() {
        // (2^256 - 1) * 2 = 2^257 - 2 = 2^256 - 2 (mod 2^256)
        let two = Word::from_u64(2);
        let expected = Word::from_limbs([u64::MAX - 1, u64::MAX, u64::MAX, u64::MAX]);
        assert_eq!(Word::MAX.wrapping_mul(two), expected);
    }

    #[test]
    fn test_wrapping_mul_identity_and_zero() {
        let word = Word::from_limbs([7, 11, 13, 17]);
        assert_eq!(word.wrapping_mul(Word::ONE), word);
        assert_eq!(word.wrapping_mul(Word::ZERO), Word::ZERO);
    }

    #[test]
    fn test_to_usize() {
        assert_eq!(Word::from_u64(42).to_usize(), Some(42));
        assert_eq!(Word::from_limbs([0, 1, 0, 0]).to_usize(), None);
        assert_eq!(Word::MAX.to_usize(), None);
    }

    #[test]
    fn test_low_byte() {
        assert_eq!(Word::from_u64(0x1FF).low_byte(), 0xFF);
        assert_eq!(Word::from_u64(0x04).low_byte(), 0x04);
    }

    #[test]
    fn test_ordering_compares_high_limbs_first() {
        let small = Word::from_u64(u64::MAX);
        let big = Word::from_limbs([0, 1, 0, 0]);
        assert!(small < big);
        assert!(big < Word::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Word::ZERO.to_string(), "0x0");
        assert_eq!(Word::from_u64(0x1234).to_string(), "0x1234");
        assert_eq!(
            Word::from_limbs([1, 1, 0, 0]).to_string(),
            "0x10000000000000001"
        );
    }

    proptest! {
        #[test]
        fn prop_add_matches_u128_reference(a in any::<u64>(), b in any::<u64>()) {
            let sum = a as u128 + b as u128;
            let word = Word::from_u64(a).wrapping_add(Word::from_u64(b));
            prop_assert_eq!(word.limbs(), [sum as u64, (sum >> 64) as u64, 0, 0]);
        }

        #[test]
        fn prop_mul_matches_u128_reference(a in any::<u64>(), b in any::<u64>()) {
            let product = a as u128 * b as u128;
            let word = Word::from_u64(a).wrapping_mul(Word::from_u64(b));
            prop_assert_eq!(word.limbs(), [product as u64, (product >> 64) as u64, 0, 0]);
        }

        #[test]
        fn prop_add_commutes(a in any::<[u64; 4]>(), b in any::<[u64; 4]>()) {
            let a = Word::from_limbs(a);
            let b = Word::from_limbs(b);
            prop_assert_eq!(a.wrapping_add(b), b.wrapping_add(a));
        }

        #[test]
        fn prop_mul_commutes(a in any::<[u64; 4]>(), b in any::<[u64; 4]>()) {
            let a = Word::from_limbs(a);
            let b = Word::from_limbs(b);
            prop_assert_eq!(a.wrapping_mul(b), b.wrapping_mul(a));
        }

        #[test]
        fn prop_be_bytes_round_trip(limbs in any::<[u64; 4]>()) {
            let word = Word::from_limbs(limbs);
            prop_assert_eq!(Word::from_be_bytes(word.to_be_bytes()), word);
        }
    }
}
