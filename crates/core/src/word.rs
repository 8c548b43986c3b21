//! Data words.

use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{hex_str::decode_fixed, EncodeError};

/// Number of hex characters in the external form of a data word.
pub const DATA_WORD_HEX_LEN: usize = 16;

/// A 64-bit data word protected by the code.
///
/// The external form is exactly 16 hex digits, most significant first,
/// with leading zeros. Parsing accepts either case; formatting is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DataWord(u64);

impl DataWord {
    /// Creates a data word from its integer value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the integer value of the word.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the word with only bit `bit` set.
    ///
    /// # Panics
    ///
    /// Panics if `bit >= 64`.
    pub const fn single_bit(bit: u32) -> Self {
        assert!(bit < 64, "bit index out of range");
        Self(1 << bit)
    }

    /// Returns `true` if bit `bit` is set.
    pub const fn bit(&self, bit: u32) -> bool {
        bit < 64 && (self.0 >> bit) & 1 == 1
    }

    /// Returns an iterator over the indices of the set bits, lowest first.
    pub fn set_bits(&self) -> impl Iterator<Item = u32> {
        let mut bits = self.0;
        core::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let bit = bits.trailing_zeros();
            bits &= bits - 1;
            Some(bit)
        })
    }
}

impl From<u64> for DataWord {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<DataWord> for u64 {
    fn from(word: DataWord) -> Self {
        word.0
    }
}

impl core::ops::BitXor for DataWord {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl FromStr for DataWord {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed::<8>(s).map(|bytes| Self(u64::from_be_bytes(bytes)))
    }
}

impl TryFrom<String> for DataWord {
    type Error = EncodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DataWord> for String {
    fn from(word: DataWord) -> Self {
        word.to_string()
    }
}

impl fmt::Display for DataWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl fmt::LowerHex for DataWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for DataWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero("0000000000000000", 0)]
    #[case::one("0000000000000001", 1)]
    #[case::leading_zeros("0000041300000393", 0x0000_0413_0000_0393)]
    #[case::upper("DEADBEEFCAFEBABE", 0xdead_beef_cafe_babe)]
    #[case::mixed("DeadBeefCafeBabe", 0xdead_beef_cafe_babe)]
    #[case::max("ffffffffffffffff", u64::MAX)]
    fn test_parse(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(input.parse::<DataWord>().unwrap().value(), expected);
    }

    #[rstest]
    #[case::empty("", 0)]
    #[case::short("000000000000001", 15)]
    #[case::long("00000000000000001", 17)]
    #[case::multibyte_short("00000000000000é", 15)]
    fn test_parse_invalid_length(#[case] input: &str, #[case] actual: usize) {
        assert_eq!(
            input.parse::<DataWord>().unwrap_err(),
            EncodeError::InvalidLength {
                expected: DATA_WORD_HEX_LEN,
                actual
            }
        );
    }

    #[rstest]
    #[case::letter_g("000000000000000g", 'g', 15)]
    #[case::sign("+000000000000001", '+', 0)]
    #[case::underscore("0000_00000000001", '_', 4)]
    #[case::whitespace(" 000000000000001", ' ', 0)]
    #[case::prefixed("0x00000000000001", 'x', 1)]
    fn test_parse_invalid_format(
        #[case] input: &str,
        #[case] character: char,
        #[case] index: usize,
    ) {
        assert_eq!(
            input.parse::<DataWord>().unwrap_err(),
            EncodeError::InvalidFormat { character, index }
        );
    }

    #[test]
    fn test_display_is_zero_padded_lowercase() {
        assert_eq!(DataWord::new(0xAB).to_string(), "00000000000000ab");
        assert_eq!(format!("{:X}", DataWord::new(0xab)), "AB");
    }

    #[test]
    fn test_set_bits() {
        let word = DataWord::new(0b1010_0001 | 1 << 63);
        assert_eq!(word.set_bits().collect::<Vec<_>>(), vec![0, 5, 7, 63]);
        assert!(word.bit(63));
        assert!(!word.bit(1));
        assert!(!word.bit(64));
        assert_eq!(DataWord::new(0).set_bits().count(), 0);
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let word = DataWord::new(0x0000_0313_0000_0293);
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "\"0000031300000293\"");
        assert_eq!(serde_json::from_str::<DataWord>(&json).unwrap(), word);
        assert!(serde_json::from_str::<DataWord>("\"0313\"").is_err());
    }
}
