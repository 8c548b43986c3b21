//! ECC values.

use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{hex_str::decode_fixed, EncodeError};

/// Number of hex characters in the external form of an ECC value.
pub const ECC_HEX_LEN: usize = 2;

/// An 8-bit ECC value.
///
/// Displays as two lowercase hex digits. Parsing accepts either case, so
/// comparing parsed values is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ecc(u8);

impl Ecc {
    /// Creates an ECC value from its byte.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the byte value.
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl From<u8> for Ecc {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Ecc> for u8 {
    fn from(ecc: Ecc) -> Self {
        ecc.0
    }
}

impl core::ops::BitXor for Ecc {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl FromStr for Ecc {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed::<1>(s).map(|[byte]| Self(byte))
    }
}

impl TryFrom<String> for Ecc {
    type Error = EncodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ecc> for String {
    fn from(ecc: Ecc) -> Self {
        ecc.to_string()
    }
}

impl fmt::Display for Ecc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

impl fmt::LowerHex for Ecc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Ecc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
