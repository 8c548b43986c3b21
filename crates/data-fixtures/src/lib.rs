//! Known data words and their expected ECC values.

/// A data word paired with its expected ECC, both in hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// 16 hex digits.
    pub data: &'static str,
    /// 2 hex digits.
    pub ecc: &'static str,
}

macro_rules! define_vectors {
    ($name:ident, $doc:tt, [$(($data:literal, $ecc:literal)),* $(,)?]) => {
        #[doc = $doc]
        pub const $name: &[Vector] = &[$(Vector { data: $data, ecc: $ecc }),*];
    };
}

define_vectors!(
    REFERENCE_VECTORS,
    "Reference vectors for the standard code, including the all-zero word, \
     each low bit on its own and in small combinations, and two sparse words \
     spanning both halves of the word.",
    [
        ("0000000000000000", "22"),
        ("0000000000000001", "d6"),
        ("0000000000000002", "d3"),
        ("0000000000000003", "27"),
        ("0000000000000004", "ce"),
        ("0000000000000005", "3a"),
        ("0000000000000006", "3f"),
        ("0000000000000007", "cb"),
        ("0000000000000008", "c8"),
        ("000000000000000f", "21"),
        ("0000000000000010", "cb"),
        ("0000000000000011", "3f"),
        ("0000000000000012", "3a"),
        ("0000031300000293", "9f"),
        ("0000041300000393", "1e"),
    ]
);

/// Data words with the wrong number of characters.
pub const MALFORMED_LENGTH: &[&str] = &[
    "",
    "0",
    "000000000000001",
    "00000000000000001",
    "0x0000000000000001",
];

/// Data words of the right length holding a non-hex character.
pub const MALFORMED_FORMAT: &[&str] = &[
    "000000000000000g",
    "0x00000000000001",
    "-000000000000001",
    "00000000 0000001",
    "00000000000000\u{00e9}0",
];
