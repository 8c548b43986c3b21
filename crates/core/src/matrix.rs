//! The parity matrix and offset that define the code.

use core::fmt;

/// Number of bits in a data word, and so the number of matrix rows.
pub const DATA_BITS: usize = 64;

/// Fixed offset applied once per encode.
///
/// This is the ECC of the all-zero data word.
pub const OFFSET: u8 = 0x22;

/// The parity matrix of the code.
///
/// Row `i` is the syndrome of a single-bit error in bit `i` of the data word.
pub const PARITY_MATRIX: ParityMatrix = ParityMatrix::new([
    // Bits 0..16
    0xf4, 0xf1, 0xec, 0xea, 0xe9, 0xe6, 0xe5, 0xe3, //
    0xdc, 0xda, 0xd9, 0xd6, 0xd5, 0xd3, 0xce, 0xcb, //
    // Bits 16..32
    0xb5, 0xb0, 0xad, 0xab, 0xa8, 0xa7, 0xa4, 0xa2, //
    0x9d, 0x9b, 0x98, 0x97, 0x94, 0x92, 0x8f, 0x8a, //
    // Bits 32..48
    0x75, 0x70, 0x6d, 0x6b, 0x68, 0x67, 0x64, 0x62, //
    0x5e, 0x5b, 0x58, 0x57, 0x54, 0x52, 0x4f, 0x4a, //
    // Bits 48..64
    0x34, 0x31, 0x2c, 0x2a, 0x29, 0x26, 0x25, 0x23, //
    0x1c, 0x1a, 0x19, 0x16, 0x15, 0x13, 0x0e, 0x0b, //
]);

/// A 64 x 8 matrix over GF(2), stored as one syndrome byte per data bit.
///
/// Multiplying a data word by the matrix XORs together the rows selected by
/// the word's set bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParityMatrix([u8; DATA_BITS]);

impl ParityMatrix {
    /// Creates a matrix from its rows, least significant data bit first.
    pub const fn new(rows: [u8; DATA_BITS]) -> Self {
        Self(rows)
    }

    /// Returns the rows of the matrix.
    pub const fn rows(&self) -> &[u8; DATA_BITS] {
        &self.0
    }

    /// Returns the syndrome of data bit `bit`, or `None` if `bit >= 64`.
    pub fn syndrome(&self, bit: usize) -> Option<u8> {
        self.0.get(bit).copied()
    }

    /// Multiplies `word` by the matrix, evaluating one set bit at a time.
    ///
    /// This is the linear stage of the code only; no offset is applied.
    pub fn accumulate(&self, word: u64) -> u8 {
        let mut acc = 0u8;
        let mut bits = word;
        while bits != 0 {
            acc ^= self.0[bits.trailing_zeros() as usize];
            // Clear the lowest set bit.
            bits &= bits - 1;
        }
        acc
    }

    /// Returns `true` if all rows are distinct and non-zero, i.e. every
    /// single-bit error has its own syndrome.
    pub fn has_unique_syndromes(&self) -> bool {
        let mut seen = [false; 256];
        for &row in self.0.iter() {
            if row == 0 || seen[row as usize] {
                return false;
            }
            seen[row as usize] = true;
        }
        true
    }
}

impl Default for ParityMatrix {
    fn default() -> Self {
        PARITY_MATRIX
    }
}

impl fmt::Debug for ParityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParityMatrix")
            .field(&hex::encode(self.0))
            .finish()
    }
}
