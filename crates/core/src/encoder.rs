//! The affine encoder.

use core::fmt;

use crate::{
    matrix::{ParityMatrix, OFFSET, PARITY_MATRIX},
    table::SyndromeTable,
    DataWord, Ecc, EncodeError,
};

static STANDARD: Encoder = Encoder::new(PARITY_MATRIX, OFFSET);

/// Computes ECC values for an affine code over GF(2).
///
/// The ECC of a word is the XOR of the matrix rows selected by the word's set
/// bits, XORed once with the offset. The all-zero word therefore encodes to
/// the offset rather than to zero.
///
/// An encoder holds no mutable state and can be shared freely between
/// threads.
#[derive(Clone)]
pub struct Encoder {
    matrix: ParityMatrix,
    offset: u8,
    table: SyndromeTable,
}

impl Encoder {
    /// Creates an encoder for the given matrix and offset.
    pub const fn new(matrix: ParityMatrix, offset: u8) -> Self {
        Self {
            table: SyndromeTable::new(&matrix),
            matrix,
            offset,
        }
    }

    /// Returns the encoder for the standard code.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Returns the parity matrix.
    pub fn matrix(&self) -> &ParityMatrix {
        &self.matrix
    }

    /// Returns the offset.
    pub fn offset(&self) -> Ecc {
        Ecc::new(self.offset)
    }

    /// Computes the ECC of `word`.
    #[inline]
    pub fn encode(&self, word: DataWord) -> Ecc {
        Ecc::new(self.table.accumulate(word.value()) ^ self.offset)
    }

    /// Parses a 16-digit hex data word and computes its ECC.
    pub fn encode_hex(&self, word: &str) -> Result<Ecc, EncodeError> {
        let word: DataWord = word.parse()?;
        Ok(self.encode(word))
    }

    /// Computes the ECC of `word` one set bit at a time, bypassing the lookup
    /// tables.
    pub fn encode_bitwise(&self, word: DataWord) -> Ecc {
        Ecc::new(self.matrix.accumulate(word.value()) ^ self.offset)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        STANDARD.clone()
    }
}

impl fmt::Debug for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("matrix", &self.matrix)
            .field("offset", &self.offset())
            .finish_non_exhaustive()
    }
}
