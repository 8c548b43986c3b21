//! Byte-sliced lookup tables for the linear stage.

use crate::matrix::{ParityMatrix, DATA_BITS};

const WORD_BYTES: usize = DATA_BITS / 8;

/// Precomputed partial syndromes, one table per data byte.
///
/// `tables[k][b]` is the XOR of the matrix rows selected by byte value `b`
/// placed at byte position `k` (byte 0 being the least significant). The
/// linear stage of the code then takes one lookup per byte.
#[derive(Clone, Copy)]
pub(crate) struct SyndromeTable {
    tables: [[u8; 256]; WORD_BYTES],
}

impl SyndromeTable {
    /// Builds the tables for `matrix`.
    pub(crate) const fn new(matrix: &ParityMatrix) -> Self {
        let rows = matrix.rows();
        let mut tables = [[0u8; 256]; WORD_BYTES];

        let mut k = 0;
        while k < WORD_BYTES {
            // Entry `b` differs from entry `b & (b - 1)` by the row of the
            // lowest set bit of `b`.
            let mut b = 1;
            while b < 256 {
                let low = (b as u32).trailing_zeros() as usize;
                tables[k][b] = tables[k][b & (b - 1)] ^ rows[8 * k + low];
                b += 1;
            }
            k += 1;
        }

        Self { tables }
    }

    /// Multiplies `word` by the matrix the tables were built from.
    #[inline]
    pub(crate) fn accumulate(&self, word: u64) -> u8 {
        word.to_le_bytes()
            .iter()
            .zip(self.tables.iter())
            .fold(0, |acc, (&byte, table)| acc ^ table[byte as usize])
    }
}
