//! An 8-bit error-correcting code for 64-bit data words.
//!
//! The code is affine over GF(2). Each data bit `i` contributes a fixed
//! syndrome byte, row `i` of the [`PARITY_MATRIX`]. The ECC of a word is the
//! XOR of the rows selected by its set bits, XORed once with [`OFFSET`].
//!
//! ```
//! use wordecc_core::{encode, EncodeError};
//!
//! assert_eq!(encode("0000041300000393").unwrap(), "1e");
//! assert!(matches!(
//!     encode("0000"),
//!     Err(EncodeError::InvalidLength { expected: 16, actual: 4 })
//! ));
//! ```
//!
//! Consequently, for any two words `a` and `b`:
//!
//! ```text
//! encode(a ^ b) == encode(a) ^ encode(b) ^ OFFSET
//! ```

#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod ecc;
mod encoder;
mod error;
mod hex_str;
mod matrix;
mod table;
mod word;

pub use ecc::{Ecc, ECC_HEX_LEN};
pub use encoder::Encoder;
pub use error::EncodeError;
pub use matrix::{ParityMatrix, DATA_BITS, OFFSET, PARITY_MATRIX};
pub use word::{DataWord, DATA_WORD_HEX_LEN};

/// Computes the ECC of a 16-digit hex data word with the standard code.
///
/// Returns the ECC as two lowercase hex digits.
pub fn encode(word: &str) -> Result<String, EncodeError> {
    Encoder::standard()
        .encode_hex(word)
        .map(|ecc| ecc.to_string())
}
