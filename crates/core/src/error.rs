//! Input validation errors.

/// An error returned when a hexadecimal input cannot be encoded.
///
/// Both variants are detected before any computation takes place; an encoder
/// never returns a partially computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The input does not have the required number of characters.
    #[error("invalid length: expected {expected} hex characters, got {actual}")]
    InvalidLength {
        /// Required number of characters.
        expected: usize,
        /// Number of characters in the input.
        actual: usize,
    },
    /// The input contains a character outside of `0-9`, `a-f` and `A-F`.
    #[error("invalid format: {character:?} at index {index} is not a hex digit")]
    InvalidFormat {
        /// The offending character.
        character: char,
        /// Character index of the offending character.
        index: usize,
    },
}

impl EncodeError {
    /// Returns `true` if the input had the wrong length.
    pub fn is_invalid_length(&self) -> bool {
        matches!(self, EncodeError::InvalidLength { .. })
    }

    /// Returns `true` if the input contained a non-hex character.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, EncodeError::InvalidFormat { .. })
    }
}
