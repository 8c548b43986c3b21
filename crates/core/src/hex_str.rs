//! Fixed-width hexadecimal parsing.

use hex::{FromHex, FromHexError};

use crate::EncodeError;

/// Decodes exactly `2 * N` hex characters (either case) into `N` big-endian
/// bytes.
///
/// Length is measured in characters, not bytes, so a string holding a
/// multi-byte character is reported as [`EncodeError::InvalidFormat`] rather
/// than as a length mismatch.
pub(crate) fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], EncodeError>
where
    [u8; N]: FromHex<Error = FromHexError>,
{
    let expected = 2 * N;
    let actual = s.chars().count();
    if actual != expected {
        tracing::trace!(expected, actual, "rejected hex input with invalid length");
        return Err(EncodeError::InvalidLength { expected, actual });
    }

    <[u8; N]>::from_hex(s).map_err(|err| {
        let err = match err {
            FromHexError::InvalidHexCharacter { c, index } => EncodeError::InvalidFormat {
                character: c,
                index,
            },
            // The character count matched, so the byte count only differs
            // when a non-ASCII character is present.
            _ => first_non_hex(s),
        };
        tracing::trace!(%err, "rejected hex input with invalid format");
        err
    })
}

fn first_non_hex(s: &str) -> EncodeError {
    let (index, character) = s
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
        .unwrap_or((0, char::REPLACEMENT_CHARACTER));

    EncodeError::InvalidFormat { character, index }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::lower("00ff7f", [0x00, 0xff, 0x7f])]
    #[case::upper("00FF7F", [0x00, 0xff, 0x7f])]
    #[case::mixed("aBcDeF", [0xab, 0xcd, 0xef])]
    fn test_decode_fixed(#[case] input: &str, #[case] expected: [u8; 3]) {
        assert_eq!(decode_fixed::<3>(input).unwrap(), expected);
    }

    #[rstest]
    #[case::empty("", 0)]
    #[case::short("abcd", 4)]
    #[case::long("abcdef01", 8)]
    fn test_decode_fixed_length(#[case] input: &str, #[case] actual: usize) {
        assert_eq!(
            decode_fixed::<3>(input).unwrap_err(),
            EncodeError::InvalidLength {
                expected: 6,
                actual
            }
        );
    }

    #[rstest]
    #[case::letter("abcdeg", 'g', 5)]
    #[case::sign("+bcdef", '+', 0)]
    #[case::space("ab cde", ' ', 2)]
    #[case::multibyte("abcdé0", 'é', 4)]
    fn test_decode_fixed_format(
        #[case] input: &str,
        #[case] character: char,
        #[case] index: usize,
    ) {
        assert_eq!(
            decode_fixed::<3>(input).unwrap_err(),
            EncodeError::InvalidFormat { character, index }
        );
    }
}
