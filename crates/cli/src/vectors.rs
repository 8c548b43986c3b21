//! Test vectors for the self test.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wordecc_core::{DataWord, Ecc, EncodeError};
use wordecc_data_fixtures::REFERENCE_VECTORS;

/// A data word and the ECC it is expected to encode to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVector {
    pub data: DataWord,
    pub ecc: Ecc,
}

/// Errors that can occur when loading test vectors.
#[derive(Debug, thiserror::Error)]
pub enum VectorsError {
    #[error("failed to read vectors from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse vectors from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid reference vector {data:?}")]
    Reference {
        data: &'static str,
        #[source]
        source: EncodeError,
    },
}

/// On-disk layout of a vectors file:
///
/// ```toml
/// [[vector]]
/// data = "0000000000000001"
/// ecc = "d6"
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
struct VectorFile {
    #[serde(default, rename = "vector")]
    vectors: Vec<TestVector>,
}

/// Returns the built-in reference vectors.
pub fn reference() -> Result<Vec<TestVector>, VectorsError> {
    REFERENCE_VECTORS
        .iter()
        .map(|vector| {
            let parse = || -> Result<TestVector, EncodeError> {
                Ok(TestVector {
                    data: vector.data.parse()?,
                    ecc: vector.ecc.parse()?,
                })
            };
            parse().map_err(|source| VectorsError::Reference {
                data: vector.data,
                source,
            })
        })
        .collect()
}

/// Parses vectors from the contents of a vectors file.
pub fn parse(contents: &str, path: &Path) -> Result<Vec<TestVector>, VectorsError> {
    toml::from_str::<VectorFile>(contents)
        .map(|file| file.vectors)
        .map_err(|source| VectorsError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Loads vectors from a TOML file.
pub fn load(path: &Path) -> Result<Vec<TestVector>, VectorsError> {
    let contents = std::fs::read_to_string(path).map_err(|source| VectorsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let vectors = parse(&contents, path)?;
    tracing::debug!(path = %path.display(), count = vectors.len(), "loaded test vectors");

    Ok(vectors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_reference_vectors_parse() {
        let vectors = reference().unwrap();
        assert_eq!(vectors.len(), REFERENCE_VECTORS.len());
        assert_eq!(vectors[0].data, DataWord::new(0));
        assert_eq!(vectors[0].ecc, Ecc::new(0x22));
    }

    #[test]
    fn test_parse_file() {
        let contents = r#"
            [[vector]]
            data = "0000000000000001"
            ecc = "D6"

            [[vector]]
            data = "FFFFFFFFFFFFFFFF"
            ecc = "21"
        "#;

        let vectors = parse(contents, Path::new("vectors.toml")).unwrap();

        assert_eq!(
            vectors,
            vec![
                TestVector {
                    data: DataWord::new(1),
                    ecc: Ecc::new(0xd6),
                },
                TestVector {
                    data: DataWord::new(u64::MAX),
                    ecc: Ecc::new(0x21),
                },
            ]
        );
    }

    #[test]
    fn test_parse_empty_file() {
        assert!(parse("", Path::new("empty.toml")).unwrap().is_empty());
    }

    #[rstest]
    #[case::short_data("[[vector]]\ndata = \"01\"\necc = \"d6\"")]
    #[case::bad_ecc("[[vector]]\ndata = \"0000000000000001\"\necc = \"zz\"")]
    #[case::missing_ecc("[[vector]]\ndata = \"0000000000000001\"")]
    #[case::not_toml("[[vector")]
    fn test_parse_rejects(#[case] contents: &str) {
        let err = parse(contents, Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, VectorsError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/vectors.toml")).unwrap_err();
        assert!(matches!(err, VectorsError::Io { .. }));
    }
}
