//! Configuration for the `wordecc` binary.

use std::{fmt, path::Path};

use anyhow::{anyhow, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables that override configuration values,
/// e.g. `WORDECC_LOG__LEVEL=TRACE`.
pub const ENV_PREFIX: &str = "WORDECC";

/// Properties of the `wordecc` binary.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WordEccProperties {
    /// Setting for logging
    pub log: LogProperties,
    /// Setting for command output
    pub output: OutputProperties,
    /// Setting for the self test
    pub verify: VerifyProperties,
}

impl WordEccProperties {
    /// Loads the configuration.
    ///
    /// Sources, later ones taking precedence: built-in defaults, the config
    /// file if given, then `WORDECC_` environment variables.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let mut file_config = WordEccProperties::default();
        if let Some(path) = config_path {
            file_config = Config::builder()
                .add_source(Config::try_from(&file_config)?)
                .add_source(File::from(path))
                .build()?
                .try_deserialize()?;

            // Relative paths in the config file are relative to the file, so the
            // binary can be run from anywhere.
            let parent_dir = path
                .parent()
                .ok_or_else(|| anyhow!("failed to get parent directory of config file"))?;
            if let Some(vectors) = &file_config.verify.vectors_path {
                file_config.verify.vectors_path = Some(prepend_file_path(vectors, parent_dir)?);
            }
        }

        let config = Config::builder()
            .add_source(Config::try_from(&file_config)?)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogProperties {
    /// Log verbosity level of the default filtering logic, which is
    /// wordecc=<level>,wordecc_cli=<level>,wordecc_core=<level>
    /// Must be either of <https://docs.rs/tracing/latest/tracing/struct.Level.html#implementations>
    pub level: String,
    /// Custom filtering logic, refer to the syntax here https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#example-syntax
    /// This will override the default filtering logic above
    pub filter: Option<String>,
    /// Log format. Available options are "COMPACT" and "JSON"
    pub format: LogFormat,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputProperties {
    /// Whether to color PASS/FAIL in the self test report
    pub color: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyProperties {
    /// TOML file with extra test vectors
    pub vectors_path: Option<String>,
    /// Whether to run the built-in reference vectors
    pub include_reference: bool,
}

impl Default for LogProperties {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            filter: None,
            format: LogFormat::Compact,
        }
    }
}

impl Default for OutputProperties {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for VerifyProperties {
    fn default() -> Self {
        Self {
            vectors_path: None,
            include_reference: true,
        }
    }
}

/// Prepends `base_dir` to `file_path` if the path is not absolute.
fn prepend_file_path(file_path: &str, base_dir: &Path) -> Result<String> {
    let path = Path::new(file_path);
    if path.is_absolute() {
        return Ok(file_path.to_string());
    }

    Ok(base_dir
        .join(path)
        .to_str()
        .ok_or_else(|| anyhow!("failed to convert path to str"))?
        .to_string())
}

impl fmt::Display for WordEccProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "log: \n{}", self.log)?;
        writeln!(f, "output: \n{}", self.output)?;
        write!(f, "verify: \n{}", self.verify)
    }
}

impl fmt::Display for LogProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   level: {}", self.level)?;
        writeln!(f, "   filter: {:?}", self.filter)?;
        write!(f, "   format: {:?}", self.format)
    }
}

impl fmt::Display for OutputProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   color: {}", self.color)
    }
}

impl fmt::Display for VerifyProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   vectors_path: {:?}", self.vectors_path)?;
        write!(f, "   include_reference: {}", self.include_reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = WordEccProperties::new(None).unwrap();

        assert_eq!(config.log.format, LogFormat::Compact);
        assert!(config.output.color);
        assert!(config.verify.include_reference);
        assert!(config.verify.vectors_path.is_none());
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordecc.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
            [log]
            level = "DEBUG"
            format = "JSON"

            [output]
            color = false

            [verify]
            vectors_path = "vectors/extra.toml"
            "#
        )
        .unwrap();

        let config = WordEccProperties::new(Some(&path)).unwrap();

        assert_eq!(config.log.level, "DEBUG");
        assert_eq!(config.log.format, LogFormat::Json);
        assert!(!config.output.color);
        assert!(config.verify.include_reference);
        assert_eq!(
            config.verify.vectors_path.as_deref().map(Path::new),
            Some(dir.path().join("vectors/extra.toml").as_path())
        );
    }

    #[test]
    fn test_prepend_file_path() {
        let base = Path::new("/etc/wordecc");
        assert_eq!(
            prepend_file_path("vectors.toml", base).unwrap(),
            "/etc/wordecc/vectors.toml"
        );
        assert_eq!(
            prepend_file_path("/tmp/vectors.toml", base).unwrap(),
            "/tmp/vectors.toml"
        );
    }

    #[test]
    fn test_parse_sample_config_file() {
        let config = WordEccProperties::new(Some(Path::new("config/config.toml"))).unwrap();

        assert_eq!(config.log.level, "INFO");
        assert_eq!(
            config.verify.vectors_path.as_deref(),
            Some("config/vectors.toml")
        );
    }

    #[test]
    fn test_missing_config_file() {
        assert!(WordEccProperties::new(Some(Path::new("/nonexistent/wordecc.toml"))).is_err());
    }
}
