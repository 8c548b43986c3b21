use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about, name = "wordecc", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
    /// Configuration file path (TOML, YAML or JSON).
    #[arg(short, long, global = true, env = "WORDECC_CONFIG")]
    pub config: Option<PathBuf>,
    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// runs the self test against known vectors. This is the default command.
    Verify {
        /// TOML file with extra `[[vector]]` entries to check.
        #[arg(long)]
        vectors: Option<PathBuf>,
        /// Skip the built-in reference vectors.
        #[arg(long)]
        skip_reference: bool,
    },
    /// prints the ECC of each 16-digit hex data word.
    Encode {
        /// Data words to encode.
        #[arg(required = true)]
        words: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["wordecc"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_verify_flags() {
        let cli = Cli::try_parse_from([
            "wordecc",
            "verify",
            "--vectors",
            "extra.toml",
            "--skip-reference",
            "--no-color",
        ])
        .unwrap();

        assert!(cli.no_color);
        match cli.command {
            Some(Command::Verify {
                vectors,
                skip_reference,
            }) => {
                assert_eq!(vectors, Some(PathBuf::from("extra.toml")));
                assert!(skip_reference);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_encode_requires_words() {
        assert!(Cli::try_parse_from(["wordecc", "encode"]).is_err());

        let cli = Cli::try_parse_from(["wordecc", "encode", "0000000000000001", "00"]).unwrap();
        match cli.command {
            Some(Command::Encode { words }) => assert_eq!(words, ["0000000000000001", "00"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
