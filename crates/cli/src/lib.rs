//! Command-line encoder and self-test driver for `wordecc`.

pub mod cli;
pub mod config;
mod logging;
pub mod vectors;
pub mod verify;

use std::{io::Write, path::Path};

use anyhow::{bail, Context, Result};
use tracing::debug;
use wordecc_core::{DataWord, Encoder};

pub use cli::{Cli, Command};
pub use config::WordEccProperties;
pub use logging::init_tracing;

/// Runs the command selected on the command line, writing its output to
/// `out`.
pub fn run<W: Write>(cli: &Cli, config: &WordEccProperties, out: &mut W) -> Result<()> {
    let encoder = Encoder::standard();
    let color = config.output.color && !cli.no_color;

    match &cli.command {
        None => {
            let vectors_path = config.verify.vectors_path.as_deref().map(Path::new);
            run_verify(
                encoder,
                vectors_path,
                config.verify.include_reference,
                color,
                out,
            )
        }
        Some(Command::Verify {
            vectors,
            skip_reference,
        }) => {
            let vectors_path = vectors
                .as_deref()
                .or(config.verify.vectors_path.as_deref().map(Path::new));
            run_verify(
                encoder,
                vectors_path,
                config.verify.include_reference && !skip_reference,
                color,
                out,
            )
        }
        Some(Command::Encode { words }) => run_encode(encoder, words, out),
    }
}

fn run_verify<W: Write>(
    encoder: &Encoder,
    vectors_path: Option<&Path>,
    include_reference: bool,
    color: bool,
    out: &mut W,
) -> Result<()> {
    let mut test_vectors = Vec::new();
    if include_reference {
        test_vectors.extend(vectors::reference()?);
    }
    if let Some(path) = vectors_path {
        test_vectors.extend(vectors::load(path)?);
    }
    if test_vectors.is_empty() {
        bail!("no test vectors to run");
    }

    let report = verify::verify(encoder, &test_vectors);
    write!(out, "{}", report.display(color)).context("failed to write report")?;

    if !report.all_passed() {
        bail!(
            "{} of {} test cases failed",
            report.failed(),
            report.results().len()
        );
    }

    Ok(())
}

fn run_encode<W: Write>(encoder: &Encoder, words: &[String], out: &mut W) -> Result<()> {
    for input in words {
        let word: DataWord = input
            .parse()
            .with_context(|| format!("cannot encode {input:?}"))?;
        let ecc = encoder.encode(word);
        debug!(data = %word, ecc = %ecc, "encoded");
        writeln!(out, "{word} {ecc}").context("failed to write output")?;
    }

    Ok(())
}
