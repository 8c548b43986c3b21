use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use wordecc_cli::{init_tracing, run, Cli, WordEccProperties};

fn main() -> Result<()> {
    // Load command line arguments
    let cli = Cli::parse();

    let config =
        WordEccProperties::new(cli.config.as_deref()).context("failed to load config")?;

    // Set up tracing for logging
    init_tracing(&config.log).context("failed to set up tracing")?;

    debug!("config loaded: \n{}", config);

    let stdout = std::io::stdout();
    run(&cli, &config, &mut stdout.lock())
}
