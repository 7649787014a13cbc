use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use flockdx_cli::cli::Cli;
use flockdx_cli::commands;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let output = commands::run(&cli)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
