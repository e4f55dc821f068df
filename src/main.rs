mod cli;
mod commands;
mod domain;
mod services;

use clap::Parser;
use cli::Cli;
use commands::handle_commands;
use services::storage::load_config;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config()?;
    handle_commands(&cli, &config)
}
