//! Brickwork - decorates authored brick blocks into styled hero components.

mod brick;
mod cli;
mod collab;
mod config;
mod dom;
mod logger;
mod page;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::BrickConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = BrickConfig::load(&cli)?;

    // Pages and blocks are decorated sequentially.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async {
        match &cli.command {
            Commands::Decorate { args } => cli::decorate::run_decorate(args, &config)
                .await
                .map(|_| ()),
            Commands::Inspect { args } => cli::inspect::run_inspect(args, &config)
                .await
                .map(|_| ()),
        }
    })
}
