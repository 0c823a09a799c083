//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Brickwork: decorate authored brick blocks into styled hero components
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: brickwork.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = "brickwork.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Decorate every brick block in HTML files
    #[command(visible_alias = "d")]
    Decorate {
        #[command(flatten)]
        args: DecorateArgs,
    },

    /// Report how each brick block would be decorated, as JSON
    #[command(visible_alias = "i")]
    Inspect {
        #[command(flatten)]
        args: InspectArgs,
    },
}

/// Decorate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct DecorateArgs {
    /// HTML files or directories (directories are searched for `*.html`)
    #[arg(value_name = "PATH", required = true, value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Output directory (mirrors input layout)
    #[arg(short, long, default_value = "decorated", value_hint = clap::ValueHint::DirPath)]
    pub output: PathBuf,

    /// Print decorated HTML to stdout instead of writing files
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Page URL used to resolve relative links and select libs
    #[arg(short = 'U', long, value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Class marking brick blocks (overrides `[block] class`)
    #[arg(short, long)]
    pub block: Option<String>,
}

/// Inspect command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// HTML file to inspect
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub path: PathBuf,

    /// Page URL used to resolve relative links and select libs
    #[arg(short = 'U', long, value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Class marking brick blocks (overrides `[block] class`)
    #[arg(short, long)]
    pub block: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}
