//! fwid - Command-line tool for fuzzy ECU firmware fingerprinting
//!
//! Parses firmware version strings, identifies vehicles from observed
//! firmware, and validates the builtin fingerprint catalog.

mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fwid_catalog::FingerprintDatabase;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;
use crate::output::{OutputContext, OutputFormat};

#[derive(Parser)]
#[command(name = "fwid")]
#[command(author, version, about = "Fuzzy ECU firmware fingerprinting")]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "FWID_CONFIG")]
    config: Option<PathBuf>,

    /// Output format [default: table]
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Minimal output (for scripting)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse hex-encoded firmware strings into platform codes
    Codes {
        /// Firmware strings as hex, e.g. f100444820...
        #[arg(required = true, value_name = "HEX")]
        firmware: Vec<String>,
    },

    /// Identify a vehicle from an observed-firmware file (JSON or TOML)
    Match {
        /// Observed firmware file
        file: PathBuf,
    },

    /// Validate the builtin catalog and run the ambiguity audit
    Validate,

    /// List catalog models
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Load config file
    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load().unwrap_or_default()
    };

    // Merge CLI args with config
    let merged = config.merge_with_args(cli.output, cli.no_color);

    let ctx = OutputContext::new(merged.output, merged.no_color, cli.quiet);

    match &cli.command {
        Commands::Codes { firmware } => commands::codes(firmware, &ctx)?,
        Commands::Match { file } => commands::identify(&load_database()?, file, &ctx)?,
        Commands::Validate => commands::validate(&ctx)?,
        Commands::List => commands::list(&load_database()?, &ctx)?,
    }

    Ok(())
}

/// Load and validate the builtin fingerprint database
fn load_database() -> Result<FingerprintDatabase> {
    FingerprintDatabase::builtin().context("Failed to load fingerprint database")
}
