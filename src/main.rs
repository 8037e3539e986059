//! IconPort CLI
//!
//! Imports and exports Haiku vector icons (HVIF) and Icon-O-Matic files by
//! delegating the format translation to the HVIF-Tools converters
//! (`hvif2svg`, `svg2hvif`, `icon2icon`).
//!
//! # Usage
//!
//! ```bash
//! iconport import --input icon.hvif --output icon.svg
//! iconport export --input drawing.svg --format iom --output icon.iom
//! iconport detect --input mystery.dat
//! iconport tools --json
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use iconport_cli::cli::{commands, Cli, Commands};
use iconport_cli::config::Config;
use iconport_cli::convert::ConvertOptions;
use iconport_cli::probe::ToolInspector;

/// Main entry point for the IconPort CLI
fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Load configuration and apply command-line overrides
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::default(),
    };

    let mut options = ConvertOptions::from_config(&config);
    if let Some(secs) = cli.timeout {
        options.timeout = Duration::from_secs(secs);
    }

    // Execute the requested command
    match cli.command {
        Commands::Import(args) => {
            info!("Executing import command");
            commands::import(args, &options)?;
        }
        Commands::Export(args) => {
            info!("Executing export command");
            commands::export(args, &options)?;
        }
        Commands::Detect(args) => {
            info!("Executing detect command");
            commands::detect(args)?;
        }
        Commands::Tools(args) => {
            info!("Executing tools command");
            let inspector = ToolInspector::with_overrides(config.tool_overrides());
            commands::tools(args, &inspector)?;
        }
    }

    Ok(())
}
