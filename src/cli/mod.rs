//! CLI module for IconPort
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// IconPort icon format bridge
///
/// Imports and exports Haiku vector icons (HVIF) and Icon-O-Matic files by
/// delegating the format translation to the HVIF-Tools converters.
#[derive(Parser)]
#[command(name = "iconport")]
#[command(about = "IconPort - HVIF and Icon-O-Matic import/export bridge")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Converter timeout in seconds (overrides config)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Import an HVIF or Icon-O-Matic icon as SVG
    Import(args::ImportArgs),
    /// Export SVG markup as an HVIF or Icon-O-Matic icon
    Export(args::ExportArgs),
    /// Detect the format of an icon file
    Detect(args::DetectArgs),
    /// Report converter tool availability
    Tools(args::ToolsArgs),
}
