//! Command-line argument definitions

use clap::{Args, ValueEnum};

/// Icon format selector for import/export
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Haiku Vector Icon Format
    Hvif,
    /// Icon-O-Matic format
    Iom,
}

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Input icon file ("-" for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output SVG file ("-" or omitted for stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Source format (detected from the input when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Input SVG file ("-" for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output icon file ("-" or omitted for stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Target icon format
    #[arg(short, long, value_enum)]
    pub format: FormatArg,
}

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Icon file to identify
    #[arg(short, long)]
    pub input: String,
}

/// Arguments for the tools command
#[derive(Args, Debug)]
pub struct ToolsArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
