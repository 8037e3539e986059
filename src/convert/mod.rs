//! Conversion adapters
//!
//! Every import/export direction is one instance of a single template:
//! stage the input bytes into a temp file, run the matching HVIF-Tools
//! converter against a reserved output temp file, read the result back, and
//! clean both files up no matter how the call ends. The directions differ
//! only in their [`Conversion`] descriptor.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::{Config, DEFAULT_TIMEOUT_SECS};
use crate::engine::{runner, Scratch};
use crate::error::{IconPortError, IconPortResult};
use crate::probe::ToolInspector;

pub mod hvif;
pub mod iom;

/// One import/export direction: which converter to run and which file
/// suffixes the staged input and reserved output carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    /// Converter executable name
    pub tool: &'static str,
    /// Suffix for the staged source temp file
    pub src_suffix: &'static str,
    /// Suffix for the reserved destination temp file
    pub dst_suffix: &'static str,
}

/// HVIF icon bytes in, SVG markup out
pub const HVIF_IMPORT: Conversion = Conversion {
    tool: "hvif2svg",
    src_suffix: ".hvif",
    dst_suffix: ".svg",
};

/// SVG markup in, HVIF icon bytes out
pub const HVIF_EXPORT: Conversion = Conversion {
    tool: "svg2hvif",
    src_suffix: ".svg",
    dst_suffix: ".hvif",
};

/// Icon-O-Matic icon bytes in, SVG markup out
pub const IOM_IMPORT: Conversion = Conversion {
    tool: "icon2icon",
    src_suffix: ".iom",
    dst_suffix: ".svg",
};

/// SVG markup in, Icon-O-Matic icon bytes out
pub const IOM_EXPORT: Conversion = Conversion {
    tool: "icon2icon",
    src_suffix: ".svg",
    dst_suffix: ".iom",
};

/// Per-call conversion settings
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Wall-clock limit for the converter run
    pub timeout: Duration,
    /// Directory for the temp pair; system temp dir when unset
    pub scratch_dir: Option<PathBuf>,
    /// Explicit converter locations, bypassing PATH lookup
    pub tool_overrides: HashMap<String, PathBuf>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            scratch_dir: None,
            tool_overrides: HashMap::new(),
        }
    }
}

impl ConvertOptions {
    /// Build options from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout: config.timeout(),
            scratch_dir: config.scratch_dir.clone(),
            tool_overrides: config.tool_overrides(),
        }
    }

    fn inspector(&self) -> ToolInspector {
        ToolInspector::with_overrides(self.tool_overrides.clone())
    }
}

/// Convert a byte blob from one icon format to another.
///
/// The template behind all four adapters. The converter is resolved before
/// anything touches the filesystem, runs as `<tool> <source> <dest>` with
/// captured output, and both temp files are gone by the time this returns,
/// whatever the outcome.
pub fn convert_bytes(
    conversion: &Conversion,
    input: &[u8],
    options: &ConvertOptions,
) -> IconPortResult<Vec<u8>> {
    let tool = options.inspector().resolve(conversion.tool)?;

    let scratch = Scratch::create(
        conversion.src_suffix,
        conversion.dst_suffix,
        input,
        options.scratch_dir.as_deref(),
    )?;

    let output = runner::run_converter(
        &tool,
        scratch.source_path(),
        scratch.dest_path(),
        options.timeout,
    )?;

    if !output.status.success() {
        return Err(IconPortError::ToolFailed {
            tool: conversion.tool.to_string(),
            stderr: output.stderr_text(),
        });
    }

    let converted = scratch.read_dest()?;
    info!(
        "{}: {} bytes in, {} bytes out",
        conversion.tool,
        input.len(),
        converted.len()
    );
    Ok(converted)
}

/// Importer contract: drain a readable icon stream, return converted bytes
pub fn import_stream<R: Read>(
    conversion: &Conversion,
    mut reader: R,
    options: &ConvertOptions,
) -> IconPortResult<Vec<u8>> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    debug!("Importing {} bytes via {}", input.len(), conversion.tool);
    convert_bytes(conversion, &input, options)
}

/// Exporter contract: convert serialized SVG markup, write the result to the
/// sink
pub fn export_stream<W: Write>(
    conversion: &Conversion,
    svg: &[u8],
    mut writer: W,
    options: &ConvertOptions,
) -> IconPortResult<()> {
    debug!("Exporting {} bytes via {}", svg.len(), conversion.tool);
    let converted = convert_bytes(conversion, svg, options)?;
    writer.write_all(&converted)?;
    writer.flush()?;
    Ok(())
}
