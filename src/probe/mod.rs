//! Probing module
//!
//! Answers two questions before any conversion runs: which converter
//! executables are actually installed, and what format a given icon file is.

pub mod format;
pub mod inspector;

pub use format::IconFormat;
pub use inspector::{ToolInspector, ToolStatus};

/// The HVIF-Tools executables this crate delegates to
pub const CONVERTER_TOOLS: [&str; 3] = ["hvif2svg", "svg2hvif", "icon2icon"];
