//! IconPort Library
//!
//! Import/export bridge between SVG and the Haiku vector icon formats (HVIF
//! and Icon-O-Matic), delegating format translation to the external
//! HVIF-Tools converters.

pub mod cli;
pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod probe;

// Re-export commonly used types
pub use config::Config;
pub use convert::{
    convert_bytes, ConvertOptions, Conversion, HVIF_EXPORT, HVIF_IMPORT, IOM_EXPORT, IOM_IMPORT,
};
pub use error::{IconPortError, IconPortResult};
pub use probe::{IconFormat, ToolInspector, ToolStatus};
