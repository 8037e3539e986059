//! Icon-O-Matic import/export adapters
//!
//! Both directions go through `icon2icon`, which detects its input format by
//! signature and keys the output format off the destination file extension.

use std::io::{Read, Write};

use crate::convert::{export_stream, import_stream, ConvertOptions, IOM_EXPORT, IOM_IMPORT};
use crate::error::IconPortResult;

/// Read an Icon-O-Matic icon stream and return its SVG rendering
pub fn import<R: Read>(reader: R, options: &ConvertOptions) -> IconPortResult<Vec<u8>> {
    import_stream(&IOM_IMPORT, reader, options)
}

/// Convert serialized SVG markup to Icon-O-Matic format and write it to the
/// sink
pub fn export<W: Write>(svg: &[u8], writer: W, options: &ConvertOptions) -> IconPortResult<()> {
    export_stream(&IOM_EXPORT, svg, writer, options)
}
