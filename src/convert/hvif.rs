//! HVIF import/export adapters

use std::io::{Read, Write};

use crate::convert::{export_stream, import_stream, ConvertOptions, HVIF_EXPORT, HVIF_IMPORT};
use crate::error::IconPortResult;

/// Read an HVIF icon stream and return its SVG rendering
pub fn import<R: Read>(reader: R, options: &ConvertOptions) -> IconPortResult<Vec<u8>> {
    import_stream(&HVIF_IMPORT, reader, options)
}

/// Convert serialized SVG markup to HVIF and write it to the sink
pub fn export<W: Write>(svg: &[u8], writer: W, options: &ConvertOptions) -> IconPortResult<()> {
    export_stream(&HVIF_EXPORT, svg, writer, options)
}
