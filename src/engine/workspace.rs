//! Scoped temporary files for a single conversion call

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{Builder, TempPath};

use crate::error::IconPortResult;

/// Prefix for every temp file this crate creates
const SCRATCH_PREFIX: &str = "iconport-";

/// Temporary source/destination pair backing one conversion.
///
/// The source file holds the incoming bytes; the destination is reserved
/// empty and overwritten by the converter. Both are uniquely named, carry the
/// format suffix the converter keys on, and are removed when the `Scratch`
/// drops, on every exit path including unwind. Removal is best-effort by
/// construction, so cleanup can never mask the failure being reported.
#[derive(Debug)]
pub struct Scratch {
    source: TempPath,
    dest: TempPath,
}

impl Scratch {
    /// Stage `input` into a fresh temp pair with the given suffixes.
    ///
    /// Files land in `dir` when given, otherwise in the system temp directory.
    pub fn create(
        src_suffix: &str,
        dst_suffix: &str,
        input: &[u8],
        dir: Option<&Path>,
    ) -> IconPortResult<Self> {
        let mut source = named_temp(src_suffix, dir)?;
        source.write_all(input)?;
        source.flush()?;

        let dest = named_temp(dst_suffix, dir)?;

        Ok(Self {
            source: source.into_temp_path(),
            dest: dest.into_temp_path(),
        })
    }

    /// Path the converter reads from
    pub fn source_path(&self) -> &Path {
        &self.source
    }

    /// Path the converter writes to
    pub fn dest_path(&self) -> &Path {
        &self.dest
    }

    /// Read the converted output in full
    pub fn read_dest(&self) -> IconPortResult<Vec<u8>> {
        Ok(fs::read(&self.dest)?)
    }
}

fn named_temp(suffix: &str, dir: Option<&Path>) -> IconPortResult<tempfile::NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(SCRATCH_PREFIX).suffix(suffix);

    let file = match dir {
        Some(dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?,
    };
    Ok(file)
}
