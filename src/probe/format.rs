//! Icon-format detection by file signature
//!
//! Mirrors the detection the converter suite itself performs: HVIF and IOM
//! are recognized by their four-byte magics, SVG by scanning the head of the
//! file for an `<svg` root, accepting an XML prolog and leading comments.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::IconPortResult;

/// How many leading bytes are sniffed
const SNIFF_LEN: usize = 512;

/// HVIF files start with "ncif"
const HVIF_MAGIC: [u8; 4] = [0x6e, 0x63, 0x69, 0x66];

/// IOM files are flattened BMessage archives, starting with "IMSG"
const IOM_MAGIC: [u8; 4] = *b"IMSG";

/// Icon file formats this crate can identify
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFormat {
    Hvif,
    Iom,
    Svg,
}

impl fmt::Display for IconFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconFormat::Hvif => write!(f, "HVIF"),
            IconFormat::Iom => write!(f, "IOM"),
            IconFormat::Svg => write!(f, "SVG"),
        }
    }
}

/// Identify an icon format from the leading bytes of a file
pub fn detect(header: &[u8]) -> Option<IconFormat> {
    if header.len() < 4 {
        return None;
    }

    if header[..4] == HVIF_MAGIC {
        return Some(IconFormat::Hvif);
    }
    if header[..4] == IOM_MAGIC {
        return Some(IconFormat::Iom);
    }
    if looks_like_svg(header) {
        return Some(IconFormat::Svg);
    }

    None
}

/// Sniff a file on disk; falls back to the extension when the signature is
/// inconclusive
pub fn detect_file(path: &Path) -> IconPortResult<Option<IconFormat>> {
    let mut header = vec![0u8; SNIFF_LEN];
    let mut file = File::open(path)?;
    let read = file.read(&mut header)?;
    header.truncate(read);

    if let Some(format) = detect(&header) {
        return Ok(Some(format));
    }
    Ok(detect_by_extension(path))
}

/// Map a lowercased file extension to a format
pub fn detect_by_extension(path: &Path) -> Option<IconFormat> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "hvif" => Some(IconFormat::Hvif),
        "iom" => Some(IconFormat::Iom),
        "svg" => Some(IconFormat::Svg),
        _ => None,
    }
}

/// Scan the sniffed head for an `<svg` root element.
///
/// Accepts an optional XML prolog and any number of comments before the root;
/// gives up at the first other element.
fn looks_like_svg(header: &[u8]) -> bool {
    let mut i = 0;
    while i < header.len() {
        match header[i] {
            b'<' => {
                let rest = &header[i + 1..];
                if rest.starts_with(b"svg") {
                    return matches!(
                        rest.get(3).copied(),
                        Some(b' ' | b'>' | b'\t' | b'\n' | b'\r')
                    );
                }
                if rest.starts_with(b"?xml") {
                    i += 5;
                } else if rest.starts_with(b"!--") {
                    match find_subslice(&header[i..], b"-->") {
                        Some(end) => i += end + 3,
                        None => return false,
                    }
                } else if rest.starts_with(b"!") {
                    // DOCTYPE and friends
                    i += 2;
                } else {
                    return false;
                }
            }
            _ => i += 1,
        }
    }
    false
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_hvif_magic() {
        assert_eq!(detect(b"ncif\x02\x01\x01"), Some(IconFormat::Hvif));
    }

    #[test]
    fn detects_iom_magic() {
        assert_eq!(detect(b"IMSG0123"), Some(IconFormat::Iom));
    }

    #[test]
    fn detects_bare_svg_root() {
        assert_eq!(
            detect(b"<svg xmlns=\"http://www.w3.org/2000/svg\">"),
            Some(IconFormat::Svg)
        );
        assert_eq!(detect(b"<svg>"), Some(IconFormat::Svg));
    }

    #[test]
    fn detects_svg_with_prolog_and_comment() {
        let data = b"<?xml version=\"1.0\"?>\n<!-- exported icon -->\n<svg width=\"64\">";
        assert_eq!(detect(data), Some(IconFormat::Svg));
    }

    #[test]
    fn svgz_like_prefix_is_not_svg() {
        assert_eq!(detect(b"<svgx>"), None);
        assert_eq!(detect(b"<html><body></body></html>"), None);
    }

    #[test]
    fn short_buffers_are_inconclusive() {
        assert_eq!(detect(b""), None);
        assert_eq!(detect(b"ncu"), None);
    }

    #[test]
    fn extension_fallback() {
        assert_eq!(
            detect_by_extension(Path::new("icon.HVIF")),
            Some(IconFormat::Hvif)
        );
        assert_eq!(
            detect_by_extension(Path::new("icon.iom")),
            Some(IconFormat::Iom)
        );
        assert_eq!(detect_by_extension(Path::new("icon.png")), None);
        assert_eq!(detect_by_extension(Path::new("noext")), None);
    }

    #[test]
    fn detect_file_prefers_signature_over_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("misnamed.svg");
        std::fs::write(&path, b"ncif\x02").unwrap();

        assert_eq!(detect_file(&path).unwrap(), Some(IconFormat::Hvif));
    }

    #[test]
    fn display_names() {
        assert_eq!(IconFormat::Hvif.to_string(), "HVIF");
        assert_eq!(IconFormat::Iom.to_string(), "IOM");
        assert_eq!(IconFormat::Svg.to_string(), "SVG");
    }
}
