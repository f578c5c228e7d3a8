//! BOM-aware text reading and writing shared by all import steps.

use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use encoding_rs::UTF_8;

use super::error::Result;

/// UTF-8 byte-order mark written at the start of every generated file.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read a file as UTF-8 text, stripping a leading BOM if present.
///
/// Malformed sequences are replaced with U+FFFD rather than failing the
/// run, matching the tolerant handling the source trees require.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let (text, _had_errors) = UTF_8.decode_with_bom_removal(&bytes);
    Ok(text.into_owned())
}

/// Write a generated dictionary: BOM, then the documentation banner, then
/// the content, as UTF-8.
pub fn write_dic(path: &Path, banner: &str, content: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(BOM)?;
    file.write_all(banner.as_bytes())?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
