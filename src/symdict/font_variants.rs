//! Font-variant substitutions derived from the Unicode character database.
//!
//! UnicodeData.txt is a semicolon-delimited table with one record per
//! assigned code point. Field 5 holds the decomposition mapping, which for
//! decorative font variants (mathematical bold, fraktur, fullwidth forms
//! and the like) has the form `<font> XXXX` where `XXXX` is the plain
//! character to pronounce instead.

use std::path::Path;

use log::debug;
use unicode_normalization::UnicodeNormalization;

use super::dictionary::SymbolsDictionary;
use super::error::{ImportError, Result};
use super::utils;

/// Decomposition-mapping tag marking a font-variant record.
const FONT_TAG: &str = "<font>";

/// Qualifier column for font-variant entries: the description is a literal
/// replacement character, not a spoken name.
const QUALIFIER: &str = "literal";

/// Field 5 must exist, so a record needs at least this many fields.
const MIN_FIELDS: usize = 6;

/// Build the font-variant dictionary from a UnicodeData.txt file.
pub fn build_font_variants(unicode_data: &Path) -> Result<SymbolsDictionary> {
    let text = utils::read_text(unicode_data)?;
    collect_font_variants(&text)
}

/// Collect font-variant pairs from UnicodeData.txt content.
///
/// Pairs the NFKC normalizer already recovers are skipped; the dictionary
/// only has to cover the substitutions a generic normalization pass would
/// miss. Malformed records fail the run with their 1-based line number.
pub fn collect_font_variants(text: &str) -> Result<SymbolsDictionary> {
    let mut dic = SymbolsDictionary::with_qualifier(QUALIFIER);
    for (idx, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() < MIN_FIELDS {
            return Err(ImportError::InvalidUnicodeData {
                line: line_no,
                reason: format!("expected at least {MIN_FIELDS} fields, found {}", fields.len()),
            });
        }
        let Some(plain_hex) = fields[5].strip_prefix(FONT_TAG) else {
            continue;
        };
        let variant = parse_code_point(fields[0], line_no)?;
        let plain = parse_code_point(plain_hex.trim(), line_no)?;

        let normalized: String = variant.to_string().nfkc().collect();
        if normalized != plain.to_string() {
            dic.insert(variant.to_string(), plain.to_string());
        } else {
            debug!("Skipping U+{:04X}: recovered by NFKC", variant as u32);
        }
    }
    Ok(dic)
}

/// Parse a hexadecimal code point into a character.
fn parse_code_point(hex: &str, line: usize) -> Result<char> {
    let value = u32::from_str_radix(hex, 16).map_err(|_| ImportError::InvalidUnicodeData {
        line,
        reason: format!("invalid hexadecimal code point {hex:?}"),
    })?;
    char::from_u32(value).ok_or_else(|| ImportError::InvalidUnicodeData {
        line,
        reason: format!("U+{value:04X} is not a Unicode scalar value"),
    })
}
