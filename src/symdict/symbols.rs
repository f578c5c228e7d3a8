//! Import of NVDA per-language punctuation and symbol dictionaries.
//!
//! Each language directory of the NVDA locale tree that carries a
//! `symbols.dic` is copied into the output tree with the documentation
//! banner prefixed. The English output then doubles as the base fallback
//! dictionary for languages without one of their own.

use std::fs;
use std::path::PathBuf;

use log::{debug, info};

use super::config::{ImportConfig, BASE_DIR, BASE_SOURCE_LANG, DOC_HEADER, SYMBOLS_DIC};
use super::error::{ImportError, Result};
use super::utils;

/// Copy every available per-language symbols dictionary into the output
/// tree, then derive the base fallback from the English one.
///
/// Returns the number of language dictionaries copied. A language directory
/// without `symbols.dic` is skipped; a missing English output dictionary at
/// the fallback step is fatal.
pub fn import_symbol_dictionaries(config: &ImportConfig) -> Result<usize> {
    let mut languages: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(&config.nvda_locale_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let source = entry.path().join(SYMBOLS_DIC);
        if !source.exists() {
            debug!("No {} in {}, skipping", SYMBOLS_DIC, entry.path().display());
            continue;
        }
        languages.push((entry.file_name().to_string_lossy().into_owned(), source));
    }
    // Stable order keeps regenerated trees reproducible.
    languages.sort();

    for (lang, source) in &languages {
        let out_dir = config.output_root.join(lang);
        fs::create_dir_all(&out_dir)?;
        let content = utils::read_text(source)?;
        let out_path = out_dir.join(SYMBOLS_DIC);
        utils::write_dic(&out_path, DOC_HEADER, &content)?;
        info!("Imported symbols dictionary for {lang}");
    }

    copy_base_dictionary(config)?;
    Ok(languages.len())
}

/// Copy the English output dictionary to `base/symbols.dic`.
///
/// The base language has no further fallback, so its absence is an error.
fn copy_base_dictionary(config: &ImportConfig) -> Result<()> {
    let english = config
        .output_root
        .join(BASE_SOURCE_LANG)
        .join(SYMBOLS_DIC);
    if !english.exists() {
        return Err(ImportError::MissingBaseDictionary(english));
    }
    let base_dir = config.output_root.join(BASE_DIR);
    fs::create_dir_all(&base_dir)?;
    fs::copy(&english, base_dir.join(SYMBOLS_DIC))?;
    info!("Copied {BASE_SOURCE_LANG} symbols dictionary to {BASE_DIR}");
    Ok(())
}
