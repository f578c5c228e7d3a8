//! Per-language emoji dictionaries derived from CLDR annotations.
//!
//! Runs in two phases. Exception languages come first: their output code
//! does not match the CLDR file naming, so a static table lists which
//! source files to merge, and every file consumed there is recorded so the
//! generic scan cannot derive a bogus standalone language from it. The
//! generic scan then handles every remaining annotation file, one language
//! per file.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use log::{debug, info};

use super::annotations::extract_annotations;
use super::config::{ImportConfig, CLDR_EXCEPTIONS, DOC_HEADER, EMOJIS_DIC};
use super::dictionary::SymbolsDictionary;
use super::error::{ImportError, Result};
use super::utils;

/// Derive one `emojis.dic` per supported language.
///
/// `processed` tracks consumed source file names across both phases; it
/// arrives pre-seeded with the language-less and already-merged files.
/// Returns the number of dictionaries written.
pub fn import_emoji_annotations(
    config: &ImportConfig,
    processed: &mut HashSet<String>,
) -> Result<usize> {
    let mut written = import_exception_languages(config, processed)?;
    written += scan_annotation_files(config, processed)?;
    Ok(written)
}

/// Phase one: languages listed in the exception table.
fn import_exception_languages(
    config: &ImportConfig,
    processed: &mut HashSet<String>,
) -> Result<usize> {
    let mut written = 0;
    for (lang, bases) in CLDR_EXCEPTIONS {
        let mut sources = Vec::new();
        for base in *bases {
            let file_name = format!("{base}.xml");
            // Main annotations first so derived entries can refine them.
            let main = config.annotations_dir.join(&file_name);
            if main.exists() {
                sources.push(main);
            }
            let derived = config.annotations_derived_dir.join(&file_name);
            if derived.exists() {
                sources.push(derived);
            }
            processed.insert(file_name);
        }
        if write_language_dictionary(config, lang, &sources)? {
            written += 1;
        }
    }
    Ok(written)
}

/// Phase two: every annotation file not consumed by phase one.
fn scan_annotation_files(
    config: &ImportConfig,
    processed: &mut HashSet<String>,
) -> Result<usize> {
    let mut files: Vec<String> = Vec::new();
    for entry in fs::read_dir(&config.annotations_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("xml") {
            continue;
        }
        files.push(entry.file_name().to_string_lossy().into_owned());
    }
    files.sort();

    let mut written = 0;
    for file_name in files {
        if processed.contains(&file_name) {
            continue;
        }
        let lang = file_name
            .strip_suffix(".xml")
            .unwrap_or(&file_name)
            .to_string();
        let mut sources = vec![config.annotations_dir.join(&file_name)];
        let derived = config.annotations_derived_dir.join(&file_name);
        if derived.exists() {
            sources.push(derived);
        }
        if write_language_dictionary(config, &lang, &sources)? {
            written += 1;
        }
        processed.insert(file_name);
    }
    Ok(written)
}

/// Extract and write one language's emoji dictionary.
///
/// Returns whether a dictionary was written. A language with no `tts`
/// annotations is skipped, and its output directory is only created when
/// there is something to write.
fn write_language_dictionary(
    config: &ImportConfig,
    lang: &str,
    sources: &[PathBuf],
) -> Result<bool> {
    let dic: SymbolsDictionary = match extract_annotations(sources) {
        Ok(dic) => dic,
        Err(ImportError::EmptyAnnotations) => {
            debug!("No emoji annotations for {lang}, skipping");
            return Ok(false);
        }
        Err(e) => return Err(e),
    };
    let out_dir = config.output_root.join(lang);
    fs::create_dir_all(&out_dir)?;
    utils::write_dic(&out_dir.join(EMOJIS_DIC), DOC_HEADER, &dic.render())?;
    info!("Imported {} emoji annotations for {lang}", dic.len());
    Ok(true)
}
