//! Core symbols-dictionary import module

pub mod annotations;
pub mod config;
pub mod dictionary;
pub mod emoji;
pub mod error;
pub mod font_variants;
pub mod symbols;
mod utils;

use std::collections::HashSet;
use std::fs;

use log::info;

use config::{BASE_DIR, DOC_HEADER, FONT_VARIANTS_DIC, PRESEEDED_FILES};
pub use config::ImportConfig;
pub use dictionary::SymbolsDictionary;
pub use error::{ImportError, Result};

/// Counts reported by a completed import run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportSummary {
    /// Entries in the generated font-variant dictionary.
    pub font_variant_entries: usize,
    /// Per-language symbol dictionaries copied from the NVDA tree.
    pub symbol_dictionaries: usize,
    /// Per-language emoji dictionaries derived from CLDR.
    pub emoji_dictionaries: usize,
}

/// The batch-conversion driver.
///
/// Owns the run configuration and the set of CLDR files already consumed,
/// and executes the three import steps in order:
///
/// 1. font-variant substitutions from UnicodeData.txt,
/// 2. NVDA per-language symbol dictionaries,
/// 3. per-language emoji dictionaries from CLDR annotations.
pub struct SymbolsImporter {
    config: ImportConfig,
    processed: HashSet<String>,
}

impl SymbolsImporter {
    /// Create an importer for the given configuration.
    ///
    /// The processed-files set starts out holding the CLDR files that must
    /// never become standalone languages.
    pub fn new(config: ImportConfig) -> Self {
        Self {
            config,
            processed: PRESEEDED_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Run the full import pipeline.
    pub fn run(&mut self) -> Result<ImportSummary> {
        let font_variant_entries = self.import_font_variants()?;
        let symbol_dictionaries = self.import_symbol_dictionaries()?;
        let emoji_dictionaries = self.import_emoji_annotations()?;
        Ok(ImportSummary {
            font_variant_entries,
            symbol_dictionaries,
            emoji_dictionaries,
        })
    }

    /// Generate `base/font-variants.dic` from the Unicode data table.
    ///
    /// Returns the number of font-variant entries written.
    pub fn import_font_variants(&self) -> Result<usize> {
        let dic = font_variants::build_font_variants(&self.config.unicode_data)?;
        let base_dir = self.config.output_root.join(BASE_DIR);
        fs::create_dir_all(&base_dir)?;
        utils::write_dic(&base_dir.join(FONT_VARIANTS_DIC), DOC_HEADER, &dic.render())?;
        info!("Imported {} font variants", dic.len());
        Ok(dic.len())
    }

    /// Copy the NVDA symbol dictionaries and derive the base fallback.
    pub fn import_symbol_dictionaries(&self) -> Result<usize> {
        symbols::import_symbol_dictionaries(&self.config)
    }

    /// Derive the per-language emoji dictionaries.
    pub fn import_emoji_annotations(&mut self) -> Result<usize> {
        emoji::import_emoji_annotations(&self.config, &mut self.processed)
    }
}
