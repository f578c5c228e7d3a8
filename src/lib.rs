//! # symdict-importer
//!
//! Converts third-party linguistic resources into the flat `.dic`
//! dictionary format consumed by a speech-synthesis pronunciation
//! subsystem: NVDA per-language symbol dictionaries are copied over, CLDR
//! emoji annotations become per-language emoji dictionaries, and the
//! Unicode character database contributes a font-variant substitution
//! dictionary.
//!
//! This is a one-shot build-time tool; nothing here runs at synthesis time.
pub mod symdict;

// Re-export the main types for convenience
pub use symdict::{
    annotations::extract_annotations,
    font_variants::{build_font_variants, collect_font_variants},
    ImportConfig,
    ImportError,
    ImportSummary,
    SymbolsDictionary,
    SymbolsImporter,
};
