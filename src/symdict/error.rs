//! Custom error types for the symdict-importer crate.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum ImportError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CLDR annotation file could not be parsed as XML.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An XML attribute was malformed.
    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    /// A UnicodeData.txt record is structurally invalid.
    #[error("Invalid UnicodeData record at line {line}: {reason}")]
    InvalidUnicodeData { line: usize, reason: String },

    /// No `tts`-typed annotation was found in any of the listed sources.
    ///
    /// Signals "no emoji data for this language" to the caller; never a
    /// hard failure of the whole run.
    #[error("No tts annotations found in the listed sources")]
    EmptyAnnotations,

    /// The English dictionary was absent when deriving the base fallback.
    #[error("Base dictionary source missing: {}", .0.display())]
    MissingBaseDictionary(PathBuf),
}

/// A convenience `Result` type alias using the crate's `ImportError` type.
pub type Result<T> = std::result::Result<T, ImportError>;
