//! Import configuration and static tables.

use std::path::{Path, PathBuf};

/// Documentation banner written at the top of every generated file.
///
/// Kept with LF endings; dictionary bodies use CRLF.
pub const DOC_HEADER: &str = "\
# This file was automatically generated by make import-symbols
# DO NOT MODIFY IT!
# See locale/README.md to know how to import dictionaries

";

/// Directory receiving the fallback dictionaries for unknown languages.
pub const BASE_DIR: &str = "base";

/// Language whose symbols dictionary doubles as the base fallback.
pub const BASE_SOURCE_LANG: &str = "en";

/// Output file name for per-language symbol dictionaries.
pub const SYMBOLS_DIC: &str = "symbols.dic";

/// Output file name for per-language emoji dictionaries.
pub const EMOJIS_DIC: &str = "emojis.dic";

/// Output file name for the font-variant dictionary.
pub const FONT_VARIANTS_DIC: &str = "font-variants.dic";

/// Languages whose CLDR source files do not follow the usual
/// one-file-per-language naming. Each output language code maps to the
/// ordered list of source base-names to merge; later entries overwrite
/// colliding keys from earlier ones.
pub const CLDR_EXCEPTIONS: &[(&str, &[&str])] = &[
    ("sr", &["sr", "sr_Latn"]),
    ("sr_BA", &["sr_Latn_BA"]),
    ("yue", &["yue", "yue_Hans"]),
    ("zh_HK", &["zh_Hant_HK"]),
    ("zh_TW", &["zh_Hant"]),
];

/// CLDR files that must never be treated as standalone languages:
/// `root.xml` carries no language content, the others are already merged
/// through [`CLDR_EXCEPTIONS`].
pub const PRESEEDED_FILES: &[&str] = &["root.xml", "en_001.xml", "sr_Cyrl.xml", "sr_Cyrl_BA.xml"];

/// Source and output locations for one import run.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Path to the Unicode character database table (UnicodeData.txt).
    pub unicode_data: PathBuf,
    /// NVDA locale tree holding one `symbols.dic` per language directory.
    pub nvda_locale_dir: PathBuf,
    /// CLDR main annotations directory (`common/annotations`).
    pub annotations_dir: PathBuf,
    /// CLDR derived annotations directory (`common/annotationsDerived`).
    pub annotations_derived_dir: PathBuf,
    /// Root of the generated dictionary tree.
    pub output_root: PathBuf,
}

impl ImportConfig {
    /// Resolve the conventional source layout below a project root.
    ///
    /// Sources are expected under `<root>/symbolsrc/`; the generated
    /// per-language directories land directly in `<root>`.
    pub fn from_project_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let src = root.join("symbolsrc");
        Self {
            unicode_data: src.join("UnicodeData.txt"),
            nvda_locale_dir: src.join("nvda-beta").join("source").join("locale"),
            annotations_dir: src.join("cldr").join("common").join("annotations"),
            annotations_derived_dir: src.join("cldr").join("common").join("annotationsDerived"),
            output_root: root.to_path_buf(),
        }
    }
}
