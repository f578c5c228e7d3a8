//! CLDR annotation extraction.
//!
//! CLDR ships emoji metadata as XML `annotation` elements keyed by a
//! code-point sequence (`cp` attribute). Entries whose `type` attribute is
//! `tts` carry the short name a speech synthesizer should read aloud; all
//! other entries are keyword lists and are ignored here.

use std::path::PathBuf;

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::dictionary::SymbolsDictionary;
use super::error::{ImportError, Result};
use super::utils;

/// Extract all `tts` annotations from the listed source files.
///
/// Files are processed in order; a later file's entry overwrites an earlier
/// file's entry for the same code-point sequence while keeping its original
/// position. Callers therefore list a language's main annotations before
/// its derived ones so the derived data can refine them.
///
/// Colons are stripped from every description since the dictionary format
/// uses them as its field marker.
///
/// # Errors
/// Returns [`ImportError::EmptyAnnotations`] when no `tts` entry was found
/// in any source, which callers treat as "no emoji data for this language".
/// Unreadable files or malformed XML fail the run.
pub fn extract_annotations(sources: &[PathBuf]) -> Result<SymbolsDictionary> {
    let mut dic = SymbolsDictionary::new();
    for source in sources {
        debug!("Extracting tts annotations from {}", source.display());
        let text = utils::read_text(source)?;
        extract_into(&mut dic, &text)?;
    }
    if dic.is_empty() {
        return Err(ImportError::EmptyAnnotations);
    }
    Ok(dic)
}

/// Parse one annotation document, inserting its `tts` entries into `dic`.
fn extract_into(dic: &mut SymbolsDictionary, xml: &str) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    // Code-point key and accumulated text of the tts element being read.
    let mut current: Option<(String, String)> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"annotation" => {
                current = tts_key(&e)?.map(|cp| (cp, String::new()));
            }
            Event::Empty(e) if e.name().as_ref() == b"annotation" => {
                if let Some(cp) = tts_key(&e)? {
                    dic.insert(cp, String::new());
                }
            }
            Event::Text(t) => {
                if let Some((_, text)) = current.as_mut() {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::End(e) if e.name().as_ref() == b"annotation" => {
                if let Some((cp, text)) = current.take() {
                    dic.insert(cp, text.replace(':', ""));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(())
}

/// Returns the element's `cp` attribute when its `type` attribute is `tts`.
fn tts_key(element: &BytesStart) -> Result<Option<String>> {
    let mut cp = None;
    let mut is_tts = false;
    for attr in element.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"cp" => cp = Some(attr.unescape_value()?.into_owned()),
            b"type" => is_tts = attr.unescape_value()?.as_ref() == "tts",
            _ => {}
        }
    }
    Ok(if is_tts { cp } else { None })
}
