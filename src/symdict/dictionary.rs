//! The insertion-ordered symbols dictionary and its text rendering.

use indexmap::IndexMap;

/// An ordered mapping from a symbol pattern to its spoken description.
///
/// Entries render in first-insertion order; overwriting a key keeps its
/// original position and replaces the value, which is what gives merged
/// source files their precedence semantics.
///
/// An optional qualifier is emitted as a fourth column on every entry line.
#[derive(Debug, Default, Clone)]
pub struct SymbolsDictionary {
    entries: IndexMap<String, String>,
    qualifier: Option<String>,
}

impl SymbolsDictionary {
    /// Creates an empty dictionary without a qualifier column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty dictionary whose entries all carry `qualifier`.
    pub fn with_qualifier(qualifier: impl Into<String>) -> Self {
        Self {
            entries: IndexMap::new(),
            qualifier: Some(qualifier.into()),
        }
    }

    /// The qualifier emitted as the fourth column, if any.
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// Inserts or overwrites an entry, returning the previous description.
    ///
    /// A key keeps its first-insertion position when overwritten.
    pub fn insert(
        &mut self,
        pattern: impl Into<String>,
        description: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(pattern.into(), description.into())
    }

    /// Looks up the description for a pattern.
    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.entries.get(pattern).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, d)| (p.as_str(), d.as_str()))
    }

    /// Renders the dictionary to the `.dic` body format.
    ///
    /// The first line is the literal `symbols:` header; every entry follows
    /// as `pattern<TAB>description<TAB>none` with the qualifier appended as
    /// a fourth field when set. All lines are CRLF terminated. An empty
    /// dictionary renders to just the header line.
    pub fn render(&self) -> String {
        let mut text = String::from("symbols:\r\n");
        for (pattern, description) in &self.entries {
            text.push_str(pattern);
            text.push('\t');
            text.push_str(description);
            text.push_str("\tnone");
            if let Some(qualifier) = &self.qualifier {
                text.push('\t');
                text.push_str(qualifier);
            }
            text.push_str("\r\n");
        }
        text
    }
}

impl<P: Into<String>, D: Into<String>> FromIterator<(P, D)> for SymbolsDictionary {
    fn from_iter<I: IntoIterator<Item = (P, D)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(p, d)| (p.into(), d.into()))
                .collect(),
            qualifier: None,
        }
    }
}
