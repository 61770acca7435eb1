//! The publishing table and source path resolution.

use std::path::{is_separator, PathBuf};

/// One row of the publishing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyEntry {
    /// Filename written under the docs directory
    pub destination: String,

    /// Source location: a directory (ending in a separator) or a full file path
    pub source: String,
}

impl CopyEntry {
    /// Create a new entry.
    pub fn new(destination: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            source: source.into(),
        }
    }

    /// Resolved source path for this entry.
    pub fn resolved_source(&self) -> PathBuf {
        resolve_source(&self.destination, &self.source)
    }
}

/// Immutable table mapping destination filenames to source locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySpec {
    entries: Vec<CopyEntry>,
}

impl CopySpec {
    /// Build a table from `(destination, source)` pairs.
    pub fn new<I, D, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (D, S)>,
        D: Into<String>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(dest, src)| CopyEntry::new(dest, src))
                .collect(),
        }
    }

    /// The table published for the typed-language demo page.
    pub fn typed_demo() -> Self {
        Self::new(TYPED_DEMO)
    }

    pub fn entries(&self) -> &[CopyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CopyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CopySpec {
    fn default() -> Self {
        Self::typed_demo()
    }
}

impl<'a> IntoIterator for &'a CopySpec {
    type Item = &'a CopyEntry;
    type IntoIter = std::slice::Iter<'a, CopyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Source paths are relative to the project root. A value ending in a separator
// names a directory and the destination filename is appended to it.
const TYPED_DEMO: [(&str, &str); 9] = [
    ("block_of_ocaml_utils.js", "block_of_ocaml/utils.js"),
    ("converter.js", "block_of_ocaml/"),
    ("blockly_compressed.js", "./"),
    ("blocks_compressed.js", "./"),
    ("typedlang_compressed.js", "./"),
    ("en.js", "msg/js/"),
    ("index.html", "demos/typed/dev.html"),
    ("style.css", "demos/typed/"),
    ("typed.js", "demos/typed/"),
];

/// Resolve the source path for a table entry.
///
/// A `value` with an empty file name component (empty, or ending in a path
/// separator) is a directory and `key` is appended to it. Any other `value` is
/// a complete file path and is used as-is, which is how a file gets renamed on
/// copy. Only the text is inspected; the filesystem is never consulted.
pub fn resolve_source(key: &str, value: &str) -> PathBuf {
    if is_directory_value(value) {
        PathBuf::from(format!("{value}{key}"))
    } else {
        PathBuf::from(value)
    }
}

fn is_directory_value(value: &str) -> bool {
    value.is_empty() || value.ends_with(is_separator)
}
