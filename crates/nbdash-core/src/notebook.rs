use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An in-memory notebook: an ordered cell list plus metadata.
///
/// Only the paths nbdash consumes are modeled as typed fields. Everything
/// else (nbformat version markers, cell outputs, execution counts, ...)
/// rides along in flattened maps so a parse/serialize round trip preserves
/// the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    #[serde(default)]
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Notebook {
    pub fn parse(text: &str) -> crate::Result<Self> {
        serde_json::from_str(text).map_err(|e| crate::Error::NotebookParse { source: e })
    }

    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| crate::Error::NotebookSerialize { source: e })
    }

    /// Typed view of the `metadata.gallery` section, if present.
    pub fn gallery(&self) -> Option<GalleryMetadata> {
        let section = self.metadata.get("gallery")?;
        serde_json::from_value(section.clone()).ok()
    }
}

/// Metadata embedded by an nbgallery instance when a notebook is saved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryMetadata {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub git_commit_id: Option<String>,
}

/// A single notebook cell. Identity is positional; there is no cell id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub cell_type: String,
    #[serde(default)]
    pub source: SourceText,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Cell {
    pub fn is_code(&self) -> bool {
        self.cell_type == "code"
    }

    /// Full source text of the cell.
    pub fn text(&self) -> Cow<'_, str> {
        self.source.text()
    }

    /// Whether `metadata.tags` contains the given tag. A missing or
    /// malformed tags entry is treated as an empty tag set.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.metadata
            .get("tags")
            .and_then(Value::as_array)
            .is_some_and(|tags| tags.iter().any(|t| t.as_str() == Some(tag)))
    }
}

/// Cell source as stored on disk: either a single string or a list of
/// lines. Kept as parsed so serialization reproduces the input form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceText {
    Joined(String),
    Lines(Vec<String>),
}

impl SourceText {
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            SourceText::Joined(text) => Cow::Borrowed(text),
            SourceText::Lines(lines) => Cow::Owned(lines.concat()),
        }
    }
}

impl Default for SourceText {
    fn default() -> Self {
        SourceText::Joined(String::new())
    }
}
