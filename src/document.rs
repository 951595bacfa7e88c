#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, fmt::Display, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left-aligned text.
    Left,
    /// Centered text.
    Center,
    /// Right-aligned text.
    Right,
    /// Justified text.
    Justified,
    /// Alignment could not be determined during extraction.
    #[default]
    Unknown,
}

impl Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justified => "justified",
            Alignment::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// One paragraph of a document, in original document order.
///
/// `font` and `size` hold one entry per text run, so run structure matters:
/// the lists are compared as whole sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphRecord {
    /// Paragraph text, trimmed of surrounding whitespace at extraction.
    pub text:      String,
    /// Character count of `text`.
    pub length:    usize,
    /// Name of the paragraph style.
    pub style:     String,
    /// True when any run in the paragraph is bold.
    pub bold:      bool,
    /// True when any run in the paragraph is italic.
    pub italic:    bool,
    /// True when any run in the paragraph is underlined.
    pub underline: bool,
    /// Horizontal alignment.
    pub alignment: Alignment,
    /// Font name per run, where the run declared one.
    pub font:      Vec<String>,
    /// Font size in points per run, where the run declared one.
    pub size:      Vec<f64>,
}

impl ParagraphRecord {
    /// Creates a paragraph record with `length` derived from the text; the
    /// remaining attributes take their defaults.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            length: text.chars().count(),
            text,
            ..Self::default()
        }
    }

    /// True for paragraphs whose text is blank (an empty line).
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One embedded image, in document relationship-table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Image codec name, e.g. `PNG`.
    pub format: String,
    /// Width in pixels.
    pub width:  i64,
    /// Height in pixels.
    pub height: i64,
}

/// One table, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    /// Number of rows.
    pub rows:    i64,
    /// Number of columns.
    pub columns: i64,
}

/// Page-margin attributes of a document section.
///
/// Values are kept as the raw strings found in the source markup, in the
/// document's native length unit; attributes that fail to parse as integers
/// are skipped during comparison rather than failing the category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarginRecord(BTreeMap<String, String>);

impl MarginRecord {
    /// Creates a margin record from attribute name/value pairs.
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self(values)
    }

    /// Attribute names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Raw value for an attribute, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no attributes were extracted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MarginRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// The structured extraction of one document: everything the comparison
/// engine sees.
///
/// Snapshots arrive as JSON produced by an upstream extractor; this crate
/// never parses binary document formats itself. `margins` is `None` when the
/// extractor could not read the page setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSnapshot {
    /// Paragraphs in document order.
    pub paragraphs: Vec<ParagraphRecord>,
    /// Embedded images in relationship-table order.
    pub images:     Vec<ImageRecord>,
    /// Tables in document order.
    pub tables:     Vec<TableRecord>,
    /// Page margins, when extractable.
    pub margins:    Option<MarginRecord>,
}

impl DocumentSnapshot {
    /// Reads a snapshot from a JSON file.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document snapshot: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse document snapshot: {}", path.display()))
    }

    /// Number of blank paragraphs (empty lines) in the document.
    pub fn blank_paragraph_count(&self) -> usize {
        self.paragraphs.iter().filter(|p| p.is_blank()).count()
    }
}
