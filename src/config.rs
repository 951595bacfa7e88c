#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Per-category weights applied when combining category scores.
///
/// Weights are not required to sum to 1 and are never renormalized; the
/// weighted total is clamped at 100 instead. Callers who want a different
/// grading profile supply their own values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Weight of the paragraph category.
    pub paragraphs: f64,
    /// Weight of the image category.
    pub images:     f64,
    /// Weight of the table category.
    pub tables:     f64,
    /// Weight of the margin category.
    pub margins:    f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            paragraphs: 0.25,
            images:     0.25,
            tables:     0.25,
            margins:    0.25,
        }
    }
}

/// Tolerances that relax the individual comparators.
///
/// All tolerances default to zero (exact comparison) except
/// `paragraph_similarity_threshold`, which defaults to 1.0 so that every
/// imperfect paragraph pair is reported, and `margin_scale`, which defaults
/// to 1.0 so margin tolerances are expressed in the document's native length
/// unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Allowed deviation, in pixels, for image width and height.
    pub image_dimension_tolerance:      i64,
    /// Allowed deviation in table row counts.
    pub table_rows_tolerance:           i64,
    /// Allowed deviation in table column counts.
    pub table_columns_tolerance:        i64,
    /// Allowed deviation for margin values, before scaling.
    pub margin_tolerance:               f64,
    /// Multiplier converting `margin_tolerance` into the document's native
    /// length unit.
    pub margin_scale:                   f64,
    /// Paragraph pairs scoring below this combined similarity (in [0, 1])
    /// are reported as mismatches.
    pub paragraph_similarity_threshold: f64,
    /// Bonus points added to the paragraph category when blank-line counts
    /// agree within `empty_lines`.
    pub paragraph_bonus:                f64,
    /// Allowed deviation in the number of blank paragraphs.
    pub empty_lines:                    i64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            image_dimension_tolerance:      0,
            table_rows_tolerance:           0,
            table_columns_tolerance:        0,
            margin_tolerance:               0.0,
            margin_scale:                   1.0,
            paragraph_similarity_threshold: 1.0,
            paragraph_bonus:                0.0,
            empty_lines:                    0,
        }
    }
}

impl Tolerances {
    /// Margin tolerance in the document's native length unit.
    pub fn effective_margin_tolerance(&self) -> f64 {
        self.margin_tolerance * self.margin_scale
    }
}

/// Complete comparison configuration: weights plus tolerances.
///
/// Defaults are an explicit value, not process state, so concurrent
/// evaluations with different configurations cannot interfere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Category weights.
    pub weights:    Weights,
    /// Comparator tolerances.
    pub tolerances: Tolerances,
}

impl ComparisonConfig {
    /// Reads a configuration from a JSON file.
    ///
    /// Unset fields fall back to their defaults. A file that cannot be read
    /// or parsed is an error the caller must treat as fatal to the whole
    /// batch run.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))
    }
}
