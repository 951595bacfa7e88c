#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};

/// Rounds a score to two decimal places, the precision exposed to callers.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The outcome of comparing one category of a document pair: a score in
/// [0, 100] plus the human-readable discrepancies found along the way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Similarity score in [0, 100].
    pub score:         f64,
    /// Formatted discrepancy entries, in the order they were found.
    pub discrepancies: Vec<String>,
}

impl CategoryResult {
    /// Creates a result from a score and its discrepancies.
    pub fn new(score: f64, discrepancies: Vec<String>) -> Self {
        Self {
            score,
            discrepancies,
        }
    }

    /// A full-credit result with nothing to report. Used when nothing was
    /// expected and nothing was found.
    pub fn perfect() -> Self {
        Self::new(100.0, Vec::new())
    }

    /// A zero-credit result, optionally carrying an explanatory entry.
    pub fn zero(discrepancies: Vec<String>) -> Self {
        Self::new(0.0, discrepancies)
    }
}

/// Everything produced by grading one (reference, submission) document pair.
///
/// Reports are immutable snapshots: one per comparison, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Paragraph category outcome.
    pub paragraphs:  CategoryResult,
    /// Image category outcome.
    pub images:      CategoryResult,
    /// Table category outcome.
    pub tables:      CategoryResult,
    /// Margin category outcome.
    pub margins:     CategoryResult,
    /// Weighted final score in [0, 100], rounded to two decimals.
    pub final_score: f64,
    /// Rendered Markdown report.
    pub rendered:    String,
}
