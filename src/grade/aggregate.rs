#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::config::Weights;

/// The four category scores of one document comparison, each in [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryScores {
    /// Paragraph category score.
    pub paragraphs: f64,
    /// Image category score.
    pub images:     f64,
    /// Table category score.
    pub tables:     f64,
    /// Margin category score.
    pub margins:    f64,
}

/// Combines category scores into one final score.
///
/// The result is the weighted sum clamped at 100. Weights pass through
/// as configured — no renormalization — so a weight set summing above 1
/// inflates scores up to the cap; changing that would change grading
/// outcomes for existing configurations.
pub fn aggregate(scores: &CategoryScores, weights: &Weights) -> f64 {
    let total = weights.paragraphs * scores.paragraphs
        + weights.images * scores.images
        + weights.tables * scores.tables
        + weights.margins * scores.margins;

    total.min(100.0)
}
