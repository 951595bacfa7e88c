#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, fmt::Display};

use itertools::Itertools;
use similar::TextDiff;

use super::results::CategoryResult;
use crate::{
    config::Tolerances,
    document::{ImageRecord, MarginRecord, ParagraphRecord, TableRecord},
};

/// Number of paragraph formatting attributes entering the format similarity.
const FORMAT_ATTRIBUTE_COUNT: f64 = 7.0;

/// A comparison axis over a structured document. Each category is weighted
/// and toleranced independently; `Generic` is the fallback for element kinds
/// the engine has no dedicated comparator for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Ordered text blocks.
    Paragraphs,
    /// Embedded images.
    Images,
    /// Tables.
    Tables,
    /// Page-margin settings.
    Margins,
    /// Anything else, compared by exact equality.
    Generic,
}

impl Category {
    /// Heading used for this category in rendered reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Paragraphs => "Paragraphs",
            Category::Images => "Images",
            Category::Tables => "Tables",
            Category::Margins => "Margins",
            Category::Generic => "Elements",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An element of an unrecognized category: either plain text or a flat
/// key-value record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenericValue {
    /// A bare text element.
    Text(String),
    /// A key-value record element.
    Record(BTreeMap<String, String>),
}

impl Display for GenericValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericValue::Text(text) => write!(f, "{text}"),
            GenericValue::Record(record) => {
                write!(f, "{{{}}}", record.iter().map(|(k, v)| format!("{k}: {v}")).join(", "))
            }
        }
    }
}

/// Normalized sequence-matching ratio between two strings: `2 * matched /
/// combined length`, over characters. 1.0 means identical, and two empty
/// strings are identical.
pub fn text_similarity(reference: &str, submission: &str) -> f64 {
    f64::from(TextDiff::from_chars(reference, submission).ratio())
}

/// The empty-pair contract shared by every category comparator: nothing
/// expected and nothing found is full credit, while an element list that is
/// empty on exactly one side scores zero.
fn vacuous(reference_len: usize, submission_len: usize) -> Option<CategoryResult> {
    match (reference_len, submission_len) {
        (0, 0) => Some(CategoryResult::perfect()),
        (0, _) | (_, 0) => Some(CategoryResult::zero(Vec::new())),
        _ => None,
    }
}

/// Incrementally builds one nested Markdown discrepancy entry.
struct DiffEntry {
    /// Accumulated lines of the entry.
    lines: Vec<String>,
}

impl DiffEntry {
    /// Starts an entry with its heading line.
    fn new(heading: impl Into<String>) -> Self {
        Self {
            lines: vec![heading.into()],
        }
    }

    /// Appends a second-level detail line.
    fn detail(&mut self, line: impl Into<String>) {
        self.lines.push(format!("  - {}", line.into()));
    }

    /// Opens the differences block.
    fn begin_differences(&mut self) {
        self.lines.push("  - **Differences:**".to_string());
    }

    /// Appends one attribute difference with both values.
    fn difference(&mut self, attribute: &str, reference: impl Display, submission: impl Display) {
        self.lines.push(format!("    - **{attribute}:**"));
        self.lines.push(format!("      - **Reference:** {reference}"));
        self.lines
            .push(format!("      - **Student Submission:** {submission}"));
    }

    /// Appends a whole-value comparison without an attribute heading.
    fn comparison(&mut self, reference: impl Display, submission: impl Display) {
        self.lines.push(format!("    - **Reference:** {reference}"));
        self.lines
            .push(format!("    - **Student Submission:** {submission}"));
    }

    /// Renders the entry as one multi-line string.
    fn render(self) -> String {
        self.lines.join("\n")
    }
}

/// Renders a list attribute for a discrepancy line.
fn display_list<T: Display>(items: &[T]) -> String {
    format!("[{}]", items.iter().join(", "))
}

/// Uppercases the first character of an attribute name for display.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fraction of the seven formatting attributes on which the two paragraphs
/// agree exactly. List attributes are compared as whole sequences.
fn format_similarity(reference: &ParagraphRecord, submission: &ParagraphRecord) -> f64 {
    let matches = [
        reference.style == submission.style,
        reference.bold == submission.bold,
        reference.italic == submission.italic,
        reference.underline == submission.underline,
        reference.alignment == submission.alignment,
        reference.font == submission.font,
        reference.size == submission.size,
    ]
    .iter()
    .filter(|matched| **matched)
    .count();

    matches as f64 / FORMAT_ATTRIBUTE_COUNT
}

/// Builds the discrepancy entry for one paragraph pair below the reporting
/// threshold.
fn paragraph_entry(
    index: usize,
    reference: &ParagraphRecord,
    submission: &ParagraphRecord,
    text_score: f64,
    format_score: f64,
) -> String {
    let mut entry = DiffEntry::new(format!("- **Paragraph {} mismatch:**", index + 1));
    entry.detail(format!("**Text Similarity:** {:.1}%", text_score * 100.0));
    entry.detail(format!("**Format Similarity:** {:.1}%", format_score * 100.0));
    entry.begin_differences();

    if reference.text != submission.text {
        entry.difference("Text", &reference.text, &submission.text);
    }
    if reference.length != submission.length {
        entry.difference("Length", reference.length, submission.length);
    }
    if reference.style != submission.style {
        entry.difference("Style", &reference.style, &submission.style);
    }
    if reference.bold != submission.bold {
        entry.difference("Bold", reference.bold, submission.bold);
    }
    if reference.italic != submission.italic {
        entry.difference("Italic", reference.italic, submission.italic);
    }
    if reference.underline != submission.underline {
        entry.difference("Underline", reference.underline, submission.underline);
    }
    if reference.alignment != submission.alignment {
        entry.difference("Alignment", reference.alignment, submission.alignment);
    }
    if reference.font != submission.font {
        entry.difference("Font", display_list(&reference.font), display_list(&submission.font));
    }
    if reference.size != submission.size {
        entry.difference("Size", display_list(&reference.size), display_list(&submission.size));
    }

    entry.render()
}

/// Compares two paragraph lists positionally.
///
/// Each pair scores `0.5 * text similarity + 0.5 * format similarity`,
/// scaled to [0, 100]; the category score is the mean over the paired
/// elements. Pairs whose combined similarity falls below
/// `paragraph_similarity_threshold` are reported with both sub-scores and
/// every differing attribute. Reference paragraphs beyond the submission's
/// length are not scored but are summarized in one discrepancy line. When
/// the blank-line counts of the two documents agree within `empty_lines`,
/// `paragraph_bonus` points are added, capped at 100.
pub fn compare_paragraphs(
    reference: &[ParagraphRecord],
    submission: &[ParagraphRecord],
    tolerances: &Tolerances,
) -> CategoryResult {
    if let Some(result) = vacuous(reference.len(), submission.len()) {
        return result;
    }

    let paired = reference.len().min(submission.len());
    let mut discrepancies = Vec::new();
    let mut sum = 0.0;

    for (index, (reference_p, submission_p)) in reference.iter().zip(submission).enumerate() {
        let text_score = text_similarity(&reference_p.text, &submission_p.text);
        let format_score = format_similarity(reference_p, submission_p);
        let pair_score = 0.5 * text_score + 0.5 * format_score;
        sum += pair_score * 100.0;

        if pair_score < tolerances.paragraph_similarity_threshold {
            discrepancies.push(paragraph_entry(
                index,
                reference_p,
                submission_p,
                text_score,
                format_score,
            ));
        }
    }

    if reference.len() > paired {
        discrepancies.push(format!(
            "{} additional paragraph(s) in the reference with no match in the submission.",
            reference.len() - paired
        ));
    }

    let mut score = sum / paired as f64;

    let reference_blanks = reference.iter().filter(|p| p.is_blank()).count();
    let submission_blanks = submission.iter().filter(|p| p.is_blank()).count();
    if reference_blanks.abs_diff(submission_blanks) as i64 <= tolerances.empty_lines {
        score = (score + tolerances.paragraph_bonus).min(100.0);
    }

    CategoryResult::new(score, discrepancies)
}

/// Compares two image lists positionally.
///
/// Each pair runs three sub-checks: format equality, and width and height
/// within `image_dimension_tolerance` pixels. The pair score is the fraction
/// of passing sub-checks; failing sub-checks are named in the discrepancy
/// with both values.
pub fn compare_images(
    reference: &[ImageRecord],
    submission: &[ImageRecord],
    tolerances: &Tolerances,
) -> CategoryResult {
    if let Some(result) = vacuous(reference.len(), submission.len()) {
        return result;
    }

    let paired = reference.len().min(submission.len());
    let tolerance = tolerances.image_dimension_tolerance;
    let mut discrepancies = Vec::new();
    let mut sum = 0.0;

    for (index, (reference_i, submission_i)) in reference.iter().zip(submission).enumerate() {
        let format_ok = reference_i.format == submission_i.format;
        let width_ok = (reference_i.width - submission_i.width).abs() <= tolerance;
        let height_ok = (reference_i.height - submission_i.height).abs() <= tolerance;
        let matches = [format_ok, width_ok, height_ok]
            .iter()
            .filter(|ok| **ok)
            .count();
        sum += matches as f64 / 3.0 * 100.0;

        if matches < 3 {
            let mut entry = DiffEntry::new(format!("- **Image {} mismatch:**", index + 1));
            entry.begin_differences();
            if !format_ok {
                entry.difference("Format", &reference_i.format, &submission_i.format);
            }
            if !width_ok {
                entry.difference("Width", reference_i.width, submission_i.width);
            }
            if !height_ok {
                entry.difference("Height", reference_i.height, submission_i.height);
            }
            discrepancies.push(entry.render());
        }
    }

    CategoryResult::new(sum / paired as f64, discrepancies)
}

/// Compares two table lists positionally.
///
/// Each pair runs two sub-checks: row count within `table_rows_tolerance`
/// and column count within `table_columns_tolerance`.
pub fn compare_tables(
    reference: &[TableRecord],
    submission: &[TableRecord],
    tolerances: &Tolerances,
) -> CategoryResult {
    if let Some(result) = vacuous(reference.len(), submission.len()) {
        return result;
    }

    let paired = reference.len().min(submission.len());
    let mut discrepancies = Vec::new();
    let mut sum = 0.0;

    for (index, (reference_t, submission_t)) in reference.iter().zip(submission).enumerate() {
        let rows_ok =
            (reference_t.rows - submission_t.rows).abs() <= tolerances.table_rows_tolerance;
        let columns_ok = (reference_t.columns - submission_t.columns).abs()
            <= tolerances.table_columns_tolerance;
        let matches = [rows_ok, columns_ok].iter().filter(|ok| **ok).count();
        sum += matches as f64 / 2.0 * 100.0;

        if matches < 2 {
            let mut entry = DiffEntry::new(format!("- **Table {} mismatch:**", index + 1));
            entry.begin_differences();
            if !rows_ok {
                entry.difference("Rows", reference_t.rows, submission_t.rows);
            }
            if !columns_ok {
                entry.difference("Columns", reference_t.columns, submission_t.columns);
            }
            discrepancies.push(entry.render());
        }
    }

    CategoryResult::new(sum / paired as f64, discrepancies)
}

/// Parses a raw margin value as an integer in the document's length unit.
fn parse_margin(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse::<i64>().ok())
}

/// Compares the page margins of two documents.
///
/// The reference record's attribute set defines the comparison keys. A key
/// whose reference or submission value does not parse as an integer (or is
/// absent from the submission) contributes neither a match nor a discrepancy
/// but stays in the denominator. Values within the scaled `margin_tolerance`
/// count as matched. A reference with no keys scores 100; a margin block
/// present on only one side scores 0 with a diagnostic entry.
pub fn compare_margins(
    reference: Option<&MarginRecord>,
    submission: Option<&MarginRecord>,
    tolerances: &Tolerances,
) -> CategoryResult {
    let (reference, submission) = match (reference, submission) {
        (None, None) => return CategoryResult::perfect(),
        (Some(_), None) => {
            return CategoryResult::zero(vec![
                "- **Margins mismatch:** page margins missing from the student submission."
                    .to_string(),
            ]);
        }
        (None, Some(_)) => {
            return CategoryResult::zero(vec![
                "- **Margins mismatch:** page margins missing from the reference document."
                    .to_string(),
            ]);
        }
        (Some(reference), Some(submission)) => (reference, submission),
    };

    if reference.is_empty() {
        return CategoryResult::perfect();
    }

    let tolerance = tolerances.effective_margin_tolerance();
    let mut matches = 0;
    let mut entry = DiffEntry::new("- **Margins mismatch:**");
    entry.begin_differences();
    let mut mismatched = false;

    for key in reference.keys() {
        let reference_value = parse_margin(reference.get(key));
        let submission_value = parse_margin(submission.get(key));
        let (Some(reference_value), Some(submission_value)) = (reference_value, submission_value)
        else {
            // Unparsable on either side: skipped, still counted in the total.
            continue;
        };

        if (reference_value - submission_value).abs() as f64 <= tolerance {
            matches += 1;
        } else {
            mismatched = true;
            entry.difference(&capitalize(key), reference_value, submission_value);
        }
    }

    let score = matches as f64 / reference.len() as f64 * 100.0;
    let discrepancies = if mismatched {
        vec![entry.render()]
    } else {
        Vec::new()
    };

    CategoryResult::new(score, discrepancies)
}

/// Compares two element lists of an unrecognized kind by exact equality.
///
/// Each pair scores 100 or 0. When both sides of a failing pair are
/// key-value records, the entry diffs the reference keys present on both
/// sides; otherwise both whole values are shown.
pub fn compare_generic(
    label: &str,
    reference: &[GenericValue],
    submission: &[GenericValue],
) -> CategoryResult {
    if let Some(result) = vacuous(reference.len(), submission.len()) {
        return result;
    }

    let paired = reference.len().min(submission.len());
    let mut discrepancies = Vec::new();
    let mut sum = 0.0;

    for (index, (reference_e, submission_e)) in reference.iter().zip(submission).enumerate() {
        if reference_e == submission_e {
            sum += 100.0;
            continue;
        }

        let mut entry =
            DiffEntry::new(format!("- **{} {} mismatch:**", capitalize(label), index + 1));
        entry.begin_differences();
        match (reference_e, submission_e) {
            (GenericValue::Record(reference_r), GenericValue::Record(submission_r)) => {
                for (key, reference_value) in reference_r {
                    if let Some(submission_value) = submission_r.get(key) {
                        if reference_value != submission_value {
                            entry.difference(&capitalize(key), reference_value, submission_value);
                        }
                    }
                }
            }
            _ => entry.comparison(reference_e, submission_e),
        }
        discrepancies.push(entry.render());
    }

    CategoryResult::new(sum / paired as f64, discrepancies)
}
