#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{
    category::Category,
    grid::GridOutcome,
    results::CategoryResult,
};

/// Appends one category section: subheading, score line, then the
/// discrepancy entries verbatim (or a no-errors line).
fn push_category(out: &mut String, category: Category, result: &CategoryResult) {
    out.push_str(&format!(
        "## {}\n**Score:** {:.1}% match\n\n",
        category.display_name(),
        result.score
    ));

    if result.discrepancies.is_empty() {
        out.push_str("- No errors.\n\n");
    } else {
        for entry in &result.discrepancies {
            out.push_str(entry);
            out.push('\n');
        }
        out.push('\n');
    }
}

/// Renders the Markdown report for one document comparison.
///
/// Categories render in the fixed order paragraphs, images, tables, margins;
/// none is omitted, even with an empty discrepancy list. Output is
/// byte-stable for identical inputs.
pub fn render_document_report(
    student: &str,
    paragraphs: &CategoryResult,
    images: &CategoryResult,
    tables: &CategoryResult,
    margins: &CategoryResult,
    final_score: f64,
) -> String {
    let mut out = format!("# Evaluation Report for {student}\n\n");

    let sections = [
        (Category::Paragraphs, paragraphs),
        (Category::Images, images),
        (Category::Tables, tables),
        (Category::Margins, margins),
    ];
    for (category, result) in sections {
        push_category(&mut out, category, result);
    }

    out.push_str(&format!("## Final Score\n**Final Score: {final_score:.2}%**\n"));
    out
}

/// Renders the Markdown report for one grid comparison.
pub fn render_grid_report(student: &str, outcome: &GridOutcome) -> String {
    let mut out = format!("# Evaluation Report for {student}\n\n");
    out.push_str("## Overview\n\n");
    out.push_str(&format!("- **Total Cells:** {}\n", outcome.total_graded));
    out.push_str(&format!("- **Correct Answers:** {}\n", outcome.correct));
    out.push_str(&format!("- **Final Score:** {:.2}%\n\n", outcome.score));
    out.push_str("## Errors\n\n");

    if outcome.discrepancies.is_empty() {
        out.push_str("- No errors.\n");
    } else {
        for entry in &outcome.discrepancies {
            out.push_str(entry);
            out.push('\n');
        }
    }

    out
}

/// Renders the report recorded for a student with no located submission.
pub fn render_missing_report(student: &str) -> String {
    format!("# Evaluation Report for {student}\n\nNo submission, score: 0%\n")
}

/// Renders the report recorded when a student's submission could not be
/// graded. The failure is named so the row is auditable, and the student
/// still appears in the summary with a zero score.
pub fn render_failure_report(student: &str, reason: &str) -> String {
    format!(
        "# Evaluation Report for {student}\n\nSubmission could not be graded: \
         {reason}\n\nScore: 0%\n"
    )
}
