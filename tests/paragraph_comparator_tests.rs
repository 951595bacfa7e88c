use markone::{
    config::Tolerances,
    document::{Alignment, ParagraphRecord},
    grade::compare_paragraphs,
};

fn paragraph(text: &str) -> ParagraphRecord {
    ParagraphRecord {
        style: "Normal".to_string(),
        font: vec!["Liberation Serif".to_string()],
        size: vec![12.0],
        ..ParagraphRecord::from_text(text)
    }
}

#[test]
fn identical_paragraphs_score_full_credit() {
    let reference = vec![paragraph("The quick brown fox."), paragraph("Second line.")];
    let result = compare_paragraphs(&reference, &reference.clone(), &Tolerances::default());

    assert_eq!(result.score, 100.0);
    assert!(result.discrepancies.is_empty());
}

#[test]
fn both_empty_is_vacuously_perfect() {
    let result = compare_paragraphs(&[], &[], &Tolerances::default());
    assert_eq!(result.score, 100.0);
}

#[test]
fn one_side_empty_scores_zero() {
    let reference = vec![paragraph("Content.")];
    assert_eq!(compare_paragraphs(&reference, &[], &Tolerances::default()).score, 0.0);
    assert_eq!(compare_paragraphs(&[], &reference, &Tolerances::default()).score, 0.0);
}

#[test]
fn text_and_format_weigh_half_each() {
    // "ab" vs "ax" share one char: ratio 2*1/4 = 0.5. Format identical.
    let reference = vec![paragraph("ab")];
    let submission = vec![paragraph("ax")];
    let result = compare_paragraphs(&reference, &submission, &Tolerances::default());

    assert!((result.score - 75.0).abs() < 1e-9, "got {}", result.score);
    assert_eq!(result.discrepancies.len(), 1);
    let entry = &result.discrepancies[0];
    assert!(entry.contains("**Text Similarity:** 50.0%"), "{entry}");
    assert!(entry.contains("**Format Similarity:** 100.0%"), "{entry}");
    assert!(entry.contains("**Text:**"), "{entry}");
}

#[test]
fn one_format_attribute_mismatch_costs_a_seventh() {
    let reference = vec![paragraph("Same text.")];
    let mut submitted = paragraph("Same text.");
    submitted.bold = true;
    let result = compare_paragraphs(&reference, &[submitted], &Tolerances::default());

    let expected = 50.0 + 0.5 * (6.0 / 7.0) * 100.0;
    assert!((result.score - expected).abs() < 1e-9, "got {}", result.score);
    let entry = &result.discrepancies[0];
    assert!(entry.contains("**Bold:**"), "{entry}");
    assert!(!entry.contains("**Italic:**"), "{entry}");
}

#[test]
fn alignment_and_run_lists_compare_as_whole_values() {
    let reference = vec![paragraph("Heading")];
    let mut submitted = paragraph("Heading");
    submitted.alignment = Alignment::Center;
    submitted.font = vec!["Liberation Serif".to_string(), "Arial".to_string()];
    submitted.size = vec![12.0, 14.0];
    let result = compare_paragraphs(&reference, &[submitted], &Tolerances::default());

    let expected = 50.0 + 0.5 * (4.0 / 7.0) * 100.0;
    assert!((result.score - expected).abs() < 1e-9, "got {}", result.score);
    let entry = &result.discrepancies[0];
    assert!(entry.contains("**Alignment:**"), "{entry}");
    assert!(entry.contains("**Font:**"), "{entry}");
    assert!(entry.contains("**Size:**"), "{entry}");
}

#[test]
fn threshold_suppresses_reporting_but_not_scoring() {
    let tolerances = Tolerances {
        paragraph_similarity_threshold: 0.5,
        ..Tolerances::default()
    };
    let reference = vec![paragraph("ab")];
    let submission = vec![paragraph("ax")];
    let result = compare_paragraphs(&reference, &submission, &tolerances);

    // Pair scores 0.75, above the 0.5 threshold: counted, not reported.
    assert!((result.score - 75.0).abs() < 1e-9);
    assert!(result.discrepancies.is_empty());
}

#[test]
fn surplus_reference_paragraphs_are_summarized() {
    let reference = vec![paragraph("One."), paragraph("Two."), paragraph("Three.")];
    let submission = vec![paragraph("One.")];
    let result = compare_paragraphs(&reference, &submission, &Tolerances::default());

    // The single paired element matches perfectly; surplus is not scored.
    assert_eq!(result.score, 100.0);
    assert_eq!(result.discrepancies.len(), 1);
    assert!(
        result.discrepancies[0]
            .contains("2 additional paragraph(s) in the reference with no match"),
        "{}",
        result.discrepancies[0]
    );
}

#[test]
fn blank_line_agreement_earns_the_bonus() {
    // Disjoint text keeps the mean low enough that the bonus lands under
    // the cap: pairs score 50 and 100, mean 75, plus 10.
    let reference = vec![paragraph("abcd"), paragraph("")];
    let submission = vec![paragraph("wxyz"), paragraph("")];

    let base = compare_paragraphs(&reference, &submission, &Tolerances::default());
    let with_bonus = compare_paragraphs(
        &reference,
        &submission,
        &Tolerances {
            paragraph_bonus: 10.0,
            ..Tolerances::default()
        },
    );

    assert!((with_bonus.score - (base.score + 10.0)).abs() < 1e-9);
}

#[test]
fn blank_line_disagreement_beyond_tolerance_forfeits_the_bonus() {
    let reference = vec![paragraph("ab"), paragraph(""), paragraph("")];
    let submission = vec![paragraph("ax"), paragraph("filled"), paragraph("filled")];
    let tolerances = Tolerances {
        paragraph_bonus: 10.0,
        empty_lines: 1,
        ..Tolerances::default()
    };
    let with_bonus_denied = compare_paragraphs(&reference, &submission, &tolerances);
    let base = compare_paragraphs(&reference, &submission, &Tolerances::default());

    // Blank counts differ by 2 with tolerance 1: no bonus, but the blank
    // mismatch itself already lowered the paired text scores equally.
    assert!((with_bonus_denied.score - base.score).abs() < 1e-9);
}

#[test]
fn bonus_is_capped_at_one_hundred() {
    let reference = vec![paragraph("Perfect."), paragraph("")];
    let tolerances = Tolerances {
        paragraph_bonus: 10.0,
        ..Tolerances::default()
    };
    let result = compare_paragraphs(&reference, &reference.clone(), &tolerances);

    assert_eq!(result.score, 100.0);
}

#[test]
fn comparison_is_idempotent() {
    let reference = vec![paragraph("ab"), paragraph("")];
    let submission = vec![paragraph("ax")];
    let tolerances = Tolerances::default();

    assert_eq!(
        compare_paragraphs(&reference, &submission, &tolerances),
        compare_paragraphs(&reference, &submission, &tolerances)
    );
}
