use markone::{
    config::Weights,
    grade::{CategoryScores, aggregate, round2},
};

fn scores(paragraphs: f64, images: f64, tables: f64, margins: f64) -> CategoryScores {
    CategoryScores {
        paragraphs,
        images,
        tables,
        margins,
    }
}

#[test]
fn unit_weight_sum_keeps_perfect_scores_at_one_hundred() {
    let weights = Weights {
        paragraphs: 0.35,
        images:     0.25,
        tables:     0.15,
        margins:    0.25,
    };
    // The weighted sum lands within floating-point noise of 100; the
    // engine's exposed two-decimal rounding settles it exactly.
    let final_score = round2(aggregate(&scores(100.0, 100.0, 100.0, 100.0), &weights));

    assert_eq!(final_score, 100.0);
}

#[test]
fn oversized_weights_clamp_at_one_hundred() {
    let weights = Weights {
        paragraphs: 1.0,
        images:     1.0,
        tables:     1.0,
        margins:    1.0,
    };
    let final_score = aggregate(&scores(100.0, 100.0, 100.0, 100.0), &weights);

    assert_eq!(final_score, 100.0);
}

#[test]
fn weights_pass_through_without_renormalization() {
    let weights = Weights {
        paragraphs: 0.5,
        images:     0.0,
        tables:     0.0,
        margins:    0.0,
    };
    // Half weight on a perfect category: 50, not scaled back up to 100.
    assert_eq!(aggregate(&scores(100.0, 0.0, 0.0, 0.0), &weights), 50.0);
}

#[test]
fn aggregation_is_linear_in_each_weight() {
    let base = Weights {
        paragraphs: 0.2,
        images:     0.0,
        tables:     0.0,
        margins:    0.0,
    };
    let doubled = Weights {
        paragraphs: 0.4,
        ..base
    };
    let category_scores = scores(80.0, 0.0, 0.0, 0.0);

    let with_base = aggregate(&category_scores, &base);
    let with_doubled = aggregate(&category_scores, &doubled);

    assert!((with_base - 16.0).abs() < 1e-9);
    assert!((with_doubled - 2.0 * with_base).abs() < 1e-9);
}

#[test]
fn default_weights_average_the_categories() {
    let final_score = aggregate(&scores(100.0, 0.0, 100.0, 0.0), &Weights::default());

    assert_eq!(final_score, 50.0);
}

#[test]
fn zero_weights_zero_the_final_score() {
    let weights = Weights {
        paragraphs: 0.0,
        images:     0.0,
        tables:     0.0,
        margins:    0.0,
    };
    assert_eq!(aggregate(&scores(100.0, 100.0, 100.0, 100.0), &weights), 0.0);
}
