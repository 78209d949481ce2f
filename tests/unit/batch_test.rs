//! Tests for batch processing
//!
//! A batch produces exactly one result per input line, in input order.

use ccvalidator::core::models::{BatchSummary, ValidationResult};
use ccvalidator::core::services::{IssuerRegistry, NumberValidator, process_batch};
use ccvalidator::self_test::FIXTURE_INPUT;

fn classify(text: &str) -> Vec<(String, bool)> {
    let registry = IssuerRegistry::with_defaults();
    process_batch(&registry, text)
        .into_iter()
        .map(|r| (r.issuer, r.valid))
        .collect()
}

#[test]
fn reference_fixture() {
    let text = FIXTURE_INPUT.join("\n");
    let expected = [
        ("VISA", true),
        ("VISA", false),
        ("VISA", true),
        ("AMEX", true),
        ("Discover", true),
        ("MasterCard", true),
        ("MasterCard", false),
        ("Unknown", false),
    ];

    let got = classify(&text);
    assert_eq!(got.len(), expected.len());
    for ((issuer, valid), (want_issuer, want_valid)) in got.iter().zip(expected) {
        assert_eq!(issuer, want_issuer);
        assert_eq!(*valid, want_valid, "issuer={issuer}");
    }
}

#[test]
fn fixture_with_indentation() {
    // Lines indented the way a heredoc or multi-line literal would be
    let text = FIXTURE_INPUT
        .iter()
        .map(|line| format!("                    {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    let registry = IssuerRegistry::with_defaults();
    let results = process_batch(&registry, &text);
    assert_eq!(results[6].number, "5105105105105106");
    assert_eq!(results[6].issuer, "MasterCard");
}

#[test]
fn blank_lines_are_reported() {
    let got = classify("4111111111111111\n\n   \n378282246310005");
    assert_eq!(
        got,
        vec![
            ("VISA".to_string(), true),
            ("Unknown".to_string(), false),
            ("Unknown".to_string(), false),
            ("AMEX".to_string(), true),
        ]
    );
}

#[test]
fn trailing_newline_does_not_add_a_line() {
    assert_eq!(classify("4111111111111111\n").len(), 1);
    assert_eq!(classify("4111111111111111\n\n").len(), 2);
}

#[test]
fn batch_matches_single_evaluation() {
    let registry = IssuerRegistry::with_defaults();
    let validator = NumberValidator::new(&registry);
    let text = FIXTURE_INPUT.join("\n");

    let batch = process_batch(&registry, &text);
    let single: Vec<ValidationResult> = FIXTURE_INPUT.iter().map(|line| validator.evaluate(line)).collect();
    assert_eq!(batch, single);
}

#[test]
fn fixture_summary() {
    let registry = IssuerRegistry::with_defaults();
    let results = process_batch(&registry, &FIXTURE_INPUT.join("\n"));
    let summary = BatchSummary::from_results(&results);
    assert_eq!(
        summary,
        BatchSummary {
            total: 8,
            valid: 5,
            invalid: 3,
            unknown: 1,
        }
    );
}
