//! Integration tests for command-line identifier checks.

use pan_cli::check::{all_valid, check_values};
use pan_model::{Rule, SequentialCheck, Status, ValidationOptions};

#[test]
fn test_lower_case_input_is_normalized_before_validation() {
    let rows = check_values(&["  abcde1234f "], &ValidationOptions::default());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].input, "  abcde1234f ");
    assert_eq!(rows[0].normalized.as_deref(), Some("ABCDE1234F"));
    assert!(rows[0].is_valid());
    assert!(all_valid(&rows));
}

#[test]
fn test_blank_argument_has_no_verdict_and_fails() {
    let rows = check_values(&["ABCDE1234F", "   "], &ValidationOptions::default());

    assert!(rows[0].is_valid());
    assert_eq!(rows[1].normalized, None);
    assert_eq!(rows[1].verdict, None);
    assert!(!rows[1].is_valid());
    assert!(!all_valid(&rows));
}

#[test]
fn test_mixed_arguments_keep_order_without_deduplication() {
    let rows = check_values(
        &["abcde1234f", "QQWER1234T", "ABCDE1234F"],
        &ValidationOptions::default(),
    );

    let statuses: Vec<Option<Status>> = rows
        .iter()
        .map(|row| row.verdict.map(|verdict| verdict.status()))
        .collect();
    assert_eq!(
        statuses,
        vec![Some(Status::Valid), Some(Status::Invalid), Some(Status::Valid)]
    );
    assert_eq!(
        rows[1].verdict.and_then(|verdict| verdict.failed_rule()),
        Some(Rule::AdjacentRepetition)
    );
    assert!(!all_valid(&rows));
}

#[test]
fn test_all_valid_arguments_pass() {
    let rows = check_values(
        &["ABCDE1234F".to_string(), "acegi1357k".to_string()],
        &ValidationOptions::default(),
    );

    assert!(all_valid(&rows));
}

#[test]
fn test_segmented_option_applies_to_checks() {
    let values = ["ABCDE1234X"];
    let whole = check_values(&values, &ValidationOptions::default());
    let segmented = check_values(
        &values,
        &ValidationOptions::new().with_sequential_check(SequentialCheck::Segmented),
    );

    assert!(all_valid(&whole));
    assert_eq!(
        segmented[0].verdict.and_then(|verdict| verdict.failed_rule()),
        Some(Rule::Sequential)
    );
    assert!(!all_valid(&segmented));
}
