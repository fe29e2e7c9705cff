use std::collections::BTreeMap;

use tracing::debug;

use pan_model::{
    CleanedDataset, Rule, SequentialCheck, Status, Summary, ValidatedRecord, ValidationOptions,
    ValidationOutcome, Verdict,
};

use crate::rules::{
    has_adjacent_repetition, has_sequential_segment, is_sequential, matches_length, matches_shape,
};

/// Classify one normalized identifier.
pub fn validate_pan(pan: &str, options: &ValidationOptions) -> Verdict {
    if !matches_length(pan) {
        return Verdict::invalid(Rule::Length);
    }
    if !matches_shape(pan) {
        return Verdict::invalid(Rule::Shape);
    }
    if has_adjacent_repetition(pan) {
        return Verdict::invalid(Rule::AdjacentRepetition);
    }
    let sequential = match options.sequential_check {
        SequentialCheck::WholeString => is_sequential(pan),
        SequentialCheck::Segmented => has_sequential_segment(pan),
    };
    if sequential {
        return Verdict::invalid(Rule::Sequential);
    }
    Verdict::valid()
}

/// Shorthand for [`validate_pan`] with default options.
pub fn is_valid_pan(pan: &str) -> bool {
    validate_pan(pan, &ValidationOptions::default()).is_valid()
}

/// Classify every cleaned record and compute the run summary.
pub fn validate_dataset(
    cleaned: &CleanedDataset,
    options: &ValidationOptions,
) -> ValidationOutcome {
    let records: Vec<ValidatedRecord> = cleaned
        .records()
        .iter()
        .map(|pan| ValidatedRecord::new(pan.clone(), validate_pan(pan, options)))
        .collect();
    let summary = summarize(cleaned.total_count(), &records);
    debug!(
        total_processed = summary.total_processed,
        valid_count = summary.valid_count,
        invalid_count = summary.invalid_count,
        missing_count = summary.missing_count,
        sequential_check = %options.sequential_check,
        "classified records"
    );
    ValidationOutcome { records, summary }
}

/// Count statuses and derive the missing count from the frozen total.
pub fn summarize(total_count: usize, records: &[ValidatedRecord]) -> Summary {
    let valid_count = records
        .iter()
        .filter(|record| record.status() == Status::Valid)
        .count();
    let invalid_count = records.len() - valid_count;
    Summary::from_counts(total_count, valid_count, invalid_count)
}

/// Number of invalid records per failing rule.
pub fn failures_by_rule(records: &[ValidatedRecord]) -> BTreeMap<Rule, usize> {
    let mut counts = BTreeMap::new();
    for rule in records
        .iter()
        .filter_map(|record| record.verdict.failed_rule())
    {
        *counts.entry(rule).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_of(pan: &str) -> Option<Rule> {
        validate_pan(pan, &ValidationOptions::default()).failed_rule()
    }

    #[test]
    fn first_failing_rule_wins() {
        assert_eq!(rule_of("ABCDE1234"), Some(Rule::Length));
        assert_eq!(rule_of("AABCD12345"), Some(Rule::Shape));
        assert_eq!(rule_of("AABCD1234E"), Some(Rule::AdjacentRepetition));
        assert_eq!(rule_of("ABCDE1234E"), None);
    }

    #[test]
    fn summarize_counts_statuses() {
        let records = vec![
            ValidatedRecord::new("ABCDE1234F", Verdict::valid()),
            ValidatedRecord::new("QQWER1234T", Verdict::invalid(Rule::AdjacentRepetition)),
        ];
        let summary = summarize(6, &records);
        assert_eq!(summary.valid_count, 1);
        assert_eq!(summary.invalid_count, 1);
        assert_eq!(summary.missing_count, 4);
    }

    #[test]
    fn failures_grouped_by_rule() {
        let records = vec![
            ValidatedRecord::new("ABC", Verdict::invalid(Rule::Length)),
            ValidatedRecord::new("ABCD", Verdict::invalid(Rule::Length)),
            ValidatedRecord::new("ABCDE1234F", Verdict::valid()),
            ValidatedRecord::new("ABCDE12345", Verdict::invalid(Rule::Shape)),
        ];
        let counts = failures_by_rule(&records);
        assert_eq!(counts.get(&Rule::Length), Some(&2));
        assert_eq!(counts.get(&Rule::Shape), Some(&1));
        assert_eq!(counts.get(&Rule::Sequential), None);
    }
}
