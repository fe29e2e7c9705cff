use std::collections::BTreeSet;

use tracing::debug;

use pan_model::{CleanedDataset, Dataset};

use crate::normalize::normalize_value;

/// Run normalization, blank removal and deduplication over a dataset.
pub fn clean(dataset: &Dataset) -> CleanedDataset {
    let total_count = dataset.total_count();
    let present: Vec<String> = dataset
        .values()
        .iter()
        .filter_map(|value| normalize_value(value.as_deref()))
        .collect();
    let dropped_empty = dataset.values().len() - present.len();
    debug!(
        column = %dataset.column(),
        total_count,
        remaining = present.len(),
        dropped_empty,
        "dropped empty values"
    );

    let before_dedupe = present.len();
    let records = dedupe_first_occurrence(present);
    let dropped_duplicates = before_dedupe - records.len();
    debug!(
        column = %dataset.column(),
        unique_values = records.len(),
        dropped_duplicates,
        "removed duplicate values"
    );

    CleanedDataset::new(total_count, records, dropped_empty, dropped_duplicates)
}

/// Re-run the cleaning steps over plain values.
///
/// Applying this to the records of a [`CleanedDataset`] returns them unchanged.
pub fn clean_values(values: &[String]) -> Vec<String> {
    let present = values
        .iter()
        .filter_map(|value| normalize_value(Some(value.as_str())))
        .collect();
    dedupe_first_occurrence(present)
}

/// Keep the first occurrence of each value, preserving order.
pub fn dedupe_first_occurrence(values: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(values.len());
    for value in values {
        if seen.insert(value.clone()) {
            keep.push(value);
        }
    }
    keep
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let values = ["B", "A", "B", "C", "A"]
            .iter()
            .map(|v| (*v).to_string())
            .collect();
        assert_eq!(dedupe_first_occurrence(values), vec!["B", "A", "C"]);
    }

    #[test]
    fn clean_counts_each_kind_of_drop() {
        let dataset = Dataset::new(
            "Pan_Numbers",
            vec![
                Some("abcde1234f".to_string()),
                Some("ABCDE1234F".to_string()),
                Some(String::new()),
                None,
                Some("  abcde1234f  ".to_string()),
            ],
        );
        let cleaned = clean(&dataset);
        assert_eq!(cleaned.records(), &["ABCDE1234F".to_string()]);
        assert_eq!(cleaned.total_count(), 5);
        assert_eq!(cleaned.dropped_empty(), 2);
        assert_eq!(cleaned.dropped_duplicates(), 2);
    }

    #[test]
    fn empty_dataset_stays_empty() {
        let cleaned = clean(&Dataset::new("Pan_Numbers", Vec::new()));
        assert!(cleaned.is_empty());
        assert_eq!(cleaned.total_count(), 0);
    }
}
