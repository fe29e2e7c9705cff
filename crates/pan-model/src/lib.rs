pub mod dataset;
pub mod error;
pub mod options;
pub mod processing;
pub mod summary;
pub mod verdict;

pub use dataset::{CleanedDataset, Dataset};
pub use error::{PanError, Result};
pub use options::{SequentialCheck, ValidationOptions};
pub use processing::{OutputFormat, OutputPaths, ValidationOutcome};
pub use summary::Summary;
pub use verdict::{Rule, Status, ValidatedRecord, Verdict};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_counts_statuses() {
        let outcome = ValidationOutcome {
            records: vec![
                ValidatedRecord::new("ABCDE1234F", Verdict::valid()),
                ValidatedRecord::new("QQWER1234T", Verdict::invalid(Rule::AdjacentRepetition)),
                ValidatedRecord::new("PQRST1234", Verdict::invalid(Rule::Length)),
            ],
            summary: Summary::from_counts(5, 1, 2),
        };
        assert_eq!(outcome.valid().count(), 1);
        assert_eq!(outcome.invalid().count(), 2);
        assert_eq!(outcome.summary.missing_count, 2);
    }

    #[test]
    fn outcome_serializes() {
        let outcome = ValidationOutcome {
            records: vec![ValidatedRecord::new("ABCDE1234F", Verdict::valid())],
            summary: Summary::from_counts(1, 1, 0),
        };
        let json = serde_json::to_string(&outcome).expect("serialize outcome");
        let round: ValidationOutcome = serde_json::from_str(&json).expect("deserialize outcome");
        assert_eq!(round.records[0].pan, "ABCDE1234F");
        assert_eq!(round.summary, outcome.summary);
    }
}
