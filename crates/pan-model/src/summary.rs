use serde::{Deserialize, Serialize};

/// Aggregate counts for one validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Rows in the input column before cleaning.
    pub total_processed: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    /// Rows dropped during cleaning (blank, missing or duplicate).
    pub missing_count: usize,
}

impl Summary {
    /// Derive the missing count from the frozen total and the classified counts.
    pub fn from_counts(total_processed: usize, valid_count: usize, invalid_count: usize) -> Self {
        Self {
            total_processed,
            valid_count,
            invalid_count,
            missing_count: total_processed.saturating_sub(valid_count + invalid_count),
        }
    }

    /// Records that reached the validator.
    pub fn classified_count(&self) -> usize {
        self.valid_count + self.invalid_count
    }

    /// True when every input row is accounted for exactly once.
    pub fn is_balanced(&self) -> bool {
        self.total_processed == self.classified_count() + self.missing_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_is_the_remainder() {
        let summary = Summary::from_counts(10, 4, 3);
        assert_eq!(summary.missing_count, 3);
        assert_eq!(summary.classified_count(), 7);
        assert!(summary.is_balanced());
    }

    #[test]
    fn empty_run_is_balanced() {
        assert!(Summary::from_counts(0, 0, 0).is_balanced());
    }
}
