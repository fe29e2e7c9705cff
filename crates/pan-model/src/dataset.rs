//! Input and cleaned datasets.
//!
//! Both types carry the row count captured when the input column was loaded.
//! That count is frozen: it is set once in the constructor and is only ever
//! read back, so the missing count at the end of the pipeline always refers
//! to the original input size.

use serde::{Deserialize, Serialize};

/// One column of raw identifier candidates, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    column: String,
    values: Vec<Option<String>>,
    total_count: usize,
}

impl Dataset {
    /// Build a dataset and capture its pre-cleaning size.
    pub fn new(column: impl Into<String>, values: Vec<Option<String>>) -> Self {
        let total_count = values.len();
        Self {
            column: column.into(),
            values,
            total_count,
        }
    }

    /// Build a dataset from present (non-null) values.
    pub fn from_strings<I, S>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            column,
            values.into_iter().map(|value| Some(value.into())).collect(),
        )
    }

    /// Name of the source column.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Raw values in source order; `None` marks a missing cell.
    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    /// Number of rows before any cleaning.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Normalized, non-empty, unique identifiers ready for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedDataset {
    total_count: usize,
    records: Vec<String>,
    dropped_empty: usize,
    dropped_duplicates: usize,
}

impl CleanedDataset {
    pub fn new(
        total_count: usize,
        records: Vec<String>,
        dropped_empty: usize,
        dropped_duplicates: usize,
    ) -> Self {
        Self {
            total_count,
            records,
            dropped_empty,
            dropped_duplicates,
        }
    }

    /// Row count of the dataset this was cleaned from.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Surviving identifiers in first-occurrence order.
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Rows removed because they were missing or blank after normalization.
    pub fn dropped_empty(&self) -> usize {
        self.dropped_empty
    }

    /// Rows removed because an earlier row had the same normalized value.
    pub fn dropped_duplicates(&self) -> usize {
        self.dropped_duplicates
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
