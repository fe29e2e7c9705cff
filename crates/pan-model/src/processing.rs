use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::summary::Summary;
use crate::verdict::{Status, ValidatedRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// `pan_validations.csv` and `summary.csv`.
    Csv,
    /// `pan_validation_report.json`.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPaths {
    pub validations: Option<PathBuf>,
    pub summary: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

impl OutputPaths {
    pub fn is_empty(&self) -> bool {
        self.validations.is_none() && self.summary.is_none() && self.json.is_none()
    }
}

/// Validated records in cleaned order plus the run summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub records: Vec<ValidatedRecord>,
    pub summary: Summary,
}

impl ValidationOutcome {
    pub fn valid(&self) -> impl Iterator<Item = &ValidatedRecord> {
        self.records
            .iter()
            .filter(|record| record.status() == Status::Valid)
    }

    pub fn invalid(&self) -> impl Iterator<Item = &ValidatedRecord> {
        self.records
            .iter()
            .filter(|record| record.status() == Status::Invalid)
    }
}
