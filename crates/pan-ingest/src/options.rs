use serde::{Deserialize, Serialize};

/// Header of the identifier column in the source sheet.
pub const DEFAULT_PAN_COLUMN: &str = "Pan_Numbers";

/// Cell contents read as a missing value rather than text.
///
/// These are the tokens spreadsheet readers conventionally load as null.
/// Matching is exact on the raw cell, before any trimming.
pub const DEFAULT_MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options for reading the identifier column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Header name of the identifier column (case-insensitive).
    pub column: String,
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Raw cell values treated as missing.
    pub missing_markers: Vec<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            column: DEFAULT_PAN_COLUMN.to_string(),
            delimiter: b',',
            missing_markers: DEFAULT_MISSING_MARKERS
                .iter()
                .map(|marker| (*marker).to_string())
                .collect(),
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_missing_markers(mut self, markers: Vec<String>) -> Self {
        self.missing_markers = markers;
        self
    }

    /// True when the raw cell should load as a missing value.
    pub fn is_missing_marker(&self, raw: &str) -> bool {
        self.missing_markers.iter().any(|marker| marker == raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_markers_are_exact() {
        let options = IngestOptions::default();
        assert!(options.is_missing_marker(""));
        assert!(options.is_missing_marker("NA"));
        assert!(options.is_missing_marker("nan"));
        assert!(!options.is_missing_marker(" NA"));
        assert!(!options.is_missing_marker("Na"));
        assert!(!options.is_missing_marker("ABCDE1234F"));
    }

    #[test]
    fn builder_overrides_defaults() {
        let options = IngestOptions::new()
            .with_column("pan")
            .with_delimiter(b';')
            .with_missing_markers(vec!["-".to_string()]);
        assert_eq!(options.column, "pan");
        assert_eq!(options.delimiter, b';');
        assert!(options.is_missing_marker("-"));
        assert!(!options.is_missing_marker(""));
    }
}
