//! Validation of identifiers given directly on the command line.
//!
//! Each value is normalized like a column cell but never deduplicated, so the
//! output lines up one-to-one with the arguments.

use tracing::debug;

use pan_clean::normalize_value;
use pan_model::{ValidationOptions, Verdict};
use pan_validate::validate_pan;

use crate::logging::redact_value;

/// One command-line value after normalization and validation.
#[derive(Debug)]
pub struct CheckRow {
    pub input: String,
    /// `None` when the value was blank after trimming.
    pub normalized: Option<String>,
    pub verdict: Option<Verdict>,
}

impl CheckRow {
    /// False for invalid values and for blank ones.
    pub fn is_valid(&self) -> bool {
        self.verdict.is_some_and(|verdict| verdict.is_valid())
    }
}

/// Normalize and classify every value, keeping argument order.
pub fn check_values<S: AsRef<str>>(values: &[S], options: &ValidationOptions) -> Vec<CheckRow> {
    values
        .iter()
        .map(|value| {
            let input = value.as_ref();
            let normalized = normalize_value(Some(input));
            let verdict = normalized
                .as_deref()
                .map(|pan| validate_pan(pan, options));
            debug!(
                pan = %redact_value(input),
                status = ?verdict.map(|verdict| verdict.status()),
                "checked identifier"
            );
            CheckRow {
                input: input.to_string(),
                normalized,
                verdict,
            }
        })
        .collect()
}

/// True when every row holds a valid identifier.
pub fn all_valid(rows: &[CheckRow]) -> bool {
    rows.iter().all(CheckRow::is_valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_argument_list_is_valid() {
        assert!(all_valid(&[]));
    }
}
