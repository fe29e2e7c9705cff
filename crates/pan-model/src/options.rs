//! Configuration options for PAN validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PanError;

/// How the non-sequential rule reads an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequentialCheck {
    /// The whole identifier must not be one ascending +1 run.
    ///
    /// A letter followed by a digit is never a +1 step, so this never flags an
    /// identifier that already passed the shape rule.
    #[default]
    WholeString,
    /// Neither the 5-letter prefix nor the 4-digit block may be a +1 run.
    Segmented,
}

impl SequentialCheck {
    pub fn label(&self) -> &'static str {
        match self {
            Self::WholeString => "whole",
            Self::Segmented => "segments",
        }
    }
}

impl fmt::Display for SequentialCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SequentialCheck {
    type Err = PanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "whole" | "whole-string" => Ok(Self::WholeString),
            "segments" | "segmented" => Ok(Self::Segmented),
            _ => Err(PanError::InvalidOption {
                option: "sequential check",
                value: s.to_string(),
                expected: "whole, segments",
            }),
        }
    }
}

/// Options controlling rule evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    pub sequential_check: SequentialCheck,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sequential_check(mut self, check: SequentialCheck) -> Self {
        self.sequential_check = check;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sequential_check_aliases() {
        assert_eq!(
            "whole".parse::<SequentialCheck>().unwrap(),
            SequentialCheck::WholeString
        );
        assert_eq!(
            " Segments ".parse::<SequentialCheck>().unwrap(),
            SequentialCheck::Segmented
        );
        let err = "prefix".parse::<SequentialCheck>().unwrap_err();
        assert!(matches!(err, PanError::InvalidOption { .. }));
        assert_eq!(
            err.to_string(),
            "invalid sequential check value 'prefix' (expected one of: whole, segments)"
        );
    }

    #[test]
    fn defaults_to_whole_string() {
        assert_eq!(
            ValidationOptions::default().sequential_check,
            SequentialCheck::WholeString
        );
    }
}
