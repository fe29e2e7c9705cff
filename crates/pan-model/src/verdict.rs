//! Per-record validation results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a cleaned identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Valid,
    Invalid,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Valid => "Valid",
            Self::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A PAN rule, listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Exactly 10 characters.
    Length,
    /// `AAAAA9999A` positional layout.
    Shape,
    /// No two identical consecutive characters.
    AdjacentRepetition,
    /// Not a run of code points each one above the previous.
    Sequential,
}

impl Rule {
    /// Stable rule identifier used in reports.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Length => "PAN001",
            Self::Shape => "PAN002",
            Self::AdjacentRepetition => "PAN003",
            Self::Sequential => "PAN004",
        }
    }

    /// Short kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Shape => "shape",
            Self::AdjacentRepetition => "adjacent-repetition",
            Self::Sequential => "sequential",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Length => "Identifier must be exactly 10 characters long",
            Self::Shape => {
                "Positions 1-5 must be letters A-Z, positions 6-9 digits 0-9, position 10 a letter A-Z"
            }
            Self::AdjacentRepetition => "No two consecutive characters may be identical",
            Self::Sequential => {
                "Characters must not form a run where each code point is one above the previous"
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Status plus the rule that produced it.
///
/// `failed_rule` is set exactly when the status is [`Status::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    status: Status,
    failed_rule: Option<Rule>,
}

impl Verdict {
    pub fn valid() -> Self {
        Self {
            status: Status::Valid,
            failed_rule: None,
        }
    }

    pub fn invalid(rule: Rule) -> Self {
        Self {
            status: Status::Invalid,
            failed_rule: Some(rule),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn failed_rule(&self) -> Option<Rule> {
        self.failed_rule
    }

    pub fn is_valid(&self) -> bool {
        self.status == Status::Valid
    }
}

/// A surviving identifier and its verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    pub pan: String,
    pub verdict: Verdict,
}

impl ValidatedRecord {
    pub fn new(pan: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            pan: pan.into(),
            verdict,
        }
    }

    pub fn status(&self) -> Status {
        self.verdict.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_ids_follow_evaluation_order() {
        let rules = [
            Rule::Length,
            Rule::Shape,
            Rule::AdjacentRepetition,
            Rule::Sequential,
        ];
        let ids: Vec<&str> = rules.iter().map(Rule::id).collect();
        assert_eq!(ids, vec!["PAN001", "PAN002", "PAN003", "PAN004"]);
        assert!(rules.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn verdict_links_status_and_rule() {
        assert_eq!(Verdict::valid().failed_rule(), None);
        let invalid = Verdict::invalid(Rule::Shape);
        assert_eq!(invalid.status(), Status::Invalid);
        assert_eq!(invalid.failed_rule(), Some(Rule::Shape));
        assert!(!invalid.is_valid());
    }

    #[test]
    fn status_displays_label() {
        assert_eq!(Status::Valid.to_string(), "Valid");
        assert_eq!(Status::Invalid.to_string(), "Invalid");
    }
}
