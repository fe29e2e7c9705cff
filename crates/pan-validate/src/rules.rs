//! Individual PAN checks.
//!
//! Each check is a plain predicate over the normalized identifier. Positions
//! and lengths are counted in characters, not bytes.

use std::sync::LazyLock;

use pan_model::Rule;
use regex::Regex;

/// Required identifier length in characters.
pub const PAN_LENGTH: usize = 10;

/// Five letters, four digits, one letter.
pub static PAN_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("Invalid PAN shape regex"));

const RULES: &[Rule] = &[
    Rule::Length,
    Rule::Shape,
    Rule::AdjacentRepetition,
    Rule::Sequential,
];

/// All rules in evaluation order.
pub fn rule_catalog() -> &'static [Rule] {
    RULES
}

pub fn matches_length(pan: &str) -> bool {
    pan.chars().count() == PAN_LENGTH
}

pub fn matches_shape(pan: &str) -> bool {
    PAN_SHAPE_REGEX.is_match(pan)
}

/// True if any two consecutive characters are identical.
pub fn has_adjacent_repetition(pan: &str) -> bool {
    let chars: Vec<char> = pan.chars().collect();
    chars.windows(2).any(|pair| pair[0] == pair[1])
}

/// True if every character's code point is exactly one above the previous.
///
/// Strings shorter than two characters are trivially sequential.
pub fn is_sequential(pan: &str) -> bool {
    let chars: Vec<char> = pan.chars().collect();
    chars
        .windows(2)
        .all(|pair| u32::from(pair[1]) == u32::from(pair[0]) + 1)
}

/// True if the letter prefix (positions 1-5) or the digit block (positions
/// 6-9) is sequential on its own.
pub fn has_sequential_segment(pan: &str) -> bool {
    let prefix: String = pan.chars().take(5).collect();
    let digits: String = pan.chars().skip(5).take(4).collect();
    (prefix.chars().count() == 5 && is_sequential(&prefix))
        || (digits.chars().count() == 4 && is_sequential(&digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_repetition() {
        assert!(has_adjacent_repetition("AABCD"));
        assert!(has_adjacent_repetition("QQWER"));
        assert!(has_adjacent_repetition("ABCDE1123F"));
        assert!(!has_adjacent_repetition("ABCDX"));
        assert!(!has_adjacent_repetition("LOIUJ"));
        assert!(!has_adjacent_repetition(""));
    }

    #[test]
    fn sequential_runs() {
        assert!(is_sequential("ABCDE"));
        assert!(is_sequential("MNOPQ"));
        assert!(is_sequential("1234"));
        assert!(is_sequential("ABCDEFGHIJ"));
        assert!(!is_sequential("QWERT"));
        assert!(!is_sequential("ASDFF"));
        assert!(!is_sequential("EDCBA"));
        assert!(!is_sequential("ACFGT"));
    }

    #[test]
    fn short_strings_are_trivially_sequential() {
        assert!(is_sequential(""));
        assert!(is_sequential("Z"));
    }

    #[test]
    fn letter_to_digit_is_never_a_step() {
        assert!(!is_sequential("ABCDE1234F"));
        assert!(!is_sequential("VWXYZ6789A"));
    }

    #[test]
    fn sequential_segments() {
        assert!(has_sequential_segment("ABCDE1357K"));
        assert!(has_sequential_segment("ACEGI1234K"));
        assert!(has_sequential_segment("ABCDE1234X"));
        assert!(!has_sequential_segment("ACEGI1357K"));
        assert!(!has_sequential_segment("AB"));
    }

    #[test]
    fn shape_pattern() {
        assert!(matches_shape("ABCDE1234F"));
        assert!(!matches_shape("abcde1234f"));
        assert!(!matches_shape("ABCD12345F"));
        assert!(!matches_shape("ABCDE1234"));
        assert!(!matches_shape("ABCDE1234FG"));
        assert!(!matches_shape("ABCDE12345"));
    }

    #[test]
    fn length_counts_characters() {
        assert!(matches_length("ABCDE1234F"));
        assert!(matches_length("ÄBCDE1234F"));
        assert!(!matches_length("ABCDE1234"));
    }

    #[test]
    fn catalog_is_ordered() {
        assert_eq!(rule_catalog().len(), 4);
        assert!(rule_catalog().windows(2).all(|pair| pair[0] < pair[1]));
    }
}
