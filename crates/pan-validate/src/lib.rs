//! PAN validation rules and aggregation.
//!
//! Rules run in a fixed order and the first failure decides the verdict:
//!
//! 1. [`Rule::Length`](pan_model::Rule::Length): exactly 10 characters
//! 2. [`Rule::Shape`](pan_model::Rule::Shape): `[A-Z]{5}[0-9]{4}[A-Z]`
//! 3. [`Rule::AdjacentRepetition`](pan_model::Rule::AdjacentRepetition)
//! 4. [`Rule::Sequential`](pan_model::Rule::Sequential), read according to
//!    [`SequentialCheck`](pan_model::SequentialCheck)

mod rules;
mod validator;

pub use rules::{
    PAN_LENGTH, PAN_SHAPE_REGEX, has_adjacent_repetition, has_sequential_segment, is_sequential,
    matches_length, matches_shape, rule_catalog,
};
pub use validator::{failures_by_rule, is_valid_pan, summarize, validate_dataset, validate_pan};
