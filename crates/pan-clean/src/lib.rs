//! Cleaning stage of the PAN pipeline.
//!
//! Raw column values go through three steps, in order:
//!
//! 1. **Normalize**: trim surrounding whitespace and upper-case.
//! 2. **Drop empties**: values that are missing or blank after step 1 leave
//!    the dataset.
//! 3. **Deduplicate**: only the first occurrence of each normalized value is
//!    kept, in source order.
//!
//! Nothing here fails: bad input is removed, and the removal shows up later
//! as part of the missing count.

mod cleaner;
mod normalize;

pub use cleaner::{clean, clean_values, dedupe_first_occurrence};
pub use normalize::normalize_value;
