/// Normalize one raw cell.
///
/// Missing stays missing. Present values are trimmed of Unicode whitespace
/// and upper-cased; a value that ends up empty is treated as missing.
pub fn normalize_value(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}
