/// Configurations offered as checkboxes in the entry form
pub const UNIT_OPTIONS: [&str; 8] = [
    "1BHK", "2BHK", "3BHK", "4BHK", "5BHK", "6BHK", "RK", "Studio",
];

/// Trimmed, non-empty tags of a comma separated configuration string.
pub fn unit_tokens(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Normalize "1BHK ,2BHK,, 3BHK" into "1BHK, 2BHK, 3BHK". Repeated tags are kept.
pub fn format_unit_configuration(raw: &str) -> String {
    unit_tokens(raw).join(", ")
}

pub fn has_unit(raw: &str, unit: &str) -> bool {
    unit_tokens(raw).contains(&unit)
}

/// Apply a checkbox change: checking appends the tag when absent, unchecking removes every
/// occurrence of it.
pub fn toggle_unit(raw: &str, unit: &str, checked: bool) -> String {
    let mut tokens = unit_tokens(raw);
    if checked {
        if !tokens.contains(&unit) {
            tokens.push(unit);
        }
    } else {
        tokens.retain(|token| *token != unit);
    }
    tokens.join(", ")
}
