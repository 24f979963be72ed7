//! Display normalizers for the heterogeneous listing fields.
//!
//! Every function here is total: malformed or missing input degrades to an empty string or a
//! placeholder instead of failing, so render paths never need to handle errors.

mod carpet;
mod price;
mod units;

pub use carpet::{format_carpet_area, parse_legacy_area, NOT_AVAILABLE};
pub use price::{
    bound_in_lakhs, comparable_value, format_price_range, parse_legacy_price, price_token,
};
pub use units::{format_unit_configuration, has_unit, toggle_unit, unit_tokens, UNIT_OPTIONS};

/// Runs of digits and dots that contain at least one digit, in order of appearance.
pub(crate) fn numeric_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|token| token.bytes().any(|b| b.is_ascii_digit()))
}

/// Longest leading decimal in `token` ("1.2.3" reads as 1.2, ".5" as 0.5).
pub(crate) fn decimal_prefix(token: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (idx, c) in token.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = idx + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    token[..end].parse().ok()
}

/// Value typed into a numeric form field, read the lenient way browsers do.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    decimal_prefix(raw.trim_start())
}
