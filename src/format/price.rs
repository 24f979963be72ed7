use crate::models::{PriceBound, PriceRange, PriceUnit, StructuredPrice};

use super::{decimal_prefix, numeric_tokens, parse_number};

/// Render a price range for display.
///
/// Legacy text passes through unchanged. A structured range renders as `"{from} to {to}"`,
/// or just the side that has a value; both side objects must be present for anything to show.
pub fn format_price_range(input: Option<&PriceRange>) -> String {
    match input {
        None => String::new(),
        Some(PriceRange::Legacy(text)) => text.clone(),
        Some(PriceRange::Structured(StructuredPrice {
            from: Some(from),
            to: Some(to),
        })) => match (render_bound(from), render_bound(to)) {
            (Some(from), Some(to)) => format!("{from} to {to}"),
            (Some(side), None) | (None, Some(side)) => side,
            (None, None) => String::new(),
        },
        Some(PriceRange::Structured(_)) => String::new(),
    }
}

fn render_bound(bound: &PriceBound) -> Option<String> {
    if bound.value.is_empty() {
        None
    } else {
        Some(format!("{} {}", bound.value, bound.unit))
    }
}

/// Sort key for price ordering: the first number in the formatted range, or 0.
///
/// Units are ignored, so "1.2 Cr" compares below "50 Lac".
pub fn comparable_value(input: Option<&PriceRange>) -> f64 {
    let formatted = format_price_range(input);
    let value = numeric_tokens(&formatted)
        .next()
        .and_then(decimal_prefix)
        .unwrap_or(0.0);
    value
}

/// Value used to identify a price range in the filter dropdown.
///
/// Legacy text is its own token; structured ranges use their JSON form.
pub fn price_token(input: Option<&PriceRange>) -> String {
    match input {
        None => String::new(),
        Some(PriceRange::Legacy(text)) => text.clone(),
        Some(structured @ PriceRange::Structured(_)) => {
            serde_json::to_string(structured).unwrap_or_default()
        }
    }
}

/// Bound value converted to lakhs, when it is a positive number.
pub fn bound_in_lakhs(bound: &PriceBound) -> Option<f64> {
    parse_number(&bound.value)
        .filter(|value| *value > 0.0)
        .map(|value| value * bound.unit.lakhs())
}

/// Best-effort conversion of legacy text like "50 Lac to 1.2 Cr" into a structured range.
///
/// The first two numbers become `from` and `to`; the last unit word in the text applies to
/// both sides, defaulting to lakhs.
pub fn parse_legacy_price(text: &str) -> StructuredPrice {
    let mut numbers = numeric_tokens(text);
    let from = numbers.next().unwrap_or_default();
    let to = numbers.next().unwrap_or_default();

    let unit = text
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter_map(|word| match word.to_ascii_lowercase().as_str() {
            "cr" | "crore" | "crores" => Some(PriceUnit::Cr),
            "lac" | "lacs" | "lakh" | "lakhs" => Some(PriceUnit::Lac),
            _ => None,
        })
        .last()
        .unwrap_or_default();

    StructuredPrice {
        from: Some(PriceBound::new(from, unit)),
        to: Some(PriceBound::new(to, unit)),
    }
}
