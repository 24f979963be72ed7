use crate::models::{AreaSpan, CarpetArea, AREA_UNITS};

use super::numeric_tokens;

/// Placeholder shown when a listing has no usable carpet area
pub const NOT_AVAILABLE: &str = "N/A";

/// Render a carpet area as `"{from} to {to} {unit}"`, passing legacy text through.
pub fn format_carpet_area(input: Option<&CarpetArea>) -> String {
    match input {
        Some(CarpetArea::Legacy(text)) if !text.is_empty() => text.clone(),
        Some(CarpetArea::Structured(span)) if !span.from.is_empty() && !span.to.is_empty() => {
            format!("{} to {} {}", span.from, span.to, span.unit)
                .trim()
                .to_string()
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Best-effort conversion of legacy text like "1200 to 1800 sqft" into a span.
pub fn parse_legacy_area(text: &str) -> AreaSpan {
    let mut numbers = numeric_tokens(text);
    let from = numbers.next().unwrap_or_default().to_string();
    let to = numbers.next().unwrap_or_default().to_string();

    let unit = text
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter_map(|word| {
            AREA_UNITS
                .iter()
                .find(|unit| unit.eq_ignore_ascii_case(word))
        })
        .last()
        .copied()
        .unwrap_or(AREA_UNITS[0]);

    AreaSpan {
        from,
        to,
        unit: unit.to_string(),
    }
}
