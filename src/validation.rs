//! Rules enforced when a record is written, mirroring the admin entry form.
//!
//! Read paths never call into this module; stored records that break these rules are still
//! rendered through the lenient normalizers in [`crate::format`].

use thiserror::Error;

use crate::format::{bound_in_lakhs, parse_number};
use crate::models::{CarpetArea, Category, KeyHighlights, PriceRange, Property, StructuredPrice};

/// Allowed trending ranks
pub const TRENDING_SCORE_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

/// A write was refused; the message is meant for the person filling in the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("carpet area values must be positive numbers")]
    CarpetAreaNotPositive,
    #[error("carpet area 'from' must not exceed 'to'")]
    CarpetAreaInverted,
    #[error("price values must be positive numbers")]
    PriceNotPositive,
    #[error("price 'from' must not exceed price 'to'")]
    PriceInverted,
    #[error("trending score {0} is outside 1-10")]
    TrendingScoreOutOfRange(i64),
    #[error("trending score {0} is already used by another property")]
    TrendingScoreTaken(i64),
    #[error("website URL must start with http:// or https://")]
    InvalidWebsiteUrl,
    #[error("RERA number cannot be zero")]
    ReraNumberZero,
    #[error("RERA number cannot be negative")]
    ReraNumberNegative,
    #[error("name is required")]
    MissingName,
    #[error("category '{0}' already exists")]
    DuplicateCategory(String),
}

/// Run every property rule against the rest of the catalog.
pub fn validate_property(property: &Property, others: &[Property]) -> Result<(), ValidationError> {
    validate_rera(&property.key_highlights)?;
    if let Some(CarpetArea::Structured(span)) = &property.key_highlights.carpet_area {
        validate_carpet_area(&span.from, &span.to)?;
    }
    validate_website_url(&property.builder.website_url)?;
    if let Some(PriceRange::Structured(price)) = &property.price_range {
        validate_price_range(price)?;
    }
    if let Some(score) = property.trending_score {
        validate_trending_score(score, property.id.as_deref(), others)?;
    }
    Ok(())
}

/// Both sides must be positive numbers and `from <= to`.
pub fn validate_carpet_area(from: &str, to: &str) -> Result<(), ValidationError> {
    let (Some(from), Some(to)) = (parse_number(from), parse_number(to)) else {
        return Err(ValidationError::CarpetAreaNotPositive);
    };
    if from <= 0.0 || to <= 0.0 {
        return Err(ValidationError::CarpetAreaNotPositive);
    }
    if from > to {
        return Err(ValidationError::CarpetAreaInverted);
    }
    Ok(())
}

/// Both sides must be positive and ordered once converted to a common unit.
pub fn validate_price_range(price: &StructuredPrice) -> Result<(), ValidationError> {
    let from = price.from.as_ref().and_then(bound_in_lakhs);
    let to = price.to.as_ref().and_then(bound_in_lakhs);
    match (from, to) {
        (Some(from), Some(to)) if from > to => Err(ValidationError::PriceInverted),
        (Some(_), Some(_)) => Ok(()),
        _ => Err(ValidationError::PriceNotPositive),
    }
}

/// Score must be in range and unused by any record with a different id.
pub fn validate_trending_score(
    score: i64,
    own_id: Option<&str>,
    others: &[Property],
) -> Result<(), ValidationError> {
    if !TRENDING_SCORE_RANGE.contains(&score) {
        return Err(ValidationError::TrendingScoreOutOfRange(score));
    }
    let taken = others.iter().any(|other| {
        other.trending_score == Some(score)
            && (own_id.is_none() || other.id.as_deref() != own_id)
    });
    if taken {
        return Err(ValidationError::TrendingScoreTaken(score));
    }
    Ok(())
}

/// Empty, or `http(s)://` followed by a host with a dot in it.
pub fn validate_website_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Ok(());
    }
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or(ValidationError::InvalidWebsiteUrl)?;
    let has_dotted_host = rest
        .char_indices()
        .any(|(idx, c)| c == '.' && idx > 0 && idx + 1 < rest.len());
    if has_dotted_host {
        Ok(())
    } else {
        Err(ValidationError::InvalidWebsiteUrl)
    }
}

fn validate_rera(highlights: &KeyHighlights) -> Result<(), ValidationError> {
    if !highlights.rera_approved {
        return Ok(());
    }
    let number = highlights.rera_number.trim();
    let digits = number.strip_prefix('-').unwrap_or(number);
    if !digits.is_empty() && digits.bytes().all(|b| b == b'0') {
        return Err(ValidationError::ReraNumberZero);
    }
    if number.starts_with('-') {
        return Err(ValidationError::ReraNumberNegative);
    }
    Ok(())
}

/// Category names are required and unique.
pub fn validate_category(category: &Category, others: &[Category]) -> Result<(), ValidationError> {
    if category.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    let duplicate = others
        .iter()
        .any(|other| other.name == category.name && other.id != category.id);
    if duplicate {
        return Err(ValidationError::DuplicateCategory(category.name.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AreaSpan, PriceBound, PriceUnit};

    #[test]
    fn carpet_area_rules() {
        assert_eq!(validate_carpet_area("900", "1200"), Ok(()));
        assert_eq!(validate_carpet_area("1200", "1200"), Ok(()));
        assert_eq!(
            validate_carpet_area("1500", "1200"),
            Err(ValidationError::CarpetAreaInverted)
        );
        assert_eq!(
            validate_carpet_area("", "1200"),
            Err(ValidationError::CarpetAreaNotPositive)
        );
        assert_eq!(
            validate_carpet_area("0", "10"),
            Err(ValidationError::CarpetAreaNotPositive)
        );
    }

    #[test]
    fn price_range_compares_across_units() {
        let range = |from: (&str, PriceUnit), to: (&str, PriceUnit)| StructuredPrice {
            from: Some(PriceBound::new(from.0, from.1)),
            to: Some(PriceBound::new(to.0, to.1)),
        };
        assert_eq!(
            validate_price_range(&range(("90", PriceUnit::Lac), ("1.2", PriceUnit::Cr))),
            Ok(())
        );
        assert_eq!(
            validate_price_range(&range(("2", PriceUnit::Cr), ("150", PriceUnit::Lac))),
            Err(ValidationError::PriceInverted)
        );
        assert_eq!(
            validate_price_range(&range(("", PriceUnit::Lac), ("1", PriceUnit::Cr))),
            Err(ValidationError::PriceNotPositive)
        );
    }

    #[test]
    fn trending_score_must_be_unique_and_in_range() {
        let others = vec![Property {
            id: Some("a".into()),
            trending_score: Some(3),
            ..Default::default()
        }];
        assert_eq!(validate_trending_score(4, Some("b"), &others), Ok(()));
        assert_eq!(validate_trending_score(3, Some("a"), &others), Ok(()));
        assert_eq!(
            validate_trending_score(3, Some("b"), &others),
            Err(ValidationError::TrendingScoreTaken(3))
        );
        assert_eq!(
            validate_trending_score(3, None, &others),
            Err(ValidationError::TrendingScoreTaken(3))
        );
        assert_eq!(
            validate_trending_score(11, None, &[]),
            Err(ValidationError::TrendingScoreOutOfRange(11))
        );
    }

    #[test]
    fn website_url_shapes() {
        assert_eq!(validate_website_url(""), Ok(()));
        assert_eq!(validate_website_url("https://builder.in"), Ok(()));
        assert_eq!(
            validate_website_url("builder.in"),
            Err(ValidationError::InvalidWebsiteUrl)
        );
        assert_eq!(
            validate_website_url("http://localhost"),
            Err(ValidationError::InvalidWebsiteUrl)
        );
    }

    #[test]
    fn rera_number_checked_only_when_approved() {
        let mut highlights = KeyHighlights {
            rera_number: "000".into(),
            ..Default::default()
        };
        assert_eq!(validate_rera(&highlights), Ok(()));
        highlights.rera_approved = true;
        assert_eq!(validate_rera(&highlights), Err(ValidationError::ReraNumberZero));
        highlights.rera_number = "-42".into();
        assert_eq!(
            validate_rera(&highlights),
            Err(ValidationError::ReraNumberNegative)
        );
        highlights.rera_number = "PR/GJ/AHMEDABAD/1234".into();
        assert_eq!(validate_rera(&highlights), Ok(()));
    }

    #[test]
    fn legacy_shapes_skip_structured_checks() {
        let property = Property {
            price_range: Some(PriceRange::Legacy("On request".into())),
            key_highlights: KeyHighlights {
                carpet_area: Some(CarpetArea::Legacy("large".into())),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(validate_property(&property, &[]), Ok(()));

        let inverted = Property {
            key_highlights: KeyHighlights {
                carpet_area: Some(CarpetArea::Structured(AreaSpan {
                    from: "20".into(),
                    to: "10".into(),
                    unit: "sqft".into(),
                })),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            validate_property(&inverted, &[]),
            Err(ValidationError::CarpetAreaInverted)
        );
    }

    #[test]
    fn category_names_unique() {
        let existing = vec![Category {
            id: Some("c1".into()),
            name: "Residential".into(),
            ..Default::default()
        }];
        assert_eq!(
            validate_category(&Category::named("Residential"), &existing),
            Err(ValidationError::DuplicateCategory("Residential".into()))
        );
        assert_eq!(
            validate_category(&Category::named(" "), &existing),
            Err(ValidationError::MissingName)
        );
        assert_eq!(validate_category(&Category::named("Land"), &existing), Ok(()));
    }
}
