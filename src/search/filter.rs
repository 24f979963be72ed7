use std::collections::HashSet;

use serde::Serialize;

use crate::format::{format_price_range, price_token};
use crate::models::{Inquiry, InquirySource, InquiryStatus, Property};

use super::matcher::TextSearchable;
use super::types::FilterState;

impl FilterState {
    /// True when `property` satisfies every active facet.
    pub fn matches(&self, property: &Property) -> bool {
        if !self.location_text.is_empty()
            && !property
                .location
                .to_lowercase()
                .contains(&self.location_text.to_lowercase())
        {
            return false;
        }
        if !self.property_type.is_empty() && property.property_type != self.property_type {
            return false;
        }
        if !self.price_range_token.is_empty()
            && price_token(property.price_range.as_ref()) != self.price_range_token
        {
            return false;
        }
        if !self.status.is_empty() && property.status != self.status {
            return false;
        }
        // Each status tag is its own predicate, so two different tags select nothing.
        self.status_tags().all(|tag| property.status == tag)
    }
}

/// Apply the facet state, keeping the input order of the survivors.
pub fn filter_properties<'a, I>(all: I, state: &FilterState) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    all.into_iter()
        .filter(|property| state.matches(property))
        .collect()
}

/// Properties of one category, compared trimmed and case-insensitively.
pub fn by_category<'a, I>(all: I, category: &str) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    let wanted = category.trim().to_lowercase();
    all.into_iter()
        .filter(|property| property.property_type.trim().to_lowercase() == wanted)
        .collect()
}

/// One entry of the price dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceOption {
    /// Value matched against [`FilterState::price_range_token`]
    pub token: String,
    pub label: String,
}

/// Distinct price ranges in first-seen order, deduplicated by their display label.
pub fn price_range_options<'a, I>(all: I) -> Vec<PriceOption>
where
    I: IntoIterator<Item = &'a Property>,
{
    let mut seen = HashSet::new();
    all.into_iter()
        .filter_map(|property| {
            let label = format_price_range(property.price_range.as_ref());
            if label.is_empty() || !seen.insert(label.clone()) {
                return None;
            }
            Some(PriceOption {
                token: price_token(property.price_range.as_ref()),
                label,
            })
        })
        .collect()
}

/// Admin inquiry list facets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryFilter {
    pub query: String,
    pub status: Option<InquiryStatus>,
    pub source: Option<InquirySource>,
}

impl InquiryFilter {
    pub fn matches(&self, inquiry: &Inquiry) -> bool {
        let matches_text = self.query.is_empty() || inquiry.matches_query(&self.query);
        matches_text
            && self.status.map_or(true, |status| inquiry.status == status)
            && self.source.map_or(true, |source| inquiry.source == Some(source))
    }
}

pub fn filter_inquiries<'a>(all: &'a [Inquiry], filter: &InquiryFilter) -> Vec<&'a Inquiry> {
    all.iter().filter(|inquiry| filter.matches(inquiry)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceBound, PriceRange, PriceUnit};

    fn listing(location: &str, property_type: &str, status: &str) -> Property {
        Property {
            name: format!("{location} {status}"),
            location: location.to_string(),
            property_type: property_type.to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_state_keeps_everything_in_order() {
        let all = vec![
            listing("Surat", "Residential", "Ready"),
            listing("Ahmedabad", "Commercial", "Upcoming"),
        ];
        let kept = filter_properties(&all, &FilterState::default());
        assert_eq!(kept, vec![&all[0], &all[1]]);
    }

    #[test]
    fn location_is_case_insensitive_but_type_is_exact() {
        let all = vec![
            listing("Ahmedabad West", "Residential", "Ready"),
            listing("Surat", "residential", "Ready"),
        ];
        let by_location = filter_properties(&all, &FilterState::default().with_location("WEST"));
        assert_eq!(by_location, vec![&all[0]]);

        let by_type =
            filter_properties(&all, &FilterState::default().with_property_type("Residential"));
        assert_eq!(by_type, vec![&all[0]]);
    }

    #[test]
    fn conflicting_status_tags_select_nothing() {
        let all = vec![
            listing("Surat", "Residential", "Ready"),
            listing("Surat", "Residential", "Upcoming"),
        ];
        let one_tag = FilterState::default().with_tag("Ready");
        assert_eq!(filter_properties(&all, &one_tag), vec![&all[0]]);

        let two_tags = one_tag.with_tag("Upcoming");
        assert!(filter_properties(&all, &two_tags).is_empty());
    }

    #[test]
    fn price_token_matches_by_identity() {
        let mut structured = listing("Surat", "Residential", "Ready");
        structured.price_range = Some(PriceRange::between(
            PriceBound::new("50", PriceUnit::Lac),
            PriceBound::new("1.2", PriceUnit::Cr),
        ));
        let mut legacy = listing("Surat", "Residential", "Ready");
        legacy.price_range = Some(PriceRange::Legacy("50 Lac to 1.2 Cr".into()));
        let all = vec![structured, legacy];

        let token = price_token(all[0].price_range.as_ref());
        let kept = filter_properties(&all, &FilterState::default().with_price_token(token));
        assert_eq!(kept, vec![&all[0]]);

        let kept = filter_properties(
            &all,
            &FilterState::default().with_price_token("50 Lac to 1.2 Cr"),
        );
        assert_eq!(kept, vec![&all[1]]);
    }

    #[test]
    fn price_options_collapse_identical_labels() {
        let mut first = listing("Surat", "Residential", "Ready");
        first.price_range = Some(PriceRange::Legacy("50 Lac to 1.2 Cr".into()));
        let mut second = listing("Surat", "Residential", "Ready");
        second.price_range = Some(PriceRange::between(
            PriceBound::new("50", PriceUnit::Lac),
            PriceBound::new("1.2", PriceUnit::Cr),
        ));
        let mut third = listing("Surat", "Residential", "Ready");
        third.price_range = Some(PriceRange::Legacy("2 Cr".into()));
        let unpriced = listing("Surat", "Residential", "Ready");

        let options = price_range_options(&[first, second, third, unpriced]);
        assert_eq!(
            options,
            vec![
                PriceOption {
                    token: "50 Lac to 1.2 Cr".into(),
                    label: "50 Lac to 1.2 Cr".into(),
                },
                PriceOption {
                    token: "2 Cr".into(),
                    label: "2 Cr".into(),
                },
            ]
        );
    }

    #[test]
    fn category_match_ignores_case_and_padding() {
        let all = vec![
            listing("Surat", " Commercial ", "Ready"),
            listing("Surat", "Residential", "Ready"),
        ];
        assert_eq!(by_category(&all, "commercial"), vec![&all[0]]);
    }

    #[test]
    fn inquiry_facets_combine() {
        let inquiries = vec![
            Inquiry {
                full_name: "Asha Patel".into(),
                status: InquiryStatus::Contacted,
                source: Some(InquirySource::Website),
                ..Default::default()
            },
            Inquiry {
                full_name: "Ravi Shah".into(),
                ..Default::default()
            },
        ];
        let filter = InquiryFilter {
            query: "asha".into(),
            status: Some(InquiryStatus::Contacted),
            source: Some(InquirySource::Website),
        };
        assert_eq!(filter_inquiries(&inquiries, &filter), vec![&inquiries[0]]);

        let everyone = InquiryFilter::default();
        assert_eq!(filter_inquiries(&inquiries, &everyone).len(), 2);
    }
}
