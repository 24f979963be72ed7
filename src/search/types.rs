use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Status values that double as one-click selection tags on the search page
pub const STATUS_TAGS: [&str; 5] = [
    "Ready",
    "New Launch",
    "RERA Approved",
    "Under Construction",
    "Upcoming",
];

/// Results per page on the property search page
pub const SEARCH_PAGE_SIZE: usize = 6;
/// Articles per page on the blog index
pub const ARTICLES_PAGE_SIZE: usize = 8;
/// Properties per page inside a group
pub const GROUP_PAGE_SIZE: usize = 9;
/// Length of the trending strip on the landing page
pub const TRENDING_LIMIT: usize = 10;

/// Facets selected on the search page. Empty fields are inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    /// Case-insensitive substring of the location
    pub location_text: String,
    /// Exact property type, e.g. "Residential"
    pub property_type: String,
    /// Price dropdown token, see [`crate::format::price_token`]
    pub price_range_token: String,
    /// Exact status
    pub status: String,
    pub selected_tags: BTreeSet<String>,
}

impl FilterState {
    pub fn with_location(mut self, text: impl Into<String>) -> Self {
        self.location_text = text.into();
        self
    }

    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = property_type.into();
        self
    }

    pub fn with_price_token(mut self, token: impl Into<String>) -> Self {
        self.price_range_token = token.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.selected_tags.insert(tag.into());
        self
    }

    /// Select the tag if it is not selected, otherwise clear it.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
    }

    /// Tags that act as status predicates; anything outside the vocabulary is ignored.
    pub fn status_tags(&self) -> impl Iterator<Item = &str> {
        self.selected_tags
            .iter()
            .map(String::as_str)
            .filter(|tag| STATUS_TAGS.contains(tag))
    }

    pub fn is_empty(&self) -> bool {
        self.location_text.is_empty()
            && self.property_type.is_empty()
            && self.price_range_token.is_empty()
            && self.status.is_empty()
            && self.status_tags().next().is_none()
    }
}
