//! Summary numbers for the admin dashboard.

use serde::Serialize;

use crate::format::format_price_range;
use crate::models::Property;

const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentProperty {
    pub id: String,
    pub name: String,
    pub property_type: String,
    pub status: String,
    pub price: String,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_properties: usize,
    pub featured_properties: usize,
    /// "N/A" when no property has a type
    pub most_common_type: String,
    pub recent: Vec<RecentProperty>,
}

pub fn summarize(all: &[Property]) -> DashboardSummary {
    DashboardSummary {
        total_properties: all.len(),
        featured_properties: all.iter().filter(|p| p.featured).count(),
        most_common_type: most_common_type(all).unwrap_or("N/A").to_string(),
        recent: recent_properties(all),
    }
}

// Ties go to the type seen first.
fn most_common_type(all: &[Property]) -> Option<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for property in all.iter().filter(|p| !p.property_type.is_empty()) {
        match counts
            .iter_mut()
            .find(|(name, _)| *name == property.property_type)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((property.property_type.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name)
}

fn recent_properties(all: &[Property]) -> Vec<RecentProperty> {
    let mut newest: Vec<&Property> = all.iter().collect();
    newest.sort_by_key(|p| std::cmp::Reverse(p.created_at));
    newest
        .into_iter()
        .take(RECENT_LIMIT)
        .map(|p| RecentProperty {
            id: p.id.clone().unwrap_or_default(),
            name: p.name.clone(),
            property_type: p.property_type.clone(),
            status: p.status.clone(),
            price: format_price_range(p.price_range.as_ref()),
            featured: p.featured,
        })
        .collect()
}
