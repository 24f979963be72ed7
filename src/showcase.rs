//! Landing-page selections: the hero banner, featured strips and category pages.

use serde::Serialize;

use crate::format::{format_price_range, format_unit_configuration};
use crate::models::{Article, Property};
use crate::search::home_property;

/// Number of featured articles shown on the landing page
pub const FEATURED_ARTICLES_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipIcon {
    Location,
    Price,
    Bedroom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoChip {
    pub icon: ChipIcon,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaButton {
    pub text: String,
    pub variant: ButtonVariant,
    pub href: String,
}

/// Content of the landing-page hero section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBanner {
    pub badge: String,
    pub title: String,
    pub tagline: String,
    pub background_image: String,
    pub info_chips: Vec<InfoChip>,
    pub cta_buttons: Vec<CtaButton>,
    /// Id of the property the banner was built from, if any
    pub property_id: Option<String>,
}

impl Default for HeroBanner {
    fn default() -> Self {
        Self {
            badge: "Featured Project".to_string(),
            title: "Find a home that fits your life".to_string(),
            tagline: "Curated residential and commercial projects across the city".to_string(),
            background_image: "/images/hero-default.jpg".to_string(),
            info_chips: Vec::new(),
            cta_buttons: vec![
                CtaButton {
                    text: "Explore Projects".to_string(),
                    variant: ButtonVariant::Primary,
                    href: "/search".to_string(),
                },
                CtaButton {
                    text: "Request Info".to_string(),
                    variant: ButtonVariant::Secondary,
                    href: "/contact".to_string(),
                },
            ],
            property_id: None,
        }
    }
}

impl HeroBanner {
    /// Banner for a specific property, falling back to the default image when it has none.
    pub fn for_property(property: &Property) -> Self {
        let defaults = Self::default();
        let id = property.id.clone().unwrap_or_default();
        Self {
            badge: defaults.badge,
            title: property.name.clone(),
            tagline: property.tagline.clone(),
            background_image: property
                .cover_image()
                .map(str::to_string)
                .unwrap_or(defaults.background_image),
            info_chips: vec![
                InfoChip {
                    icon: ChipIcon::Location,
                    text: property.location.clone(),
                },
                InfoChip {
                    icon: ChipIcon::Price,
                    text: format_price_range(property.price_range.as_ref()),
                },
                InfoChip {
                    icon: ChipIcon::Bedroom,
                    text: format_unit_configuration(&property.key_highlights.unit_configuration),
                },
            ],
            cta_buttons: vec![
                CtaButton {
                    text: "View Project".to_string(),
                    variant: ButtonVariant::Primary,
                    href: format!("/projects/{id}"),
                },
                CtaButton {
                    text: "Request Info".to_string(),
                    variant: ButtonVariant::Secondary,
                    href: "/contact".to_string(),
                },
            ],
            property_id: property.id.clone(),
        }
    }
}

/// Hero for the landing page: the home property, or the static banner when none is flagged.
pub fn hero_banner(all: &[Property]) -> HeroBanner {
    home_property(all)
        .map(HeroBanner::for_property)
        .unwrap_or_default()
}

pub fn featured_properties(all: &[Property]) -> Vec<&Property> {
    all.iter().filter(|property| property.featured).collect()
}

/// Featured articles, newest first. Articles without a readable date go last.
pub fn featured_articles(all: &[Article], limit: usize) -> Vec<&Article> {
    let mut featured: Vec<&Article> = all.iter().filter(|article| article.featured).collect();
    featured.sort_by_key(|article| std::cmp::Reverse(article.published_on()));
    featured.truncate(limit);
    featured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GalleryItem, KeyHighlights, PriceRange};

    #[test]
    fn hero_uses_home_property() {
        let home = Property {
            id: Some("p7".into()),
            name: "Skyline Residency".into(),
            tagline: "Homes above the river".into(),
            location: "Ahmedabad".into(),
            price_range: Some(PriceRange::Legacy("85 Lac to 1.4 Cr".into())),
            key_highlights: KeyHighlights {
                unit_configuration: "2BHK,3BHK ".into(),
                ..Default::default()
            },
            gallery: vec![GalleryItem {
                url: "https://cdn.example.com/skyline.jpg".into(),
                ..Default::default()
            }],
            home: true,
            ..Default::default()
        };
        let all = vec![Property::default(), home];

        let banner = hero_banner(&all);
        assert_eq!(banner.title, "Skyline Residency");
        assert_eq!(banner.background_image, "https://cdn.example.com/skyline.jpg");
        assert_eq!(banner.info_chips[1].text, "85 Lac to 1.4 Cr");
        assert_eq!(banner.info_chips[2].text, "2BHK, 3BHK");
        assert_eq!(banner.cta_buttons[0].href, "/projects/p7");
        assert_eq!(banner.property_id.as_deref(), Some("p7"));
    }

    #[test]
    fn hero_falls_back_to_static_content() {
        let banner = hero_banner(&[Property::default()]);
        assert_eq!(banner, HeroBanner::default());
    }

    #[test]
    fn featured_articles_newest_first() {
        let article = |title: &str, date: &str, featured: bool| Article {
            title: title.to_string(),
            date: date.to_string(),
            featured,
            ..Default::default()
        };
        let all = vec![
            article("old", "2023-01-10", true),
            article("undated", "soon", true),
            article("hidden", "2025-01-01", false),
            article("new", "2024-08-01", true),
            article("mid", "2023-09-15", true),
        ];

        let titles: Vec<&str> = featured_articles(&all, FEATURED_ARTICLES_LIMIT)
            .iter()
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }
}
