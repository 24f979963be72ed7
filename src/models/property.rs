use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient;

/// Currency unit used in Indian property pricing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum PriceUnit {
    #[default]
    Lac,
    Cr,
}

impl PriceUnit {
    /// Multiplier that converts one of this unit into lakhs
    pub fn lakhs(self) -> f64 {
        match self {
            PriceUnit::Lac => 1.0,
            PriceUnit::Cr => 100.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriceUnit::Lac => "Lac",
            PriceUnit::Cr => "Cr",
        }
    }
}

impl std::fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Anything that is not "Cr" is stored as lakhs, which is also the store's schema default.
impl<'de> Deserialize<'de> for PriceUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(match raw.as_str().map(str::trim) {
            Some(unit) if unit.eq_ignore_ascii_case("cr") => PriceUnit::Cr,
            _ => PriceUnit::Lac,
        })
    }
}

/// One side of a structured price range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceBound {
    #[serde(default, deserialize_with = "lenient::text")]
    pub value: String,
    #[serde(default)]
    pub unit: PriceUnit,
}

impl PriceBound {
    pub fn new(value: impl Into<String>, unit: PriceUnit) -> Self {
        Self {
            value: value.into(),
            unit,
        }
    }
}

/// Structured `{from, to}` price range as written by the current entry form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredPrice {
    #[serde(
        default,
        deserialize_with = "lenient::or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<PriceBound>,
    #[serde(
        default,
        deserialize_with = "lenient::or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub to: Option<PriceBound>,
}

/// Price range in either of the two shapes found in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceRange {
    /// Free display text from records written before the structured form existed
    Legacy(String),
    Structured(StructuredPrice),
}

impl PriceRange {
    pub fn between(from: PriceBound, to: PriceBound) -> Self {
        PriceRange::Structured(StructuredPrice {
            from: Some(from),
            to: Some(to),
        })
    }
}

/// Floor-area units accepted by the entry form
pub const AREA_UNITS: [&str; 5] = ["sqft", "sqmt", "sqyd", "acre", "hectare"];

/// Structured carpet area span
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaSpan {
    #[serde(default, deserialize_with = "lenient::text")]
    pub from: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub to: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub unit: String,
}

/// Carpet area in either its legacy text or structured shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CarpetArea {
    Legacy(String),
    Structured(AreaSpan),
}

/// Image reference, either hosted (`url`) or inlined as base64 (`data`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryItem {
    #[serde(deserialize_with = "lenient::text")]
    pub url: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub data: String,
}

impl GalleryItem {
    /// Inline data wins over the hosted url
    pub fn source(&self) -> Option<&str> {
        [self.data.as_str(), self.url.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoItem {
    #[serde(deserialize_with = "lenient::text")]
    pub url: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
}

/// Developer information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Builder {
    #[serde(deserialize_with = "lenient::text")]
    pub developer_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub website_url: String,
}

/// Headline facts shown on the project page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyHighlights {
    #[serde(deserialize_with = "lenient::flag")]
    pub rera_approved: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub rera_number: String,
    /// YYYY-MM-DD
    #[serde(deserialize_with = "lenient::text")]
    pub possession_date: String,
    /// Comma separated tags such as "1BHK, 2BHK"
    #[serde(deserialize_with = "lenient::text")]
    pub unit_configuration: String,
    #[serde(
        deserialize_with = "lenient::or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub carpet_area: Option<CarpetArea>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub other_amenities: Vec<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub igbc_gold_certified: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub igbc_level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationAdvantage {
    #[serde(deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(deserialize_with = "lenient::text")]
    pub address_url: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub advantages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedDevelopment {
    #[serde(deserialize_with = "lenient::text")]
    pub text: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub images: Vec<GalleryItem>,
}

/// Core property listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub tagline: String,
    #[serde(deserialize_with = "lenient::text")]
    pub property_type: String,
    /// Area or locality, free text
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(
        deserialize_with = "lenient::or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_range: Option<PriceRange>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub builder: Builder,
    #[serde(deserialize_with = "lenient::or_default")]
    pub key_highlights: KeyHighlights,
    #[serde(deserialize_with = "lenient::or_default")]
    pub gallery: Vec<GalleryItem>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub videos: Vec<VideoItem>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub location_advantage: LocationAdvantage,
    #[serde(deserialize_with = "lenient::or_default")]
    pub featured_development: FeaturedDevelopment,
    #[serde(deserialize_with = "lenient::or_default")]
    pub other_projects: Vec<String>,
    /// 1 is the most trending; unique across the catalog when present
    #[serde(deserialize_with = "lenient::rank", skip_serializing_if = "Option::is_none")]
    pub trending_score: Option<i64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub featured: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub home: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(
        deserialize_with = "lenient::or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        deserialize_with = "lenient::or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Property {
    /// First usable gallery image
    pub fn cover_image(&self) -> Option<&str> {
        self.gallery.first().and_then(GalleryItem::source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_both_price_shapes() {
        let legacy: Property =
            serde_json::from_value(json!({ "name": "Skyline", "priceRange": "50 Lac to 1.2 Cr" }))
                .unwrap();
        assert_eq!(
            legacy.price_range,
            Some(PriceRange::Legacy("50 Lac to 1.2 Cr".to_string()))
        );

        let structured: Property = serde_json::from_value(json!({
            "name": "Skyline",
            "priceRange": {
                "from": { "value": "50", "unit": "Lac" },
                "to": { "value": "1.2", "unit": "Cr" }
            }
        }))
        .unwrap();
        assert_eq!(
            structured.price_range,
            Some(PriceRange::between(
                PriceBound::new("50", PriceUnit::Lac),
                PriceBound::new("1.2", PriceUnit::Cr),
            ))
        );
    }

    #[test]
    fn unknown_price_unit_falls_back_to_lakhs() {
        let bound: PriceBound =
            serde_json::from_value(json!({ "value": "10", "unit": "Million" })).unwrap();
        assert_eq!(bound.unit, PriceUnit::Lac);
    }

    #[test]
    fn tolerates_sparse_documents() {
        let property: Property = serde_json::from_value(json!({
            "_id": "66a1",
            "name": "Orchid Heights",
            "tagline": null,
            "priceRange": 42,
            "trendingScore": null,
            "gallery": "not-a-list"
        }))
        .unwrap();

        assert_eq!(property.id.as_deref(), Some("66a1"));
        assert_eq!(property.tagline, "");
        assert_eq!(property.price_range, None);
        assert_eq!(property.trending_score, None);
        assert!(property.gallery.is_empty());
        assert!(!property.home);
    }

    #[test]
    fn cover_image_prefers_inline_data() {
        let property = Property {
            gallery: vec![GalleryItem {
                url: "https://cdn.example.com/a.jpg".to_string(),
                name: "front".to_string(),
                data: "data:image/png;base64,AAAA".to_string(),
            }],
            ..Default::default()
        };
        assert_eq!(property.cover_image(), Some("data:image/png;base64,AAAA"));
        assert_eq!(Property::default().cover_image(), None);
    }

    #[test]
    fn omits_cleared_trending_score_when_serialized() {
        let value = serde_json::to_value(Property::default()).unwrap();
        assert!(value.get("trendingScore").is_none());
        assert!(value.get("_id").is_none());
    }
}
