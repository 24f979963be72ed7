use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;
use super::GalleryItem;

/// Editorial article shown on the blog pages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub author: String,
    /// Publication date as entered by the editor
    #[serde(deserialize_with = "lenient::text")]
    pub date: String,
    /// e.g. "5 min read"
    #[serde(deserialize_with = "lenient::text")]
    pub read_time: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub content: Vec<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub images: Vec<GalleryItem>,
    #[serde(
        deserialize_with = "lenient::or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub cover_image: Option<GalleryItem>,
    #[serde(deserialize_with = "lenient::flag")]
    pub featured: bool,
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

impl Article {
    /// Parse `date` in the formats the editor has been seen to use.
    pub fn published_on(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(stamp.date_naive());
        }
        ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d/%m/%Y"]
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
    }
}
