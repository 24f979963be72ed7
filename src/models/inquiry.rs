use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// Sales pipeline stage of an inquiry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Closed,
}

/// Channel the inquiry arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InquirySource {
    Website,
    Phone,
    Email,
    WalkIn,
}

/// Contact request submitted from a project page or the contact form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Inquiry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::text")]
    pub property_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub property_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub property_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub message: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub status: InquiryStatus,
    #[serde(
        deserialize_with = "lenient::or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<InquirySource>,
    #[serde(deserialize_with = "lenient::flag")]
    pub agree: bool,
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
