use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;
use super::Property;

/// A group entry is either a populated property or a bare reference to one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupMember {
    Reference(String),
    Populated(Box<Property>),
}

impl GroupMember {
    pub fn property_id(&self) -> Option<&str> {
        match self {
            GroupMember::Reference(id) => Some(id),
            GroupMember::Populated(property) => property.id.as_deref(),
        }
    }

    pub fn property(&self) -> Option<&Property> {
        match self {
            GroupMember::Reference(_) => None,
            GroupMember::Populated(property) => Some(property),
        }
    }
}

/// Curated collection of properties, e.g. a location collection on the landing page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Group {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub properties: Vec<GroupMember>,
    #[serde(deserialize_with = "lenient::text")]
    pub photo: String,
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

impl Group {
    /// Populated members only; bare references are skipped
    pub fn members(&self) -> Vec<&Property> {
        self.properties
            .iter()
            .filter_map(GroupMember::property)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_populated_and_referenced_members() {
        let group: Group = serde_json::from_value(json!({
            "_id": "g1",
            "name": "Near SG Highway",
            "properties": ["p9", { "_id": "p1", "name": "Skyline" }]
        }))
        .unwrap();

        assert_eq!(group.properties.len(), 2);
        assert_eq!(group.properties[0].property_id(), Some("p9"));
        assert_eq!(group.properties[1].property_id(), Some("p1"));
        assert_eq!(group.members().len(), 1);
        assert_eq!(group.members()[0].name, "Skyline");
    }
}
