use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::models::{Article, Category, Group, GroupMember, Inquiry, Property};
use crate::validation::{validate_category, validate_property, ValidationError};

use super::traits::{Record, WriteRoute};

macro_rules! stored_fields {
    () => {
        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn set_id(&mut self, id: String) {
            self.id = Some(id);
        }

        fn created_at(&self) -> Option<DateTime<Utc>> {
            self.created_at
        }

        fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
            self.created_at = Some(created_at);
            self.updated_at = Some(updated_at);
        }
    };
}

impl Record for Property {
    const RESOURCE: &'static str = "properties";
    const LIST_KEY: &'static str = "properties";
    const ITEM_KEY: &'static str = "property";

    stored_fields!();

    fn check_write(&self, stored: &[Self]) -> Result<(), ValidationError> {
        validate_property(self, stored)
    }

    // Only one property may drive the hero banner.
    fn reconcile(&self, stored: &mut [Self]) {
        if !self.home {
            return;
        }
        for other in stored.iter_mut().filter(|other| other.id != self.id) {
            other.home = false;
        }
    }
}

impl Record for Article {
    const RESOURCE: &'static str = "articles";
    const LIST_KEY: &'static str = "articles";
    const ITEM_KEY: &'static str = "article";

    stored_fields!();
}

impl Record for Group {
    const RESOURCE: &'static str = "groups";
    const LIST_KEY: &'static str = "groups";
    const ITEM_KEY: &'static str = "group";
    const UPDATE_ROUTE: WriteRoute = WriteRoute::PathId;
    const DELETE_ROUTE: WriteRoute = WriteRoute::PathId;

    stored_fields!();

    // Members are written back as ids, never as populated documents.
    fn update_body(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let members: Vec<&str> = self
            .properties
            .iter()
            .filter_map(GroupMember::property_id)
            .collect();
        let mut body = Map::new();
        body.insert("name".into(), json!(self.name));
        body.insert("properties".into(), json!(members));
        body.insert("photo".into(), json!(self.photo));
        Ok(body)
    }
}

impl Record for Inquiry {
    const RESOURCE: &'static str = "inquiries";
    const LIST_KEY: &'static str = "inquiries";
    const ITEM_KEY: &'static str = "inquiry";
    const UPDATE_ROUTE: WriteRoute = WriteRoute::BodyId { key: "id" };
    const DELETE_ROUTE: WriteRoute = WriteRoute::Unsupported;
    const UPDATE_METHOD: Method = Method::PATCH;

    stored_fields!();

    // The admin list only moves an inquiry through its status pipeline.
    fn update_body(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut body = Map::new();
        body.insert("status".into(), serde_json::to_value(self.status)?);
        Ok(body)
    }
}

impl Record for Category {
    const RESOURCE: &'static str = "property-categories";
    const LIST_KEY: &'static str = "categories";
    const ITEM_KEY: &'static str = "category";
    const UPDATE_ROUTE: WriteRoute = WriteRoute::BodyId { key: "id" };
    const DELETE_ROUTE: WriteRoute = WriteRoute::BodyId { key: "id" };

    stored_fields!();

    fn check_write(&self, stored: &[Self]) -> Result<(), ValidationError> {
        validate_category(self, stored)
    }
}
