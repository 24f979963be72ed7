use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::validation::ValidationError;

/// Failures reported by a catalog data source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("missing {resource} id")]
    MissingId { resource: &'static str },
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("catalog refused the request: {0}")]
    Rejected(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("{resource} cannot be {operation} through this source")]
    Unsupported {
        resource: &'static str,
        operation: &'static str,
    },
}

/// How the catalog API addresses an existing record for a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteRoute {
    /// Collection path, with the id carried in the JSON body under `key`
    BodyId { key: &'static str },
    /// `{collection}/{id}`
    PathId,
    /// No such write exists for the resource
    Unsupported,
}

/// A document stored in one of the catalog collections
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Path segment under `/api/`
    const RESOURCE: &'static str;
    /// Envelope key holding a list response
    const LIST_KEY: &'static str;
    /// Envelope key holding a single record
    const ITEM_KEY: &'static str;

    /// Route used by `update`
    const UPDATE_ROUTE: WriteRoute = WriteRoute::BodyId { key: "_id" };
    /// Route used by `delete`
    const DELETE_ROUTE: WriteRoute = WriteRoute::BodyId { key: "_id" };
    /// Update verb; the collection API uses PUT unless a resource says otherwise
    const UPDATE_METHOD: reqwest::Method = reqwest::Method::PUT;

    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: String);

    fn created_at(&self) -> Option<DateTime<Utc>>;

    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>);

    /// Checks run against the stored records before a write is accepted.
    fn check_write(&self, _stored: &[Self]) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Fields sent to the API on update, before the id is added.
    fn update_body(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(fields) => Ok(fields),
            _ => Ok(Map::new()),
        }
    }

    /// Adjustments to the other stored records that must land together with this write.
    fn reconcile(&self, _stored: &mut [Self]) {}
}

/// Common interface for every catalog collection.
///
/// The search pipeline only ever calls [`Collection::list`] and works on the full result.
#[async_trait]
pub trait Collection<T: Record>: Send + Sync {
    /// Every record, newest first
    async fn list(&self) -> Result<Vec<T>, SourceError>;

    async fn get(&self, id: &str) -> Result<T, SourceError> {
        self.list()
            .await?
            .into_iter()
            .find(|record| record.id() == Some(id))
            .ok_or_else(|| SourceError::NotFound {
                resource: T::RESOURCE,
                id: id.to_string(),
            })
    }

    async fn create(&self, record: T) -> Result<T, SourceError>;

    async fn update(&self, id: &str, record: T) -> Result<T, SourceError>;

    async fn delete(&self, id: &str) -> Result<(), SourceError>;

    /// Name of the backing store, for logs
    fn source_name(&self) -> &'static str;
}
