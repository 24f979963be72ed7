use std::path::Path;
use std::sync::{Arc, OnceLock};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{
    Article, Category, Group, Inquiry, InquiryStatus, Property, DEFAULT_CATEGORIES,
};

use super::handle::SharedHandle;
use super::http::{build_client, HttpCollection};
use super::memory::MemoryCollection;
use super::traits::{Collection, Record, SourceError};

/// Whole-catalog JSON dump used to seed the in-memory source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub properties: Vec<Property>,
    pub articles: Vec<Article>,
    pub groups: Vec<Group>,
    pub inquiries: Vec<Inquiry>,
    pub categories: Vec<Category>,
}

impl Snapshot {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let snapshot: Snapshot =
            serde_json::from_str(&raw).map_err(|err| SourceError::Decode(err.to_string()))?;
        info!(
            path = %path.display(),
            properties = snapshot.properties.len(),
            articles = snapshot.articles.len(),
            groups = snapshot.groups.len(),
            "Loaded catalog snapshot"
        );
        Ok(snapshot)
    }
}

/// One collection per resource, all backed by the same kind of store
#[derive(Clone)]
pub struct Catalog {
    pub properties: Arc<dyn Collection<Property>>,
    pub articles: Arc<dyn Collection<Article>>,
    pub groups: Arc<dyn Collection<Group>>,
    pub inquiries: Arc<dyn Collection<Inquiry>>,
    pub categories: Arc<dyn Collection<Category>>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("source", &self.properties.source_name())
            .finish()
    }
}

impl Catalog {
    pub fn in_memory(snapshot: Snapshot) -> Self {
        Self {
            properties: Arc::new(MemoryCollection::seeded(snapshot.properties)),
            articles: Arc::new(MemoryCollection::seeded(snapshot.articles)),
            groups: Arc::new(MemoryCollection::seeded(snapshot.groups)),
            inquiries: Arc::new(MemoryCollection::seeded(snapshot.inquiries)),
            categories: Arc::new(MemoryCollection::seeded(snapshot.categories)),
        }
    }

    pub fn over_http(client: Client, base_url: &str) -> Self {
        Self {
            properties: Arc::new(HttpCollection::<Property>::new(client.clone(), base_url)),
            articles: Arc::new(HttpCollection::<Article>::new(client.clone(), base_url)),
            groups: Arc::new(HttpCollection::<Group>::new(client.clone(), base_url)),
            inquiries: Arc::new(HttpCollection::<Inquiry>::new(client.clone(), base_url)),
            categories: Arc::new(HttpCollection::<Category>::new(client, base_url)),
        }
    }

    /// Seed file when configured, otherwise the remote catalog API.
    pub async fn connect(config: &Config) -> Result<Self, SourceError> {
        match &config.seed_file {
            Some(path) => {
                info!(path = %path.display(), "Using in-memory catalog");
                Ok(Self::in_memory(Snapshot::load(path).await?))
            }
            None => {
                info!(url = %config.api_url, "Using remote catalog");
                let client = build_client(config.http_timeout)?;
                Ok(Self::over_http(client, &config.api_url))
            }
        }
    }
}

static CATALOG: OnceLock<SharedHandle<Catalog>> = OnceLock::new();

/// Process-wide catalog handle. It connects on first use and can be torn down and reopened.
pub fn shared_catalog() -> &'static SharedHandle<Catalog> {
    CATALOG.get_or_init(SharedHandle::new)
}

/// Read a whole collection, treating a failed fetch as an empty one.
pub async fn load_or_empty<T: Record>(collection: &dyn Collection<T>) -> Vec<T> {
    match collection.list().await {
        Ok(records) => records,
        Err(err) => {
            warn!(
                resource = T::RESOURCE,
                source = collection.source_name(),
                error = %err,
                "Failed to load records, continuing with none"
            );
            Vec::new()
        }
    }
}

/// List categories, creating any missing default first.
pub async fn ensure_default_categories(
    categories: &dyn Collection<Category>,
) -> Result<Vec<Category>, SourceError> {
    let existing = categories.list().await?;
    let mut created = false;
    for name in DEFAULT_CATEGORIES {
        if existing.iter().any(|category| category.name == name) {
            continue;
        }
        categories.create(Category::named(name)).await?;
        info!(category = name, "Created default category");
        created = true;
    }
    if created {
        categories.list().await
    } else {
        Ok(existing)
    }
}

/// Move an inquiry along the sales pipeline.
pub async fn set_inquiry_status(
    inquiries: &dyn Collection<Inquiry>,
    id: &str,
    status: InquiryStatus,
) -> Result<Inquiry, SourceError> {
    let mut inquiry = inquiries.get(id).await?;
    inquiry.status = status;
    let updated = inquiries.update(id, inquiry).await?;
    info!(id, status = ?updated.status, "Updated inquiry status");
    Ok(updated)
}
