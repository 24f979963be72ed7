use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::traits::{Collection, Record, SourceError, WriteRoute};

/// Collection held in process memory.
///
/// Every write runs under one lock, so validation, the write itself and any reconciliation of
/// other records (such as clearing a second `home` flag) happen atomically.
#[derive(Debug)]
pub struct MemoryCollection<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Start from existing records, taken as already stored.
    pub fn seeded(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl<T: Record> Collection<T> for MemoryCollection<T> {
    async fn list(&self) -> Result<Vec<T>, SourceError> {
        let mut records = self.records.read().await.clone();
        records.sort_by_key(|record| Reverse(record.created_at()));
        Ok(records)
    }

    async fn create(&self, mut record: T) -> Result<T, SourceError> {
        let mut records = self.records.write().await;
        record.set_id(Uuid::new_v4().to_string());
        record.check_write(&records)?;

        let now = Utc::now();
        record.set_timestamps(now, now);
        record.reconcile(&mut records);
        records.push(record.clone());

        debug!(resource = T::RESOURCE, id = ?record.id(), "Created record");
        Ok(record)
    }

    async fn update(&self, id: &str, mut record: T) -> Result<T, SourceError> {
        if id.is_empty() {
            return Err(SourceError::MissingId {
                resource: T::RESOURCE,
            });
        }

        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|stored| stored.id() == Some(id))
            .ok_or_else(|| SourceError::NotFound {
                resource: T::RESOURCE,
                id: id.to_string(),
            })?;

        record.set_id(id.to_string());
        record.check_write(&records)?;

        let now = Utc::now();
        let created_at = records[index].created_at().unwrap_or(now);
        record.set_timestamps(created_at, now);
        record.reconcile(&mut records);
        records[index] = record.clone();

        debug!(resource = T::RESOURCE, id, "Updated record");
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<(), SourceError> {
        if T::DELETE_ROUTE == WriteRoute::Unsupported {
            return Err(SourceError::Unsupported {
                resource: T::RESOURCE,
                operation: "deleted",
            });
        }
        if id.is_empty() {
            return Err(SourceError::MissingId {
                resource: T::RESOURCE,
            });
        }

        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|stored| stored.id() == Some(id))
            .ok_or_else(|| SourceError::NotFound {
                resource: T::RESOURCE,
                id: id.to_string(),
            })?;
        records.remove(index);

        debug!(resource = T::RESOURCE, id, "Deleted record");
        Ok(())
    }

    fn source_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Property};
    use crate::validation::ValidationError;

    fn named(name: &str) -> Property {
        Property {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamps() {
        let collection = MemoryCollection::new();
        let created = collection.create(named("Skyline")).await.unwrap();

        assert!(created.id.is_some());
        assert!(created.created_at.is_some());
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(collection.len().await, 1);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let collection = MemoryCollection::new();
        collection.create(named("first")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        collection.create(named("second")).await.unwrap();

        let names: Vec<String> = collection
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn setting_home_clears_the_previous_home() {
        let collection = MemoryCollection::new();
        let mut first = named("first");
        first.home = true;
        let first = collection.create(first).await.unwrap();
        let second = collection.create(named("second")).await.unwrap();

        let mut promoted = second.clone();
        promoted.home = true;
        let second_id = second.id.clone().unwrap();
        collection.update(&second_id, promoted).await.unwrap();

        let homes: Vec<Option<String>> = collection
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter(|p| p.home)
            .map(|p| p.id)
            .collect();
        assert_eq!(homes, vec![Some(second_id)]);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn concurrent_home_updates_leave_one_home() {
        let collection = std::sync::Arc::new(MemoryCollection::new());
        let mut ids = Vec::new();
        for name in ["a", "b", "c", "d"] {
            ids.push(collection.create(named(name)).await.unwrap().id.unwrap());
        }

        let tasks: Vec<_> = ids
            .iter()
            .cloned()
            .map(|id| {
                let collection = collection.clone();
                tokio::spawn(async move {
                    let mut record = collection.get(&id).await.unwrap();
                    record.home = true;
                    collection.update(&id, record).await.unwrap();
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let homes = collection
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter(|p| p.home)
            .count();
        assert_eq!(homes, 1);
    }

    #[tokio::test]
    async fn update_keeps_created_at_and_clears_trending() {
        let collection = MemoryCollection::new();
        let mut ranked = named("ranked");
        ranked.trending_score = Some(2);
        let stored = collection.create(ranked).await.unwrap();
        let id = stored.id.clone().unwrap();

        let mut edited = stored.clone();
        edited.trending_score = None;
        let updated = collection.update(&id, edited).await.unwrap();

        assert_eq!(updated.created_at, stored.created_at);
        assert_eq!(collection.get(&id).await.unwrap().trending_score, None);
    }

    #[tokio::test]
    async fn duplicate_trending_score_is_rejected() {
        let collection = MemoryCollection::new();
        let mut first = named("first");
        first.trending_score = Some(1);
        collection.create(first).await.unwrap();

        let mut second = named("second");
        second.trending_score = Some(1);
        let err = collection.create(second).await.unwrap_err();
        assert!(matches!(
            err,
            SourceError::Validation(ValidationError::TrendingScoreTaken(1))
        ));
        assert_eq!(collection.len().await, 1);
    }

    #[tokio::test]
    async fn missing_records_are_reported() {
        let collection: MemoryCollection<Category> = MemoryCollection::new();
        assert!(matches!(
            collection.delete("nope").await,
            Err(SourceError::NotFound { .. })
        ));
        assert!(matches!(
            collection.update("", Category::named("x")).await,
            Err(SourceError::MissingId { .. })
        ));
        assert!(matches!(
            collection.get("nope").await,
            Err(SourceError::NotFound { .. })
        ));
    }
}
