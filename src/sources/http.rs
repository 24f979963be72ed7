use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use super::traits::{Collection, Record, SourceError, WriteRoute};

/// `{ success, message?, <payload key>: ... }` wrapper returned by every catalog endpoint
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

/// Build the HTTP client shared by every remote collection
pub fn build_client(timeout: Duration) -> Result<Client, SourceError> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("estate-showcase/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Collection served by the catalog's JSON API under `{base_url}/api/{resource}`.
#[derive(Debug, Clone)]
pub struct HttpCollection<T> {
    client: Client,
    base_url: String,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> HttpCollection<T> {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            _record: PhantomData,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/{}", self.base_url.trim_end_matches('/'), T::RESOURCE)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.endpoint(), id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Map<String, Value>, SourceError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        let envelope: Envelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                warn!(resource = T::RESOURCE, %status, "Catalog returned an error page");
                return Err(SourceError::Status {
                    status: status.as_u16(),
                    message: body,
                });
            }
            Err(err) => return Err(SourceError::Decode(err.to_string())),
        };

        if !envelope.success {
            let message = envelope.message.unwrap_or_else(|| status.to_string());
            warn!(resource = T::RESOURCE, %status, %message, "Catalog refused request");
            return Err(if status.is_success() {
                SourceError::Rejected(message)
            } else {
                SourceError::Status {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        Ok(envelope.payload)
    }

    fn take_item(payload: &mut Map<String, Value>, id: &str) -> Result<T, SourceError> {
        match payload.remove(T::ITEM_KEY) {
            None | Some(Value::Null) => Err(SourceError::NotFound {
                resource: T::RESOURCE,
                id: id.to_string(),
            }),
            Some(value) => {
                serde_json::from_value(value).map_err(|err| SourceError::Decode(err.to_string()))
            }
        }
    }
}

#[async_trait]
impl<T: Record> Collection<T> for HttpCollection<T> {
    async fn list(&self) -> Result<Vec<T>, SourceError> {
        let url = self.endpoint();
        debug!("Fetching URL: {}", url);

        let mut payload = self.send(self.client.get(&url)).await?;
        let items = match payload.remove(T::LIST_KEY) {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(SourceError::Decode(format!(
                    "response has no '{}' list",
                    T::LIST_KEY
                )))
            }
        };

        let total = items.len();
        let records: Vec<T> = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(resource = T::RESOURCE, error = %err, "Skipping unreadable record");
                    None
                }
            })
            .collect();

        debug!(resource = T::RESOURCE, total, kept = records.len(), "Listed records");
        Ok(records)
    }

    async fn create(&self, record: T) -> Result<T, SourceError> {
        let mut payload = self
            .send(self.client.post(self.endpoint()).json(&record))
            .await?;
        Self::take_item(&mut payload, "new")
    }

    async fn update(&self, id: &str, record: T) -> Result<T, SourceError> {
        if id.is_empty() {
            return Err(SourceError::MissingId {
                resource: T::RESOURCE,
            });
        }
        let mut body = record
            .update_body()
            .map_err(|err| SourceError::Decode(err.to_string()))?;
        let url = match T::UPDATE_ROUTE {
            WriteRoute::BodyId { key } => {
                body.insert(key.to_string(), json!(id));
                self.endpoint()
            }
            WriteRoute::PathId => self.record_url(id),
            WriteRoute::Unsupported => {
                return Err(SourceError::Unsupported {
                    resource: T::RESOURCE,
                    operation: "updated",
                })
            }
        };

        let request = self.client.request(T::UPDATE_METHOD, url).json(&body);
        let mut payload = self.send(request).await?;
        Self::take_item(&mut payload, id)
    }

    async fn delete(&self, id: &str) -> Result<(), SourceError> {
        if id.is_empty() {
            return Err(SourceError::MissingId {
                resource: T::RESOURCE,
            });
        }
        let request = match T::DELETE_ROUTE {
            WriteRoute::BodyId { key } => {
                let mut body = Map::new();
                body.insert(key.to_string(), json!(id));
                self.client.delete(self.endpoint()).json(&body)
            }
            WriteRoute::PathId => self.client.delete(self.record_url(id)),
            WriteRoute::Unsupported => {
                return Err(SourceError::Unsupported {
                    resource: T::RESOURCE,
                    operation: "deleted",
                })
            }
        };
        self.send(request).await?;
        Ok(())
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
