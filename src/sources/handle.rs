use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

/// Lazily connected, shared resource with explicit teardown.
///
/// The first caller of [`SharedHandle::get_or_try_init`] runs the initializer; later callers
/// get a clone of the same `Arc`. A failed initialization leaves the handle empty so the next
/// call retries.
#[derive(Debug)]
pub struct SharedHandle<T> {
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> Default for SharedHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SharedHandle<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    pub async fn get_or_try_init<F, Fut, E>(&self, init: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(existing) = slot.as_ref() {
            return Ok(Arc::clone(existing));
        }
        let created = Arc::new(init().await?);
        *slot = Some(Arc::clone(&created));
        Ok(created)
    }

    pub async fn is_connected(&self) -> bool {
        self.slot.lock().await.is_some()
    }

    /// Drop the shared reference. Outstanding clones stay valid until their holders release
    /// them; the next `get_or_try_init` connects afresh.
    pub async fn teardown(&self) -> Option<Arc<T>> {
        self.slot.lock().await.take()
    }
}
