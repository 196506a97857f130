// One shot lazy initialization for process wide resources.
//
// Purpose
// - Hold a single lazily established resource (typically a connection) for
//   the lifetime of the process.
//
// Responsibilities
// - Allow at most one setup attempt in flight at a time.
// - Hand every later caller the same established resource.
// - Leave the slot empty after a failed attempt so the next call retries.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct Lazy<T> {
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> Lazy<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Returns the resource, establishing it through `setup` on first use.
    ///
    /// The slot lock is held across `setup`, so concurrent callers queue
    /// behind the in-flight attempt instead of opening duplicates. A failed
    /// attempt leaves the slot empty; the next caller runs `setup` again.
    pub async fn get_or_try_init<F, Fut, E>(&self, setup: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut guard = self.slot.lock().await;
        if let Some(existing) = guard.as_ref() {
            return Ok(existing.clone());
        }
        let resource = Arc::new(setup().await?);
        *guard = Some(resource.clone());
        Ok(resource)
    }
}

impl<T> Default for Lazy<T> {
    fn default() -> Self {
        Self::new()
    }
}
