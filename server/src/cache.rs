use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// Holds the most recent value of one upstream collection.
///
/// A value is served from the cache while it is younger than the TTL. A failed
/// fetch leaves the previous value in place.
pub struct RecordCache<T> {
    ttl: Duration,
    slot: RwLock<Option<(Instant, T)>>,
}

impl<T: Clone> RecordCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Return the cached value, or run `fetch` when it is stale, missing, or
    /// `force` is set.
    ///
    /// The write lock is held across `fetch`: concurrent callers on a cold
    /// cache share one upstream request.
    pub async fn get_or_fetch<F, Fut, E>(&self, force: bool, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if !force {
            if let Some(value) = self.fresh(&*self.slot.read().await) {
                return Ok(value);
            }
        }

        let mut slot = self.slot.write().await;
        if !force {
            // Another caller may have refilled the slot while we waited.
            if let Some(value) = self.fresh(&slot) {
                return Ok(value);
            }
        }

        let value = fetch().await?;
        *slot = Some((Instant::now(), value.clone()));

        Ok(value)
    }

    fn fresh(&self, slot: &Option<(Instant, T)>) -> Option<T> {
        let (fetched_at, value) = slot.as_ref()?;
        let age = fetched_at.elapsed();

        if age < self.ttl {
            tracing::debug!(?age, "cache hit");
            Some(value.clone())
        } else {
            None
        }
    }
}
