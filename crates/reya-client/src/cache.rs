use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// A single-slot TTL cache holding one endpoint's latest snapshot.
///
/// Readers share the cached snapshot through an `Arc`; a refresh replaces
/// it wholesale under the write lock (single writer, multiple readers).
/// The caller injects both the clock (`now`) and the fetch closure, which
/// keeps expiry behavior deterministic under test.
pub struct SnapshotCache<T> {
    ttl: Duration,
    slot: Arc<RwLock<Option<CachedSnapshot<T>>>>,
}

struct CachedSnapshot<T> {
    records: Arc<Vec<T>>,
    fetched_at: Instant,
}

impl<T> Clone for SnapshotCache<T> {
    fn clone(&self) -> Self {
        Self {
            ttl: self.ttl,
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> SnapshotCache<T> {
    /// Create an empty cache with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Return the cached snapshot if it is still fresh at `now`, otherwise
    /// run `fetch` and replace the slot with its result.
    ///
    /// A failed fetch propagates the error and leaves any previous
    /// snapshot in place; it will be retried on the next call.
    pub async fn get_or_refresh<F, Fut, E>(
        &self,
        now: Instant,
        fetch: F,
    ) -> Result<Arc<Vec<T>>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        if let Some(records) = self.fresh(now).await {
            return Ok(records);
        }

        let mut slot = self.slot.write().await;
        // Another writer may have refreshed while we waited for the lock.
        if let Some(cached) = slot.as_ref() {
            if now.duration_since(cached.fetched_at) < self.ttl {
                return Ok(Arc::clone(&cached.records));
            }
        }

        let records = Arc::new(fetch().await?);
        *slot = Some(CachedSnapshot {
            records: Arc::clone(&records),
            fetched_at: now,
        });
        Ok(records)
    }

    async fn fresh(&self, now: Instant) -> Option<Arc<Vec<T>>> {
        let slot = self.slot.read().await;
        let cached = slot.as_ref()?;
        if now.duration_since(cached.fetched_at) < self.ttl {
            Some(Arc::clone(&cached.records))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted_fetch(
        calls: &AtomicUsize,
        records: Vec<u32>,
    ) -> impl Future<Output = Result<Vec<u32>, String>> + '_ {
        calls.fetch_add(1, Ordering::SeqCst);
        async move { Ok(records) }
    }

    #[tokio::test]
    async fn test_second_call_within_ttl_serves_cache() {
        let cache = SnapshotCache::new(Duration::from_secs(300));
        let calls = AtomicUsize::new(0);
        let t0 = Instant::now();

        let first = cache
            .get_or_refresh(t0, || counted_fetch(&calls, vec![1, 2, 3]))
            .await
            .unwrap();
        let second = cache
            .get_or_refresh(t0 + Duration::from_secs(299), || {
                counted_fetch(&calls, vec![9])
            })
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*first, vec![1, 2, 3]);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_expiry_triggers_exactly_one_refetch_and_replaces() {
        let cache = SnapshotCache::new(Duration::from_secs(1));
        let calls = AtomicUsize::new(0);
        let t0 = Instant::now();

        let first = cache
            .get_or_refresh(t0, || counted_fetch(&calls, vec![1]))
            .await
            .unwrap();
        let second = cache
            .get_or_refresh(t0 + Duration::from_secs(2), || {
                counted_fetch(&calls, vec![2])
            })
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(*first, vec![1]);
        // Whole-snapshot replacement, not a merge.
        assert_eq!(*second, vec![2]);
    }

    #[tokio::test]
    async fn test_failed_refresh_propagates_and_keeps_previous_snapshot() {
        let cache = SnapshotCache::new(Duration::from_secs(1));
        let calls = AtomicUsize::new(0);
        let t0 = Instant::now();

        cache
            .get_or_refresh(t0, || counted_fetch(&calls, vec![1]))
            .await
            .unwrap();

        let err = cache
            .get_or_refresh(t0 + Duration::from_secs(2), || async {
                Err::<Vec<u32>, String>("boom".to_string())
            })
            .await
            .unwrap_err();
        assert_eq!(err, "boom");

        // The stale snapshot is still there and a later fetch succeeds.
        let after = cache
            .get_or_refresh(t0 + Duration::from_secs(3), || counted_fetch(&calls, vec![3]))
            .await
            .unwrap();
        assert_eq!(*after, vec![3]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_error_on_empty_cache_leaves_it_empty() {
        let cache: SnapshotCache<u32> = SnapshotCache::new(Duration::from_secs(1));
        let t0 = Instant::now();

        let err = cache
            .get_or_refresh(t0, || async { Err::<Vec<u32>, String>("down".into()) })
            .await
            .unwrap_err();
        assert_eq!(err, "down");

        let recovered = cache
            .get_or_refresh(t0, || async { Ok::<_, String>(vec![7]) })
            .await
            .unwrap();
        assert_eq!(*recovered, vec![7]);
    }
}
