//! TTL cache for the message corpus.
//!
//! A single slot: the upstream serves one logical corpus, so there is
//! nothing to key by. The clock is injected so tests can expire entries
//! without sleeping.

use mqa_common::message::Message;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Time source for TTL checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time, used in production.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct Slot {
    fetched_at: Instant,
    corpus: Arc<Vec<Message>>,
}

/// Single-slot corpus cache with a time-to-live.
pub struct MessageCache {
    slot: Mutex<Option<Slot>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl MessageCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: Mutex::new(None),
            ttl,
            clock,
        }
    }

    /// The cached corpus, if present and younger than the TTL.
    pub async fn get(&self) -> Option<Arc<Vec<Message>>> {
        let slot = self.slot.lock().await;
        let entry = slot.as_ref()?;
        if self.clock.now().duration_since(entry.fetched_at) < self.ttl {
            Some(Arc::clone(&entry.corpus))
        } else {
            None
        }
    }

    pub async fn put(&self, corpus: Arc<Vec<Message>>) {
        let mut slot = self.slot.lock().await;
        *slot = Some(Slot {
            fetched_at: self.clock.now(),
            corpus,
        });
    }

    /// Drop the cached corpus so the next fetch goes upstream.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.lock().await;
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clock that only moves when told to.
    struct ManualClock {
        start: Instant,
        offset: std::sync::Mutex<Duration>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                start: Instant::now(),
                offset: std::sync::Mutex::new(Duration::ZERO),
            }
        }

        fn advance(&self, by: Duration) {
            *self.offset.lock().unwrap() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.start + *self.offset.lock().unwrap()
        }
    }

    fn corpus() -> Arc<Vec<Message>> {
        Arc::new(vec![Message {
            id: "m1".to_string(),
            member_name: "Layla".to_string(),
            text: "hello".to_string(),
            timestamp: None,
        }])
    }

    #[tokio::test]
    async fn test_empty_cache_misses() {
        let cache = MessageCache::new(Duration::from_secs(900), Arc::new(SystemClock));
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn test_fresh_entry_hits() {
        let clock = Arc::new(ManualClock::new());
        let cache = MessageCache::new(Duration::from_secs(900), clock.clone());

        cache.put(corpus()).await;
        clock.advance(Duration::from_secs(899));
        assert!(cache.get().await.is_some());
    }

    #[tokio::test]
    async fn test_expired_entry_misses() {
        let clock = Arc::new(ManualClock::new());
        let cache = MessageCache::new(Duration::from_secs(900), clock.clone());

        cache.put(corpus()).await;
        clock.advance(Duration::from_secs(900));
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn test_invalidate_clears_slot() {
        let clock = Arc::new(ManualClock::new());
        let cache = MessageCache::new(Duration::from_secs(900), clock);

        cache.put(corpus()).await;
        cache.invalidate().await;
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn test_put_refreshes_age() {
        let clock = Arc::new(ManualClock::new());
        let cache = MessageCache::new(Duration::from_secs(900), clock.clone());

        cache.put(corpus()).await;
        clock.advance(Duration::from_secs(800));
        cache.put(corpus()).await;
        clock.advance(Duration::from_secs(800));
        assert!(cache.get().await.is_some());
    }
}
