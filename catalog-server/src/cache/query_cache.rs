use super::Clock;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

struct Entry<V> {
    value: Arc<V>,
    expires_at: Instant,
    last_used: u64,
}

struct Inner<V> {
    entries: HashMap<String, Entry<V>>,
    /// Monotonic use counter for LRU ordering
    tick: u64,
    /// Bumped by every invalidation
    generation: u64,
}

/// Keyed result cache with a time-to-live and an LRU entry bound
///
/// A capacity of 1 keeps only the most recent key, so alternating between two
/// queries misses every time.
///
/// Values computed from a snapshot taken before an [`invalidate`] must not be
/// stored afterwards: read [`generation`] before taking the snapshot and store
/// through [`insert_if_generation`].
///
/// [`invalidate`]: QueryCache::invalidate
/// [`generation`]: QueryCache::generation
/// [`insert_if_generation`]: QueryCache::insert_if_generation
pub struct QueryCache<V> {
    inner: Mutex<Inner<V>>,
    ttl: Duration,
    capacity: usize,
    clock: Arc<dyn Clock>,
}

impl<V> QueryCache<V> {
    pub fn new(ttl: Duration, capacity: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                tick: 0,
                generation: 0,
            }),
            ttl,
            capacity: capacity.max(1),
            clock,
        }
    }

    /// Fresh value for `key`, if any
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        let now = self.clock.now();
        let mut inner = self.inner.lock();
        inner.tick += 1;
        let tick = inner.tick;
        match inner.entries.get_mut(key) {
            Some(entry) if now < entry.expires_at => {
                entry.last_used = tick;
                tracing::debug!(key, "query cache hit");
                Some(Arc::clone(&entry.value))
            }
            _ => {
                tracing::debug!(key, "query cache miss");
                None
            }
        }
    }

    /// Current invalidation generation
    pub fn generation(&self) -> u64 {
        self.inner.lock().generation
    }

    /// Store `value` only if no invalidation happened since `generation` was
    /// read. The value is returned either way.
    pub fn insert_if_generation(&self, key: impl Into<String>, generation: u64, value: V) -> Arc<V> {
        let key = key.into();
        let value = Arc::new(value);
        let mut inner = self.inner.lock();
        if inner.generation == generation {
            self.store(&mut inner, key, Arc::clone(&value));
        } else {
            tracing::debug!(key = %key, "query cache insert skipped after invalidation");
        }
        value
    }

    /// Drop every entry
    pub fn invalidate(&self) {
        let mut inner = self.inner.lock();
        let dropped = inner.entries.len();
        inner.entries.clear();
        inner.generation += 1;
        tracing::debug!(dropped, "query cache invalidated");
    }

    fn store(&self, inner: &mut Inner<V>, key: String, value: Arc<V>) {
        let now = self.clock.now();
        inner.tick += 1;
        let tick = inner.tick;

        if !inner.entries.contains_key(&key) {
            self.make_room(inner, now);
        }
        inner.entries.insert(
            key,
            Entry {
                value,
                expires_at: now + self.ttl,
                last_used: tick,
            },
        );
    }

    fn make_room(&self, inner: &mut Inner<V>, now: Instant) {
        if inner.entries.len() < self.capacity {
            return;
        }
        inner.entries.retain(|_, e| now < e.expires_at);
        while inner.entries.len() >= self.capacity {
            let Some(oldest) = inner
                .entries
                .iter()
                .min_by_key(|(_, e)| e.last_used)
                .map(|(k, _)| k.clone())
            else {
                break;
            };
            inner.entries.remove(&oldest);
            tracing::debug!(key = %oldest, "query cache evicted");
        }
    }
}

#[cfg(test)]
impl<V> QueryCache<V> {
    pub(crate) fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    fn insert(&self, key: &str, value: V) -> Arc<V> {
        self.insert_if_generation(key, self.generation(), value)
    }
}
