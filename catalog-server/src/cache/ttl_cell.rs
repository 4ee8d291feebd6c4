use super::Clock;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

struct Slot<V> {
    value: Arc<V>,
    expires_at: Instant,
}

/// A single cached value with a time-to-live
pub struct TtlCell<V> {
    slot: Mutex<Option<Slot<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V> TtlCell<V> {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: Mutex::new(None),
            ttl,
            clock,
        }
    }

    /// Return the fresh value or compute, store and return a new one
    pub fn get_or_compute(&self, compute: impl FnOnce() -> V) -> Arc<V> {
        let now = self.clock.now();
        let mut slot = self.slot.lock();
        if let Some(current) = slot.as_ref()
            && now < current.expires_at
        {
            tracing::debug!("ttl cell hit");
            return Arc::clone(&current.value);
        }

        tracing::debug!("ttl cell miss");
        let value = Arc::new(compute());
        *slot = Some(Slot {
            value: Arc::clone(&value),
            expires_at: now + self.ttl,
        });
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn serves_cached_value_until_expiry() {
        let clock = ManualClock::new();
        let cell = TtlCell::new(Duration::from_secs(60), Arc::new(clock.clone()));
        let calls = AtomicUsize::new(0);
        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            vec!["infrastructure"]
        };

        let first = cell.get_or_compute(compute);
        clock.advance(Duration::from_secs(59));
        let second = cell.get_or_compute(compute);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        clock.advance(Duration::from_secs(1));
        let third = cell.get_or_compute(compute);
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
