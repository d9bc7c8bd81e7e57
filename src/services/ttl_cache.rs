use chrono::{DateTime, TimeDelta, Utc};

/// Time source seam so cache expiry is testable without sleeping.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Single-value cache with a fixed time-to-live. Owned by whoever needs
/// the memoization; there is deliberately no process-wide instance.
pub struct TtlCache<T> {
    ttl: TimeDelta,
    entry: Option<(DateTime<Utc>, T)>,
}

impl<T> TtlCache<T> {
    pub fn new(ttl: TimeDelta) -> Self {
        Self { ttl, entry: None }
    }

    /// The cached value, provided it is still within its TTL.
    pub fn fresh(&self, clock: &impl Clock) -> Option<&T> {
        let (stored_at, value) = self.entry.as_ref()?;
        if clock.now() - *stored_at < self.ttl {
            Some(value)
        } else {
            None
        }
    }

    /// The most recently stored value regardless of age. Used as a
    /// stale fallback when refreshing fails.
    pub fn last(&self) -> Option<&T> {
        self.entry.as_ref().map(|(_, value)| value)
    }

    pub fn store(&mut self, value: T, clock: &impl Clock) {
        self.entry = Some((clock.now(), value));
    }
}
