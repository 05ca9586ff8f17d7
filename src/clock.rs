//! Wall-clock abstraction so the freshness evaluator never calls
//! [`SystemTime::now`] directly and can be driven deterministically in tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Returns the current time. Implementations must be cheap to call and safe
/// to share across threads; the orchestrator calls `now()` at most once per
/// request.
pub trait Clock: Send + Sync {
    /// The current wall-clock time.
    fn now(&self) -> SystemTime;
}

/// A [`Clock`] backed by [`SystemTime::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A [`Clock`] whose time is set explicitly, for deterministic freshness
/// tests. Stores an offset in seconds from the Unix epoch so it stays
/// `Send + Sync` without a mutex.
#[derive(Debug)]
pub struct FakeClock {
    epoch_seconds: AtomicI64,
}

impl FakeClock {
    /// Creates a fake clock fixed at `time`.
    pub fn new(time: SystemTime) -> Self {
        let epoch_seconds = time
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_else(|e| -(e.duration().as_secs() as i64));
        Self { epoch_seconds: AtomicI64::new(epoch_seconds) }
    }

    /// Moves the clock forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        self.epoch_seconds.fetch_add(duration.as_secs() as i64, Ordering::SeqCst);
    }

    /// Sets the clock to an explicit time.
    pub fn set(&self, time: SystemTime) {
        let epoch_seconds = time
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_else(|e| -(e.duration().as_secs() as i64));
        self.epoch_seconds.store(epoch_seconds, Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> SystemTime {
        let secs = self.epoch_seconds.load(Ordering::SeqCst);
        if secs >= 0 {
            UNIX_EPOCH + Duration::from_secs(secs as u64)
        } else {
            UNIX_EPOCH - Duration::from_secs((-secs) as u64)
        }
    }
}
