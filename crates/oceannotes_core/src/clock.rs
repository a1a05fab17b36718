//! Injectable time sources.
//!
//! # Responsibility
//! - Provide epoch-millisecond timestamps to the repository and sessions.
//! - Keep time observable and advanceable in tests.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond clock used for note timestamps and autosave deadlines.
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;
}

/// Wall clock backed by [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Manually driven clock for deterministic tests.
///
/// Interior mutability is a `Cell`, not a lock: the core runs on one
/// thread, so the clock can be advanced through a shared reference while a
/// repository owns it.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<i64>,
}

impl ManualClock {
    /// Creates a clock parked at `start_ms`.
    pub fn new(start_ms: i64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    /// Moves the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: i64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }

    /// Jumps the clock to an absolute time.
    pub fn set(&self, now_ms: i64) {
        self.now_ms.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.get()
    }
}
