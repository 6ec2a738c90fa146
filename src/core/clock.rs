//! Wall-clock sources. The monitor reads "now" through [`Clock`] so the
//! evaluation can be driven with a fixed time in tests.

use chrono::{Local, NaiveDateTime, TimeDelta};
use std::sync::{Arc, Mutex};

pub trait Clock: Send + Sync {
    /// Current local date-time, read fresh on every call.
    fn now(&self) -> NaiveDateTime;
}

/// Local time of the machine running the monitor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually driven clock.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.lock() = now;
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut guard = self.lock();
        *guard += by;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NaiveDateTime> {
        // A poisoned lock still holds a valid timestamp.
        self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.lock()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
