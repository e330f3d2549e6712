//! Clock implementations

use std::cell::Cell;
use std::time::{Duration, SystemTime};

use crate::domain::ports::Clock;

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Clock pinned to a chosen instant; can be moved forward by hand
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<SystemTime>,
}

impl FixedClock {
    pub fn new(now: SystemTime) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: SystemTime) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.now.get()
    }
}
