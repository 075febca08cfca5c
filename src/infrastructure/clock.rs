//! Deterministic clocks
//!
//! Used by tests and by `basket replay --frozen-clock` so generated line
//! item ids are reproducible.

use std::cell::Cell;

use crate::domain::ports::Clock;

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    millis: i64,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self { millis }
    }
}

impl Default for FixedClock {
    /// 2024-01-01 00:00:00 UTC
    fn default() -> Self {
        Self::new(1_704_067_200_000)
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }
}

/// A clock that advances by a fixed step every time it is read.
#[derive(Debug, Clone)]
pub struct SteppingClock {
    next: Cell<i64>,
    step: i64,
}

impl SteppingClock {
    pub fn new(start: i64, step: i64) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now_millis(&self) -> i64 {
        let now = self.next.get();
        self.next.set(now.saturating_add(self.step));
        now
    }
}
