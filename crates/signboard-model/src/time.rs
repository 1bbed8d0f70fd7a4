use chrono::{DateTime, FixedOffset, Local, NaiveDate};

/// Clock seam for the board. "Today" anchors the signup window, so every
/// consumer goes through this trait instead of reading the system clock.
pub trait BoardClock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Production clock: local wall time with its UTC offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl BoardClock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Pinned clock for tests and deterministic runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    #[must_use]
    pub const fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }
}

impl BoardClock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}
