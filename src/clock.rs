use std::fmt;
use std::sync::Mutex;

use chrono::{NaiveDate, Utc};

/// Source of "today" for service-interval computations.
///
/// Parts consult the clock on every query instead of caching a date, so a
/// status check always reflects the current day, including across date
/// boundaries.
pub trait Clock: Send + Sync + fmt::Debug {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation backed by the system time (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Settable clock for deterministic tests and replayed inspections.
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        *self.today.lock().expect("clock lock poisoned") = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().expect("clock lock poisoned")
    }
}
