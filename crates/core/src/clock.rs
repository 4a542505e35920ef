// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling
//!
//! Due dates are calendar dates, completion stamps are UTC timestamps.
//! Both come from the same clock so tests can pin "today".

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use std::sync::{Arc, Mutex};

/// A clock that provides the current time and date
pub trait Clock: Clone + Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The calendar date due dates are computed from
    fn today(&self) -> NaiveDate;
}

/// Real system clock
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl FakeClock {
    /// Start the clock at the current wall time
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Start the clock at noon UTC on the given date
    pub fn on(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
        Self::at(Utc.from_utc_datetime(&noon))
    }

    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            current: Arc::new(Mutex::new(instant)),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += duration;
    }

    /// Move the clock to noon UTC on the given date
    pub fn set_date(&self, date: NaiveDate) {
        let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = Utc.from_utc_datetime(&noon);
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
