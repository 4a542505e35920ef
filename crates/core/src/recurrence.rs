// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Due-date arithmetic for recurring chores
//!
//! Pure functions over calendar dates. Weekdays are numbered
//! 0 = Sunday through 6 = Saturday.
//!
//! Monthly recurrence clamps to the end of the month: adding one month to
//! January 31st lands on February 28th (29th in leap years), and the clamped
//! day becomes the anchor for the following month.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Highest valid weekday number (Saturday)
pub const MAX_WEEKDAY: u8 = 6;

/// How often a recurring chore comes due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Monthly => write!(f, "monthly"),
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            _ => Err(format!("unknown frequency: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("interval must be at least 1")]
    ZeroInterval,
    #[error("weekday {0} is out of range (0 = Sunday .. 6 = Saturday)")]
    InvalidWeekday(u8),
}

/// A recurrence pattern: frequency, optional weekdays, and an interval multiplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrencePattern {
    pub frequency: Frequency,
    /// Only meaningful for weekly patterns
    #[serde(default)]
    pub days: BTreeSet<u8>,
    #[serde(default = "default_interval")]
    pub interval: u32,
}

fn default_interval() -> u32 {
    1
}

impl RecurrencePattern {
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            days: BTreeSet::new(),
            interval: 1,
        }
    }

    pub fn daily() -> Self {
        Self::new(Frequency::Daily)
    }

    pub fn weekly() -> Self {
        Self::new(Frequency::Weekly)
    }

    pub fn monthly() -> Self {
        Self::new(Frequency::Monthly)
    }

    pub fn on_days(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.days = days.into_iter().collect();
        self
    }

    pub fn every(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    pub fn validate(&self) -> Result<(), PatternError> {
        if self.interval == 0 {
            return Err(PatternError::ZeroInterval);
        }
        if let Some(&day) = self.days.iter().find(|&&d| d > MAX_WEEKDAY) {
            return Err(PatternError::InvalidWeekday(day));
        }
        Ok(())
    }

    fn weekly_days(&self) -> Option<&BTreeSet<u8>> {
        match self.frequency {
            Frequency::Weekly if !self.days.is_empty() => Some(&self.days),
            _ => None,
        }
    }
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.interval > 1 {
            write!(f, "every {} x {}", self.interval, self.frequency)?;
        } else {
            write!(f, "{}", self.frequency)?;
        }
        if let Some(days) = self.weekly_days() {
            let names: Vec<&str> = days.iter().map(|&d| weekday_name(d)).collect();
            write!(f, " on {}", names.join(","))?;
        }
        Ok(())
    }
}

/// Three-letter name for a weekday number
pub fn weekday_name(day: u8) -> &'static str {
    match day {
        0 => "Sun",
        1 => "Mon",
        2 => "Tue",
        3 => "Wed",
        4 => "Thu",
        5 => "Fri",
        6 => "Sat",
        _ => "?",
    }
}

/// Weekday number of a date, 0 = Sunday
pub fn weekday_of(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Due date of the first instance of a chore created on `today`
///
/// Weekly patterns with days pick the earliest matching weekday on or
/// after today. Everything else is due today.
pub fn initial_due_date(pattern: Option<&RecurrencePattern>, today: NaiveDate) -> NaiveDate {
    let Some(days) = pattern.and_then(RecurrencePattern::weekly_days) else {
        return today;
    };

    (0..7u64)
        .map(|offset| add_days(today, offset))
        .find(|date| days.contains(&weekday_of(*date)))
        .unwrap_or(today)
}

/// Due date of the instance that follows one due on `current`
pub fn next_due_date(current: NaiveDate, pattern: Option<&RecurrencePattern>) -> NaiveDate {
    let Some(pattern) = pattern else {
        return add_days(current, 1);
    };
    let interval = u64::from(pattern.interval.max(1));

    match pattern.frequency {
        Frequency::Daily => add_days(current, interval),
        Frequency::Weekly => match pattern.weekly_days() {
            None => add_days(current, 7 * interval),
            Some(days) => {
                let cur = weekday_of(current);
                match days.range(cur + 1..).next() {
                    Some(&later) => add_days(current, u64::from(later - cur)),
                    None => {
                        let first = days.first().copied().unwrap_or(cur);
                        let offset = 7 - u64::from(cur) + u64::from(first) + (interval - 1) * 7;
                        add_days(current, offset)
                    }
                }
            }
        },
        Frequency::Monthly => current
            .checked_add_months(Months::new(pattern.interval.max(1)))
            .unwrap_or(NaiveDate::MAX),
    }
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
#[path = "recurrence_tests.rs"]
mod tests;
