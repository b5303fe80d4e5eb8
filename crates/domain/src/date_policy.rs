// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date policy for schedule reads and writes.
//!
//! Every schedule operation is keyed by a civil date in the business
//! timezone. This module owns:
//!
//! - Parsing and normalizing caller-supplied date strings into `ScheduleDate`
//! - The editable window (`today ..= today + 7 days`) applied to writes
//! - The past/current split used to pick a read strategy
//! - The business calendar that decides what "today" is
//!
//! ## Invariants
//!
//! - A `ScheduleDate` always renders as `YYYY-MM-DD`
//! - Timestamps keep the civil date they were written in; an RFC 3339 offset
//!   is never converted to UTC first, so an input near midnight stays on its
//!   own day
//! - "Today" is computed in exactly one timezone, owned by `BusinessCalendar`

use crate::error::{DateError, RangeViolation};
use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of days past today that remain editable (inclusive).
pub const EDITABLE_WINDOW_DAYS: u64 = 7;

/// Default business timezone used when none is configured.
pub const DEFAULT_BUSINESS_TIMEZONE: &str = "America/Chicago";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated, canonical schedule date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleDate(NaiveDate);

impl ScheduleDate {
    /// Wraps an already-valid calendar date.
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a date from calendar components.
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidFormat` if the components do not name a real day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DateError::InvalidFormat {
                input: format!("{year:04}-{month:02}-{day:02}"),
                reason: String::from("not a calendar date"),
            })
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns the date at 12:00, the reference time-of-day for comparisons.
    #[must_use]
    pub fn at_noon(&self) -> NaiveDateTime {
        self.0.and_time(noon())
    }

    /// Returns the following day.
    ///
    /// # Errors
    ///
    /// Returns `DateError::Overflow` at the end of the representable range.
    pub fn next_day(&self) -> Result<Self, DateError> {
        self.add_days(1)
    }

    /// Returns this date shifted forward by `days`.
    ///
    /// # Errors
    ///
    /// Returns `DateError::Overflow` at the end of the representable range.
    pub fn add_days(&self, days: u64) -> Result<Self, DateError> {
        self.0
            .checked_add_days(Days::new(days))
            .map(Self)
            .ok_or_else(|| DateError::Overflow {
                date: self.to_string(),
            })
    }
}

impl fmt::Display for ScheduleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for ScheduleDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl Serialize for ScheduleDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ScheduleDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        validate(&raw).map_err(serde::de::Error::custom)
    }
}

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()
}

/// Parses and normalizes a date string.
///
/// Accepted inputs:
/// - `YYYY-MM-DD`
/// - `YYYY-MM-DDTHH:MM:SS[.fff]` (naive, civil time)
/// - RFC 3339 timestamps with an offset; the civil date in that offset is used
///
/// Time-bearing inputs contribute only their civil date; the time of day and
/// any offset are discarded without shifting the date.
///
/// # Errors
///
/// Returns `DateError::InvalidFormat` if the input cannot be parsed.
pub fn validate(input: &str) -> Result<ScheduleDate, DateError> {
    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Err(DateError::InvalidFormat {
            input: input.to_string(),
            reason: String::from("date is empty"),
        });
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(ScheduleDate(date));
    }

    if let Ok(stamp) = DateTime::<FixedOffset>::parse_from_rfc3339(trimmed) {
        return Ok(ScheduleDate(stamp.naive_local().date()));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(ScheduleDate(stamp.date()));
        }
    }

    Err(DateError::InvalidFormat {
        input: input.to_string(),
        reason: String::from("expected YYYY-MM-DD or an ISO 8601 timestamp"),
    })
}

/// Returns true iff `today <= date <= today + 7 days`.
#[must_use]
pub fn is_within_editable_window(date: ScheduleDate, today: ScheduleDate) -> bool {
    classify_against_window(date, today).is_none()
}

/// Returns true if `date` is strictly before `today`.
///
/// Only used to select a read strategy; it never blocks a write on its own.
#[must_use]
pub fn is_past(date: ScheduleDate, today: ScheduleDate) -> bool {
    date.at_noon() < today.at_noon()
}

/// Verifies a write may target `date`.
///
/// # Errors
///
/// Returns `DateError::OutOfRange` with `RangeViolation::Past` for dates before
/// today and `RangeViolation::Future` for dates more than seven days out.
pub fn check_editable(date: ScheduleDate, today: ScheduleDate) -> Result<(), DateError> {
    match classify_against_window(date, today) {
        None => Ok(()),
        Some(violation) => Err(DateError::OutOfRange {
            date: date.to_string(),
            today: today.to_string(),
            violation,
        }),
    }
}

fn classify_against_window(date: ScheduleDate, today: ScheduleDate) -> Option<RangeViolation> {
    let candidate: NaiveDateTime = date.at_noon();
    if candidate < today.at_noon() {
        return Some(RangeViolation::Past);
    }
    // An unrepresentable upper bound means every real date is inside it.
    match today.add_days(EDITABLE_WINDOW_DAYS) {
        Ok(last) if candidate > last.at_noon() => Some(RangeViolation::Future),
        _ => None,
    }
}

/// Where "today" comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clock {
    System,
    Fixed(ScheduleDate),
}

/// The business's civil calendar.
///
/// Owns the single timezone used to decide what "today" is for the editable
/// window and for the project deactivation side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessCalendar {
    timezone: Tz,
    clock: Clock,
}

impl BusinessCalendar {
    /// Creates a calendar that reads the system clock in `timezone`.
    #[must_use]
    pub const fn new(timezone: Tz) -> Self {
        Self {
            timezone,
            clock: Clock::System,
        }
    }

    /// Creates a calendar from an IANA timezone name.
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidTimezone` if the name is unknown.
    pub fn from_timezone_name(name: &str) -> Result<Self, DateError> {
        let timezone: Tz = name
            .parse()
            .map_err(|_| DateError::InvalidTimezone(name.to_string()))?;
        Ok(Self::new(timezone))
    }

    /// Pins "today" to a fixed date.
    #[must_use]
    pub const fn with_fixed_today(self, today: ScheduleDate) -> Self {
        Self {
            timezone: self.timezone,
            clock: Clock::Fixed(today),
        }
    }

    /// Returns the configured timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Returns today's civil date in the business timezone.
    #[must_use]
    pub fn today(&self) -> ScheduleDate {
        match self.clock {
            Clock::Fixed(date) => date,
            Clock::System => self.date_of(Utc::now()),
        }
    }

    /// Returns the civil date of `instant` in the business timezone.
    #[must_use]
    pub fn date_of(&self, instant: DateTime<Utc>) -> ScheduleDate {
        ScheduleDate(instant.with_timezone(&self.timezone).date_naive())
    }
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self::new(chrono_tz::America::Chicago)
    }
}
