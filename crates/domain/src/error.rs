// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Which side of the editable window a date fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeViolation {
    /// The date is before today.
    Past,
    /// The date is more than seven days after today.
    Future,
}

impl RangeViolation {
    /// Returns a short user-facing explanation.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Past => "past dates cannot be modified",
            Self::Future => "dates more than 7 days ahead cannot be modified",
        }
    }
}

/// Errors produced by the date policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The input could not be parsed as a date.
    #[error("Invalid date '{input}': {reason}")]
    InvalidFormat {
        /// The raw input.
        input: String,
        /// Why parsing failed.
        reason: String,
    },
    /// The date is outside the editable window.
    #[error("Date {date} is outside the editable window (today is {today}): {}", violation.describe())]
    OutOfRange {
        /// The rejected date.
        date: String,
        /// The business date the window was anchored on.
        today: String,
        /// Which side of the window was violated.
        violation: RangeViolation,
    },
    /// Date arithmetic left the representable range.
    #[error("Date arithmetic overflow from {date}")]
    Overflow {
        /// The starting date.
        date: String,
    },
    /// The configured business timezone is not a known IANA name.
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A date rule was violated.
    #[error(transparent)]
    Date(#[from] DateError),
    /// A stored or supplied location value is not `union` or `project`.
    #[error("Invalid location: {0}")]
    InvalidLocation(String),
    /// A stored or supplied project status is not `Active` or `Inactive`.
    #[error("Invalid project status: {0}")]
    InvalidProjectStatus(String),
    /// A required name field is empty.
    #[error("Invalid {field}: {message}")]
    InvalidName {
        /// The offending field.
        field: &'static str,
        /// Why it was rejected.
        message: String,
    },
    /// A reorder request listed the same id more than once.
    #[error("Duplicate id {id} in {list} order")]
    DuplicateOrderEntry {
        /// Which list was being reordered.
        list: &'static str,
        /// The repeated id.
        id: i64,
    },
    /// A project date range ends before it starts.
    #[error("Project end date {end} is before start date {start}")]
    InvalidProjectDateRange {
        /// The start date.
        start: String,
        /// The end date.
        end: String,
    },
}
