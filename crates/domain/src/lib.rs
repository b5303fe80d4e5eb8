// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod date_policy;
mod error;
mod location;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use date_policy::{
    BusinessCalendar, DEFAULT_BUSINESS_TIMEZONE, EDITABLE_WINDOW_DAYS, ScheduleDate,
    check_editable, is_past, is_within_editable_window, validate as validate_date,
};
pub use error::{DateError, DomainError, RangeViolation};
pub use location::resolve_location;
pub use types::{
    AssignmentRecord, Employee, Location, LocationState, Project, ProjectOrderRecord,
    ProjectStatus, Union,
};
pub use validation::{validate_project_dates, validate_required_name, validate_unique_ids};
