// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::date_policy::ScheduleDate;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where an employee is placed on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// In the home union pool.
    #[default]
    Union,
    /// Assigned to a project.
    Project,
}

impl Location {
    /// Converts this location to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Project => "project",
        }
    }
}

impl FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "union" => Ok(Self::Union),
            "project" => Ok(Self::Project),
            _ => Err(DomainError::InvalidLocation(s.to_string())),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Activation status of a project (job).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    /// Schedulable.
    #[default]
    Active,
    /// Hidden from scheduling; its employees fall back to their union.
    Inactive,
}

impl ProjectStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Returns whether employees may be scheduled onto the project.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl FromStr for ProjectStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidProjectStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A trade affiliation that employees default into when not on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Union {
    /// The canonical identifier.
    pub union_id: i64,
    /// The display name.
    pub union_name: String,
}

/// A schedulable worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The canonical identifier.
    pub employee_id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Home union, if any.
    pub union_id: Option<i64>,
    /// Inactive employees are excluded from every schedule view.
    pub is_active: bool,
}

/// A job site employees can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// The canonical identifier.
    pub job_id: i64,
    /// Business-facing job number.
    pub job_number: String,
    /// Display name.
    pub job_name: String,
    /// Site location.
    pub location: Option<String>,
    /// First scheduled day.
    pub start_date: Option<ScheduleDate>,
    /// Last scheduled day.
    pub end_date: Option<ScheduleDate>,
    /// Activation status.
    pub status: ProjectStatus,
    /// Default ordering; `None` sorts last.
    pub display_order: Option<i32>,
}

/// The stored placement of one employee on one date.
///
/// Keyed by `(date, employee_id)`; at most one record exists per key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// The schedule date.
    pub date: ScheduleDate,
    /// The employee.
    pub employee_id: i64,
    /// Stored location.
    pub current_location: Location,
    /// Target project; set whenever `current_location` is `Project`.
    pub job_id: Option<i64>,
    /// Visual highlight flag.
    pub is_highlighted: bool,
    /// Ordering within the project for this date; `None` sorts last.
    pub display_order: Option<i32>,
}

impl AssignmentRecord {
    /// Builds the record written when an employee is moved.
    ///
    /// Moving onto a project highlights the employee; moving back to the union
    /// clears both the project and the highlight.
    #[must_use]
    pub const fn for_move(date: ScheduleDate, employee_id: i64, target_job_id: Option<i64>) -> Self {
        match target_job_id {
            Some(job_id) => Self {
                date,
                employee_id,
                current_location: Location::Project,
                job_id: Some(job_id),
                is_highlighted: true,
                display_order: None,
            },
            None => Self {
                date,
                employee_id,
                current_location: Location::Union,
                job_id: None,
                is_highlighted: false,
                display_order: None,
            },
        }
    }

    /// Returns a copy of this record re-keyed to another date.
    #[must_use]
    pub fn carried_to(&self, date: ScheduleDate) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }
}

/// Per-date ordering and rain-day state for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOrderRecord {
    /// The schedule date.
    pub date: ScheduleDate,
    /// The project.
    pub job_id: i64,
    /// Ordering for this date.
    pub display_order: i32,
    /// Whether the project is rained out on this date.
    pub rain_day: bool,
}

impl ProjectOrderRecord {
    /// Returns a copy for `date` with the rain-day flag cleared.
    ///
    /// Rain days never carry forward.
    #[must_use]
    pub const fn carried_to(&self, date: ScheduleDate) -> Self {
        Self {
            date,
            job_id: self.job_id,
            display_order: self.display_order,
            rain_day: false,
        }
    }
}

/// The effective placement of an employee after default inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationState {
    /// Effective location.
    pub location: Location,
    /// Effective project; always `None` when `location` is `Union`.
    pub job_id: Option<i64>,
    /// Highlight flag.
    pub is_highlighted: bool,
    /// Ordering within the project.
    pub display_order: Option<i32>,
}

impl LocationState {
    /// The state of an employee with no record for the date.
    #[must_use]
    pub const fn union_default() -> Self {
        Self {
            location: Location::Union,
            job_id: None,
            is_highlighted: false,
            display_order: None,
        }
    }

    /// Returns whether the employee belongs in the union pool.
    #[must_use]
    pub const fn is_union(&self) -> bool {
        matches!(self.location, Location::Union)
    }
}
