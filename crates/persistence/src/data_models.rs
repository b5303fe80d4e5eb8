// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and their conversions to domain values.
//!
//! Booleans are stored as `0`/`1` integers and dates as `YYYY-MM-DD` text on
//! both backends.

use diesel::prelude::*;

use crate::diesel_schema::{employees, jobs, project_order, schedule, unions};
use crate::error::PersistenceError;
use crew_schedule_domain::{
    AssignmentRecord, Employee, Location, Project, ProjectOrderRecord, ProjectStatus,
    ScheduleDate, Union,
};

/// Converts a stored `0`/`1` flag.
pub const fn flag(value: i32) -> bool {
    value != 0
}

/// Converts a flag for storage.
pub fn flag_value(value: bool) -> i32 {
    i32::from(value)
}

/// Parses a stored date column.
///
/// # Errors
///
/// Returns `PersistenceError::ReconstructionError` if the text is not a date.
pub fn parse_stored_date(value: &str) -> Result<ScheduleDate, PersistenceError> {
    value
        .parse()
        .map_err(|e| PersistenceError::ReconstructionError(format!("Stored date {value}: {e}")))
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<ScheduleDate>, PersistenceError> {
    value.map(parse_stored_date).transpose()
}

/// Parses a stored location column.
///
/// # Errors
///
/// Returns `PersistenceError::ReconstructionError` for unknown values.
pub fn parse_stored_location(value: &str) -> Result<Location, PersistenceError> {
    value
        .parse()
        .map_err(|e| PersistenceError::ReconstructionError(format!("{e}")))
}

/// Parses a stored project status column.
///
/// # Errors
///
/// Returns `PersistenceError::ReconstructionError` for unknown values.
pub fn parse_stored_status(value: &str) -> Result<ProjectStatus, PersistenceError> {
    value
        .parse()
        .map_err(|e| PersistenceError::ReconstructionError(format!("{e}")))
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = unions)]
pub struct UnionRow {
    pub union_id: i64,
    pub union_name: String,
}

impl UnionRow {
    pub fn into_domain(self) -> Union {
        Union {
            union_id: self.union_id,
            union_name: self.union_name,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
pub struct EmployeeRow {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub union_id: Option<i64>,
    pub is_active: i32,
}

impl EmployeeRow {
    pub fn into_domain(self) -> Employee {
        Employee {
            employee_id: self.employee_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            union_id: self.union_id,
            is_active: flag(self.is_active),
        }
    }
}

/// Insertable employee; ids are assigned by the database.
#[derive(Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployee<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub union_id: Option<i64>,
    pub is_active: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = jobs)]
pub struct JobRow {
    pub job_id: i64,
    pub job_number: String,
    pub job_name: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: String,
    pub display_order: Option<i32>,
}

impl JobRow {
    /// Converts a stored job into a `Project`.
    ///
    /// # Errors
    ///
    /// Returns an error if a date or the status column is malformed.
    pub fn into_domain(self) -> Result<Project, PersistenceError> {
        Ok(Project {
            job_id: self.job_id,
            start_date: parse_optional_date(self.start_date.as_deref())?,
            end_date: parse_optional_date(self.end_date.as_deref())?,
            status: parse_stored_status(&self.status)?,
            job_number: self.job_number,
            job_name: self.job_name,
            location: self.location,
            display_order: self.display_order,
        })
    }
}

/// Insertable job; ids are assigned by the database.
#[derive(Insertable)]
#[diesel(table_name = jobs)]
pub struct NewJob<'a> {
    pub job_number: &'a str,
    pub job_name: &'a str,
    pub location: Option<&'a str>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: &'a str,
    pub display_order: Option<i32>,
}

/// One row of the `schedule` table, keyed by `(schedule_date, employee_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable)]
#[diesel(table_name = schedule)]
pub struct ScheduleRow {
    pub schedule_date: String,
    pub employee_id: i64,
    pub current_location: String,
    pub job_id: Option<i64>,
    pub is_highlighted: i32,
    pub display_order: Option<i32>,
}

impl ScheduleRow {
    pub fn from_record(record: &AssignmentRecord) -> Self {
        Self {
            schedule_date: record.date.to_string(),
            employee_id: record.employee_id,
            current_location: record.current_location.as_str().to_string(),
            job_id: record.job_id,
            is_highlighted: flag_value(record.is_highlighted),
            display_order: record.display_order,
        }
    }

    /// Converts a stored row into an `AssignmentRecord`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date or location column is malformed.
    pub fn into_domain(self) -> Result<AssignmentRecord, PersistenceError> {
        Ok(AssignmentRecord {
            date: parse_stored_date(&self.schedule_date)?,
            employee_id: self.employee_id,
            current_location: parse_stored_location(&self.current_location)?,
            job_id: self.job_id,
            is_highlighted: flag(self.is_highlighted),
            display_order: self.display_order,
        })
    }
}

/// One row of the `project_order` table, keyed by `(schedule_date, job_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable)]
#[diesel(table_name = project_order)]
pub struct ProjectOrderRow {
    pub schedule_date: String,
    pub job_id: i64,
    pub display_order: i32,
    pub rain_day: i32,
}

impl ProjectOrderRow {
    pub fn from_record(record: &ProjectOrderRecord) -> Self {
        Self {
            schedule_date: record.date.to_string(),
            job_id: record.job_id,
            display_order: record.display_order,
            rain_day: flag_value(record.rain_day),
        }
    }

    /// Converts a stored row into a `ProjectOrderRecord`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date column is malformed.
    pub fn into_domain(self) -> Result<ProjectOrderRecord, PersistenceError> {
        Ok(ProjectOrderRecord {
            date: parse_stored_date(&self.schedule_date)?,
            job_id: self.job_id,
            display_order: self.display_order,
            rain_day: flag(self.rain_day),
        })
    }
}

/// Counts reported by a finalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalizeSummary {
    /// The date the schedule was copied into.
    pub next_date: ScheduleDate,
    /// Assignment records written for `next_date`.
    pub assignments_copied: usize,
    /// Project order records written for `next_date`.
    pub project_orders_copied: usize,
}
