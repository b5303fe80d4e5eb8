// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule read queries.
//!
//! The day-row loaders return flat, typed rows with no location inference
//! applied. Turning them into views is the job of the core crate, so the
//! default-to-union rule lives in exactly one place.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{
    EmployeeRow, JobRow, ProjectOrderRow, ScheduleRow, flag, parse_stored_location,
    parse_stored_status,
};
use crate::diesel_schema::{employees, jobs, project_order, rain_days, schedule, unions};
use crate::error::PersistenceError;
use crew_schedule::{EmployeeDayRow, ProjectDayRow};
use crew_schedule_domain::{AssignmentRecord, ProjectOrderRecord, ScheduleDate};

/// Columns selected for each employee row of a day.
type EmployeeDayTuple = (
    EmployeeRow,
    Option<String>,
    Option<String>,
    Option<i64>,
    Option<i32>,
    Option<i32>,
    Option<String>,
);

/// Columns selected for each job row of a day.
type ProjectDayTuple = (JobRow, Option<i32>, Option<i32>);

fn employee_day_row(
    date: ScheduleDate,
    tuple: EmployeeDayTuple,
) -> Result<EmployeeDayRow, PersistenceError> {
    let (employee, union_name, location, job_id, is_highlighted, display_order, job_status) =
        tuple;

    // A present location column means a schedule row matched the join.
    let assignment: Option<AssignmentRecord> = match location {
        Some(location) => Some(AssignmentRecord {
            date,
            employee_id: employee.employee_id,
            current_location: parse_stored_location(&location)?,
            job_id,
            is_highlighted: is_highlighted.is_some_and(flag),
            display_order,
        }),
        None => None,
    };

    Ok(EmployeeDayRow {
        employee: employee.into_domain(),
        union_name,
        assignment,
        assigned_project_status: job_status.as_deref().map(parse_stored_status).transpose()?,
    })
}

backend_fn! {
/// Loads every active employee with their union and their record for `date`.
///
/// Employees with no record for the date are included with no assignment.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `date` - The schedule date
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn load_employee_day_rows(
    conn: &mut _,
    date: ScheduleDate,
) -> Result<Vec<EmployeeDayRow>, PersistenceError> {
    let date_text: String = date.to_string();

    let tuples: Vec<EmployeeDayTuple> = employees::table
        .left_join(unions::table.on(employees::union_id.eq(unions::union_id.nullable())))
        .left_join(
            schedule::table.on(schedule::employee_id
                .eq(employees::employee_id)
                .and(schedule::schedule_date.eq(date_text.clone()))),
        )
        .left_join(jobs::table.on(schedule::job_id.eq(jobs::job_id.nullable())))
        .filter(employees::is_active.eq(1))
        .select((
            EmployeeRow::as_select(),
            unions::union_name.nullable(),
            schedule::current_location.nullable(),
            schedule::job_id.nullable(),
            schedule::is_highlighted.nullable(),
            schedule::display_order.nullable(),
            jobs::status.nullable(),
        ))
        .order(employees::employee_id.asc())
        .load(conn)?;

    debug!(date = %date, count = tuples.len(), "Loaded employee day rows");

    tuples
        .into_iter()
        .map(|tuple| employee_day_row(date, tuple))
        .collect()
}
}

backend_fn! {
/// Loads every job with its order record for `date`.
///
/// Inactive jobs are included; filtering is left to the view builder.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn load_project_day_rows(
    conn: &mut _,
    date: ScheduleDate,
) -> Result<Vec<ProjectDayRow>, PersistenceError> {
    let date_text: String = date.to_string();

    let tuples: Vec<ProjectDayTuple> = jobs::table
        .left_join(
            project_order::table.on(project_order::job_id
                .eq(jobs::job_id)
                .and(project_order::schedule_date.eq(date_text.clone()))),
        )
        .select((
            JobRow::as_select(),
            project_order::display_order.nullable(),
            project_order::rain_day.nullable(),
        ))
        .order(jobs::job_id.asc())
        .load(conn)?;

    debug!(date = %date, count = tuples.len(), "Loaded project day rows");

    tuples
        .into_iter()
        .map(|(job, display_order, rain_day)| {
            let order: Option<ProjectOrderRecord> = display_order.map(|display_order| {
                ProjectOrderRecord {
                    date,
                    job_id: job.job_id,
                    display_order,
                    rain_day: rain_day.is_some_and(flag),
                }
            });
            Ok(ProjectDayRow {
                project: job.into_domain()?,
                order,
            })
        })
        .collect()
}
}

backend_fn! {
/// Retrieves the stored record for one employee on one date.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is malformed.
/// Returns `Ok(None)` when no record exists; callers apply the union default.
pub fn get_assignment(
    conn: &mut _,
    date: ScheduleDate,
    employee_id: i64,
) -> Result<Option<AssignmentRecord>, PersistenceError> {
    let row: Option<ScheduleRow> = schedule::table
        .filter(schedule::schedule_date.eq(date.to_string()))
        .filter(schedule::employee_id.eq(employee_id))
        .select(ScheduleRow::as_select())
        .first(conn)
        .optional()?;

    row.map(ScheduleRow::into_domain).transpose()
}
}

backend_fn! {
/// Lists the stored assignment records for a date.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_assignments_for_date(
    conn: &mut _,
    date: ScheduleDate,
) -> Result<Vec<AssignmentRecord>, PersistenceError> {
    let rows: Vec<ScheduleRow> = schedule::table
        .filter(schedule::schedule_date.eq(date.to_string()))
        .order(schedule::employee_id.asc())
        .select(ScheduleRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ScheduleRow::into_domain).collect()
}
}

backend_fn! {
/// Lists the stored project order records for a date.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_project_orders_for_date(
    conn: &mut _,
    date: ScheduleDate,
) -> Result<Vec<ProjectOrderRecord>, PersistenceError> {
    let rows: Vec<ProjectOrderRow> = project_order::table
        .filter(project_order::schedule_date.eq(date.to_string()))
        .order(project_order::job_id.asc())
        .select(ProjectOrderRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ProjectOrderRow::into_domain).collect()
}
}

backend_fn! {
/// Returns whether a rain-day marker exists for a job on a date.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn is_rain_day(conn: &mut _, job_id: i64, date: ScheduleDate) -> Result<bool, PersistenceError> {
    let count: i64 = rain_days::table
        .filter(rain_days::job_id.eq(job_id))
        .filter(rain_days::rain_date.eq(date.to_string()))
        .count()
        .get_result(conn)?;

    Ok(count > 0)
}
}
