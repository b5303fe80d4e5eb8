// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference data queries: unions, employees and jobs.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{EmployeeRow, JobRow, UnionRow};
use crate::diesel_schema::{employees, jobs, unions};
use crate::error::PersistenceError;
use crew_schedule_domain::{Employee, Project, Union};

backend_fn! {
/// Lists all unions ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_unions(conn: &mut _) -> Result<Vec<Union>, PersistenceError> {
    let rows: Vec<UnionRow> = unions::table
        .order(unions::union_name.asc())
        .select(UnionRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded unions");
    Ok(rows.into_iter().map(UnionRow::into_domain).collect())
}
}

backend_fn! {
/// Lists all employees, active or not, ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_employees(conn: &mut _) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<EmployeeRow> = employees::table
        .order((
            employees::first_name.asc(),
            employees::last_name.asc(),
            employees::employee_id.asc(),
        ))
        .select(EmployeeRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded employees");
    Ok(rows.into_iter().map(EmployeeRow::into_domain).collect())
}
}

backend_fn! {
/// Lists all jobs, active or not, ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_projects(conn: &mut _) -> Result<Vec<Project>, PersistenceError> {
    let rows: Vec<JobRow> = jobs::table
        .order((
            jobs::display_order.is_null().asc(),
            jobs::display_order.asc(),
            jobs::job_id.asc(),
        ))
        .select(JobRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded jobs");
    rows.into_iter().map(JobRow::into_domain).collect()
}
}

backend_fn! {
/// Retrieves an employee by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the employee does not exist.
pub fn get_employee(conn: &mut _, employee_id: i64) -> Result<Option<Employee>, PersistenceError> {
    let row: Option<EmployeeRow> = employees::table
        .filter(employees::employee_id.eq(employee_id))
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(EmployeeRow::into_domain))
}
}

backend_fn! {
/// Retrieves a job by id.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is malformed.
/// Returns `Ok(None)` if the job does not exist.
pub fn get_project(conn: &mut _, job_id: i64) -> Result<Option<Project>, PersistenceError> {
    let row: Option<JobRow> = jobs::table
        .filter(jobs::job_id.eq(job_id))
        .select(JobRow::as_select())
        .first(conn)
        .optional()?;

    row.map(JobRow::into_domain).transpose()
}
}
