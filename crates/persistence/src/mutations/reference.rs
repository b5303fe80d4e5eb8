// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference data mutations: unions, employees and jobs.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::ScheduleBackend;
use crate::data_models::{NewEmployee, NewJob, flag_value};
use crate::diesel_schema::{employees, jobs, unions};
use crate::error::PersistenceError;
use crew_schedule_domain::{ProjectStatus, ScheduleDate};

/// Fields for a new employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub union_id: Option<i64>,
}

/// Fields for a new job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub job_number: String,
    pub job_name: String,
    pub location: Option<String>,
    pub start_date: Option<ScheduleDate>,
    pub end_date: Option<ScheduleDate>,
    /// Default position in project listings; `None` sorts last.
    pub display_order: Option<i32>,
}

backend_fn! {
/// Creates a union.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `union_name` - The already-validated display name
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateUnionName` if the name is taken, or a
/// database error.
pub fn create_union(conn: &mut _, union_name: &str) -> Result<i64, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let existing: i64 = unions::table
            .filter(unions::union_name.eq(union_name))
            .count()
            .get_result(conn)?;
        if existing > 0 {
            return Err(PersistenceError::DuplicateUnionName(union_name.to_string()));
        }

        diesel::insert_into(unions::table)
            .values(unions::union_name.eq(union_name))
            .execute(conn)?;
        let union_id: i64 = conn.last_insert_id()?;

        info!(union_id, union_name, "Created union");
        Ok(union_id)
    })
}
}

backend_fn! {
/// Creates an active employee.
///
/// # Errors
///
/// Returns `PersistenceError::UnionNotFound` if `union_id` names no union, or
/// a database error.
pub fn create_employee(conn: &mut _, draft: &EmployeeDraft) -> Result<i64, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        if let Some(union_id) = draft.union_id {
            let found: i64 = unions::table
                .filter(unions::union_id.eq(union_id))
                .count()
                .get_result(conn)?;
            if found == 0 {
                return Err(PersistenceError::UnionNotFound(union_id));
            }
        }

        diesel::insert_into(employees::table)
            .values(NewEmployee {
                first_name: &draft.first_name,
                last_name: &draft.last_name,
                email: draft.email.as_deref(),
                phone: draft.phone.as_deref(),
                union_id: draft.union_id,
                is_active: flag_value(true),
            })
            .execute(conn)?;
        let employee_id: i64 = conn.last_insert_id()?;

        info!(employee_id, union_id = ?draft.union_id, "Created employee");
        Ok(employee_id)
    })
}
}

backend_fn! {
/// Activates or deactivates an employee.
///
/// Records are left untouched; inactive employees are filtered at read time.
///
/// # Errors
///
/// Returns `PersistenceError::EmployeeNotFound` if no row was updated.
pub fn set_employee_active(
    conn: &mut _,
    employee_id: i64,
    is_active: bool,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(employees::table)
        .filter(employees::employee_id.eq(employee_id))
        .set(employees::is_active.eq(flag_value(is_active)))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::EmployeeNotFound(employee_id));
    }

    info!(employee_id, is_active, "Set employee active flag");
    Ok(())
}
}

backend_fn! {
/// Creates an active job.
///
/// # Errors
///
/// Returns an error if the database insert fails.
pub fn create_project(conn: &mut _, draft: &ProjectDraft) -> Result<i64, PersistenceError> {
    diesel::insert_into(jobs::table)
        .values(NewJob {
            job_number: &draft.job_number,
            job_name: &draft.job_name,
            location: draft.location.as_deref(),
            start_date: draft.start_date.map(|date| date.to_string()),
            end_date: draft.end_date.map(|date| date.to_string()),
            status: ProjectStatus::Active.as_str(),
            display_order: draft.display_order,
        })
        .execute(conn)?;
    let job_id: i64 = conn.last_insert_id()?;

    info!(job_id, job_number = %draft.job_number, "Created job");
    Ok(job_id)
}
}
