// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment store mutations.
//!
//! Every write replaces the whole `(schedule_date, employee_id)` row with
//! `REPLACE INTO`, which both backends support. The row is read first and
//! the new value computed from it inside one transaction, so the existence
//! checks and the write commit or roll back together.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use num_traits::ToPrimitive;
use tracing::{debug, info};

use crate::data_models::{ScheduleRow, parse_stored_status};
use crate::diesel_schema::{employees, jobs, schedule};
use crate::error::PersistenceError;
use crew_schedule_domain::{AssignmentRecord, Location, ProjectStatus, ScheduleDate};

backend_fn! {
/// Moves an employee onto a project, or back to their union when
/// `target_job_id` is `None`.
///
/// Succeeds whether or not a record already existed. Moving onto a project
/// highlights the employee; moving to the union clears the project and the
/// highlight. The per-project display order is kept only when the employee
/// is already on the target project.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `date` - The schedule date, already checked against the editable window
/// * `employee_id` - The employee to move
/// * `target_job_id` - The target project, if any
///
/// # Errors
///
/// Returns an error if:
/// - The employee does not exist (`EmployeeNotFound`)
/// - The project does not exist (`ProjectNotFound`) or is inactive (`ProjectInactive`)
/// - The database write fails; nothing is written in that case
pub fn move_employee(
    conn: &mut _,
    date: ScheduleDate,
    employee_id: i64,
    target_job_id: Option<i64>,
) -> Result<AssignmentRecord, PersistenceError> {
    let date_text: String = date.to_string();

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let employee_count: i64 = employees::table
            .filter(employees::employee_id.eq(employee_id))
            .count()
            .get_result(conn)?;
        if employee_count == 0 {
            return Err(PersistenceError::EmployeeNotFound(employee_id));
        }

        if let Some(job_id) = target_job_id {
            let status: Option<String> = jobs::table
                .filter(jobs::job_id.eq(job_id))
                .select(jobs::status)
                .first(conn)
                .optional()?;
            match status.as_deref().map(parse_stored_status).transpose()? {
                None => return Err(PersistenceError::ProjectNotFound(job_id)),
                Some(ProjectStatus::Inactive) => {
                    return Err(PersistenceError::ProjectInactive(job_id));
                }
                Some(ProjectStatus::Active) => {}
            }
        }

        let existing: Option<ScheduleRow> = schedule::table
            .filter(schedule::schedule_date.eq(&date_text))
            .filter(schedule::employee_id.eq(employee_id))
            .select(ScheduleRow::as_select())
            .first(conn)
            .optional()?;

        let mut record: AssignmentRecord =
            AssignmentRecord::for_move(date, employee_id, target_job_id);
        let previous: Option<AssignmentRecord> =
            existing.map(ScheduleRow::into_domain).transpose()?;
        let staying_on_project: bool = previous.as_ref().is_some_and(|previous| {
            previous.current_location == Location::Project && previous.job_id == target_job_id
        });
        if staying_on_project {
            record.display_order = previous.and_then(|previous| previous.display_order);
        }

        diesel::replace_into(schedule::table)
            .values(ScheduleRow::from_record(&record))
            .execute(conn)?;

        info!(
            date = %date,
            employee_id,
            job_id = ?target_job_id,
            "Moved employee"
        );
        Ok(record)
    })
}
}

backend_fn! {
/// Sets only the highlight flag of an employee's record.
///
/// The stored location, project and order are preserved. With no stored
/// record the employee is written at the union default.
///
/// # Errors
///
/// Returns `EmployeeNotFound` if the employee does not exist, or a database
/// error.
pub fn set_highlight(
    conn: &mut _,
    date: ScheduleDate,
    employee_id: i64,
    is_highlighted: bool,
) -> Result<AssignmentRecord, PersistenceError> {
    let date_text: String = date.to_string();

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let employee_count: i64 = employees::table
            .filter(employees::employee_id.eq(employee_id))
            .count()
            .get_result(conn)?;
        if employee_count == 0 {
            return Err(PersistenceError::EmployeeNotFound(employee_id));
        }

        let existing: Option<ScheduleRow> = schedule::table
            .filter(schedule::schedule_date.eq(&date_text))
            .filter(schedule::employee_id.eq(employee_id))
            .select(ScheduleRow::as_select())
            .first(conn)
            .optional()?;

        let mut record: AssignmentRecord = match existing {
            Some(row) => row.into_domain()?,
            None => AssignmentRecord::for_move(date, employee_id, None),
        };
        record.is_highlighted = is_highlighted;

        diesel::replace_into(schedule::table)
            .values(ScheduleRow::from_record(&record))
            .execute(conn)?;

        debug!(date = %date, employee_id, is_highlighted, "Set highlight");
        Ok(record)
    })
}
}

backend_fn! {
/// Orders the crew of one project for a date.
///
/// Each listed employee gets `display_order` equal to their position.
///
/// # Errors
///
/// Returns an error if:
/// - The project does not exist (`ProjectNotFound`)
/// - A listed employee is not on the project that date (`NotAssignedToProject`)
/// - The list is too long to index with the stored integer type
pub fn reorder_employees(
    conn: &mut _,
    date: ScheduleDate,
    job_id: i64,
    employee_ids: &[i64],
) -> Result<(), PersistenceError> {
    let date_text: String = date.to_string();

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let job_count: i64 = jobs::table
            .filter(jobs::job_id.eq(job_id))
            .count()
            .get_result(conn)?;
        if job_count == 0 {
            return Err(PersistenceError::ProjectNotFound(job_id));
        }

        for (index, employee_id) in employee_ids.iter().enumerate() {
            let display_order: i32 = index.to_i32().ok_or_else(|| {
                PersistenceError::DisplayOrderOutOfRange(index.to_string())
            })?;

            let rows_affected: usize = diesel::update(schedule::table)
                .filter(schedule::schedule_date.eq(&date_text))
                .filter(schedule::employee_id.eq(*employee_id))
                .filter(schedule::current_location.eq(Location::Project.as_str()))
                .filter(schedule::job_id.eq(job_id))
                .set(schedule::display_order.eq(Some(display_order)))
                .execute(conn)?;

            if rows_affected == 0 {
                return Err(PersistenceError::NotAssignedToProject {
                    employee_id: *employee_id,
                    job_id,
                    date,
                });
            }
        }

        info!(date = %date, job_id, count = employee_ids.len(), "Reordered employees");
        Ok(())
    })
}
}
