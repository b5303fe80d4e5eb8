// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project activation and deactivation.
//!
//! Changing a job's status also rewrites the location of every record that
//! points at it from `effective_from` onward, in the same transaction, so
//! there is never a moment where the job is inactive but its crew still
//! shows as assigned.
//!
//! Deactivation sets those records to `union` and deliberately leaves
//! `job_id` in place; reactivation flips the same records back to `project`.
//! Employees explicitly moved to their union in between have `job_id` cleared
//! and are not restored.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::diesel_schema::{jobs, schedule};
use crate::error::PersistenceError;
use crew_schedule_domain::{Location, ProjectStatus, ScheduleDate};

backend_fn! {
/// Sets a job's status and applies the matching bulk record update.
///
/// Re-applying the current status is a no-op for the status column but
/// still runs the bulk update.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `job_id` - The job
/// * `status` - The new status
/// * `effective_from` - Today's business date; earlier records are untouched
///
/// # Returns
///
/// The number of assignment records whose location changed.
///
/// # Errors
///
/// Returns `ProjectNotFound` if the job does not exist, or a database error.
/// On error neither the status nor any record is changed.
pub fn set_project_status(
    conn: &mut _,
    job_id: i64,
    status: ProjectStatus,
    effective_from: ScheduleDate,
) -> Result<usize, PersistenceError> {
    let from_text: String = effective_from.to_string();
    let (from_location, to_location): (Location, Location) = match status {
        ProjectStatus::Inactive => (Location::Project, Location::Union),
        ProjectStatus::Active => (Location::Union, Location::Project),
    };

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let job_count: i64 = jobs::table
            .filter(jobs::job_id.eq(job_id))
            .count()
            .get_result(conn)?;
        if job_count == 0 {
            return Err(PersistenceError::ProjectNotFound(job_id));
        }

        diesel::update(jobs::table)
            .filter(jobs::job_id.eq(job_id))
            .set(jobs::status.eq(status.as_str()))
            .execute(conn)?;

        // Text comparison is date order for YYYY-MM-DD.
        let assignments_updated: usize = diesel::update(schedule::table)
            .filter(schedule::job_id.eq(job_id))
            .filter(schedule::schedule_date.ge(&from_text))
            .filter(schedule::current_location.eq(from_location.as_str()))
            .set(schedule::current_location.eq(to_location.as_str()))
            .execute(conn)?;

        info!(
            job_id,
            status = %status,
            effective_from = %effective_from,
            assignments_updated,
            "Set project status"
        );
        Ok(assignments_updated)
    })
}
}
