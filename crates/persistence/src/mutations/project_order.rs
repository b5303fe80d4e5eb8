// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project order store and rain-day mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use num_traits::ToPrimitive;
use tracing::info;

use crate::data_models::{ProjectOrderRow, flag, flag_value};
use crate::diesel_schema::{jobs, project_order, rain_days};
use crate::error::PersistenceError;
use crew_schedule_domain::{ProjectOrderRecord, ScheduleDate};

fn default_display_order(job_id: i64) -> Result<i32, PersistenceError> {
    job_id
        .to_i32()
        .ok_or_else(|| PersistenceError::DisplayOrderOutOfRange(job_id.to_string()))
}

backend_fn! {
/// Orders projects for a date.
///
/// Each listed project gets `display_order` equal to its position; an
/// existing rain-day flag is kept.
///
/// # Errors
///
/// Returns `ProjectNotFound` for an unknown project, or a database error.
/// Nothing is written on error.
pub fn reorder_projects(
    conn: &mut _,
    date: ScheduleDate,
    job_ids: &[i64],
) -> Result<(), PersistenceError> {
    let date_text: String = date.to_string();

    conn.transaction::<_, PersistenceError, _>(|conn| {
        for (index, job_id) in job_ids.iter().enumerate() {
            let job_count: i64 = jobs::table
                .filter(jobs::job_id.eq(*job_id))
                .count()
                .get_result(conn)?;
            if job_count == 0 {
                return Err(PersistenceError::ProjectNotFound(*job_id));
            }

            let rain_day: Option<i32> = project_order::table
                .filter(project_order::schedule_date.eq(&date_text))
                .filter(project_order::job_id.eq(*job_id))
                .select(project_order::rain_day)
                .first(conn)
                .optional()?;

            let display_order: i32 = index.to_i32().ok_or_else(|| {
                PersistenceError::DisplayOrderOutOfRange(index.to_string())
            })?;

            let record: ProjectOrderRecord = ProjectOrderRecord {
                date,
                job_id: *job_id,
                display_order,
                rain_day: rain_day.is_some_and(flag),
            };
            diesel::replace_into(project_order::table)
                .values(ProjectOrderRow::from_record(&record))
                .execute(conn)?;
        }

        info!(date = %date, count = job_ids.len(), "Reordered projects");
        Ok(())
    })
}
}

backend_fn! {
/// Toggles the rain-day marker for a project on a date.
///
/// The marker set entry is inserted if absent and deleted if present, and the
/// resulting flag is mirrored onto the project's order record, which is
/// created at the default order (the project id) when missing.
///
/// # Returns
///
/// The new rain-day flag.
///
/// # Errors
///
/// Returns `ProjectNotFound` for an unknown project, or a database error.
pub fn toggle_rain_day(
    conn: &mut _,
    date: ScheduleDate,
    job_id: i64,
) -> Result<bool, PersistenceError> {
    let date_text: String = date.to_string();

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let job_count: i64 = jobs::table
            .filter(jobs::job_id.eq(job_id))
            .count()
            .get_result(conn)?;
        if job_count == 0 {
            return Err(PersistenceError::ProjectNotFound(job_id));
        }

        let removed: usize = diesel::delete(
            rain_days::table
                .filter(rain_days::job_id.eq(job_id))
                .filter(rain_days::rain_date.eq(&date_text)),
        )
        .execute(conn)?;

        let rain_day: bool = removed == 0;
        if rain_day {
            diesel::insert_into(rain_days::table)
                .values((
                    rain_days::job_id.eq(job_id),
                    rain_days::rain_date.eq(&date_text),
                ))
                .execute(conn)?;
        }

        let existing: Option<ProjectOrderRow> = project_order::table
            .filter(project_order::schedule_date.eq(&date_text))
            .filter(project_order::job_id.eq(job_id))
            .select(ProjectOrderRow::as_select())
            .first(conn)
            .optional()?;

        let display_order: i32 = match existing {
            Some(row) => row.display_order,
            None => default_display_order(job_id)?,
        };

        diesel::replace_into(project_order::table)
            .values(ProjectOrderRow {
                schedule_date: date_text.clone(),
                job_id,
                display_order,
                rain_day: flag_value(rain_day),
            })
            .execute(conn)?;

        info!(date = %date, job_id, rain_day, "Toggled rain day");
        Ok(rain_day)
    })
}
}
