// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Finalize: carry one date's schedule forward to the next day.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::data_models::{FinalizeSummary, ProjectOrderRow, ScheduleRow};
use crate::diesel_schema::{project_order, rain_days, schedule};
use crate::error::PersistenceError;
use crew_schedule_domain::{AssignmentRecord, ProjectOrderRecord, ScheduleDate};

backend_fn! {
/// Copies every assignment and project order record from `date` to
/// `next_date` in one transaction.
///
/// Existing records on `next_date` with the same key are overwritten.
/// Copied project orders have `rain_day` cleared, and any rain-day marker
/// already stored for a copied project on `next_date` is removed so the
/// marker set agrees with the order flag. Records on `next_date` with no
/// counterpart on `date` are kept.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `date` - The source date
/// * `next_date` - The day after `date`
///
/// # Errors
///
/// Returns an error if any read or write fails; nothing is copied then.
pub fn finalize(
    conn: &mut _,
    date: ScheduleDate,
    next_date: ScheduleDate,
) -> Result<FinalizeSummary, PersistenceError> {
    let date_text: String = date.to_string();
    let next_text: String = next_date.to_string();

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let assignments: Vec<AssignmentRecord> = schedule::table
            .filter(schedule::schedule_date.eq(&date_text))
            .select(ScheduleRow::as_select())
            .load::<ScheduleRow>(conn)?
            .into_iter()
            .map(ScheduleRow::into_domain)
            .collect::<Result<_, _>>()?;

        for record in &assignments {
            diesel::replace_into(schedule::table)
                .values(ScheduleRow::from_record(&record.carried_to(next_date)))
                .execute(conn)?;
        }
        debug!(count = assignments.len(), "Copied assignment records");

        let orders: Vec<ProjectOrderRecord> = project_order::table
            .filter(project_order::schedule_date.eq(&date_text))
            .select(ProjectOrderRow::as_select())
            .load::<ProjectOrderRow>(conn)?
            .into_iter()
            .map(ProjectOrderRow::into_domain)
            .collect::<Result<_, _>>()?;

        for record in &orders {
            diesel::replace_into(project_order::table)
                .values(ProjectOrderRow::from_record(&record.carried_to(next_date)))
                .execute(conn)?;
        }
        debug!(count = orders.len(), "Copied project order records");

        let copied_jobs: Vec<i64> = orders.iter().map(|record| record.job_id).collect();
        let cleared: usize = diesel::delete(
            rain_days::table
                .filter(rain_days::rain_date.eq(&next_text))
                .filter(rain_days::job_id.eq_any(copied_jobs)),
        )
        .execute(conn)?;
        debug!(count = cleared, "Cleared rain-day markers on next date");

        info!(
            date = %date,
            next_date = %next_date,
            assignments = assignments.len(),
            project_orders = orders.len(),
            "Finalized schedule"
        );

        Ok(FinalizeSummary {
            next_date,
            assignments_copied: assignments.len(),
            project_orders_copied: orders.len(),
        })
    })
}
}
