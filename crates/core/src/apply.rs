// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, Mutation};
use crate::error::CoreError;
use crew_schedule_domain::{ScheduleDate, check_editable, validate_date, validate_unique_ids};

/// Validates a command against the date policy, producing a typed mutation.
///
/// Every write-side date check happens here, before the store is touched.
///
/// # Arguments
///
/// * `command` - The command to validate
/// * `today` - The current business date
///
/// # Returns
///
/// * `Ok(Mutation)` carrying parsed dates
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A date cannot be parsed (`DateError::InvalidFormat`)
/// - A date is before today or more than seven days ahead (`DateError::OutOfRange`)
/// - A reorder list repeats an id
/// - The day after a finalized date cannot be represented
pub fn apply(command: Command, today: ScheduleDate) -> Result<Mutation, CoreError> {
    match command {
        Command::MoveEmployee {
            date,
            employee_id,
            target_job_id,
        } => Ok(Mutation::MoveEmployee {
            date: editable_date(&date, today)?,
            employee_id,
            target_job_id,
        }),
        Command::SetHighlight {
            date,
            employee_id,
            is_highlighted,
        } => Ok(Mutation::SetHighlight {
            date: editable_date(&date, today)?,
            employee_id,
            is_highlighted,
        }),
        Command::ReorderProjects { date, job_ids } => {
            let date: ScheduleDate = editable_date(&date, today)?;
            validate_unique_ids("project", &job_ids)?;
            Ok(Mutation::ReorderProjects { date, job_ids })
        }
        Command::ReorderEmployees {
            date,
            job_id,
            employee_ids,
        } => {
            let date: ScheduleDate = editable_date(&date, today)?;
            validate_unique_ids("employee", &employee_ids)?;
            Ok(Mutation::ReorderEmployees {
                date,
                job_id,
                employee_ids,
            })
        }
        Command::ToggleRainDay { date, job_id } => Ok(Mutation::ToggleRainDay {
            date: editable_date(&date, today)?,
            job_id,
        }),
        Command::Finalize { date } => {
            // The next day may sit one past the window on the boundary day.
            let date: ScheduleDate = editable_date(&date, today)?;
            let next_date: ScheduleDate = date.next_day()?;
            Ok(Mutation::Finalize { date, next_date })
        }
        Command::SetProjectStatus { job_id, status } => Ok(Mutation::SetProjectStatus {
            job_id,
            status,
            effective_from: today,
        }),
    }
}

fn editable_date(raw: &str, today: ScheduleDate) -> Result<ScheduleDate, CoreError> {
    let date: ScheduleDate = validate_date(raw)?;
    check_editable(date, today)?;
    Ok(date)
}
