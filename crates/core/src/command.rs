// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crew_schedule_domain::{ProjectStatus, ScheduleDate};

/// A command represents caller intent as data only.
///
/// Dates are carried exactly as received; `apply` is responsible for parsing
/// them and enforcing the editable window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place an employee on a project, or back in their union pool.
    MoveEmployee {
        /// Raw schedule date.
        date: String,
        /// The employee being moved.
        employee_id: i64,
        /// Target project; `None` returns the employee to their union.
        target_job_id: Option<i64>,
    },
    /// Change only the highlight flag of an employee's record.
    SetHighlight {
        /// Raw schedule date.
        date: String,
        /// The employee.
        employee_id: i64,
        /// New flag value.
        is_highlighted: bool,
    },
    /// Give projects an explicit order for a date.
    ReorderProjects {
        /// Raw schedule date.
        date: String,
        /// Projects in their new order.
        job_ids: Vec<i64>,
    },
    /// Give the employees on one project an explicit order for a date.
    ReorderEmployees {
        /// Raw schedule date.
        date: String,
        /// The project whose crew is reordered.
        job_id: i64,
        /// Employees in their new order.
        employee_ids: Vec<i64>,
    },
    /// Flip the rain-day marker for a project on a date.
    ToggleRainDay {
        /// Raw schedule date.
        date: String,
        /// The project.
        job_id: i64,
    },
    /// Carry a date's schedule forward to the following day.
    Finalize {
        /// Raw source date.
        date: String,
    },
    /// Activate or deactivate a project.
    SetProjectStatus {
        /// The project.
        job_id: i64,
        /// The requested status.
        status: ProjectStatus,
    },
}

/// A validated command, ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// See `Command::MoveEmployee`.
    MoveEmployee {
        /// Schedule date, inside the editable window.
        date: ScheduleDate,
        /// The employee being moved.
        employee_id: i64,
        /// Target project; `None` returns the employee to their union.
        target_job_id: Option<i64>,
    },
    /// See `Command::SetHighlight`.
    SetHighlight {
        /// Schedule date, inside the editable window.
        date: ScheduleDate,
        /// The employee.
        employee_id: i64,
        /// New flag value.
        is_highlighted: bool,
    },
    /// See `Command::ReorderProjects`.
    ReorderProjects {
        /// Schedule date, inside the editable window.
        date: ScheduleDate,
        /// Distinct projects in their new order.
        job_ids: Vec<i64>,
    },
    /// See `Command::ReorderEmployees`.
    ReorderEmployees {
        /// Schedule date, inside the editable window.
        date: ScheduleDate,
        /// The project whose crew is reordered.
        job_id: i64,
        /// Distinct employees in their new order.
        employee_ids: Vec<i64>,
    },
    /// See `Command::ToggleRainDay`.
    ToggleRainDay {
        /// Schedule date, inside the editable window.
        date: ScheduleDate,
        /// The project.
        job_id: i64,
    },
    /// See `Command::Finalize`.
    Finalize {
        /// Source date, inside the editable window.
        date: ScheduleDate,
        /// The day the schedule is copied into. Not window-checked.
        next_date: ScheduleDate,
    },
    /// See `Command::SetProjectStatus`.
    SetProjectStatus {
        /// The project.
        job_id: i64,
        /// The requested status.
        status: ProjectStatus,
        /// First date whose assignment records follow the new status.
        effective_from: ScheduleDate,
    },
}

impl Mutation {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MoveEmployee { .. } => "MoveEmployee",
            Self::SetHighlight { .. } => "SetHighlight",
            Self::ReorderProjects { .. } => "ReorderProjects",
            Self::ReorderEmployees { .. } => "ReorderEmployees",
            Self::ToggleRainDay { .. } => "ToggleRainDay",
            Self::Finalize { .. } => "Finalize",
            Self::SetProjectStatus { .. } => "SetProjectStatus",
        }
    }
}
