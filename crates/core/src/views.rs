// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scheduling query engine.
//!
//! The store hands back flat, typed rows for a date; this module turns them
//! into the three views the client reads. Each builder resolves locations
//! on its own through `resolve_location`, so the default for employees with
//! no record is applied identically on every path.

use crate::aggregate::GroupBuilder;
use crew_schedule_domain::{
    AssignmentRecord, Employee, Location, LocationState, Project, ProjectOrderRecord,
    ProjectStatus, ScheduleDate, is_past, resolve_location,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

/// One employee joined with their union and their record for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDayRow {
    /// The employee.
    pub employee: Employee,
    /// Name of the employee's union, if they have one.
    pub union_name: Option<String>,
    /// The stored record for the date, if any.
    pub assignment: Option<AssignmentRecord>,
    /// Current status of the project the record points at, if it exists.
    pub assigned_project_status: Option<ProjectStatus>,
}

/// One project joined with its order record for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDayRow {
    /// The project.
    pub project: Project,
    /// The stored order record for the date, if any.
    pub order: Option<ProjectOrderRecord>,
}

/// An employee's effective placement on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentView {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub union_id: Option<i64>,
    pub union_name: Option<String>,
    pub current_location: Location,
    /// Always `None` when `current_location` is `union`.
    pub job_id: Option<i64>,
    pub is_highlighted: bool,
    pub display_order: Option<i32>,
}

impl AssignmentView {
    fn from_row(row: &EmployeeDayRow, state: LocationState) -> Self {
        Self {
            employee_id: row.employee.employee_id,
            first_name: row.employee.first_name.clone(),
            last_name: row.employee.last_name.clone(),
            email: row.employee.email.clone(),
            phone: row.employee.phone.clone(),
            union_id: row.employee.union_id,
            union_name: row.union_name.clone(),
            current_location: state.location,
            job_id: state.job_id,
            is_highlighted: state.is_highlighted,
            display_order: state.display_order,
        }
    }
}

/// A project's ordering and rain-day state on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectView {
    pub job_id: i64,
    pub job_number: String,
    pub job_name: String,
    pub location: Option<String>,
    pub start_date: Option<ScheduleDate>,
    pub end_date: Option<ScheduleDate>,
    pub status: ProjectStatus,
    /// The per-date order, or the project id when none was stored.
    pub display_order: i64,
    pub rain_day: bool,
}

/// The employees available in one union's pool on a date.
///
/// Employees without a union are collected in a trailing group whose id and
/// name are both `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionWithEmployees {
    pub union_id: Option<i64>,
    pub union_name: Option<String>,
    pub employees: Vec<AssignmentView>,
}

/// How the union pool view is assembled for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnionViewStrategy {
    /// Reconstructs who was available on a date before today.
    ///
    /// Records before today were never touched by the deactivation bulk
    /// update, so employees still recorded on a now-inactive project are
    /// admitted through the inactive-project fallback alone.
    Historical,
    /// Today and later, where the bulk update has already rewritten records
    /// of inactive projects to `union` and the fallback is a backstop.
    Live,
}

impl UnionViewStrategy {
    /// Picks the strategy for reading `date`.
    #[must_use]
    pub fn for_date(date: ScheduleDate, today: ScheduleDate) -> Self {
        if is_past(date, today) {
            Self::Historical
        } else {
            Self::Live
        }
    }

    /// Returns whether an employee in `state` belongs in a union pool.
    ///
    /// Both strategies admit the same employees: no record, a `union` record,
    /// or a record on a project that is now inactive. They differ only in
    /// which of the two safety nets is expected to have done the work.
    ///
    /// The shared arm is intentional, not a missing branch: `resolve_location`
    /// already folds the inactive-project fallback into `state`, so the enum
    /// records which path a read took without changing who is admitted.
    #[must_use]
    pub const fn admits(self, state: &LocationState) -> bool {
        match self {
            Self::Historical | Self::Live => state.is_union(),
        }
    }
}

/// Builds the employees-for-date view.
///
/// Inactive employees are dropped. Ordering is `display_order` with nulls
/// last, then first name, then last name.
#[must_use]
pub fn build_employee_views(rows: &[EmployeeDayRow]) -> Vec<AssignmentView> {
    let mut views: Vec<AssignmentView> = resolve_rows(rows);
    views.sort_by(compare_assignment_views);
    views
}

/// Builds the projects-for-date view.
///
/// Only active projects are listed. A project with no order record for the
/// date sorts by its own id and is not rained out.
#[must_use]
pub fn build_project_views(rows: &[ProjectDayRow]) -> Vec<ProjectView> {
    let mut views: Vec<ProjectView> = rows
        .iter()
        .filter(|row| row.project.status.is_active())
        .map(|row| ProjectView {
            job_id: row.project.job_id,
            job_number: row.project.job_number.clone(),
            job_name: row.project.job_name.clone(),
            location: row.project.location.clone(),
            start_date: row.project.start_date,
            end_date: row.project.end_date,
            status: row.project.status,
            display_order: row
                .order
                .as_ref()
                .map_or(row.project.job_id, |order| i64::from(order.display_order)),
            rain_day: row.order.as_ref().is_some_and(|order| order.rain_day),
        })
        .collect();
    views.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| a.job_id.cmp(&b.job_id))
    });
    views
}

/// Builds the unions-with-employees view for `date`.
///
/// # Arguments
///
/// * `date` - The date being read
/// * `today` - The current business date, used to pick a strategy
/// * `rows` - Every employee row for the date
#[must_use]
pub fn build_union_views(
    date: ScheduleDate,
    today: ScheduleDate,
    rows: &[EmployeeDayRow],
) -> Vec<UnionWithEmployees> {
    let strategy: UnionViewStrategy = UnionViewStrategy::for_date(date, today);
    let pool: Vec<AssignmentView> = resolve_rows(rows)
        .into_iter()
        .filter(|view| {
            strategy.admits(&LocationState {
                location: view.current_location,
                job_id: view.job_id,
                is_highlighted: view.is_highlighted,
                display_order: view.display_order,
            })
        })
        .collect();
    group_by_union(pool)
}

/// Groups union-pool employees by union.
///
/// Each employee appears at most once; later duplicates of an id are
/// dropped. Groups are ordered by union name with the unaffiliated group
/// last, and members use the same ordering as the employees view.
#[must_use]
pub fn group_by_union(pool: Vec<AssignmentView>) -> Vec<UnionWithEmployees> {
    let mut seen: HashSet<i64> = HashSet::new();
    let mut builder: GroupBuilder<Option<i64>, AssignmentView> = GroupBuilder::new();

    for view in pool {
        if view.current_location != Location::Union || !seen.insert(view.employee_id) {
            continue;
        }
        builder.push(view.union_id, view);
    }

    let mut groups: Vec<UnionWithEmployees> = builder
        .finish()
        .into_iter()
        .map(|(union_id, mut employees)| {
            employees.sort_by(compare_assignment_views);
            let union_name: Option<String> = union_id.and_then(|_| {
                employees
                    .iter()
                    .find_map(|employee| employee.union_name.clone())
            });
            UnionWithEmployees {
                union_id,
                union_name,
                employees,
            }
        })
        .collect();

    groups.sort_by(|a, b| match (&a.union_id, &b.union_id) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a_id), Some(b_id)) => a
            .union_name
            .cmp(&b.union_name)
            .then_with(|| a_id.cmp(b_id)),
    });
    groups
}

fn resolve_rows(rows: &[EmployeeDayRow]) -> Vec<AssignmentView> {
    rows.iter()
        .filter_map(|row| {
            resolve_location(
                &row.employee,
                row.assignment.as_ref(),
                row.assigned_project_status,
            )
            .map(|state| AssignmentView::from_row(row, state))
        })
        .collect()
}

/// Orders by `display_order` (nulls last), then first name, then last name.
///
/// The employee id breaks remaining ties so the order is total.
#[must_use]
pub fn compare_assignment_views(a: &AssignmentView, b: &AssignmentView) -> Ordering {
    let by_order: Ordering = match (a.display_order, b.display_order) {
        (Some(a_order), Some(b_order)) => a_order.cmp(&b_order),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_order
        .then_with(|| a.first_name.cmp(&b.first_name))
        .then_with(|| a.last_name.cmp(&b.last_name))
        .then_with(|| a.employee_id.cmp(&b.employee_id))
}
