// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EmployeeDayRow, ProjectDayRow};
use crew_schedule_domain::{
    AssignmentRecord, Employee, Location, Project, ProjectOrderRecord, ProjectStatus,
    ScheduleDate,
};

pub fn date(value: &str) -> ScheduleDate {
    value.parse().unwrap()
}

pub fn create_test_today() -> ScheduleDate {
    date("2024-06-10")
}

pub fn create_test_employee(employee_id: i64, first: &str, last: &str, union_id: Option<i64>) -> Employee {
    Employee {
        employee_id,
        first_name: String::from(first),
        last_name: String::from(last),
        email: None,
        phone: None,
        union_id,
        is_active: true,
    }
}

pub fn union_name_for(union_id: Option<i64>) -> Option<String> {
    match union_id {
        Some(1) => Some(String::from("Carpenters")),
        Some(2) => Some(String::from("Electricians")),
        Some(other) => Some(format!("Local {other}")),
        None => None,
    }
}

/// A row with no assignment record for the date.
pub fn unassigned_row(employee: Employee) -> EmployeeDayRow {
    EmployeeDayRow {
        union_name: union_name_for(employee.union_id),
        employee,
        assignment: None,
        assigned_project_status: None,
    }
}

/// A row whose record places the employee on `job_id`.
pub fn project_row(employee: Employee, on: ScheduleDate, job_id: i64, status: ProjectStatus) -> EmployeeDayRow {
    EmployeeDayRow {
        union_name: union_name_for(employee.union_id),
        assignment: Some(AssignmentRecord::for_move(on, employee.employee_id, Some(job_id))),
        employee,
        assigned_project_status: Some(status),
    }
}

/// A row whose record explicitly places the employee in the union.
pub fn union_row(employee: Employee, on: ScheduleDate, is_highlighted: bool) -> EmployeeDayRow {
    EmployeeDayRow {
        union_name: union_name_for(employee.union_id),
        assignment: Some(AssignmentRecord {
            date: on,
            employee_id: employee.employee_id,
            current_location: Location::Union,
            job_id: None,
            is_highlighted,
            display_order: None,
        }),
        employee,
        assigned_project_status: None,
    }
}

pub fn create_test_project(job_id: i64, status: ProjectStatus) -> Project {
    Project {
        job_id,
        job_number: format!("J-{job_id:04}"),
        job_name: format!("Site {job_id}"),
        location: Some(String::from("Springfield")),
        start_date: None,
        end_date: None,
        status,
        display_order: None,
    }
}

pub fn project_day_row(
    job_id: i64,
    status: ProjectStatus,
    order: Option<(ScheduleDate, i32, bool)>,
) -> ProjectDayRow {
    ProjectDayRow {
        project: create_test_project(job_id, status),
        order: order.map(|(on, display_order, rain_day)| ProjectOrderRecord {
            date: on,
            job_id,
            display_order,
            rain_day,
        }),
    }
}
