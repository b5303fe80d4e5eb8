// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_employee, create_test_today, date, project_day_row, project_row, unassigned_row,
    union_row,
};
use crate::{
    AssignmentView, EmployeeDayRow, ProjectView, UnionViewStrategy, UnionWithEmployees,
    build_employee_views, build_project_views, build_union_views,
};
use crew_schedule_domain::{Location, LocationState, ProjectStatus, ScheduleDate};

fn union_members(groups: &[UnionWithEmployees]) -> Vec<i64> {
    groups
        .iter()
        .flat_map(|group| group.employees.iter().map(|view| view.employee_id))
        .collect()
}

#[test]
fn test_employee_without_record_defaults_to_union() {
    let rows: Vec<EmployeeDayRow> =
        vec![unassigned_row(create_test_employee(42, "Ada", "Lovelace", Some(1)))];

    let views: Vec<AssignmentView> = build_employee_views(&rows);

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].current_location, Location::Union);
    assert_eq!(views[0].job_id, None);
    assert!(!views[0].is_highlighted);
    assert_eq!(views[0].union_name.as_deref(), Some("Carpenters"));
}

#[test]
fn test_inactive_employees_are_excluded_everywhere() {
    let mut retired = create_test_employee(9, "Old", "Timer", Some(1));
    retired.is_active = false;
    let on: ScheduleDate = date("2024-06-12");
    let rows: Vec<EmployeeDayRow> = vec![
        project_row(retired.clone(), on, 7, ProjectStatus::Active),
        unassigned_row(create_test_employee(1, "Ada", "Lovelace", Some(1))),
    ];

    let employees: Vec<AssignmentView> = build_employee_views(&rows);
    let unions: Vec<UnionWithEmployees> = build_union_views(on, create_test_today(), &rows);

    assert!(employees.iter().all(|view| view.employee_id != 9));
    assert_eq!(union_members(&unions), vec![1]);
}

#[test]
fn test_employee_ordering_uses_display_order_then_names() {
    let on: ScheduleDate = date("2024-06-12");
    let mut ordered_second = project_row(
        create_test_employee(1, "Zed", "Alpha", Some(1)),
        on,
        7,
        ProjectStatus::Active,
    );
    ordered_second.assignment.as_mut().unwrap().display_order = Some(1);
    let mut ordered_first = project_row(
        create_test_employee(2, "Yan", "Beta", Some(1)),
        on,
        7,
        ProjectStatus::Active,
    );
    ordered_first.assignment.as_mut().unwrap().display_order = Some(0);
    let rows: Vec<EmployeeDayRow> = vec![
        unassigned_row(create_test_employee(3, "Bea", "Smith", Some(1))),
        unassigned_row(create_test_employee(4, "Bea", "Adams", Some(2))),
        unassigned_row(create_test_employee(5, "Al", "Zulu", None)),
        ordered_second,
        ordered_first,
    ];

    let ids: Vec<i64> = build_employee_views(&rows)
        .iter()
        .map(|view| view.employee_id)
        .collect();

    assert_eq!(ids, vec![2, 1, 5, 4, 3]);
}

#[test]
fn test_moved_employee_leaves_every_union() {
    // Example scenario: today 2024-06-10, employee 42 moved to project 7 on 06-12.
    let on: ScheduleDate = date("2024-06-12");
    let rows: Vec<EmployeeDayRow> = vec![
        project_row(
            create_test_employee(42, "Ada", "Lovelace", Some(1)),
            on,
            7,
            ProjectStatus::Active,
        ),
        unassigned_row(create_test_employee(43, "Grace", "Hopper", Some(1))),
    ];

    let unions: Vec<UnionWithEmployees> = build_union_views(on, create_test_today(), &rows);
    let employees: Vec<AssignmentView> = build_employee_views(&rows);

    assert_eq!(union_members(&unions), vec![43]);
    let moved: &AssignmentView = employees.iter().find(|view| view.employee_id == 42).unwrap();
    assert_eq!(moved.current_location, Location::Project);
    assert_eq!(moved.job_id, Some(7));
}

#[test]
fn test_inactive_project_releases_employee_for_current_dates() {
    let on: ScheduleDate = date("2024-06-12");
    let rows: Vec<EmployeeDayRow> = vec![project_row(
        create_test_employee(42, "Ada", "Lovelace", Some(1)),
        on,
        7,
        ProjectStatus::Inactive,
    )];

    let unions: Vec<UnionWithEmployees> = build_union_views(on, create_test_today(), &rows);
    let employees: Vec<AssignmentView> = build_employee_views(&rows);

    assert_eq!(union_members(&unions), vec![42]);
    assert_eq!(employees[0].current_location, Location::Union);
    assert_eq!(employees[0].job_id, None);
}

#[test]
fn test_inactive_project_releases_employee_for_past_dates() {
    let on: ScheduleDate = date("2024-06-03");
    let rows: Vec<EmployeeDayRow> = vec![
        project_row(
            create_test_employee(42, "Ada", "Lovelace", Some(1)),
            on,
            7,
            ProjectStatus::Inactive,
        ),
        project_row(
            create_test_employee(43, "Grace", "Hopper", Some(1)),
            on,
            8,
            ProjectStatus::Active,
        ),
        union_row(create_test_employee(44, "Alan", "Turing", Some(2)), on, true),
        unassigned_row(create_test_employee(45, "Edsger", "Dijkstra", Some(2))),
    ];

    assert_eq!(
        UnionViewStrategy::for_date(on, create_test_today()),
        UnionViewStrategy::Historical
    );
    let unions: Vec<UnionWithEmployees> = build_union_views(on, create_test_today(), &rows);

    assert_eq!(union_members(&unions), vec![42, 44, 45]);
}

#[test]
fn test_today_uses_live_strategy() {
    assert_eq!(
        UnionViewStrategy::for_date(create_test_today(), create_test_today()),
        UnionViewStrategy::Live
    );
}

#[test]
fn test_strategies_admit_the_same_states() {
    let states: Vec<LocationState> = vec![
        LocationState::union_default(),
        LocationState {
            location: Location::Union,
            job_id: None,
            is_highlighted: true,
            display_order: Some(2),
        },
        LocationState {
            location: Location::Project,
            job_id: Some(7),
            is_highlighted: true,
            display_order: None,
        },
    ];

    for state in &states {
        assert_eq!(
            UnionViewStrategy::Historical.admits(state),
            UnionViewStrategy::Live.admits(state)
        );
    }
    assert!(UnionViewStrategy::Live.admits(&states[0]));
    assert!(!UnionViewStrategy::Historical.admits(&states[2]));
}

#[test]
fn test_unions_grouped_by_name_with_unaffiliated_last() {
    let on: ScheduleDate = date("2024-06-12");
    let rows: Vec<EmployeeDayRow> = vec![
        unassigned_row(create_test_employee(1, "A", "A", None)),
        unassigned_row(create_test_employee(2, "B", "B", Some(2))),
        unassigned_row(create_test_employee(3, "C", "C", Some(1))),
        unassigned_row(create_test_employee(4, "D", "D", Some(2))),
    ];

    let unions: Vec<UnionWithEmployees> = build_union_views(on, create_test_today(), &rows);

    let names: Vec<Option<&str>> = unions
        .iter()
        .map(|group| group.union_name.as_deref())
        .collect();
    assert_eq!(names, vec![Some("Carpenters"), Some("Electricians"), None]);
    assert_eq!(unions[1].union_id, Some(2));
    assert_eq!(unions[1].employees.len(), 2);
    assert_eq!(unions[2].union_id, None);
}

#[test]
fn test_duplicate_rows_do_not_duplicate_union_members() {
    let on: ScheduleDate = date("2024-06-12");
    let employee = create_test_employee(42, "Ada", "Lovelace", Some(1));
    let rows: Vec<EmployeeDayRow> = vec![
        unassigned_row(employee.clone()),
        union_row(employee, on, false),
    ];

    let unions: Vec<UnionWithEmployees> = build_union_views(on, create_test_today(), &rows);

    assert_eq!(union_members(&unions), vec![42]);
}

#[test]
fn test_views_agree_on_every_employee() {
    let on: ScheduleDate = date("2024-06-12");
    let rows: Vec<EmployeeDayRow> = vec![
        project_row(
            create_test_employee(1, "A", "A", Some(1)),
            on,
            7,
            ProjectStatus::Active,
        ),
        project_row(
            create_test_employee(2, "B", "B", Some(1)),
            on,
            8,
            ProjectStatus::Inactive,
        ),
        union_row(create_test_employee(3, "C", "C", Some(2)), on, false),
        unassigned_row(create_test_employee(4, "D", "D", None)),
    ];

    let employees: Vec<AssignmentView> = build_employee_views(&rows);
    let mut in_unions: Vec<i64> = union_members(&build_union_views(on, create_test_today(), &rows));
    in_unions.sort_unstable();
    let mut union_located: Vec<i64> = employees
        .iter()
        .filter(|view| view.current_location == Location::Union)
        .map(|view| view.employee_id)
        .collect();
    union_located.sort_unstable();

    assert_eq!(in_unions, union_located);
    assert_eq!(union_located, vec![2, 3, 4]);
}

#[test]
fn test_projects_default_order_to_id_and_skip_inactive() {
    let on: ScheduleDate = date("2024-06-12");
    let rows = vec![
        project_day_row(3, ProjectStatus::Active, None),
        project_day_row(9, ProjectStatus::Active, Some((on, 1, true))),
        project_day_row(5, ProjectStatus::Inactive, Some((on, 0, false))),
        project_day_row(2, ProjectStatus::Active, None),
    ];

    let views: Vec<ProjectView> = build_project_views(&rows);

    let ids: Vec<i64> = views.iter().map(|view| view.job_id).collect();
    assert_eq!(ids, vec![9, 2, 3]);
    assert!(views[0].rain_day);
    assert_eq!(views[1].display_order, 2);
    assert!(!views[2].rain_day);
}

#[test]
fn test_assignment_view_serializes_snake_case() {
    let rows: Vec<EmployeeDayRow> =
        vec![unassigned_row(create_test_employee(42, "Ada", "Lovelace", Some(1)))];
    let json: serde_json::Value = serde_json::to_value(&build_employee_views(&rows)[0]).unwrap();

    assert_eq!(json["current_location"], "union");
    assert_eq!(json["is_highlighted"], false);
    assert!(json["job_id"].is_null());
}
