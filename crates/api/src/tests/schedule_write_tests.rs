// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule write handler tests.
//!
//! Every write is checked against the editable window before the store is
//! touched, so rejected requests must leave no records behind.

use crew_schedule::AssignmentView;
use crew_schedule_domain::{Location, ProjectStatus, RangeViolation};

use crate::{
    ApiError, EmployeesForDateResponse, FinalizeRequest, FinalizeResponse, MoveEmployeeRequest,
    MoveEmployeeResponse, ProjectsForDateResponse, RainDayResponse, ReorderEmployeesRequest,
    ReorderProjectsRequest, RequestActor, SetHighlightRequest, ToggleRainDayRequest,
    UpdateProjectStatusRequest, UpdateProjectStatusResponse, finalize, get_employees_for_date,
    get_projects_for_date, move_employee, reorder_employees, reorder_projects, set_highlight,
    toggle_rain_day, update_project_status,
};

use super::helpers::{Fixture, create_fixture, create_test_actor, create_test_today, date};

fn move_request(date: &str, employee_id: i64, target_project_id: Option<i64>) -> MoveEmployeeRequest {
    MoveEmployeeRequest {
        date: date.to_string(),
        employee_id,
        target_project_id,
    }
}

// ============================================================================
// Move Employee
// ============================================================================

#[test]
fn test_move_to_project_highlights_employee() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();

    let response: MoveEmployeeResponse = move_employee(
        &mut fixture.persistence,
        &move_request("2024-06-12", fixture.alice, Some(fixture.tower)),
        &actor,
        create_test_today(),
    )
    .unwrap();

    assert_eq!(response.date, date("2024-06-12"));
    assert_eq!(response.current_location, Location::Project);
    assert_eq!(response.job_id, Some(fixture.tower));
    assert!(response.is_highlighted);
}

#[test]
fn test_move_back_to_union_clears_project() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();
    move_employee(
        &mut fixture.persistence,
        &move_request("2024-06-12", fixture.alice, Some(fixture.tower)),
        &actor,
        create_test_today(),
    )
    .unwrap();

    let response: MoveEmployeeResponse = move_employee(
        &mut fixture.persistence,
        &move_request("2024-06-12", fixture.alice, None),
        &actor,
        create_test_today(),
    )
    .unwrap();

    assert_eq!(response.current_location, Location::Union);
    assert_eq!(response.job_id, None);
    assert!(!response.is_highlighted);
}

#[test]
fn test_move_accepts_today_and_last_window_day() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();

    for day in ["2024-06-10", "2024-06-17"] {
        let result: Result<MoveEmployeeResponse, ApiError> = move_employee(
            &mut fixture.persistence,
            &move_request(day, fixture.bob, Some(fixture.bridge)),
            &actor,
            create_test_today(),
        );
        assert!(result.is_ok(), "{day} should be editable");
    }
}

#[test]
fn test_move_rejects_past_date_without_writing() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();

    let result: Result<MoveEmployeeResponse, ApiError> = move_employee(
        &mut fixture.persistence,
        &move_request("2024-06-09", fixture.alice, Some(fixture.tower)),
        &actor,
        create_test_today(),
    );

    assert_eq!(
        result.unwrap_err(),
        ApiError::DateOutOfRange {
            date: String::from("2024-06-09"),
            violation: RangeViolation::Past,
        }
    );
    let view: EmployeesForDateResponse =
        get_employees_for_date(&mut fixture.persistence, "2024-06-09").unwrap();
    assert!(
        view.employees
            .iter()
            .all(|e| e.current_location == Location::Union)
    );
}

#[test]
fn test_move_rejects_date_beyond_window() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();

    let result: Result<MoveEmployeeResponse, ApiError> = move_employee(
        &mut fixture.persistence,
        &move_request("2024-06-18", fixture.alice, Some(fixture.tower)),
        &actor,
        create_test_today(),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::DateOutOfRange {
            violation: RangeViolation::Future,
            ..
        }
    ));
}

#[test]
fn test_move_unknown_employee_is_not_found() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();

    let result: Result<MoveEmployeeResponse, ApiError> = move_employee(
        &mut fixture.persistence,
        &move_request("2024-06-12", 9_999, Some(fixture.tower)),
        &actor,
        create_test_today(),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::ResourceNotFound { resource_type, .. } if resource_type == "Employee"
    ));
}

#[test]
fn test_move_onto_inactive_project_is_rule_violation() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();
    update_project_status(
        &mut fixture.persistence,
        &UpdateProjectStatusRequest {
            job_id: fixture.bridge,
            status: String::from("Inactive"),
        },
        &actor,
        create_test_today(),
    )
    .unwrap();

    let result: Result<MoveEmployeeResponse, ApiError> = move_employee(
        &mut fixture.persistence,
        &move_request("2024-06-12", fixture.alice, Some(fixture.bridge)),
        &actor,
        create_test_today(),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::DomainRuleViolation { rule, .. } if rule == "active_project"
    ));
}

// ============================================================================
// Highlight
// ============================================================================

#[test]
fn test_highlight_keeps_placement() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();
    move_employee(
        &mut fixture.persistence,
        &move_request("2024-06-12", fixture.carol, Some(fixture.bridge)),
        &actor,
        create_test_today(),
    )
    .unwrap();

    set_highlight(
        &mut fixture.persistence,
        &SetHighlightRequest {
            date: String::from("2024-06-12"),
            employee_id: fixture.carol,
            is_highlighted: false,
        },
        &actor,
        create_test_today(),
    )
    .unwrap();

    let view: EmployeesForDateResponse =
        get_employees_for_date(&mut fixture.persistence, "2024-06-12").unwrap();
    let carol: &AssignmentView = view
        .employees
        .iter()
        .find(|e| e.employee_id == fixture.carol)
        .unwrap();
    assert_eq!(carol.current_location, Location::Project);
    assert_eq!(carol.job_id, Some(fixture.bridge));
    assert!(!carol.is_highlighted);
}

#[test]
fn test_highlight_rejects_past_date() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();

    let result: Result<(), ApiError> = set_highlight(
        &mut fixture.persistence,
        &SetHighlightRequest {
            date: String::from("2024-06-01"),
            employee_id: fixture.alice,
            is_highlighted: true,
        },
        &actor,
        create_test_today(),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::DateOutOfRange { .. }
    ));
}

// ============================================================================
// Ordering and Rain Days
// ============================================================================

#[test]
fn test_reorder_projects_changes_listing() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();

    reorder_projects(
        &mut fixture.persistence,
        &ReorderProjectsRequest {
            date: String::from("2024-06-12"),
            job_ids: vec![fixture.bridge, fixture.tower],
        },
        &actor,
        create_test_today(),
    )
    .unwrap();

    let view: ProjectsForDateResponse =
        get_projects_for_date(&mut fixture.persistence, "2024-06-12").unwrap();
    let ids: Vec<i64> = view.projects.iter().map(|p| p.job_id).collect();
    assert_eq!(ids, vec![fixture.bridge, fixture.tower]);
}

#[test]
fn test_reorder_projects_rejects_duplicates() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();

    let result: Result<(), ApiError> = reorder_projects(
        &mut fixture.persistence,
        &ReorderProjectsRequest {
            date: String::from("2024-06-12"),
            job_ids: vec![fixture.tower, fixture.tower],
        },
        &actor,
        create_test_today(),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::InvalidInput { .. }
    ));
}

#[test]
fn test_reorder_employees_orders_crew() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();
    for employee_id in [fixture.alice, fixture.bob] {
        move_employee(
            &mut fixture.persistence,
            &move_request("2024-06-12", employee_id, Some(fixture.tower)),
            &actor,
            create_test_today(),
        )
        .unwrap();
    }

    reorder_employees(
        &mut fixture.persistence,
        &ReorderEmployeesRequest {
            date: String::from("2024-06-12"),
            job_id: fixture.tower,
            employee_ids: vec![fixture.bob, fixture.alice],
        },
        &actor,
        create_test_today(),
    )
    .unwrap();

    let view: EmployeesForDateResponse =
        get_employees_for_date(&mut fixture.persistence, "2024-06-12").unwrap();
    let ordered: Vec<i64> = view
        .employees
        .iter()
        .filter(|e| e.job_id == Some(fixture.tower))
        .map(|e| e.employee_id)
        .collect();
    assert_eq!(ordered, vec![fixture.bob, fixture.alice]);
}

#[test]
fn test_reorder_employees_rejects_unassigned_employee() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();

    let result: Result<(), ApiError> = reorder_employees(
        &mut fixture.persistence,
        &ReorderEmployeesRequest {
            date: String::from("2024-06-12"),
            job_id: fixture.tower,
            employee_ids: vec![fixture.carol],
        },
        &actor,
        create_test_today(),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::DomainRuleViolation { rule, .. } if rule == "assigned_to_project"
    ));
}

#[test]
fn test_toggle_rain_day_flips_and_reports_state() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();
    let request: ToggleRainDayRequest = ToggleRainDayRequest {
        date: String::from("2024-06-12"),
        job_id: fixture.tower,
    };

    let first: RainDayResponse = toggle_rain_day(
        &mut fixture.persistence,
        &request,
        &actor,
        create_test_today(),
    )
    .unwrap();
    let second: RainDayResponse = toggle_rain_day(
        &mut fixture.persistence,
        &request,
        &actor,
        create_test_today(),
    )
    .unwrap();

    assert!(first.rain_day);
    assert!(!second.rain_day);
    assert_eq!(first.job_id, fixture.tower);
    assert_eq!(first.date, date("2024-06-12"));
}

// ============================================================================
// Project Status
// ============================================================================

#[test]
fn test_deactivation_reports_moved_assignments() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();
    move_employee(
        &mut fixture.persistence,
        &move_request("2024-06-11", fixture.alice, Some(fixture.tower)),
        &actor,
        create_test_today(),
    )
    .unwrap();
    move_employee(
        &mut fixture.persistence,
        &move_request("2024-06-12", fixture.bob, Some(fixture.tower)),
        &actor,
        create_test_today(),
    )
    .unwrap();

    let response: UpdateProjectStatusResponse = update_project_status(
        &mut fixture.persistence,
        &UpdateProjectStatusRequest {
            job_id: fixture.tower,
            status: String::from("Inactive"),
        },
        &actor,
        create_test_today(),
    )
    .unwrap();

    assert_eq!(response.status, ProjectStatus::Inactive);
    assert_eq!(response.assignments_updated, 2);
}

#[test]
fn test_unknown_status_is_invalid_input() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();

    let result: Result<UpdateProjectStatusResponse, ApiError> = update_project_status(
        &mut fixture.persistence,
        &UpdateProjectStatusRequest {
            job_id: fixture.tower,
            status: String::from("Paused"),
        },
        &actor,
        create_test_today(),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::InvalidInput { field, .. } if field == "status"
    ));
}

// ============================================================================
// Finalize
// ============================================================================

#[test]
fn test_finalize_copies_day_forward() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();
    move_employee(
        &mut fixture.persistence,
        &move_request("2024-06-10", fixture.alice, Some(fixture.tower)),
        &actor,
        create_test_today(),
    )
    .unwrap();

    let response: FinalizeResponse = finalize(
        &mut fixture.persistence,
        &FinalizeRequest {
            date: String::from("2024-06-10"),
        },
        &actor,
        create_test_today(),
    )
    .unwrap();

    assert_eq!(response.next_date, date("2024-06-11"));
    assert_eq!(response.assignments_copied, 1);
    let next: EmployeesForDateResponse =
        get_employees_for_date(&mut fixture.persistence, "2024-06-11").unwrap();
    let alice: &AssignmentView = next
        .employees
        .iter()
        .find(|e| e.employee_id == fixture.alice)
        .unwrap();
    assert_eq!(alice.job_id, Some(fixture.tower));
}

#[test]
fn test_finalize_last_window_day_writes_past_window() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();

    let response: FinalizeResponse = finalize(
        &mut fixture.persistence,
        &FinalizeRequest {
            date: String::from("2024-06-17"),
        },
        &actor,
        create_test_today(),
    )
    .unwrap();

    assert_eq!(response.next_date, date("2024-06-18"));
}

#[test]
fn test_finalize_rejects_past_date() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();

    let result: Result<FinalizeResponse, ApiError> = finalize(
        &mut fixture.persistence,
        &FinalizeRequest {
            date: String::from("2024-06-09"),
        },
        &actor,
        create_test_today(),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::DateOutOfRange {
            violation: RangeViolation::Past,
            ..
        }
    ));
}

#[test]
fn test_move_response_uses_wire_field_names() {
    let mut fixture: Fixture = create_fixture();
    let actor: RequestActor = create_test_actor();

    let response: MoveEmployeeResponse = move_employee(
        &mut fixture.persistence,
        &move_request("2024-06-12", fixture.alice, Some(fixture.tower)),
        &actor,
        create_test_today(),
    )
    .unwrap();

    let json: serde_json::Value = serde_json::to_value(&response).unwrap();
    assert_eq!(json["employeeId"], fixture.alice);
    assert_eq!(json["currentLocation"], "project");
    assert_eq!(json["jobId"], fixture.tower);
    assert_eq!(json["isHighlighted"], true);
    assert_eq!(json["date"], "2024-06-12");
}
