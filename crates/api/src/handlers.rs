// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for schedule reads, schedule writes and reference data.
//!
//! Write handlers follow one path: build a `Command` from the request,
//! validate it with `crew_schedule::apply` against the business date, then
//! hand the resulting `Mutation` to the store. No store access happens before
//! the date policy has accepted the request.

use crew_schedule::{
    Command, EmployeeDayRow, Mutation, ProjectDayRow, apply, build_employee_views,
    build_project_views, build_union_views,
};
use crew_schedule_domain::{
    AssignmentRecord, Employee, Project, ProjectStatus, ScheduleDate, Union,
    validate_date, validate_project_dates, validate_required_name,
};
use crew_schedule_persistence::{
    EmployeeDraft, FinalizeSummary, MutationOutcome, Persistence, PersistenceError, ProjectDraft,
};
use tracing::{debug, info};

use crate::actor::RequestActor;
use crate::error::{
    ApiError, translate_core_error, translate_date_error, translate_domain_error,
    translate_persistence_error,
};
use crate::request_response::{
    CreateEmployeeRequest, CreateProjectRequest, CreateUnionRequest, CreatedResponse,
    EmployeeInfo, EmployeesForDateResponse, FinalizeRequest, FinalizeResponse,
    ListEmployeesResponse, ListProjectsResponse, ListUnionsResponse, MoveEmployeeRequest,
    MoveEmployeeResponse, ProjectInfo, ProjectsForDateResponse, RainDayResponse,
    ReorderEmployeesRequest, ReorderProjectsRequest, SetEmployeeActiveRequest,
    SetHighlightRequest, ToggleRainDayRequest, UnionInfo, UnionsForDateResponse,
    UpdateProjectStatusRequest, UpdateProjectStatusResponse,
};

/// Parses a caller-supplied date for a read.
///
/// Reads accept any valid date, past or future.
fn read_date(date: &str) -> Result<ScheduleDate, ApiError> {
    validate_date(date).map_err(translate_date_error)
}

/// Validates a command and writes the resulting mutation.
fn execute(
    persistence: &mut Persistence,
    command: Command,
    today: ScheduleDate,
) -> Result<MutationOutcome, ApiError> {
    let mutation: Mutation = apply(command, today).map_err(translate_core_error)?;
    persistence
        .persist_mutation(&mutation)
        .map_err(translate_persistence_error)
}

fn unexpected_outcome(operation: &str, outcome: &MutationOutcome) -> ApiError {
    ApiError::Internal {
        message: format!("{operation} produced an unexpected outcome: {outcome:?}"),
    }
}

// ========================================================================
// Schedule Reads
// ========================================================================

/// Lists every active employee's effective placement for a date.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `date` - The requested date, in any accepted date format
///
/// # Errors
///
/// Returns an error if:
/// - The date cannot be parsed
/// - The store cannot be read
pub fn get_employees_for_date(
    persistence: &mut Persistence,
    date: &str,
) -> Result<EmployeesForDateResponse, ApiError> {
    let date: ScheduleDate = read_date(date)?;
    let rows: Vec<EmployeeDayRow> = persistence
        .load_employee_day_rows(date)
        .map_err(translate_persistence_error)?;

    Ok(EmployeesForDateResponse {
        date,
        employees: build_employee_views(&rows),
    })
}

/// Lists active projects with their order and rain-day state for a date.
///
/// # Errors
///
/// Returns an error if:
/// - The date cannot be parsed
/// - The store cannot be read
pub fn get_projects_for_date(
    persistence: &mut Persistence,
    date: &str,
) -> Result<ProjectsForDateResponse, ApiError> {
    let date: ScheduleDate = read_date(date)?;
    let rows: Vec<ProjectDayRow> = persistence
        .load_project_day_rows(date)
        .map_err(translate_persistence_error)?;

    Ok(ProjectsForDateResponse {
        date,
        projects: build_project_views(&rows),
    })
}

/// Lists the union pool for a date, grouped by union.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `date` - The requested date
/// * `today` - The current business date; picks the historical or live strategy
///
/// # Errors
///
/// Returns an error if:
/// - The date cannot be parsed
/// - The store cannot be read
pub fn get_unions_for_date(
    persistence: &mut Persistence,
    date: &str,
    today: ScheduleDate,
) -> Result<UnionsForDateResponse, ApiError> {
    let date: ScheduleDate = read_date(date)?;
    let rows: Vec<EmployeeDayRow> = persistence
        .load_employee_day_rows(date)
        .map_err(translate_persistence_error)?;

    Ok(UnionsForDateResponse {
        date,
        unions: build_union_views(date, today, &rows),
    })
}

// ========================================================================
// Schedule Writes
// ========================================================================

/// Moves an employee onto a project, or back to their union.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The move request
/// * `actor` - The caller, for attribution in logs
/// * `today` - The current business date
///
/// # Errors
///
/// Returns an error if:
/// - The date is invalid or outside the editable window
/// - The employee or project does not exist
/// - The project is inactive
/// - The store write fails
pub fn move_employee(
    persistence: &mut Persistence,
    request: &MoveEmployeeRequest,
    actor: &RequestActor,
    today: ScheduleDate,
) -> Result<MoveEmployeeResponse, ApiError> {
    let command: Command = Command::MoveEmployee {
        date: request.date.clone(),
        employee_id: request.employee_id,
        target_job_id: request.target_project_id,
    };

    match execute(persistence, command, today)? {
        MutationOutcome::Assignment(record) => {
            info!(
                actor = %actor.login_name,
                date = %record.date,
                employee_id = record.employee_id,
                job_id = ?record.job_id,
                "Employee moved"
            );
            Ok(move_response(&record))
        }
        other => Err(unexpected_outcome("move_employee", &other)),
    }
}

const fn move_response(record: &AssignmentRecord) -> MoveEmployeeResponse {
    MoveEmployeeResponse {
        date: record.date,
        employee_id: record.employee_id,
        current_location: record.current_location,
        job_id: record.job_id,
        is_highlighted: record.is_highlighted,
    }
}

/// Sets an employee's highlight flag without changing their placement.
///
/// # Errors
///
/// Returns an error if:
/// - The date is invalid or outside the editable window
/// - The employee does not exist
/// - The store write fails
pub fn set_highlight(
    persistence: &mut Persistence,
    request: &SetHighlightRequest,
    actor: &RequestActor,
    today: ScheduleDate,
) -> Result<(), ApiError> {
    let command: Command = Command::SetHighlight {
        date: request.date.clone(),
        employee_id: request.employee_id,
        is_highlighted: request.is_highlighted,
    };

    match execute(persistence, command, today)? {
        MutationOutcome::Assignment(record) => {
            debug!(
                actor = %actor.login_name,
                date = %record.date,
                employee_id = record.employee_id,
                is_highlighted = record.is_highlighted,
                "Highlight set"
            );
            Ok(())
        }
        other => Err(unexpected_outcome("set_highlight", &other)),
    }
}

/// Copies a date's schedule into the following day.
///
/// The finalized date must be editable; the following day is written even
/// when it lies one day past the window.
///
/// # Errors
///
/// Returns an error if:
/// - The date is invalid or outside the editable window
/// - The copy fails, in which case nothing is copied
pub fn finalize(
    persistence: &mut Persistence,
    request: &FinalizeRequest,
    actor: &RequestActor,
    today: ScheduleDate,
) -> Result<FinalizeResponse, ApiError> {
    let command: Command = Command::Finalize {
        date: request.date.clone(),
    };

    match execute(persistence, command, today)? {
        MutationOutcome::Finalized(summary) => {
            let FinalizeSummary {
                next_date,
                assignments_copied,
                project_orders_copied,
            } = summary;
            info!(
                actor = %actor.login_name,
                next_date = %next_date,
                assignments_copied,
                project_orders_copied,
                "Schedule finalized"
            );
            Ok(FinalizeResponse {
                next_date,
                assignments_copied,
                project_orders_copied,
            })
        }
        other => Err(unexpected_outcome("finalize", &other)),
    }
}

/// Orders projects for a date.
///
/// # Errors
///
/// Returns an error if:
/// - The date is invalid or outside the editable window
/// - A project id is repeated or unknown
/// - The store write fails
pub fn reorder_projects(
    persistence: &mut Persistence,
    request: &ReorderProjectsRequest,
    actor: &RequestActor,
    today: ScheduleDate,
) -> Result<(), ApiError> {
    let command: Command = Command::ReorderProjects {
        date: request.date.clone(),
        job_ids: request.job_ids.clone(),
    };

    match execute(persistence, command, today)? {
        MutationOutcome::Reordered => {
            info!(
                actor = %actor.login_name,
                date = %request.date,
                count = request.job_ids.len(),
                "Projects reordered"
            );
            Ok(())
        }
        other => Err(unexpected_outcome("reorder_projects", &other)),
    }
}

/// Orders a project's crew for a date.
///
/// # Errors
///
/// Returns an error if:
/// - The date is invalid or outside the editable window
/// - An employee id is repeated, or names someone not on the project that day
/// - The project does not exist
/// - The store write fails
pub fn reorder_employees(
    persistence: &mut Persistence,
    request: &ReorderEmployeesRequest,
    actor: &RequestActor,
    today: ScheduleDate,
) -> Result<(), ApiError> {
    let command: Command = Command::ReorderEmployees {
        date: request.date.clone(),
        job_id: request.job_id,
        employee_ids: request.employee_ids.clone(),
    };

    match execute(persistence, command, today)? {
        MutationOutcome::Reordered => {
            info!(
                actor = %actor.login_name,
                date = %request.date,
                job_id = request.job_id,
                count = request.employee_ids.len(),
                "Crew reordered"
            );
            Ok(())
        }
        other => Err(unexpected_outcome("reorder_employees", &other)),
    }
}

/// Toggles a project's rain day for a date.
///
/// # Errors
///
/// Returns an error if:
/// - The date is invalid or outside the editable window
/// - The project does not exist
/// - The store write fails
pub fn toggle_rain_day(
    persistence: &mut Persistence,
    request: &ToggleRainDayRequest,
    actor: &RequestActor,
    today: ScheduleDate,
) -> Result<RainDayResponse, ApiError> {
    let date: ScheduleDate = read_date(&request.date)?;
    let command: Command = Command::ToggleRainDay {
        date: request.date.clone(),
        job_id: request.job_id,
    };

    match execute(persistence, command, today)? {
        MutationOutcome::RainDay(rain_day) => {
            info!(
                actor = %actor.login_name,
                date = %date,
                job_id = request.job_id,
                rain_day,
                "Rain day toggled"
            );
            Ok(RainDayResponse {
                job_id: request.job_id,
                date,
                rain_day,
            })
        }
        other => Err(unexpected_outcome("toggle_rain_day", &other)),
    }
}

/// Activates or deactivates a project.
///
/// Records pointing at the project from `today` onward are moved to the
/// union on deactivation and back to the project on reactivation, in the
/// same transaction as the status change.
///
/// # Errors
///
/// Returns an error if:
/// - The status is not `Active` or `Inactive`
/// - The project does not exist
/// - The store write fails
pub fn update_project_status(
    persistence: &mut Persistence,
    request: &UpdateProjectStatusRequest,
    actor: &RequestActor,
    today: ScheduleDate,
) -> Result<UpdateProjectStatusResponse, ApiError> {
    let status: ProjectStatus = request
        .status
        .parse()
        .map_err(translate_domain_error)?;
    let command: Command = Command::SetProjectStatus {
        job_id: request.job_id,
        status,
    };

    match execute(persistence, command, today)? {
        MutationOutcome::ProjectStatusChanged {
            assignments_updated,
        } => {
            info!(
                actor = %actor.login_name,
                job_id = request.job_id,
                status = %status,
                assignments_updated,
                "Project status updated"
            );
            Ok(UpdateProjectStatusResponse {
                job_id: request.job_id,
                status,
                assignments_updated,
            })
        }
        other => Err(unexpected_outcome("update_project_status", &other)),
    }
}

// ========================================================================
// Reference Data
// ========================================================================

/// Lists unions ordered by name.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_unions(persistence: &mut Persistence) -> Result<ListUnionsResponse, ApiError> {
    let unions: Vec<Union> = persistence
        .list_unions()
        .map_err(translate_persistence_error)?;

    Ok(ListUnionsResponse {
        unions: unions
            .into_iter()
            .map(|union| UnionInfo {
                union_id: union.union_id,
                union_name: union.union_name,
            })
            .collect(),
    })
}

/// Creates a union.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - A union with the same name exists
/// - The store write fails
pub fn create_union(
    persistence: &mut Persistence,
    request: &CreateUnionRequest,
    actor: &RequestActor,
) -> Result<CreatedResponse, ApiError> {
    let union_name: String =
        validate_required_name("union_name", &request.union_name).map_err(translate_domain_error)?;
    let union_id: i64 = persistence
        .create_union(&union_name)
        .map_err(translate_persistence_error)?;

    info!(actor = %actor.login_name, union_id, "Union created");
    Ok(CreatedResponse { id: union_id })
}

/// Lists all employees, active or not.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_employees(persistence: &mut Persistence) -> Result<ListEmployeesResponse, ApiError> {
    let employees: Vec<Employee> = persistence
        .list_employees()
        .map_err(translate_persistence_error)?;

    Ok(ListEmployeesResponse {
        employees: employees.into_iter().map(employee_info).collect(),
    })
}

/// Retrieves one employee, active or not.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the employee does not exist, or an error if
/// the store cannot be read.
pub fn get_employee(
    persistence: &mut Persistence,
    employee_id: i64,
) -> Result<EmployeeInfo, ApiError> {
    persistence
        .get_employee(employee_id)
        .map_err(translate_persistence_error)?
        .map(employee_info)
        .ok_or_else(|| {
            translate_persistence_error(PersistenceError::EmployeeNotFound(employee_id))
        })
}

fn employee_info(employee: Employee) -> EmployeeInfo {
    EmployeeInfo {
        employee_id: employee.employee_id,
        first_name: employee.first_name,
        last_name: employee.last_name,
        email: employee.email,
        phone: employee.phone,
        union_id: employee.union_id,
        is_active: employee.is_active,
    }
}

/// Creates an active employee.
///
/// # Errors
///
/// Returns an error if:
/// - A name is empty
/// - The union does not exist
/// - The store write fails
pub fn create_employee(
    persistence: &mut Persistence,
    request: &CreateEmployeeRequest,
    actor: &RequestActor,
) -> Result<CreatedResponse, ApiError> {
    let draft: EmployeeDraft = EmployeeDraft {
        first_name: validate_required_name("first_name", &request.first_name)
            .map_err(translate_domain_error)?,
        last_name: validate_required_name("last_name", &request.last_name)
            .map_err(translate_domain_error)?,
        email: request.email.clone(),
        phone: request.phone.clone(),
        union_id: request.union_id,
    };
    let employee_id: i64 = persistence
        .create_employee(&draft)
        .map_err(translate_persistence_error)?;

    info!(actor = %actor.login_name, employee_id, "Employee created");
    Ok(CreatedResponse { id: employee_id })
}

/// Activates or deactivates an employee.
///
/// Inactive employees drop out of every schedule view; their records stay.
///
/// # Errors
///
/// Returns an error if the employee does not exist or the store write fails.
pub fn set_employee_active(
    persistence: &mut Persistence,
    request: &SetEmployeeActiveRequest,
    actor: &RequestActor,
) -> Result<(), ApiError> {
    persistence
        .set_employee_active(request.employee_id, request.is_active)
        .map_err(translate_persistence_error)?;

    info!(
        actor = %actor.login_name,
        employee_id = request.employee_id,
        is_active = request.is_active,
        "Employee status updated"
    );
    Ok(())
}

/// Lists all projects, active or not.
///
/// Projects come back by default display order, unset last, then by id.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_projects(persistence: &mut Persistence) -> Result<ListProjectsResponse, ApiError> {
    let projects: Vec<Project> = persistence
        .list_projects()
        .map_err(translate_persistence_error)?;

    Ok(ListProjectsResponse {
        jobs: projects.into_iter().map(project_info).collect(),
    })
}

/// Retrieves one project, active or not.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the project does not exist, or an error if
/// the store cannot be read.
pub fn get_project(persistence: &mut Persistence, job_id: i64) -> Result<ProjectInfo, ApiError> {
    persistence
        .get_project(job_id)
        .map_err(translate_persistence_error)?
        .map(project_info)
        .ok_or_else(|| translate_persistence_error(PersistenceError::ProjectNotFound(job_id)))
}

fn project_info(project: Project) -> ProjectInfo {
    ProjectInfo {
        job_id: project.job_id,
        job_number: project.job_number,
        job_name: project.job_name,
        location: project.location,
        start_date: project.start_date,
        end_date: project.end_date,
        status: project.status,
        display_order: project.display_order,
    }
}

/// Creates an active project.
///
/// # Errors
///
/// Returns an error if:
/// - The job number or name is empty
/// - A date cannot be parsed, or the end precedes the start
/// - The store write fails
pub fn create_project(
    persistence: &mut Persistence,
    request: &CreateProjectRequest,
    actor: &RequestActor,
) -> Result<CreatedResponse, ApiError> {
    let start_date: Option<ScheduleDate> = request
        .start_date
        .as_deref()
        .map(read_date)
        .transpose()?;
    let end_date: Option<ScheduleDate> = request.end_date.as_deref().map(read_date).transpose()?;
    validate_project_dates(start_date, end_date).map_err(translate_domain_error)?;

    let draft: ProjectDraft = ProjectDraft {
        job_number: validate_required_name("job_number", &request.job_number)
            .map_err(translate_domain_error)?,
        job_name: validate_required_name("job_name", &request.job_name)
            .map_err(translate_domain_error)?,
        location: request.location.clone(),
        start_date,
        end_date,
        display_order: request.display_order,
    };
    let job_id: i64 = persistence
        .create_project(&draft)
        .map_err(translate_persistence_error)?;

    info!(actor = %actor.login_name, job_id, "Project created");
    Ok(CreatedResponse { id: job_id })
}
