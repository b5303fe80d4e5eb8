// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! API boundary for the crew scheduling system.
//!
//! Handlers in this crate translate transport-agnostic requests into core
//! commands, run them through the date policy and the store, and shape the
//! results into response types. Every error leaving this crate is an
//! `ApiError`; the server maps each variant to a single HTTP status.
//!
//! Writes are attributed to a `RequestActor` in the logs. Who may act is
//! decided upstream; this crate only requires that an identity is present.

mod actor;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use actor::{IdentityError, MAX_IDENTITY_LENGTH, RequestActor};
pub use error::{
    ApiError, translate_core_error, translate_date_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    create_employee, create_project, create_union, finalize, get_employee, get_employees_for_date,
    get_project, get_projects_for_date, get_unions_for_date, list_employees, list_projects,
    list_unions,
    move_employee, reorder_employees, reorder_projects, set_employee_active, set_highlight,
    toggle_rain_day, update_project_status,
};
pub use request_response::{
    CreateEmployeeRequest, CreateProjectRequest, CreateUnionRequest, CreatedResponse,
    EmployeeInfo, EmployeesForDateResponse, FinalizeRequest, FinalizeResponse,
    ListEmployeesResponse, ListProjectsResponse, ListUnionsResponse, MoveEmployeeRequest,
    MoveEmployeeResponse, ProjectInfo, ProjectsForDateResponse, RainDayResponse,
    ReorderEmployeesRequest, ReorderProjectsRequest, SetEmployeeActiveRequest,
    SetHighlightRequest, ToggleRainDayRequest, UnionInfo, UnionsForDateResponse,
    UpdateProjectStatusRequest, UpdateProjectStatusResponse,
};
