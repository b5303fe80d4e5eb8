// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry raw caller input (dates as strings); validation happens in
//! the handlers. Responses serialize with camelCase envelope keys, while the
//! schedule views inside them keep their own field names.

use crew_schedule::{AssignmentView, ProjectView, UnionWithEmployees};
use crew_schedule_domain::{Location, ProjectStatus, ScheduleDate};
use serde::{Deserialize, Serialize};

// ========================================================================
// Schedule Reads
// ========================================================================

/// API response listing every active employee's placement for a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeesForDateResponse {
    /// The normalized date.
    pub date: ScheduleDate,
    /// Employees ordered by crew order, then name.
    pub employees: Vec<AssignmentView>,
}

/// API response listing active projects for a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsForDateResponse {
    /// The normalized date.
    pub date: ScheduleDate,
    /// Projects in display order.
    pub projects: Vec<ProjectView>,
}

/// API response grouping the union pool for a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionsForDateResponse {
    /// The normalized date.
    pub date: ScheduleDate,
    /// One entry per union with at least one pooled employee.
    pub unions: Vec<UnionWithEmployees>,
}

// ========================================================================
// Schedule Writes
// ========================================================================

/// API request to move an employee onto a project or back to their union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEmployeeRequest {
    /// The schedule date.
    pub date: String,
    /// The employee to move.
    pub employee_id: i64,
    /// The target project; `None` moves the employee to their union.
    pub target_project_id: Option<i64>,
}

/// API response for a successful move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveEmployeeResponse {
    /// The normalized date.
    pub date: ScheduleDate,
    /// The moved employee.
    pub employee_id: i64,
    /// The stored location.
    pub current_location: Location,
    /// The stored project, if any.
    pub job_id: Option<i64>,
    /// The stored highlight flag.
    pub is_highlighted: bool,
}

/// API request to set an employee's highlight flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetHighlightRequest {
    /// The schedule date.
    pub date: String,
    /// The employee.
    pub employee_id: i64,
    /// The new flag.
    pub is_highlighted: bool,
}

/// API request to carry a date's schedule into the next day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizeRequest {
    /// The date being finalized.
    pub date: String,
}

/// API response for a successful finalize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeResponse {
    /// The date the client should adopt as current.
    pub next_date: ScheduleDate,
    /// Assignment records written for `next_date`.
    pub assignments_copied: usize,
    /// Project order records written for `next_date`.
    pub project_orders_copied: usize,
}

/// API request to order projects for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderProjectsRequest {
    /// The schedule date.
    pub date: String,
    /// Project ids in their new order.
    pub job_ids: Vec<i64>,
}

/// API request to order a project's crew for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderEmployeesRequest {
    /// The schedule date.
    pub date: String,
    /// The project.
    pub job_id: i64,
    /// Employee ids in their new order.
    pub employee_ids: Vec<i64>,
}

/// API request to toggle a project's rain day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRainDayRequest {
    /// The schedule date.
    pub date: String,
    /// The project.
    pub job_id: i64,
}

/// API response for a rain day toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainDayResponse {
    /// The project.
    pub job_id: i64,
    /// The normalized date.
    pub date: ScheduleDate,
    /// The flag after the toggle.
    pub rain_day: bool,
}

/// API request to change a project's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectStatusRequest {
    /// The project.
    pub job_id: i64,
    /// `Active` or `Inactive`.
    pub status: String,
}

/// API response for a project status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectStatusResponse {
    /// The project.
    pub job_id: i64,
    /// The new status.
    pub status: ProjectStatus,
    /// Assignment records whose location changed.
    pub assignments_updated: usize,
}

// ========================================================================
// Reference Data
// ========================================================================

/// Union information for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionInfo {
    /// The canonical identifier.
    pub union_id: i64,
    /// The display name.
    pub union_name: String,
}

/// API response listing unions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUnionsResponse {
    /// Unions ordered by name.
    pub unions: Vec<UnionInfo>,
}

/// API request to create a union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUnionRequest {
    /// The display name.
    pub union_name: String,
}

/// Employee information for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInfo {
    /// The canonical identifier.
    pub employee_id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Home union.
    pub union_id: Option<i64>,
    /// Whether the employee appears in schedule views.
    pub is_active: bool,
}

/// API response listing employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEmployeesResponse {
    /// All employees, active or not.
    pub employees: Vec<EmployeeInfo>,
}

/// API request to create an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEmployeeRequest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Home union.
    pub union_id: Option<i64>,
}

/// API request to activate or deactivate an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetEmployeeActiveRequest {
    /// The employee.
    pub employee_id: i64,
    /// The new flag.
    pub is_active: bool,
}

/// Project information for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    /// The canonical identifier.
    pub job_id: i64,
    /// Business-facing job number.
    pub job_number: String,
    /// Display name.
    pub job_name: String,
    /// Site location.
    pub location: Option<String>,
    /// First scheduled day.
    pub start_date: Option<ScheduleDate>,
    /// Last scheduled day.
    pub end_date: Option<ScheduleDate>,
    /// Activation status.
    pub status: ProjectStatus,
    /// Default ordering.
    pub display_order: Option<i32>,
}

/// API response listing projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListProjectsResponse {
    /// All projects, active or not.
    pub jobs: Vec<ProjectInfo>,
}

/// API request to create a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    /// Business-facing job number.
    pub job_number: String,
    /// Display name.
    pub job_name: String,
    /// Site location.
    pub location: Option<String>,
    /// First scheduled day.
    pub start_date: Option<String>,
    /// Last scheduled day.
    pub end_date: Option<String>,
    /// Default position in project listings.
    pub display_order: Option<i32>,
}

/// API response carrying a newly assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// The identifier assigned by the store.
    pub id: i64,
}
