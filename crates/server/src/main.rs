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
#![allow(clippy::multiple_crate_versions)]

mod actor;

use actor::Actor;
use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use crew_schedule_api::{
    ApiError, CreateEmployeeRequest, CreateProjectRequest, CreateUnionRequest, CreatedResponse,
    EmployeeInfo, EmployeesForDateResponse, FinalizeRequest, FinalizeResponse,
    ListEmployeesResponse, ListProjectsResponse, ListUnionsResponse, MoveEmployeeRequest,
    MoveEmployeeResponse, ProjectInfo, ProjectsForDateResponse, RainDayResponse,
    ReorderEmployeesRequest, ReorderProjectsRequest, SetEmployeeActiveRequest,
    SetHighlightRequest, ToggleRainDayRequest, UnionsForDateResponse, UpdateProjectStatusRequest,
    UpdateProjectStatusResponse, create_employee, create_project, create_union, finalize,
    get_employee, get_employees_for_date, get_project, get_projects_for_date, get_unions_for_date,
    list_employees, list_projects, list_unions, move_employee, reorder_employees,
    reorder_projects, set_employee_active, set_highlight, toggle_rain_day, update_project_status,
};
use crew_schedule_domain::{BusinessCalendar, DEFAULT_BUSINESS_TIMEZONE, ScheduleDate};
use crew_schedule_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Crew Schedule Server - HTTP server for the crew scheduling system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, conflicts_with = "mysql_url")]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL.
    #[arg(long)]
    mysql_url: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// IANA timezone that decides the business date
    #[arg(long, default_value = DEFAULT_BUSINESS_TIMEZONE)]
    timezone: String,

    /// Fixed business date (YYYY-MM-DD) instead of the system clock
    #[arg(long)]
    today: Option<ScheduleDate>,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access, and the calendar every write is checked against.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for schedule and reference data.
    persistence: Arc<Mutex<Persistence>>,
    /// The business calendar that decides "today".
    calendar: BusinessCalendar,
}

// ========================================================================
// Request Bodies
// ========================================================================

/// API request for moving an employee.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveEmployeeApiRequest {
    /// The employee to move.
    employee_id: i64,
    /// The target project; `null` moves the employee back to their union.
    target_project_id: Option<i64>,
    /// The schedule date.
    date: String,
}

/// API request for setting a highlight.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct HighlightApiRequest {
    /// The new highlight flag.
    is_highlighted: bool,
}

/// API request for changing a project's status.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ProjectStatusApiRequest {
    /// `Active` or `Inactive`.
    status: String,
}

/// API request for ordering projects on a date.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectOrderApiRequest {
    /// Project ids in display order.
    job_ids: Vec<i64>,
}

/// API request for ordering a project's crew on a date.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmployeeOrderApiRequest {
    /// Employee ids in display order.
    employee_ids: Vec<i64>,
}

/// API request for creating a union.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateUnionApiRequest {
    union_name: String,
}

/// API request for creating an employee.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateEmployeeApiRequest {
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    union_id: Option<i64>,
}

/// API request for activating or deactivating an employee.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmployeeStatusApiRequest {
    is_active: bool,
}

/// API request for creating a project.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateProjectApiRequest {
    job_number: String,
    job_name: String,
    location: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    display_order: Option<i32>,
}

// ========================================================================
// Errors
// ========================================================================

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

/// Body message for every 500 response.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::DateOutOfRange { .. } => StatusCode::FORBIDDEN,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { message } => {
                // Store detail stays in the log; clients get a fixed message.
                error!(error = %message, "Internal error");
                return Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: String::from(INTERNAL_ERROR_MESSAGE),
                };
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

// ========================================================================
// Schedule Handlers
// ========================================================================

/// Handler for GET `/schedule/employees/{date}` endpoint.
async fn handle_get_employees(
    AxumState(app_state): AxumState<AppState>,
    Path(date): Path<String>,
) -> Result<Json<EmployeesForDateResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeesForDateResponse = get_employees_for_date(&mut persistence, &date)?;
    Ok(Json(response))
}

/// Handler for GET `/schedule/{date}` endpoint.
async fn handle_get_projects(
    AxumState(app_state): AxumState<AppState>,
    Path(date): Path<String>,
) -> Result<Json<ProjectsForDateResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ProjectsForDateResponse = get_projects_for_date(&mut persistence, &date)?;
    Ok(Json(response))
}

/// Handler for GET `/schedule/withunions/{date}` endpoint.
async fn handle_get_unions(
    AxumState(app_state): AxumState<AppState>,
    Path(date): Path<String>,
) -> Result<Json<UnionsForDateResponse>, HttpError> {
    let today: ScheduleDate = app_state.calendar.today();
    let mut persistence = app_state.persistence.lock().await;
    let response: UnionsForDateResponse = get_unions_for_date(&mut persistence, &date, today)?;
    Ok(Json(response))
}

/// Handler for POST `/moveemployee` endpoint.
async fn handle_move_employee(
    AxumState(app_state): AxumState<AppState>,
    Actor(actor): Actor,
    Json(req): Json<MoveEmployeeApiRequest>,
) -> Result<Json<MoveEmployeeResponse>, HttpError> {
    info!(
        actor = %actor.login_name,
        date = %req.date,
        employee_id = req.employee_id,
        target_project_id = ?req.target_project_id,
        "Handling move_employee request"
    );

    let request: MoveEmployeeRequest = MoveEmployeeRequest {
        date: req.date,
        employee_id: req.employee_id,
        target_project_id: req.target_project_id,
    };
    let today: ScheduleDate = app_state.calendar.today();
    let mut persistence = app_state.persistence.lock().await;
    let response: MoveEmployeeResponse = move_employee(&mut persistence, &request, &actor, today)?;
    Ok(Json(response))
}

/// Handler for PUT `/schedule/{date}/{employeeId}/highlight` endpoint.
async fn handle_set_highlight(
    AxumState(app_state): AxumState<AppState>,
    Path((date, employee_id)): Path<(String, i64)>,
    Actor(actor): Actor,
    Json(req): Json<HighlightApiRequest>,
) -> Result<StatusCode, HttpError> {
    let request: SetHighlightRequest = SetHighlightRequest {
        date,
        employee_id,
        is_highlighted: req.is_highlighted,
    };
    let today: ScheduleDate = app_state.calendar.today();
    let mut persistence = app_state.persistence.lock().await;
    set_highlight(&mut persistence, &request, &actor, today)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST `/schedule/finalize/{date}` endpoint.
async fn handle_finalize(
    AxumState(app_state): AxumState<AppState>,
    Path(date): Path<String>,
    Actor(actor): Actor,
) -> Result<Json<FinalizeResponse>, HttpError> {
    info!(actor = %actor.login_name, date = %date, "Handling finalize request");

    let request: FinalizeRequest = FinalizeRequest { date };
    let today: ScheduleDate = app_state.calendar.today();
    let mut persistence = app_state.persistence.lock().await;
    let response: FinalizeResponse = finalize(&mut persistence, &request, &actor, today)?;
    Ok(Json(response))
}

/// Handler for PUT `/projectorder/{date}` endpoint.
async fn handle_reorder_projects(
    AxumState(app_state): AxumState<AppState>,
    Path(date): Path<String>,
    Actor(actor): Actor,
    Json(req): Json<ProjectOrderApiRequest>,
) -> Result<StatusCode, HttpError> {
    let request: ReorderProjectsRequest = ReorderProjectsRequest {
        date,
        job_ids: req.job_ids,
    };
    let today: ScheduleDate = app_state.calendar.today();
    let mut persistence = app_state.persistence.lock().await;
    reorder_projects(&mut persistence, &request, &actor, today)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for PUT `/employeeorder/{date}/{jobId}` endpoint.
async fn handle_reorder_employees(
    AxumState(app_state): AxumState<AppState>,
    Path((date, job_id)): Path<(String, i64)>,
    Actor(actor): Actor,
    Json(req): Json<EmployeeOrderApiRequest>,
) -> Result<StatusCode, HttpError> {
    let request: ReorderEmployeesRequest = ReorderEmployeesRequest {
        date,
        job_id,
        employee_ids: req.employee_ids,
    };
    let today: ScheduleDate = app_state.calendar.today();
    let mut persistence = app_state.persistence.lock().await;
    reorder_employees(&mut persistence, &request, &actor, today)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST `/jobs/{jobId}/rainday/{date}` endpoint.
async fn handle_toggle_rain_day(
    AxumState(app_state): AxumState<AppState>,
    Path((job_id, date)): Path<(i64, String)>,
    Actor(actor): Actor,
) -> Result<Json<RainDayResponse>, HttpError> {
    let request: ToggleRainDayRequest = ToggleRainDayRequest { date, job_id };
    let today: ScheduleDate = app_state.calendar.today();
    let mut persistence = app_state.persistence.lock().await;
    let response: RainDayResponse = toggle_rain_day(&mut persistence, &request, &actor, today)?;
    Ok(Json(response))
}

/// Handler for PUT `/jobs/{jobId}` endpoint.
///
/// Deactivating a project moves its crew back to their unions from today on.
async fn handle_update_project_status(
    AxumState(app_state): AxumState<AppState>,
    Path(job_id): Path<i64>,
    Actor(actor): Actor,
    Json(req): Json<ProjectStatusApiRequest>,
) -> Result<Json<UpdateProjectStatusResponse>, HttpError> {
    info!(
        actor = %actor.login_name,
        job_id,
        status = %req.status,
        "Handling update_project_status request"
    );

    let request: UpdateProjectStatusRequest = UpdateProjectStatusRequest {
        job_id,
        status: req.status,
    };
    let today: ScheduleDate = app_state.calendar.today();
    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateProjectStatusResponse =
        update_project_status(&mut persistence, &request, &actor, today)?;
    Ok(Json(response))
}

// ========================================================================
// Reference Data Handlers
// ========================================================================

/// Handler for GET `/unions` endpoint.
async fn handle_list_unions(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListUnionsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListUnionsResponse = list_unions(&mut persistence)?;
    Ok(Json(response))
}

/// Handler for POST `/unions` endpoint.
async fn handle_create_union(
    AxumState(app_state): AxumState<AppState>,
    Actor(actor): Actor,
    Json(req): Json<CreateUnionApiRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), HttpError> {
    let request: CreateUnionRequest = CreateUnionRequest {
        union_name: req.union_name,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response: CreatedResponse = create_union(&mut persistence, &request, &actor)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/employees` endpoint.
async fn handle_list_employees(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListEmployeesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListEmployeesResponse = list_employees(&mut persistence)?;
    Ok(Json(response))
}

/// Handler for GET `/employees/{employeeId}` endpoint.
async fn handle_get_employee(
    AxumState(app_state): AxumState<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<EmployeeInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeInfo = get_employee(&mut persistence, employee_id)?;
    Ok(Json(response))
}

/// Handler for POST `/employees` endpoint.
async fn handle_create_employee(
    AxumState(app_state): AxumState<AppState>,
    Actor(actor): Actor,
    Json(req): Json<CreateEmployeeApiRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), HttpError> {
    let request: CreateEmployeeRequest = CreateEmployeeRequest {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        phone: req.phone,
        union_id: req.union_id,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response: CreatedResponse = create_employee(&mut persistence, &request, &actor)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for PUT `/employees/{employeeId}/status` endpoint.
async fn handle_set_employee_status(
    AxumState(app_state): AxumState<AppState>,
    Path(employee_id): Path<i64>,
    Actor(actor): Actor,
    Json(req): Json<EmployeeStatusApiRequest>,
) -> Result<StatusCode, HttpError> {
    let request: SetEmployeeActiveRequest = SetEmployeeActiveRequest {
        employee_id,
        is_active: req.is_active,
    };
    let mut persistence = app_state.persistence.lock().await;
    set_employee_active(&mut persistence, &request, &actor)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/jobs` endpoint.
async fn handle_list_projects(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListProjectsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListProjectsResponse = list_projects(&mut persistence)?;
    Ok(Json(response))
}

/// Handler for GET `/jobs/{jobId}` endpoint.
async fn handle_get_project(
    AxumState(app_state): AxumState<AppState>,
    Path(job_id): Path<i64>,
) -> Result<Json<ProjectInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ProjectInfo = get_project(&mut persistence, job_id)?;
    Ok(Json(response))
}

/// Handler for POST `/jobs` endpoint.
async fn handle_create_project(
    AxumState(app_state): AxumState<AppState>,
    Actor(actor): Actor,
    Json(req): Json<CreateProjectApiRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), HttpError> {
    let request: CreateProjectRequest = CreateProjectRequest {
        job_number: req.job_number,
        job_name: req.job_name,
        location: req.location,
        start_date: req.start_date,
        end_date: req.end_date,
        display_order: req.display_order,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response: CreatedResponse = create_project(&mut persistence, &request, &actor)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/schedule/employees/{date}", get(handle_get_employees))
        .route("/schedule/withunions/{date}", get(handle_get_unions))
        .route("/schedule/finalize/{date}", post(handle_finalize))
        .route("/schedule/{date}", get(handle_get_projects))
        .route(
            "/schedule/{date}/{employeeId}/highlight",
            put(handle_set_highlight),
        )
        .route("/moveemployee", post(handle_move_employee))
        .route("/projectorder/{date}", put(handle_reorder_projects))
        .route(
            "/employeeorder/{date}/{jobId}",
            put(handle_reorder_employees),
        )
        .route(
            "/unions",
            get(handle_list_unions).post(handle_create_union),
        )
        .route(
            "/employees",
            get(handle_list_employees).post(handle_create_employee),
        )
        .route("/employees/{employeeId}", get(handle_get_employee))
        .route(
            "/employees/{employeeId}/status",
            put(handle_set_employee_status),
        )
        .route(
            "/jobs",
            get(handle_list_projects).post(handle_create_project),
        )
        .route(
            "/jobs/{jobId}",
            get(handle_get_project).put(handle_update_project_status),
        )
        .route("/jobs/{jobId}/rainday/{date}", post(handle_toggle_rain_day))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Crew Schedule Server");

    let persistence: Persistence = if let Some(url) = &args.mysql_url {
        info!("Using MySQL database");
        Persistence::new_with_mysql(url)?
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let mut calendar: BusinessCalendar = BusinessCalendar::from_timezone_name(&args.timezone)?;
    if let Some(today) = args.today {
        info!(today = %today, "Business date pinned");
        calendar = calendar.with_fixed_today(today);
    }
    info!(
        timezone = %calendar.timezone(),
        today = %calendar.today(),
        "Business calendar configured"
    );

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        calendar,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
