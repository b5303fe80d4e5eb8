// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crew_schedule_domain::ScheduleDate;

/// Errors that can occur during persistence operations.
///
/// Store-level failures carry the driver's message. Lookups that find
/// nothing and schedule rules checked inside a transaction have their own
/// variants, so the API layer can tell a missing employee from a broken
/// database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// A raw statement (pragma or system variable read) failed.
    QueryFailed(String),
    /// A stored row could not be turned back into a domain value.
    ReconstructionError(String),
    /// The store could not be opened with the given parameters.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested employee does not exist.
    EmployeeNotFound(i64),
    /// The requested project does not exist.
    ProjectNotFound(i64),
    /// The requested union does not exist.
    UnionNotFound(i64),
    /// Employees cannot be scheduled onto an inactive project.
    ProjectInactive(i64),
    /// A union with this name already exists.
    DuplicateUnionName(String),
    /// A reorder named an employee who is not on the project that date.
    NotAssignedToProject {
        employee_id: i64,
        job_id: i64,
        date: ScheduleDate,
    },
    /// A display order does not fit the stored column.
    DisplayOrderOutOfRange(String),
    /// The requested row was not found.
    NotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::ReconstructionError(msg) => write!(f, "Row reconstruction error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::EmployeeNotFound(id) => write!(f, "Employee not found: {id}"),
            Self::ProjectNotFound(id) => write!(f, "Project not found: {id}"),
            Self::UnionNotFound(id) => write!(f, "Union not found: {id}"),
            Self::ProjectInactive(id) => write!(f, "Project {id} is inactive"),
            Self::DuplicateUnionName(name) => write!(f, "Union '{name}' already exists"),
            Self::NotAssignedToProject {
                employee_id,
                job_id,
                date,
            } => write!(
                f,
                "Employee {employee_id} is not assigned to project {job_id} on {date}"
            ),
            Self::DisplayOrderOutOfRange(value) => {
                write!(f, "Display order {value} is out of range")
            }
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound(String::from("Record not found")),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}
