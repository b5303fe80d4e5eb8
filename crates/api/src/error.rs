// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::actor::IdentityError;
use crew_schedule::CoreError;
use crew_schedule_domain::{DateError, DomainError, RangeViolation};
use crew_schedule_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain, core and persistence errors and represent
/// the API contract. Each variant maps to exactly one HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The caller's identity is missing or unusable.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A write targeted a date outside the editable window.
    DateOutOfRange {
        /// The rejected date.
        date: String,
        /// Which side of the window was violated.
        violation: RangeViolation,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DateOutOfRange { date, violation } => {
                write!(f, "Date {date} cannot be modified: {}", violation.describe())
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        Self::AuthenticationFailed {
            reason: err.to_string(),
        }
    }
}

/// Translates a date policy error into an API error.
#[must_use]
pub fn translate_date_error(err: DateError) -> ApiError {
    match err {
        DateError::InvalidFormat { input, reason } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("'{input}' is not a valid date: {reason}"),
        },
        DateError::OutOfRange {
            date, violation, ..
        } => ApiError::DateOutOfRange { date, violation },
        DateError::Overflow { date } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("No following day can be computed for {date}"),
        },
        DateError::InvalidTimezone(name) => ApiError::Internal {
            message: format!("Business timezone '{name}' is not configured correctly"),
        },
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::Date(date_err) => translate_date_error(date_err),
        DomainError::InvalidLocation(value) => ApiError::InvalidInput {
            field: String::from("current_location"),
            message: format!("'{value}' must be 'union' or 'project'"),
        },
        DomainError::InvalidProjectStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{value}' must be 'Active' or 'Inactive'"),
        },
        DomainError::InvalidName { field, message } => ApiError::InvalidInput {
            field: field.to_string(),
            message,
        },
        DomainError::DuplicateOrderEntry { list, id } => ApiError::InvalidInput {
            field: format!("{list}_ids"),
            message: format!("{list} {id} is listed more than once"),
        },
        DomainError::InvalidProjectDateRange { start, end } => ApiError::InvalidInput {
            field: String::from("end_date"),
            message: format!("End date {end} is before start date {start}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
///
/// Missing entities become `ResourceNotFound`; store-level rule failures
/// become `DomainRuleViolation`; everything else is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::EmployeeNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee {id} does not exist"),
        },
        PersistenceError::ProjectNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Project"),
            message: format!("Project {id} does not exist"),
        },
        PersistenceError::UnionNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Union"),
            message: format!("Union {id} does not exist"),
        },
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message,
        },
        PersistenceError::ProjectInactive(id) => ApiError::DomainRuleViolation {
            rule: String::from("active_project"),
            message: format!("Project {id} is inactive and cannot take assignments"),
        },
        PersistenceError::DuplicateUnionName(name) => ApiError::DomainRuleViolation {
            rule: String::from("unique_union_name"),
            message: format!("Union '{name}' already exists"),
        },
        PersistenceError::NotAssignedToProject {
            employee_id,
            job_id,
            date,
        } => ApiError::DomainRuleViolation {
            rule: String::from("assigned_to_project"),
            message: format!("Employee {employee_id} is not on project {job_id} on {date}"),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
