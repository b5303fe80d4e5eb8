// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Effective location resolution.
//!
//! Every schedule read derives an employee's placement from the same inputs:
//! the employee, their assignment record for the date (if any), and the
//! current status of the project that record points at (if any). This module
//! is the only place those inputs are combined.
//!
//! ## Rules
//!
//! - Inactive employees resolve to nothing and are dropped from all views
//! - No record resolves to the union default (not highlighted, no project)
//! - A `union` record resolves to the union, keeping its highlight and order
//! - A `project` record resolves to the project while the project is active
//! - A `project` record whose project is inactive or missing resolves to the
//!   union with no project
//!
//! The last rule overlaps with the bulk update performed when a project is
//! deactivated. Both are kept: the bulk update rewrites records from the
//! deactivation date onward, and this fallback covers records it never
//! touched (earlier dates, or rows written before the update existed).

use crate::types::{AssignmentRecord, Employee, Location, LocationState, ProjectStatus};

/// Resolves where `employee` effectively is on the record's date.
///
/// # Arguments
///
/// * `employee` - The employee being placed
/// * `assignment` - The stored record for the date, if one exists
/// * `assigned_project_status` - Current status of `assignment.job_id`; `None`
///   when there is no such project
///
/// # Returns
///
/// `None` if the employee is inactive, otherwise the effective state.
#[must_use]
pub fn resolve_location(
    employee: &Employee,
    assignment: Option<&AssignmentRecord>,
    assigned_project_status: Option<ProjectStatus>,
) -> Option<LocationState> {
    if !employee.is_active {
        return None;
    }

    let Some(record) = assignment else {
        return Some(LocationState::union_default());
    };

    let on_live_project: bool = record.current_location == Location::Project
        && record.job_id.is_some()
        && assigned_project_status.is_some_and(|status| status.is_active());

    if on_live_project {
        Some(LocationState {
            location: Location::Project,
            job_id: record.job_id,
            is_highlighted: record.is_highlighted,
            display_order: record.display_order,
        })
    } else {
        Some(LocationState {
            location: Location::Union,
            job_id: None,
            is_highlighted: record.is_highlighted,
            display_order: record.display_order,
        })
    }
}
