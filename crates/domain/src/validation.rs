// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::date_policy::ScheduleDate;
use crate::error::DomainError;
use std::collections::HashSet;

/// Trims a required name field and rejects it if empty.
///
/// # Arguments
///
/// * `field` - The field name used in the error
/// * `value` - The raw value
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the trimmed value is empty.
pub fn validate_required_name(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName {
            field,
            message: String::from("cannot be empty"),
        });
    }
    Ok(trimmed.to_string())
}

/// Rejects a reorder list that mentions any id twice.
///
/// # Errors
///
/// Returns `DomainError::DuplicateOrderEntry` naming the first repeated id.
pub fn validate_unique_ids(list: &'static str, ids: &[i64]) -> Result<(), DomainError> {
    let mut seen: HashSet<i64> = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(*id) {
            return Err(DomainError::DuplicateOrderEntry { list, id: *id });
        }
    }
    Ok(())
}

/// Validates that a project's date range is ordered.
///
/// Open-ended ranges are always valid.
///
/// # Errors
///
/// Returns `DomainError::InvalidProjectDateRange` if `end` precedes `start`.
pub fn validate_project_dates(
    start: Option<ScheduleDate>,
    end: Option<ScheduleDate>,
) -> Result<(), DomainError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(DomainError::InvalidProjectDateRange {
            start: start.to_string(),
            end: end.to_string(),
        }),
        _ => Ok(()),
    }
}
