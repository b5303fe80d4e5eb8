// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client-side schedule cache.
//!
//! A client keeps two copies of the schedule for the date it is showing:
//! the snapshot last confirmed by the server and the snapshot it displays.
//! Reconciliation follows three rules:
//!
//! - An optimistic edit patches the displayed snapshot immediately
//! - A successful fetch replaces both snapshots wholesale
//! - A failed fetch rolls the displayed snapshot back to the confirmed one
//!
//! Pending edits are cleared by either fetch outcome; nothing is replayed.

use crate::views::{AssignmentView, ProjectView, UnionWithEmployees, group_by_union};
use crew_schedule_domain::{Location, ScheduleDate};

/// All three views for a single date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSnapshot {
    /// The date the views describe.
    pub date: ScheduleDate,
    /// Employees-for-date view.
    pub employees: Vec<AssignmentView>,
    /// Projects-for-date view.
    pub projects: Vec<ProjectView>,
    /// Unions-with-employees view.
    pub unions: Vec<UnionWithEmployees>,
}

/// An edit the client shows before the server confirms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimisticEdit {
    /// An employee was dropped on a project or back on their union.
    Move {
        /// The employee.
        employee_id: i64,
        /// Target project; `None` for the union pool.
        target_job_id: Option<i64>,
    },
    /// An employee's highlight was toggled.
    Highlight {
        /// The employee.
        employee_id: i64,
        /// New flag value.
        is_highlighted: bool,
    },
}

impl OptimisticEdit {
    const fn employee_id(&self) -> i64 {
        match self {
            Self::Move { employee_id, .. } | Self::Highlight { employee_id, .. } => *employee_id,
        }
    }
}

/// Confirmed and displayed schedule state for one client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleCache {
    confirmed: Option<ScheduleSnapshot>,
    displayed: Option<ScheduleSnapshot>,
    pending: Vec<OptimisticEdit>,
}

impl ScheduleCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            confirmed: None,
            displayed: None,
            pending: Vec::new(),
        }
    }

    /// Returns the snapshot the client should render.
    #[must_use]
    pub const fn displayed(&self) -> Option<&ScheduleSnapshot> {
        self.displayed.as_ref()
    }

    /// Returns the last snapshot confirmed by the server.
    #[must_use]
    pub const fn confirmed(&self) -> Option<&ScheduleSnapshot> {
        self.confirmed.as_ref()
    }

    /// Returns edits applied since the last fetch.
    #[must_use]
    pub fn pending(&self) -> &[OptimisticEdit] {
        &self.pending
    }

    /// Patches the displayed snapshot with `edit`.
    ///
    /// # Returns
    ///
    /// `true` if the edited employee was present in the displayed snapshot.
    /// Unknown employees and an empty cache leave the state untouched.
    pub fn apply_optimistic(&mut self, edit: OptimisticEdit) -> bool {
        let Some(snapshot) = self.displayed.as_mut() else {
            return false;
        };
        let Some(view) = snapshot
            .employees
            .iter_mut()
            .find(|view| view.employee_id == edit.employee_id())
        else {
            return false;
        };

        match edit {
            OptimisticEdit::Move { target_job_id, .. } => {
                view.current_location = if target_job_id.is_some() {
                    Location::Project
                } else {
                    Location::Union
                };
                view.job_id = target_job_id;
                view.is_highlighted = target_job_id.is_some();
                view.display_order = None;
            }
            OptimisticEdit::Highlight { is_highlighted, .. } => {
                view.is_highlighted = is_highlighted;
            }
        }

        snapshot.unions = group_by_union(snapshot.employees.clone());
        self.pending.push(edit);
        true
    }

    /// Adopts a freshly fetched snapshot as both confirmed and displayed.
    pub fn fetch_succeeded(&mut self, snapshot: ScheduleSnapshot) {
        self.displayed = Some(snapshot.clone());
        self.confirmed = Some(snapshot);
        self.pending.clear();
    }

    /// Discards optimistic edits after a failed fetch.
    pub fn fetch_failed(&mut self) {
        self.displayed.clone_from(&self.confirmed);
        self.pending.clear();
    }
}
