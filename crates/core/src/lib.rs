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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod aggregate;
mod apply;
mod client_state;
mod command;
mod error;
mod views;

#[cfg(test)]
mod tests;

pub use aggregate::GroupBuilder;
pub use apply::apply;
pub use client_state::{OptimisticEdit, ScheduleCache, ScheduleSnapshot};
pub use command::{Command, Mutation};
pub use error::CoreError;
pub use views::{
    AssignmentView, EmployeeDayRow, ProjectDayRow, ProjectView, UnionViewStrategy,
    UnionWithEmployees, build_employee_views, build_project_views, build_union_views,
    compare_assignment_views, group_by_union,
};
