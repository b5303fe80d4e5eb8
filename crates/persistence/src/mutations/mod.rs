// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Every mutation that touches more than one row runs in a Diesel transaction.
//!
//! ## Module Organization
//!
//! - `reference` — Unions, employees and jobs
//! - `assignments` — Assignment store (move, highlight, crew order)
//! - `project_order` — Project order store and rain days
//! - `project_status` — Job activation with the bulk record update
//! - `finalize` — Carry-forward to the next day

pub mod assignments;
pub mod finalize;
pub mod project_order;
pub mod project_status;
pub mod reference;

// Re-export backend-specific mutation functions used by lib.rs
pub use assignments::{
    move_employee_mysql, move_employee_sqlite, reorder_employees_mysql,
    reorder_employees_sqlite, set_highlight_mysql, set_highlight_sqlite,
};
pub use finalize::{finalize_mysql, finalize_sqlite};
pub use project_order::{
    reorder_projects_mysql, reorder_projects_sqlite, toggle_rain_day_mysql,
    toggle_rain_day_sqlite,
};
pub use project_status::{set_project_status_mysql, set_project_status_sqlite};
pub use reference::{
    EmployeeDraft, ProjectDraft, create_employee_mysql, create_employee_sqlite,
    create_project_mysql, create_project_sqlite, create_union_mysql, create_union_sqlite,
    set_employee_active_mysql, set_employee_active_sqlite,
};
