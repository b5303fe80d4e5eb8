// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `reference` — Unions, employees and jobs
//! - `schedule` — Flat day rows, stored records and rain-day markers
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod reference;
pub mod schedule;

pub use reference::{
    get_employee_mysql, get_employee_sqlite, get_project_mysql, get_project_sqlite,
    list_employees_mysql, list_employees_sqlite, list_projects_mysql, list_projects_sqlite,
    list_unions_mysql, list_unions_sqlite,
};
pub use schedule::{
    get_assignment_mysql, get_assignment_sqlite, is_rain_day_mysql, is_rain_day_sqlite,
    list_assignments_for_date_mysql, list_assignments_for_date_sqlite,
    list_project_orders_for_date_mysql, list_project_orders_for_date_sqlite,
    load_employee_day_rows_mysql, load_employee_day_rows_sqlite, load_project_day_rows_mysql,
    load_project_day_rows_sqlite,
};
