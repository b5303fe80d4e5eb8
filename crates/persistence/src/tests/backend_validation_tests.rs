// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend validation tests for multi-database support.
//!
//! These tests check that the `MariaDB` migrations and the shared Diesel
//! queries behave like the `SQLite` ones. Business rules are covered by the
//! `SQLite` suite; these focus on schema and constraint parity.
//!
//! ## Test Execution
//!
//! - `SQLite` tests run normally via `cargo test`
//! - `MariaDB` tests are marked `#[ignore]` and need:
//!   - `DATABASE_URL` pointing at an empty `MariaDB` database
//!   - `CREW_SCHEDULE_TEST_BACKEND=mariadb`
//!
//! Tests fail fast if required infrastructure is missing.

use diesel::MysqlConnection;
use diesel::prelude::*;
use std::env;

use super::{create_test_today, employee_draft, project_draft};
use crate::backend::{ScheduleBackend, mysql};
use crate::{Persistence, PersistenceError};
use crew_schedule_domain::{AssignmentRecord, Location, ProjectStatus, ScheduleDate};

/// Helper to get the `MariaDB` connection URL from environment.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set, indicating missing infrastructure.
fn get_mariadb_url() -> String {
    env::var("DATABASE_URL").expect("DATABASE_URL not set - MariaDB tests need a database URL")
}

/// Helper to verify we're running in the `MariaDB` test environment.
///
/// # Panics
///
/// Panics if `CREW_SCHEDULE_TEST_BACKEND` is not set to `mariadb`.
fn verify_mariadb_test_environment() {
    let backend: String = env::var("CREW_SCHEDULE_TEST_BACKEND")
        .expect("CREW_SCHEDULE_TEST_BACKEND not set - MariaDB tests are opt-in");
    assert_eq!(
        backend, "mariadb",
        "CREW_SCHEDULE_TEST_BACKEND must be 'mariadb'"
    );
}

#[test]
#[ignore = "requires MariaDB"]
fn test_mariadb_migrations_apply_cleanly() {
    verify_mariadb_test_environment();
    let url: String = get_mariadb_url();

    let result: Result<MysqlConnection, PersistenceError> = mysql::open(&url);
    assert!(
        result.is_ok(),
        "Failed to initialize MariaDB and run migrations: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires MariaDB"]
fn test_mariadb_foreign_key_enforcement() {
    verify_mariadb_test_environment();
    let url: String = get_mariadb_url();

    let mut conn: MysqlConnection =
        mysql::open(&url).expect("Failed to initialize MariaDB database");
    assert!(conn.foreign_keys_enforced().unwrap());

    let result = diesel::sql_query(
        "INSERT INTO schedule (schedule_date, employee_id, current_location)
         VALUES ('2024-06-10', 999999, 'union')",
    )
    .execute(&mut conn);
    assert!(
        result.is_err(),
        "A record for a missing employee should fail the foreign key"
    );
}

#[test]
#[ignore = "requires MariaDB"]
fn test_mariadb_project_location_requires_job() {
    verify_mariadb_test_environment();
    let url: String = get_mariadb_url();

    let mut persistence: Persistence =
        Persistence::new_with_mysql(&url).expect("Failed to open MariaDB persistence");
    let employee_id: i64 = persistence
        .create_employee(&employee_draft("Check", "Constraint", None))
        .unwrap();

    let mut conn: MysqlConnection =
        mysql::open(&url).expect("Failed to initialize MariaDB database");
    let result = diesel::sql_query(format!(
        "INSERT INTO schedule (schedule_date, employee_id, current_location)
         VALUES ('2024-06-10', {employee_id}, 'project')"
    ))
    .execute(&mut conn);
    assert!(
        result.is_err(),
        "A project location with no job should fail the check constraint"
    );
}

#[test]
#[ignore = "requires MariaDB"]
fn test_mariadb_schedule_round_trip() {
    verify_mariadb_test_environment();
    let url: String = get_mariadb_url();

    let mut persistence: Persistence =
        Persistence::new_with_mysql(&url).expect("Failed to open MariaDB persistence");
    let today: ScheduleDate = create_test_today();

    let employee_id: i64 = persistence
        .create_employee(&employee_draft("Maria", "Db", None))
        .unwrap();
    let job_id: i64 = persistence
        .create_project(&project_draft("M-1", "Mariadb Job"))
        .unwrap();

    persistence
        .move_employee(today, employee_id, Some(job_id))
        .unwrap();
    persistence
        .set_project_status(job_id, ProjectStatus::Inactive, today)
        .unwrap();

    let record: AssignmentRecord = persistence
        .get_assignment(today, employee_id)
        .unwrap()
        .unwrap();
    assert_eq!(record.current_location, Location::Union);
    assert_eq!(record.job_id, Some(job_id));

    let tomorrow: ScheduleDate = today.next_day().unwrap();
    persistence.finalize(today, tomorrow).unwrap();
    assert!(
        persistence
            .get_assignment(tomorrow, employee_id)
            .unwrap()
            .is_some()
    );
}
