// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! MySQL/MariaDB schedule store.
//!
//! Selected by the server with `--mysql-url`. The client libraries
//! (`libmysqlclient-dev` or equivalent) are required to build this crate.
//!
//! Tests for this engine are `#[ignore]`d and run only with
//! `CREW_SCHEDULE_TEST_BACKEND=mariadb` and a `DATABASE_URL`:
//!
//! ```bash
//! CREW_SCHEDULE_TEST_BACKEND=mariadb DATABASE_URL=mysql://... \
//!     cargo test -p crew-schedule-persistence -- --ignored
//! ```
//!
//! `migrations_mysql/` must match `migrations/` table for table: columns,
//! nullability, checks, keys and foreign keys. Every schema change is added
//! to both directories.

use diesel::dsl::sql;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, MysqlConnection, QueryableByName, RunQueryDsl};
use diesel_migrations::{EmbeddedMigrations, embed_migrations};
use tracing::info;

use super::{ScheduleBackend, apply_schema};
use crate::error::PersistenceError;

/// Schema for `MySQL`, kept equivalent to `migrations/`.
pub const SCHEMA: EmbeddedMigrations = embed_migrations!("migrations_mysql");

#[derive(QueryableByName)]
struct ForeignKeyChecks {
    #[diesel(sql_type = Integer)]
    fk_checks: i32,
}

/// Opens a `MySQL` store and brings its schema up to date.
///
/// The URL is not logged; it usually carries credentials.
///
/// # Errors
///
/// Returns an error if the connection, a migration or the foreign key
/// check fails.
pub fn open(database_url: &str) -> Result<MysqlConnection, PersistenceError> {
    info!("Opening MySQL schedule store");

    let mut conn: MysqlConnection = MysqlConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    apply_schema(&mut conn, SCHEMA, MysqlConnection::ENGINE)?;
    conn.require_foreign_keys()?;
    Ok(conn)
}

impl ScheduleBackend for MysqlConnection {
    const ENGINE: &'static str = "mysql";

    fn last_insert_id(&mut self) -> Result<i64, PersistenceError> {
        Ok(diesel::select(sql::<BigInt>("LAST_INSERT_ID()")).get_result(self)?)
    }

    fn foreign_keys_enforced(&mut self) -> Result<bool, PersistenceError> {
        // Diesel has no DSL for system variables.
        let checks: ForeignKeyChecks =
            diesel::sql_query("SELECT @@foreign_key_checks AS fk_checks")
                .get_result(self)
                .map_err(|e| {
                    PersistenceError::QueryFailed(format!(
                        "Failed to read foreign_key_checks: {e}"
                    ))
                })?;
        Ok(checks.fk_checks == 1)
    }
}
