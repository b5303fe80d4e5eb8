// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` schedule store.
//!
//! The server's default store and the only engine the standard test suite
//! touches. Schedule dates are `YYYY-MM-DD` text, so the `date >= today`
//! filters used by project deactivation compare in calendar order.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel_migrations::{EmbeddedMigrations, embed_migrations};
use tracing::info;

use super::{ScheduleBackend, apply_schema};
use crate::error::PersistenceError;

/// Schema for `SQLite`, kept equivalent to `migrations_mysql/`.
pub const SCHEMA: EmbeddedMigrations = embed_migrations!("migrations");

/// Journal mode to open a database with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Journal {
    /// The `SQLite` default; used for in-memory databases.
    Rollback,
    /// Write-ahead logging; readers keep working during a finalize or a
    /// project status bulk update. File databases only.
    WriteAhead,
}

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Opens a `SQLite` store and brings its schema up to date.
///
/// # Arguments
///
/// * `database_url` - A file path or `file:` URI
/// * `journal` - The journal mode to switch to
///
/// # Errors
///
/// Returns an error if the connection, a `PRAGMA`, a migration or the
/// foreign key check fails.
pub fn open(database_url: &str, journal: Journal) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, ?journal, "Opening SQLite schedule store");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    // Diesel has no PRAGMA DSL.
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    if journal == Journal::WriteAhead {
        diesel::sql_query("PRAGMA journal_mode = WAL")
            .execute(&mut conn)
            .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    }

    apply_schema(&mut conn, SCHEMA, SqliteConnection::ENGINE)?;
    conn.require_foreign_keys()?;
    Ok(conn)
}

impl ScheduleBackend for SqliteConnection {
    const ENGINE: &'static str = "sqlite";

    fn last_insert_id(&mut self) -> Result<i64, PersistenceError> {
        Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(self)?)
    }

    fn foreign_keys_enforced(&mut self) -> Result<bool, PersistenceError> {
        let pragma: ForeignKeysPragma =
            diesel::sql_query("PRAGMA foreign_keys").get_result(self)?;
        Ok(pragma.foreign_keys != 0)
    }
}
