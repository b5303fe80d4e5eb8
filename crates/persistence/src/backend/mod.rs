// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Engine-specific connection handling.
//!
//! Schedule queries and mutations are written once in Diesel DSL and
//! compiled for both connection types. The pieces that differ per engine
//! live here:
//!
//! - Opening a connection and applying session settings
//! - Applying the embedded schema for that engine
//! - Reading back generated ids after an insert
//! - Confirming that foreign keys are enforced
//!
//! A store is never handed out before its schema is current and foreign key
//! enforcement has been confirmed.

pub mod mysql;
pub mod sqlite;

use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Engine-specific statements Diesel's DSL has no portable form for.
pub trait ScheduleBackend: Connection {
    /// Engine name used in log fields.
    const ENGINE: &'static str;

    /// Returns the id generated by the most recent insert on this connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn last_insert_id(&mut self) -> Result<i64, PersistenceError>;

    /// Reports whether the engine is currently enforcing foreign keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the setting cannot be read.
    fn foreign_keys_enforced(&mut self) -> Result<bool, PersistenceError>;

    /// Fails unless foreign keys are enforced.
    ///
    /// Assignment and project order rows reference employees and jobs by id;
    /// without enforcement a typo'd id would be stored silently.
    ///
    /// # Errors
    ///
    /// Returns `ForeignKeyEnforcementNotEnabled` if enforcement is off.
    fn require_foreign_keys(&mut self) -> Result<(), PersistenceError> {
        if self.foreign_keys_enforced()? {
            debug!(engine = Self::ENGINE, "Foreign key enforcement confirmed");
            Ok(())
        } else {
            Err(PersistenceError::ForeignKeyEnforcementNotEnabled)
        }
    }
}

/// Applies every pending migration in `schema`.
fn apply_schema<C>(
    conn: &mut C,
    schema: EmbeddedMigrations,
    engine: &'static str,
) -> Result<(), PersistenceError>
where
    C: Connection + MigrationHarness<<C as Connection>::Backend>,
{
    let applied: usize = conn
        .run_pending_migrations(schema)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?
        .len();
    info!(engine, applied, "Schedule schema is current");
    Ok(())
}
