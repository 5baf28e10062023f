// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the casetrack complaints system.
//!
//! Built on Diesel with the `SQLite` backend. All state lives here:
//! request-handling workers hold no private mutable state and block only
//! on storage I/O.
//!
//! Two disciplines matter for correctness under concurrency:
//!
//! - The reference allocator increments a per-year counter row in one
//!   atomic upsert statement (see `mutations::reference`). This is the
//!   only cross-case mutable state in the system.
//! - A lifecycle transition commits the complaint's field changes, its
//!   side-effect child row, and its event appends in one transaction.
//!   Partial application is not an acceptable outcome.
//!
//! In-memory databases (one unique shared-cache database per
//! constructor call, named by an atomic counter) serve tests; file
//! databases run WAL with a busy timeout so concurrent writers queue.

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

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

use casetrack_core::{CaseState, OpenResult, TransitionResult};
use casetrack_domain::{
    CaseReference, Communication, Complainant, Complaint, Policy, RedressPayment, Task, User,
    UserRole,
};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::StoredEvent;
pub use error::PersistenceError;
pub use mutations::{MAX_REFERENCE_ATTEMPTS, PersistedTransition};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the complaint aggregate, the event log, the
/// user store, and the reference counters.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique shared-cache database, so separate
    /// adapters are fully isolated while additional connections to the
    /// same name would share state.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("casetrack_test_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// WAL mode is enabled so concurrent connections (other workers on
    /// the same database) serialize on the write lock instead of
    /// failing.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Allocates the next case reference for a year.
    ///
    /// One atomic upsert-and-increment; see `mutations::reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if the increment fails.
    pub fn allocate_reference(&mut self, year: u16) -> Result<CaseReference, PersistenceError> {
        mutations::reference::allocate_reference(&mut self.conn, year)
    }

    /// Persists a newly opened complaint with its complainant, policy,
    /// and `created` event in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::UniqueViolation`] on a reference
    /// collision (retryable by the caller), or another error if any
    /// insert fails.
    pub fn insert_complaint(
        &mut self,
        opened: &OpenResult,
        complainant: &Complainant,
        policy: &Policy,
    ) -> Result<Complaint, PersistenceError> {
        mutations::complaints::insert_complaint(&mut self.conn, opened, complainant, policy)
    }

    /// Retrieves a complaint by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the complaint does not exist.
    pub fn get_complaint(&mut self, complaint_id: i64) -> Result<Complaint, PersistenceError> {
        queries::complaints::get_complaint(&mut self.conn, complaint_id)
    }

    /// Retrieves a complaint by its externally visible reference.
    ///
    /// # Errors
    ///
    /// Returns an error if no complaint carries the reference.
    pub fn get_complaint_by_reference(
        &mut self,
        reference: &str,
    ) -> Result<Complaint, PersistenceError> {
        queries::complaints::get_complaint_by_reference(&mut self.conn, reference)
    }

    /// Loads the transition-evaluation slice of the aggregate.
    ///
    /// # Errors
    ///
    /// Returns an error if the complaint does not exist.
    pub fn load_case_state(&mut self, complaint_id: i64) -> Result<CaseState, PersistenceError> {
        queries::complaints::load_case_state(&mut self.conn, complaint_id)
    }

    /// Persists a transition result atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails; nothing is committed in
    /// that case.
    pub fn persist_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<PersistedTransition, PersistenceError> {
        mutations::complaints::persist_transition(&mut self.conn, result)
    }

    /// Recomputes and persists the live breach flags without touching
    /// breach history.
    ///
    /// # Errors
    ///
    /// Returns an error if the complaint does not exist.
    pub fn refresh_breach_flags(
        &mut self,
        complaint_id: i64,
        now: OffsetDateTime,
    ) -> Result<Complaint, PersistenceError> {
        mutations::complaints::refresh_breach_flags(&mut self.conn, complaint_id, now)
    }

    /// Retrieves a complaint's events in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn events_for_complaint(
        &mut self,
        complaint_id: i64,
    ) -> Result<Vec<StoredEvent>, PersistenceError> {
        queries::events::events_for_complaint(&mut self.conn, complaint_id)
    }

    /// Retrieves a redress payment, verifying it belongs to the
    /// complaint.
    ///
    /// # Errors
    ///
    /// Returns an error if no such payment exists on the complaint.
    pub fn get_redress(
        &mut self,
        complaint_id: i64,
        redress_id: i64,
    ) -> Result<RedressPayment, PersistenceError> {
        queries::redress::get_redress(&mut self.conn, complaint_id, redress_id)
    }

    /// Retrieves every redress payment on a complaint.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn redress_for_complaint(
        &mut self,
        complaint_id: i64,
    ) -> Result<Vec<RedressPayment>, PersistenceError> {
        queries::redress::redress_for_complaint(&mut self.conn, complaint_id)
    }

    /// Retrieves the complaint's complainant.
    ///
    /// # Errors
    ///
    /// Returns an error if the complaint has no complainant row.
    pub fn complainant_for_complaint(
        &mut self,
        complaint_id: i64,
    ) -> Result<Complainant, PersistenceError> {
        queries::children::complainant_for_complaint(&mut self.conn, complaint_id)
    }

    /// Retrieves the complaint's policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the complaint has no policy row.
    pub fn policy_for_complaint(&mut self, complaint_id: i64) -> Result<Policy, PersistenceError> {
        queries::children::policy_for_complaint(&mut self.conn, complaint_id)
    }

    /// Retrieves a complaint's communications in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn communications_for_complaint(
        &mut self,
        complaint_id: i64,
    ) -> Result<Vec<Communication>, PersistenceError> {
        queries::children::communications_for_complaint(&mut self.conn, complaint_id)
    }

    /// Retrieves a complaint's tasks in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn tasks_for_complaint(&mut self, complaint_id: i64) -> Result<Vec<Task>, PersistenceError> {
        queries::children::tasks_for_complaint(&mut self.conn, complaint_id)
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is already taken.
    pub fn create_user(
        &mut self,
        full_name: &str,
        email: &str,
        role: UserRole,
    ) -> Result<User, PersistenceError> {
        mutations::users::create_user(&mut self.conn, full_name, email, role)
    }

    /// Activates or deactivates a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist.
    pub fn set_user_active(
        &mut self,
        user_id: i64,
        is_active: bool,
    ) -> Result<(), PersistenceError> {
        mutations::users::set_user_active(&mut self.conn, user_id, is_active)
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist.
    pub fn get_user(&mut self, user_id: i64) -> Result<User, PersistenceError> {
        queries::users::get_user(&mut self.conn, user_id)
    }

    /// Deletes a complaint and all owned children. Administrative
    /// override only; normal operation never hard-deletes.
    ///
    /// # Errors
    ///
    /// Returns an error if the complaint does not exist.
    pub fn delete_complaint(&mut self, complaint_id: i64) -> Result<(), PersistenceError> {
        mutations::complaints::delete_complaint(&mut self.conn, complaint_id)
    }
}
