// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested complaint was not found.
    ComplaintNotFound(i64),
    /// No complaint carries the given reference.
    ReferenceNotFound(String),
    /// The requested redress payment was not found on the complaint.
    RedressNotFound {
        /// The complaint searched.
        complaint_id: i64,
        /// The redress row requested.
        redress_id: i64,
    },
    /// The requested user was not found.
    UserNotFound(i64),
    /// A uniqueness constraint was violated.
    ///
    /// For complaint references this is retryable: the creating caller
    /// re-allocates and retries up to the bound.
    UniqueViolation(String),
    /// Reference allocation retries were exhausted.
    ReferenceExhausted {
        /// The year whose counter was contended.
        year: u16,
        /// How many attempts were made.
        attempts: u32,
    },
    /// The entity has not been persisted yet (no row id).
    NotPersisted(&'static str),
    /// A stored value could not be converted back to its domain type.
    ReconstructionError(String),
    /// The requested resource was not found.
    NotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::ComplaintNotFound(id) => write!(f, "Complaint not found: {id}"),
            Self::ReferenceNotFound(reference) => {
                write!(f, "No complaint with reference '{reference}'")
            }
            Self::RedressNotFound {
                complaint_id,
                redress_id,
            } => {
                write!(
                    f,
                    "Redress payment {redress_id} not found on complaint {complaint_id}"
                )
            }
            Self::UserNotFound(id) => write!(f, "User not found: {id}"),
            Self::UniqueViolation(msg) => write!(f, "Uniqueness violation: {msg}"),
            Self::ReferenceExhausted { year, attempts } => {
                write!(
                    f,
                    "Reference allocation for year {year} failed after {attempts} attempts"
                )
            }
            Self::NotPersisted(entity) => {
                write!(f, "{entity} has not been persisted yet")
            }
            Self::ReconstructionError(msg) => {
                write!(f, "Stored value could not be reconstructed: {msg}")
            }
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            ) => Self::UniqueViolation(info.message().to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}
