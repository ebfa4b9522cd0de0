//! # Database Error Types
//!
//! Error types for snapshot storage.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error) ──┐                                         │
//! │  Snapshot codec (CoreError) ──┼──► DbError (this module)                │
//! │  Bad env var ─────────────────┘        │                                │
//! │                                        ▼                                │
//! │              SnapshotPersister: logged at warn, never surfaced          │
//! │              cart_report / session startup: degrade to empty cart       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tailorkart_core::CoreError;
use thiserror::Error;

/// Snapshot storage errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Data directory cannot be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A stored snapshot could not be decoded.
    ///
    /// ## When This Occurs
    /// - Payload written by an incompatible build
    /// - Manual edits to the database file
    #[error("Snapshot in slot '{slot}' is corrupt: {reason}")]
    CorruptSnapshot { slot: String, reason: String },

    /// The cart could not be encoded for storage.
    #[error("Snapshot encoding failed: {0}")]
    Encode(#[from] CoreError),

    /// An environment variable has an unusable value.
    #[error("Invalid configuration {var}: {reason}")]
    Config { var: String, reason: String },

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    pub fn corrupt(slot: impl Into<String>, reason: impl ToString) -> Self {
        DbError::CorruptSnapshot {
            slot: slot.into(),
            reason: reason.to_string(),
        }
    }

    pub fn config(var: impl Into<String>, reason: impl ToString) -> Self {
        DbError::Config {
            var: var.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
