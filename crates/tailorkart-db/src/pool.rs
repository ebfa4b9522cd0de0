//! # Database Pool Management
//!
//! Connection pool creation and configuration for the client-local SQLite file.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Connection Pool                           │
//! │                                                                         │
//! │  Session startup                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← Configure pool settings                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Create pool + run migrations             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.cart_snapshots() ── load on startup, save after each cart change    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! File databases run in WAL mode so a snapshot write never blocks a read.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::cart_snapshot::CartSnapshotRepository;

const IN_MEMORY_PATH: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/tailorkart.db")
///     .max_connections(2);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file, or `:memory:`.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 4 (one storefront session writes at a time)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    pub min_connections: u32,

    /// Connection acquire timeout.
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    pub idle_timeout: Duration,

    /// Whether to run migrations on connect.
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a configuration for the file at `path` (created if missing).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 4,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// An isolated in-memory database (for tests).
    ///
    /// Single connection: every connection to `:memory:` is its own database.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(3600),
            run_migrations: true,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY_PATH)
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        if self.is_in_memory() {
            return SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()));
        }

        Ok(SqliteConnectOptions::new()
            .filename(&self.database_path)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true))
    }
}

// =============================================================================
// Database
// =============================================================================

/// Database handle providing repository access. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the pool and runs migrations (if enabled).
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        if !config.is_in_memory() {
            if let Some(parent) = config.database_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| DbError::ConnectionFailed(e.to_string()))?;
            }
        }

        let connect_options = config.connect_options()?;
        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(max_connections = config.max_connections, "Database pool created");

        let db = Database { pool };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    pub async fn run_migrations(&self) -> DbResult<()> {
        migrations::run_migrations(&self.pool).await
    }

    /// Raw pool access for queries not covered by repositories.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the cart snapshot repository.
    pub fn cart_snapshots(&self) -> CartSnapshotRepository {
        CartSnapshotRepository::new(self.pool.clone())
    }

    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
