//! # tailorkart-db: Cart Snapshot Storage
//!
//! Durable client-local storage for the TailorKart cart. The cart lives in
//! memory ([`tailorkart_core::CartStore`]); this crate keeps a copy of it on
//! disk so a reload or restart resumes where the customer left off.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TailorKart Persistence                           │
//! │                                                                         │
//! │  Storefront event (add, quantity, measurements, ...)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore (tailorkart-core) ── notifies observers                      │
//! │       │                                                                 │
//! │  ┌────▼────────────────────────────────────────────────────────────┐    │
//! │  │                  tailorkart-db (THIS CRATE)                     │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────────┐   ┌──────────────────┐   ┌──────────────┐   │    │
//! │  │   │ CartSession   │   │ SnapshotPersister│   │  Migrations  │   │    │
//! │  │   │ (session.rs)  │──►│ (persister.rs)   │   │  (embedded)  │   │    │
//! │  │   └───────────────┘   └────────┬─────────┘   └──────────────┘   │    │
//! │  │                                ▼                                │    │
//! │  │   ┌───────────────┐   ┌──────────────────┐   ┌──────────────┐   │    │
//! │  │   │   AppConfig   │   │ CartSnapshotRepo │──►│   Database   │   │    │
//! │  │   │  (config.rs)  │   │ (repository/)    │   │  (pool.rs)   │   │    │
//! │  │   └───────────────┘   └──────────────────┘   └──────────────┘   │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (platform data dir, or TAILORKART_DB_PATH)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`repository`] - Cart snapshot repository
//! - [`persister`] - Background write-through on every cart change
//! - [`session`] - Restore-on-open cart session
//! - [`config`] - Environment configuration
//! - [`error`] - Database error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tailorkart_db::{AppConfig, CartSession, Database};
//!
//! let config = AppConfig::from_env()?;
//! let db = Database::new(config.db_config()).await?;
//!
//! let mut session = CartSession::open(db, &config).await;
//! session.cart_mut().add_to_cart(item);
//! let view = session.view();
//!
//! session.settle().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod migrations;
pub mod persister;
pub mod pool;
pub mod repository;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::AppConfig;
pub use error::{DbError, DbResult};
pub use persister::SnapshotPersister;
pub use pool::{Database, DbConfig};
pub use session::CartSession;

// Repository re-exports for convenience
pub use repository::cart_snapshot::{CartSnapshotRepository, StoredSnapshot};
