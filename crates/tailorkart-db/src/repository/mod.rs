//! # Repository Module
//!
//! Database repositories for the TailorKart client store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Access                                    │
//! │                                                                         │
//! │  CartSession / SnapshotPersister / cart_report                          │
//! │       │                                                                 │
//! │       │  db.cart_snapshots().save("cart", &items, revision)             │
//! │       ▼                                                                 │
//! │  CartSnapshotRepository                                                 │
//! │  ├── save(&self, slot, items, revision)                                 │
//! │  ├── load(&self, slot)                                                  │
//! │  ├── load_items(&self, slot)                                            │
//! │  ├── revision(&self, slot)                                              │
//! │  └── delete(&self, slot)                                                │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database (cart_snapshots)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CartSnapshotRepository`](cart_snapshot::CartSnapshotRepository) - Persisted cart snapshots

pub mod cart_snapshot;
