//! # Snapshot Persister
//!
//! Writes the cart to the local store after every mutation without making
//! the mutation wait for disk.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Fire-and-Forget Persistence                          │
//! │                                                                         │
//! │  CartStore mutation (sync)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  on_cart_changed(event, items)                                          │
//! │  ├── encode items NOW (the snapshot reflects this exact change)         │
//! │  ├── take the next revision                                             │
//! │  └── spawn save_payload(...) on the current tokio runtime ──┐           │
//! │                                                             │           │
//! │  mutation returns immediately                               ▼           │
//! │                                              SQLite upsert, guarded by  │
//! │                                              revision; errors → warn!   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage failures never reach the cart: the UI keeps working on its
//! in-memory state and the next change tries again.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tailorkart_core::snapshot;
use tailorkart_core::{CartEvent, CartItem, CartObserver};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::DbResult;
use crate::pool::Database;

/// Persists cart snapshots in the background. Cheap to clone; clones share
/// the revision counter and the pending-write list.
#[derive(Debug, Clone)]
pub struct SnapshotPersister {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    db: Database,
    slot: String,
    last_revision: AtomicI64,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl SnapshotPersister {
    pub fn new(db: Database, slot: impl Into<String>) -> Self {
        SnapshotPersister {
            inner: Arc::new(Inner {
                db,
                slot: slot.into(),
                last_revision: AtomicI64::new(0),
                pending: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn slot(&self) -> &str {
        &self.inner.slot
    }

    /// Next write revision: strictly increasing within this process and
    /// seeded from the wall clock so it also outranks earlier sessions.
    fn next_revision(&self) -> i64 {
        let now = Utc::now().timestamp_micros();
        let prev = self
            .inner
            .last_revision
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(now.max(prev.saturating_add(1)))
            })
            .unwrap_or_else(|prev| prev);
        now.max(prev.saturating_add(1))
    }

    fn pending(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.inner
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Writes `items` immediately and waits for the result.
    pub async fn save_now(&self, items: &[CartItem]) -> DbResult<bool> {
        let revision = self.next_revision();
        self.inner
            .db
            .cart_snapshots()
            .save(&self.inner.slot, items, revision)
            .await
    }

    /// Waits for every background write issued so far.
    pub async fn settle(&self) {
        let handles = std::mem::take(&mut *self.pending());
        for handle in handles {
            if let Err(e) = handle.await {
                warn!(error = %e, "Cart snapshot task did not complete");
            }
        }
    }

    /// Number of background writes not yet awaited by [`settle`](Self::settle).
    pub fn pending_writes(&self) -> usize {
        self.pending().iter().filter(|h| !h.is_finished()).count()
    }
}

impl CartObserver for SnapshotPersister {
    fn on_cart_changed(&self, event: &CartEvent, items: &[CartItem]) {
        let payload = match snapshot::encode(items) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Could not encode cart snapshot");
                return;
            }
        };

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!(?event, "No async runtime; cart snapshot not persisted");
                return;
            }
        };

        let revision = self.next_revision();
        let repo = self.inner.db.cart_snapshots();
        let slot = self.inner.slot.clone();
        let item_count = items.len();

        debug!(?event, revision, item_count, "Scheduling cart snapshot write");

        let task = handle.spawn(async move {
            if let Err(e) = repo.save_payload(&slot, &payload, item_count, revision).await {
                warn!(slot = %slot, revision, error = %e, "Failed to persist cart snapshot");
            }
        });

        let mut pending = self.pending();
        pending.retain(|h| !h.is_finished());
        pending.push(task);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
