//! # Cart Snapshot Repository
//!
//! Stores the whole cart as one JSON document per slot.
//!
//! ## Write Ordering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Revision-Guarded Upsert                              │
//! │                                                                         │
//! │  cart change #7 ──► spawn save(rev 7) ─────────────┐                    │
//! │  cart change #8 ──► spawn save(rev 8) ──┐          │                    │
//! │                                         ▼          ▼                    │
//! │                       INSERT ... ON CONFLICT(slot) DO UPDATE            │
//! │                       WHERE excluded.revision > stored.revision         │
//! │                                                                         │
//! │  rev 8 lands first → written                                            │
//! │  rev 7 lands later → rejected (0 rows), the newer cart survives         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes run in the background, so completion order is not call order.
//! The guard makes the last *issued* write win instead of the last finished.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tailorkart_core::snapshot;
use tailorkart_core::CartItem;
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};

/// One stored cart snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSnapshot {
    pub slot: String,
    pub items: Vec<CartItem>,
    pub revision: i64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct SnapshotRow {
    slot: String,
    payload: String,
    revision: i64,
    updated_at: String,
}

/// Repository for cart snapshot storage.
#[derive(Debug, Clone)]
pub struct CartSnapshotRepository {
    pool: SqlitePool,
}

impl CartSnapshotRepository {
    /// Creates a new CartSnapshotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CartSnapshotRepository { pool }
    }

    /// Encodes and stores `items` under `slot`.
    ///
    /// Returns `false` when a snapshot with an equal or newer revision is
    /// already stored and this write was discarded.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let written = db.cart_snapshots().save("cart", cart.items(), 12).await?;
    /// ```
    pub async fn save(&self, slot: &str, items: &[CartItem], revision: i64) -> DbResult<bool> {
        let payload = snapshot::encode(items)?;
        self.save_payload(slot, &payload, items.len(), revision).await
    }

    /// Stores an already-encoded payload.
    ///
    /// Used by the background persister, which encodes synchronously at the
    /// moment of the change and writes later.
    pub async fn save_payload(
        &self,
        slot: &str,
        payload: &str,
        item_count: usize,
        revision: i64,
    ) -> DbResult<bool> {
        let now = Utc::now().to_rfc3339();
        let item_count = i64::try_from(item_count).unwrap_or(i64::MAX);

        let result = sqlx::query(
            r#"
            INSERT INTO cart_snapshots (slot, payload, item_count, revision, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(slot) DO UPDATE SET
                payload = excluded.payload,
                item_count = excluded.item_count,
                revision = excluded.revision,
                updated_at = excluded.updated_at
            WHERE excluded.revision > cart_snapshots.revision
            "#,
        )
        .bind(slot)
        .bind(payload)
        .bind(item_count)
        .bind(revision)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let written = result.rows_affected() > 0;
        if written {
            debug!(slot = %slot, revision, item_count, "Cart snapshot saved");
        } else {
            debug!(slot = %slot, revision, "Stale cart snapshot discarded");
        }

        Ok(written)
    }

    /// Loads the snapshot stored under `slot`.
    ///
    /// A payload that no longer decodes is reported as
    /// [`DbError::CorruptSnapshot`]; callers decide whether to start empty.
    pub async fn load(&self, slot: &str) -> DbResult<Option<StoredSnapshot>> {
        let row = sqlx::query_as::<_, SnapshotRow>(
            r#"
            SELECT slot, payload, revision, updated_at
            FROM cart_snapshots
            WHERE slot = ?1
            "#,
        )
        .bind(slot)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items = snapshot::decode(&row.payload).map_err(|e| {
            warn!(slot = %slot, error = %e, "Stored cart snapshot does not decode");
            DbError::corrupt(slot, e)
        })?;

        let updated_at = DateTime::parse_from_rfc3339(&row.updated_at)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| DbError::corrupt(slot, e))?;

        Ok(Some(StoredSnapshot {
            slot: row.slot,
            items,
            revision: row.revision,
            updated_at,
        }))
    }

    /// Loads the items under `slot`; a missing slot is an empty cart.
    pub async fn load_items(&self, slot: &str) -> DbResult<Vec<CartItem>> {
        Ok(self.load(slot).await?.map(|s| s.items).unwrap_or_default())
    }

    /// Returns the stored revision for `slot`, if any.
    pub async fn revision(&self, slot: &str) -> DbResult<Option<i64>> {
        let revision: Option<i64> =
            sqlx::query_scalar("SELECT revision FROM cart_snapshots WHERE slot = ?1")
                .bind(slot)
                .fetch_optional(&self.pool)
                .await?;

        Ok(revision)
    }

    /// Deletes the snapshot under `slot`. Returns whether one existed.
    pub async fn delete(&self, slot: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM cart_snapshots WHERE slot = ?1")
            .bind(slot)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use tailorkart_core::{Design, DesignSelection, Money};

    async fn repo() -> CartSnapshotRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.cart_snapshots()
    }

    fn item(id: &str, rupees: i64) -> CartItem {
        let design = Design {
            id: format!("design-{id}"),
            name: format!("Sherwani {id}"),
            image: None,
            price: Money::from_rupees(rupees),
            price_with_material: Money::from_rupees(rupees),
            tailor_id: None,
            shop_name: None,
            time_in_days: None,
        };
        let mut item = CartItem::from_design(&design, DesignSelection::default());
        item.id = id.to_string();
        item
    }

    #[tokio::test]
    async fn test_missing_slot_is_none() {
        let repo = repo().await;
        assert!(repo.load("cart").await.unwrap().is_none());
        assert!(repo.load_items("cart").await.unwrap().is_empty());
        assert_eq!(repo.revision("cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let repo = repo().await;
        let items = vec![item("a", 1500), item("b", 800)];

        assert!(repo.save("cart", &items, 1).await.unwrap());

        let stored = repo.load("cart").await.unwrap().unwrap();
        assert_eq!(stored.slot, "cart");
        assert_eq!(stored.items, items);
        assert_eq!(stored.revision, 1);
    }

    #[tokio::test]
    async fn test_older_revision_is_discarded() {
        let repo = repo().await;

        assert!(repo.save("cart", &[item("new", 2000)], 8).await.unwrap());
        assert!(!repo.save("cart", &[item("old", 100)], 7).await.unwrap());
        assert!(!repo.save("cart", &[item("same", 100)], 8).await.unwrap());

        let items = repo.load_items("cart").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "new");
        assert_eq!(repo.revision("cart").await.unwrap(), Some(8));
    }

    #[tokio::test]
    async fn test_slots_are_independent() {
        let repo = repo().await;

        repo.save("cart", &[item("a", 100)], 1).await.unwrap();
        repo.save("guest", &[], 1).await.unwrap();

        assert_eq!(repo.load_items("cart").await.unwrap().len(), 1);
        assert!(repo.load_items("guest").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_payload() {
        let repo = repo().await;
        repo.save_payload("cart", "{not json", 0, 1).await.unwrap();

        let err = repo.load("cart").await.unwrap_err();
        assert!(matches!(err, DbError::CorruptSnapshot { ref slot, .. } if slot == "cart"));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo().await;
        repo.save("cart", &[item("a", 100)], 1).await.unwrap();

        assert!(repo.delete("cart").await.unwrap());
        assert!(!repo.delete("cart").await.unwrap());
        assert!(repo.load("cart").await.unwrap().is_none());
    }
}
