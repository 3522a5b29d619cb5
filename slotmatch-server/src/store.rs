//! Slot persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use slotmatch_libs::{NewSlot, Slot, UserId};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::config::DatabaseConfig;
use crate::error::StoreError;

/// Source of the slots a user has stored.
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// All slots of `user_id`, oldest first.
    async fn slots_for_user(&self, user_id: UserId) -> Result<Vec<Slot>, StoreError>;

    /// Store a slot for `user_id`. The slot is expected to be validated.
    async fn create_slot(&self, user_id: UserId, slot: NewSlot) -> Result<Slot, StoreError>;
}

#[derive(sqlx::FromRow)]
struct SlotRow {
    id: i64,
    user_id: i64,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SlotRow> for Slot {
    fn from(row: SlotRow) -> Self {
        Slot {
            id: row.id,
            user_id: row.user_id,
            start_time: row.start_time,
            end_time: row.end_time,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// `sqlite::memory:`, `sqlite://:memory:` and `file:` URIs with `mode=memory`
fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:")
        || url
            .split_once('?')
            .map(|(_, query)| query.split('&').any(|param| param == "mode=memory"))
            .unwrap_or(false)
}

/// SQLite backed [`SlotStore`].
#[derive(Clone)]
pub struct SqliteSlotStore {
    pool: SqlitePool,
}

impl SqliteSlotStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database named in `config` and make sure the schema exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        // Every connection to an in-memory database sees its own database
        let pool = if is_in_memory(&config.url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(options)
                .await?
        };

        let store = Self::new(pool);
        store.migrate().await?;

        tracing::info!("Connected to slot database at {}", config.url);
        Ok(store)
    }

    /// Create the `slots` table and its user index if missing.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS slots (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                start_time DATETIME NULL,
                end_time DATETIME NULL,
                created_at DATETIME NOT NULL,
                updated_at DATETIME NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_slots_user_id ON slots (user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl SlotStore for SqliteSlotStore {
    async fn slots_for_user(&self, user_id: UserId) -> Result<Vec<Slot>, StoreError> {
        let rows: Vec<SlotRow> = sqlx::query_as(
            "SELECT id, user_id, start_time, end_time, created_at, updated_at
             FROM slots
             WHERE user_id = ?
             ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!("Fetched {} slots for user {}", rows.len(), user_id);

        Ok(rows.into_iter().map(Slot::from).collect())
    }

    async fn create_slot(&self, user_id: UserId, slot: NewSlot) -> Result<Slot, StoreError> {
        let now = Utc::now();

        let row: SlotRow = sqlx::query_as(
            "INSERT INTO slots (user_id, start_time, end_time, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, user_id, start_time, end_time, created_at, updated_at",
        )
        .bind(user_id)
        .bind(slot.start_time)
        .bind(slot.end_time)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Stored slot {} for user {}", row.id, user_id);

        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    async fn memory_store() -> SqliteSlotStore {
        SqliteSlotStore::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        })
        .await
        .unwrap()
    }

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://:memory:"));
        assert!(is_in_memory("sqlite://file:slots?mode=memory"));
        assert!(is_in_memory("sqlite://file:slots?cache=shared&mode=memory"));

        assert!(!is_in_memory("sqlite://slotmatch.db"));
        assert!(!is_in_memory("sqlite://slotmatch.db?mode=rwc"));
        assert!(!is_in_memory("sqlite://memory.db"));
    }

    #[tokio::test]
    async fn stores_slots_per_user() {
        let store = memory_store().await;
        let start = Utc.with_ymd_and_hms(2022, 5, 5, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2022, 5, 5, 10, 0, 0).unwrap();

        let first = store
            .create_slot(1, NewSlot::new(Some(start), Some(end)))
            .await
            .unwrap();
        let open = store
            .create_slot(1, NewSlot::new(Some(start), None))
            .await
            .unwrap();
        store
            .create_slot(2, NewSlot::new(Some(start), Some(end)))
            .await
            .unwrap();

        assert_eq!(first.user_id, 1);
        assert_eq!(first.start_time, Some(start));
        assert_eq!(first.end_time, Some(end));
        assert_eq!(open.end_time, None);

        let slots = store.slots_for_user(1).await.unwrap();
        assert_eq!(slots, vec![first, open]);

        assert!(store.slots_for_user(3).await.unwrap().is_empty());
    }
}
