//! SQLite ledger adapter.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;
use tracing::{debug, instrument};

use fx_types::{ConversionLedger, ConversionRecord, LEDGER_CAPACITY, LedgerError, RecordId};

use crate::types::DbConversion;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Ledger
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite ledger implementation.
pub struct SqliteLedger {
    pool: SqlitePool,
}

impl SqliteLedger {
    /// Creates a new SQLite ledger with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let ddl = include_str!("../migrations/0001_create_history.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn db_err(e: sqlx::Error) -> LedgerError {
    LedgerError::Database(e.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Ledger implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ConversionLedger for SqliteLedger {
    #[instrument(skip_all, fields(base = %record.base(), target = %record.target()))]
    async fn insert(&self, record: &ConversionRecord) -> Result<RecordId, LedgerError> {
        // Insert and trim commit together or not at all.
        let mut db_tx = self.pool.begin().await.map_err(db_err)?;

        let inserted = sqlx::query(
            r#"INSERT INTO history (base, target, amount, converted, rate, date)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(record.base().as_str())
        .bind(record.target().as_str())
        .bind(record.amount().to_string())
        .bind(record.converted_amount().to_string())
        .bind(record.rate().to_string())
        .bind(record.date().format("%Y-%m-%d").to_string())
        .execute(&mut *db_tx)
        .await
        .map_err(db_err)?;
        let id = inserted.last_insert_rowid();

        let evicted = sqlx::query(
            r#"DELETE FROM history
               WHERE id NOT IN (SELECT id FROM history ORDER BY id DESC LIMIT ?)"#,
        )
        .bind(LEDGER_CAPACITY as i64)
        .execute(&mut *db_tx)
        .await
        .map_err(db_err)?
        .rows_affected();

        db_tx.commit().await.map_err(db_err)?;

        debug!(id, evicted, "conversion recorded");
        Ok(RecordId::new(id))
    }

    async fn list_recent(&self) -> Result<Vec<ConversionRecord>, LedgerError> {
        let rows: Vec<DbConversion> = sqlx::query_as(
            r#"SELECT id, base, target, amount, converted, rate, date
               FROM history ORDER BY id DESC LIMIT ?"#,
        )
        .bind(LEDGER_CAPACITY as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter().map(DbConversion::into_domain).collect()
    }
}
