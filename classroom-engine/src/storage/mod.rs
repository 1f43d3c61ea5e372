//! redb-based feature store
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `features` | feature key | JSON blob | Per-feature state (settings, shared roster) |
//! | `charts` | chart id | JSON `SeatingChart` | Saved seating charts |
//!
//! The store is a thin adapter owned by the embedding application. The
//! computation modules never touch it: they take and return plain values,
//! and the caller persists after each state transition.
//!
//! The shared roster lives under [`ROSTER_KEY`] in the `features` table so
//! every feature reads the same people list.

use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::SeatingChart;
use shared::types::ChartId;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::roster::Roster;

/// Table for per-feature state: key = feature key, value = JSON blob
const FEATURES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("features");

/// Table for saved seating charts: key = chart id, value = JSON-serialized SeatingChart
const CHARTS_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("charts");

/// Feature key of the roster shared across features
pub const ROSTER_KEY: &str = "shared/roster";

/// Feature key of the grouping settings blob
pub const GROUPING_SETTINGS_KEY: &str = "grouping/settings";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for shared::AppError {
    fn from(err: StorageError) -> Self {
        shared::AppError::storage(err.to_string())
    }
}

/// Local feature store backed by redb
///
/// redb commits with `Durability::Immediate`, so every `set`/`upsert` is
/// persistent once the call returns and the file stays consistent across
/// abrupt shutdowns.
#[derive(Clone)]
pub struct FeatureStore {
    db: Arc<Database>,
}

impl FeatureStore {
    /// Open or create the store at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory store (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create tables up front so reads before the first write succeed
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(FEATURES_TABLE)?;
            let _ = write_txn.open_table(CHARTS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    // ========== Feature Blobs ==========

    /// Read a feature value by key
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(FEATURES_TABLE)?;

        match table.get(key)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Write a feature value under a key
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(FEATURES_TABLE)?;
            let bytes = serde_json::to_vec(value)?;
            table.insert(key, bytes.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Remove a feature key. Returns whether it was present.
    pub fn remove(&self, key: &str) -> StorageResult<bool> {
        let txn = self.db.begin_write()?;
        let removed = {
            let mut table = txn.open_table(FEATURES_TABLE)?;
            table.remove(key)?.is_some()
        };
        txn.commit()?;
        Ok(removed)
    }

    // ========== Shared Roster ==========

    /// Load the shared roster, empty if never saved
    pub fn load_roster(&self) -> StorageResult<Roster> {
        Ok(self.get(ROSTER_KEY)?.unwrap_or_default())
    }

    /// Persist the shared roster
    pub fn save_roster(&self, roster: &Roster) -> StorageResult<()> {
        self.set(ROSTER_KEY, roster)
    }

    // ========== Seating Charts ==========

    /// Insert or replace a chart
    pub fn upsert_chart(&self, chart: &SeatingChart) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(CHARTS_TABLE)?;
            let bytes = serde_json::to_vec(chart)?;
            table.insert(chart.id, bytes.as_slice())?;
        }
        txn.commit()?;
        tracing::debug!(chart_id = chart.id, "persisted seating chart");
        Ok(())
    }

    /// Get a chart by ID
    pub fn get_chart(&self, chart_id: ChartId) -> StorageResult<Option<SeatingChart>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CHARTS_TABLE)?;

        match table.get(chart_id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Get all saved charts
    ///
    /// Chart IDs are time-ordered snowflakes, so iteration order is
    /// creation order.
    pub fn list_charts(&self) -> StorageResult<Vec<SeatingChart>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CHARTS_TABLE)?;

        let mut charts = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            charts.push(serde_json::from_slice(value.value())?);
        }
        Ok(charts)
    }

    /// Delete a chart. Returns whether it was present.
    pub fn delete_chart(&self, chart_id: ChartId) -> StorageResult<bool> {
        let txn = self.db.begin_write()?;
        let removed = {
            let mut table = txn.open_table(CHARTS_TABLE)?;
            table.remove(chart_id)?.is_some()
        };
        txn.commit()?;
        Ok(removed)
    }

    // ========== Statistics ==========

    /// Get store statistics
    pub fn stats(&self) -> StorageResult<StoreStats> {
        let read_txn = self.db.begin_read()?;
        let features_table = read_txn.open_table(FEATURES_TABLE)?;
        let charts_table = read_txn.open_table(CHARTS_TABLE)?;

        Ok(StoreStats {
            feature_count: features_table.len()?,
            chart_count: charts_table.len()?,
        })
    }
}

/// Store statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub feature_count: u64,
    pub chart_count: u64,
}
