//! In-memory database provider
//!
//! Tables live in a concurrent map for the lifetime of the process. Useful as
//! a database fallback and in tests.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use reel_application::ports::registry::{DATABASE_PROVIDERS, DatabaseProviderEntry, ProviderConfig, ProviderFuture};
use reel_domain::error::Result;
use reel_domain::ports::DatabaseProvider;
use reel_domain::value_objects::{Filters, Record};

use super::{matches_filters, record_id, validate_identifier, validate_keys};

/// Process-local tables of JSON records
#[derive(Debug, Default)]
pub struct MemoryDatabaseProvider {
    tables: DashMap<String, Vec<Record>>,
}

impl MemoryDatabaseProvider {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in `table`
    pub fn count(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, |rows| rows.len())
    }
}

#[async_trait]
impl DatabaseProvider for MemoryDatabaseProvider {
    async fn insert(&self, table: &str, mut record: Record) -> Result<String> {
        validate_identifier(table)?;
        validate_keys(&record)?;
        debug!("Inserting into {}", table);

        let mut rows = self.tables.entry(table.to_string()).or_default();
        let id = record_id(&record).unwrap_or_else(|| (rows.len() + 1).to_string());
        record.insert("id".to_string(), serde_json::Value::String(id.clone()));
        rows.push(record);
        Ok(id)
    }

    async fn query(&self, table: &str, filters: Option<&Filters>) -> Result<Vec<Record>> {
        validate_identifier(table)?;
        Ok(self
            .tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| matches_filters(row, filters))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update(&self, table: &str, id: &str, changes: Record) -> Result<bool> {
        validate_identifier(table)?;
        validate_keys(&changes)?;
        let Some(mut rows) = self.tables.get_mut(table) else {
            return Ok(false);
        };

        let mut updated = false;
        for row in rows.iter_mut().filter(|row| record_id(row).as_deref() == Some(id)) {
            for (key, value) in &changes {
                row.insert(key.clone(), value.clone());
            }
            updated = true;
        }
        Ok(updated)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

fn memory_factory(_config: &ProviderConfig) -> ProviderFuture<dyn DatabaseProvider> {
    Box::pin(async move {
        let provider: Arc<dyn DatabaseProvider> = Arc::new(MemoryDatabaseProvider::new());
        Ok(provider)
    })
}

#[linkme::distributed_slice(DATABASE_PROVIDERS)]
static MEMORY_PROVIDER: DatabaseProviderEntry = DatabaseProviderEntry {
    name: "memory",
    description: "In-process tables (not persisted)",
    factory: memory_factory,
};
