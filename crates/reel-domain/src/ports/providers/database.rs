//! Persistence port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{Filters, Record};

/// Table-oriented record store
#[async_trait]
pub trait DatabaseProvider: Send + Sync {
    /// Insert `record` into `table` and return its id
    async fn insert(&self, table: &str, record: Record) -> Result<String>;

    /// Return the rows of `table` matching every filter
    async fn query(&self, table: &str, filters: Option<&Filters>) -> Result<Vec<Record>>;

    /// Update the row `id` of `table`; `false` when no row matched
    async fn update(&self, table: &str, id: &str, changes: Record) -> Result<bool>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}
