//! Database Provider Implementations
//!
//! | Provider | Storage |
//! |----------|---------|
//! | `sqlite` | local SQLite file (`rusqlite`) |
//! | `memory` | in-process tables, lost on exit |
//! | `supabase` | Supabase PostgREST API |

pub mod memory;
pub mod sqlite;
pub mod supabase;

pub use memory::MemoryDatabaseProvider;
pub use sqlite::SqliteDatabaseProvider;
pub use supabase::SupabaseDatabaseProvider;

use reel_domain::error::{Error, Result};
use reel_domain::value_objects::{Filters, Record};

/// Reject table and column names that are not plain identifiers
///
/// Names are interpolated into SQL and URLs, values never are.
pub(crate) fn validate_identifier(name: &str) -> Result<&str> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(name)
    } else {
        Err(Error::invalid_argument(format!("invalid identifier '{name}'")))
    }
}

/// Validate every key of a record or filter set
pub(crate) fn validate_keys(fields: &serde_json::Map<String, serde_json::Value>) -> Result<()> {
    fields.keys().try_for_each(|k| validate_identifier(k).map(|_| ()))
}

/// Whether `record` matches every equality filter
pub(crate) fn matches_filters(record: &Record, filters: Option<&Filters>) -> bool {
    filters.is_none_or(|filters| filters.iter().all(|(k, v)| record.get(k) == Some(v)))
}

/// `id` of a record as text
pub(crate) fn record_id(record: &Record) -> Option<String> {
    match record.get("id")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
