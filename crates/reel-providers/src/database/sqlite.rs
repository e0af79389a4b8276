//! SQLite database provider
//!
//! File-based storage for local runs. The connection is shared behind a
//! mutex and every statement runs on the blocking thread pool.
//!
//! Options: `db_path` (default `<output_dir>/reel.db`, `:memory:` allowed).

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{Connection, params_from_iter};
use serde_json::Value;
use tracing::{debug, info};

use reel_application::ports::registry::{DATABASE_PROVIDERS, DatabaseProviderEntry, ProviderConfig, ProviderFuture};
use reel_domain::constants::{CONTENT_TABLE, VIDEOS_TABLE};
use reel_domain::error::{Error, Result};
use reel_domain::ports::DatabaseProvider;
use reel_domain::value_objects::{Filters, Record};

use super::{record_id, validate_identifier, validate_keys};
use crate::constants::SQLITE_DEFAULT_FILE;

const IN_MEMORY: &str = ":memory:";

fn schema() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {CONTENT_TABLE} (
            id TEXT PRIMARY KEY,
            type TEXT,
            title TEXT,
            body TEXT,
            source TEXT,
            score REAL,
            created_at TEXT
        );
        CREATE TABLE IF NOT EXISTS {VIDEOS_TABLE} (
            id TEXT PRIMARY KEY,
            content_title TEXT,
            script_hook TEXT,
            audio_path TEXT,
            video_path TEXT,
            duration REAL,
            resolution TEXT,
            upload_url TEXT,
            upload_status TEXT,
            created_at TEXT
        );"
    )
}

fn db_error(context: &str, error: rusqlite::Error) -> Error {
    Error::database_with_source(format!("{context}: {error}"), error)
}

/// JSON value as an SQLite value; arrays and objects are stored as JSON text
fn to_sql(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
        Value::Number(n) => n
            .as_i64()
            .map_or_else(|| SqlValue::Real(n.as_f64().unwrap_or_default()), SqlValue::Integer),
        Value::String(s) => SqlValue::Text(s.clone()),
        other => SqlValue::Text(other.to_string()),
    }
}

/// SQLite value as JSON; blobs become hex strings
fn from_sql(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        ValueRef::Text(t) => Value::String(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::String(hex::encode(b)),
    }
}

fn insert_row(conn: &Connection, table: &str, record: &Record) -> Result<String> {
    let sql = if record.is_empty() {
        format!("INSERT INTO {table} DEFAULT VALUES")
    } else {
        let columns: Vec<&str> = record.keys().map(String::as_str).collect();
        let placeholders = vec!["?"; columns.len()].join(", ");
        format!("INSERT INTO {table} ({}) VALUES ({placeholders})", columns.join(", "))
    };
    conn.execute(&sql, params_from_iter(record.values().map(to_sql)))
        .map_err(|e| db_error(&format!("insert into {table} failed"), e))?;

    Ok(record_id(record).unwrap_or_else(|| conn.last_insert_rowid().to_string()))
}

fn query_rows(conn: &Connection, table: &str, filters: Option<&Filters>) -> Result<Vec<Record>> {
    let mut sql = format!("SELECT * FROM {table}");
    let mut params = Vec::new();
    if let Some(filters) = filters.filter(|f| !f.is_empty()) {
        let conditions: Vec<String> = filters.keys().map(|k| format!("{k} = ?")).collect();
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
        params.extend(filters.values().map(to_sql));
    }

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| db_error(&format!("query on {table} failed"), e))?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(str::to_string).collect();
    let mut rows = stmt
        .query(params_from_iter(params))
        .map_err(|e| db_error(&format!("query on {table} failed"), e))?;

    let mut records = Vec::new();
    while let Some(row) = rows.next().map_err(|e| db_error("row read failed", e))? {
        let mut record = Record::new();
        for (index, column) in columns.iter().enumerate() {
            let value = row.get_ref(index).map_err(|e| db_error("column read failed", e))?;
            record.insert(column.clone(), from_sql(value));
        }
        records.push(record);
    }
    Ok(records)
}

fn update_row(conn: &Connection, table: &str, id: &str, changes: &Record) -> Result<bool> {
    if changes.is_empty() {
        return Err(Error::invalid_argument("no fields to update"));
    }
    let assignments: Vec<String> = changes.keys().map(|k| format!("{k} = ?")).collect();
    let sql = format!("UPDATE {table} SET {} WHERE id = ?", assignments.join(", "));
    let params = changes
        .values()
        .map(to_sql)
        .chain(std::iter::once(SqlValue::Text(id.to_string())));
    let changed = conn
        .execute(&sql, params_from_iter(params))
        .map_err(|e| db_error(&format!("update of {table}/{id} failed"), e))?;
    Ok(changed > 0)
}

/// SQLite-backed database provider
pub struct SqliteDatabaseProvider {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl SqliteDatabaseProvider {
    /// Open (or create) the database at `path` and ensure the schema exists
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let open_path = path.clone();
        let conn = tokio::task::spawn_blocking(move || -> Result<Connection> {
            let conn = if open_path == Path::new(IN_MEMORY) {
                Connection::open_in_memory()
            } else {
                if let Some(parent) = open_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        Error::io_with_source(format!("Failed to create {}", parent.display()), e)
                    })?;
                }
                Connection::open(&open_path)
            }
            .map_err(|e| db_error("open failed", e))?;
            conn.execute_batch(&schema())
                .map_err(|e| db_error("schema creation failed", e))?;
            Ok(conn)
        })
        .await
        .map_err(|e| Error::internal(format!("SQLite open task failed: {e}")))??;

        info!("SQLite connected: {}", path.display());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        })
    }

    /// Database file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `f` with the connection on the blocking pool
    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| Error::internal("SQLite connection lock poisoned"))?;
            f(&guard)
        })
        .await
        .map_err(|e| Error::internal(format!("SQLite task failed: {e}")))?
    }
}

#[async_trait]
impl DatabaseProvider for SqliteDatabaseProvider {
    async fn insert(&self, table: &str, record: Record) -> Result<String> {
        let table = validate_identifier(table)?.to_string();
        validate_keys(&record)?;
        debug!("Inserting into {}", table);
        self.with_conn(move |conn| insert_row(conn, &table, &record)).await
    }

    async fn query(&self, table: &str, filters: Option<&Filters>) -> Result<Vec<Record>> {
        let table = validate_identifier(table)?.to_string();
        if let Some(filters) = filters {
            validate_keys(filters)?;
        }
        debug!("Querying {}", table);
        let filters = filters.cloned();
        self.with_conn(move |conn| query_rows(conn, &table, filters.as_ref()))
            .await
    }

    async fn update(&self, table: &str, id: &str, changes: Record) -> Result<bool> {
        let table = validate_identifier(table)?.to_string();
        validate_keys(&changes)?;
        debug!("Updating {}/{}", table, id);
        let id = id.to_string();
        self.with_conn(move |conn| update_row(conn, &table, &id, &changes))
            .await
    }

    fn provider_name(&self) -> &str {
        "sqlite"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn sqlite_factory(config: &ProviderConfig) -> ProviderFuture<dyn DatabaseProvider> {
    let path = config
        .extra
        .get("db_path")
        .map_or_else(|| config.output_dir.join(SQLITE_DEFAULT_FILE), PathBuf::from);
    let capability = config.capability;
    let name = config.provider.clone();
    Box::pin(async move {
        let provider = SqliteDatabaseProvider::open(path)
            .await
            .map_err(|e| Error::construction(capability, name, e.to_string()))?;
        let provider: Arc<dyn DatabaseProvider> = Arc::new(provider);
        Ok(provider)
    })
}

#[linkme::distributed_slice(DATABASE_PROVIDERS)]
static SQLITE_PROVIDER: DatabaseProviderEntry = DatabaseProviderEntry {
    name: "sqlite",
    description: "Local SQLite database file",
    factory: sqlite_factory,
};
