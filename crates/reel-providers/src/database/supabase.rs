//! Supabase database provider
//!
//! Stores records through the PostgREST API of a Supabase project. Requires
//! the project URL (`SUPABASE_URL`) and a service key (`SUPABASE_KEY`).

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, info};

use reel_application::ports::registry::{DATABASE_PROVIDERS, DatabaseProviderEntry, ProviderConfig, ProviderFuture};
use reel_domain::error::{Error, Result};
use reel_domain::ports::DatabaseProvider;
use reel_domain::value_objects::{Filters, Record};

use super::{validate_identifier, validate_keys};
use crate::constants::{CONTENT_TYPE_JSON, DEFAULT_HTTP_TIMEOUT};
use crate::utils::{HttpResponseUtils, build_http_client, request_error};

const PROVIDER_NAME: &str = "supabase";

/// `eq.<value>` filter expression for PostgREST
pub fn eq_filter(value: &Value) -> String {
    match value {
        Value::String(s) => format!("eq.{s}"),
        Value::Null => "is.null".to_string(),
        other => format!("eq.{other}"),
    }
}

/// Supabase PostgREST provider
pub struct SupabaseDatabaseProvider {
    http_client: Client,
    rest_url: String,
    api_key: String,
}

impl SupabaseDatabaseProvider {
    /// Build from provider configuration
    ///
    /// The project URL comes from `base_url`, else the `SUPABASE_URL`
    /// environment variable.
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let url = config
            .base_url
            .clone()
            .or_else(|| std::env::var("SUPABASE_URL").ok())
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                Error::missing_credential(config.capability, &config.provider, "SUPABASE_URL")
            })?;
        let api_key = config.require_api_key("SUPABASE_KEY")?.trim().to_string();

        info!("Supabase connected: {}", url.trim());
        Ok(Self {
            http_client: build_http_client(config, DEFAULT_HTTP_TIMEOUT)?,
            rest_url: format!("{}/rest/v1", url.trim().trim_end_matches('/')),
            api_key,
        })
    }

    /// Endpoint of `table`
    pub fn table_url(&self, table: &str) -> Result<String> {
        Ok(format!("{}/{}", self.rest_url, validate_identifier(table)?))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Content-Type", CONTENT_TYPE_JSON)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Value> {
        let response = self
            .authorized(builder)
            .send()
            .await
            .map_err(|e| request_error(PROVIDER_NAME, DEFAULT_HTTP_TIMEOUT, &e))?;
        HttpResponseUtils::check_and_parse(response, PROVIDER_NAME).await
    }
}

fn rows(value: Value) -> Vec<Record> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        Value::Object(map) => vec![map],
        _ => Vec::new(),
    }
}

#[async_trait]
impl DatabaseProvider for SupabaseDatabaseProvider {
    async fn insert(&self, table: &str, record: Record) -> Result<String> {
        validate_keys(&record)?;
        debug!("Inserting into {}", table);
        let request = self
            .http_client
            .post(self.table_url(table)?)
            .header("Prefer", "return=representation")
            .json(&record);
        let inserted = rows(self.send(request).await?);

        inserted
            .first()
            .and_then(super::record_id)
            .ok_or_else(|| Error::provider(PROVIDER_NAME, format!("insert into {table} returned no id")))
    }

    async fn query(&self, table: &str, filters: Option<&Filters>) -> Result<Vec<Record>> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        if let Some(filters) = filters {
            validate_keys(filters)?;
            params.extend(filters.iter().map(|(k, v)| (k.clone(), eq_filter(v))));
        }
        debug!("Querying {}", table);
        let request = self.http_client.get(self.table_url(table)?).query(&params);
        Ok(rows(self.send(request).await?))
    }

    async fn update(&self, table: &str, id: &str, changes: Record) -> Result<bool> {
        validate_keys(&changes)?;
        debug!("Updating {}/{}", table, id);
        let request = self
            .http_client
            .patch(self.table_url(table)?)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&changes);
        Ok(!rows(self.send(request).await?).is_empty())
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn supabase_factory(config: &ProviderConfig) -> ProviderFuture<dyn DatabaseProvider> {
    let config = config.clone();
    Box::pin(async move {
        let provider: Arc<dyn DatabaseProvider> = Arc::new(SupabaseDatabaseProvider::from_config(&config)?);
        Ok(provider)
    })
}

#[linkme::distributed_slice(DATABASE_PROVIDERS)]
static SUPABASE_PROVIDER: DatabaseProviderEntry = DatabaseProviderEntry {
    name: PROVIDER_NAME,
    description: "Supabase (PostgREST) hosted Postgres",
    factory: supabase_factory,
};
