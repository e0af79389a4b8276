//! Typed capability operations
//!
//! One method per capability contract operation, each routed through the
//! fallback executor.

use std::path::Path;

use reel_domain::error::Result;
use reel_domain::ports::{
    AiCapability, ContentCapability, DatabaseCapability, TtsCapability, UploadCapability,
    VideoCapability,
};
use reel_domain::value_objects::{
    ContentItem, Filters, MediaFile, Record, ScriptResult, UploadReceipt, UploadRequest,
    VideoRequest,
};

use super::{InvocationOutcome, ProviderResolver};

impl ProviderResolver {
    /// Fetch up to `limit` content items
    pub async fn fetch_content(&self, limit: usize) -> Result<InvocationOutcome<Vec<ContentItem>>> {
        self.invoke::<ContentCapability, _, _, _>(move |provider| async move {
            provider.fetch_content(limit).await
        })
        .await
    }

    /// Score `item` with the content provider
    pub async fn score_virality(&self, item: &ContentItem) -> Result<InvocationOutcome<f64>> {
        self.invoke::<ContentCapability, _, _, _>(move |provider| async move {
            provider.score_virality(item).await
        })
        .await
    }

    /// Generate a narration script for `content`
    pub async fn generate_script(
        &self,
        content: &ContentItem,
        style: &str,
    ) -> Result<InvocationOutcome<ScriptResult>> {
        self.invoke::<AiCapability, _, _, _>(move |provider| async move {
            provider.generate_script(content, style).await
        })
        .await
    }

    /// Synthesize `text` to speech
    pub async fn text_to_speech(
        &self,
        text: &str,
        output_path: Option<&Path>,
    ) -> Result<InvocationOutcome<MediaFile>> {
        self.invoke::<TtsCapability, _, _, _>(move |provider| async move {
            provider.text_to_speech(text, output_path).await
        })
        .await
    }

    /// Assemble the final video
    pub async fn assemble_video(
        &self,
        request: &VideoRequest,
    ) -> Result<InvocationOutcome<MediaFile>> {
        self.invoke::<VideoCapability, _, _, _>(move |provider| async move {
            provider.assemble_video(request).await
        })
        .await
    }

    /// Publish a video
    pub async fn upload(&self, request: &UploadRequest) -> Result<InvocationOutcome<UploadReceipt>> {
        self.invoke::<UploadCapability, _, _, _>(move |provider| async move {
            provider.upload(request).await
        })
        .await
    }

    /// Insert `record` into `table`
    pub async fn insert_record(
        &self,
        table: &str,
        record: Record,
    ) -> Result<InvocationOutcome<String>> {
        self.invoke::<DatabaseCapability, _, _, _>(move |provider| {
            let record = record.clone();
            async move { provider.insert(table, record).await }
        })
        .await
    }

    /// Query `table` with optional equality filters
    pub async fn query_records(
        &self,
        table: &str,
        filters: Option<&Filters>,
    ) -> Result<InvocationOutcome<Vec<Record>>> {
        self.invoke::<DatabaseCapability, _, _, _>(move |provider| async move {
            provider.query(table, filters).await
        })
        .await
    }

    /// Update row `id` of `table`
    pub async fn update_record(
        &self,
        table: &str,
        id: &str,
        changes: Record,
    ) -> Result<InvocationOutcome<bool>> {
        self.invoke::<DatabaseCapability, _, _, _>(move |provider| {
            let changes = changes.clone();
            async move { provider.update(table, id, changes).await }
        })
        .await
    }
}
