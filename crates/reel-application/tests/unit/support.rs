//! Scripted providers and helpers shared by the unit tests

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reel_application::ports::infrastructure::ResolutionObserver;
use reel_application::ports::registry::{ProviderConfig, ProviderFuture, ProviderRegistry};
use reel_domain::error::{Error, Result};
use reel_domain::events::ResolutionEvent;
use reel_domain::ports::{
    AiProvider, Capability, ContentProvider, DatabaseProvider, TtsProvider, UploadProvider,
    VideoProvider,
};
use reel_domain::value_objects::{
    ContentItem, ContentKind, Filters, MediaFile, Record, ScriptResult, UploadReceipt,
    UploadRequest, VideoRequest,
};

/// How a scripted provider's factory behaves
#[derive(Debug, Clone, Copy)]
pub enum Construct {
    Ok,
    Fail(&'static str),
}

/// How a scripted provider's operation behaves
#[derive(Debug, Clone, Copy)]
pub enum Operate {
    Ok,
    Fail(&'static str),
    Hang,
}

/// Call counters of one registered provider
#[derive(Debug, Default)]
pub struct Counters {
    constructions: AtomicUsize,
    calls: AtomicUsize,
    inserted: Mutex<Vec<(String, Record)>>,
}

impl Counters {
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn inserted(&self) -> Vec<(String, Record)> {
        self.inserted.lock().unwrap().clone()
    }
}

/// A provider implementing every capability with scripted behaviour
pub struct Scripted {
    name: &'static str,
    operate: Operate,
    counters: Arc<Counters>,
}

impl Scripted {
    pub fn new(name: &'static str, operate: Operate) -> Self {
        Self {
            name,
            operate,
            counters: Arc::default(),
        }
    }

    async fn run(&self) -> Result<()> {
        self.counters.calls.fetch_add(1, Ordering::SeqCst);
        match self.operate {
            Operate::Ok => Ok(()),
            Operate::Fail(message) => Err(Error::provider(self.name, message)),
            Operate::Hang => std::future::pending().await,
        }
    }
}

#[async_trait]
impl ContentProvider for Scripted {
    async fn fetch_content(&self, limit: usize) -> Result<Vec<ContentItem>> {
        self.run().await?;
        Ok((0..limit)
            .map(|i| {
                ContentItem::new(
                    format!("{}-{i}", self.name),
                    ContentKind::Quote,
                    format!("Title from {}", self.name),
                    "Mehnat karo, phal milega.",
                    self.name,
                    50.0,
                )
            })
            .collect())
    }

    async fn score_virality(&self, _item: &ContentItem) -> Result<f64> {
        self.run().await?;
        Ok(42.0)
    }

    fn provider_name(&self) -> &str {
        self.name
    }
}

#[async_trait]
impl AiProvider for Scripted {
    async fn generate_script(&self, content: &ContentItem, style: &str) -> Result<ScriptResult> {
        self.run().await?;
        Ok(
            ScriptResult::from_sections(format!("Hook by {}", self.name), &content.body, "CTA", self.name)
                .with_metadata("style", style),
        )
    }

    fn provider_name(&self) -> &str {
        self.name
    }
}

#[async_trait]
impl TtsProvider for Scripted {
    async fn text_to_speech(&self, _text: &str, output_path: Option<&Path>) -> Result<MediaFile> {
        self.run().await?;
        let path = output_path.unwrap_or(Path::new("output/audio.mp3"));
        Ok(MediaFile::new(path, 12.5, self.name))
    }

    fn provider_name(&self) -> &str {
        self.name
    }
}

#[async_trait]
impl VideoProvider for Scripted {
    async fn assemble_video(&self, request: &VideoRequest) -> Result<MediaFile> {
        self.run().await?;
        let path = request
            .output_path
            .clone()
            .unwrap_or_else(|| "output/video.mp4".into());
        Ok(MediaFile::new(path, 12.5, self.name).with_metadata("resolution", "1080x1920"))
    }

    fn provider_name(&self) -> &str {
        self.name
    }
}

#[async_trait]
impl UploadProvider for Scripted {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadReceipt> {
        self.run().await?;
        Ok(UploadReceipt {
            id: format!("{}-upload", self.name),
            url: request.video_path.display().to_string(),
            status: "skipped".to_string(),
        })
    }

    fn platform_name(&self) -> &str {
        self.name
    }

    fn provider_name(&self) -> &str {
        self.name
    }
}

#[async_trait]
impl DatabaseProvider for Scripted {
    async fn insert(&self, table: &str, record: Record) -> Result<String> {
        self.run().await?;
        let id = record
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or("row-1")
            .to_string();
        self.counters
            .inserted
            .lock()
            .unwrap()
            .push((table.to_string(), record));
        Ok(id)
    }

    async fn query(&self, _table: &str, _filters: Option<&Filters>) -> Result<Vec<Record>> {
        self.run().await?;
        Ok(Vec::new())
    }

    async fn update(&self, _table: &str, _id: &str, _changes: Record) -> Result<bool> {
        self.run().await?;
        Ok(true)
    }

    fn provider_name(&self) -> &str {
        self.name
    }
}

pub fn as_content(p: Arc<Scripted>) -> Arc<dyn ContentProvider> {
    p
}

pub fn as_ai(p: Arc<Scripted>) -> Arc<dyn AiProvider> {
    p
}

pub fn as_tts(p: Arc<Scripted>) -> Arc<dyn TtsProvider> {
    p
}

pub fn as_video(p: Arc<Scripted>) -> Arc<dyn VideoProvider> {
    p
}

pub fn as_upload(p: Arc<Scripted>) -> Arc<dyn UploadProvider> {
    p
}

pub fn as_database(p: Arc<Scripted>) -> Arc<dyn DatabaseProvider> {
    p
}

/// Register a scripted provider of capability `C` and return its counters
pub fn register_scripted<C: Capability>(
    registry: &mut ProviderRegistry,
    name: &'static str,
    construct: Construct,
    operate: Operate,
    erase: fn(Arc<Scripted>) -> Arc<C::Provider>,
) -> Arc<Counters> {
    let counters = Arc::new(Counters::default());
    let shared = Arc::clone(&counters);
    registry.register::<C, _>(
        name,
        "scripted test provider",
        move |config: &ProviderConfig| -> ProviderFuture<C::Provider> {
            let counters = Arc::clone(&shared);
            let capability = config.capability;
            Box::pin(async move {
                counters.constructions.fetch_add(1, Ordering::SeqCst);
                match construct {
                    Construct::Fail(message) => Err(Error::construction(capability, name, message)),
                    Construct::Ok => Ok(erase(Arc::new(Scripted {
                        name,
                        operate,
                        counters,
                    }))),
                }
            })
        },
    );
    counters
}

/// Observer keeping every event
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ResolutionEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<ResolutionEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ResolutionObserver for RecordingObserver {
    fn notify(&self, event: &ResolutionEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// A content item for operations that need one
pub fn sample_item() -> ContentItem {
    ContentItem::new(
        "quote-1",
        ContentKind::Quote,
        "Mehnat",
        "Mehnat karo, phal milega.",
        "test",
        70.0,
    )
}
