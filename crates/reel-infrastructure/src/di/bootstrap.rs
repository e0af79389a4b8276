//! Composition Root
//!
//! Wires the linkme provider registry, the live configuration and the
//! observers into one `ProviderResolver`, and the pipeline on top of it.
//!
//! ```text
//! AppConfig → SharedConfig (ArcSwap) ─┐
//!                                     ├→ ProviderResolver → PipelineService
//! linkme slices → ProviderRegistry ───┘          │
//!                                    TracingObserver + BroadcastObserver
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let report = context.pipeline().run(&context.pipeline_request()).await?;
//!
//! // Later: swap configuration; cached providers are dropped
//! context.reload(new_config)?;
//! ```

// Force-link reel-providers so its linkme registrations are included
extern crate reel_providers;

use std::sync::Arc;

use reel_application::ports::{
    CapabilityConfigSource, CompositeObserver, ProviderRegistry, ResolutionObserver,
};
use reel_application::resolution::{ErrorClassifier, ProviderResolver, QuotaPatternClassifier};
use reel_application::use_cases::{PipelineRequest, PipelineService};
use reel_domain::error::Result;
use reel_domain::events::ResolutionEvent;
use tokio::sync::broadcast;
use tracing::info;

use crate::config::{AppConfig, ConfigLoader, SharedConfig, validate_app_config};
use crate::di::resolver::AvailableProviders;
use crate::observability::{BroadcastObserver, TracingObserver};

/// Application context: configuration, registry, resolver and pipeline
pub struct AppContext {
    config: Arc<SharedConfig>,
    registry: Arc<ProviderRegistry>,
    resolver: Arc<ProviderResolver>,
    pipeline: PipelineService,
    classifier: Arc<dyn ErrorClassifier>,
    events: BroadcastObserver,
}

impl AppContext {
    /// Current configuration snapshot
    pub fn config(&self) -> Arc<AppConfig> {
        self.config.snapshot()
    }

    /// Live configuration holder
    pub fn shared_config(&self) -> &Arc<SharedConfig> {
        &self.config
    }

    /// Provider registry
    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    /// Provider resolver
    pub fn resolver(&self) -> &Arc<ProviderResolver> {
        &self.resolver
    }

    /// Classifier labelling candidate failures
    pub fn classifier(&self) -> &Arc<dyn ErrorClassifier> {
        &self.classifier
    }

    /// Pipeline use case
    pub fn pipeline(&self) -> &PipelineService {
        &self.pipeline
    }

    /// Pipeline request with the configured limit and style
    pub fn pipeline_request(&self) -> PipelineRequest {
        let config = self.config();
        PipelineRequest {
            limit: config.app.content_limit,
            style: config.app.script_style.clone(),
            ..PipelineRequest::default()
        }
    }

    /// Registered providers by capability
    pub fn available_providers(&self) -> AvailableProviders {
        AvailableProviders::from_registry(&self.registry)
    }

    /// Subscribe to resolution events
    pub fn subscribe(&self) -> broadcast::Receiver<ResolutionEvent> {
        self.events.subscribe()
    }

    /// Install `config` and drop every cached provider
    ///
    /// An invalid configuration leaves the current one and the cache untouched.
    pub fn reload(&self, config: AppConfig) -> Result<()> {
        self.config.replace(config)?;
        self.resolver.invalidate_all();
        info!("Configuration reloaded; cached providers cleared");
        Ok(())
    }

    /// Load from `loader`, then [`reload`](Self::reload)
    pub fn reload_from(&self, loader: &ConfigLoader) -> Result<()> {
        self.reload(loader.load()?)
    }
}

/// Build the application context from `config` and the linked providers
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    validate_app_config(&config)?;
    Ok(build_context(
        SharedConfig::new(config),
        ProviderRegistry::from_linked(),
    ))
}

/// Build the application context from explicit parts
///
/// Configured quota patterns extend the built-in set and are read from
/// `config` once, here.
pub fn build_context(config: SharedConfig, registry: ProviderRegistry) -> AppContext {
    let config = Arc::new(config);
    let registry = Arc::new(registry);
    let events = BroadcastObserver::new();

    let snapshot = config.snapshot();
    let classifier: Arc<dyn ErrorClassifier> = Arc::new(
        QuotaPatternClassifier::with_extra_patterns(&snapshot.app.quota_patterns),
    );
    let observer = CompositeObserver::new()
        .with(Arc::new(TracingObserver))
        .with(Arc::new(events.clone()));

    let source: Arc<dyn CapabilityConfigSource> = config.clone();
    let observer: Arc<dyn ResolutionObserver> = Arc::new(observer);
    let resolver = Arc::new(
        ProviderResolver::new(Arc::clone(&registry), source)
            .with_classifier(Arc::clone(&classifier))
            .with_observer(observer),
    );
    let pipeline = PipelineService::new(Arc::clone(&resolver));

    info!(
        "{} initialized with {} capabilities",
        snapshot.app.name,
        registry.capabilities().len()
    );

    AppContext {
        config,
        registry,
        resolver,
        pipeline,
        classifier,
        events,
    }
}
