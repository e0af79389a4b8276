//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for capability providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Adapter defines:   #[linkme::distributed_slice(AI_PROVIDERS)]│
//! │                        static ENTRY: AiProviderEntry = ...      │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static AI_PROVIDERS: [Entry] = [..]  │
//! │                              ↓                                  │
//! │  3. ProviderRegistry::from_linked() collects every slice        │
//! │                              ↓                                  │
//! │  4. Resolver looks up: (capability, "groq") → descriptor        │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in reel-providers)
//!
//! ```ignore
//! use reel_application::ports::registry::{AiProviderEntry, AI_PROVIDERS};
//!
//! #[linkme::distributed_slice(AI_PROVIDERS)]
//! static GROQ_PROVIDER: AiProviderEntry = AiProviderEntry {
//!     name: "groq",
//!     description: "Groq chat completions",
//!     factory: groq_factory,
//! };
//! ```
//!
//! ### Resolving a Provider
//!
//! ```ignore
//! let registry = ProviderRegistry::from_linked();
//! let descriptor = registry.resolve_descriptor(CapabilityName::Ai, "groq")?;
//! let instance = descriptor.construct(ProviderConfig::new(CapabilityName::Ai, "groq")).await?;
//! ```

pub mod ai;
pub mod config;
pub mod content;
pub mod database;
pub mod entry;
pub mod table;
pub mod tts;
pub mod upload;
pub mod video;

pub use ai::{AI_PROVIDERS, AiProviderEntry, list_ai_providers};
pub use config::ProviderConfig;
pub use content::{CONTENT_PROVIDERS, ContentProviderEntry, list_content_providers};
pub use database::{DATABASE_PROVIDERS, DatabaseProviderEntry, list_database_providers};
pub use entry::{ProviderEntry, ProviderFuture};
pub use table::{ProviderDescriptor, ProviderRegistry};
pub use tts::{TTS_PROVIDERS, TtsProviderEntry, list_tts_providers};
pub use upload::{UPLOAD_PROVIDERS, UploadProviderEntry, list_upload_providers};
pub use video::{VIDEO_PROVIDERS, VideoProviderEntry, list_video_providers};
