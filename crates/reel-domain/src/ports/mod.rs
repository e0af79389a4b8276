//! Domain Port Interfaces
//!
//! Contracts implemented by the adapters in `reel-providers`. Each capability
//! has exactly one trait; concrete implementations are chosen at runtime from
//! configuration.

/// Capability contracts
pub mod providers;

pub use providers::{
    AiCapability, AiProvider, Capability, ContentCapability, ContentProvider, DatabaseCapability,
    DatabaseProvider, ProviderInstance, TtsCapability, TtsProvider, UploadCapability,
    UploadProvider, VideoCapability, VideoProvider,
};
