//! Value objects
//!
//! Immutable values exchanged between the pipeline's capabilities and the
//! resolution engine.

/// Capability names
pub mod capability;
/// Content items and scripts
pub mod content;
/// Media files, upload and database values
pub mod media;
/// Provider selection configuration
pub mod provider_config;
/// Attempt history records
pub mod resolution;

pub use capability::CapabilityName;
pub use content::{ContentItem, ContentKind, ScriptResult};
pub use media::{Filters, MediaFile, Record, UploadReceipt, UploadRequest, VideoRequest};
pub use provider_config::{CapabilityConfig, FallbackSpec, ProviderSettings};
pub use resolution::{
    AttemptRecord, AttemptStatus, CandidateFailure, CandidateRole, ErrorClass, FailureStage,
};
