//! Capability Provider Ports
//!
//! | Port | Capability | Operation |
//! |------|------------|-----------|
//! | ContentProvider | content | fetch source content |
//! | AiProvider | ai | generate a narration script |
//! | TtsProvider | tts | synthesize speech |
//! | VideoProvider | video | assemble the final video |
//! | UploadProvider | upload | publish the video |
//! | DatabaseProvider | database | persist pipeline records |

/// AI script generation port
pub mod ai;
/// Capability marker trait and instance sum type
pub mod capability;
/// Content acquisition port
pub mod content;
/// Persistence port
pub mod database;
/// Text-to-speech port
pub mod tts;
/// Upload port
pub mod upload;
/// Video assembly port
pub mod video;

pub use ai::AiProvider;
pub use capability::{
    AiCapability, Capability, ContentCapability, DatabaseCapability, ProviderInstance,
    TtsCapability, UploadCapability, VideoCapability,
};
pub use content::ContentProvider;
pub use database::DatabaseProvider;
pub use tts::TtsProvider;
pub use upload::UploadProvider;
pub use video::VideoProvider;
