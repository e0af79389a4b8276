//! # Reel - Provider Implementations
//!
//! This crate contains all user-selectable provider implementations. Each
//! provider implements a capability port defined in `reel-domain` and
//! registers itself into the matching `reel-application` registry slice, so
//! linking this crate is all it takes to make a provider selectable by name.
//!
//! ## Provider Categories
//!
//! | Capability | Port | Implementations |
//! |------------|------|-----------------|
//! | content | `ContentProvider` | quotes, facts, reddit |
//! | ai | `AiProvider` | openai_direct, groq, huggingface |
//! | tts | `TtsProvider` | gtts, elevenlabs |
//! | video | `VideoProvider` | ffmpeg |
//! | upload | `UploadProvider` | none, youtube |
//! | database | `DatabaseProvider` | sqlite, memory, supabase |
//!
//! Providers that need credentials fail at construction when the credential
//! is missing, which lets the resolver move on to the next candidate.

// Re-export reel-domain types commonly used with providers
pub use reel_domain::error::{Error, Result};
pub use reel_domain::ports::providers::{
    AiProvider, ContentProvider, DatabaseProvider, TtsProvider, UploadProvider, VideoProvider,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Content acquisition providers
pub mod content;

/// Script generation providers
pub mod ai;

/// Speech synthesis providers
pub mod tts;

/// Video assembly providers
pub mod video;

/// Publishing providers
pub mod upload;

/// Persistence providers
pub mod database;
