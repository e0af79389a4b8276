//! # Reel Domain
//!
//! Core types shared by every layer of the short-form video pipeline.
//!
//! The pipeline chains six swappable capabilities (content acquisition,
//! script generation, text-to-speech, video assembly, upload and
//! persistence). This crate defines what each capability promises, the
//! values that flow between them, and the vocabulary used to describe how a
//! provider was resolved for one invocation.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ports`] | One async trait per capability plus the `Capability` marker trait |
//! | [`value_objects`] | Content items, scripts, media files, config and attempt records |
//! | [`events`] | Resolution events emitted by the fallback executor |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Domain-level constants |

/// Domain-level constants
pub mod constants;
/// Error handling types
pub mod error;
/// Resolution events
pub mod events;
/// Capability contracts
pub mod ports;
/// Immutable value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use events::ResolutionEvent;
pub use value_objects::*;
