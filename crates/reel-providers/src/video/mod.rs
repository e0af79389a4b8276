//! Video Provider Implementations
//!
//! | Provider | Tooling |
//! |----------|---------|
//! | `ffmpeg` | `ffmpeg` + `ffprobe` subprocesses, Pexels stock backgrounds |

pub mod ffmpeg;
pub mod pexels;

pub use ffmpeg::{FfmpegSettings, FfmpegVideoProvider};
pub use pexels::{PexelsBackgrounds, PexelsClip};
