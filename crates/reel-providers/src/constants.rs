//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in reel-domain) and infrastructure constants.

use std::time::Duration;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default timeout for API requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for large transfers (speech synthesis, uploads)
pub const TRANSFER_HTTP_TIMEOUT: Duration = Duration::from_secs(300);

/// User agent sent to public endpoints
pub const USER_AGENT: &str = concat!("reel/", env!("CARGO_PKG_VERSION"));

/// Error message for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "request timed out after";

// ============================================================================
// CONTENT PROVIDER CONSTANTS
// ============================================================================

/// Random quote endpoint (primary)
pub const QUOTABLE_RANDOM_URL: &str = "https://api.quotable.io/random";

/// Random quote endpoint (secondary)
pub const ZENQUOTES_RANDOM_URL: &str = "https://zenquotes.io/api/random";

/// Random fact endpoint
pub const USELESS_FACTS_URL: &str = "https://uselessfacts.jsph.pl/random.json?language=en";

/// Reddit public listing base URL
pub const REDDIT_BASE_URL: &str = "https://www.reddit.com";

/// Subreddits read when none are configured
pub const REDDIT_DEFAULT_SUBREDDITS: &str = "India,IndianStories";

/// Minimum upvotes for a Reddit post unless configured
pub const REDDIT_DEFAULT_MIN_UPVOTES: i64 = 100;

/// Source label of curated quotes
pub const CURATED_QUOTES_SOURCE: &str = "Curated Hinglish";

/// Source label of curated facts
pub const CURATED_FACTS_SOURCE: &str = "Curated Indian Facts";

/// Score given to curated quotes
pub const CURATED_QUOTE_SCORE: f64 = 75.0;

/// Score given to curated facts
pub const CURATED_FACT_SCORE: f64 = 80.0;

/// Maximum characters of a body copied into a title
pub const TITLE_MAX_CHARS: usize = 50;

// ============================================================================
// AI PROVIDER CONSTANTS
// ============================================================================

/// OpenAI API base URL
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default OpenAI chat model
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4";

/// Groq OpenAI-compatible base URL
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default Groq chat model
pub const GROQ_DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Hugging Face inference API base URL
pub const HUGGINGFACE_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Default Hugging Face model
pub const HUGGINGFACE_DEFAULT_MODEL: &str = "meta-llama/Llama-3.2-3B-Instruct";

/// Sampling temperature for script generation
pub const SCRIPT_TEMPERATURE: f64 = 0.7;

/// Token limit for chat completions
pub const SCRIPT_MAX_TOKENS: u64 = 1000;

/// Token limit for Hugging Face text generation
pub const HUGGINGFACE_MAX_NEW_TOKENS: u64 = 800;

/// Characters of raw output used as a hook when no HOOK section is found
pub const FALLBACK_HOOK_CHARS: usize = 100;

// ============================================================================
// TTS PROVIDER CONSTANTS
// ============================================================================

/// Google Translate speech endpoint
pub const GTTS_BASE_URL: &str = "https://translate.google.com/translate_tts";

/// Default speech language
pub const GTTS_DEFAULT_LANGUAGE: &str = "hi";

/// Maximum characters per speech request
pub const GTTS_MAX_CHUNK_CHARS: usize = 200;

/// ElevenLabs API base URL
pub const ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io/v1";

/// Default ElevenLabs voice
pub const ELEVENLABS_DEFAULT_VOICE: &str = "21m00Tcm4TlvDq8ikWAM";

/// Default ElevenLabs model
pub const ELEVENLABS_DEFAULT_MODEL: &str = "eleven_multilingual_v2";

/// Directory (under the output dir) speech files are written to
pub const AUDIO_SUBDIR: &str = "audio";

// ============================================================================
// VIDEO PROVIDER CONSTANTS
// ============================================================================

/// Default output resolution (portrait)
pub const VIDEO_DEFAULT_RESOLUTION: &str = "1080x1920";

/// Default frame rate
pub const VIDEO_DEFAULT_FPS: u32 = 30;

/// Gradient start colour
pub const VIDEO_GRADIENT_TOP: &str = "0x19193c";

/// Gradient end colour
pub const VIDEO_GRADIENT_BOTTOM: &str = "0x3c193c";

/// Words per caption line
pub const CAPTION_WORDS_PER_LINE: usize = 6;

/// Caption lines shown at once
pub const CAPTION_MAX_LINES: usize = 4;

/// Default caption font size
pub const CAPTION_FONT_SIZE: u32 = 60;

/// Directory (under the output dir) videos are written to
pub const VIDEO_SUBDIR: &str = "videos";

/// Pexels API base URL
pub const PEXELS_BASE_URL: &str = "https://api.pexels.com";

/// Environment variable holding the Pexels API key
pub const PEXELS_API_KEY_VAR: &str = "PEXELS_API_KEY";

/// Background source using Pexels stock clips
pub const BACKGROUND_SOURCE_PEXELS: &str = "pexels";

/// Search categories that suit shorts
pub const PEXELS_DEFAULT_CATEGORIES: &str =
    "satisfying,nature,abstract,cooking,city,ocean,clouds,fire,water,technology";

/// Results requested per search
pub const PEXELS_PER_PAGE: &str = "15";

/// Shortest clip accepted as a background; shorter clips loop anyway
pub const PEXELS_MIN_DURATION_SECS: i64 = 5;

/// Preferred rendition heights
pub const PEXELS_MIN_HEIGHT: i64 = 720;
pub const PEXELS_MAX_HEIGHT: i64 = 1080;

/// Directory (under the output dir) downloaded backgrounds are cached in
pub const BACKGROUND_CACHE_SUBDIR: &str = "cache/backgrounds";

// ============================================================================
// UPLOAD PROVIDER CONSTANTS
// ============================================================================

/// YouTube resumable upload endpoint
pub const YOUTUBE_UPLOAD_URL: &str =
    "https://www.googleapis.com/upload/youtube/v3/videos?uploadType=resumable&part=snippet,status";

/// Public URL prefix of a published short
pub const YOUTUBE_SHORTS_URL: &str = "https://youtube.com/shorts";

/// Default privacy status for uploads
pub const YOUTUBE_DEFAULT_PRIVACY: &str = "private";

/// YouTube category "People & Blogs"
pub const YOUTUBE_DEFAULT_CATEGORY: &str = "22";

// ============================================================================
// DATABASE PROVIDER CONSTANTS
// ============================================================================

/// Default SQLite database file name (under the output dir)
pub const SQLITE_DEFAULT_FILE: &str = "reel.db";
