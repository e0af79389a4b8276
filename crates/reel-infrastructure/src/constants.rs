//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "reel.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "reel";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "REEL";

/// Separator between nested keys in environment variable names
///
/// `REEL_AI__PROVIDER=groq` sets `ai.provider`.
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Provider option naming the environment variable that holds the API key
pub const API_KEY_ENV_OPTION: &str = "api_key_env";

/// Credential variables of providers whose name differs from `<PROVIDER>_API_KEY`
pub const KNOWN_CREDENTIAL_VARIABLES: &[(&str, &str)] = &[
    ("openai_direct", "OPENAI_API_KEY"),
    ("youtube", "YOUTUBE_ACCESS_TOKEN"),
    ("supabase", "SUPABASE_KEY"),
    ("ffmpeg", "PEXELS_API_KEY"),
];

// ============================================================================
// PROVIDER SELECTION DEFAULTS
// ============================================================================

/// Default content provider
pub const DEFAULT_CONTENT_PROVIDER: &str = "reddit";

/// Default content fallback
pub const DEFAULT_CONTENT_FALLBACK: &str = "quotes";

/// Default script provider
pub const DEFAULT_AI_PROVIDER: &str = "groq";

/// Default speech provider
pub const DEFAULT_TTS_PROVIDER: &str = "gtts";

/// Default video provider
pub const DEFAULT_VIDEO_PROVIDER: &str = "ffmpeg";

/// Default upload provider
pub const DEFAULT_UPLOAD_PROVIDER: &str = "none";

/// Default database provider
pub const DEFAULT_DATABASE_PROVIDER: &str = "sqlite";

/// Default application name
pub const DEFAULT_APP_NAME: &str = "reel";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "REEL_LOG";

/// File name stem of rotated log files
pub const LOG_FILE_STEM: &str = "reel";

// ============================================================================
// OBSERVABILITY CONSTANTS
// ============================================================================

/// Buffered resolution events per broadcast subscriber
pub const EVENT_CHANNEL_CAPACITY: usize = 1024;
