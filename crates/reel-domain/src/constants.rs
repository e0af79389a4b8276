//! Domain layer constants
//!
//! Values that are part of the pipeline's behaviour rather than of any
//! particular adapter.

/// Default narration style requested from script generators
pub const DEFAULT_SCRIPT_STYLE: &str = "hinglish";

/// Call to action used when a generated script has no CTA section
pub const DEFAULT_CTA: &str = "Like aur share karo!";

/// Spoken words per minute used to estimate narration length
pub const NARRATION_WORDS_PER_MINUTE: f64 = 150.0;

/// Maximum virality score
pub const MAX_VIRALITY_SCORE: f64 = 100.0;

/// Number of content items fetched by a pipeline run unless overridden
pub const DEFAULT_CONTENT_LIMIT: usize = 1;

/// Table holding one row per produced video
pub const VIDEOS_TABLE: &str = "videos";

/// Table holding fetched content items
pub const CONTENT_TABLE: &str = "content";

/// Directory generated media is written to unless configured otherwise
pub const DEFAULT_OUTPUT_DIR: &str = "output";
