//! Text helpers shared by adapters

use std::path::{Path, PathBuf};

use reel_domain::constants::NARRATION_WORDS_PER_MINUTE;
use sha2::{Digest, Sha256};

/// First eight hex characters of the SHA-256 of `text`
///
/// Used to derive stable output file names from their content.
pub fn short_hash(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    hex::encode(digest)[..8].to_string()
}

/// Estimated narration length of `text` in seconds
#[allow(clippy::cast_precision_loss)]
pub fn estimate_narration_secs(text: &str) -> f64 {
    let words = text.split_whitespace().count();
    words as f64 / NARRATION_WORDS_PER_MINUTE * 60.0
}

/// At most `max` characters of `text`
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Collapse line breaks and repeated whitespace into single spaces
pub fn flatten_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `<output_dir>/<subdir>/<prefix>_<hash>.<ext>` for content `text`
pub fn output_file(output_dir: &Path, subdir: &str, prefix: &str, text: &str, ext: &str) -> PathBuf {
    output_dir
        .join(subdir)
        .join(format!("{prefix}_{}.{ext}", short_hash(text)))
}

/// Split `text` into chunks of at most `max` characters on word boundaries
///
/// A single word longer than `max` is split mid-word. A `max` of zero is
/// treated as one.
pub fn chunk_words(text: &str, max: usize) -> Vec<String> {
    let max = max.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.chars().count() > max {
            let head: String = word.chars().take(max).collect();
            word = word.chars().skip(max).collect();
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            chunks.push(head);
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
