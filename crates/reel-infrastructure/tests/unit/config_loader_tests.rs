//! Configuration Loader Tests

use std::fs;

use reel_domain::error::Error;
use reel_domain::value_objects::{CapabilityConfig, CapabilityName, FallbackSpec};
use reel_infrastructure::config::{ConfigBuilder, ConfigLoader, validate_app_config};
use reel_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert_eq!(config.content.provider, "reddit");
    assert_eq!(config.upload.provider, "none");
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_toml_file_overrides_selection() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("reel.toml");
    fs::write(
        &path,
        r#"
[ai]
provider = "openai_direct"
fallback = ["groq", "huggingface"]

[ai.providers.groq]
model = "llama-3.1-8b-instant"

[tts]
provider = "elevenlabs"
fallback = "gtts"

[output]
dir = "/tmp/reel-out"
"#,
    )
    .unwrap();

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(config.ai.provider, "openai_direct");
    assert_eq!(
        config.ai.fallback.as_ref().map(FallbackSpec::names),
        Some(vec!["groq", "huggingface"])
    );
    assert_eq!(
        config.ai.settings_for("groq").model.as_deref(),
        Some("llama-3.1-8b-instant")
    );
    assert_eq!(config.tts.fallback, Some(FallbackSpec::One("gtts".into())));
    assert_eq!(config.output.dir.to_str(), Some("/tmp/reel-out"));
    // Untouched sections keep their defaults
    assert_eq!(config.content.fallback, Some(FallbackSpec::One("quotes".into())));
}

#[test]
fn test_empty_primary_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("reel.toml");
    fs::write(&path, "[video]\nprovider = \"  \"\n").unwrap();

    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("video"));
}

#[test]
fn test_zero_content_limit_is_rejected() {
    let mut config = ConfigBuilder::new().build();
    config.app.content_limit = 0;
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_blank_name_in_fallback_list_is_rejected() {
    let config = ConfigBuilder::new()
        .with_capability(
            CapabilityName::Database,
            CapabilityConfig::new("sqlite").with_fallback(vec!["memory", ""]),
        )
        .build();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_output_dir(temp_dir.path().join("out"))
        .with_capability(
            CapabilityName::Database,
            CapabilityConfig::new("memory").with_fallback("sqlite"),
        )
        .build();

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&original, &path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.database, original.database);
    assert_eq!(loaded.output.dir, original.output.dir);
}
