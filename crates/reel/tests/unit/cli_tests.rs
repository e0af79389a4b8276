//! Command Line Parsing Tests

use std::path::PathBuf;

use clap::Parser;
use reel::domain::CapabilityName;
use reel::{Cli, Command};

#[test]
fn test_run_with_overrides() {
    let cli = Cli::try_parse_from([
        "reel", "--config", "custom.toml", "run", "--limit", "5", "--style", "english", "--tag",
        "shorts", "--tag", "india",
    ])
    .unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    assert_eq!(
        cli.command,
        Command::Run {
            limit: Some(5),
            style: Some("english".into()),
            title: None,
            background: None,
            tags: vec!["shorts".into(), "india".into()],
        }
    );
}

#[test]
fn test_capability_arguments_parse() {
    let cli = Cli::try_parse_from(["reel", "chain", "tts"]).unwrap();
    assert_eq!(
        cli.command,
        Command::Chain {
            capability: CapabilityName::Tts
        }
    );

    let cli = Cli::try_parse_from(["reel", "providers"]).unwrap();
    assert_eq!(cli.command, Command::Providers { capability: None });
}

#[test]
fn test_unknown_capability_is_rejected() {
    assert!(Cli::try_parse_from(["reel", "chain", "music"]).is_err());
}

#[test]
fn test_config_flag_after_subcommand() {
    let cli = Cli::try_parse_from(["reel", "providers", "--config", "reel.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("reel.toml")));
}
