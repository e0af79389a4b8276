//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `reel run` | Run the pipeline once and print which providers served it |
//! | `reel providers [CAPABILITY]` | List registered providers |
//! | `reel chain <CAPABILITY>` | Show the resolution chain from configuration |

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reel_domain::value_objects::CapabilityName;
use reel_infrastructure::config::ConfigLoader;
use reel_infrastructure::di::{describe_chain, init_app};
use reel_infrastructure::logging::init_logging;

use crate::render;

/// Command line interface for Reel
#[derive(Parser, Debug)]
#[command(name = "reel")]
#[command(about = "Reel - short-form video pipeline with provider fallback")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the pipeline once
    Run {
        /// Content items to fetch (the first one is used)
        #[arg(long)]
        limit: Option<usize>,

        /// Narration style, e.g. hinglish or english
        #[arg(long)]
        style: Option<String>,

        /// Upload title (defaults to the content title)
        #[arg(long)]
        title: Option<String>,

        /// Background image or video for the assembled video
        #[arg(long)]
        background: Option<PathBuf>,

        /// Upload tag; repeat for several
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// List registered providers
    Providers {
        /// Restrict the listing to one capability
        capability: Option<CapabilityName>,
    },

    /// Show the resolution chain of a capability
    Chain {
        /// Capability to inspect
        capability: CapabilityName,
    },
}

/// Execute `cli`, printing results to stdout
pub async fn run(cli: Cli) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let context = init_app(config).context("Failed to initialize application")?;

    match cli.command {
        Command::Run {
            limit,
            style,
            title,
            background,
            tags,
        } => {
            let mut request = context.pipeline_request();
            if let Some(limit) = limit {
                request.limit = limit.max(1);
            }
            if let Some(style) = style {
                request.style = style;
            }
            request.title = title;
            request.background = background;
            request.tags = tags;

            let report = context
                .pipeline()
                .run(&request)
                .await
                .context("Pipeline run failed")?;
            print!("{}", render::report(&report));
        }
        Command::Providers { capability } => {
            print!(
                "{}",
                render::providers(&context.available_providers(), capability)
            );
        }
        Command::Chain { capability } => {
            let entries = describe_chain(context.resolver(), capability)?;
            print!("{}", render::chain(capability, &entries));
        }
    }
    Ok(())
}
