//! Reel - Entry Point
//!
//! Binary entry point for the `reel` command line.

// Force-link reel-providers to ensure linkme registrations are included
extern crate reel_providers;

use clap::Parser;
use reel::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}
