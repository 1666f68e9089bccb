// Declare modules
pub mod cli;
pub mod config;
pub mod encoder;
pub mod html;
pub mod models;
pub mod naming;
pub mod paths;
pub mod runner;
pub mod scanner;

use anyhow::Result;
use clap::Parser;

use self::cli::{Cli, Command};
use self::config::resolve_config;
use self::encoder::{preflight, Encoder};
use self::models::{RunConfiguration, RunSummary};
use self::paths::{best_effort, create_directory, verify_path};
use self::runner::{CommandRunner, SystemRunner};
use self::scanner::{FormatFilter, Scanner};

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let Cli { command } = Cli::parse();
    let Command::Batch(args) = command;

    // 2. Resolve Configuration
    let config = resolve_config(args);

    // 3. Encode
    let summary = run_batch(&config, &SystemRunner)?;
    log::info!(
        "Processed {} file(s): {} command(s), {} executed, {} index page(s)",
        summary.files,
        summary.commands,
        summary.executed,
        summary.index_pages
    );

    Ok(())
}

/// Runs one batch against `runner`. Only a missing encoder binary is fatal.
pub fn run_batch<R: CommandRunner>(config: &RunConfiguration, runner: &R) -> Result<RunSummary> {
    // 1. Resolve paths
    if let Err(err) = verify_path(&config.source) {
        log::warn!("⚠️ {}", err);
    }
    best_effort(
        "Creating destination",
        create_directory(&config.destination, config.force),
    );

    // 2. Check for encoders
    preflight(runner)?;

    // 3. Scan Directory
    let filter = FormatFilter::new(&config.formats)?;
    let files = Scanner::new(config.source.clone(), filter).discover();
    if files.is_empty() {
        log::warn!("⚠️ No video files matching '{}' found.", config.formats);
    } else {
        log::info!("Found {} video file(s)", files.len());
    }

    // 4. Encode each file
    let summary = Encoder::new(config, runner).encode_all(&files);

    println!("Encode video files within path: {}", config.source.display());

    Ok(summary)
}
