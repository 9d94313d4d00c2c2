//! # Labyrinth
//!
//! Runs the maze enemy controller against a level without a renderer and
//! prints a JSON report of the run.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use labyrinth_engine::{load_map, SimConfig, Simulation, CONFIG_FILE};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Headless maze enemy simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Level file (overrides the configuration)
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Frames to simulate (overrides the configuration)
    #[arg(short, long)]
    frames: Option<u32>,

    /// RNG seed (overrides the configuration)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the effective configuration to this file and exit
    #[arg(long)]
    write_config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point.
fn main() -> Result<()> {
    let args = Args::parse();

    let directive = if args.verbose {
        "labyrinth=debug"
    } else {
        "labyrinth=info"
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    info!("Labyrinth starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut config = SimConfig::load_from(&args.config);
    if args.map.is_some() {
        config.map_path = args.map;
    }
    if let Some(frames) = args.frames {
        config.frames = frames;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate();

    if let Some(path) = args.write_config {
        config
            .save_to(&path)
            .with_context(|| format!("writing config to {}", path.display()))?;
        return Ok(());
    }

    let map = load_map(config.map_path.as_deref()).context("loading level")?;
    let report = Simulation::new(config, map).run();
    println!("{}", serde_json::to_string_pretty(&report)?);

    info!("Labyrinth shutdown complete");
    Ok(())
}
